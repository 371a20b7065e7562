//! Static product catalog for the MiniBiscos site.
//!
//! The cookie line is fixed, so products are a compile-time table with
//! query helpers for the products page and its category filter.

pub mod catalog;
pub mod types;

pub use catalog::{all, by_category, by_id, categories, featured};
pub use types::{CategoryFilter, Product, ProductCategory};
