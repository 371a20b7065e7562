pub mod config;
pub mod error;

pub use config::CrumbConfig;
pub use error::{CrumbError, Result};
