//! Embedded chat widget for the MiniBiscos site.
//!
//! Provides the self-contained HTML page served at `/ui`, embedded at
//! compile time via `include_str!`. The file contains all CSS and
//! JavaScript inline; no build step or external assets are required.

pub mod widget;

pub use widget::CHAT_WIDGET_HTML;
