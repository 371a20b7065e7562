//! Chat widget HTML embedding.
//!
//! The widget is a single self-contained HTML file with all CSS and
//! JavaScript inlined, embedded at compile time via `include_str!` so the
//! binary has no external file dependencies at runtime.

/// The complete self-contained chat widget HTML.
///
/// Served from the `/ui` endpoint. On load it opens a chat session via
/// `POST /chat/sessions`, renders the opening greeting, and then relays
/// visitor messages through `POST /chat/message`. The typing indicator
/// honors the `typing_delay_ms` hint returned when the session is
/// created; the delay is purely client-side.
pub const CHAT_WIDGET_HTML: &str = include_str!("../assets/widget.html");
