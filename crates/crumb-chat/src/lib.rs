//! Rule-based chat assistant for the MiniBiscos site.
//!
//! Provides a static keyword knowledge base, the response resolver that
//! matches visitor messages against it, and in-memory session management
//! for the chat widget.

pub mod error;
pub mod knowledge;
pub mod resolver;
pub mod session;
pub mod types;

pub use error::ChatError;
pub use knowledge::{builtin, KeywordRule, KnowledgeBase, ResponseBucket, Topic};
pub use resolver::{resolve, resolve_with};
pub use session::{ChatService, OPENING_GREETING};
pub use types::{
    ChatMessage, HistoryResponse, MessageRequest, MessageResponse, Sender, Session,
    SessionResponse,
};
