//! Chat-specific error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the chat service.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("chat is disabled")]
    Disabled,

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),

    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("internal chat error: {0}")]
    Internal(String),
}

impl From<crumb_core::CrumbError> for ChatError {
    fn from(err: crumb_core::CrumbError) -> Self {
        ChatError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ChatError::Disabled.to_string(), "chat is disabled");
        assert_eq!(
            ChatError::EmptyMessage.to_string(),
            "message cannot be empty"
        );
        assert_eq!(
            ChatError::MessageTooLong(500).to_string(),
            "message exceeds maximum length of 500 characters"
        );
    }

    #[test]
    fn test_session_not_found_includes_id() {
        let id = Uuid::new_v4();
        let msg = ChatError::SessionNotFound(id).to_string();
        assert!(msg.contains(&id.to_string()));
    }

    #[test]
    fn test_from_core_error() {
        let core = crumb_core::CrumbError::Knowledge("bad bucket".to_string());
        let err: ChatError = core.into();
        match err {
            ChatError::Internal(msg) => assert!(msg.contains("bad bucket")),
            other => panic!("expected Internal, got {:?}", other),
        }
    }
}
