//! Chat domain and wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// An in-memory conversation session.
///
/// Sessions live only for the lifetime of the process; nothing is
/// persisted. `last_active` drives expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

/// Body of `POST /chat/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRequest {
    /// Session to continue. Absent or unknown ids start a fresh session.
    #[serde(default)]
    pub session_id: Option<Uuid>,
    pub message: String,
}

/// Reply envelope for `POST /chat/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub session_id: Uuid,
    pub reply: ChatMessage,
}

/// Response for `POST /chat/sessions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub greeting: ChatMessage,
    /// Display hint for the widget's typing indicator. The server never
    /// sleeps on it.
    pub typing_delay_ms: u64,
}

/// Response for `GET /chat/sessions/{id}/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_serialization() {
        let json = serde_json::to_string(&Sender::User).unwrap();
        assert_eq!(json, "\"user\"");

        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");

        let rt: Sender = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(rt, Sender::Assistant);
    }

    #[test]
    fn test_chat_message_new_assigns_unique_ids() {
        let a = ChatMessage::new(Sender::User, "first");
        let b = ChatMessage::new(Sender::User, "second");
        assert_ne!(a.id, b.id);
        assert_eq!(a.sender, Sender::User);
        assert_eq!(a.text, "first");
    }

    #[test]
    fn test_chat_message_json_round_trip() {
        let msg = ChatMessage::new(Sender::Assistant, "Happy to help");
        let json = serde_json::to_string(&msg).unwrap();
        let rt: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(rt.id, msg.id);
        assert_eq!(rt.sender, msg.sender);
        assert_eq!(rt.text, msg.text);
        assert_eq!(rt.timestamp, msg.timestamp);
    }

    #[test]
    fn test_message_request_session_id_optional() {
        let req: MessageRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert!(req.session_id.is_none());
        assert_eq!(req.message, "hello");

        let id = Uuid::new_v4();
        let body = format!(r#"{{"session_id": "{}", "message": "hi"}}"#, id);
        let req: MessageRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(req.session_id, Some(id));
    }

    #[test]
    fn test_session_json_round_trip() {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            started_at: now,
            last_active: now,
            messages: vec![ChatMessage::new(Sender::Assistant, "Welcome")],
        };
        let json = serde_json::to_string(&session).unwrap();
        let rt: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(rt.id, session.id);
        assert_eq!(rt.messages.len(), 1);
        assert_eq!(rt.messages[0].text, "Welcome");
    }
}
