//! In-memory chat sessions and the service facade.
//!
//! `ChatService` owns the session store and wires user messages through
//! the resolver. Sessions are process-local and expire after a configured
//! idle period; nothing is persisted.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crumb_core::config::ChatConfig;

use crate::error::{ChatError, Result};
use crate::resolver;
use crate::types::{ChatMessage, Sender, Session};

/// The assistant's opening line for a fresh session.
pub const OPENING_GREETING: &str =
    "Hello! Welcome to MiniBiscos 🍪 How can I sweeten your day today?";

/// Keyword-driven chat over in-memory sessions.
pub struct ChatService {
    config: ChatConfig,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl ChatService {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Starts a new session seeded with the opening greeting.
    pub fn create_session(&self) -> Result<(Uuid, ChatMessage)> {
        self.ensure_enabled()?;
        let mut sessions = self.lock_sessions()?;
        let (id, greeting) = seed_session(&mut sessions);
        debug!(session_id = %id, "chat session created");
        Ok((id, greeting))
    }

    /// Resolves a reply for `message` and records both sides in the
    /// session history.
    ///
    /// A missing, unknown, or expired session id starts a fresh session
    /// transparently; callers should adopt the returned id.
    pub fn handle_message(
        &self,
        session_id: Option<Uuid>,
        message: &str,
    ) -> Result<(Uuid, ChatMessage)> {
        self.ensure_enabled()?;

        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if trimmed.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        let reply_text = resolver::resolve(trimmed);

        let now = Utc::now();
        let ttl = Duration::minutes(i64::from(self.config.session_ttl_minutes));
        let mut sessions = self.lock_sessions()?;

        let id = match session_id {
            Some(id) => match sessions.get(&id) {
                Some(session) if now.signed_duration_since(session.last_active) <= ttl => id,
                Some(_) => {
                    sessions.remove(&id);
                    debug!(session_id = %id, "expired session replaced");
                    seed_session(&mut sessions).0
                }
                None => seed_session(&mut sessions).0,
            },
            None => seed_session(&mut sessions).0,
        };

        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ChatError::Internal("session vanished while handling message".to_string()))?;

        session.messages.push(ChatMessage::new(Sender::User, trimmed));
        let reply = ChatMessage::new(Sender::Assistant, reply_text);
        session.messages.push(reply.clone());
        session.last_active = now;
        debug!(session_id = %id, chars = trimmed.chars().count(), "message resolved");

        let limit = self.config.history_limit;
        if limit > 0 && session.messages.len() > limit {
            let excess = session.messages.len() - limit;
            session.messages.drain(..excess);
        }

        Ok((id, reply))
    }

    /// Returns the full message history for a session.
    pub fn history(&self, session_id: Uuid) -> Result<Vec<ChatMessage>> {
        self.ensure_enabled()?;
        let sessions = self.lock_sessions()?;
        sessions
            .get(&session_id)
            .map(|session| session.messages.clone())
            .ok_or(ChatError::SessionNotFound(session_id))
    }

    /// Ends a session, discarding its history.
    pub fn end_session(&self, session_id: Uuid) -> Result<()> {
        self.ensure_enabled()?;
        let mut sessions = self.lock_sessions()?;
        if sessions.remove(&session_id).is_none() {
            return Err(ChatError::SessionNotFound(session_id));
        }
        debug!(session_id = %session_id, "chat session ended");
        Ok(())
    }

    /// Drops sessions idle longer than the configured ttl. Returns how
    /// many were removed.
    pub fn purge_expired(&self) -> Result<usize> {
        let ttl = Duration::minutes(i64::from(self.config.session_ttl_minutes));
        let cutoff = Utc::now() - ttl;
        let mut sessions = self.lock_sessions()?;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_active > cutoff);
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed, "purged expired chat sessions");
        }
        Ok(removed)
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> Result<usize> {
        Ok(self.lock_sessions()?.len())
    }

    fn ensure_enabled(&self) -> Result<()> {
        if !self.config.enabled {
            return Err(ChatError::Disabled);
        }
        Ok(())
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| ChatError::Internal("session store lock poisoned".to_string()))
    }
}

fn seed_session(sessions: &mut HashMap<Uuid, Session>) -> (Uuid, ChatMessage) {
    let now = Utc::now();
    let greeting = ChatMessage::new(Sender::Assistant, OPENING_GREETING);
    let session = Session {
        id: Uuid::new_v4(),
        started_at: now,
        last_active: now,
        messages: vec![greeting.clone()],
    };
    let id = session.id;
    sessions.insert(id, session);
    (id, greeting)
}
