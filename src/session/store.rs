//! In-memory session store
//!
//! Holds every live session behind a single `RwLock`. Handlers never see
//! each other's sessions; all access goes through [`SessionStore::with_session`].

use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Session;
use crate::config::SessionConfig;

/// Opaque session identifier carried in the session cookie
pub type SessionId = String;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),
}

pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
    config: SessionConfig,
    max_chat_messages: usize,
}

impl SessionStore {
    pub fn new(config: SessionConfig, max_chat_messages: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
            max_chat_messages,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    /// Find the session for a cookie value, creating a fresh one when the
    /// cookie is missing or refers to a session that no longer exists or
    /// has been idle past the timeout.
    ///
    /// Returns the session id and whether it was newly created.
    pub async fn resolve(&self, cookie: Option<&str>) -> (SessionId, bool) {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = cookie {
            if let Some(session) = sessions.get_mut(id) {
                if session.last_seen().elapsed() < self.idle_timeout() {
                    session.touch();
                    return (id.to_string(), false);
                }
                tracing::debug!(session_id = %id, "Session expired");
            }
        }

        self.purge_idle(&mut sessions);
        if self.config.max_sessions > 0 && sessions.len() >= self.config.max_sessions {
            Self::evict_oldest(&mut sessions);
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(id.clone(), Session::new(id.clone(), self.max_chat_messages));

        tracing::debug!(session_id = %id, live_sessions = sessions.len(), "Session created");
        (id, true)
    }

    /// Run `f` against a session while holding the write lock
    pub async fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, StoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(f(session))
    }

    pub async fn remove(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.config.idle_timeout_mins * 60)
    }

    fn purge_idle(&self, sessions: &mut HashMap<SessionId, Session>) {
        let timeout = self.idle_timeout();
        let before = sessions.len();
        sessions.retain(|_, s| s.last_seen().elapsed() < timeout);

        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "Purged idle sessions");
        }
    }

    fn evict_oldest(sessions: &mut HashMap<SessionId, Session>) {
        let oldest = sessions
            .iter()
            .min_by_key(|(_, s)| s.last_seen())
            .map(|(id, _)| id.clone());

        if let Some(id) = oldest {
            sessions.remove(&id);
            tracing::info!(session_id = %id, "Session limit reached, evicted least recently seen");
        }
    }
}
