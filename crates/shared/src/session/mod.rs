use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Name of the cookie holding the client's opaque session token.
pub const SESSION_COOKIE: &str = "session_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// One-time status message: written by a POST branch, taken (and thereby
/// cleared) by the next rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i32,
    pub user_email: String,
    flash: Option<FlashMessage>,
}

/// Server-side session store keyed by the token the client holds in its
/// cookie. Entries live for the login-to-logout window.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh identifier for a just-authenticated user. Any previous
    /// session entry is discarded first, so a token fixed before login never
    /// survives it.
    pub async fn rotate(&self, previous: Option<Uuid>, user_id: i32, user_email: &str) -> Uuid {
        let token = Uuid::new_v4();

        let mut sessions = self.sessions.write().await;

        if let Some(previous) = previous {
            sessions.remove(&previous);
        }

        sessions.insert(
            token,
            Session {
                user_id,
                user_email: user_email.to_string(),
                flash: None,
            },
        );

        debug!("Session created for user {user_id}");

        token
    }

    pub async fn get(&self, token: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Idempotent: destroying an absent session is not an error.
    pub async fn destroy(&self, token: &Uuid) {
        self.sessions.write().await.remove(token);
    }

    pub async fn set_flash(&self, token: &Uuid, flash: FlashMessage) {
        if let Some(session) = self.sessions.write().await.get_mut(token) {
            session.flash = Some(flash);
        }
    }

    /// Read-once: returns the pending flash and clears it in the same step.
    pub async fn take_flash(&self, token: &Uuid) -> Option<FlashMessage> {
        self.sessions
            .write()
            .await
            .get_mut(token)
            .and_then(|session| session.flash.take())
    }
}
