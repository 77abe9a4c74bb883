//! Session table and token management.
//!
//! ARCHITECTURE
//! ============
//! A session is an opaque random token mapped to the provider identity that
//! established it. The token is the only thing the browser holds (in the
//! `session` cookie); the identity and expiry live here.
//!
//! Verification takes the read lock and never mutates the table. Expired rows
//! stay until the sweeper removes them, so a guard check racing a sweep sees
//! either the row (and rejects it as expired) or no row at all.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use tokio::sync::RwLock;

use crate::identity::User;

/// Length in hex characters of a session token (32 random bytes).
pub const TOKEN_LEN: usize = 64;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Whether `token` has the shape `generate_token` produces.
#[must_use]
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LEN && token.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// An established session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub issued_at: OffsetDateTime,
    pub expires_at: OffsetDateTime,
    pub subject_email: String,
    pub provider_id: String,
}

impl Session {
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }

    /// The provider identity this session was created for.
    #[must_use]
    pub fn user(&self) -> User {
        User { email: self.subject_email.clone(), provider_id: self.provider_id.clone() }
    }
}

/// Why a presented session token was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionVerificationError {
    #[error("no session token presented")]
    Missing,
    #[error("session token is malformed")]
    Malformed,
    #[error("session token is unknown")]
    Unknown,
    #[error("session has expired")]
    Expired,
}

/// In-memory session table shared across handlers.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Lifetime given to new sessions (also the cookie max-age).
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session for `user`, returning it.
    pub async fn create(&self, user: &User) -> Session {
        self.create_at(user, OffsetDateTime::now_utc()).await
    }

    pub(crate) async fn create_at(&self, user: &User, now: OffsetDateTime) -> Session {
        let session = Session {
            token: generate_token(),
            issued_at: now,
            expires_at: now
                .checked_add(self.ttl)
                .unwrap_or_else(|| PrimitiveDateTime::MAX.assume_utc()),
            subject_email: user.email.clone(),
            provider_id: user.provider_id.clone(),
        };
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Check a presented token and return its session.
    pub async fn verify(&self, token: Option<&str>) -> Result<Session, SessionVerificationError> {
        self.verify_at(token, OffsetDateTime::now_utc()).await
    }

    pub(crate) async fn verify_at(
        &self,
        token: Option<&str>,
        now: OffsetDateTime,
    ) -> Result<Session, SessionVerificationError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(SessionVerificationError::Missing)?;
        if !is_well_formed(token) {
            return Err(SessionVerificationError::Malformed);
        }

        let sessions = self.sessions.read().await;
        let session = sessions
            .get(token)
            .ok_or(SessionVerificationError::Unknown)?;
        if session.is_expired_at(now) {
            return Err(SessionVerificationError::Expired);
        }
        Ok(session.clone())
    }

    /// Delete a session by token. Returns whether it existed.
    pub async fn destroy(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Drop every session expired at `now`, returning how many were removed.
    pub async fn sweep_expired(&self, now: OffsetDateTime) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
