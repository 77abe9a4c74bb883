//! Sign-in, sign-up and sign-out orchestration.
//!
//! Route handlers call into here; this module talks to the identity provider,
//! writes the session table and walks the lifecycle state machine. Provider
//! failures come back as [`AuthError`], already split into the two cases the
//! UI distinguishes.

use tracing::{debug, info, warn};

use crate::identity::{IdentityError, ProviderSession, User, credential_message};
use crate::services::lifecycle::{AuthEvent, SessionPhase};
use crate::services::session::Session;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Bad email/password or rejected id token. Recoverable by retrying.
    #[error("credential rejected ({code}): {message}")]
    Credential { code: String, message: &'static str },

    /// Provider unreachable or failing. Recoverable by retrying later.
    #[error("identity provider unavailable: {0}")]
    Network(IdentityError),
}

impl AuthError {
    /// Text shown inline on the page.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Credential { message, .. } => *message,
            Self::Network(_) => "Could not reach the sign-in service. Please try again.",
        }
    }
}

impl From<IdentityError> for AuthError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Credential { code } => {
                let message = credential_message(&code);
                Self::Credential { code, message }
            }
            other => Self::Network(other),
        }
    }
}

/// Log the lifecycle transition `event` causes from `phase`.
///
/// Returns the phase reached, or `phase` unchanged for an impossible pairing.
pub(crate) fn advance(phase: SessionPhase, event: AuthEvent) -> SessionPhase {
    match phase.next(event) {
        Ok(next) => {
            debug!(from = %phase, to = %next, ?event, "session transition");
            next
        }
        Err(e) => {
            warn!(error = %e, "unexpected session transition");
            phase
        }
    }
}

/// Turn a provider result into a stored session.
async fn establish(
    state: &AppState,
    phase: SessionPhase,
    result: Result<User, IdentityError>,
) -> Result<Session, AuthError> {
    match result {
        Ok(user) => {
            let session = state.sessions.create(&user).await;
            let next = advance(phase, AuthEvent::ProviderSucceeded);
            info!(email = %user.email, authenticated = next.is_authenticated(), "session established");
            Ok(session)
        }
        Err(e) => {
            advance(phase, AuthEvent::ProviderFailed);
            let err = AuthError::from(e);
            match &err {
                AuthError::Credential { code, .. } => info!(%code, "provider rejected credentials"),
                AuthError::Network(e) => warn!(error = %e, "identity provider call failed"),
            }
            Err(err)
        }
    }
}

fn user_of(result: Result<ProviderSession, IdentityError>) -> Result<User, IdentityError> {
    result.map(|session| session.user)
}

/// Sign in with email and password and store a session.
pub async fn sign_in(state: &AppState, email: &str, password: &str) -> Result<Session, AuthError> {
    let phase = advance(SessionPhase::Anonymous, AuthEvent::Submit);
    let result = state.identity.sign_in(email, password).await;
    establish(state, phase, user_of(result)).await
}

/// Register a new account, then sign it in.
pub async fn sign_up(state: &AppState, email: &str, password: &str) -> Result<Session, AuthError> {
    let phase = advance(SessionPhase::Anonymous, AuthEvent::Submit);
    let result = state.identity.sign_up(email, password).await;
    establish(state, phase, user_of(result)).await
}

/// Verify a provider id token obtained elsewhere and store a session for it.
pub async fn establish_from_id_token(state: &AppState, id_token: &str) -> Result<Session, AuthError> {
    let phase = advance(SessionPhase::Anonymous, AuthEvent::Submit);
    let result = state.identity.current_user(id_token).await;
    establish(state, phase, result).await
}

/// Destroy the session behind `token` (if any) and notify the provider.
///
/// Never fails: a provider error is logged and the local session is gone
/// regardless. Returns whether a session was destroyed.
pub async fn sign_out(state: &AppState, token: Option<&str>) -> bool {
    let destroyed = match token {
        Some(token) => state.sessions.destroy(token).await,
        None => false,
    };
    let from = if destroyed { SessionPhase::Authenticated } else { SessionPhase::Anonymous };
    advance(from, AuthEvent::SignOut);

    if let Err(e) = state.identity.sign_out().await {
        warn!(error = %e, "provider sign-out failed");
    }
    destroyed
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
