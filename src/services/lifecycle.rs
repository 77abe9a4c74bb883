//! Session lifecycle state machine.
//!
//! ```text
//! Anonymous --submit--> Authenticating --ok--> Authenticated
//!     ^                      |                   |        |
//!     +------- failed -------+             sign-out   verify failed
//!     |                                          v        v
//!     +------------------ settle ---------- SignedOut  Expired
//! ```
//!
//! `Expired` and `SignedOut` differ only for logging: both settle to
//! `Anonymous` and accept a fresh credential submission.
//!
//! No phase is stored per session. The auth service and the route guard run
//! each step through [`SessionPhase::next`] to log the transition it
//! represents; a `LifecycleError` there means a caller paired a phase and
//! event that cannot follow each other.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    Authenticated,
    Expired,
    SignedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// Credentials were submitted to the provider.
    Submit,
    /// The provider accepted the credentials; a session was stored.
    ProviderSucceeded,
    /// The provider rejected the credentials or could not be reached.
    ProviderFailed,
    /// The user explicitly signed out.
    SignOut,
    /// A guard check found the session missing, unknown or expired.
    VerificationFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid session transition: {event:?} while {from}")]
pub struct LifecycleError {
    pub from: SessionPhase,
    pub event: AuthEvent,
}

impl SessionPhase {
    /// Apply `event`, returning the next phase.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError`] when `event` cannot happen in this phase.
    pub fn next(self, event: AuthEvent) -> Result<Self, LifecycleError> {
        use AuthEvent as E;
        use SessionPhase as P;

        match (self.settle(), event) {
            (P::Anonymous, E::Submit) => Ok(P::Authenticating),
            (P::Authenticating, E::ProviderSucceeded) => Ok(P::Authenticated),
            (P::Authenticating, E::ProviderFailed) => Ok(P::Anonymous),
            (P::Authenticated, E::SignOut) => Ok(P::SignedOut),
            (P::Authenticated, E::VerificationFailed) => Ok(P::Expired),
            // Already logged out: signing out again is a no-op.
            (P::Anonymous, E::SignOut | E::VerificationFailed) => Ok(P::Anonymous),
            _ => Err(LifecycleError { from: self, event }),
        }
    }

    /// Collapse the terminal phases into `Anonymous`.
    #[must_use]
    pub fn settle(self) -> Self {
        match self {
            Self::Expired | Self::SignedOut => Self::Anonymous,
            other => other,
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self == Self::Authenticated
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Anonymous => "anonymous",
            Self::Authenticating => "authenticating",
            Self::Authenticated => "authenticated",
            Self::Expired => "expired",
            Self::SignedOut => "signed_out",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod tests;
