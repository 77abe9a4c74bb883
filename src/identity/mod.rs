//! Identity provider boundary.
//!
//! DESIGN
//! ======
//! The provider is a remote collaborator: sign-in, sign-up and id-token lookup
//! are opaque, possibly-failing HTTP calls. `IdentityProvider` is the seam the
//! rest of the server talks to, so tests can swap in a mock and the Firebase
//! REST binding stays isolated in `firebase`.
//!
//! Calls are never retried. A failure is classified once, here, as either a
//! credential problem (the user can fix it) or a transport/provider problem.

pub mod firebase;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub use client::types::User;

/// Result of a successful sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    /// Short-lived provider id token asserting the identity.
    pub id_token: String,
    pub user: User,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The provider rejected the credentials or token (e.g. `INVALID_PASSWORD`).
    #[error("credential rejected: {code}")]
    Credential { code: String },

    /// The HTTP request to the provider failed before a response arrived.
    #[error("provider request failed: {0}")]
    Network(String),

    /// The provider answered with a non-credential failure.
    #[error("provider response error: status {status}")]
    Response { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("provider response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Provider codes that mean "the submitted identity is not acceptable".
const CREDENTIAL_CODES: &[&str] = &[
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "USER_DISABLED",
    "EMAIL_EXISTS",
    "WEAK_PASSWORD",
    "INVALID_EMAIL",
    "MISSING_PASSWORD",
    "MISSING_EMAIL",
    "TOO_MANY_ATTEMPTS_TRY_LATER",
    "INVALID_ID_TOKEN",
    "TOKEN_EXPIRED",
    "USER_NOT_FOUND",
];

/// Whether a provider error code is a credential failure.
#[must_use]
pub fn is_credential_code(code: &str) -> bool {
    CREDENTIAL_CODES.contains(&code)
}

/// User-facing text for a credential failure code.
#[must_use]
pub fn credential_message(code: &str) -> &'static str {
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => "Invalid email or password.",
        "USER_DISABLED" => "This account has been disabled.",
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "WEAK_PASSWORD" => "Password should be at least 6 characters.",
        "INVALID_EMAIL" | "MISSING_EMAIL" => "Enter a valid email address.",
        "MISSING_PASSWORD" => "Enter your password.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later.",
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" => "Your sign-in has expired. Please sign in again.",
        _ => "Sign-in failed.",
    }
}

/// Provider-neutral async trait for the hosted identity service. Enables
/// mocking in tests.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate an existing account with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityError>;

    /// Register a new account; on success the account is signed in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityError>;

    /// Tell the provider the user signed out.
    async fn sign_out(&self) -> Result<(), IdentityError>;

    /// Resolve the user an id token belongs to, verifying it in the process.
    async fn current_user(&self, id_token: &str) -> Result<User, IdentityError>;
}
