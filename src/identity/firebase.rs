//! Firebase Identity Toolkit REST client.
//!
//! Thin HTTP wrapper for `accounts:signInWithPassword`, `accounts:signUp` and
//! `accounts:lookup`. Pure parsing in `parse_*` for testability.

use serde::{Deserialize, Serialize};

use super::{IdentityError, IdentityProvider, ProviderSession, User, is_credential_code};
use crate::config::FirebaseConfig;

// =============================================================================
// CLIENT
// =============================================================================

pub struct FirebaseClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FirebaseClient {
    /// Build a client. No request timeouts are set; reqwest defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &FirebaseConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{method}?key={}", self.base_url, self.api_key)
    }

    /// POST a JSON body and return the raw success body.
    async fn post<B: Serialize + Sync>(&self, method: &str, body: &B) -> Result<String, IdentityError> {
        let response = self
            .http
            .post(self.endpoint(method))
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(parse_error(status, text));
        }
        Ok(text)
    }

    async fn password_call(&self, method: &str, email: &str, password: &str) -> Result<ProviderSession, IdentityError> {
        let body = PasswordRequest { email, password, return_secure_token: true };
        let text = self.post(method, &body).await?;
        parse_password_response(&text)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FirebaseClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityError> {
        self.password_call("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderSession, IdentityError> {
        self.password_call("signUp", email, password).await
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        // Password sessions have no REST revocation without admin credentials;
        // the id token simply ages out.
        tracing::debug!("provider sign-out is local only");
        Ok(())
    }

    async fn current_user(&self, id_token: &str) -> Result<User, IdentityError> {
        let text = self.post("lookup", &LookupRequest { id_token }).await?;
        parse_lookup_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    id_token: String,
    #[serde(default)]
    email: String,
    local_id: String,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_password_response(json: &str) -> Result<ProviderSession, IdentityError> {
    let api: PasswordResponse = serde_json::from_str(json).map_err(|e| IdentityError::Parse(e.to_string()))?;
    Ok(ProviderSession { id_token: api.id_token, user: User { email: api.email, provider_id: api.local_id } })
}

fn parse_lookup_response(json: &str) -> Result<User, IdentityError> {
    let api: LookupResponse = serde_json::from_str(json).map_err(|e| IdentityError::Parse(e.to_string()))?;
    let user = api
        .users
        .into_iter()
        .next()
        .ok_or_else(|| IdentityError::Credential { code: "USER_NOT_FOUND".into() })?;
    Ok(User { email: user.email.unwrap_or_default(), provider_id: user.local_id })
}

/// Leading error code of a provider message: `"WEAK_PASSWORD : Password
/// should be at least 6 characters"` yields `"WEAK_PASSWORD"`.
fn error_code(message: &str) -> &str {
    message.split(" : ").next().unwrap_or(message).trim()
}

/// Classify a non-2xx response.
fn parse_error(status: u16, body: String) -> IdentityError {
    let code = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .map(|envelope| error_code(&envelope.error.message).to_owned());

    match code {
        Some(code) if is_credential_code(&code) => IdentityError::Credential { code },
        _ => IdentityError::Response { status, body },
    }
}

#[cfg(test)]
#[path = "firebase_test.rs"]
mod tests;
