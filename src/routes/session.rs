//! Session cookie plumbing and the JSON session API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::identity::User;
use crate::services::auth::{self as auth_svc, AuthError};
use crate::services::session::Session;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";

/// The session token presented by the browser, if any.
#[must_use]
pub fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE)
        .map(Cookie::value)
        .filter(|value| !value.is_empty())
}

/// Cookie carrying a freshly established session.
#[must_use]
pub fn session_cookie(session: &Session, ttl: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(ttl)
        .build()
}

/// Cookie that removes the session cookie from the browser.
#[must_use]
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn add_session_cookie(state: &AppState, jar: CookieJar, session: &Session) -> CookieJar {
    jar.add(session_cookie(session, state.sessions.ttl(), state.config.cookie_secure))
}

pub(crate) fn remove_session_cookie(state: &AppState, jar: CookieJar) -> CookieJar {
    jar.add(clear_session_cookie(state.config.cookie_secure))
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Verified session for the current request.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub session: Session,
}

impl AuthUser {
    #[must_use]
    pub fn user(&self) -> User {
        self.session.user()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // The guard already verified this request.
        if let Some(session) = parts.extensions.get::<Session>() {
            return Ok(Self { session: session.clone() });
        }

        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let session = app_state
            .sessions
            .verify(session_token(&jar))
            .await
            .map_err(|_| StatusCode::UNAUTHORIZED)?;
        Ok(Self { session })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionBody {
    id_token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionResponse {
    fn ok() -> Json<Self> {
        Json(Self { success: true, error: None })
    }

    fn failed(status: StatusCode, error: impl Into<String>) -> Response {
        (status, Json(Self { success: false, error: Some(error.into()) })).into_response()
    }
}

/// `POST /api/auth/session`: exchange a provider id token for a session cookie.
pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<CreateSessionBody>, JsonRejection>,
) -> Response {
    let id_token = match body {
        Ok(Json(body)) if !body.id_token.trim().is_empty() => body.id_token,
        Ok(_) => return SessionResponse::failed(StatusCode::BAD_REQUEST, "Missing idToken"),
        Err(e) => {
            tracing::debug!(error = %e, "bad session request body");
            return SessionResponse::failed(StatusCode::BAD_REQUEST, "Missing idToken");
        }
    };

    match auth_svc::establish_from_id_token(&state, id_token.trim()).await {
        Ok(session) => (add_session_cookie(&state, jar, &session), SessionResponse::ok()).into_response(),
        Err(e @ AuthError::Credential { .. }) => SessionResponse::failed(StatusCode::UNAUTHORIZED, e.user_message()),
        Err(e @ AuthError::Network(_)) => SessionResponse::failed(StatusCode::BAD_GATEWAY, e.user_message()),
    }
}

/// `DELETE /api/auth/session`: destroy the session and clear the cookie.
pub async fn delete_session(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    auth_svc::sign_out(&state, session_token(&jar)).await;
    (remove_session_cookie(&state, jar), SessionResponse::ok())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user: User,
    /// Unix seconds.
    pub expires_at: i64,
}

/// `GET /api/auth/me`: return the signed-in user.
pub async fn me(auth: AuthUser) -> Json<MeResponse> {
    Json(MeResponse { user: auth.user(), expires_at: auth.session.expires_at.unix_timestamp() })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
