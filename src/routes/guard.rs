//! Route guard middleware.
//!
//! DESIGN
//! ======
//! Every non-asset request passes through [`route_guard`]. The decision is a
//! pure function of the route class and whether the session cookie verifies:
//!
//! | route     | valid session         | no/invalid session  |
//! |-----------|-----------------------|---------------------|
//! | login     | redirect to dashboard | allow               |
//! | protected | allow                 | redirect to login   |
//! | public    | allow                 | allow               |
//!
//! Redirect targets are themselves classified so that neither redirect can
//! bounce back: the dashboard is only reached with a valid session, and the
//! login route is only reached without one.
//!
//! The guard only reads the session table. A verified session is attached to
//! the request extensions for handlers.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use crate::routes::session::session_token;
use crate::services::auth::advance;
use crate::services::lifecycle::{AuthEvent, SessionPhase};
use crate::services::session::SessionVerificationError;
use crate::state::AppState;

pub const LOGIN_PATH: &str = client::pages::auth::AUTH_PATH;
pub const DASHBOARD_PATH: &str = "/dashboard";

const IMAGE_EXTENSIONS: &[&str] = &[".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// The sign-in/sign-up route.
    Login,
    /// Requires a valid session.
    Protected,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

impl GuardDecision {
    /// Where this decision sends the browser, if anywhere.
    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToDashboard => Some(DASHBOARD_PATH),
        }
    }
}

/// Classify a request path.
#[must_use]
pub fn classify(path: &str) -> RouteAccess {
    let trimmed = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    if trimmed == LOGIN_PATH {
        RouteAccess::Login
    } else if trimmed == DASHBOARD_PATH || trimmed.starts_with("/dashboard/") {
        RouteAccess::Protected
    } else {
        RouteAccess::Public
    }
}

#[must_use]
pub fn decide(access: RouteAccess, has_valid_session: bool) -> GuardDecision {
    match (access, has_valid_session) {
        (RouteAccess::Login, true) => GuardDecision::RedirectToDashboard,
        (RouteAccess::Protected, false) => GuardDecision::RedirectToLogin,
        _ => GuardDecision::Allow,
    }
}

/// Whether the guard runs for `path`. Static assets and images skip it.
#[must_use]
pub fn is_guarded_path(path: &str) -> bool {
    if path.starts_with("/static/") || path == "/favicon.ico" {
        return false;
    }
    let lower = path.to_ascii_lowercase();
    !IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Axum middleware applying [`decide`] to every guarded request.
pub async fn route_guard(State(state): State<AppState>, jar: CookieJar, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if !is_guarded_path(&path) {
        return next.run(req).await;
    }

    let access = classify(&path);
    let verified = state.sessions.verify(session_token(&jar)).await;
    let session = match verified {
        Ok(session) => Some(session),
        Err(e) => {
            if e == SessionVerificationError::Expired {
                advance(SessionPhase::Authenticated, AuthEvent::VerificationFailed);
            }
            if e != SessionVerificationError::Missing {
                debug!(%path, reason = %e, "session cookie rejected");
            }
            None
        }
    };

    let decision = decide(access, session.is_some());
    if let Some(target) = decision.target() {
        debug!(%path, ?access, to = target, "guard redirect");
        return Redirect::to(target).into_response();
    }

    if let Some(session) = session {
        req.extensions_mut().insert(session);
    }
    next.run(req).await
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
