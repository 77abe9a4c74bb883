//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages, the form auth flow and the JSON API share one Axum router. The
//! route guard wraps all of it; static files are served from `STATIC_DIR`
//! under `/static` and skip the guard by path.

pub mod guard;
pub mod pages;
pub mod reviews;
pub mod session;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/auth", get(pages::auth_form).post(pages::auth_submit))
        .route("/auth/sign-out", post(pages::sign_out))
        .route("/dashboard", get(pages::dashboard))
        .route("/search", get(pages::search))
        .route("/review", get(pages::review))
        .route("/restaurant", get(pages::restaurant_index))
        .route("/restaurant/{name}", get(pages::restaurant))
        .route("/api/auth/session", post(session::create_session).delete(session::delete_session))
        .route("/api/auth/me", get(session::me))
        .route("/api/reviews", get(reviews::list))
        .route("/healthz", get(healthz))
        .nest_service("/static", static_dir)
        .layer(middleware::from_fn_with_state(state.clone(), guard::route_guard))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
