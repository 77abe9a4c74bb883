//! Server-rendered pages and the form-based auth flow.
//!
//! Each handler gathers what its page needs, renders the `client` component
//! to a string and wraps it in the shared document shell.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use client::pages::auth::{AuthMode, AuthPage, SIGNED_OUT_HREF, status_message, validate_credentials};
use client::pages::dashboard::DashboardPage;
use client::pages::home::HomePage;
use client::pages::restaurant::RestaurantPage;
use client::pages::review::ReviewPage;
use client::pages::search::SearchPage;
use client::shell::render_document;
use leptos::prelude::*;
use serde::Deserialize;
use tracing::warn;

use crate::routes::guard::DASHBOARD_PATH;
use crate::routes::session::{AuthUser, add_session_cookie, remove_session_cookie, session_token};
use crate::services::auth::{self as auth_svc, AuthError};
use crate::state::AppState;

fn page(title: &str, body: impl IntoView + 'static) -> Html<String> {
    Html(render_document(title, body))
}

/// `GET /`
pub async fn home() -> Html<String> {
    page("Home", view! { <HomePage /> })
}

#[derive(Default, Deserialize)]
pub struct AuthQuery {
    #[serde(default)]
    mode: AuthMode,
    #[serde(default)]
    status: Option<String>,
}

/// `GET /auth`: sign-in form, or sign-up with `?mode=sign-up`.
pub async fn auth_form(query: Result<Query<AuthQuery>, QueryRejection>) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let message = query.status.as_deref().and_then(status_message).map(str::to_owned);
    page(query.mode.submit_label(), view! { <AuthPage mode=query.mode message=message /> })
}

fn auth_page(mode: AuthMode, email: String, error: Option<String>) -> Html<String> {
    page(mode.submit_label(), view! { <AuthPage mode=mode email=email error=error /> })
}

#[derive(Deserialize)]
pub struct AuthForm {
    #[serde(default)]
    mode: AuthMode,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// `POST /auth`: submit the sign-in or sign-up form.
pub async fn auth_submit(State(state): State<AppState>, jar: CookieJar, Form(form): Form<AuthForm>) -> Response {
    let mode = form.mode;
    let (email, password) = match validate_credentials(&form.email, &form.password) {
        Ok(credentials) => credentials,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, auth_page(mode, form.email.trim().to_owned(), Some(message.into())))
                .into_response();
        }
    };

    let result = match mode {
        AuthMode::SignIn => auth_svc::sign_in(&state, &email, &password).await,
        AuthMode::SignUp => auth_svc::sign_up(&state, &email, &password).await,
    };

    match result {
        Ok(session) => (add_session_cookie(&state, jar, &session), Redirect::to(DASHBOARD_PATH)).into_response(),
        Err(e) => {
            let status = match e {
                AuthError::Credential { .. } => StatusCode::UNAUTHORIZED,
                AuthError::Network(_) => StatusCode::BAD_GATEWAY,
            };
            (status, auth_page(mode, email, Some(e.user_message().to_owned()))).into_response()
        }
    }
}

/// `POST /auth/sign-out`: lands on the login route with a signed-out notice.
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    auth_svc::sign_out(&state, session_token(&jar)).await;
    (remove_session_cookie(&state, jar), Redirect::to(SIGNED_OUT_HREF))
}

/// `GET /dashboard`
pub async fn dashboard(auth: AuthUser) -> Html<String> {
    let user = auth.user();
    page("Dashboard", view! { <DashboardPage user=user /> })
}

#[derive(Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// `GET /search?q=`
pub async fn search(State(state): State<AppState>, query: Result<Query<SearchQuery>, QueryRejection>) -> Html<String> {
    let query = query.map(|Query(q)| q.q).unwrap_or_default();
    let results = state.reviews.search(&query).await.unwrap_or_else(|e| {
        warn!(error = %e, "restaurant search failed");
        Vec::new()
    });
    page("Search", view! { <SearchPage query=query results=results /> })
}

/// `GET /review`
pub async fn review() -> Html<String> {
    page("Review", view! { <ReviewPage /> })
}

/// `GET /restaurant` redirects to search; there is no index.
pub async fn restaurant_index() -> Redirect {
    Redirect::to("/search")
}

/// `GET /restaurant/{name}`
pub async fn restaurant(State(state): State<AppState>, Path(name): Path<String>) -> Html<String> {
    let reviews = state.reviews.reviews_for(&name).await.unwrap_or_else(|e| {
        warn!(error = %e, restaurant = %name, "review lookup failed");
        Vec::new()
    });
    let title = name.clone();
    page(&title, view! { <RestaurantPage name=name reviews=reviews /> })
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
