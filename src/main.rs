mod config;
mod identity;
mod routes;
mod services;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::identity::firebase::FirebaseClient;
use crate::services::reviews::StaticReviews;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let identity = match FirebaseClient::new(&config.firebase) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "identity provider client init failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        base_url = %config.firebase.base_url,
        project_id = ?config.firebase.project_id,
        auth_domain = ?config.firebase.auth_domain,
        app_id = ?config.firebase.app_id,
        "identity provider configured"
    );

    // A missing or broken catalog leaves search and restaurant pages empty.
    let reviews = match &config.reviews_path {
        Some(path) => StaticReviews::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "review catalog not loaded; starting empty");
            StaticReviews::default()
        }),
        None => StaticReviews::default(),
    };
    tracing::info!(restaurants = reviews.restaurant_count(), "review catalog ready");

    let port = config.port;
    let sweep_interval_secs = config.sweep_interval_secs;
    let state = state::AppState::new(config, Arc::new(identity), Arc::new(reviews));

    let _sweeper = services::sweeper::spawn_sweeper(state.sessions.clone(), sweep_interval_secs);

    let app = routes::app(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "restaurant-notes listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
