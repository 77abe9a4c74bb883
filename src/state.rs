//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the identity provider, the session table and the
//! review catalog. The two remote collaborators sit behind trait objects so
//! tests can swap in mocks.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::identity::IdentityProvider;
use crate::services::reviews::ReviewSource;
use crate::services::session::SessionStore;

/// Clone is required by Axum; every field is `Arc`-backed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<dyn IdentityProvider>,
    pub sessions: SessionStore,
    pub reviews: Arc<dyn ReviewSource>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, identity: Arc<dyn IdentityProvider>, reviews: Arc<dyn ReviewSource>) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self { config: Arc::new(config), identity, sessions, reviews }
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
