//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives everything it shows as props; the server resolves the
//! session, calls the identity provider and fetches reviews before rendering.

pub mod auth;
pub mod dashboard;
pub mod home;
pub mod restaurant;
pub mod review;
pub mod search;
