pub mod auth;
pub mod lifecycle;
pub mod reviews;
pub mod session;
pub mod sweeper;
