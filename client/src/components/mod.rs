//! Reusable UI primitives.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of their props. They hold no state and never
//! talk to the server; pages wire them to forms and routes.

pub mod button;
pub mod image;
pub mod input;
pub mod link;
pub mod profile;
pub mod review;
pub mod sign_out_button;

pub use button::{Button, ButtonType};
pub use image::Image;
pub use input::{Input, InputType};
pub use link::{Link, LinkTarget};
pub use profile::Profile;
pub use review::Review;
pub use sign_out_button::SignOutButton;
