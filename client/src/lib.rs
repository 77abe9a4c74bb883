//! Server-rendered UI for Restaurant Notes.
//!
//! ARCHITECTURE
//! ============
//! `components` holds stateless props-to-markup primitives, `pages` composes
//! them into route-level screens, and `shell` wraps a page in the HTML
//! document. Everything renders to strings on the server; there is no
//! hydration step.

pub mod components;
pub mod pages;
pub mod shell;
pub mod types;
