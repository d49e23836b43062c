//! linearGen web entrypoint and common exports.
//!
//! This crate hosts the Dioxus single-page client: the gradient generator
//! and the forms that talk to the linearGen REST backend.

pub mod app;
pub mod app_root;

pub use app::{components, pages, routes};
pub use routes::Routes;
