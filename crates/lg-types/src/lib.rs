//! Shared type definitions for linearGen
//!
//! This crate contains lightweight type definitions that are shared across
//! the client, including the platform-independent core and the WASM UI.

pub mod auth;
pub mod blog;
pub mod contact;
pub mod gradient;
pub mod status;
pub mod timetable;
pub mod validation;

pub use auth::{Session, UserProfile};
pub use gradient::{Gradient, GradientDirection, HexColor};
pub use status::StatusMessage;
