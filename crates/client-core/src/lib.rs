//! Client logic for the linearGen front end that does not depend on the UI
//! toolkit: the backend client, the durable store and its cross-tab feed,
//! session ownership and page background decoration.

pub mod api;
pub mod config;
pub mod decoration;
pub mod error;
pub mod session;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use config::ClientConfig;
pub use decoration::{Canvas, DecorationConfig, DecorationGuard, PageDecoration};
pub use error::{ConfigError, StorageError};
pub use session::{SessionChange, SessionStore};
pub use storage::{KeyValueStore, StorageEvent, Subscription};
