use thiserror::Error;

/// Errors raised by the durable client-local store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The platform store cannot be reached (no window, disabled storage).
    #[error("storage not available")]
    Unavailable,

    /// The store rejected the operation (quota exceeded, private mode).
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors raised while building the client configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid API base URL '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}
