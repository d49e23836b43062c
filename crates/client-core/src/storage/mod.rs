//! Durable client-local key/value storage and its cross-tab change feed.
//!
//! A store is shared by every tab of one browser profile. Writes made by one
//! tab are announced to the other tabs as [`StorageEvent`]s; the writing tab
//! never sees its own changes on its subscriptions.

#[cfg(feature = "web")]
mod browser;
mod memory;

use std::{
    pin::Pin, task::{Context, Poll}
};

#[cfg(feature = "web")]
pub use browser::{BrowserStorage, StorageType};
use futures::{Stream, channel::mpsc::UnboundedReceiver};
pub use memory::{MemoryProfile, MemoryStore};
use serde::{Serialize, de::DeserializeOwned};

pub use crate::error::StorageError;

/// Change notification delivered to the other instances sharing a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageEvent {
    /// Changed key; `None` when the whole store was cleared.
    pub key: Option<String>,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl StorageEvent {
    pub fn new(key: impl Into<String>, old_value: Option<String>, new_value: Option<String>) -> Self {
        Self {
            key: Some(key.into()),
            old_value,
            new_value,
        }
    }

    pub fn cleared() -> Self {
        Self {
            key: None,
            old_value: None,
            new_value: None,
        }
    }

    pub fn is_key(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// New value, treating an empty string like a removal.
    pub fn new_value(&self) -> Option<&str> {
        self.new_value.as_deref().filter(|value| !value.is_empty())
    }
}

/// A listener on the store's change feed. Dropping it detaches the listener.
pub struct Subscription {
    events: UnboundedReceiver<StorageEvent>,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(events: UnboundedReceiver<StorageEvent>) -> Self {
        Self { events, detach: None }
    }

    /// Run `detach` when the subscription is dropped.
    pub fn with_detach(mut self, detach: impl FnOnce() + 'static) -> Self {
        self.detach = Some(Box::new(detach));
        self
    }

    /// Next already-delivered event, without waiting.
    pub fn try_next(&mut self) -> Option<StorageEvent> {
        self.events.try_next().ok().flatten()
    }
}

impl Stream for Subscription {
    type Item = StorageEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.events).poll_next(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Persistent string key/value store scoped to one browser profile.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Listen for changes made by other instances.
    fn subscribe(&self) -> Subscription;

    /// Get and deserialize a JSON value; unreadable or malformed values are
    /// logged and reported as absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T>
    where
        Self: Sized,
    {
        let raw = match self.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read storage entry");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to parse JSON from storage entry");
                None
            }
        }
    }

    /// Serialize and set a JSON value.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }
}
