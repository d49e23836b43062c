use futures::channel::mpsc;
use wasm_bindgen::{JsCast, closure::Closure};

use super::{KeyValueStore, StorageError, StorageEvent, Subscription};

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions, shared by all tabs
    Local,
    /// sessionStorage - cleared when tab/window closes
    Session,
    /// No-op mode - for when storage is disabled or unavailable
    None,
}

/// Browser storage backed by `localStorage`, `sessionStorage`, or nothing.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    /// The profile-wide store used for the session.
    pub fn local() -> Self {
        Self::new(StorageType::Local)
    }

    fn backend(&self) -> Result<Option<web_sys::Storage>, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = match self.storage_type {
            StorageType::Local => window.local_storage(),
            StorageType::Session => window.session_storage(),
            StorageType::None => return Ok(None),
        }
        .map_err(|e| StorageError::Backend(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)?;

        Ok(Some(storage))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(storage) = self.backend()? else {
            return Ok(None);
        };

        storage.get_item(key).map_err(|e| {
            web_sys::console::warn_2(&format!("Failed to get item from storage: {}", key).into(), &e);
            StorageError::Backend(format!("{:?}", e))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = self.backend()? else {
            return Ok(());
        };

        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("Failed to set item in storage '{}': {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let Some(storage) = self.backend()? else {
            return Ok(());
        };

        storage
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("Failed to remove item from storage '{}': {:?}", key, e)))
    }

    /// Listen to the window's `storage` event. The browser only fires it in
    /// the tabs that did not make the change.
    fn subscribe(&self) -> Subscription {
        let (sender, events) = mpsc::unbounded();
        let subscription = Subscription::new(events);

        if self.storage_type == StorageType::None {
            return subscription;
        }
        let Some(window) = web_sys::window() else {
            return subscription;
        };

        let listener = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |event: web_sys::StorageEvent| {
            let _ = sender.unbounded_send(StorageEvent {
                key: event.key(),
                old_value: event.old_value(),
                new_value: event.new_value(),
            });
        });

        if let Err(e) = window.add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref()) {
            tracing::warn!(error = ?e, "failed to register storage listener");
            return subscription;
        }

        subscription.with_detach(move || {
            let _ = window.remove_event_listener_with_callback("storage", listener.as_ref().unchecked_ref());
        })
    }
}
