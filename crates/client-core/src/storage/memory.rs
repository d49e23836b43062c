use std::{
    collections::HashMap, sync::{Arc, Mutex, MutexGuard}
};

use futures::channel::mpsc::{self, UnboundedSender};

use super::{KeyValueStore, StorageError, StorageEvent, Subscription};

/// In-process stand-in for one browser profile's local storage.
///
/// Every [`MemoryStore`] opened from the same profile behaves like a separate
/// tab: it reads and writes the shared entries, and its subscriptions receive
/// the changes made through the other handles.
#[derive(Clone, Default)]
pub struct MemoryProfile {
    inner: Arc<Mutex<ProfileState>>,
}

#[derive(Default)]
struct ProfileState {
    entries: HashMap<String, String>,
    listeners: Vec<Listener>,
    next_tab: u64,
    failing: bool,
}

struct Listener {
    tab: u64,
    sender: UnboundedSender<StorageEvent>,
}

impl MemoryProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new tab onto this profile.
    pub fn open_tab(&self) -> MemoryStore {
        let mut state = self.lock();
        let tab = state.next_tab;
        state.next_tab += 1;
        MemoryStore {
            profile: self.clone(),
            tab,
        }
    }

    /// Current raw value of `key`, bypassing any tab.
    pub fn entry(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// Simulate a store that rejects writes (quota exceeded, private mode).
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    fn lock(&self) -> MutexGuard<'_, ProfileState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProfileState {
    fn broadcast(&mut self, origin: u64, event: StorageEvent) {
        // Closed receivers are pruned as they are discovered.
        self.listeners.retain(|listener| {
            if listener.tab == origin {
                return !listener.sender.is_closed();
            }
            listener.sender.unbounded_send(event.clone()).is_ok()
        });
    }
}

/// One tab's handle onto a [`MemoryProfile`].
#[derive(Clone)]
pub struct MemoryStore {
    profile: MemoryProfile,
    tab: u64,
}

impl MemoryStore {
    pub fn profile(&self) -> &MemoryProfile {
        &self.profile
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.profile.entry(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.profile.lock();
        if state.failing {
            return Err(StorageError::Backend(format!("quota exceeded writing '{}'", key)));
        }

        let old_value = state.entries.insert(key.to_string(), value.to_string());
        if old_value.as_deref() != Some(value) {
            state.broadcast(self.tab, StorageEvent::new(key, old_value, Some(value.to_string())));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut state = self.profile.lock();
        if state.failing {
            return Err(StorageError::Backend(format!("failed to remove '{}'", key)));
        }

        if let Some(old_value) = state.entries.remove(key) {
            state.broadcast(self.tab, StorageEvent::new(key, Some(old_value), None));
        }
        Ok(())
    }

    fn subscribe(&self) -> Subscription {
        let (sender, events) = mpsc::unbounded();
        self.profile.lock().listeners.push(Listener { tab: self.tab, sender });
        Subscription::new(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_does_not_see_its_own_changes() {
        let profile = MemoryProfile::new();
        let tab_a = profile.open_tab();
        let tab_b = profile.open_tab();
        let mut feed_a = tab_a.subscribe();
        let mut feed_b = tab_b.subscribe();

        tab_a.set("k", "v").unwrap();

        assert_eq!(feed_a.try_next(), None);
        assert_eq!(feed_b.try_next(), Some(StorageEvent::new("k", None, Some("v".into()))));
        assert_eq!(tab_b.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn unchanged_writes_and_missing_removals_are_silent() {
        let profile = MemoryProfile::new();
        let tab_a = profile.open_tab();
        let mut feed_b = profile.open_tab().subscribe();

        tab_a.set("k", "v").unwrap();
        tab_a.set("k", "v").unwrap();
        tab_a.remove("missing").unwrap();

        assert!(feed_b.try_next().is_some());
        assert_eq!(feed_b.try_next(), None);
    }

    #[test]
    fn removal_reports_old_value() {
        let profile = MemoryProfile::new();
        let tab_a = profile.open_tab();
        let mut feed_b = profile.open_tab().subscribe();

        tab_a.set("k", "v").unwrap();
        tab_a.remove("k").unwrap();

        feed_b.try_next();
        assert_eq!(feed_b.try_next(), Some(StorageEvent::new("k", Some("v".into()), None)));
        assert_eq!(profile.entry("k"), None);
    }

    #[test]
    fn failing_profile_rejects_writes() {
        let profile = MemoryProfile::new();
        let tab = profile.open_tab();
        profile.set_failing(true);

        assert!(matches!(tab.set("k", "v"), Err(StorageError::Backend(_))));
        assert_eq!(profile.entry("k"), None);
    }

    #[test]
    fn dropped_subscriptions_are_pruned() {
        let profile = MemoryProfile::new();
        let tab_a = profile.open_tab();
        drop(profile.open_tab().subscribe());

        tab_a.set("k", "v").unwrap();

        assert!(profile.lock().listeners.is_empty());
    }
}
