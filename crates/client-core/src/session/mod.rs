//! Client-side session state.
//!
//! [`SessionStore`] owns the authenticated user for one tab, persists it to
//! the durable store and keeps it consistent with sibling tabs through the
//! store's change feed. Every external change is applied as a full replace or
//! clear of the local value, never a merge.

use futures::StreamExt;
use lg_types::{Session, UserProfile};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::storage::{KeyValueStore, StorageEvent, Subscription};

/// Store entry holding the JSON user object.
pub const SESSION_KEY: &str = "loggedUser";
/// Store entry holding the raw bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Sentinel written and immediately removed to announce a logout.
pub const LOGOUT_SIGNAL_KEY: &str = "logoutEvent";

/// Effect of an external store change on the local session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionChange {
    Cleared,
    Replaced,
    TokenUpdated,
    Unchanged,
}

pub struct SessionStore<S> {
    store: S,
    current: watch::Sender<Option<Session>>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a store with no session; call [`restore`](Self::restore) to load
    /// the persisted one.
    pub fn new(store: S) -> Self {
        let (current, _) = watch::channel(None);
        Self { store, current }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Authoritative session for this tab.
    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().and_then(|session| session.token.clone())
    }

    /// Receiver notified whenever the authoritative session changes.
    pub fn watch(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }

    /// Load the persisted session. A corrupt entry is discarded and reported
    /// as no session.
    pub fn restore(&self) -> Option<Session> {
        let session = self.read_entry(SESSION_KEY).and_then(|raw| match parse_user(&raw) {
            Ok(user) => Some(Session::new(user, self.read_entry(TOKEN_KEY))),
            Err(e) => {
                warn!(key = SESSION_KEY, error = %e, "discarding corrupt session entry");
                self.remove_entry(SESSION_KEY);
                None
            }
        });

        debug!(active = session.is_some(), "session restored");
        self.replace(session.clone());
        session
    }

    /// Persist `session` and make it authoritative. Sibling tabs pick it up
    /// from the store's own change notification.
    pub fn login(&self, mut session: Session) {
        session.token = session.token.filter(|token| !token.is_empty());

        match serde_json::to_string(&session.user) {
            Ok(json) => self.write_entry(SESSION_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize session user"),
        }

        match session.token.as_deref() {
            Some(token) => self.write_entry(TOKEN_KEY, token),
            None => self.remove_entry(TOKEN_KEY),
        }

        debug!(user = session.user.display_name().unwrap_or_default(), "logged in");
        self.replace(Some(session));
    }

    /// Drop the session here and in every sibling tab.
    pub fn logout(&self) {
        self.remove_entry(SESSION_KEY);
        self.remove_entry(TOKEN_KEY);
        self.replace(None);

        let stamp = chrono::Utc::now().timestamp_millis().to_string();
        self.write_entry(LOGOUT_SIGNAL_KEY, &stamp);
        self.remove_entry(LOGOUT_SIGNAL_KEY);
        debug!("logged out");
    }

    /// Apply a change made to the store by another tab.
    ///
    /// Clearing wins over replacing: the logout sentinel, a removed session
    /// entry, or a wiped store always clear the local session.
    pub fn on_external_change(&self, event: &StorageEvent) -> SessionChange {
        let key = match event.key.as_deref() {
            None => return self.clear(),
            Some(key) => key,
        };

        if key == LOGOUT_SIGNAL_KEY || (key == SESSION_KEY && event.new_value().is_none()) {
            return self.clear();
        }

        match (key, event.new_value()) {
            (SESSION_KEY, Some(raw)) => match parse_user(raw) {
                Ok(user) => {
                    let session = Session::new(user, self.read_entry(TOKEN_KEY));
                    if self.replace(Some(session)) {
                        SessionChange::Replaced
                    } else {
                        SessionChange::Unchanged
                    }
                }
                Err(e) => {
                    warn!(error = %e, "ignoring malformed session written by another tab");
                    SessionChange::Unchanged
                }
            },
            (TOKEN_KEY, token) => {
                let token = token.map(str::to_string);
                let updated = self.current.send_if_modified(|current| match current {
                    Some(session) if session.token != token => {
                        session.token = token;
                        true
                    }
                    _ => false,
                });
                if updated {
                    SessionChange::TokenUpdated
                } else {
                    SessionChange::Unchanged
                }
            }
            _ => SessionChange::Unchanged,
        }
    }

    /// Apply every event from `events` until the feed ends.
    pub async fn follow(&self, mut events: Subscription) {
        while let Some(event) = events.next().await {
            let change = self.on_external_change(&event);
            if change != SessionChange::Unchanged {
                debug!(?change, key = event.key.as_deref().unwrap_or("<all>"), "session synced from another tab");
            }
        }
    }

    fn clear(&self) -> SessionChange {
        if self.replace(None) {
            SessionChange::Cleared
        } else {
            SessionChange::Unchanged
        }
    }

    /// Returns whether the authoritative value changed.
    fn replace(&self, next: Option<Session>) -> bool {
        self.current.send_if_modified(move |current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        })
    }

    fn read_entry(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(e) => {
                warn!(key, error = %e, "failed to read storage entry");
                None
            }
        }
    }

    fn write_entry(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "failed to write storage entry");
        }
    }

    fn remove_entry(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key, error = %e, "failed to remove storage entry");
        }
    }
}

fn parse_user(raw: &str) -> Result<UserProfile, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
