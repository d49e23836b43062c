//! Cross-tab session behavior.
//!
//! Every tab is a `SessionStore` over its own `MemoryStore` handle on one
//! shared `MemoryProfile`, so writes made by one tab only reach the others
//! through their change feeds, the way browser tabs see each other.

use std::{cell::Cell, rc::Rc};

use client_core::{
    KeyValueStore, SessionChange, SessionStore, StorageEvent, Subscription, session::{LOGOUT_SIGNAL_KEY, SESSION_KEY, TOKEN_KEY}, storage::{MemoryProfile, MemoryStore}
};
use futures::channel::mpsc;
use lg_types::{Session, UserProfile};
use serde_json::json;

fn user(email: &str) -> UserProfile {
    serde_json::from_value(json!({"_id": "u-1", "name": "Ada", "email": email})).unwrap()
}

struct Tab {
    session: SessionStore<MemoryStore>,
    feed: Subscription,
}

impl Tab {
    fn open(profile: &MemoryProfile) -> Self {
        let session = SessionStore::new(profile.open_tab());
        session.restore();
        let feed = session.store().subscribe();
        Self { session, feed }
    }

    /// Apply everything other tabs have written so far.
    fn sync(&mut self) -> Vec<SessionChange> {
        let mut changes = Vec::new();
        while let Some(event) = self.feed.try_next() {
            changes.push(self.session.on_external_change(&event));
        }
        changes
    }
}

#[test]
fn logout_in_one_tab_clears_every_tab() {
    let profile = MemoryProfile::new();
    let mut tab_a = Tab::open(&profile);
    let mut tab_b = Tab::open(&profile);
    let mut tab_c = Tab::open(&profile);

    tab_a.session.login(Session::new(user("ada@example.com"), Some("tok".into())));
    tab_b.sync();
    tab_c.sync();
    assert!(tab_b.session.is_active());
    assert!(tab_c.session.is_active());
    assert_eq!(tab_c.session.token().as_deref(), Some("tok"));

    tab_a.session.logout();
    assert!(tab_b.sync().contains(&SessionChange::Cleared));
    assert!(tab_c.sync().contains(&SessionChange::Cleared));

    assert!(!tab_a.session.is_active());
    assert!(!tab_b.session.is_active());
    assert!(!tab_c.session.is_active());
    assert_eq!(profile.entry(SESSION_KEY), None);
    assert_eq!(profile.entry(TOKEN_KEY), None);
    assert_eq!(profile.entry(LOGOUT_SIGNAL_KEY), None);
    assert!(tab_a.sync().is_empty());
}

#[test]
fn login_in_one_tab_reaches_the_others() {
    let profile = MemoryProfile::new();
    let mut tab_a = Tab::open(&profile);
    let mut tab_b = Tab::open(&profile);

    let session = Session::new(user("ada@example.com"), Some("tok".into()));
    tab_a.session.login(session.clone());
    tab_b.sync();

    assert_eq!(tab_b.session.current(), Some(session));
}

#[test]
fn relogin_as_another_user_replaces_the_session() {
    let profile = MemoryProfile::new();
    let mut tab_a = Tab::open(&profile);
    let mut tab_b = Tab::open(&profile);

    tab_a.session.login(Session::new(user("ada@example.com"), Some("t1".into())));
    tab_b.sync();
    tab_a.session.login(Session::new(user("grace@example.com"), Some("t2".into())));
    tab_b.sync();

    let current = tab_b.session.current().unwrap();
    assert_eq!(current.user.display_name(), Some("Ada"));
    assert_eq!(current.user.get("email"), Some(&json!("grace@example.com")));
    assert_eq!(current.token.as_deref(), Some("t2"));
}

#[test]
fn tab_opened_later_restores_the_persisted_session() {
    let profile = MemoryProfile::new();
    let tab_a = Tab::open(&profile);
    tab_a.session.login(Session::new(user("ada@example.com"), None));

    let tab_b = Tab::open(&profile);
    assert_eq!(tab_b.session.current(), tab_a.session.current());
    assert_eq!(tab_b.session.token(), None);
}

#[test]
fn wiping_the_store_clears_the_session() {
    let profile = MemoryProfile::new();
    let tab = Tab::open(&profile);
    tab.session.login(Session::new(user("ada@example.com"), None));

    assert_eq!(tab.session.on_external_change(&StorageEvent::cleared()), SessionChange::Cleared);
    assert_eq!(tab.session.on_external_change(&StorageEvent::cleared()), SessionChange::Unchanged);
}

#[tokio::test]
async fn follow_applies_events_until_the_feed_ends() {
    let session = SessionStore::new(MemoryProfile::new().open_tab());
    let detached = Rc::new(Cell::new(false));
    let (sender, events) = mpsc::unbounded();
    let feed = Subscription::new(events).with_detach({
        let detached = detached.clone();
        move || detached.set(true)
    });

    let raw = serde_json::to_string(&user("ada@example.com")).unwrap();
    sender
        .unbounded_send(StorageEvent::new(SESSION_KEY, None, Some(raw)))
        .unwrap();
    sender
        .unbounded_send(StorageEvent::new(TOKEN_KEY, None, Some("tok".into())))
        .unwrap();
    drop(sender);

    let watch = session.watch();
    session.follow(feed).await;

    assert!(watch.has_changed().unwrap());
    assert_eq!(session.token().as_deref(), Some("tok"));
    assert!(detached.get());
}
