use std::rc::Rc;

use client_core::{KeyValueStore, SessionStore};
use dioxus::prelude::*;
use lg_types::Session;
use tracing::debug;

use crate::app::storage::{ClientStore, use_client_store};

/// Where the session shown by [`AuthContext::session`] last came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSource {
    Restored,
    ThisTab,
    OtherTab,
}

/// Authentication state shared through context.
///
/// `store` is authoritative; `session` mirrors it for rendering.
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<SessionStore<ClientStore>>,
    pub session: Signal<Option<Session>>,
    pub source: Signal<SessionSource>,
}

impl AuthContext {
    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    /// Identifier of the logged-in user, used to attribute blog posts.
    pub fn user_id(&self) -> Option<String> {
        self.session.read().as_ref().and_then(|session| session.user.id())
    }

    pub fn login(&self, session: Session) {
        self.store.login(session);
        self.sync();
    }

    pub fn logout(&self) {
        self.store.logout();
        self.sync();
    }

    fn sync(&self) {
        let mut source = self.source;
        let mut session = self.session;
        source.set(SessionSource::ThisTab);
        session.set(self.store.current());
    }
}

/// Restore the persisted session and keep it in step with other tabs.
pub fn use_auth_provider() -> AuthContext {
    let client_store = use_client_store();
    let store = use_hook(move || {
        let store = SessionStore::new(client_store);
        store.restore();
        Rc::new(store)
    });
    let mut session = use_signal(|| store.current());
    let mut source = use_signal(|| SessionSource::Restored);

    use_hook({
        let store = store.clone();
        move || {
            let mut changes = store.watch();
            spawn(async move {
                // Changes made here are mirrored by `sync` before this loop
                // sees them, so anything still different came from another tab.
                while changes.changed().await.is_ok() {
                    let current = changes.borrow_and_update().clone();
                    if *session.peek() == current {
                        continue;
                    }
                    debug!(active = current.is_some(), "session changed in another tab");
                    source.set(SessionSource::OtherTab);
                    session.set(current);
                }
            });

            let feed = store.store().subscribe();
            spawn(async move { store.follow(feed).await });
        }
    });

    use_context_provider(|| AuthContext { store, session, source })
}
