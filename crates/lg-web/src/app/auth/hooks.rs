use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;

use super::context::{AuthContext, SessionSource};
use crate::Routes;

/// Get current auth state from context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Whether a page only meant for visitors should send the user home.
///
/// A session present on entry always redirects. After that only sessions
/// arriving from another tab do; a login made on the page keeps it up until
/// the page navigates on its own.
pub fn should_leave_auth_page(on_entry: bool, logged_in: bool, source: SessionSource) -> bool {
    logged_in && (on_entry || source == SessionSource::OtherTab)
}

/// Send a visitor who is already logged in back home.
pub fn use_redirect_if_logged_in() {
    let auth = use_auth();
    let navigator = use_navigator();
    let on_entry = use_hook(|| Rc::new(Cell::new(true)));

    use_effect(move || {
        let logged_in = auth.session.read().is_some();
        let source = *auth.source.peek();
        if should_leave_auth_page(on_entry.replace(false), logged_in, source) {
            navigator.replace(Routes::HomePage {});
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_present_on_entry_leaves() {
        for source in [SessionSource::Restored, SessionSource::ThisTab, SessionSource::OtherTab] {
            assert!(should_leave_auth_page(true, true, source));
        }
        assert!(!should_leave_auth_page(true, false, SessionSource::Restored));
    }

    #[test]
    fn login_from_another_tab_leaves() {
        assert!(should_leave_auth_page(false, true, SessionSource::OtherTab));
    }

    #[test]
    fn login_on_the_page_stays_until_it_navigates() {
        assert!(!should_leave_auth_page(false, true, SessionSource::ThisTab));
    }

    #[test]
    fn logout_never_leaves() {
        assert!(!should_leave_auth_page(false, false, SessionSource::OtherTab));
        assert!(!should_leave_auth_page(false, false, SessionSource::ThisTab));
    }
}
