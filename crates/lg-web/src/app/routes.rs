use dioxus::prelude::*;
use tracing::debug;

use crate::pages::{BlogPage, ContactPage, HomePage, LoginPage, RegisterPage, ResetPasswordPage, TimetablePage};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Routes {
    #[route("/")]
    HomePage {},
    #[route("/login")]
    LoginPage {},
    #[route("/register")]
    RegisterPage {},
    #[route("/reset-password")]
    ResetPasswordPage {},
    #[route("/blogs")]
    BlogPage {},
    #[route("/contact")]
    ContactPage {},
    #[route("/timetable")]
    TimetablePage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Unknown paths go home.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let navigator = use_navigator();
    debug!(path = %route.join("/"), "unknown route, redirecting home");

    use_effect(move || {
        navigator.replace(Routes::HomePage {});
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_pages() {
        assert_eq!("/".parse::<Routes>().ok(), Some(Routes::HomePage {}));
        assert_eq!("/reset-password".parse::<Routes>().ok(), Some(Routes::ResetPasswordPage {}));
        assert_eq!("/timetable".parse::<Routes>().ok(), Some(Routes::TimetablePage {}));
        assert_eq!(Routes::BlogPage {}.to_string(), "/blogs");
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert!(matches!("/nowhere/else".parse::<Routes>(), Ok(Routes::NotFound { .. })));
    }
}
