use dioxus::prelude::*;

use crate::{Routes, app::auth::hooks::use_auth};

#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let session = auth.session.read().clone();
    let profile = session.as_ref().map(|session| {
        let user = &session.user;
        let name = user.display_name().unwrap_or_default().to_string();
        let initial = user.initial().map(String::from).unwrap_or_default();
        (initial, name)
    });

    let on_logout = move |_| {
        auth.logout();
        navigator.push(Routes::HomePage {});
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                Link { class: "brand", to: Routes::HomePage {},
                    span { class: "brand-mark", "🎨" }
                    span { class: "brand-name", "linearGen" }
                }

                ul { class: "nav-links",
                    li { Link { to: Routes::HomePage {}, "Home" } }
                    li { Link { to: Routes::BlogPage {}, "Blogs" } }
                    li { Link { to: Routes::ContactPage {}, "Contact" } }
                    li { Link { to: Routes::TimetablePage {}, "Timetable" } }
                }

                div { class: "nav-account",
                    if let Some((initial, name)) = profile {
                        div { class: "user-badge",
                            div { class: "avatar", "{initial}" }
                            span { class: "user-name", "{name}" }
                        }
                        button { class: "btn btn-logout", onclick: on_logout, "🚪 Logout" }
                    } else {
                        Link { class: "btn btn-login", to: Routes::LoginPage {}, "🔐 Login" }
                        Link { class: "btn btn-register", to: Routes::RegisterPage {}, "📝 Register" }
                    }
                }
            }
        }
    }
}
