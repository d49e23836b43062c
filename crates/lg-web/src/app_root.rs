use dioxus::prelude::*;

use crate::app::{
    self, api::use_api_provider, auth::context::use_auth_provider, decoration::{use_ambient_decoration, use_page_canvas_provider}, storage::use_client_store_provider
};

/// Root shell: global providers, ambient background and the router.
#[component]
pub fn app_root() -> Element {
    use_client_store_provider();
    use_api_provider();
    use_auth_provider();
    use_page_canvas_provider();
    use_ambient_decoration();

    rsx! {
        document::Title { "linearGen" }
        document::Stylesheet { href: asset!("/assets/main.css") }
        div { class: "app",
            app::routes::AppRouter {}
        }
    }
}
