use dioxus::prelude::*;
use lg_types::StatusMessage;

/// The page's single status message, if any.
#[component]
pub fn StatusLine(status: Option<StatusMessage>) -> Element {
    let Some(status) = status else {
        return rsx! {};
    };

    let tone = if status.is_success() { "status-success" } else { "status-failure" };

    rsx! {
        div { class: "status {tone}", role: "status", "{status}" }
    }
}
