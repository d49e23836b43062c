use dioxus::prelude::*;

/// Dialog with a title, body and optional extra actions; renders nothing
/// while closed.
#[component]
pub fn Modal(open: bool, on_close: EventHandler<()>, title: String, children: Element, actions: Option<Element>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "lg-modal", role: "dialog",
            div { class: "lg-modal-backdrop", onclick: move |_| on_close.call(()) }
            div { class: "lg-modal-box card",
                h3 { class: "lg-modal-title", "{title}" }
                div { class: "lg-modal-body", {children} }
                div { class: "lg-modal-actions",
                    button { class: "btn btn-muted", onclick: move |_| on_close.call(()), "Cancel" }
                    if let Some(actions) = actions {
                        {actions}
                    }
                }
            }
        }
    }
}
