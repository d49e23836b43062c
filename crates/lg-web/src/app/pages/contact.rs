use client_core::DecorationConfig;
use dioxus::prelude::*;
use lg_types::{StatusMessage, contact::ContactMessage, validation::summarize};
use tracing::warn;

use crate::{
    app::{api::use_api, decoration::use_page_decoration}, components::{Layout, StatusLine}
};

#[component]
pub fn ContactPage() -> Element {
    use_page_decoration(DecorationConfig::ambient);

    let api = use_api();

    let mut form = use_signal(ContactMessage::default);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<StatusMessage>);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if submitting() {
            return;
        }

        status.set(None);

        let message = form();
        if let Some(text) = summarize(&message.validate()) {
            status.set(Some(StatusMessage::failure(text)));
            return;
        }

        submitting.set(true);

        let api = api.clone();
        spawn(async move {
            let result = api.submit_contact(&message).await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    status.set(Some(StatusMessage::success("✅ Form submitted successfully!")));
                    form.set(ContactMessage::default());
                }
                Err(err) => {
                    warn!(error = %err, "contact form rejected");
                    status.set(Some(StatusMessage::failure(err.describe("❌ Failed to submit form"))));
                }
            }
        });
    };

    let current = form.read().clone();

    rsx! {
        Layout {
            div { class: "page narrow",
                div { class: "page-header",
                    h1 { "📞 Contact Us" }
                    p { "We'd love to hear from you. Send us a message! 💌" }
                }

                div { class: "card",
                    form { class: "form", onsubmit: on_submit,
                        div { class: "field-row",
                            label { class: "field",
                                span { "👤 Full Name" }
                                input {
                                    r#type: "text",
                                    placeholder: "Enter your full name",
                                    value: "{current.name}",
                                    oninput: move |evt| form.write().name = evt.value(),
                                    required: true,
                                }
                            }
                            label { class: "field",
                                span { "📧 Email" }
                                input {
                                    r#type: "email",
                                    placeholder: "Enter your email",
                                    value: "{current.email}",
                                    oninput: move |evt| form.write().email = evt.value(),
                                    required: true,
                                }
                            }
                        }

                        label { class: "field",
                            span { "📱 Contact Number" }
                            input {
                                r#type: "tel",
                                placeholder: "Enter your contact number",
                                value: "{current.contact}",
                                oninput: move |evt| form.write().contact = evt.value(),
                                required: true,
                            }
                        }

                        label { class: "field",
                            span { "💬 Message" }
                            textarea {
                                rows: "5",
                                placeholder: "Write your message here...",
                                value: "{current.message}",
                                oninput: move |evt| form.write().message = evt.value(),
                                required: true,
                            }
                        }

                        StatusLine { status: status() }

                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "spin", "⏳" }
                                span { "Sending Message..." }
                            } else {
                                span { "📤 Send Message ✨" }
                            }
                        }
                    }
                }
            }
        }
    }
}
