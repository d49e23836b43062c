use std::time::Duration;

use client_core::DecorationConfig;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use lg_types::{StatusMessage, auth::RegisterRequest, validation::summarize};
use tracing::warn;

use crate::{
    Routes, app::{
        api::use_api, auth::hooks::use_redirect_if_logged_in, decoration::use_page_decoration
    }, components::{Layout, StatusLine}
};

#[component]
pub fn RegisterPage() -> Element {
    use_redirect_if_logged_in();
    use_page_decoration(DecorationConfig::auth_page);

    let api = use_api();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<StatusMessage>);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if submitting() {
            return;
        }

        status.set(None);

        let request = RegisterRequest {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
        };
        if let Some(message) = summarize(&request.validate()) {
            status.set(Some(StatusMessage::failure(message)));
            return;
        }

        submitting.set(true);

        let api = api.clone();
        spawn(async move {
            let result = api.register(&request).await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    status.set(Some(StatusMessage::success("✅ Registration successful! Redirecting to Login...")));
                    sleep(Duration::from_millis(1200)).await;
                    navigator.push(Routes::LoginPage {});
                }
                Err(err) => {
                    warn!(error = %err, "registration failed");
                    status.set(Some(StatusMessage::failure(err.describe("❌ Registration failed. Try again!"))));
                }
            }
        });
    };

    rsx! {
        Layout {
            div { class: "page-center",
                div { class: "card auth-card",
                    div { class: "card-header",
                        span { class: "card-icon", "📝" }
                        h1 { "Join Us" }
                        p { "Create your account to get started" }
                    }

                    form { class: "form", onsubmit: on_submit,
                        label { class: "field",
                            span { "👤 Full Name" }
                            input {
                                r#type: "text",
                                placeholder: "Enter your full name",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                                required: true,
                            }
                        }

                        label { class: "field",
                            span { "📧 Email" }
                            input {
                                r#type: "email",
                                placeholder: "Enter your email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                                required: true,
                            }
                        }

                        label { class: "field",
                            span { "🔒 Password" }
                            div { class: "password-field",
                                input {
                                    r#type: if show_password() { "text" } else { "password" },
                                    placeholder: "Create a strong password",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "new-password",
                                    required: true,
                                }
                                button {
                                    r#type: "button",
                                    class: "reveal",
                                    onclick: move |_| show_password.toggle(),
                                    if show_password() { "🙈" } else { "👁" }
                                }
                            }
                        }

                        StatusLine { status: status() }

                        button {
                            r#type: "submit",
                            class: "btn btn-success",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "spin", "⏳" }
                                span { "Creating Account..." }
                            } else {
                                span { "🚀 Create Account" }
                            }
                        }

                        div { class: "form-links centered",
                            Link { to: Routes::LoginPage {}, "🔐 Already have an account? Sign In" }
                        }
                    }
                }
            }
        }
    }
}
