use std::time::Duration;

use client_core::DecorationConfig;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use lg_types::{
    StatusMessage, auth::LoginRequest, validation::{FieldErrors, require, summarize}
};

use crate::{
    Routes, app::{
        api::use_api, auth::hooks::{use_auth, use_redirect_if_logged_in}, decoration::use_page_decoration
    }, components::{Layout, StatusLine}
};

#[component]
pub fn LoginPage() -> Element {
    use_redirect_if_logged_in();
    use_page_decoration(DecorationConfig::auth_page);

    let auth = use_auth();
    let api = use_api();
    let navigator = use_navigator();

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

        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };

        let mut errors = FieldErrors::new();
        require(&mut errors, &[("email", request.email.as_str()), ("password", request.password.as_str())]);
        if let Some(message) = summarize(&errors) {
            status.set(Some(StatusMessage::failure(message)));
            return;
        }

        submitting.set(true);

        let api = api.clone();
        let auth = auth.clone();
        spawn(async move {
            let result = api.login(&request).await;
            submitting.set(false);

            match result {
                Ok(session) => {
                    auth.login(session);
                    status.set(Some(StatusMessage::success("✅ Login successful! Redirecting...")));
                    sleep(Duration::from_millis(1000)).await;
                    navigator.push(Routes::HomePage {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "login failed");
                    status.set(Some(StatusMessage::failure(err.describe("❌ Invalid email or password."))));
                }
            }
        });
    };

    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        Layout {
            div { class: "page-center",
                div { class: "card auth-card",
                    div { class: "card-header",
                        span { class: "card-icon", "🔐" }
                        h1 { "Welcome Back" }
                        p { "Sign in to your account" }
                    }

                    form { class: "form", onsubmit: on_submit,
                        label { class: "field",
                            span { "📧 Email" }
                            input {
                                r#type: "email",
                                placeholder: "Enter your email",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                                autocomplete: "username",
                                required: true,
                            }
                        }

                        label { class: "field",
                            span { "🔒 Password" }
                            div { class: "password-field",
                                input {
                                    r#type: password_type,
                                    placeholder: "Enter your password",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "current-password",
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
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "spin", "⏳" }
                                span { "Signing In..." }
                            } else {
                                span { "🚀 Sign In" }
                            }
                        }

                        div { class: "form-links",
                            Link { to: Routes::ResetPasswordPage {}, "🔑 Forgot Password?" }
                            Link { to: Routes::RegisterPage {}, "📝 Create Account" }
                        }
                    }
                }
            }
        }
    }
}
