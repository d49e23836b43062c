use std::time::Duration;

use client_core::DecorationConfig;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use lg_types::{
    StatusMessage, validation::{PasswordResetInput, summarize}
};
use tracing::warn;

use crate::{
    Routes, app::{
        api::use_api, auth::hooks::use_redirect_if_logged_in, decoration::use_page_decoration
    }, components::{Layout, StatusLine}
};

#[component]
pub fn ResetPasswordPage() -> Element {
    use_redirect_if_logged_in();
    use_page_decoration(DecorationConfig::auth_page);

    let api = use_api();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut show_new = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<StatusMessage>);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if submitting() {
            return;
        }

        status.set(None);

        // Validate before raising the loading state.
        let (email_val, new_val, confirm_val) = (email(), new_password(), confirm_password());
        let input = PasswordResetInput {
            email: &email_val,
            new_password: &new_val,
            confirm_password: &confirm_val,
        };
        let request = match input.into_request() {
            Ok(request) => request,
            Err(errors) => {
                status.set(summarize(&errors).map(StatusMessage::failure));
                return;
            }
        };

        submitting.set(true);

        let api = api.clone();
        spawn(async move {
            let result = api.reset_password(&request).await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    status.set(Some(StatusMessage::success("✅ Password reset successful! Redirecting to login...")));
                    sleep(Duration::from_millis(1200)).await;
                    navigator.push(Routes::LoginPage {});
                }
                Err(err) => {
                    warn!(error = %err, "password reset failed");
                    status.set(Some(StatusMessage::failure(err.describe("❌ Reset failed."))));
                }
            }
        });
    };

    rsx! {
        Layout {
            div { class: "page-center",
                div { class: "card auth-card",
                    div { class: "card-header",
                        span { class: "card-icon", "🔑" }
                        h1 { "Reset Password" }
                        p { "Enter your email and new password" }
                    }

                    form { class: "form", onsubmit: on_submit,
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
                            span { "🆕 New Password" }
                            div { class: "password-field",
                                input {
                                    r#type: if show_new() { "text" } else { "password" },
                                    placeholder: "Enter new password",
                                    value: "{new_password}",
                                    oninput: move |evt| new_password.set(evt.value()),
                                    autocomplete: "new-password",
                                    required: true,
                                }
                                button {
                                    r#type: "button",
                                    class: "reveal",
                                    onclick: move |_| show_new.toggle(),
                                    if show_new() { "🙈" } else { "👁" }
                                }
                            }
                        }

                        label { class: "field",
                            span { "✅ Confirm Password" }
                            div { class: "password-field",
                                input {
                                    r#type: if show_confirm() { "text" } else { "password" },
                                    placeholder: "Confirm new password",
                                    value: "{confirm_password}",
                                    oninput: move |evt| confirm_password.set(evt.value()),
                                    autocomplete: "new-password",
                                    required: true,
                                }
                                button {
                                    r#type: "button",
                                    class: "reveal",
                                    onclick: move |_| show_confirm.toggle(),
                                    if show_confirm() { "🙈" } else { "👁" }
                                }
                            }
                        }

                        StatusLine { status: status() }

                        button {
                            r#type: "submit",
                            class: "btn btn-info",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "spin", "⏳" }
                                span { "Resetting..." }
                            } else {
                                span { "🔄 Reset Password" }
                            }
                        }

                        div { class: "form-links centered",
                            Link { to: Routes::LoginPage {}, "🔐 Back to Login" }
                        }
                    }
                }
            }
        }
    }
}
