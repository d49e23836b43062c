use std::time::Duration;

use client_core::DecorationConfig;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use lg_types::{Gradient, HexColor};
use tracing::{debug, warn};

use crate::{
    app::{
        decoration::use_page_decoration, storage::{load_saved_gradient, save_gradient, use_client_store}
    }, components::Layout
};

const FEEDBACK: Duration = Duration::from_millis(2000);

fn random_color() -> HexColor {
    HexColor::random(&mut rand::thread_rng())
}

/// Show the "done" state of the copy button for a moment.
fn flash(mut copied: Signal<bool>) {
    copied.set(true);
    spawn(async move {
        sleep(FEEDBACK).await;
        copied.set(false);
    });
}

/// Gradient generator.
#[component]
pub fn HomePage() -> Element {
    let store = use_client_store();
    let initial = use_hook({
        let store = store.clone();
        move || load_saved_gradient(&store)
    });

    let mut start = use_signal(|| initial.start.clone());
    let mut end = use_signal(|| initial.end.clone());
    let copied = use_signal(|| false);
    let gradient = use_memo(move || Gradient::diagonal(start(), end()));

    use_page_decoration(move || DecorationConfig::generator(gradient()));

    let on_copy = move |_| {
        let declaration = gradient.read().css_declaration();
        spawn(async move {
            let Ok(text) = serde_json::to_string(&declaration) else {
                return;
            };
            match document::eval(&format!("await navigator.clipboard.writeText({text});")).await {
                Ok(_) => flash(copied),
                Err(e) => warn!(error = ?e, "copy to clipboard failed"),
            }
        });
    };

    let on_save = move |_| match save_gradient(&store, &gradient.read()) {
        Ok(()) => {
            debug!(gradient = %gradient.read().css(), "gradient saved");
            flash(copied);
        }
        Err(e) => warn!(error = %e, "failed to save gradient"),
    };

    let preview = gradient.read().css();
    let declaration = gradient.read().css_declaration();
    let label = if copied() { "✅ Copied to Clipboard!" } else { "📋 Copy linear Code" };

    rsx! {
        Layout {
            div { class: "page-center",
                div { class: "card generator",
                    h1 { class: "generator-title", "🎨 Linear Generator" }

                    div { class: "preview", style: "background: {preview};" }

                    div { class: "swatches",
                        button {
                            class: "swatch",
                            style: "background-color: {start};",
                            onclick: move |_| start.set(random_color()),
                            "{start}"
                        }
                        button {
                            class: "swatch",
                            style: "background-color: {end};",
                            onclick: move |_| end.set(random_color()),
                            "{end}"
                        }
                    }

                    div { class: "actions",
                        button {
                            class: if copied() { "btn btn-success" } else { "btn btn-primary" },
                            onclick: on_copy,
                            "{label}"
                        }
                        button {
                            class: "btn btn-accent",
                            onclick: move |_| {
                                start.set(random_color());
                                end.set(random_color());
                            },
                            "🎲 Random Linear"
                        }
                        button { class: "btn btn-warm", onclick: on_save, "💾 Save Linear" }
                    }

                    div { class: "code-block",
                        code { "{declaration}" }
                    }
                }
            }
        }
    }
}
