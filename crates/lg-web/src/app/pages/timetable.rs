use client_core::DecorationConfig;
use dioxus::prelude::*;
use lg_types::{
    StatusMessage, timetable::{DAYS, NewTimetableEntry, TimetableEntry}, validation::summarize
};
use tracing::warn;

use crate::{
    app::{api::use_api, decoration::use_page_decoration}, components::{Layout, Modal, StatusLine}
};

#[component]
pub fn TimetablePage() -> Element {
    use_page_decoration(DecorationConfig::ambient);

    let api = use_api();

    let mut entries = use_signal(Vec::<TimetableEntry>::new);
    let mut form = use_signal(NewTimetableEntry::default);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<StatusMessage>);
    let mut pending_delete = use_signal(|| None::<String>);

    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                match api.list_timetable().await {
                    Ok(list) => entries.set(list),
                    Err(e) => warn!(error = %e, "failed to fetch timetable"),
                }
            });
        }
    });

    use_effect(move || refresh.call(()));

    let on_submit = {
        let api = api.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();

            if submitting() {
                return;
            }

            status.set(None);

            let entry = form();
            if let Some(text) = summarize(&entry.validate()) {
                status.set(Some(StatusMessage::failure(text)));
                return;
            }

            submitting.set(true);

            let api = api.clone();
            spawn(async move {
                let result = api.create_timetable_entry(&entry).await;
                submitting.set(false);

                match result {
                    Ok(()) => {
                        status.set(Some(StatusMessage::success("✅ TimeTable entry created successfully!")));
                        form.set(NewTimetableEntry::default());
                        refresh.call(());
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to create timetable entry");
                        status.set(Some(StatusMessage::failure(err.describe("❌ Failed to create timetable entry"))));
                    }
                }
            });
        }
    };

    let confirm_delete = move |_| {
        let Some(id) = pending_delete.write().take() else {
            return;
        };

        let api = api.clone();
        spawn(async move {
            match api.delete_timetable_entry(&id).await {
                Ok(()) => {
                    status.set(Some(StatusMessage::success("✅ Entry deleted successfully!")));
                    refresh.call(());
                }
                Err(err) => {
                    warn!(error = %err, id = %id, "failed to delete timetable entry");
                    status.set(Some(StatusMessage::failure(err.describe("❌ Failed to delete entry"))));
                }
            }
        });
    };

    let current = form.read().clone();
    let rows: Vec<(String, TimetableEntry)> = entries
        .read()
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.id.clone().unwrap_or_else(|| index.to_string()), entry.clone()))
        .collect();

    rsx! {
        Layout {
            div { class: "page",
                div { class: "page-header",
                    h1 { "📅 TimeTable Management" }
                    p { "Create and manage your class timetable with style" }
                }

                div { class: "card",
                    form { class: "form", onsubmit: on_submit,
                        div { class: "field-grid",
                            label { class: "field",
                                span { "📆 Day" }
                                select {
                                    value: "{current.day}",
                                    onchange: move |evt| form.write().day = evt.value(),
                                    required: true,
                                    option { value: "", "Select Day" }
                                    for day in DAYS {
                                        option { key: "{day}", value: day, selected: current.day == day, "{day}" }
                                    }
                                }
                            }
                            label { class: "field",
                                span { "⏰ Time" }
                                input {
                                    r#type: "text",
                                    placeholder: "e.g., 9:00-10:00",
                                    value: "{current.time}",
                                    oninput: move |evt| form.write().time = evt.value(),
                                    required: true,
                                }
                            }
                            label { class: "field",
                                span { "📚 Subject" }
                                input {
                                    r#type: "text",
                                    placeholder: "Enter subject",
                                    value: "{current.subject}",
                                    oninput: move |evt| form.write().subject = evt.value(),
                                    required: true,
                                }
                            }
                            label { class: "field",
                                span { "👨‍🏫 Teacher" }
                                input {
                                    r#type: "text",
                                    placeholder: "Enter teacher name",
                                    value: "{current.teacher}",
                                    oninput: move |evt| form.write().teacher = evt.value(),
                                    required: true,
                                }
                            }
                        }

                        StatusLine { status: status() }

                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() { "⏳ Creating Entry..." } else { "➕ Add TimeTable Entry ✨" }
                        }
                    }
                }

                div { class: "card",
                    h2 { "📋 Current TimeTable" }

                    if rows.is_empty() {
                        p { class: "empty", "No timetable entries yet. Add the first one above!" }
                    } else {
                        table { class: "timetable",
                            thead {
                                tr {
                                    th { "Day" }
                                    th { "Time" }
                                    th { "Subject" }
                                    th { "Teacher" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for (key, entry) in rows {
                                    tr { key: "{key}",
                                        td { "{entry.slot.day}" }
                                        td { "{entry.slot.time}" }
                                        td { "{entry.slot.subject}" }
                                        td { "{entry.slot.teacher}" }
                                        td {
                                            if let Some(id) = entry.id.clone() {
                                                button {
                                                    class: "btn btn-danger btn-small",
                                                    onclick: move |_| pending_delete.set(Some(id.clone())),
                                                    "🗑️ Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                Modal {
                    open: pending_delete.read().is_some(),
                    on_close: move |_| pending_delete.set(None),
                    title: "Delete entry",
                    actions: rsx! {
                        button { class: "btn btn-danger", onclick: confirm_delete, "🗑️ Delete" }
                    },
                    p { "Are you sure you want to delete this entry?" }
                }
            }
        }
    }
}
