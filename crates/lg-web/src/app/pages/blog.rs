use client_core::DecorationConfig;
use dioxus::prelude::*;
use lg_types::{
    StatusMessage, blog::{BlogPost, NewBlogPost}, validation::{FieldErrors, require, summarize}
};
use tracing::warn;

use crate::{
    app::{
        api::use_api, auth::hooks::use_auth, decoration::use_page_decoration
    }, components::{Layout, StatusLine}
};

#[component]
pub fn BlogPage() -> Element {
    use_page_decoration(DecorationConfig::ambient);

    let auth = use_auth();
    let api = use_api();

    let mut blogs = use_signal(Vec::<BlogPost>::new);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut status = use_signal(|| None::<StatusMessage>);

    // A failed refresh keeps the posts already shown.
    let refresh = use_callback({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                match api.list_blogs().await {
                    Ok(list) => blogs.set(list),
                    Err(e) => warn!(error = %e, "failed to fetch blogs"),
                }
            });
        }
    });

    use_effect(move || refresh.call(()));

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if submitting() {
            return;
        }

        status.set(None);

        let post = NewBlogPost {
            title: title().trim().to_string(),
            content: content().trim().to_string(),
            author: auth.user_id(),
        };

        let mut errors = FieldErrors::new();
        require(&mut errors, &[("title", post.title.as_str()), ("content", post.content.as_str())]);
        if let Some(message) = summarize(&errors) {
            status.set(Some(StatusMessage::failure(message)));
            return;
        }

        submitting.set(true);

        let api = api.clone();
        let token = auth.token();
        spawn(async move {
            let result = api.create_blog(&post, token.as_deref()).await;
            submitting.set(false);

            match result {
                Ok(()) => {
                    status.set(Some(StatusMessage::success("✅ Blog created successfully!")));
                    title.set(String::new());
                    content.set(String::new());
                    refresh.call(());
                }
                Err(err) => {
                    warn!(error = %err, "failed to create blog");
                    status.set(Some(StatusMessage::failure(err.describe("❌ Failed to create blog"))));
                }
            }
        });
    };

    let posts: Vec<(String, BlogPost)> = blogs
        .read()
        .iter()
        .enumerate()
        .map(|(index, post)| (post.id.clone().unwrap_or_else(|| index.to_string()), post.clone()))
        .collect();

    rsx! {
        Layout {
            div { class: "page",
                div { class: "page-header",
                    h1 { "✍️ Blog Management" }
                    p { "Create and manage your amazing blog posts" }
                }

                div { class: "card",
                    form { class: "form", onsubmit: on_submit,
                        label { class: "field",
                            span { "📝 Blog Title" }
                            input {
                                r#type: "text",
                                placeholder: "✨ Enter your creative blog title...",
                                value: "{title}",
                                oninput: move |evt| title.set(evt.value()),
                                required: true,
                            }
                        }

                        label { class: "field",
                            span { "📄 Blog Content" }
                            textarea {
                                rows: "6",
                                placeholder: "🖋️ Write your inspiring blog content here...",
                                value: "{content}",
                                oninput: move |evt| content.set(evt.value()),
                                required: true,
                            }
                        }

                        StatusLine { status: status() }

                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: submitting(),
                            if submitting() { "⏳ Creating Magic..." } else { "🚀 Publish Blog Post ✨" }
                        }
                    }
                }

                div { class: "card",
                    h2 { "📚 All Blog Posts" }

                    if posts.is_empty() {
                        p { class: "empty", "No blog posts yet. Be the first to write one!" }
                    } else {
                        div { class: "post-list",
                            for (key, post) in posts {
                                BlogCard { key: "{key}", post }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BlogCard(post: BlogPost) -> Element {
    let author = post.author_label().unwrap_or("Unknown Author").to_string();
    let created = post.created_on().map(|day| day.format("%Y-%m-%d").to_string());

    rsx! {
        article { class: "post",
            h3 { "{post.title}" }
            p { class: "post-content", "{post.content}" }
            div { class: "post-meta",
                span { "👤 By: {author}" }
                if let Some(created) = created {
                    span { "📅 {created}" }
                }
            }
        }
    }
}
