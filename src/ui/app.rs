use dioxus::prelude::*;

use crate::ui::{
    response_table::ResponseSection, upload_history::UploadHistory, upload_panel::UploadPanel,
    uploads::SessionHandle,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Carried as context when the HTTP client could not be built at startup.
#[derive(Clone)]
pub struct SetupError(pub String);

#[component]
pub fn SetupErrorApp() -> Element {
    let err = use_context::<SetupError>();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "app",
            header { class: "page-header",
                h1 { "Document Upload" }
            }
            div { class: "error-banner", "Could not initialize the HTTP client: {err.0}" }
        }
    }
}

#[component]
pub fn App() -> Element {
    let session = use_context_provider(SessionHandle::new);

    let snapshot = session.0.read().clone();
    let stats = snapshot.stats();
    let busy = snapshot.is_uploading();
    let error = snapshot.session_error().map(str::to_string);
    let has_attempts = !snapshot.attempts().is_empty();

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "app",
            header { class: "page-header",
                p { class: "eyebrow", "Upload Center" }
                h1 { "Document Upload" }
                p { class: "subtitle",
                    "Upload PDF, image, or CSV files and let the automation webhook handle the downstream workflow."
                }
                div { class: "stats",
                    StatCard { label: "Total uploads", value: stats.total }
                    StatCard { label: "Completed", value: stats.succeeded }
                    StatCard { label: "Need review", value: stats.failed }
                }
            }

            section { class: "panel",
                UploadPanel { busy }
                if let Some(message) = error {
                    div { class: "error-banner",
                        div { class: "error-text",
                            p { class: "error-title", "Upload error" }
                            p { "{message}" }
                        }
                        button {
                            class: "btn-dismiss",
                            onclick: move |_| {
                                let mut session = session;
                                session.clear_error();
                            },
                            "Dismiss"
                        }
                    }
                }
            }

            if has_attempts {
                section { class: "panel", UploadHistory {} }
                section { class: "panel", ResponseSection {} }
            } else {
                section { class: "panel empty-state",
                    p { class: "empty-title", "No files uploaded yet" }
                    p { class: "empty-hint", "Pick a document above to begin." }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-value", "{value}" }
            p { class: "stat-label", "{label}" }
        }
    }
}
