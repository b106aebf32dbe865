use dioxus::prelude::*;

use crate::{
    engine::uploader::Uploader,
    models::attempt::{AttemptStatus, UploadAttempt},
    ui::uploads::SessionHandle,
    util,
};

#[component]
pub fn UploadHistory() -> Element {
    let session = use_context::<SessionHandle>();
    let attempts = session.0.read().attempts().to_vec();
    let count = attempts.len();

    rsx! {
        div { class: "history",
            div { class: "history-heading",
                div {
                    h2 { "Upload History" }
                    p { class: "history-count", "{count} record(s)" }
                }
                button {
                    class: "btn-secondary",
                    onclick: move |_| {
                        let mut session = session;
                        session.clear_history();
                    },
                    "Clear All"
                }
            }
            for attempt in attempts.iter() {
                AttemptCard { key: "{attempt.id}", attempt: attempt.clone() }
            }
        }
    }
}

#[component]
fn AttemptCard(attempt: UploadAttempt) -> Element {
    let session = use_context::<SessionHandle>();
    let uploader = use_context::<Uploader>();

    let card_class = match attempt.status {
        AttemptStatus::Failed => "attempt-card failed",
        AttemptStatus::Succeeded => "attempt-card succeeded",
        _ => "attempt-card active",
    };
    let badge = match attempt.status {
        AttemptStatus::Pending => "\u{23F0} Pending",
        AttemptStatus::InFlight => "\u{23F3} Uploading",
        AttemptStatus::Succeeded => "\u{2713} Success",
        AttemptStatus::Failed => "\u{2717} Failed",
    };
    let icon = util::file_icon(&attempt.mime_type);
    let size = util::format_size(attempt.byte_size);
    let when = util::format_time(attempt.submitted_at);
    let can_retry = attempt.can_retry();
    let id = attempt.id.clone();

    rsx! {
        div { class: "{card_class}",
            div { class: "attempt-main",
                span { class: "attempt-icon", "{icon}" }
                div { class: "attempt-meta",
                    h3 { class: "attempt-name", title: "{attempt.file_name}", "{attempt.file_name}" }
                    p { class: "attempt-details", "{size} \u{2022} {when}" }
                }
                span { class: "status-badge", "{badge}" }
                if can_retry {
                    button {
                        class: "btn-secondary",
                        onclick: move |_| {
                            let mut session = session;
                            let uploader = uploader.clone();
                            let id = id.clone();
                            spawn(async move {
                                session.retry(&uploader, id).await;
                            });
                        },
                        "Retry"
                    }
                }
            }
            if let Some(reason) = attempt.error.as_ref() {
                p { class: "attempt-error", "{reason}" }
            }
        }
    }
}
