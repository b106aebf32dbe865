use dioxus::prelude::*;
use tracing::info;

use crate::{
    engine::uploader::Uploader, models::attempt::SourceFile, ui::uploads::SessionHandle, util,
};

#[component]
pub fn UploadPanel(busy: bool) -> Element {
    let uploader = use_context::<Uploader>();
    let session = use_context::<SessionHandle>();

    let pick_and_upload = move |_| {
        let uploader = uploader.clone();
        let mut session = session;
        spawn(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter(
                    "Documents",
                    &["pdf", "jpg", "jpeg", "png", "gif", "webp", "csv"],
                )
                .pick_file()
                .await
            else {
                return;
            };
            let name = handle.file_name();
            let content = handle.read().await;
            let mime = util::mime_for_path(&name);
            info!("picked {} ({} bytes, {})", name, content.len(), mime);
            let file = SourceFile::new(name, mime, content);
            session.upload(&uploader, file).await;
        });
    };

    rsx! {
        div { class: "upload-panel",
            div { class: "upload-heading",
                h2 { "Upload files" }
                span { class: "upload-limit", "PDF, JPEG, PNG, GIF, WebP, CSV \u{2022} Max 50MB" }
            }
            button {
                class: "btn-primary upload-btn",
                disabled: busy,
                onclick: pick_and_upload,
                if busy { "Uploading\u{2026}" } else { "Choose a file\u{2026}" }
            }
        }
    }
}
