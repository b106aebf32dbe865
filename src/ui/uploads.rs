use dioxus::prelude::*;

use crate::{
    engine::{session::UploadSession, uploader::Uploader},
    models::attempt::{AttemptStatus, SourceFile},
};

// ─── Session handle ─────────────────────────────────────────
// Shared upload session for the UI, provided as context.

#[derive(Clone, Copy)]
pub struct SessionHandle(pub Signal<UploadSession>);

impl SessionHandle {
    pub fn new() -> Self {
        Self(Signal::new(UploadSession::new()))
    }

    /// Drive one submission end to end. The signal borrow is released around
    /// the transport await so the UI keeps rendering while the upload runs.
    pub async fn upload(&mut self, uploader: &Uploader, file: SourceFile) {
        let id = self.0.write().submit(&file);
        if self.0.read().status_of(&id) == Some(AttemptStatus::Failed) {
            // Validation rejected it; nothing to send.
            return;
        }
        self.0.write().mark_in_flight(&id);
        let outcome = uploader.send(&file).await;
        self.0.write().complete(&id, outcome);
    }

    /// Re-submit a failed attempt's retained file as a new attempt. No-op
    /// when the content is no longer held.
    pub async fn retry(&mut self, uploader: &Uploader, id: String) {
        let source = self.0.read().retry_source(&id);
        if let Some(file) = source {
            self.upload(uploader, file).await;
        }
    }

    pub fn clear_history(&mut self) {
        self.0.write().clear_history();
    }

    pub fn clear_error(&mut self) {
        self.0.write().clear_error();
    }
}
