use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file the user picked, with its raw content shared for the lifetime of
/// the session so a failed attempt can be retried without re-prompting.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub name: String,
    pub mime: String,
    pub content: Arc<Vec<u8>>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            content: Arc::new(content),
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// One user-initiated submission and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadAttempt {
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub byte_size: u64,
    pub submitted_at: DateTime<Utc>,
    pub status: AttemptStatus,
    /// Webhook payload, present only once the attempt has succeeded.
    pub response: Option<serde_json::Value>,
    /// Failure reason, present only once the attempt has failed.
    pub error: Option<String>,
    /// Raw content retained for retry; dropped when the attempt succeeds.
    #[serde(skip)]
    pub(crate) content: Option<Arc<Vec<u8>>>,
}

impl UploadAttempt {
    /// A retry makes sense only for a failed attempt whose content is still
    /// held in memory.
    pub fn can_retry(&self) -> bool {
        self.status == AttemptStatus::Failed && self.content.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Pending,
    InFlight,
    Succeeded,
    Failed,
}

impl AttemptStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, AttemptStatus::Succeeded | AttemptStatus::Failed)
    }
}
