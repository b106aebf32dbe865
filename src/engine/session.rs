use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};
use ulid::Ulid;

use crate::{
	engine::{
		uploader::{UploadError, Uploader},
		validator,
	},
	models::attempt::{AttemptStatus, SourceFile, UploadAttempt},
};

pub type AttemptId = String;

/// Counters for the page header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
	pub total: usize,
	pub succeeded: usize,
	pub failed: usize,
}

/// In-memory history of upload attempts for one app session, newest first.
///
/// All mutation goes through the methods here; readers get immutable views
/// and never touch attempt records directly. Nothing survives a restart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSession {
	attempts: Vec<UploadAttempt>,
	session_error: Option<String>,
}

impl UploadSession {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a new submission. Always creates exactly one attempt: an invalid
	/// file produces a record born `Failed` with the validation message, and
	/// the transport is never involved for it.
	pub fn submit(&mut self, file: &SourceFile) -> AttemptId {
		self.session_error = None;

		let id = Ulid::new().to_string();
		let mut attempt = UploadAttempt {
			id: id.clone(),
			file_name: file.name.clone(),
			mime_type: file.mime.clone(),
			byte_size: file.size(),
			submitted_at: Utc::now(),
			status: AttemptStatus::Pending,
			response: None,
			error: None,
			content: Some(Arc::clone(&file.content)),
		};

		match validator::validate(&file.mime, file.size()) {
			Ok(()) => {
				info!("submitted {} ({} bytes) as attempt {}", file.name, file.size(), id);
			}
			Err(reason) => {
				warn!("rejected {}: {}", file.name, reason);
				attempt.status = AttemptStatus::Failed;
				attempt.error = Some(reason.to_string());
				self.session_error = attempt.error.clone();
			}
		}

		self.attempts.insert(0, attempt);
		id
	}

	/// Mark an accepted attempt as handed to the transport.
	pub fn mark_in_flight(&mut self, id: &str) {
		if let Some(attempt) = self.attempts.iter_mut().find(|a| a.id == id) {
			if attempt.status == AttemptStatus::Pending {
				attempt.status = AttemptStatus::InFlight;
			}
		}
	}

	/// Terminal transition for an attempt. Success stores the payload and
	/// drops the retry content (a succeeded attempt is never retried);
	/// failure stores the reason and surfaces it as the session error.
	/// Attempts already in a terminal state are left untouched.
	pub fn complete(&mut self, id: &str, outcome: Result<Value, UploadError>) {
		let Some(idx) = self.attempts.iter().position(|a| a.id == id) else {
			warn!("complete: unknown attempt {id}");
			return;
		};
		if self.attempts[idx].status.is_terminal() {
			warn!("complete: attempt {id} is already terminal");
			return;
		}

		match outcome {
			Ok(payload) => {
				info!("attempt {id} succeeded");
				let attempt = &mut self.attempts[idx];
				attempt.status = AttemptStatus::Succeeded;
				attempt.response = Some(payload);
				attempt.content = None;
			}
			Err(err) => {
				let reason = err.to_string();
				warn!("attempt {id} failed: {reason}");
				let attempt = &mut self.attempts[idx];
				attempt.status = AttemptStatus::Failed;
				attempt.error = Some(reason.clone());
				self.session_error = Some(reason);
			}
		}
	}

	/// Clone of the retained content plus the original name and type, if the
	/// attempt still holds its bytes. `None` means retry is a no-op.
	pub fn retry_source(&self, id: &str) -> Option<SourceFile> {
		let attempt = self.attempts.iter().find(|a| a.id == id)?;
		let content = attempt.content.clone()?;
		Some(SourceFile {
			name: attempt.file_name.clone(),
			mime: attempt.mime_type.clone(),
			content,
		})
	}

	/// Drop the whole history. Irreversible.
	pub fn clear_history(&mut self) {
		info!("clearing {} attempts", self.attempts.len());
		self.attempts.clear();
	}

	/// Dismiss the transient session-level error without touching history.
	pub fn clear_error(&mut self) {
		self.session_error = None;
	}

	pub fn attempts(&self) -> &[UploadAttempt] {
		&self.attempts
	}

	pub fn session_error(&self) -> Option<&str> {
		self.session_error.as_deref()
	}

	pub fn status_of(&self, id: &str) -> Option<AttemptStatus> {
		self.attempts.iter().find(|a| a.id == id).map(|a| a.status)
	}

	pub fn is_uploading(&self) -> bool {
		self.attempts
			.iter()
			.any(|a| a.status == AttemptStatus::InFlight)
	}

	pub fn stats(&self) -> SessionStats {
		SessionStats {
			total: self.attempts.len(),
			succeeded: self
				.attempts
				.iter()
				.filter(|a| a.status == AttemptStatus::Succeeded)
				.count(),
			failed: self
				.attempts
				.iter()
				.filter(|a| a.status == AttemptStatus::Failed)
				.count(),
		}
	}
}

/// Run one submission end to end: record it, send it, record the outcome.
/// Returns the id of the attempt created for this call.
pub async fn process_upload(
	session: &mut UploadSession,
	uploader: &Uploader,
	file: &SourceFile,
) -> AttemptId {
	let id = session.submit(file);
	if session.status_of(&id) == Some(AttemptStatus::Failed) {
		// Rejected by validation; the transport is never called.
		return id;
	}
	session.mark_in_flight(&id);
	let outcome = uploader.send(file).await;
	session.complete(&id, outcome);
	id
}

/// Re-submit a previous attempt's file as a brand new attempt. `None` when
/// the original content is no longer retained; the history is untouched then.
pub async fn process_retry(
	session: &mut UploadSession,
	uploader: &Uploader,
	id: &str,
) -> Option<AttemptId> {
	let source = session.retry_source(id)?;
	info!("retrying attempt {id} as a new submission");
	Some(process_upload(session, uploader, &source).await)
}
