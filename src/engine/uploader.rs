use std::time::Duration;

use reqwest::{header::ACCEPT, multipart, Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{config::Config, models::attempt::SourceFile};

#[derive(Debug, Error)]
pub enum UploadError {
	/// The webhook answered with a non-success status.
	#[error("Upload failed: {status} {status_text} {detail}")]
	Http {
		status: u16,
		status_text: String,
		detail: String,
	},

	/// The request never completed (connect failure, timeout).
	#[error("Network error: {0}")]
	Network(String),

	/// Success status but the body was not valid JSON.
	#[error("Invalid JSON in webhook response: {0}")]
	MalformedResponse(String),

	/// The HTTP client or the request could not be built.
	#[error("HTTP client error: {0}")]
	Client(String),
}

/// Delivers one file per call to the automation webhook. No internal retries;
/// retrying is an explicit session-level action.
#[derive(Debug, Clone)]
pub struct Uploader {
	client: Client,
	endpoint: String,
}

impl Uploader {
	pub fn new(config: &Config) -> Result<Self, UploadError> {
		let client = Client::builder()
			.timeout(Duration::from_secs(config.timeout_secs))
			.build()
			.map_err(|e| UploadError::Client(e.to_string()))?;
		Ok(Self {
			client,
			endpoint: config.webhook_url.clone(),
		})
	}

	/// POST the file as multipart form data under a single `file` field and
	/// parse the JSON reply. Exactly one network call per invocation.
	pub async fn send(&self, file: &SourceFile) -> Result<Value, UploadError> {
		let part = multipart::Part::bytes(file.content.as_ref().clone())
			.file_name(file.name.clone())
			.mime_str(&file.mime)
			.map_err(|e| UploadError::Client(e.to_string()))?;
		let form = multipart::Form::new().part("file", part);

		debug!("POST {} ({}, {} bytes)", self.endpoint, file.mime, file.size());
		let response = self
			.client
			.post(&self.endpoint)
			.header(ACCEPT, "application/json")
			.multipart(form)
			.send()
			.await
			.map_err(|e| UploadError::Network(e.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			let status_text = status_text(status);
			// Read as much of the body as possible; fall back to the status
			// text when it is unreadable or empty.
			let detail = match response.text().await {
				Ok(body) if !body.is_empty() => body,
				_ => status_text.clone(),
			};
			warn!("webhook returned {}: {}", status, detail);
			return Err(UploadError::Http {
				status: status.as_u16(),
				status_text,
				detail,
			});
		}

		let body = response
			.text()
			.await
			.map_err(|e| UploadError::Network(e.to_string()))?;
		serde_json::from_str(&body).map_err(|e| UploadError::MalformedResponse(e.to_string()))
	}
}

fn status_text(status: StatusCode) -> String {
	status.canonical_reason().unwrap_or("Unknown Status").to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::testserver::{one_shot_server, unreachable_endpoint};

	fn test_config(endpoint: String) -> Config {
		Config {
			webhook_url: endpoint,
			timeout_secs: 5,
		}
	}

	fn sample_file() -> SourceFile {
		SourceFile::new("invoice.pdf", "application/pdf", b"%PDF-1.4 test".to_vec())
	}

	#[tokio::test]
	async fn success_returns_parsed_json_as_is() {
		let endpoint = one_shot_server("200 OK", r#"{"invoice_id":"INV-1","total":"100"}"#);
		let uploader = Uploader::new(&test_config(endpoint)).unwrap();

		let payload = uploader.send(&sample_file()).await.unwrap();

		assert_eq!(payload["invoice_id"], "INV-1");
		assert_eq!(payload["total"], "100");
	}

	#[tokio::test]
	async fn http_error_embeds_status_text_and_body() {
		let endpoint = one_shot_server("500 Internal Server Error", "bad gateway");
		let uploader = Uploader::new(&test_config(endpoint)).unwrap();

		let err = uploader.send(&sample_file()).await.unwrap_err();

		let msg = err.to_string();
		assert!(msg.contains("500"), "{msg}");
		assert!(msg.contains("Internal Server Error"), "{msg}");
		assert!(msg.contains("bad gateway"), "{msg}");
		assert!(matches!(err, UploadError::Http { status: 500, .. }));
	}

	#[tokio::test]
	async fn empty_error_body_falls_back_to_status_text() {
		let endpoint = one_shot_server("502 Bad Gateway", "");
		let uploader = Uploader::new(&test_config(endpoint)).unwrap();

		let err = uploader.send(&sample_file()).await.unwrap_err();

		match err {
			UploadError::Http { detail, .. } => assert_eq!(detail, "Bad Gateway"),
			other => panic!("expected Http error, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn unparsable_success_body_is_malformed_response() {
		let endpoint = one_shot_server("200 OK", "<html>not json</html>");
		let uploader = Uploader::new(&test_config(endpoint)).unwrap();

		let err = uploader.send(&sample_file()).await.unwrap_err();

		assert!(matches!(err, UploadError::MalformedResponse(_)));
	}

	#[tokio::test]
	async fn unreachable_endpoint_is_a_network_error() {
		let uploader = Uploader::new(&test_config(unreachable_endpoint())).unwrap();

		let err = uploader.send(&sample_file()).await.unwrap_err();

		assert!(matches!(err, UploadError::Network(_)));
	}
}
