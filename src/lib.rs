//! Document upload client: pick a PDF, image, or CSV, deliver it to an
//! automation webhook as multipart form data, and keep an in-memory history
//! of every attempt. Successful responses are classified as invoice
//! extraction output or generic key/value data for display.
//!
//! The core (validation, transport, session, classification) carries no GUI
//! dependencies; the Dioxus desktop front end sits behind the `desktop`
//! feature.

pub mod config;
pub mod engine;
pub mod models;
pub mod util;

#[cfg(feature = "desktop")]
pub mod ui;

pub use config::Config;
pub use engine::classify::{build_view, classify, flatten, RenderMode, ResponseView};
pub use engine::session::{process_retry, process_upload, SessionStats, UploadSession};
pub use engine::uploader::{UploadError, Uploader};
pub use engine::validator::{validate, ValidationError};
pub use models::attempt::{AttemptStatus, SourceFile, UploadAttempt};
