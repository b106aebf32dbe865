use thiserror::Error;

/// MIME types the webhook accepts, matched exactly (no wildcards).
pub const ALLOWED_TYPES: [&str; 6] = [
	"application/pdf",
	"image/jpeg",
	"image/png",
	"image/gif",
	"image/webp",
	"text/csv",
];

/// 50 MiB.
pub const MAX_SIZE: u64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
	#[error("File type not supported. Allowed: PDF, JPEG, PNG, GIF, WebP, CSV")]
	UnsupportedType { mime: String },

	#[error("File size exceeds 50MB limit. Your file is {size_mb:.2}MB")]
	TooLarge { size_mb: f64 },
}

/// Check a file's metadata before any network work. Type first, then size;
/// only one reason is ever reported.
pub fn validate(mime_type: &str, byte_size: u64) -> Result<(), ValidationError> {
	if !ALLOWED_TYPES.contains(&mime_type) {
		return Err(ValidationError::UnsupportedType {
			mime: mime_type.to_string(),
		});
	}
	if byte_size > MAX_SIZE {
		return Err(ValidationError::TooLarge {
			size_mb: byte_size as f64 / 1024.0 / 1024.0,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_every_allowed_type() {
		for mime in ALLOWED_TYPES {
			assert_eq!(validate(mime, 1024), Ok(()), "{mime}");
		}
	}

	#[test]
	fn rejects_unknown_types_regardless_of_size() {
		for size in [0, 1, MAX_SIZE, MAX_SIZE * 2] {
			let err = validate("application/zip", size).unwrap_err();
			assert!(matches!(err, ValidationError::UnsupportedType { .. }));
		}
	}

	#[test]
	fn mime_match_is_case_sensitive() {
		let err = validate("Application/PDF", 1024).unwrap_err();
		assert!(matches!(err, ValidationError::UnsupportedType { .. }));
	}

	#[test]
	fn size_limit_is_inclusive() {
		assert_eq!(validate("application/pdf", MAX_SIZE), Ok(()));
		let err = validate("application/pdf", MAX_SIZE + 1).unwrap_err();
		assert!(matches!(err, ValidationError::TooLarge { .. }));
	}

	#[test]
	fn oversize_message_renders_mib_with_two_decimals() {
		let err = validate("image/png", 60 * 1024 * 1024).unwrap_err();
		assert_eq!(
			err.to_string(),
			"File size exceeds 50MB limit. Your file is 60.00MB"
		);
	}

	#[test]
	fn type_check_wins_over_size_check() {
		// An oversize file of a disallowed type reports the type problem only.
		let err = validate("video/mp4", MAX_SIZE * 2).unwrap_err();
		assert!(matches!(err, ValidationError::UnsupportedType { .. }));
	}
}
