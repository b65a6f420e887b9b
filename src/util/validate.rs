//! Local validation that runs before anything reaches the network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use thiserror::Error;

/// Largest accepted rulebook upload.
pub const MAX_UPLOAD_BYTES: f64 = 50.0 * 1024.0 * 1024.0;

/// MIME type required of uploads.
pub const PDF_MIME: &str = "application/pdf";

/// Rejection of user input before any request is made.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a game name")]
    EmptyGameName,
    #[error("Please select a PDF file")]
    NotPdf,
    #[error("File size must be less than 50MB")]
    TooLarge,
}

/// Validate and normalize a game name: non-empty after trimming.
///
/// # Errors
///
/// Returns `ValidationError::EmptyGameName` for empty or whitespace-only
/// input.
pub fn validate_game_name(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyGameName);
    }
    Ok(trimmed.to_owned())
}

/// Validate a candidate rulebook file by MIME type and size.
///
/// # Errors
///
/// Returns `ValidationError::NotPdf` unless the type is exactly
/// `application/pdf`, or `ValidationError::TooLarge` above 50 MiB.
pub fn validate_rulebook_file(mime: &str, size_bytes: f64) -> Result<(), ValidationError> {
    if mime != PDF_MIME {
        return Err(ValidationError::NotPdf);
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }
    Ok(())
}

/// Gate for chat submission: a question goes out only when it has content
/// after trimming and no prior ask is still in flight.
pub fn can_submit_question(question: &str, asking: bool) -> bool {
    !asking && !question.trim().is_empty()
}
