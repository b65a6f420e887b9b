use super::*;

// =============================================================
// Game name
// =============================================================

#[test]
fn game_name_is_trimmed() {
    assert_eq!(validate_game_name("  Catan  ").unwrap(), "Catan");
}

#[test]
fn game_name_rejects_empty_and_whitespace() {
    assert_eq!(validate_game_name(""), Err(ValidationError::EmptyGameName));
    assert_eq!(
        validate_game_name("   \t "),
        Err(ValidationError::EmptyGameName)
    );
}

// =============================================================
// Rulebook file
// =============================================================

#[test]
fn pdf_within_limit_is_accepted() {
    assert_eq!(validate_rulebook_file(PDF_MIME, 1024.0), Ok(()));
    assert_eq!(validate_rulebook_file(PDF_MIME, MAX_UPLOAD_BYTES), Ok(()));
}

#[test]
fn non_pdf_mime_is_rejected() {
    assert_eq!(
        validate_rulebook_file("text/plain", 1024.0),
        Err(ValidationError::NotPdf)
    );
    // Exact match only; no prefix or parameter forms.
    assert_eq!(
        validate_rulebook_file("application/pdf; charset=binary", 1024.0),
        Err(ValidationError::NotPdf)
    );
}

#[test]
fn oversized_file_is_rejected() {
    assert_eq!(
        validate_rulebook_file(PDF_MIME, MAX_UPLOAD_BYTES + 1.0),
        Err(ValidationError::TooLarge)
    );
}

#[test]
fn validation_messages_read_as_user_text() {
    assert_eq!(
        ValidationError::EmptyGameName.to_string(),
        "Please enter a game name"
    );
    assert_eq!(ValidationError::NotPdf.to_string(), "Please select a PDF file");
    assert_eq!(
        ValidationError::TooLarge.to_string(),
        "File size must be less than 50MB"
    );
}

// =============================================================
// Chat submission gate
// =============================================================

#[test]
fn submission_requires_trimmed_content() {
    assert!(can_submit_question("How do I trade?", false));
    assert!(!can_submit_question("", false));
    assert!(!can_submit_question("   ", false));
}

#[test]
fn submission_is_blocked_while_asking() {
    assert!(!can_submit_question("How do I trade?", true));
}
