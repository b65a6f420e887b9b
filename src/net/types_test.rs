use super::*;

// =============================================================
// UploadResponse
// =============================================================

#[test]
fn upload_response_parses_session_id() {
    let resp: UploadResponse = serde_json::from_value(serde_json::json!({
        "session_id": "abc123",
        "message": "Successfully uploaded and processed 42 chunks."
    }))
    .unwrap();
    assert_eq!(resp.session_id, "abc123");
    assert!(resp.message.unwrap().contains("42"));
}

#[test]
fn upload_response_message_is_optional() {
    let resp: UploadResponse =
        serde_json::from_value(serde_json::json!({"session_id": "abc123"})).unwrap();
    assert_eq!(resp.session_id, "abc123");
    assert!(resp.message.is_none());
}

// =============================================================
// AskResponse and SourceRef
// =============================================================

#[test]
fn ask_response_parses_canonical_source_field() {
    let resp: AskResponse = serde_json::from_value(serde_json::json!({
        "answer": "Roll again.",
        "sources": [{"source": "rulebook.pdf", "page": 7, "text": "When a player rolls..."}]
    }))
    .unwrap();
    let sources = resp.sources.unwrap();
    assert_eq!(sources[0].source, "rulebook.pdf");
    assert_eq!(sources[0].page, 7);
    assert!(sources[0].text.is_some());
}

#[test]
fn ask_response_accepts_legacy_file_field() {
    let resp: AskResponse = serde_json::from_value(serde_json::json!({
        "answer": "Roll again.",
        "sources": [{"file": "rulebook.pdf", "page": 7}]
    }))
    .unwrap();
    assert_eq!(resp.sources.unwrap()[0].source, "rulebook.pdf");
}

#[test]
fn ask_response_sources_are_optional() {
    let resp: AskResponse =
        serde_json::from_value(serde_json::json!({"answer": "I don't know."})).unwrap();
    assert!(resp.sources.is_none());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn ask_request_serializes_both_fields() {
    let body = AskRequest {
        session_id: "abc123".to_owned(),
        question: "How do I trade?".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"session_id": "abc123", "question": "How do I trade?"})
    );
}

#[test]
fn end_session_request_serializes_session_id() {
    let body = EndSessionRequest {
        session_id: "abc123".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"session_id": "abc123"})
    );
}
