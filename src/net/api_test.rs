use super::*;

fn source(name: &str, page: u32) -> SourceRef {
    SourceRef {
        source: name.to_owned(),
        page,
        text: None,
    }
}

// =============================================================
// format_sources
// =============================================================

#[test]
fn format_sources_none_is_empty() {
    assert_eq!(format_sources(None), "");
}

#[test]
fn format_sources_empty_slice_is_empty() {
    assert_eq!(format_sources(Some(&[])), "");
}

#[test]
fn format_sources_single_entry() {
    let sources = [source("rulebook.pdf", 12)];
    assert_eq!(
        format_sources(Some(&sources)),
        "[Source: rulebook.pdf | Page: 12]"
    );
}

#[test]
fn format_sources_preserves_input_order() {
    let sources = [source("rulebook.pdf", 12), source("expansion.pdf", 3)];
    assert_eq!(
        format_sources(Some(&sources)),
        "[Source: rulebook.pdf | Page: 12] [Source: expansion.pdf | Page: 3]"
    );
}

// =============================================================
// generate_message_id
// =============================================================

#[test]
fn message_ids_have_the_msg_prefix() {
    assert!(generate_message_id().starts_with("msg-"));
}

#[test]
fn message_ids_are_distinct() {
    let ids: Vec<String> = (0..32).map(|_| generate_message_id()).collect();
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());
}

// =============================================================
// Configuration and errors
// =============================================================

#[test]
fn api_base_defaults_to_localhost() {
    if option_env!("RULECHAT_API_URL").is_none() {
        assert_eq!(api_base(), "http://127.0.0.1:8000");
    }
}

#[test]
fn api_errors_carry_status_text() {
    assert_eq!(
        ApiError::Upload("Bad Request".to_owned()).to_string(),
        "upload failed: Bad Request"
    );
    assert_eq!(
        ApiError::Ask("Internal Server Error".to_owned()).to_string(),
        "ask failed: Internal Server Error"
    );
    assert_eq!(
        ApiError::EndSession("Not Found".to_owned()).to_string(),
        "end session failed: Not Found"
    );
}
