#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response body of `POST /upload`.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
    /// Human-readable ingest summary, e.g. chunk count. Logged, not shown.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of `POST /ask`.
#[derive(Clone, Debug, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<SourceRef>>,
}

/// A rulebook citation attached to an answer.
///
/// The backend's canonical field name is `source`; `file` is accepted as a
/// legacy alias from the pre-migration schema and never produced.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SourceRef {
    #[serde(alias = "file")]
    pub source: String,
    pub page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Request body of `POST /ask`.
#[derive(Clone, Debug, Serialize)]
pub struct AskRequest {
    pub session_id: String,
    pub question: String,
}

/// Request body of `POST /end`.
#[derive(Clone, Debug, Serialize)]
pub struct EndSessionRequest {
    pub session_id: String,
}
