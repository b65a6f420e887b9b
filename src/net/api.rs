//! HTTP helpers for the rules-assistant backend.
//!
//! Client-side (csr): real calls via `gloo-net`. Host builds get stubs
//! returning errors, so the pure helpers and wire types stay testable
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Each endpoint maps a non-2xx response to its own `ApiError` variant
//! carrying the HTTP status text. No retries, no timeouts, exactly one
//! outbound request per call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AskResponse, SourceRef};
#[cfg(feature = "csr")]
use super::types::{AskRequest, EndSessionRequest, UploadResponse};

/// Backend base URL: compile-time override via `RULECHAT_API_URL`.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

pub fn api_base() -> &'static str {
    option_env!("RULECHAT_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Failure of one of the three backend calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("upload failed: {0}")]
    Upload(String),
    #[error("ask failed: {0}")]
    Ask(String),
    #[error("end session failed: {0}")]
    EndSession(String),
}

/// Upload a rulebook PDF via `POST /upload` (multipart: file + game name).
///
/// # Errors
///
/// Returns `ApiError::Upload` with the HTTP status text on a non-2xx
/// response, or with a transport/decode description otherwise.
#[cfg(feature = "csr")]
pub async fn upload_rulebook(
    file: &web_sys::File,
    game_name: &str,
) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Upload("could not build form data".to_owned()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Upload("could not attach file".to_owned()))?;
    form.append_with_str("game_name", game_name)
        .map_err(|_| ApiError::Upload("could not attach game name".to_owned()))?;

    let url = format!("{}/upload", api_base());
    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Upload(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Upload(resp.status_text()));
    }
    resp.json::<UploadResponse>()
        .await
        .map_err(|e| ApiError::Upload(e.to_string()))
}

/// Ask a question about the uploaded rulebook via `POST /ask`.
///
/// # Errors
///
/// Returns `ApiError::Ask` with the HTTP status text on a non-2xx
/// response. Callers swallow this into a fallback transcript message
/// rather than propagating it.
pub async fn ask_question(session_id: &str, question: &str) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = AskRequest {
            session_id: session_id.to_owned(),
            question: question.to_owned(),
        };
        let url = format!("{}/ask", api_base());
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Ask(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Ask(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Ask(resp.status_text()));
        }
        resp.json::<AskResponse>()
            .await
            .map_err(|e| ApiError::Ask(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session_id, question);
        Err(ApiError::Ask("not available on this target".to_owned()))
    }
}

/// End the chat session via `POST /end`. Best-effort: callers reset local
/// state whether or not this succeeds.
///
/// # Errors
///
/// Returns `ApiError::EndSession` with the HTTP status text on a non-2xx
/// response.
pub async fn end_session(session_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = EndSessionRequest {
            session_id: session_id.to_owned(),
        };
        let url = format!("{}/end", api_base());
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::EndSession(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::EndSession(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::EndSession(resp.status_text()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session_id;
        Err(ApiError::EndSession("not available on this target".to_owned()))
    }
}

/// Generate a message id unique with high probability (not cryptographic):
/// capture time plus a short random suffix. Used only as a rendering key.
pub fn generate_message_id() -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("msg-{}-{}", now_ms() as u64, &suffix[..9])
}

/// Current time in epoch milliseconds, from the browser clock when
/// available and the system clock otherwise.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}

/// Render citations for display under an answer bubble.
///
/// Absent or empty input renders as the empty string; otherwise each
/// citation becomes a bracketed fragment in input order, space-joined.
pub fn format_sources(sources: Option<&[SourceRef]>) -> String {
    let Some(sources) = sources else {
        return String::new();
    };
    sources
        .iter()
        .map(|s| format!("[Source: {} | Page: {}]", s.source, s.page))
        .collect::<Vec<_>>()
        .join(" ")
}
