//! Surname extraction handler
//!
//! Author: hephaex@gmail.com

use crate::error::AppError;
#[allow(unused_imports)] // referenced by the utoipa::path attribute
use crate::error::ErrorResponse;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

/// Extraction request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    /// Free text that may mention a person
    #[schema(example = "Jean habite à Paris")]
    pub text: String,
}

/// Extraction response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExtractResponse {
    /// Uppercased surname, or null when none was found
    #[schema(example = "JEAN")]
    pub response: Option<String>,
}

/// Pull the query text out of a raw request body
///
/// An empty body or a `text` field that is absent or empty-like is an input
/// error. Anything else that cannot be read as a string query is a
/// processing error.
pub fn parse_query(body: &[u8]) -> Result<String, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::no_query());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Internal(format!("Invalid JSON in request body: {e}")))?;

    let Value::Object(fields) = value else {
        return Err(AppError::Internal(
            "Request body must be a JSON object".to_string(),
        ));
    };

    match fields.get("text") {
        None => Err(AppError::no_query()),
        Some(text) if is_empty_like(text) => Err(AppError::no_query()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(AppError::Internal(format!(
            "Field 'text' must be a string, got {other}"
        ))),
    }
}

/// null, false, zero, and empty strings, arrays or objects
fn is_empty_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Extract a surname from free text
#[utoipa::path(
    post,
    path = "/api/get_nom_famille",
    tag = "extract",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extraction completed", body = ExtractResponse),
        (status = 400, description = "No query provided", body = ErrorResponse),
        (status = 500, description = "Processing error", body = ErrorResponse)
    )
)]
pub async fn extract_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ExtractResponse>, AppError> {
    state.increment_requests();
    tracing::info!("HTTP trigger processed a request");

    // Oversized or unreadable bodies are processing failures
    let body = body.map_err(|rejection| AppError::Internal(rejection.body_text()))?;
    let text = parse_query(&body)?;
    let response = state.extractor.extract_name(&text).await?;
    state.record_extraction(response.is_some());

    Ok(Json(ExtractResponse { response }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_query(result: Result<String, AppError>) {
        assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == crate::error::NO_QUERY_MESSAGE));
    }

    #[test]
    fn test_parse_query_ok() {
        let text = parse_query(r#"{"text": "Jean habite à Paris"}"#.as_bytes()).unwrap();
        assert_eq!(text, "Jean habite à Paris");
    }

    #[test]
    fn test_parse_query_keeps_whitespace_text() {
        assert_eq!(parse_query(br#"{"text": "   "}"#).unwrap(), "   ");
    }

    #[test]
    fn test_parse_query_missing_or_empty() {
        assert_no_query(parse_query(b""));
        assert_no_query(parse_query(b"  \n"));
        assert_no_query(parse_query(b"{}"));
        assert_no_query(parse_query(br#"{"text": ""}"#));
        assert_no_query(parse_query(br#"{"text": null}"#));
        assert_no_query(parse_query(br#"{"text": 0}"#));
        assert_no_query(parse_query(br#"{"text": false}"#));
        assert_no_query(parse_query(br#"{"query": "Jean"}"#));
    }

    #[test]
    fn test_parse_query_malformed() {
        assert!(matches!(parse_query(b"{text:"), Err(AppError::Internal(_))));
        assert!(matches!(
            parse_query(br#"["Jean"]"#),
            Err(AppError::Internal(_))
        ));
        assert!(matches!(
            parse_query(br#"{"text": 42}"#),
            Err(AppError::Internal(_))
        ));
    }
}
