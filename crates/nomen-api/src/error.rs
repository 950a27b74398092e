//! API error handling
//!
//! Author: hephaex@gmail.com

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nomen_core::NomenError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message returned when the request carries no usable `text`
pub const NO_QUERY_MESSAGE: &str = "No query provided in request body";

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    #[schema(example = "No query provided in request body")]
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Caller did not supply a query
    BadRequest(String),
    /// Processing failed
    Internal(String),
}

impl AppError {
    pub fn no_query() -> Self {
        AppError::BadRequest(NO_QUERY_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!("Error processing request: {}", msg);
                msg
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<NomenError> for AppError {
    fn from(err: NomenError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
