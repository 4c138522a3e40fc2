//! Error types for the verifier service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::Verdict;

/// Failures talking to the vision model. All of them end in a mock verdict.
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("vision request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("vision API returned status {status}")]
    Status { status: u16 },

    #[error("vision API returned no choices")]
    EmptyResponse,

    #[error("vision reply is not a verdict: {0}")]
    MalformedVerdict(String),
}

/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid verify request: {0}")]
    InvalidVerifyRequest(#[from] serde_json::Error),

    #[error("{0} not found")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidVerifyRequest(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Verdict::processing_error()),
            )
                .into_response(),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": format!("{what} not found") })),
            )
                .into_response(),
        }
    }
}
