use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::AskResponse;
use crate::services::gemini::GeminiError;

pub const INVALID_QUERY_REPLY: &str = "Missing or invalid query.";

pub const NOT_CONFIGURED_REPLY: &str =
    "The AI service is not configured. Please consult a doctor for serious advice.";

pub const UPSTREAM_DOWN_REPLY: &str =
    "The AI service is not responding right now. Please consult a doctor for serious advice.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or invalid query")]
    InvalidQuery,

    #[error("GOOGLE_API_KEY is not configured")]
    NotConfigured,

    #[error("upstream call failed: {0}")]
    Upstream(#[from] GeminiError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The caller only ever sees a canned reply; upstream detail stays in
        // the server-side logs.
        let (status, reply) = match self {
            ApiError::InvalidQuery => (StatusCode::BAD_REQUEST, INVALID_QUERY_REPLY),
            ApiError::NotConfigured => (StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED_REPLY),
            ApiError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_DOWN_REPLY),
        };

        (
            status,
            Json(AskResponse {
                reply: reply.to_string(),
            }),
        )
            .into_response()
    }
}
