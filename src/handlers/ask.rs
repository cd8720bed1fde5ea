use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::{AskRequest, AskResponse};
use crate::services::gemini::interpret_response;
use crate::AppState;

/// `POST /api/ai` — forward a pharmacy question to Gemini.
///
/// Outcomes in order: invalid query (400, no upstream call), no API key
/// configured (500, no upstream call), upstream transport/decode failure
/// (500), otherwise 200 with the interpreted reply. Safety blocks and
/// text-free upstream bodies are successes carrying a canned reply.
///
/// The body is extracted as a `Result` so non-object JSON takes the same
/// canned 400 as a missing query instead of the extractor's own rejection.
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::InvalidQuery)?;
    let query = payload.query_text().ok_or(ApiError::InvalidQuery)?;

    let Some(gemini) = state.gemini.as_ref() else {
        tracing::error!("GOOGLE_API_KEY is not set; rejecting query");
        return Err(ApiError::NotConfigured);
    };

    let response = gemini.generate(query).await.map_err(|e| {
        tracing::error!(error = %e, "Gemini call failed");
        ApiError::Upstream(e)
    })?;

    Ok(Json(AskResponse {
        reply: interpret_response(&response),
    }))
}
