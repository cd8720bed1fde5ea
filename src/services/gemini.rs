//! Gemini upstream client.
//!
//! Builds the pharmacist prompt, performs the single `generateContent` call,
//! and interprets the response body into a user-facing reply.

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// System instruction injected ahead of every user query.
const SYSTEM_PROMPT: &str = "You are an AI Pharmacist. Answer the user's medicine-related \
question in short numbered points, keeping the whole answer between 5 and 10 lines. Always end \
with this exact disclaimer: \"This is general information, not medical advice. Please consult a \
doctor or licensed pharmacist before taking any medicine.\"";

/// Reply when the upstream blocks the prompt for safety reasons. Still a 200
/// from the caller's perspective.
pub const SAFETY_BLOCK_REPLY: &str = "I cannot answer that due to safety guidelines. Please \
consult a doctor or licensed pharmacist for this question.";

/// Reply when a well-formed upstream response carries no candidate text.
pub const FALLBACK_REPLY: &str =
    "I'm not sure how to answer that safely. Please consult a doctor or licensed pharmacist.";

/// Error type for upstream calls. Both variants are opaque to the caller; the
/// handler maps them to the same canned 500 reply.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Secret<String>,
}

impl GeminiClient {
    pub fn new(api_key: Secret<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, GEMINI_API_BASE)
    }

    /// Point the client at a non-default endpoint. Tests use this to target a
    /// local mock server.
    pub fn with_base_url(
        api_key: Secret<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        }
    }

    /// Build the API URL. The key travels as a query credential, which is the
    /// Generative Language API's expected form.
    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        )
    }

    /// Send one `generateContent` call for the given query.
    ///
    /// A non-2xx status is logged but the body is still decoded and handed to
    /// the interpreter; only transport and decode failures are errors. No
    /// retries, no explicit timeout beyond reqwest's defaults.
    pub async fn generate(&self, query: &str) -> Result<GenerateContentResponse, GeminiError> {
        let request = build_request(query);

        tracing::debug!(
            model = %self.model,
            query_len = query.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = %status, body = %body, "Gemini API returned an error status");
        }

        serde_json::from_str(&body).map_err(|e| GeminiError::Decode(e.to_string()))
    }
}

/// Build the `generateContent` payload for a user query: the fixed system
/// instruction followed by the query text, untouched.
///
/// Pure: the system instruction is a compile-time constant, so the same query
/// always produces the same payload.
pub fn build_request(query: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    text: SYSTEM_PROMPT.to_string(),
                },
                Part {
                    text: query.to_string(),
                },
            ],
        }],
    }
}

/// Extract the user-facing reply from a decoded response.
///
/// Precedence: safety block, then first candidate's first text part verbatim,
/// then the canned fallback. Never fails; an unhelpful body is still a reply.
pub fn interpret_response(response: &GenerateContentResponse) -> String {
    if response.is_safety_blocked() {
        return SAFETY_BLOCK_REPLY.to_string();
    }

    match response.first_text() {
        Some(text) => text.to_string(),
        None => FALLBACK_REPLY.to_string(),
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    fn is_safety_blocked(&self) -> bool {
        if self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
            .is_some()
        {
            return true;
        }

        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            == Some("SAFETY")
    }

    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}
