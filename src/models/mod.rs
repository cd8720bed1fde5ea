use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound body for `POST /api/ai`.
///
/// `query` is decoded as a raw JSON value so a missing field and a non-string
/// value both reach the validation branch instead of a serde reject with a
/// different body shape.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: Option<Value>,
}

impl AskRequest {
    /// The query text, if it is a non-empty string.
    pub fn query_text(&self) -> Option<&str> {
        self.query
            .as_ref()
            .and_then(Value::as_str)
            .filter(|query| !query.is_empty())
    }
}

/// Every response body, success or failure, carries exactly one reply string.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> AskRequest {
        serde_json::from_value(body).expect("body should decode")
    }

    #[test]
    fn accepts_non_empty_string_query() {
        let ask = request(json!({ "query": "what is aspirin?" }));
        assert_eq!(ask.query_text(), Some("what is aspirin?"));
    }

    #[test]
    fn rejects_missing_query() {
        assert_eq!(request(json!({})).query_text(), None);
    }

    #[test]
    fn rejects_non_string_query() {
        assert_eq!(request(json!({ "query": 42 })).query_text(), None);
        assert_eq!(request(json!({ "query": ["a"] })).query_text(), None);
        assert_eq!(request(json!({ "query": null })).query_text(), None);
    }

    #[test]
    fn rejects_empty_query() {
        assert_eq!(request(json!({ "query": "" })).query_text(), None);
    }
}
