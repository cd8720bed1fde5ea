use secrecy::Secret;
use std::env;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Process configuration, read once at startup and passed explicitly into the
/// upstream client and router. No ambient lookups after this point.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Listen port. Port 0 binds an ephemeral port (used by tests).
    pub port: u16,
    pub google: GoogleSettings,
}

#[derive(Debug, Clone)]
pub struct GoogleSettings {
    /// Credential for the Generative Language API. A missing key does not
    /// fail startup; requests are answered with the "not configured" reply.
    pub api_key: Option<Secret<String>>,
    pub model: String,
}

impl Settings {
    pub fn load() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = env::var("GOOGLE_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(Secret::new);

        let model = env::var("GOOGLE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            port,
            google: GoogleSettings { api_key, model },
        }
    }
}
