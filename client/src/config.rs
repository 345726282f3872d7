use std::env;

/// Origin of the hosted API.
pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

const API_KEY_VAR: &str = "PERPLEXITY_API_KEY";
const BASE_URL_VAR: &str = "PERPLEXITY_BASE_URL";

/// Settings needed to reach the API: the bearer credential and where to send it.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ClientConfig {
    /// Creates a configuration pointing at [`DEFAULT_BASE_URL`].
    pub fn new<K: Into<String>>(api_key: K) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url<U: Into<String>>(mut self, base_url: U) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `PERPLEXITY_API_KEY` and, if set, `PERPLEXITY_BASE_URL`.
    pub fn from_env() -> Result<Self, env::VarError> {
        let api_key = env::var(API_KEY_VAR)?;
        let config = Self::new(api_key);
        Ok(match env::var(BASE_URL_VAR) {
            Ok(base_url) if !base_url.is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }

    /// Full URL of an endpoint path such as `/chat/completions`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
