/// Default model name sent with every request.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default client-side timeout for one completion call. Kept below the
/// server's default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Connection settings for the chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full endpoint URL, e.g. `https://api.openai.com/v1/chat/completions`.
    pub url: String,
    /// Bearer credential. May be empty for endpoints that do not check it.
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Config with default model, temperature `0` and default timeout.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` when `OPENAI_URL` is unset or blank, meaning no
    /// outbound endpoint is configured.
    ///
    /// | Env Var               | Default          |
    /// |-----------------------|------------------|
    /// | `OPENAI_URL`          | (none)           |
    /// | `OPENAI_API_KEY`      | empty            |
    /// | `OPENAI_MODEL`        | `gpt-3.5-turbo`  |
    /// | `OPENAI_TEMPERATURE`  | `0`              |
    /// | `OPENAI_TIMEOUT_SECS` | `20`             |
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("OPENAI_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())?;

        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let temperature: f32 = std::env::var("OPENAI_TEMPERATURE")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .expect("OPENAI_TEMPERATURE must be a valid f32");

        let timeout_secs: u64 = std::env::var("OPENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("OPENAI_TIMEOUT_SECS must be a valid u64");

        Some(Self {
            url,
            api_key,
            model,
            temperature,
            timeout_secs,
        })
    }
}
