use todo_core::seed_list::{SeedPrompt, DEFAULT_ITEM_COUNT, DEFAULT_TOPIC};
use todo_openai::OpenAiConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// What `GET /api/todo/initialize` asks the completion endpoint for.
    pub seed_prompt: SeedPrompt,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SEED_TOPIC`           | `household`                |
    /// | `SEED_COUNT`           | `10`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let topic = std::env::var("SEED_TOPIC").unwrap_or_else(|_| DEFAULT_TOPIC.into());

        let item_count: u32 = std::env::var("SEED_COUNT")
            .unwrap_or_else(|_| DEFAULT_ITEM_COUNT.to_string())
            .parse()
            .expect("SEED_COUNT must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            seed_prompt: SeedPrompt::new(topic, item_count),
        }
    }
}

/// Shorten the outbound completion timeout so it fires at least one second
/// before the request timeout. A slow endpoint then fails the call with an
/// upstream error instead of the request being dropped with 408.
pub fn cap_outbound_timeout(mut openai: OpenAiConfig, request_timeout_secs: u64) -> OpenAiConfig {
    let cap = request_timeout_secs.saturating_sub(1).max(1);
    openai.timeout_secs = openai.timeout_secs.min(cap);
    openai
}
