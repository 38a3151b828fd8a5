//! REST client for the chat-completions endpoint.
//!
//! Sends one question per call and returns the first answer as plain text,
//! using [`reqwest`] with a bearer credential.

use std::time::Duration;

use crate::config::OpenAiConfig;
use crate::messages::{ChatCompletionRequest, ChatCompletionResponse};

/// HTTP client bound to one configured endpoint.
pub struct ChatCompletionApi {
    client: reqwest::Client,
    config: OpenAiConfig,
}

/// Errors from the chat-completion layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout) or the
    /// body was not the expected JSON.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("Chat completion API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response parsed but carried no answer text.
    #[error("Chat completion response contained no answer")]
    EmptyAnswer,
}

impl ChatCompletionApi {
    /// Build a client with the configured timeout.
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Ask a single question and return the first choice's text.
    pub async fn ask(&self, question: &str) -> Result<String, OpenAiApiError> {
        let request =
            ChatCompletionRequest::question(&self.config.model, self.config.temperature, question);

        tracing::debug!(url = %self.config.url, model = %self.config.model, "Sending chat completion request");

        let response = self
            .client
            .post(&self.config.url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let completion: ChatCompletionResponse = Self::parse_response(response).await?;

        completion
            .answer()
            .map(str::to_string)
            .ok_or(OpenAiApiError::EmptyAnswer)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`OpenAiApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OpenAiApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OpenAiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OpenAiApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
