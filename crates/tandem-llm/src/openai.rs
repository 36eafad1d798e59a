//! OpenAI chat-completions provider
//!
//! Speaks the chat-completions protocol with JSON-object response mode.
//! Every call runs under the bounded [`RetryPolicy`]: rate limits back
//! off exponentially, server errors retry after a fixed pause, anything
//! else surfaces immediately.

use crate::retry::RetryPolicy;
use crate::{ChatRequest, CompletionProvider, LlmError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion token budget
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Request timeout (seconds)
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Configuration for [`OpenAiProvider`]
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key (required)
    pub api_key: String,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Completion token budget
    pub max_tokens: u32,
    /// Attempt bound for the retry policy
    pub max_retries: u32,
    /// API base URL, overridable for tests and proxies
    pub base_url: String,
}

impl OpenAiConfig {
    /// Build a config from an API key and the defaults above
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_retries: crate::retry::DEFAULT_MAX_RETRIES,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!("temperature {} out of range [0, 2]", self.temperature));
        }
        if self.max_tokens == 0 {
            return Err("max_tokens must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Chat-completions provider with bounded retry
pub struct OpenAiProvider {
    config: OpenAiConfig,
    policy: RetryPolicy,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a provider from a validated configuration
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        config
            .validate()
            .map_err(|e| LlmError::InvalidResponse(format!("invalid configuration: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let policy = RetryPolicy::new(config.max_retries);

        Ok(Self {
            config,
            policy,
            client,
        })
    }

    /// Model this provider is configured for
    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn attempt(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &request.system,
                },
                Message {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }
        if status.is_server_error() {
            return Err(LlmError::Server(status.as_u16()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Client {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("malformed completion body: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("completion contained no choices".to_string()))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.attempt(&request).await {
                Ok(text) => {
                    debug!("Completion succeeded on attempt {}", attempt);
                    return Ok(text);
                }
                Err(error) => match self.policy.decide(&error, attempt) {
                    Some(delay) => {
                        warn!(
                            "Completion attempt {}/{} failed ({}), retrying in {:?}",
                            attempt,
                            self.policy.max_retries(),
                            error,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        return if attempt >= self.policy.max_retries()
                            && matches!(error, LlmError::RateLimited | LlmError::Server(_))
                        {
                            Err(LlmError::RetriesExhausted(self.policy.max_retries()))
                        } else {
                            Err(error)
                        };
                    }
                },
            }
        }
    }
}
