//! Tandem LLM Provider Layer
//!
//! Completion-provider implementations behind a common trait.
//!
//! # Architecture
//!
//! The analyzer only sees [`CompletionProvider`]: a chat-style request in,
//! the assistant's text out. Retry handling lives inside the concrete
//! provider, driven by the pure policy in [`retry`], so orchestration code
//! never branches on HTTP status codes.
//!
//! # Providers
//!
//! - [`MockProvider`]: deterministic scripted responses for testing
//! - [`OpenAiProvider`]: chat-completions API over HTTPS
//!
//! # Examples
//!
//! ```
//! use tandem_llm::{ChatRequest, CompletionProvider, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"relationships": []}"#);
//! let request = ChatRequest::new("system prompt", "user prompt");
//! let text = provider.complete(request).await.unwrap();
//! assert!(text.contains("relationships"));
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;
pub mod retry;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::{OpenAiConfig, OpenAiProvider};
pub use retry::RetryPolicy;

/// Errors that can occur during completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// HTTP 429 from the API
    #[error("Rate limit exceeded")]
    RateLimited,

    /// HTTP 5xx from the API
    #[error("Server error: HTTP {0}")]
    Server(u16),

    /// Any other non-success status; never retried
    #[error("Client error: HTTP {status}: {body}")]
    Client {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Network-level failure before a status was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response arrived but did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Bounded retries were exhausted without success
    #[error("Failed after {0} attempts")]
    RetriesExhausted(u32),
}

/// A chat-completion request: one system message and one user message
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// System message content
    pub system: String,
    /// User message content
    pub user: String,
}

impl ChatRequest {
    /// Create a request from system and user message content
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// A source of chat completions
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion and return the assistant's text
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
}

/// Mock provider for deterministic testing
///
/// Returns scripted responses in order, then falls back to a default
/// response. Errors can be queued the same way. Clones share state, so a
/// test can keep a handle for assertions while the analyzer owns another.
#[derive(Clone)]
pub struct MockProvider {
    default_response: String,
    queue: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider that answers every request with `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a response to be returned before the default kicks in
    pub fn push_response(&self, response: impl Into<String>) {
        self.queue.lock().unwrap().push_back(Ok(response.into()));
    }

    /// Queue an error to be returned before the default kicks in
    pub fn push_error(&self, error: LlmError) {
        self.queue.lock().unwrap().push_back(Err(error));
    }

    /// Number of completed calls so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(r#"{"relationships": [], "mutual_benefit": false}"#)
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(&self, _request: ChatRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;
        match self.queue.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.default_response.clone()),
        }
    }
}
