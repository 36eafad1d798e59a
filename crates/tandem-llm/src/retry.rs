//! Bounded retry policy for completion calls
//!
//! Modeled as an explicit `(error, attempt) -> Option<delay>` function so
//! the backoff schedule is testable without a live endpoint. The schedule
//! distinguishes status classes:
//!
//! - 429 rate limit: exponential backoff, `2^attempt` seconds
//! - 5xx server error: fixed 1 second
//! - everything else: terminal, no retry

use crate::LlmError;
use std::time::Duration;

/// Default bound on attempts per call
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Retry schedule with a bounded attempt count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
}

impl RetryPolicy {
    /// Create a policy allowing up to `max_retries` attempts
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Maximum number of attempts this policy allows
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Decide whether to retry after a failed attempt
    ///
    /// `attempt` is 1-based: the first failure is attempt 1. Returns the
    /// delay to wait before the next attempt, or `None` when the error is
    /// terminal or the attempt budget is spent.
    pub fn decide(&self, error: &LlmError, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_retries {
            return None;
        }

        match error {
            LlmError::RateLimited => Some(Duration::from_secs(2u64.pow(attempt))),
            LlmError::Server(_) => Some(Duration::from_secs(1)),
            _ => None,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_backs_off_exponentially() {
        let policy = RetryPolicy::new(4);
        assert_eq!(
            policy.decide(&LlmError::RateLimited, 1),
            Some(Duration::from_secs(2))
        );
        assert_eq!(
            policy.decide(&LlmError::RateLimited, 2),
            Some(Duration::from_secs(4))
        );
        assert_eq!(
            policy.decide(&LlmError::RateLimited, 3),
            Some(Duration::from_secs(8))
        );
    }

    #[test]
    fn test_server_error_fixed_delay() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.decide(&LlmError::Server(500), 1),
            Some(Duration::from_secs(1))
        );
        assert_eq!(
            policy.decide(&LlmError::Server(503), 2),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_client_error_is_terminal() {
        let policy = RetryPolicy::default();
        let error = LlmError::Client {
            status: 401,
            body: "bad key".to_string(),
        };
        assert_eq!(policy.decide(&error, 1), None);
    }

    #[test]
    fn test_transport_error_is_terminal() {
        let policy = RetryPolicy::default();
        let error = LlmError::Transport("connection refused".to_string());
        assert_eq!(policy.decide(&error, 1), None);
    }

    #[test]
    fn test_budget_exhaustion() {
        let policy = RetryPolicy::new(3);
        assert!(policy.decide(&LlmError::RateLimited, 2).is_some());
        assert_eq!(policy.decide(&LlmError::RateLimited, 3), None);
        assert_eq!(policy.decide(&LlmError::Server(500), 3), None);
    }
}
