//! Mock Generator for testing.
//!
//! Configurable mock implementation of the Generator port, allowing tests
//! to run without calling a real completion API.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{GenerationRequest, Generator, GeneratorError};

/// Mock generator for testing.
///
/// Configurable to return specific responses, simulate delays, or inject
/// errors.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return generated text.
    Success(String),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate an unparseable provider response.
    Parse { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for GeneratorError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => {
                GeneratorError::rate_limited(retry_after_secs)
            }
            MockError::Unavailable { message } => GeneratorError::unavailable(message),
            MockError::AuthenticationFailed => GeneratorError::AuthenticationFailed,
            MockError::Network { message } => GeneratorError::network(message),
            MockError::Parse { message } => GeneratorError::parse(message),
            MockError::Timeout { timeout_secs } => GeneratorError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    /// Creates a new mock generator with default settings.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Success(content.into()));
        drop(responses);
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        let mut responses = self.responses.lock().unwrap();
        responses.push_back(MockResponse::Error(error));
        drop(responses);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this generator.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next response or a default.
    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success("Mock response".to_string()))
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success(content) => Ok(content),
            MockResponse::Error(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_response() {
        let generator = MockGenerator::new().with_response("Hello from mock!");
        let text = generator
            .generate(GenerationRequest::new("prompt"))
            .await
            .unwrap();
        assert_eq!(text, "Hello from mock!");
    }

    #[tokio::test]
    async fn returns_responses_in_order() {
        let generator = MockGenerator::new()
            .with_response("First")
            .with_response("Second");

        let r1 = generator.generate(GenerationRequest::new("a")).await.unwrap();
        let r2 = generator.generate(GenerationRequest::new("b")).await.unwrap();

        assert_eq!(r1, "First");
        assert_eq!(r2, "Second");
    }

    #[tokio::test]
    async fn returns_default_after_exhausted() {
        let generator = MockGenerator::new().with_response("Only one");
        generator.generate(GenerationRequest::new("a")).await.unwrap();
        let text = generator.generate(GenerationRequest::new("b")).await.unwrap();
        assert_eq!(text, "Mock response");
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let generator =
            MockGenerator::new().with_error(MockError::RateLimited { retry_after_secs: 30 });

        let err = generator
            .generate(GenerationRequest::new("prompt"))
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert!(matches!(err, GeneratorError::RateLimited { retry_after_secs: 30 }));
    }

    #[tokio::test]
    async fn tracks_calls() {
        let generator = MockGenerator::new().with_response("ok");
        assert_eq!(generator.call_count(), 0);

        generator
            .generate(GenerationRequest::new("what is phishing?"))
            .await
            .unwrap();

        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.calls()[0].prompt, "what is phishing?");

        generator.clear_calls();
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn respects_delay() {
        let generator = MockGenerator::new()
            .with_response("delayed")
            .with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        generator.generate(GenerationRequest::new("prompt")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn mock_error_converts_to_generator_error() {
        let err: GeneratorError = MockError::AuthenticationFailed.into();
        assert!(matches!(err, GeneratorError::AuthenticationFailed));

        let err: GeneratorError = MockError::Timeout { timeout_secs: 30 }.into();
        assert!(matches!(err, GeneratorError::Timeout { timeout_secs: 30 }));

        let err: GeneratorError = MockError::Network {
            message: "reset".to_string(),
        }
        .into();
        assert!(matches!(err, GeneratorError::Network(_)));
    }
}
