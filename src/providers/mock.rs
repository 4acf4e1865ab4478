/*!
 * Mock translator implementations for testing.
 *
 * This module provides mock translators that simulate different behaviors:
 * - `MockTranslator::echo()` - Returns the input unchanged (placeholder
 *   pass-through, the contractual best case)
 * - `MockTranslator::failing()` - Always fails with a connection error
 * - `MockTranslator::empty()` - Returns an empty string
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::Translator;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Return the input text unchanged
    Echo,
    /// Always fail with a connection error
    Failing,
    /// Return an empty response
    Empty,
    /// Fail with a missing-credentials error
    Unauthenticated,
}

/// Mock translator for exercising pipeline behavior without a network
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls received
    call_count: Arc<AtomicUsize>,
    /// Custom response generator (optional, overrides the behavior mode)
    custom_response: Option<fn(&str, Language, Language) -> String>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a mock that passes every text through unchanged
    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    /// Create a mock that always fails with a connection error
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that fails with an authentication error
    pub fn unauthenticated() -> Self {
        Self::new(MockBehavior::Unauthenticated)
    }

    /// Set a custom response generator
    pub fn with_custom_response(
        mut self,
        generator: fn(&str, Language, Language) -> String,
    ) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls this mock has received
    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, for asserting after a move
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(generator) = self.custom_response {
            return Ok(generator(text, source, target));
        }

        match self.behavior {
            MockBehavior::Echo => Ok(text.to_string()),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "mock translator is configured to fail".to_string(),
            )),
            MockBehavior::Unauthenticated => Err(ProviderError::AuthenticationError(
                "mock translator has no credentials".to_string(),
            )),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "mock translator is configured to fail".to_string(),
            )),
            MockBehavior::Unauthenticated => Err(ProviderError::AuthenticationError(
                "mock translator has no credentials".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
