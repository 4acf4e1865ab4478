/*!
 * Provider implementations for external translation services.
 *
 * This module contains client implementations for machine translation
 * backends:
 * - DeepL: REST API client
 * - Mock: Configurable fake translator for testing
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;
use crate::language::Language;

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing the pipeline to treat the external service as a black
/// box that may fail, time out, or alter whitespace, but is expected to pass
/// through ASCII-alphanumeric tokens unchanged.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate a text between the two supported languages
    ///
    /// # Arguments
    /// * `text` - The (protected, placeholder-laden) text to translate
    /// * `source` - Detected source language
    /// * `target` - Translation target language
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the service is reachable
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod deepl;
pub mod mock;
