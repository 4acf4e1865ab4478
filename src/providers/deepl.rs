/*!
 * DeepL REST API client.
 *
 * Implements the [`Translator`] trait against the DeepL `/v2/translate`
 * endpoint. The free-tier endpoint is the default; a different endpoint can
 * be configured for the paid API or a test server.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::errors::ProviderError;
use crate::language::Language;
use crate::providers::Translator;

/// Default endpoint of the DeepL free-tier API
pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com";

/// DeepL client for the v2 translate API
#[derive(Debug)]
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the free-tier API)
    endpoint: String,
}

/// DeepL translate response
#[derive(Debug, Deserialize)]
pub struct DeepLResponse {
    /// The translation results, one per submitted text
    pub translations: Vec<DeepLTranslation>,
}

/// One translation result
#[derive(Debug, Deserialize)]
pub struct DeepLTranslation {
    /// The translated text
    pub text: String,

    /// Source language as detected by DeepL (informational only; the
    /// pipeline's own heuristic decides the direction)
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

impl DeepL {
    /// Create a new DeepL client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolve the full translate URL, validating the configured endpoint
    fn api_url(&self) -> Result<String, ProviderError> {
        let base = if self.endpoint.trim().is_empty() {
            DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        Url::parse(base)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint '{}': {}", base, e)))?;
        Ok(format!("{}/v2/translate", base))
    }
}

#[async_trait]
impl Translator for DeepL {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "DeepL API key is not configured".to_string(),
            ));
        }

        let api_url = self.api_url()?;
        let response = self
            .client
            .post(&api_url)
            .form(&[
                ("auth_key", self.api_key.as_str()),
                ("text", text),
                ("source_lang", source.deepl_code()),
                ("target_lang", target.deepl_code()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::ConnectionError(format!("DeepL request timed out: {}", e))
                } else if e.is_connect() {
                    ProviderError::ConnectionError(format!("Failed to reach DeepL: {}", e))
                } else {
                    ProviderError::RequestFailed(format!("Failed to send request to DeepL: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("DeepL API error ({}): {}", status, message);
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(message),
                429 | 456 => ProviderError::RateLimitExceeded(message),
                code => ProviderError::ApiError {
                    status_code: code,
                    message,
                },
            });
        }

        let parsed = response
            .json::<DeepLResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse DeepL response: {}", e)))?;

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| {
                ProviderError::ParseError("DeepL returned an empty translations list".to_string())
            })
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.translate("ping", Language::English, Language::Spanish)
            .await
            .map(|_| ())
    }
}
