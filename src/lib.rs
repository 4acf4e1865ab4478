/*!
 * # termbridge
 *
 * A Rust library for glossary-faithful translation of short medical text
 * passages between Spanish and English.
 *
 * ## Features
 *
 * - Curated glossary terms are always rendered exactly as prescribed,
 *   regardless of how the external machine-translation service would
 *   translate them
 * - Acronym handling with direction-aware expansion
 * - Protection of technical tokens (units, acronyms, long numbers) from
 *   reformatting by the external service
 * - Graceful fallback when the external service is unreachable
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `language`: Language tags and the source-language heuristic
 * - `normalizer`: Unicode and whitespace canonicalization
 * - `glossary`: Glossary model, term variant index and placeholder engine:
 *   - `glossary::model`: Canonical entry shape and the load boundary
 *   - `glossary::index`: Ordered, longest-first compiled pattern table
 *   - `glossary::placeholders`: Placeholder application and restoration
 * - `protection`: Delimiter fencing of technical tokens
 * - `pipeline`: The translation pipeline orchestrator
 * - `providers`: Clients for external translation services:
 *   - `providers::deepl`: DeepL REST API client
 *   - `providers::mock`: Mock translator for testing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod glossary;
pub mod language;
pub mod normalizer;
pub mod pipeline;
pub mod protection;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, GlossaryError, ProviderError};
pub use glossary::{GlossaryEntry, PlaceholderApplication, PlaceholderMap, TermIndex};
pub use language::{Language, detect_language};
pub use normalizer::TextNormalizer;
pub use pipeline::{TranslationOutcome, TranslationPipeline};
pub use protection::TokenProtector;
