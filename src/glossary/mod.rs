/*!
 * Glossary model, term variant index and placeholder substitution engine.
 *
 * This is the core of the system: it turns curated glossary entries into an
 * ordered table of compiled patterns, replaces matches with opaque
 * placeholder tokens before text is handed to the external translation
 * service, and restores the prescribed final forms afterwards.
 *
 * Submodules:
 * - `model`: Canonical entry shape and the file load boundary
 * - `index`: Variant derivation and the longest-first compiled pattern table
 * - `placeholders`: Placeholder application and restoration
 */

// Re-export main types for easier usage
pub use self::index::{CompiledPattern, TermIndex, Variant, VariantLanguage};
pub use self::model::{GlossaryEntry, load_glossary, load_glossary_value};
pub use self::placeholders::{PlaceholderApplication, PlaceholderMap, restore_placeholders};

// Submodules
pub mod index;
pub mod model;
pub mod placeholders;
