/*!
 * Placeholder substitution engine.
 *
 * Two inverse operations over a text and a request-local placeholder map:
 * [`TermIndex::apply_placeholders`] swaps glossary matches for opaque
 * ASCII-alphanumeric tokens before the external translation call, and
 * [`restore_placeholders`] swaps them back for the prescribed final values
 * afterwards. The map lives for exactly one request and is never shared.
 */

use std::collections::HashMap;

use log::debug;

use crate::glossary::index::TermIndex;
use crate::language::Language;

/// Request-local mapping from placeholder token to the literal replacement
/// string that must appear in the final output.
pub type PlaceholderMap = HashMap<String, String>;

/// Result of one placeholder application pass
#[derive(Debug, Default)]
pub struct PlaceholderApplication {
    /// The working text with matches replaced by placeholder tokens
    pub text: String,
    /// Token-to-final-value map, consumed at restoration
    pub placeholders: PlaceholderMap,
    /// Whether any glossary pattern matched
    pub had_hits: bool,
}

/// Format the n-th placeholder token.
///
/// Tokens contain only ASCII letters and digits so the external service
/// cannot damage them with punctuation or whitespace handling. The counter
/// is fixed-width and followed by a sentinel letter, so no token is a
/// substring of another and restoration order does not matter.
fn placeholder_token(counter: usize) -> String {
    format!("GLOS{:04}X", counter)
}

impl TermIndex {
    /// Replace every glossary match in `text` with a fresh placeholder token.
    ///
    /// Patterns are tried in the index's fixed, length-descending order.
    /// A pattern participates only when its language tag applies to the
    /// detected source language and the entry has a term for the target
    /// language. Earlier substitutions rewrite matched spans into
    /// alphanumeric-only tokens which no later word-bounded pattern can
    /// re-match, so a single pass over the table is safe without tracking
    /// consumed spans.
    pub fn apply_placeholders(&self, text: &str, source: Language) -> PlaceholderApplication {
        if text.trim().is_empty() {
            return PlaceholderApplication {
                text: text.to_string(),
                ..Default::default()
            };
        }

        let mut working = text.to_string();
        let mut placeholders = PlaceholderMap::new();
        let mut counter = 0usize;

        for pattern in self.patterns() {
            if !pattern.variant.language.applies_to(source) {
                continue;
            }
            let Some(value) = self.replacement_for(&pattern.variant, source) else {
                continue;
            };
            if !pattern.matcher.is_match(&working) {
                continue;
            }

            working = pattern
                .matcher
                .replace_all(&working, |_: &regex::Captures| {
                    let token = placeholder_token(counter);
                    counter += 1;
                    placeholders.insert(token.clone(), value.clone());
                    token
                })
                .into_owned();

            debug!(
                "Glossary hit: '{}' ({} occurrences so far)",
                pattern.variant.text, counter
            );
        }

        PlaceholderApplication {
            text: working,
            had_hits: !placeholders.is_empty(),
            placeholders,
        }
    }
}

/// Replace every placeholder token in `text` with its recorded final value.
///
/// Iteration order over the map is irrelevant: tokens are mutually unique
/// and none is a substring of another. A placeholder that the external
/// service dropped or corrupted is simply absent from the output; that is an
/// accepted degradation, not an error.
pub fn restore_placeholders(text: &str, placeholders: &PlaceholderMap) -> String {
    let mut working = text.to_string();
    for (token, value) in placeholders {
        working = working.replace(token, value);
    }
    working
}
