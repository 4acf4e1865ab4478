/*!
 * Canonical glossary entry shape and the load boundary.
 *
 * Persisted glossaries come in two shapes: the canonical list of entry
 * objects, and a legacy table keyed by the Spanish term. Both are resolved
 * here, once, into the single canonical [`GlossaryEntry`] shape; the rest of
 * the core never branches on input shape. Malformed individual records are
 * skipped with a warning and never abort loading of the remaining entries.
 */

use std::collections::BTreeMap;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::GlossaryError;

/// One curated glossary concept with its two-language forms.
///
/// Invariant: at least one of `term_es`/`term_en` is non-empty; entries that
/// violate this are dropped at the load boundary. Entries are immutable once
/// loaded and owned by the term index for the lifetime of the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// Main Spanish term
    #[serde(default, alias = "es", alias = "term")]
    pub term_es: String,

    /// Main English term
    #[serde(default, alias = "en")]
    pub term_en: String,

    /// Optional acronym (e.g. "IV" for "vía intravenosa")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acronym: Option<String>,

    /// Alternative Spanish surface forms
    #[serde(default)]
    pub aliases_es: Vec<String>,

    /// Alternative English surface forms
    #[serde(default)]
    pub aliases_en: Vec<String>,
}

impl GlossaryEntry {
    /// Whether the entry carries at least one usable term
    pub fn is_usable(&self) -> bool {
        !self.term_es.trim().is_empty() || !self.term_en.trim().is_empty()
    }

    /// The acronym, if present and non-blank
    pub fn acronym_trimmed(&self) -> Option<&str> {
        self.acronym
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    /// A short label for log messages
    fn label(&self) -> &str {
        if !self.term_es.trim().is_empty() {
            &self.term_es
        } else {
            &self.term_en
        }
    }
}

/// Load glossary entries from a JSON file.
pub fn load_glossary(path: impl AsRef<Path>) -> Result<Vec<GlossaryEntry>, GlossaryError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| GlossaryError::FileUnreadable(format!("{}: {}", path.display(), e)))?;
    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| GlossaryError::FileUnreadable(format!("{}: {}", path.display(), e)))?;
    load_glossary_value(value)
}

/// Resolve an already-parsed JSON value into canonical glossary entries.
///
/// Accepts the canonical list-of-objects shape and the legacy table keyed by
/// Spanish term. Anything else is an unsupported root shape.
pub fn load_glossary_value(value: Value) -> Result<Vec<GlossaryEntry>, GlossaryError> {
    let mut entries = Vec::new();

    match value {
        Value::Array(items) => {
            for (position, item) in items.into_iter().enumerate() {
                match serde_json::from_value::<GlossaryEntry>(item) {
                    Ok(entry) => push_if_usable(&mut entries, entry, position),
                    Err(e) => warn!("Skipping malformed glossary entry {}: {}", position, e),
                }
            }
        }
        Value::Object(map) => {
            // Legacy shape: { "vía intravenosa": { "en": "...", ... }, ... }.
            // BTreeMap keeps the legacy iteration order deterministic.
            let ordered: BTreeMap<String, Value> = map.into_iter().collect();
            for (position, (key, item)) in ordered.into_iter().enumerate() {
                match serde_json::from_value::<GlossaryEntry>(item) {
                    Ok(mut entry) => {
                        if entry.term_es.trim().is_empty() {
                            entry.term_es = key;
                        }
                        push_if_usable(&mut entries, entry, position);
                    }
                    Err(e) => warn!("Skipping malformed glossary entry '{}': {}", key, e),
                }
            }
        }
        _ => return Err(GlossaryError::UnsupportedShape),
    }

    Ok(entries)
}

fn push_if_usable(entries: &mut Vec<GlossaryEntry>, entry: GlossaryEntry, position: usize) {
    if entry.is_usable() {
        entries.push(entry);
    } else {
        warn!(
            "Skipping glossary entry {} ('{}'): no usable term in either language",
            position,
            entry.label()
        );
    }
}
