/*!
 * Term variant index: the ordered, longest-first compiled pattern table.
 *
 * Built once from the loaded glossary entries, read-only afterwards.
 * The single most important invariant lives here: patterns are sorted by
 * descending variant text length so that longer, more specific phrases are
 * tried and consume their match before any shorter term nested inside them.
 */

use log::{debug, warn};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::glossary::model::GlossaryEntry;
use crate::language::Language;

/// Which surface form of an entry a variant represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantLanguage {
    /// Spanish main term or alias
    Spanish,
    /// English main term or alias
    English,
    /// The entry's acronym. Acronyms are treated as English-like surface
    /// forms in this system: they commonly originate from English usage.
    Acronym,
}

impl VariantLanguage {
    /// Whether a variant with this tag applies to a text in `source`.
    ///
    /// Spanish input matches Spanish-tagged variants only; English input
    /// matches both English- and acronym-tagged variants.
    pub fn applies_to(&self, source: Language) -> bool {
        match self {
            Self::Spanish => source == Language::Spanish,
            Self::English | Self::Acronym => source == Language::English,
        }
    }
}

/// One matchable surface form derived from a glossary entry
#[derive(Debug, Clone)]
pub struct Variant {
    /// NFC-normalized surface text
    pub text: String,
    /// Which language surface this variant belongs to
    pub language: VariantLanguage,
    /// Position of the owning entry in the index's entry list
    pub entry: usize,
}

/// A variant together with its compiled matcher.
///
/// The matcher recognizes the variant text as a whole word or phrase,
/// case-insensitively and Unicode-aware, bounded so it never matches inside
/// a longer alphanumeric run ("oral" must not match inside "corral").
#[derive(Debug)]
pub struct CompiledPattern {
    pub variant: Variant,
    pub matcher: Regex,
}

/// Immutable index over the glossary: entries plus the ordered pattern table.
///
/// Safe for concurrent read access from simultaneous requests; rebuilding on
/// a glossary reload constructs a fresh index and is side-effect-free.
#[derive(Debug, Default)]
pub struct TermIndex {
    entries: Vec<GlossaryEntry>,
    patterns: Vec<CompiledPattern>,
}

impl TermIndex {
    /// Build the index from loaded glossary entries.
    ///
    /// Entries without a usable term and variants whose pattern cannot be
    /// compiled are skipped with a warning; a single bad record never aborts
    /// indexing of the rest.
    pub fn build(entries: Vec<GlossaryEntry>) -> Self {
        let mut patterns = Vec::new();

        for (entry_idx, entry) in entries.iter().enumerate() {
            if !entry.is_usable() {
                warn!("Skipping glossary entry {}: no usable term", entry_idx);
                continue;
            }

            let mut push = |text: &str, language: VariantLanguage| {
                let normalized: String = text.trim().nfc().collect();
                if normalized.is_empty() {
                    return;
                }
                let pattern = format!(r"(?i)\b{}\b", regex::escape(&normalized));
                match Regex::new(&pattern) {
                    Ok(matcher) => patterns.push(CompiledPattern {
                        variant: Variant {
                            text: normalized,
                            language,
                            entry: entry_idx,
                        },
                        matcher,
                    }),
                    Err(e) => warn!("Skipping glossary variant '{}': {}", normalized, e),
                }
            };

            push(&entry.term_es, VariantLanguage::Spanish);
            for alias in &entry.aliases_es {
                push(alias, VariantLanguage::Spanish);
            }
            push(&entry.term_en, VariantLanguage::English);
            for alias in &entry.aliases_en {
                push(alias, VariantLanguage::English);
            }
            if let Some(acronym) = entry.acronym_trimmed() {
                push(acronym, VariantLanguage::Acronym);
            }
        }

        // Longest-match-first: descending variant length, stable on ties so
        // the original glossary order decides between equal-length variants.
        patterns.sort_by(|a, b| {
            b.variant
                .text
                .chars()
                .count()
                .cmp(&a.variant.text.chars().count())
        });

        debug!(
            "Term index built: {} entries, {} compiled patterns",
            entries.len(),
            patterns.len()
        );

        Self { entries, patterns }
    }

    /// The compiled patterns in their fixed, length-descending order
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// The owning entry of a variant
    pub fn entry_of(&self, variant: &Variant) -> &GlossaryEntry {
        &self.entries[variant.entry]
    }

    /// Number of indexed glossary entries
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of compiled variant patterns
    pub fn variant_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The final replacement value for a match of `variant`, derived from the
    /// owning entry and the translation direction.
    ///
    /// - Spanish source (es→en): `"ACRONYM (term_en)"` when the entry has an
    ///   acronym, otherwise the English term.
    /// - English source (en→es): the Spanish term alone; acronyms collapse
    ///   directly to it, without a parenthetical.
    ///
    /// Returns `None` when the entry has no term for the target language,
    /// in which case the pattern is skipped for this direction.
    pub fn replacement_for(&self, variant: &Variant, source: Language) -> Option<String> {
        let entry = self.entry_of(variant);
        match source {
            Language::Spanish => {
                let term_en = entry.term_en.trim();
                if term_en.is_empty() {
                    return None;
                }
                match entry.acronym_trimmed() {
                    Some(acronym) => Some(format!("{} ({})", acronym, term_en)),
                    None => Some(term_en.to_string()),
                }
            }
            Language::English => {
                let term_es = entry.term_es.trim();
                if term_es.is_empty() {
                    return None;
                }
                Some(term_es.to_string())
            }
        }
    }
}
