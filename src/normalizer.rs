/*!
 * Unicode and whitespace canonicalization.
 *
 * Normalization runs before pattern matching so that accented and decomposed
 * inputs match glossary variants consistently, and once more conceptually on
 * output: the pass is idempotent, so normalizing an already-normalized text
 * is a no-op.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Runs of horizontal whitespace (everything except newlines)
static HORIZONTAL_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Stray spaces hugging a newline on either side
static SPACE_AROUND_NEWLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r" ?\n ?").unwrap());

/// Three or more consecutive newlines
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Whitespace immediately before sentence punctuation
static SPACE_BEFORE_PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r" +([.,;:!?])").unwrap());

/// Text normalizer applied before matching and after restoration.
#[derive(Debug, Default, Clone)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a text while preserving its linguistic structure.
    ///
    /// Steps, in order:
    /// 1. strip NUL, zero-width space and BOM; map non-breaking spaces to
    ///    regular spaces
    /// 2. canonical Unicode composition (NFC)
    /// 3. collapse runs of horizontal whitespace to a single space
    /// 4. tighten spaces around newlines, then collapse 3+ consecutive
    ///    newlines to exactly two
    /// 5. remove whitespace before `, . ; : ! ?`
    /// 6. trim leading/trailing whitespace
    pub fn normalize(&self, text: &str) -> String {
        let cleaned: String = text
            .chars()
            .filter(|c| !matches!(c, '\u{0000}' | '\u{200b}' | '\u{feff}'))
            .map(|c| if c == '\u{00a0}' { ' ' } else { c })
            .collect();

        let composed: String = cleaned.nfc().collect();

        let spaced = HORIZONTAL_WHITESPACE.replace_all(&composed, " ");
        let tightened = SPACE_AROUND_NEWLINE.replace_all(&spaced, "\n");
        let stacked = EXCESS_NEWLINES.replace_all(&tightened, "\n\n");
        let punctuated = SPACE_BEFORE_PUNCTUATION.replace_all(&stacked, "$1");

        punctuated.trim().to_string()
    }
}
