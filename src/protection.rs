/*!
 * Technical token protection.
 *
 * Shields measurement units, short all-caps acronyms and long numeric
 * literals from reformatting by the external translation service. Unlike the
 * glossary placeholder engine this layer keeps the original content in place
 * and merely fences it between reserved delimiter characters, so restoration
 * is a delimiter-stripping pass rather than a lookup.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved delimiter character. Assumed absent from ordinary input; if a
/// text does contain it, it is stripped on unprotect regardless of origin.
pub const DELIMITER: char = '§';

/// One fencing rule: a pattern and its delimiter-wrapping replacement
struct ProtectionRule {
    pattern: &'static Lazy<Regex>,
    replacement: &'static str,
}

/// Numbers with an attached measurement unit ("25 kg", "500mg")
static UNIT_ATTACHED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d+)\s?(kg|g|mg|L|mL|km|cm|mm|mol|Pa|kPa)\b").unwrap());

/// Bare short uppercase tokens (scientific and clinical acronyms)
static UPPERCASE_ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z]{2,6})\b").unwrap());

/// Long digit runs (record numbers, years ranges, dosage codes)
static LONG_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4,}\b").unwrap());

/// Ordered fencing rules. Units go first so their digits are consumed before
/// the long-number rule sees them.
static RULES: &[ProtectionRule] = &[
    ProtectionRule {
        pattern: &UNIT_ATTACHED_NUMBER,
        replacement: "$1§$2§",
    },
    ProtectionRule {
        pattern: &UPPERCASE_ACRONYM,
        replacement: "§$1§",
    },
    ProtectionRule {
        pattern: &LONG_NUMBER,
        replacement: "§${0}§",
    },
];

/// Protector for technical tokens that must survive the external service
/// unchanged in both languages.
#[derive(Debug, Default, Clone)]
pub struct TokenProtector;

impl TokenProtector {
    pub fn new() -> Self {
        Self
    }

    /// Fence every technical token between two reserved delimiters.
    ///
    /// Glossary placeholder tokens are mixed alphanumeric runs, so none of
    /// the rules can match inside them.
    pub fn protect(&self, text: &str) -> String {
        let mut working = text.to_string();
        for rule in RULES {
            working = rule
                .pattern
                .replace_all(&working, rule.replacement)
                .into_owned();
        }
        working
    }

    /// Remove every instance of the reserved delimiter, unconditionally.
    pub fn unprotect(&self, text: &str) -> String {
        text.replace(DELIMITER, "")
    }
}
