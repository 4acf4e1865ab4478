/*!
 * Language tags and the source-language heuristic.
 *
 * The system supports exactly two languages, Spanish and English. The
 * detection heuristic is a deliberately superficial majority vote over
 * diacritics and common words; its only job is to pick the translation
 * direction, not to perform real language identification.
 */

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// One of the two supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// Spanish (ISO 639-1 "es")
    #[serde(rename = "es")]
    Spanish,
    /// English (ISO 639-1 "en")
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// ISO 639-1 code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
        }
    }

    /// Language code in the form the DeepL API expects
    pub fn deepl_code(&self) -> &'static str {
        match self {
            Self::Spanish => "ES",
            Self::English => "EN",
        }
    }

    /// The other supported language, i.e. the translation target
    pub fn counterpart(&self) -> Self {
        match self {
            Self::Spanish => Self::English,
            Self::English => Self::Spanish,
        }
    }

    /// Human-readable English name of the language
    pub fn name(&self) -> String {
        isolang::Language::from_639_1(self.code())
            .map(|l| l.to_name().to_string())
            .unwrap_or_else(|| self.code().to_string())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let iso = isolang::Language::from_639_1(&normalized)
            .or_else(|| isolang::Language::from_639_3(&normalized));
        match iso.and_then(|l| l.to_639_1()) {
            Some("es") => Ok(Self::Spanish),
            Some("en") => Ok(Self::English),
            _ => Err(anyhow!("Unsupported language code: {}", s)),
        }
    }
}

/// Characters that strongly indicate Spanish text
const SPANISH_DIACRITICS: &str = "áéíóúüñ¿¡";

/// Common English words used for the majority vote
const ENGLISH_COMMON: &[&str] = &["the", "and", "is", "patient", "need", "requires", "dr"];

/// Common Spanish words used for the majority vote
const SPANISH_COMMON: &[&str] = &["el", "la", "y", "es", "paciente", "necesita", "requiere"];

/// Guess the source language of a text.
///
/// Heuristic, in order:
/// 1. empty or whitespace-only input defaults to Spanish
/// 2. any Spanish diacritic decides Spanish outright
/// 3. majority vote between common English and Spanish words
/// 4. tie break on the ratio of ASCII letters (> 0.85 means English)
pub fn detect_language(text: &str) -> Language {
    if text.trim().is_empty() {
        return Language::Spanish;
    }

    let lowered = text.to_lowercase();
    if lowered.chars().any(|c| SPANISH_DIACRITICS.contains(c)) {
        return Language::Spanish;
    }

    let padded = format!(" {} ", lowered);
    let votes = |words: &[&str]| {
        words
            .iter()
            .filter(|w| padded.contains(&format!(" {} ", w)))
            .count()
    };
    let english_votes = votes(ENGLISH_COMMON);
    let spanish_votes = votes(SPANISH_COMMON);

    if english_votes > spanish_votes {
        return Language::English;
    }
    if spanish_votes > english_votes {
        return Language::Spanish;
    }

    let total_letters = text.chars().filter(|c| c.is_alphabetic()).count();
    if total_letters == 0 {
        return Language::Spanish;
    }
    let ascii_letters = text
        .chars()
        .filter(|c| c.is_ascii() && c.is_alphabetic())
        .count();

    if ascii_letters as f64 / total_letters as f64 > 0.85 {
        Language::English
    } else {
        Language::Spanish
    }
}
