/*!
 * Tests for language tags and the detection heuristic
 */

use std::str::FromStr;

use termbridge::language::{Language, detect_language};

#[test]
fn test_language_codes_shouldRoundTrip() {
    assert_eq!(Language::Spanish.code(), "es");
    assert_eq!(Language::English.code(), "en");
    assert_eq!(Language::Spanish.deepl_code(), "ES");
    assert_eq!(Language::English.deepl_code(), "EN");
}

#[test]
fn test_language_counterpart_shouldReturnOtherLanguage() {
    assert_eq!(Language::Spanish.counterpart(), Language::English);
    assert_eq!(Language::English.counterpart(), Language::Spanish);
}

#[test]
fn test_language_fromStr_withIsoCodes_shouldParse() {
    assert_eq!(Language::from_str("es").unwrap(), Language::Spanish);
    assert_eq!(Language::from_str("EN").unwrap(), Language::English);
    assert_eq!(Language::from_str("spa").unwrap(), Language::Spanish);
    assert_eq!(Language::from_str("eng").unwrap(), Language::English);
    assert_eq!(Language::from_str(" en ").unwrap(), Language::English);
}

#[test]
fn test_language_fromStr_withUnsupportedCode_shouldFail() {
    assert!(Language::from_str("fr").is_err());
    assert!(Language::from_str("xyz").is_err());
    assert!(Language::from_str("").is_err());
}

#[test]
fn test_detectLanguage_withDiacritics_shouldReturnSpanish() {
    assert_eq!(detect_language("vía intravenosa"), Language::Spanish);
    assert_eq!(detect_language("¿Cómo está el paciente?"), Language::Spanish);
}

#[test]
fn test_detectLanguage_withCommonSpanishWords_shouldReturnSpanish() {
    assert_eq!(
        detect_language("el paciente necesita reposo"),
        Language::Spanish
    );
}

#[test]
fn test_detectLanguage_withCommonEnglishWords_shouldReturnEnglish() {
    assert_eq!(
        detect_language("the patient requires fluids"),
        Language::English
    );
}

#[test]
fn test_detectLanguage_withTieAndAsciiText_shouldReturnEnglish() {
    // No vote from either word list; the ASCII letter ratio decides
    assert_eq!(detect_language("Hello world"), Language::English);
}

#[test]
fn test_detectLanguage_withEmptyInput_shouldDefaultToSpanish() {
    assert_eq!(detect_language(""), Language::Spanish);
    assert_eq!(detect_language("   \n "), Language::Spanish);
}

#[test]
fn test_detectLanguage_withNoLetters_shouldDefaultToSpanish() {
    assert_eq!(detect_language("12345 67890"), Language::Spanish);
}
