/*!
 * Tests for the placeholder substitution engine
 */

use termbridge::glossary::{TermIndex, restore_placeholders};
use termbridge::language::Language;

use crate::common::{entry, sample_entries};

#[test]
fn test_applyPlaceholders_withNoMatches_shouldReturnInputUnchanged() {
    let index = TermIndex::build(sample_entries());
    let application = index.apply_placeholders("sin términos conocidos", Language::Spanish);

    assert_eq!(application.text, "sin términos conocidos");
    assert!(application.placeholders.is_empty());
    assert!(!application.had_hits);
}

#[test]
fn test_applyPlaceholders_withEmptyInput_shouldNoOp() {
    let index = TermIndex::build(sample_entries());
    for input in ["", "   ", "\n\t "] {
        let application = index.apply_placeholders(input, Language::Spanish);
        assert_eq!(application.text, input);
        assert!(!application.had_hits);
    }
}

#[test]
fn test_applyPlaceholders_withSpanishTerm_shouldInsertAlnumToken() {
    let index = TermIndex::build(sample_entries());
    let application = index.apply_placeholders("paciente en ayunas", Language::Spanish);

    assert!(application.had_hits);
    assert_eq!(application.placeholders.len(), 1);
    let token = application.placeholders.keys().next().unwrap();
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(application.text.contains(token));
    assert!(!application.text.contains("ayunas"));
}

#[test]
fn test_applyPlaceholders_withNestedTerms_shouldPreferLongestMatch() {
    let index = TermIndex::build(sample_entries());
    let application = index.apply_placeholders("administrar vía intravenosa", Language::Spanish);

    // Exactly one placeholder for the long phrase; "vía" alone must not fire
    assert_eq!(application.placeholders.len(), 1);
    let value = application.placeholders.values().next().unwrap();
    assert_eq!(value, "IV (intravenous)");
}

#[test]
fn test_applyPlaceholders_withRepeatedTerm_shouldUseFreshTokens() {
    let index = TermIndex::build(sample_entries());
    let application = index.apply_placeholders("oral ahora, oral después", Language::Spanish);

    assert_eq!(application.placeholders.len(), 2);
    for value in application.placeholders.values() {
        assert_eq!(value, "by mouth");
    }
}

#[test]
fn test_applyPlaceholders_withMixedCase_shouldMatchSameEntry() {
    let index = TermIndex::build(sample_entries());
    for text in ["tratamiento ORAL", "tratamiento Oral", "tratamiento oral"] {
        let application = index.apply_placeholders(text, Language::Spanish);
        assert_eq!(application.placeholders.len(), 1, "failed for {:?}", text);
        assert_eq!(
            application.placeholders.values().next().unwrap(),
            "by mouth"
        );
    }
}

#[test]
fn test_applyPlaceholders_withTermInsideLongerWord_shouldNotMatch() {
    let index = TermIndex::build(sample_entries());
    // "pastoral" and "oralmente" both contain "oral" as a substring, so a
    // matcher without word boundaries would produce hits here
    let application =
        index.apply_placeholders("consejo pastoral dado oralmente", Language::Spanish);

    assert_eq!(application.text, "consejo pastoral dado oralmente");
    assert!(application.placeholders.is_empty());
    assert!(!application.had_hits);
}

#[test]
fn test_applyPlaceholders_withEnglishSource_shouldUseEnglishAndAcronymVariants() {
    let index = TermIndex::build(sample_entries());
    let application = index.apply_placeholders("IV fluids after discharge", Language::English);

    assert_eq!(application.placeholders.len(), 2);
    let values: Vec<&String> = application.placeholders.values().collect();
    assert!(values.iter().any(|v| v.as_str() == "vía intravenosa"));
    assert!(values.iter().any(|v| v.as_str() == "alta"));
}

#[test]
fn test_applyPlaceholders_withSpanishSource_shouldIgnoreEnglishAndAcronymVariants() {
    let index = TermIndex::build(sample_entries());
    // "IV" and "discharge" are English-like surfaces; a Spanish text must not
    // trigger them
    let application = index.apply_placeholders("IV discharge", Language::Spanish);
    assert!(!application.had_hits);
}

#[test]
fn test_applyPlaceholders_withMissingTargetTerm_shouldSkipEntry() {
    let index = TermIndex::build(vec![entry("ayunas", "", None, &[], &[])]);
    let application = index.apply_placeholders("paciente en ayunas", Language::Spanish);
    assert!(!application.had_hits);
    assert_eq!(application.text, "paciente en ayunas");
}

#[test]
fn test_restorePlaceholders_shouldReplaceEveryToken() {
    let index = TermIndex::build(sample_entries());
    let application =
        index.apply_placeholders("vía intravenosa y luego oral", Language::Spanish);

    let restored = restore_placeholders(&application.text, &application.placeholders);
    assert_eq!(restored, "IV (intravenous) y luego by mouth");
}

#[test]
fn test_restorePlaceholders_withLostToken_shouldTolerateAbsence() {
    let index = TermIndex::build(sample_entries());
    let application = index.apply_placeholders("paciente en ayunas", Language::Spanish);

    // Simulate the external service dropping the placeholder entirely
    let mangled = "paciente en";
    let restored = restore_placeholders(mangled, &application.placeholders);
    assert_eq!(restored, "paciente en");
}

#[test]
fn test_restorePlaceholders_withEmptyMap_shouldReturnInput() {
    let restored = restore_placeholders("texto sin cambios", &Default::default());
    assert_eq!(restored, "texto sin cambios");
}
