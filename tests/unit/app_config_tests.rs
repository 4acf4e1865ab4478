/*!
 * Tests for application configuration
 */

use termbridge::app_config::{Config, LogLevel};

use crate::common::{create_temp_dir, create_test_file};

#[test]
fn test_config_default_shouldUseDocumentedValues() {
    let config = Config::default();
    assert_eq!(config.glossary_path, "glossary.json");
    assert_eq!(config.max_input_chars, 5000);
    assert_eq!(config.translator.timeout_secs, 15);
    assert!(config.translator.api_key.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_config_fromFile_withValidJson_shouldParseAllFields() {
    let dir = create_temp_dir().unwrap();
    let content = r#"{
        "glossary_path": "terms.json",
        "max_input_chars": 2000,
        "translator": { "api_key": "abc123", "timeout_secs": 5 },
        "log_level": "debug"
    }"#;
    let path = create_test_file(&dir.path().to_path_buf(), "conf.json", content).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.glossary_path, "terms.json");
    assert_eq!(config.max_input_chars, 2000);
    assert_eq!(config.translator.api_key, "abc123");
    assert_eq!(config.translator.timeout_secs, 5);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_config_fromFile_withPartialJson_shouldFillDefaults() {
    let dir = create_temp_dir().unwrap();
    let path =
        create_test_file(&dir.path().to_path_buf(), "conf.json", r#"{ "log_level": "warn" }"#)
            .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.max_input_chars, 5000);
    assert_eq!(config.glossary_path, "glossary.json");
}

#[test]
fn test_config_fromFile_withInvalidJson_shouldFail() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(&dir.path().to_path_buf(), "conf.json", "not json").unwrap();
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_config_fromFileOrDefault_withMissingFile_shouldFallBackToDefaults() {
    let config = Config::from_file_or_default("definitely/not/here.json");
    assert_eq!(config.max_input_chars, 5000);
}

#[test]
fn test_config_fromFileOrDefault_withBrokenFile_shouldFallBackToDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = create_test_file(&dir.path().to_path_buf(), "conf.json", "{{{").unwrap();
    let config = Config::from_file_or_default(&path);
    assert_eq!(config.glossary_path, "glossary.json");
}

#[test]
fn test_translatorConfig_resolveApiKey_withConfiguredKey_shouldPreferIt() {
    let mut config = Config::default();
    config.translator.api_key = "from-config".to_string();
    assert_eq!(config.translator.resolve_api_key(), "from-config");
}
