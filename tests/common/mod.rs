/*!
 * Common test utilities for the termbridge test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use termbridge::glossary::GlossaryEntry;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Builds one glossary entry from literal parts
pub fn entry(
    term_es: &str,
    term_en: &str,
    acronym: Option<&str>,
    aliases_es: &[&str],
    aliases_en: &[&str],
) -> GlossaryEntry {
    GlossaryEntry {
        term_es: term_es.to_string(),
        term_en: term_en.to_string(),
        acronym: acronym.map(|a| a.to_string()),
        aliases_es: aliases_es.iter().map(|a| a.to_string()).collect(),
        aliases_en: aliases_en.iter().map(|a| a.to_string()).collect(),
    }
}

/// A small medical glossary exercising acronyms, aliases and nested terms
pub fn sample_entries() -> Vec<GlossaryEntry> {
    vec![
        entry(
            "vía intravenosa",
            "intravenous",
            Some("IV"),
            &["via intravenosa"],
            &["intravenous route"],
        ),
        entry("vía", "route", None, &[], &[]),
        entry("oral", "by mouth", None, &[], &[]),
        entry("ayunas", "fasting", None, &["en ayunas"], &[]),
        entry("alta", "discharge", None, &[], &["hospital discharge"]),
    ]
}
