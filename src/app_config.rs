use anyhow::{Context, Result};
use log::{LevelFilter, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings. Missing or unreadable config
/// files fall back to defaults with a warning rather than aborting,
/// mirroring the tolerant startup of the original backend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Path to the glossary JSON file
    #[serde(default = "default_glossary_path")]
    pub glossary_path: String,

    /// Maximum accepted input length in characters
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Translator settings
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// External translator (DeepL) configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    /// API key; falls back to the DEEPL_API_KEY environment variable
    #[serde(default)]
    pub api_key: String,

    /// Service endpoint URL; empty means the DeepL free-tier default
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl TranslatorConfig {
    /// Resolve the API key from the config value or the environment.
    /// An empty result means the pipeline will run in fallback mode.
    pub fn resolve_api_key(&self) -> String {
        if !self.api_key.is_empty() {
            return self.api_key.clone();
        }
        std::env::var("DEEPL_API_KEY").unwrap_or_default()
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_glossary_path() -> String {
    "glossary.json".to_string()
}

fn default_max_input_chars() -> usize {
    5000
}

fn default_timeout_secs() -> u64 {
    15
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is missing
    /// or unreadable
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not load config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            glossary_path: default_glossary_path(),
            max_input_chars: default_max_input_chars(),
            translator: TranslatorConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
