// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::{Read, Write};
use std::sync::Arc;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};

use crate::app_config::Config;
use crate::glossary::{TermIndex, load_glossary};
use crate::pipeline::TranslationPipeline;
use crate::providers::deepl::DeepL;

mod app_config;
mod errors;
mod glossary;
mod language;
mod normalizer;
mod pipeline;
mod protection;
mod providers;

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a medical text passage (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for termbridge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate; reads stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Glossary file path (overrides the config value)
    #[arg(short, long)]
    glossary: Option<String>,

    /// Emit the full result object as JSON instead of plain text
    #[arg(short, long)]
    json: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// termbridge - glossary-faithful medical text translation
///
/// Translates short Spanish/English medical passages while guaranteeing that
/// curated glossary terms are rendered exactly as prescribed, even when the
/// external translation service is unreachable.
#[derive(Parser, Debug)]
#[command(name = "termbridge")]
#[command(version = "1.0.0")]
#[command(about = "Glossary-faithful Spanish/English medical text translation")]
#[command(long_about = "termbridge protects curated glossary terms, units, acronyms and long \
numbers before handing a text to DeepL, and restores the prescribed forms afterwards.

EXAMPLES:
    termbridge \"el paciente necesita vía intravenosa\"   # Translate a passage
    echo \"IV fluids at 500 mL\" | termbridge              # Read from stdin
    termbridge --json \"via oral cada 8 horas\"            # Emit the result object
    termbridge -g terms.json \"ayunas desde medianoche\"   # Use a specific glossary
    termbridge completions bash > termbridge.bash        # Generate completions

CONFIGURATION:
    Configuration is read from conf.json by default (see --config-path).
    The DeepL API key comes from the config file or the DEEPL_API_KEY
    environment variable; without one, termbridge still reconstructs all
    glossary terms and returns the remainder untranslated.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to translate; reads stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Glossary file path (overrides the config value)
    #[arg(short, long)]
    glossary: Option<String>,

    /// Emit the full result object as JSON instead of plain text
    #[arg(short, long)]
    json: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing timestamped, colored lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is updated after the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let options = CommandLineOptions::parse();

    match options.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "termbridge", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            run_translate(TranslateArgs {
                text: options.text,
                config_path: options.config_path,
                glossary: options.glossary,
                json: options.json,
                log_level: options.log_level,
            })
            .await
        }
    }
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let mut config = Config::from_file_or_default(&args.config_path);
    if let Some(level) = args.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let glossary_path = args.glossary.unwrap_or_else(|| config.glossary_path.clone());
    let entries = match load_glossary(&glossary_path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not load glossary, continuing without one: {}", e);
            Vec::new()
        }
    };
    let index = Arc::new(TermIndex::build(entries));
    info!(
        "Glossary ready: {} entries, {} patterns",
        index.entry_count(),
        index.variant_count()
    );

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // Request-boundary validation, kept outside the core pipeline
    if text.trim().is_empty() {
        return Err(anyhow!("Input text cannot be empty"));
    }
    if text.chars().count() > config.max_input_chars {
        return Err(anyhow!(
            "Input text exceeds {} characters",
            config.max_input_chars
        ));
    }

    let translator = Arc::new(DeepL::new(
        config.translator.resolve_api_key(),
        config.translator.endpoint.clone(),
        std::time::Duration::from_secs(config.translator.timeout_secs),
    ));

    let pipeline = TranslationPipeline::new(index, translator);
    let outcome = pipeline.run(&text).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.translated_text);
    }

    Ok(())
}
