use crate::text::constants::{DEFAULT_MAX_LINE_LENGTH, DEFAULT_UNDERLINE};
use crate::text::{LineWrapper, Measure};
use clap::Parser;
use config::{
    Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_INDENT: usize = 0;
const ENV_PREFIX: &str = "TEXTFOLD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Failed to determine config directory")]
    DirectoryNotFound,
    #[error("Validation error: {0}")]
    Validation(String),
}

// Values read from the config file and environment. Everything is optional so
// that command line flags and defaults can fill the gaps.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    max_line_length: Option<usize>,
    measure: Option<Measure>,
    indent: Option<usize>,
    title: Option<String>,
    underline: Option<String>,
    log_file: Option<PathBuf>,
}

// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub input: Option<PathBuf>,
    pub max_line_length: usize,
    pub measure: Measure,
    pub indent: usize,
    pub title: Option<String>,
    pub underline: char,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            input: None,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            measure: Measure::default(),
            indent: DEFAULT_INDENT,
            title: None,
            underline: DEFAULT_UNDERLINE,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Wrapper for the body text, which loses `indent` columns to indentation.
    pub fn body_wrapper(&self) -> Result<LineWrapper, ConfigError> {
        let width = self.max_line_length.saturating_sub(self.indent);
        LineWrapper::new(width)
            .map(|wrapper| wrapper.with_measure(self.measure))
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Wrapper for the title, which uses the full width.
    pub fn title_wrapper(&self) -> Result<LineWrapper, ConfigError> {
        LineWrapper::new(self.max_line_length)
            .map(|wrapper| wrapper.with_measure(self.measure))
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Wrap plain text into fixed-width lines", long_about = None)]
pub struct CliArgs {
    /// Input file, `-` or nothing for stdin
    pub input: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum line length
    #[arg(short = 'w', long = "width")]
    pub max_line_length: Option<usize>,

    #[arg(long, value_enum)]
    pub measure: Option<Measure>,

    /// Number of spaces before each body line
    #[arg(long)]
    pub indent: Option<usize>,

    /// Heading printed above the text
    #[arg(long)]
    pub title: Option<String>,

    /// Character used to underline the heading
    #[arg(long)]
    pub underline: Option<char>,

    /// Write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);
    // Missing variables are fine; a failure to collect is treated the same way.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", "textfold")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::DirectoryNotFound)
}

// Precedence: args > overrides (environment) > file > defaults.
fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = match args.config.clone() {
        Some(path) => Some(path),
        None => match default_config_path() {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("skipping default config file: {}", e);
                None
            }
        },
    };

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        log::debug!("reading config file {}", path.display());
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    let underline = match args.underline {
        Some(c) => c,
        None => match loaded.underline {
            Some(ref s) => parse_underline(s)?,
            None => DEFAULT_UNDERLINE,
        },
    };

    let config = AppConfig {
        input: args.input.clone(),
        max_line_length: args
            .max_line_length
            .or(loaded.max_line_length)
            .unwrap_or(DEFAULT_MAX_LINE_LENGTH),
        measure: args.measure.or(loaded.measure).unwrap_or_default(),
        indent: args.indent.or(loaded.indent).unwrap_or(DEFAULT_INDENT),
        title: args.title.clone().or(loaded.title),
        underline,
        log_file: args.log_file.clone().or(loaded.log_file),
    };

    validate_config(&config)?;

    Ok(config)
}

fn parse_underline(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::Validation(format!(
            "underline must be a single character, got {:?}",
            value
        ))),
    }
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.max_line_length == 0 {
        return Err(ConfigError::Validation(
            "max_line_length must be at least 1".to_string(),
        ));
    }

    if config.indent >= config.max_line_length {
        return Err(ConfigError::Validation(format!(
            "indent ({}) must be smaller than max_line_length ({})",
            config.indent, config.max_line_length
        )));
    }

    if config.underline.is_control() {
        return Err(ConfigError::Validation(
            "underline must be a printable character".to_string(),
        ));
    }

    Ok(())
}
