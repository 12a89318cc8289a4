use super::{ConfigError, LogFormat, TracingLevel};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "log-sentinel",
    author,
    version,
    about = "Summarize a log file into a JSON report",
    long_about = None
)]
pub struct Config {
    /// Log file to analyze
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: String,

    /// Destination of the JSON report
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: String,

    /// Diagnostic log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: TracingLevel,

    /// Diagnostic log format
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Do not print the summary to stdout
    #[arg(long, env = "QUIET")]
    pub quiet: bool,

    /// Configuration file path (optional)
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}

/// Settings accepted from a TOML configuration file. Input and output paths
/// always come from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub log_level: Option<TracingLevel>,
    pub log_format: Option<LogFormat>,
    pub quiet: Option<bool>,
}

impl Config {
    pub fn new(input_file: impl Into<String>, output_file: impl Into<String>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            log_level: TracingLevel::default(),
            log_format: LogFormat::default(),
            quiet: false,
            config_file: None,
        }
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse arguments, then fill in anything left at its default from
    /// `--config-file` when one is given.
    pub fn from_args_and_file<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::try_parse_from(args)?;

        if let Some(config_file) = config.config_file.clone() {
            let settings = Self::from_file(&config_file)?;
            config.apply_file_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FileSettings, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: FileSettings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Command-line values that differ from the defaults take precedence.
    pub fn apply_file_settings(&mut self, settings: FileSettings) {
        if self.log_level == TracingLevel::default() {
            if let Some(level) = settings.log_level {
                self.log_level = level;
            }
        }
        if self.log_format == LogFormat::default() {
            if let Some(format) = settings.log_format {
                self.log_format = format;
            }
        }
        if !self.quiet {
            self.quiet = settings.quiet.unwrap_or(false);
        }
    }
}
