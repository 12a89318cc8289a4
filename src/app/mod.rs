pub mod config;
pub mod logging_system;
pub mod pipeline;

pub use config::{Config, ConfigError, FileSettings, LogFormat, TracingLevel};
pub use logging_system::{LoggingError, LoggingSystem, setup_logging};
pub use pipeline::{analyze_source, run_analysis};

use crate::domain::{AnalysisSummary, LogLevel, SentinelError};
use crate::report::JsonFileSink;
use anyhow::Context;
use std::fmt::Write as _;
use std::process::ExitCode;
use tracing::info;

pub struct App {
    config: Config,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args_and_file(args)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn run(&self) -> Result<AnalysisSummary, SentinelError> {
        info!("Starting log-sentinel v{}", env!("CARGO_PKG_VERSION"));
        let sink = JsonFileSink::new(&self.config.output_file);
        let summary = run_analysis(&self.config.input_file, &sink).await?;
        info!("Report written to: {}", self.config.output_file);
        Ok(summary)
    }
}

/// Human-readable run summary printed to stdout after a successful run.
pub fn render_console_summary(summary: &AnalysisSummary, output_file: &str) -> String {
    let mut out = String::new();
    let meta = &summary.meta;

    let _ = writeln!(out, "Analysis complete: {}", meta.input_file);
    let _ = writeln!(out, "Total lines: {}", meta.total_lines);
    let _ = writeln!(out, "Parsed lines: {}", meta.parsed_lines);
    let _ = writeln!(out, "Parse errors: {}", meta.parse_errors);
    let _ = writeln!(out);
    let _ = writeln!(out, "Log level counts:");
    for level in LogLevel::ALL {
        let _ = writeln!(out, "  {level}: {}", summary.summary.get(level));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Report written to: {output_file}");
    out
}

async fn run_cli(app: &App) -> anyhow::Result<()> {
    let summary = app
        .run()
        .await
        .with_context(|| format!("could not analyze {}", app.config().input_file))?;

    if !app.config().quiet {
        print!(
            "{}",
            render_console_summary(&summary, &app.config().output_file)
        );
    }
    Ok(())
}

// Main entry point for the application
pub async fn main() -> ExitCode {
    let app = match App::from_args(std::env::args_os()) {
        Ok(app) => app,
        // clap renders usage, --help and --version itself and picks the exit code
        Err(ConfigError::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = setup_logging(app.config().log_level, app.config().log_format) {
        eprintln!("Warning: {e}; continuing without diagnostics");
    }

    match run_cli(&app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<SentinelError>()
                .map_or(1, SentinelError::exit_code);
            ExitCode::from(code)
        }
    }
}
