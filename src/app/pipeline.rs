use crate::analyzer::Analyzer;
use crate::domain::{AnalysisSummary, SentinelError};
use crate::parser::LineParser;
use crate::report::ReportSink;
use crate::source::{LineSource, SourceError};
use std::path::Path;
use tracing::{debug, info};

/// Emit a progress event every this many lines.
pub const PROGRESS_INTERVAL: u64 = 100_000;

/// Fold every remaining line of `source` into `analyzer`, in order.
///
/// Parse failures are counted and skipped; only a read failure stops the
/// loop.
pub async fn analyze_source(
    source: &mut LineSource,
    analyzer: &mut Analyzer,
) -> Result<(), SourceError> {
    let parser = LineParser::new();

    while let Some(line) = source.next_line().await? {
        analyzer.observe_line();
        let outcome = parser.parse(&line);

        if let Err(failure) = &outcome {
            debug!(
                line = analyzer.total_lines(),
                reason = %failure.reason(),
                "skipping unparseable line"
            );
        }
        analyzer.fold(&outcome);

        if analyzer.total_lines() % PROGRESS_INTERVAL == 0 {
            debug!(
                lines = analyzer.total_lines(),
                parsed = analyzer.parsed_lines(),
                "analysis progress"
            );
        }
    }

    Ok(())
}

/// Run the main processing pipeline: read → parse → aggregate → report.
///
/// Nothing is handed to `sink` unless the whole input was read.
pub async fn run_analysis(
    input_file: &str,
    sink: &dyn ReportSink,
) -> Result<AnalysisSummary, SentinelError> {
    let mut source = LineSource::open(Path::new(input_file)).await?;
    let mut analyzer = Analyzer::new(input_file);

    info!("Analyzing log file: {input_file}");
    analyze_source(&mut source, &mut analyzer).await?;

    let summary = analyzer.snapshot();
    info!(
        total_lines = summary.meta.total_lines,
        parsed_lines = summary.meta.parsed_lines,
        parse_errors = summary.meta.parse_errors,
        "Analysis finished"
    );

    sink.write_report(&summary).await?;
    Ok(summary)
}
