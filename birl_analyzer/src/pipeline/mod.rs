//! Analysis pipeline: file loading, scan, parser gate, report assembly
//!
//! The gate is the pipeline's one branching rule: the parser runs only when
//! the scan produced zero diagnostics. A gated run still carries the full
//! token list, so the wire payload is complete either way.

mod error;
mod info;
mod result;
mod validation;

pub use error::PipelineError;
pub use info::{get_pipeline_info, PipelineInfo};
pub use result::{AnalysisOutcome, PipelineResult};
pub use validation::validate_pipeline;

use crate::logging;
use crate::logging::codes;
use crate::{log_info, log_success};
use chrono::Utc;
use std::path::PathBuf;
use std::time::Instant;

/// Analyze source text: scan, then parse when the gate allows it
pub fn analyze_source(source: &str) -> AnalysisOutcome {
    let scan_started = Instant::now();
    let (tokens, scan_diagnostics) = crate::lexical::tokenize(source);
    let scan_duration = scan_started.elapsed();

    let (syntax_diagnostics, parse_duration) = if scan_diagnostics.is_empty() {
        log_success!(
            codes::success::SCAN_CLEAN,
            "Scan reported no findings; running the parser",
            "tokens" => tokens.len()
        );

        let parse_started = Instant::now();
        let diagnostics = crate::syntax::parse(&tokens);
        let parse_duration = parse_started.elapsed();

        if diagnostics.is_empty() {
            log_success!(codes::success::SYNTAX_CLEAN, "Parse reported no findings");
        }

        (Some(diagnostics), Some(parse_duration))
    } else {
        log_info!("Scan findings gate the parser off",
            "scan_diagnostics" => scan_diagnostics.len()
        );
        (None, None)
    };

    AnalysisOutcome {
        tokens,
        scan_diagnostics,
        syntax_diagnostics,
        scan_duration,
        parse_duration,
    }
}

/// Process a single file through the complete pipeline
/// (file -> scan -> gate -> parse -> report)
pub fn process_file(file_path: &str) -> Result<PipelineResult, PipelineError> {
    let start_time = Instant::now();
    let started_at = Utc::now();

    logging::with_file_context(PathBuf::from(file_path), 0, || {
        log_info!("Starting BIRL analysis pipeline", "file" => file_path);

        let file_result = crate::file_processor::process_file(file_path)?;
        let outcome = analyze_source(&file_result.source);

        let total_duration = start_time.elapsed();
        let report = outcome.report().with_timing(started_at, total_duration);

        let result = PipelineResult::new(file_result.metadata, outcome, report, total_duration);
        result.log_success(file_path);

        Ok(result)
    })
}
