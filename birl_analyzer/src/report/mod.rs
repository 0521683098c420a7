//! Wire report assembly - the legacy JSON payload plus a result envelope
//!
//! The wire payload is an ordered array of flat records: every scan
//! diagnostic first, then the parser's diagnostics (or a single success
//! marker when parsing ran and found nothing), then the complete raw token
//! list in scan order. Front-ends consume the array as-is, so field names,
//! label spellings, and ordering are all part of the contract.
//!
//! A run gated off by scan diagnostics carries no syntax section at all:
//! no parser diagnostics and no success marker.
//!
//! The [`AnalysisReport`] envelope wraps the same records with version,
//! timing, status, and per-kind counts for the CLI's default output.

use crate::config::build_info;
use crate::config::runtime::ReportPreferences;
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::logging::codes::{self, Code};
use crate::tokens::Token;
use crate::{log_debug, log_info, log_success};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Module version
pub const VERSION: &str = "1.0.0";

/// Message carried by the success marker record
pub const SUCCESS_MESSAGE: &str = "Análise sintática concluída sem erros.";

/// `type` label of the success marker record
pub const SUCCESS_TYPE_LABEL: &str = "SUCESSO";

/// `category` value for diagnostic records
pub const CATEGORY_ERROR: &str = "erro";

/// `category` value for token records
pub const CATEGORY_TOKEN: &str = "token";

/// `category` value for the success marker
pub const CATEGORY_SUCCESS: &str = "sucesso";

/// Report assembly errors
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReportError {
    /// Classification code for the logging registry
    pub fn error_code(&self) -> Code {
        match self {
            Self::Serialization(_) => codes::report::SERIALIZATION_FAILED,
        }
    }
}

/// Line field of a wire record: a source line number, or the literal string
/// `"unknown"` when the diagnostic had no relevant token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireLine {
    Known(u32),
    Unknown(String),
}

impl WireLine {
    /// The placeholder used for diagnostics without a line
    pub fn unknown() -> Self {
        Self::Unknown("unknown".to_string())
    }

    /// Numeric line when one is known
    pub fn as_known(&self) -> Option<u32> {
        match self {
            Self::Known(line) => Some(*line),
            Self::Unknown(_) => None,
        }
    }
}

impl From<u32> for WireLine {
    fn from(line: u32) -> Self {
        Self::Known(line)
    }
}

impl From<Option<u32>> for WireLine {
    fn from(line: Option<u32>) -> Self {
        match line {
            Some(value) => Self::Known(value),
            None => Self::unknown(),
        }
    }
}

impl fmt::Display for WireLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(line) => write!(f, "{}", line),
            Self::Unknown(text) => write!(f, "{}", text),
        }
    }
}

/// One row of the legacy JSON payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    pub line: WireLine,
    pub column: u32,
    pub lexeme_or_message: String,
    #[serde(rename = "type")]
    pub type_label: String,
    pub category: String,
}

impl WireRecord {
    /// Diagnostic row: the message text under the kind's wire label
    pub fn from_diagnostic(diagnostic: &Diagnostic) -> Self {
        Self {
            line: diagnostic.line.into(),
            column: diagnostic.column,
            lexeme_or_message: diagnostic.message.clone(),
            type_label: diagnostic.wire_label().to_string(),
            category: CATEGORY_ERROR.to_string(),
        }
    }

    /// Token row: the raw lexeme under the category's wire label
    pub fn from_token(token: &Token) -> Self {
        Self {
            line: WireLine::Known(token.line),
            column: token.column,
            lexeme_or_message: token.lexeme.clone(),
            type_label: token.wire_label().to_string(),
            category: CATEGORY_TOKEN.to_string(),
        }
    }

    /// The single row emitted when parsing ran and reported nothing
    pub fn success_marker() -> Self {
        Self {
            line: WireLine::Known(0),
            column: 0,
            lexeme_or_message: SUCCESS_MESSAGE.to_string(),
            type_label: SUCCESS_TYPE_LABEL.to_string(),
            category: CATEGORY_SUCCESS.to_string(),
        }
    }

    /// Check if this row is the success marker
    pub fn is_success_marker(&self) -> bool {
        self.category == CATEGORY_SUCCESS
    }
}

/// Assemble the ordered wire rows. `syntax_diagnostics` is `None` when the
/// scan gated the parser off; `Some(&[])` means parsing ran clean and the
/// success marker takes the syntax section's place.
pub fn build_wire_records(
    scan_diagnostics: &[Diagnostic],
    syntax_diagnostics: Option<&[Diagnostic]>,
    tokens: &[Token],
) -> Vec<WireRecord> {
    let syntax_rows = syntax_diagnostics.map_or(0, |d| d.len().max(1));
    let mut records = Vec::with_capacity(scan_diagnostics.len() + syntax_rows + tokens.len());

    records.extend(scan_diagnostics.iter().map(WireRecord::from_diagnostic));

    match syntax_diagnostics {
        Some(diagnostics) if diagnostics.is_empty() => {
            records.push(WireRecord::success_marker());
        }
        Some(diagnostics) => {
            records.extend(diagnostics.iter().map(WireRecord::from_diagnostic));
        }
        None => {
            log_debug!("Parser gated off; wire payload has no syntax section",
                "scan_diagnostics" => scan_diagnostics.len()
            );
        }
    }

    records.extend(tokens.iter().map(WireRecord::from_token));
    records
}

/// Overall verdict of one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Clean,
    Diagnostics,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Diagnostics => "diagnostics",
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-kind diagnostic counts for the report envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticCounts {
    pub lexical: usize,
    pub structural: usize,
    pub initialization: usize,
    pub keyword_misuse: usize,
    pub balance: usize,
    pub syntax: usize,
}

impl DiagnosticCounts {
    /// Tally both diagnostic sections of a run
    pub fn tally(scan_diagnostics: &[Diagnostic], syntax_diagnostics: Option<&[Diagnostic]>) -> Self {
        let mut counts = Self::default();
        for diagnostic in scan_diagnostics
            .iter()
            .chain(syntax_diagnostics.into_iter().flatten())
        {
            counts.record(diagnostic.kind);
        }
        counts
    }

    fn record(&mut self, kind: DiagnosticKind) {
        match kind {
            DiagnosticKind::Lexical => self.lexical += 1,
            DiagnosticKind::Structural => self.structural += 1,
            DiagnosticKind::Initialization => self.initialization += 1,
            DiagnosticKind::KeywordMisuse => self.keyword_misuse += 1,
            DiagnosticKind::Balance => self.balance += 1,
            DiagnosticKind::Syntax => self.syntax += 1,
        }
    }

    /// Total findings across every kind
    pub fn total(&self) -> usize {
        self.lexical
            + self.structural
            + self.initialization
            + self.keyword_misuse
            + self.balance
            + self.syntax
    }
}

/// Full analysis result: the wire rows plus version, timing, and counts.
/// Timestamps are optional per [`ReportPreferences::include_timestamps`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analyzer_version: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub duration_ms: Option<f64>,
    pub status: AnalysisStatus,
    pub counts: DiagnosticCounts,
    pub token_count: usize,
    pub records: Vec<WireRecord>,
}

impl AnalysisReport {
    /// Build the envelope from one run's outputs. Timing starts out unset;
    /// pipelines attach it with [`AnalysisReport::with_timing`].
    pub fn assemble(
        scan_diagnostics: &[Diagnostic],
        syntax_diagnostics: Option<&[Diagnostic]>,
        tokens: &[Token],
    ) -> Self {
        let counts = DiagnosticCounts::tally(scan_diagnostics, syntax_diagnostics);
        let status = if counts.total() == 0 {
            AnalysisStatus::Clean
        } else {
            AnalysisStatus::Diagnostics
        };
        let records = build_wire_records(scan_diagnostics, syntax_diagnostics, tokens);

        log_success!(
            codes::success::REPORT_COMPLETE,
            "Analysis report assembled",
            "records" => records.len(),
            "diagnostics" => counts.total(),
            "tokens" => tokens.len(),
            "status" => status
        );

        Self {
            analyzer_version: build_info::version().to_string(),
            started_at: None,
            finished_at: None,
            duration_ms: None,
            status,
            counts,
            token_count: tokens.len(),
            records,
        }
    }

    /// Attach run timing. Wall-clock timestamps are recorded only when the
    /// report preferences ask for them; the duration is always kept.
    pub fn with_timing(mut self, started_at: DateTime<Utc>, duration: Duration) -> Self {
        let preferences = ReportPreferences::default();
        self.duration_ms = Some(duration.as_secs_f64() * 1000.0);
        if preferences.include_timestamps {
            let elapsed = chrono::Duration::from_std(duration)
                .unwrap_or_else(|_| chrono::Duration::zero());
            self.started_at = Some(started_at);
            self.finished_at = Some(started_at + elapsed);
        }
        self
    }

    /// Pretty-printed JSON envelope
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(ReportError::from)
    }

    /// Single-line JSON envelope
    pub fn to_json_compact(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(ReportError::from)
    }

    /// JSON envelope honoring the configured pretty-print preference
    pub fn render_json(&self) -> Result<String, ReportError> {
        if ReportPreferences::default().pretty_json {
            self.to_json()
        } else {
            self.to_json_compact()
        }
    }

    /// Bare wire array without the envelope, in transport form
    pub fn wire_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(&self.records).map_err(ReportError::from)
    }

    /// Parse an envelope back from JSON
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        serde_json::from_str(payload).map_err(ReportError::from)
    }

    /// Check if the run finished without findings
    pub fn is_clean(&self) -> bool {
        self.status == AnalysisStatus::Clean
    }
}

/// Initialize report module logging validation
pub fn init_report_logging() -> Result<(), String> {
    let code = codes::report::SERIALIZATION_FAILED;
    if codes::get_description(code.as_str()) == "Unknown error" {
        return Err(format!(
            "Report error code {} has no description",
            code.as_str()
        ));
    }
    if codes::get_error_metadata(code.as_str()).is_none() {
        return Err(format!(
            "Report error code {} not found in metadata registry",
            code.as_str()
        ));
    }

    let success_code = codes::success::REPORT_COMPLETE;
    if codes::get_error_metadata(success_code.as_str()).is_none() {
        log_debug!("Success code outside error registry",
            "code" => success_code.as_str()
        );
    }

    log_info!("Report module logging validation completed");
    Ok(())
}

/// Smoke-check report assembly on a clean empty run
pub fn validate_report_generation() -> Result<(), String> {
    let report = AnalysisReport::assemble(&[], Some(&[]), &[]);
    if report.records.len() != 1 || !report.records[0].is_success_marker() {
        return Err("Clean run did not produce a single success marker".to_string());
    }
    report
        .to_json()
        .map_err(|e| format!("Report serialization failed: {}", e))?;
    Ok(())
}
