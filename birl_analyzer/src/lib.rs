//! Diagnostic front-end for the BIRL teaching language
//!
//! The crate scans BIRL source with an ordered regex pattern table, runs
//! structural spot-checks alongside the scan, and, when the scan reports
//! nothing, checks the grammar with a recursive-descent parser using
//! panic-mode recovery. Every finding is an ordered Portuguese diagnostic;
//! the report module renders the legacy JSON wire payload plus a result
//! envelope for the CLI.
//!
//! Expressions chain operands through one uniform operator class, so no
//! precedence analysis happens anywhere in the parser.

// Internal modules
pub mod config;
pub mod diagnostics;
pub mod file_processor;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use pipeline::{AnalysisOutcome, PipelineError, PipelineResult};
pub use report::{AnalysisReport, WireRecord};
pub use tokens::{Token, TokenCategory};

/// Crate version baked in at compile time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
