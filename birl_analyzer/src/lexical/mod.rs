//! Lexical analysis module
//!
//! Pattern-table tokenization of BIRL source text plus the structural
//! spot-checks that ride along with the scan (program bracketing,
//! pre-declaration heuristic, foreign-keyword detection, delimiter balance).
//! The scan never fails; everything it finds becomes an ordered diagnostic.

pub mod analyzer;
pub mod patterns;

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::diagnostics::Diagnostic;
use crate::tokens::Token;

pub use analyzer::{LexicalAnalyzer, LexicalMetrics};
pub use patterns::{match_at, pattern_table, PatternRule};

/// Tokenize source text with default preferences.
/// Returns the full token list (comments and error tokens included) and the
/// ordered lexical/structural diagnostics.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut analyzer = LexicalAnalyzer::new();
    analyzer.scan_source(source)
}

/// Tokenize with custom runtime preferences
pub fn tokenize_with_preferences(
    source: &str,
    preferences: LexicalPreferences,
) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences);
    analyzer.scan_source(source)
}

/// Create a new scanner with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}

/// Create a scanner with custom runtime preferences
pub fn create_analyzer_with_preferences(preferences: LexicalPreferences) -> LexicalAnalyzer {
    LexicalAnalyzer::with_preferences(preferences)
}

/// Initialize lexical module validation (for system startup).
/// Confirms every diagnostic code the scanner can emit is registered.
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::lexical::UNRECOGNIZED_CHARACTER,
        crate::logging::codes::lexical::UNTERMINATED_STRING,
        crate::logging::codes::lexical::STRAY_BRACKET_CHARACTER,
        crate::logging::codes::lexical::OVERSIZED_NUMBER,
        crate::logging::codes::lexical::OVERSIZED_STRING,
        crate::logging::codes::structural::MISSING_PROGRAM_START,
        crate::logging::codes::structural::MISSING_PROGRAM_END,
        crate::logging::codes::structural::MISPLACED_PROGRAM_START,
        crate::logging::codes::structural::PROGRAM_END_NOT_LAST,
        crate::logging::codes::initialization::UNDECLARED_ASSIGNMENT,
        crate::logging::codes::keyword_misuse::FOREIGN_KEYWORD,
        crate::logging::codes::balance::UNMATCHED_CLOSE,
        crate::logging::codes::balance::MISMATCHED_PAIR,
        crate::logging::codes::balance::UNCLOSED_DELIMITER,
    ];

    for code in &test_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical diagnostic code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    let limits = get_scan_limits();
    crate::log_debug!("Lexical scan limits initialized",
        "max_number_digits" => limits.max_number_digits,
        "max_string_content_length" => limits.max_string_content_length,
        "pattern_rule_count" => limits.pattern_rule_count
    );

    Ok(())
}

/// Validate basic tokenization functionality
pub fn validate_tokenization() -> Result<(), String> {
    if pattern_table().len() != PATTERN_RULE_COUNT {
        return Err(format!(
            "Pattern table has {} rules, expected {}",
            pattern_table().len(),
            PATTERN_RULE_COUNT
        ));
    }

    if MAX_NUMBER_DIGITS == 0 {
        return Err("MAX_NUMBER_DIGITS cannot be zero".to_string());
    }
    if MAX_STRING_CONTENT_LENGTH == 0 {
        return Err("MAX_STRING_CONTENT_LENGTH cannot be zero".to_string());
    }

    // Smoke scan: the smallest clean program must stay clean
    let (tokens, diagnostics) = tokenize("BORA BIRL!");
    if tokens.len() != 2 || !diagnostics.is_empty() {
        return Err(format!(
            "Smoke scan failed: {} tokens, {} diagnostics",
            tokens.len(),
            diagnostics.len()
        ));
    }

    Ok(())
}

/// Compile-time scan limits (for reporting and debugging)
pub fn get_scan_limits() -> ScanLimits {
    ScanLimits {
        max_number_digits: MAX_NUMBER_DIGITS,
        max_string_content_length: MAX_STRING_CONTENT_LENGTH,
        pattern_rule_count: PATTERN_RULE_COUNT,
    }
}

/// Compile-time limits applied during scanning
#[derive(Debug, Clone)]
pub struct ScanLimits {
    pub max_number_digits: usize,
    pub max_string_content_length: usize,
    pub pattern_rule_count: usize,
}
