//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.
//! This module combines code constants with their behavioral metadata in one place.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("F001");
    pub const INVALID_EXTENSION: Code = Code::new("F002");
    pub const FILE_TOO_LARGE: Code = Code::new("F003");
    pub const EMPTY_FILE: Code = Code::new("F004");
    pub const PERMISSION_DENIED: Code = Code::new("F005");
    pub const INVALID_ENCODING: Code = Code::new("F006");
    pub const IO_ERROR: Code = Code::new("F007");
    pub const INVALID_PATH: Code = Code::new("F008");
    pub const TOO_MANY_LINES: Code = Code::new("F009");
}

/// Lexical diagnostic codes (error-category tokens)
pub mod lexical {
    use super::Code;

    pub const UNRECOGNIZED_CHARACTER: Code = Code::new("L001");
    pub const UNTERMINATED_STRING: Code = Code::new("L002");
    pub const STRAY_BRACKET_CHARACTER: Code = Code::new("L003");
    pub const OVERSIZED_NUMBER: Code = Code::new("L004");
    pub const OVERSIZED_STRING: Code = Code::new("L005");
}

/// Structural diagnostic codes (program bracketing and related spot-checks)
pub mod structural {
    use super::Code;

    pub const MISSING_PROGRAM_START: Code = Code::new("S001");
    pub const MISSING_PROGRAM_END: Code = Code::new("S002");
    pub const MISPLACED_PROGRAM_START: Code = Code::new("S003");
    pub const PROGRAM_END_NOT_LAST: Code = Code::new("S004");
}

/// Initialization diagnostic codes
pub mod initialization {
    use super::Code;

    pub const UNDECLARED_ASSIGNMENT: Code = Code::new("N001");
}

/// Keyword misuse diagnostic codes
pub mod keyword_misuse {
    use super::Code;

    pub const FOREIGN_KEYWORD: Code = Code::new("K001");
}

/// Delimiter balance diagnostic codes
pub mod balance {
    use super::Code;

    pub const UNMATCHED_CLOSE: Code = Code::new("B001");
    pub const MISMATCHED_PAIR: Code = Code::new("B002");
    pub const UNCLOSED_DELIMITER: Code = Code::new("B003");
}

/// Syntax diagnostic codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("X001");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("X002");
    pub const MALFORMED_EXPRESSION: Code = Code::new("X003");
    pub const TRAILING_TOKENS: Code = Code::new("X004");
}

/// Pipeline error codes
pub mod pipeline {
    use super::Code;

    pub const FILE_STAGE_FAILED: Code = Code::new("P001");
    pub const VALIDATION_FAILED: Code = Code::new("P002");
    pub const REPORT_STAGE_FAILED: Code = Code::new("P003");
}

/// Report error codes
pub mod report {
    use super::Code;

    pub const SERIALIZATION_FAILED: Code = Code::new("R001");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    // General success codes
    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    // File processing success codes
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");

    // Lexical success codes
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const SCAN_CLEAN: Code = Code::new("I021");

    // Syntax success codes
    pub const PARSE_COMPLETE: Code = Code::new("I040");
    pub const SYNTAX_CLEAN: Code = Code::new("I041");

    // Report success codes
    pub const REPORT_COMPLETE: Code = Code::new("I050");

    // Pipeline success codes
    pub const PIPELINE_COMPLETE: Code = Code::new("I060");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "Contact system administrator or file bug report",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
                "Check system configuration and dependencies",
            ),
        );

        // File processing errors
        registry.insert(
            "F001",
            ErrorMetadata::new(
                "F001",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "File not found at specified path",
                "Check file path and ensure file exists",
            ),
        );
        registry.insert(
            "F002",
            ErrorMetadata::new(
                "F002",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "File does not have .birl extension",
                "Rename file with .birl extension or verify file type",
            ),
        );
        registry.insert(
            "F003",
            ErrorMetadata::new(
                "F003",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "File exceeds maximum size limit",
                "Reduce file size or split the program",
            ),
        );
        registry.insert(
            "F004",
            ErrorMetadata::new(
                "F004",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "File is empty when content expected",
                "Provide a file with content or check file integrity",
            ),
        );
        registry.insert(
            "F005",
            ErrorMetadata::new(
                "F005",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "Permission denied accessing file",
                "Check file permissions and user access rights",
            ),
        );
        registry.insert(
            "F006",
            ErrorMetadata::new(
                "F006",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "Invalid UTF-8 encoding in file",
                "Convert file to UTF-8 encoding or fix encoding issues",
            ),
        );
        registry.insert(
            "F007",
            ErrorMetadata::new(
                "F007",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "I/O error during file operation",
                "Check disk space, permissions, and file system integrity",
            ),
        );
        registry.insert(
            "F008",
            ErrorMetadata::new(
                "F008",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "Invalid file path provided",
                "Provide a valid file path",
            ),
        );
        registry.insert(
            "F009",
            ErrorMetadata::new(
                "F009",
                "FileProcessing",
                Severity::Medium,
                false,
                true,
                "File exceeds maximum line count",
                "Reduce the number of lines in the source file",
            ),
        );

        // Lexical diagnostics
        registry.insert(
            "L001",
            ErrorMetadata::new(
                "L001",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Character not recognized by any pattern rule",
                "Remove the character or check the language keyword list",
            ),
        );
        registry.insert(
            "L002",
            ErrorMetadata::new(
                "L002",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "String literal not terminated before end of line",
                "Add the closing double quote on the same line",
            ),
        );
        registry.insert(
            "L003",
            ErrorMetadata::new(
                "L003",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Literal parenthesis character used instead of the bracket phrases",
                "Replace ( and ) with 'Coloca anilha' and 'Tira anilha'",
            ),
        );
        registry.insert(
            "L004",
            ErrorMetadata::new(
                "L004",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Numeric literal exceeds the digit limit",
                "Use a number with at most 9 digits",
            ),
        );
        registry.insert(
            "L005",
            ErrorMetadata::new(
                "L005",
                "Lexical",
                Severity::Low,
                true,
                false,
                "String literal content exceeds the length limit",
                "Shorten the string to at most 50 characters",
            ),
        );

        // Structural diagnostics
        registry.insert(
            "S001",
            ErrorMetadata::new(
                "S001",
                "Structural",
                Severity::Medium,
                true,
                false,
                "Program does not start with the BORA marker",
                "Make BORA the first meaningful command",
            ),
        );
        registry.insert(
            "S002",
            ErrorMetadata::new(
                "S002",
                "Structural",
                Severity::Medium,
                true,
                false,
                "Program does not end with the BIRL! marker",
                "Make BIRL! the last meaningful command",
            ),
        );
        registry.insert(
            "S003",
            ErrorMetadata::new(
                "S003",
                "Structural",
                Severity::Medium,
                true,
                false,
                "BORA marker found after other commands",
                "Move BORA to the start of the program",
            ),
        );
        registry.insert(
            "S004",
            ErrorMetadata::new(
                "S004",
                "Structural",
                Severity::Medium,
                true,
                false,
                "BIRL! marker present but not the last meaningful command",
                "Move BIRL! to the end of the program",
            ),
        );

        // Initialization diagnostics
        registry.insert(
            "N001",
            ErrorMetadata::new(
                "N001",
                "Initialization",
                Severity::Medium,
                true,
                false,
                "Identifier assigned without prior MONSTRO declaration",
                "Declare the variable with MONSTRO before assigning it",
            ),
        );

        // Keyword misuse diagnostics
        registry.insert(
            "K001",
            ErrorMetadata::new(
                "K001",
                "KeywordMisuse",
                Severity::Low,
                true,
                false,
                "Identifier matches a foreign-language control keyword",
                "Use the suggested BIRL keyword instead",
            ),
        );

        // Balance diagnostics
        registry.insert(
            "B001",
            ErrorMetadata::new(
                "B001",
                "Balance",
                Severity::Medium,
                true,
                false,
                "Closing delimiter without a matching opening",
                "Add the matching 'Coloca anilha' before it",
            ),
        );
        registry.insert(
            "B002",
            ErrorMetadata::new(
                "B002",
                "Balance",
                Severity::Medium,
                true,
                false,
                "Closing delimiter does not match the open delimiter kind",
                "Close the delimiter opened at the cited position first",
            ),
        );
        registry.insert(
            "B003",
            ErrorMetadata::new(
                "B003",
                "Balance",
                Severity::Medium,
                true,
                false,
                "Delimiter opened but never closed",
                "Add the matching 'Tira anilha' before the end of the program",
            ),
        );

        // Syntax diagnostics
        registry.insert(
            "X001",
            ErrorMetadata::new(
                "X001",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Unexpected token during parsing",
                "Check token sequence against the grammar",
            ),
        );
        registry.insert(
            "X002",
            ErrorMetadata::new(
                "X002",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Unexpected end of input during parsing",
                "Complete the unfinished construct",
            ),
        );
        registry.insert(
            "X003",
            ErrorMetadata::new(
                "X003",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Malformed expression",
                "Check operators and terms in the expression",
            ),
        );
        registry.insert(
            "X004",
            ErrorMetadata::new(
                "X004",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Tokens found after the program end marker",
                "Remove commands after BIRL!",
            ),
        );

        // Pipeline errors
        registry.insert(
            "P001",
            ErrorMetadata::new(
                "P001",
                "Pipeline",
                Severity::Medium,
                false,
                true,
                "File processing stage failed",
                "Fix the underlying file error and retry",
            ),
        );
        registry.insert(
            "P002",
            ErrorMetadata::new(
                "P002",
                "Pipeline",
                Severity::Critical,
                false,
                true,
                "Pipeline validation failed",
                "Check module initialization and logging configuration",
            ),
        );
        registry.insert(
            "P003",
            ErrorMetadata::new(
                "P003",
                "Pipeline",
                Severity::Medium,
                false,
                true,
                "Report assembly stage failed",
                "Check report serialization inputs",
            ),
        );

        // Report errors
        registry.insert(
            "R001",
            ErrorMetadata::new(
                "R001",
                "Report",
                Severity::Medium,
                false,
                true,
                "Report serialization failed",
                "Check record contents for non-serializable data",
            ),
        );

        // Success codes carried in the registry for classification lookups
        registry.insert(
            "I004",
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed successfully",
                "Continue normal operation",
            ),
        );
        registry.insert(
            "I006",
            ErrorMetadata::new(
                "I006",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "File processing completed successfully",
                "Continue to next processing stage",
            ),
        );
        registry.insert(
            "I020",
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Tokenization completed",
                "Continue to the parser gate",
            ),
        );
        registry.insert(
            "I040",
            ErrorMetadata::new(
                "I040",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Parse completed",
                "Continue to report assembly",
            ),
        );
        registry.insert(
            "I060",
            ErrorMetadata::new(
                "I060",
                "Pipeline",
                Severity::Low,
                true,
                false,
                "Pipeline completed",
                "Deliver the analysis report",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
