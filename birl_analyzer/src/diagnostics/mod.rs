//! Diagnostic records shared by the scanner and the parser
//!
//! Every analysis finding is a [`Diagnostic`]: an ordered, Portuguese-language
//! record with a kind, a stable classification code, and a source position.
//! Emission order is significant and preserved all the way to the wire report.
//!
//! Position conventions: lexical diagnostics carry the real column of the
//! offending lexeme; structural, initialization, keyword-misuse, balance, and
//! syntax diagnostics carry column 0 and embed positions in the message text.
//! A diagnostic with no relevant token has no line (`None`), which serializes
//! as `"unknown"` on the wire.

use crate::logging::codes::{self, Code};
use crate::utils::Position;
use std::collections::HashSet;
use std::fmt;

/// Families of analysis findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Scanner-level character and literal problems
    Lexical,
    /// Program start/end placement problems
    Structural,
    /// Assignment to a variable never declared
    Initialization,
    /// Keyword borrowed from another language
    KeywordMisuse,
    /// Delimiter pairing problems
    Balance,
    /// Grammar violations found by the parser
    Syntax,
}

impl DiagnosticKind {
    /// Legacy wire label for this kind (accent-free, as the report expects)
    pub fn wire_label(&self) -> &'static str {
        match self {
            Self::Lexical => "ERRO LEXICO",
            Self::Structural => "ERRO DE ESTRUTURA",
            Self::Initialization => "ERRO DE INICIALIZACAO",
            Self::KeywordMisuse => "ERRO DE PALAVRA-CHAVE",
            Self::Balance => "ERRO DE BALANCEAMENTO",
            Self::Syntax => "ERRO SINTATICO",
        }
    }

    /// Stable identifier for logging context and counts
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Structural => "structural",
            Self::Initialization => "initialization",
            Self::KeywordMisuse => "keyword-misuse",
            Self::Balance => "balance",
            Self::Syntax => "syntax",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One analysis finding, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line, or None when no relevant token exists
    pub line: Option<u32>,
    /// 1-based character column for lexical findings, 0 otherwise
    pub column: u32,
    /// User-facing message (Portuguese)
    pub message: String,
    /// Finding family
    pub kind: DiagnosticKind,
    /// Classification code for the logging registry
    pub code: Code,
}

impl Diagnostic {
    /// Create a diagnostic with explicit position fields
    pub fn new(
        kind: DiagnosticKind,
        code: Code,
        line: Option<u32>,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            kind,
            code,
        }
    }

    /// Lexical finding at a real source position
    pub fn lexical(code: Code, line: u32, column: u32, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Lexical, code, Some(line), column, message)
    }

    /// Structural finding; line is the relevant token's line when one exists
    pub fn structural(code: Code, line: Option<u32>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Structural, code, line, 0, message)
    }

    /// Assignment-before-declaration finding
    pub fn initialization(line: u32, message: impl Into<String>) -> Self {
        Self::new(
            DiagnosticKind::Initialization,
            codes::initialization::UNDECLARED_ASSIGNMENT,
            Some(line),
            0,
            message,
        )
    }

    /// Foreign-keyword finding
    pub fn keyword_misuse(line: u32, message: impl Into<String>) -> Self {
        Self::new(
            DiagnosticKind::KeywordMisuse,
            codes::keyword_misuse::FOREIGN_KEYWORD,
            Some(line),
            0,
            message,
        )
    }

    /// Delimiter pairing finding; line cites the token that exposed it
    pub fn balance(code: Code, line: Option<u32>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Balance, code, line, 0, message)
    }

    /// Parser finding; line is None for end-of-input conditions
    pub fn syntax(code: Code, line: Option<u32>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Syntax, code, line, 0, message)
    }

    /// Wire label of this diagnostic's kind
    pub fn wire_label(&self) -> &'static str {
        self.kind.wire_label()
    }

    /// Classification code
    pub fn error_code(&self) -> Code {
        self.code
    }

    /// Source position when the line is known
    pub fn position(&self) -> Option<Position> {
        self.line.map(|line| Position::new(line, self.column.max(1)))
    }

    /// Line rendered the way the wire does (number or "unknown")
    pub fn line_display(&self) -> String {
        match self.line {
            Some(line) => line.to_string(),
            None => "unknown".to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}:{} {}",
            self.kind.wire_label(),
            self.line_display(),
            self.column,
            self.message
        )
    }
}

/// Order-preserving full-content de-duplication, keeping first occurrences.
/// Applied once at the end of a tokenizer pass.
pub fn dedup_keep_first(diagnostics: Vec<Diagnostic>) -> Vec<Diagnostic> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(diagnostics.len());

    for diagnostic in diagnostics {
        let key = (
            diagnostic.line,
            diagnostic.column,
            diagnostic.kind,
            diagnostic.message.clone(),
        );
        if seen.insert(key) {
            result.push(diagnostic);
        }
    }

    result
}

/// Append unless the previous entry has the same line and message.
/// The parser's recovery loop uses this to avoid stuttering on one site.
pub fn push_unless_repeated(diagnostics: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    if let Some(last) = diagnostics.last() {
        if last.line == diagnostic.line && last.message == diagnostic.message {
            return;
        }
    }
    diagnostics.push(diagnostic);
}

/// Count findings of one kind
pub fn count_by_kind(diagnostics: &[Diagnostic], kind: DiagnosticKind) -> usize {
    diagnostics.iter().filter(|d| d.kind == kind).count()
}
