//! Token model for the BIRL language
//!
//! Tokens are immutable named-field records. A token reclassified by size
//! validation keeps its original category so downstream checks can still
//! treat it as the literal kind the user wrote.

use crate::utils::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of token categories produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    // === PROGRAM STRUCTURE ===
    /// BORA
    ProgramStart,
    /// BIRL!
    ProgramEnd,

    // === STATEMENT KEYWORDS ===
    /// MONSTRO
    VariableDeclaration,
    /// TASAINDODAJAULA
    Assignment,
    /// GRITA
    Print,
    /// CONFERE_AI
    If,
    /// CONFERE_MAIS
    Elif,
    /// OU_NAO
    Else,
    /// TREINA ATÉ
    While,
    /// FICA GRANDE
    FunctionDeclaration,
    /// CHAMA
    FunctionCall,

    // === LITERAL KEYWORDS ===
    /// VERDADEIRO
    BooleanTrue,
    /// FALSO
    BooleanFalse,

    // === OPERATORS ===
    /// E, OU, NÃO
    LogicalOp,
    /// += -= *= /=
    CompoundAssignment,
    /// >= <= == != > <
    RelationalOp,
    /// + - * /
    ArithmeticOp,

    // === DELIMITERS AND PUNCTUATION ===
    /// Coloca anilha
    OpenBracket,
    /// Tira anilha
    CloseBracket,
    Comma,
    Colon,

    // === LITERALS ===
    IntegerLiteral,
    DecimalLiteral,
    StringLiteral,

    // === OTHER ===
    Comment,
    Identifier,

    // === ERROR CATEGORIES ===
    /// Character no rule recognized
    UnrecognizedCharacter,
    /// Opening quote with no closing quote before line end
    UnterminatedString,
    /// Literal ( or ) instead of the bracket keyword phrases
    StrayBracket,
    /// Numeric literal over the digit limit
    OversizedNumber,
    /// String literal over the content length limit
    OversizedString,
}

impl TokenCategory {
    /// Legacy wire label used in the JSON report (`type` field)
    pub fn wire_label(&self) -> &'static str {
        match self {
            Self::ProgramStart => "INICIO_PROGRAMA",
            Self::ProgramEnd => "FIM_PROGRAMA",
            Self::VariableDeclaration => "VARIAVEL",
            Self::Assignment => "ATRIBUICAO",
            Self::Print => "PRINT",
            Self::If => "IF",
            Self::Elif => "ELIF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::FunctionDeclaration => "FUNC",
            Self::FunctionCall => "CALL",
            Self::BooleanTrue => "BOOLEAN_VERDADEIRO",
            Self::BooleanFalse => "BOOLEAN_FALSO",
            Self::LogicalOp => "OP_LOGICO",
            Self::CompoundAssignment => "OP_ATRIBUICAO_COMPOSTA",
            Self::RelationalOp => "OP_RELACIONAL_OU_IGUALDADE",
            Self::ArithmeticOp => "OP_ARITMETICO",
            Self::OpenBracket => "PARENTESES_ABRE",
            Self::CloseBracket => "PARENTESES_FECHA",
            Self::Comma => "VIRGULA",
            Self::Colon => "DOIS_PONTOS",
            Self::IntegerLiteral => "NUM",
            Self::DecimalLiteral => "NUM_DECIMAL",
            Self::StringLiteral => "STRING",
            Self::Comment => "COMENTARIO",
            Self::Identifier => "ID",
            Self::UnrecognizedCharacter => "ERRO LEXICO",
            Self::UnterminatedString => "STRING_NAO_FECHADA",
            Self::StrayBracket => "PARENTESE_INVALIDO",
            Self::OversizedNumber => "NUMERO_MUITO_GRANDE",
            Self::OversizedString => "STRING_MUITO_LONGA",
        }
    }

    /// Check if this is one of the error categories
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedCharacter
                | Self::UnterminatedString
                | Self::StrayBracket
                | Self::OversizedNumber
                | Self::OversizedString
        )
    }

    /// Check if this category counts toward the meaningful token sequence
    /// (comments and error tokens do not; whitespace never becomes a token)
    pub fn is_meaningful(&self) -> bool {
        !self.is_error() && !matches!(self, Self::Comment)
    }

    /// Check if this category survives the grammar filter
    pub fn is_grammar_relevant(&self) -> bool {
        self.is_meaningful()
    }

    /// Check if this is an assignment operator (plain or compound)
    pub fn is_assignment_operator(&self) -> bool {
        matches!(self, Self::Assignment | Self::CompoundAssignment)
    }

    /// Check if this category can appear as an expression term literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Self::IntegerLiteral
                | Self::DecimalLiteral
                | Self::StringLiteral
                | Self::BooleanTrue
                | Self::BooleanFalse
        )
    }

    /// Check if this is a binary operator accepted inside expressions
    pub fn is_binary_operator(&self) -> bool {
        matches!(self, Self::ArithmeticOp | Self::RelationalOp | Self::LogicalOp)
    }

    /// Check if this category opens a statement in the grammar
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            Self::VariableDeclaration
                | Self::Print
                | Self::If
                | Self::While
                | Self::FunctionDeclaration
                | Self::FunctionCall
        )
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_label())
    }
}

/// A single scanned token with its source position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub line: u32,
    pub column: u32,
    pub lexeme: String,
    pub category: TokenCategory,
    /// Category the lexeme matched before size validation reclassified it
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_category: Option<TokenCategory>,
}

impl Token {
    /// Create a token at a source position
    pub fn new(line: u32, column: u32, lexeme: impl Into<String>, category: TokenCategory) -> Self {
        Self {
            line,
            column,
            lexeme: lexeme.into(),
            category,
            original_category: None,
        }
    }

    /// Create a token reclassified by size validation, retaining the category
    /// it originally matched
    pub fn reclassified(
        line: u32,
        column: u32,
        lexeme: impl Into<String>,
        category: TokenCategory,
        original_category: TokenCategory,
    ) -> Self {
        Self {
            line,
            column,
            lexeme: lexeme.into(),
            category,
            original_category: Some(original_category),
        }
    }

    /// Category to use for checks that care about what the user wrote,
    /// not how the token was reported
    pub fn effective_category(&self) -> TokenCategory {
        self.original_category.unwrap_or(self.category)
    }

    /// Source position of the token start
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Legacy wire label of the reported category
    pub fn wire_label(&self) -> &'static str {
        self.category.wire_label()
    }

    /// Check if this token counts toward the meaningful token sequence
    pub fn is_meaningful(&self) -> bool {
        self.category.is_meaningful()
    }

    /// Check if this token carries an error category
    pub fn is_error(&self) -> bool {
        self.category.is_error()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at {}:{}",
            self.category.wire_label(),
            self.lexeme,
            self.line,
            self.column
        )
    }
}
