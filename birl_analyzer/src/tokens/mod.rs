//! Token system for BIRL lexical analysis
//!
//! This module provides the complete token system for the BIRL analyzer,
//! representing the output of lexical analysis. It defines how raw source
//! text, once scanned, becomes a structured sequence the parser can consume.
//!
//! # Overview
//!
//! The tokens module sits between the scanner and the parser: the scanner
//! produces a flat list of [`Token`] values (including comment and error
//! tokens for reporting), and the parser navigates a filtered view through
//! [`TokenStream`].
//!
//! ## Key Components
//!
//! - **[`TokenCategory`]** - Complete enumeration of BIRL token categories
//! - **[`Token`]** - A categorized lexeme with its 1-based source position
//! - **[`TokenStream`]** - Stream navigation with lookahead and filtering
//!
//! ## Token Categories
//!
//! ### Structural Tokens
//! Program delimiters (`BORA`/`BIRL!`), bracketing phrases (`Coloca anilha`/
//! `Tira anilha`), and statement keywords (`MONSTRO`, `GRITA`, `CONFERE_AI`,
//! `CONFERE_MAIS`, `OU_NAO`, `TREINA ATÉ`, `FICA GRANDE`, `CHAMA`).
//!
//! ### Literal Tokens
//! - **String literals**: double-quoted, single line, no escape sequences
//! - **Numeric literals**: integers and decimals, digit-count limited
//! - **Boolean literals**: `VERDADEIRO` and `FALSO`
//!
//! ### Operation Tokens
//! - **Assignment**: `TASAINDODAJAULA` plus compound forms `+=` `-=` `*=` `/=`
//! - **Relational**: `>=`, `<=`, `==`, `!=`, `>`, `<`
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Logical**: `E`, `OU`, `NÃO`
//!
//! ### Error Tokens
//! Unrecognized characters, unterminated strings, stray `(` or `)`, and
//! oversized literals are materialized as tokens so the wire report can
//! carry them, but they never reach the grammar.
//!
//! ## Token Stream Management
//!
//! [`TokenStream`] keeps the full scan output for reporting while the
//! cursor walks only grammar-relevant tokens:
//! - **Lookahead**: peek at upcoming tokens without advancing
//! - **Filtering**: comments and error tokens are skipped automatically
//! - **Checkpoints**: save and restore positions for backtracking
//!
//! All tokens carry 1-based line and character-counted column positions so
//! diagnostics can cite exact source locations.

pub mod token;
pub mod token_stream;

// Re-export key types for convenience
pub use token::{Token, TokenCategory};
pub use token_stream::{TokenStream, TokenStreamBuilder, TokenStreamError};

// Re-export position type from utils
pub use crate::utils::Position;

/// Module version
pub const VERSION: &str = "1.0.0";

/// Drop tokens the grammar never sees (comments and error tokens),
/// preserving scan order.
pub fn filter_for_grammar(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|token| token.category.is_grammar_relevant())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_grammar() {
        let tokens = vec![
            Token::new(1, 1, "BORA", TokenCategory::ProgramStart),
            Token::new(1, 6, "# aquecimento", TokenCategory::Comment),
            Token::new(2, 1, "@", TokenCategory::UnrecognizedCharacter),
            Token::new(3, 1, "BIRL!", TokenCategory::ProgramEnd),
        ];

        let filtered = filter_for_grammar(&tokens);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].category, TokenCategory::ProgramStart);
        assert_eq!(filtered[1].category, TokenCategory::ProgramEnd);
    }

    #[test]
    fn test_filter_preserves_order_and_positions() {
        let tokens = vec![
            Token::new(1, 1, "GRITA", TokenCategory::Print),
            Token::new(1, 7, "\"oi", TokenCategory::UnterminatedString),
            Token::new(2, 3, "x", TokenCategory::Identifier),
        ];

        let filtered = filter_for_grammar(&tokens);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].lexeme, "GRITA");
        assert_eq!(filtered[1].line, 2);
        assert_eq!(filtered[1].column, 3);
    }
}
