//! Position-accurate token stream management
//!
//! Maintains the complete scan output (comments and error tokens included)
//! alongside the filtered view the grammar consumes, so error reporting can
//! always cite real source positions.

use crate::logging::codes::{self, Code};
use crate::tokens::token::{Token, TokenCategory};
use thiserror::Error;

/// Token stream that keeps the full scan output while navigating only the
/// grammar-relevant subsequence.
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens in scan order (including comments and error tokens)
    all_tokens: Vec<Token>,
    /// Indices into all_tokens for grammar-relevant tokens
    grammar_indices: Vec<usize>,
    /// Current position in grammar_indices
    position: usize,
}

impl TokenStream {
    /// Create a new token stream with automatic grammar filtering
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut stream = Self {
            all_tokens: tokens,
            grammar_indices: Vec::new(),
            position: 0,
        };
        stream.rebuild_grammar_indices();
        stream
    }

    fn rebuild_grammar_indices(&mut self) {
        self.grammar_indices.clear();

        for (i, token) in self.all_tokens.iter().enumerate() {
            if token.category.is_grammar_relevant() {
                self.grammar_indices.push(i);
            }
        }

        crate::log_debug!("Token stream built",
            "total_tokens" => self.all_tokens.len(),
            "grammar_tokens" => self.grammar_indices.len()
        );

        self.position = 0;
    }

    // === CORE NAVIGATION ===

    /// Get the current grammar token
    pub fn current(&self) -> Option<&Token> {
        self.grammar_indices
            .get(self.position)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Peek at the next grammar token without advancing
    pub fn peek(&self) -> Option<&Token> {
        self.peek_ahead(1)
    }

    /// Peek ahead by n positions in grammar tokens
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.grammar_indices
            .get(self.position + n)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Advance to the next grammar token
    pub fn advance(&mut self) -> Option<&Token> {
        if self.position < self.grammar_indices.len() {
            self.position += 1;
        }
        self.current()
    }

    /// Get the most recently consumed grammar token
    pub fn previous(&self) -> Option<&Token> {
        let prior = self.position.checked_sub(1)?;
        self.grammar_indices
            .get(prior)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Get the last grammar token regardless of cursor position
    pub fn last_token(&self) -> Option<&Token> {
        self.grammar_indices
            .last()
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Check if we're past the last grammar token
    pub fn is_at_end(&self) -> bool {
        self.position >= self.grammar_indices.len()
    }

    /// Get the number of grammar tokens
    pub fn len(&self) -> usize {
        self.grammar_indices.len()
    }

    /// Check if the stream has no grammar tokens
    pub fn is_empty(&self) -> bool {
        self.grammar_indices.is_empty()
    }

    /// Line of the current grammar token, if any
    pub fn current_line(&self) -> Option<u32> {
        self.current().map(|token| token.line)
    }

    // === PARSER INTEGRATION ===

    /// Check if the current token has the given category
    pub fn check_category(&self, expected: TokenCategory) -> bool {
        self.current()
            .map(|token| token.category == expected)
            .unwrap_or(false)
    }

    /// Expect a token of the given category, consuming it on success
    pub fn expect_category(
        &mut self,
        expected: TokenCategory,
    ) -> Result<Token, TokenStreamError> {
        match self.current() {
            Some(token) if token.category == expected => {
                let result = token.clone();
                self.advance();
                Ok(result)
            }
            Some(token) => Err(TokenStreamError::UnexpectedCategory {
                expected: expected.wire_label(),
                found: token.wire_label(),
                line: token.line,
                column: token.column,
            }),
            None => Err(TokenStreamError::UnexpectedEndOfStream {
                expected: expected.wire_label(),
            }),
        }
    }

    // === CHECKPOINTING ===

    /// Save current position as checkpoint for backtracking
    pub fn save_position(&self) -> usize {
        self.position
    }

    /// Restore position from checkpoint
    pub fn restore_position(&mut self, saved_position: usize) {
        self.position = saved_position.min(self.grammar_indices.len());
    }

    // === ITERATION ===

    /// Iterate over grammar tokens in order
    pub fn iter_grammar(&self) -> impl Iterator<Item = &Token> {
        self.grammar_indices.iter().map(|&i| &self.all_tokens[i])
    }

    /// Get all tokens in scan order (including comments and error tokens)
    pub fn all_tokens(&self) -> &[Token] {
        &self.all_tokens
    }

    // === DEBUGGING AND DIAGNOSTICS ===

    /// Get current position for debugging
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining grammar token count
    pub fn remaining_count(&self) -> usize {
        self.grammar_indices.len().saturating_sub(self.position)
    }
}

/// Token stream access errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenStreamError {
    #[error("Expected '{expected}', found '{found}' at {line}:{column}")]
    UnexpectedCategory {
        expected: &'static str,
        found: &'static str,
        line: u32,
        column: u32,
    },

    #[error("Expected '{expected}', but reached end of input")]
    UnexpectedEndOfStream { expected: &'static str },
}

impl TokenStreamError {
    /// Stable code for registry-backed classification
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedCategory { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfStream { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
        }
    }
}

/// Builder producing position-consistent token sequences, mainly for tests
#[derive(Debug)]
pub struct TokenStreamBuilder {
    tokens: Vec<Token>,
    line: u32,
    column: u32,
}

impl TokenStreamBuilder {
    /// Create a new builder starting at line 1, column 1
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line: 1,
            column: 1,
        }
    }

    /// Append a token at the running position, advancing by lexeme length
    /// plus one separating space
    pub fn push(mut self, category: TokenCategory, lexeme: &str) -> Self {
        self.tokens
            .push(Token::new(self.line, self.column, lexeme, category));
        self.column += lexeme.chars().count() as u32 + 1;
        self
    }

    /// Move the running position to the start of the next line
    pub fn newline(mut self) -> Self {
        self.line += 1;
        self.column = 1;
        self
    }

    /// Build a grammar-filtered token stream
    pub fn build(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }

    /// Take the raw token list without building a stream
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Default for TokenStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation functions for stream integrity
pub mod validation {
    use super::*;

    /// Validate that token positions never move backwards
    pub fn validate_position_order(tokens: &[Token]) -> Result<(), String> {
        for window in tokens.windows(2) {
            let current = &window[0];
            let next = &window[1];

            let moves_back = next.line < current.line
                || (next.line == current.line && next.column < current.column);
            if moves_back {
                return Err(format!(
                    "Position order violation: token at {}:{} followed by token at {}:{}",
                    current.line, current.column, next.line, next.column
                ));
            }
        }
        Ok(())
    }

    /// Validate that the grammar view only exposes grammar-relevant tokens
    pub fn validate_grammar_view(stream: &TokenStream) -> Result<(), String> {
        for (grammar_pos, &original_idx) in stream.grammar_indices.iter().enumerate() {
            match stream.all_tokens.get(original_idx) {
                Some(token) if token.category.is_grammar_relevant() => {}
                Some(token) => {
                    return Err(format!(
                        "Non-grammar token '{}' exposed at grammar position {}",
                        token.lexeme, grammar_pos
                    ));
                }
                None => {
                    return Err(format!(
                        "Invalid original index {} in grammar_indices",
                        original_idx
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validate token stream integrity
    pub fn validate_token_stream(stream: &TokenStream) -> Result<(), String> {
        validate_position_order(&stream.all_tokens)?;
        validate_grammar_view(stream)?;
        Ok(())
    }
}
