//! Source location tracking for the BIRL analyzer
//!
//! Diagnostics and tokens carry 1-based line/column pairs. Columns count
//! characters, not bytes, and a tab advances exactly one column, matching the
//! scan bookkeeping of the tokenizer.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with 1-based line and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create the starting position (line 1, column 1)
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// Advance position by one character
    pub fn advance(self, ch: char) -> Self {
        match ch {
            '\n' => Self {
                line: self.line + 1,
                column: 1,
            },
            _ => Self {
                line: self.line,
                column: self.column + 1,
            },
        }
    }

    /// Advance position by a string
    pub fn advance_str(self, s: &str) -> Self {
        s.chars().fold(self, |pos, ch| pos.advance(ch))
    }

    /// Move to the start of the next line
    pub fn next_line(self) -> Self {
        Self {
            line: self.line + 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let pos = Position::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_advance_regular_char() {
        let pos = Position::start().advance('a');
        assert_eq!(pos, Position::new(1, 2));
    }

    #[test]
    fn test_advance_newline_resets_column() {
        let pos = Position::new(1, 7).advance('\n');
        assert_eq!(pos, Position::new(2, 1));
    }

    #[test]
    fn test_tab_advances_one_column() {
        let pos = Position::start().advance('\t');
        assert_eq!(pos, Position::new(1, 2));
    }

    #[test]
    fn test_advance_str_counts_chars_not_bytes() {
        // "ATÉ" is three characters but four bytes
        let pos = Position::start().advance_str("ATÉ");
        assert_eq!(pos, Position::new(1, 4));
    }

    #[test]
    fn test_display_format() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
    }
}
