//! Ordered pattern table driving the scanner
//!
//! Order is a priority contract: several keywords are textual substrings of
//! longer phrases, and the generic identifier and number rules would swallow
//! keywords if tried first. The scanner tries rules top to bottom at each
//! position and takes the first match.
//!
//! Word-boundary rules are matched against the full line at a byte offset
//! (`Regex::find_at` plus a start-position check) so `\b` sees the real left
//! context. Matching a sliced suffix instead would let `BORA` match inside
//! `5BORA`.

use crate::config::constants::compile_time::lexical::PATTERN_RULE_COUNT;
use crate::tokens::TokenCategory;
use regex::Regex;
use std::sync::OnceLock;

/// One entry of the ordered pattern table
#[derive(Debug)]
pub struct PatternRule {
    /// Stable rule name for logging and table tests
    pub name: &'static str,
    /// Recognizer tried at the scan position
    pub regex: Regex,
    /// Category assigned on match; None for discarded whitespace
    pub category: Option<TokenCategory>,
}

impl PatternRule {
    fn emit(name: &'static str, pattern: &str, category: TokenCategory) -> Self {
        Self {
            name,
            regex: compile_rule(name, pattern),
            category: Some(category),
        }
    }

    fn skip(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: compile_rule(name, pattern),
            category: None,
        }
    }
}

fn compile_rule(name: &'static str, pattern: &str) -> Regex {
    // Patterns are fixed literals; a failure here is a table defect
    Regex::new(pattern).unwrap_or_else(|e| panic!("pattern rule '{}' is invalid: {}", name, e))
}

static PATTERN_TABLE: OnceLock<Vec<PatternRule>> = OnceLock::new();

/// The ordered pattern table, built once and shared for the process lifetime
pub fn pattern_table() -> &'static [PatternRule] {
    PATTERN_TABLE.get_or_init(build_pattern_table).as_slice()
}

fn build_pattern_table() -> Vec<PatternRule> {
    use TokenCategory as C;

    vec![
        // Multi-word fixed phrases before anything that could split them,
        // whole-word anchored so a glued prefix or suffix breaks the phrase
        PatternRule::emit("open-bracket-phrase", r"\bColoca anilha\b", C::OpenBracket),
        PatternRule::emit("function-declaration-phrase", r"\bFICA GRANDE\b", C::FunctionDeclaration),
        PatternRule::emit("close-bracket-phrase", r"\bTira anilha\b", C::CloseBracket),
        PatternRule::emit("loop-phrase", r"\bTREINA ATÉ\b", C::While),
        PatternRule::emit("program-end", r"BIRL!", C::ProgramEnd),
        // Single-word keywords, whole-word matched
        PatternRule::emit("program-start", r"\bBORA\b", C::ProgramStart),
        PatternRule::emit("variable-declaration", r"\bMONSTRO\b", C::VariableDeclaration),
        PatternRule::emit("assignment", r"\bTASAINDODAJAULA\b", C::Assignment),
        PatternRule::emit("print", r"\bGRITA\b", C::Print),
        PatternRule::emit("if", r"\bCONFERE_AI\b", C::If),
        PatternRule::emit("elif", r"\bCONFERE_MAIS\b", C::Elif),
        PatternRule::emit("else", r"\bOU_NAO\b", C::Else),
        PatternRule::emit("function-call", r"\bCHAMA\b", C::FunctionCall),
        // Boolean literals
        PatternRule::emit("boolean-true", r"\bVERDADEIRO\b", C::BooleanTrue),
        PatternRule::emit("boolean-false", r"\bFALSO\b", C::BooleanFalse),
        // Logical operators
        PatternRule::emit("logical-operator", r"\bE\b|\bOU\b|\bNÃO\b", C::LogicalOp),
        // Compound assignment before single-character arithmetic
        PatternRule::emit("compound-assignment", r"\+=|-=|\*=|/=", C::CompoundAssignment),
        // Two-character relational forms before one-character forms
        PatternRule::emit("relational-operator", r">=|<=|==|!=|>|<", C::RelationalOp),
        PatternRule::emit("arithmetic-operator", r"\+|-|\*|/", C::ArithmeticOp),
        // Punctuation
        PatternRule::emit("comma", r",", C::Comma),
        PatternRule::emit("colon", r":", C::Colon),
        // String literal, single line
        PatternRule::emit("string-literal", r#""[^"\n]*""#, C::StringLiteral),
        // Decimal before integer so the dot is not orphaned
        PatternRule::emit("decimal-literal", r"\b\d+\.\d+\b", C::DecimalLiteral),
        PatternRule::emit("integer-literal", r"\b\d+\b", C::IntegerLiteral),
        // Comment before identifier
        PatternRule::emit("comment", r"#[^\n]*", C::Comment),
        PatternRule::emit("identifier", r"\b[a-zA-Z_][a-zA-Z0-9_]*\b", C::Identifier),
        // Error recognizers after every valid form has been tried
        PatternRule::emit("unterminated-string", r#""[^"\n]*"#, C::UnterminatedString),
        PatternRule::emit("stray-bracket", r"[()]", C::StrayBracket),
        // Whitespace advances bookkeeping without emitting a token
        PatternRule::skip("whitespace", r"[ \t]+"),
        // Any remaining character becomes an unrecognized-character token
        PatternRule::emit("catch-all", r".", C::UnrecognizedCharacter),
    ]
}

/// Try all rules at a byte offset in priority order, returning the first
/// rule whose match starts exactly there.
pub fn match_at<'a>(line: &'a str, byte_pos: usize) -> Option<(&'static PatternRule, &'a str)> {
    for rule in pattern_table() {
        if let Some(m) = rule.regex.find_at(line, byte_pos) {
            if m.start() == byte_pos {
                return Some((rule, m.as_str()));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_at(line: &str, pos: usize) -> Option<TokenCategory> {
        match_at(line, pos).and_then(|(rule, _)| rule.category)
    }

    fn lexeme_at(line: &str, pos: usize) -> &str {
        match_at(line, pos).map(|(_, text)| text).unwrap_or("")
    }

    #[test]
    fn test_table_size() {
        assert_eq!(pattern_table().len(), PATTERN_RULE_COUNT);
    }

    #[test]
    fn test_phrases_win_over_identifier() {
        assert_eq!(category_at("FICA GRANDE soma", 0), Some(TokenCategory::FunctionDeclaration));
        assert_eq!(lexeme_at("FICA GRANDE soma", 0), "FICA GRANDE");
        assert_eq!(category_at("Coloca anilha", 0), Some(TokenCategory::OpenBracket));
        assert_eq!(category_at("Tira anilha", 0), Some(TokenCategory::CloseBracket));
        assert_eq!(category_at("TREINA ATÉ x", 0), Some(TokenCategory::While));
        assert_eq!(category_at("BIRL!", 0), Some(TokenCategory::ProgramEnd));
    }

    #[test]
    fn test_keywords_are_whole_word() {
        assert_eq!(category_at("BORA", 0), Some(TokenCategory::ProgramStart));
        assert_eq!(category_at("BORACA", 0), Some(TokenCategory::Identifier));
        assert_eq!(lexeme_at("BORACA", 0), "BORACA");
        assert_eq!(category_at("TASAINDODAJAULA", 0), Some(TokenCategory::Assignment));
        assert_eq!(category_at("GRITA", 0), Some(TokenCategory::Print));
        assert_eq!(category_at("CONFERE_AI:", 0), Some(TokenCategory::If));
        assert_eq!(category_at("CONFERE_MAIS:", 0), Some(TokenCategory::Elif));
        assert_eq!(category_at("OU_NAO:", 0), Some(TokenCategory::Else));
        assert_eq!(category_at("CHAMA soma", 0), Some(TokenCategory::FunctionCall));
        assert_eq!(category_at("MONSTRO x", 0), Some(TokenCategory::VariableDeclaration));
    }

    #[test]
    fn test_word_boundary_needs_left_context() {
        // Mid-word, no boundary before 'B': neither keyword nor identifier
        // may match, the catch-all consumes one character
        let (rule, text) = match_at("5BORA", 1).unwrap();
        assert_eq!(rule.name, "catch-all");
        assert_eq!(text, "B");

        // And the leading digit is not a whole-word integer either
        let (rule, text) = match_at("5BORA", 0).unwrap();
        assert_eq!(rule.name, "catch-all");
        assert_eq!(text, "5");
    }

    #[test]
    fn test_phrases_are_whole_word() {
        // A trailing word character breaks the phrase, leaving identifiers
        assert_eq!(category_at("Coloca anilhas", 0), Some(TokenCategory::Identifier));
        assert_eq!(lexeme_at("Coloca anilhas", 0), "Coloca");
        assert_eq!(category_at("FICA GRANDEZA", 0), Some(TokenCategory::Identifier));
        assert_eq!(lexeme_at("FICA GRANDEZA", 0), "FICA");
        assert_eq!(lexeme_at("TREINA ATÉS x", 0), "TREINA");

        // Mid-word, no boundary before the phrase start: never a delimiter
        let (rule, text) = match_at("5Tira anilha", 1).unwrap();
        assert_eq!(rule.name, "catch-all");
        assert_eq!(text, "T");
    }

    #[test]
    fn test_compound_assignment_before_arithmetic() {
        assert_eq!(category_at("+= 1", 0), Some(TokenCategory::CompoundAssignment));
        assert_eq!(lexeme_at("+= 1", 0), "+=");
        assert_eq!(category_at("+ 1", 0), Some(TokenCategory::ArithmeticOp));
        assert_eq!(lexeme_at("-= 1", 0), "-=");
        assert_eq!(lexeme_at("*= 1", 0), "*=");
        assert_eq!(lexeme_at("/= 1", 0), "/=");
    }

    #[test]
    fn test_two_char_relational_before_one_char() {
        assert_eq!(lexeme_at(">= 2", 0), ">=");
        assert_eq!(lexeme_at("<= 2", 0), "<=");
        assert_eq!(lexeme_at("== 2", 0), "==");
        assert_eq!(lexeme_at("!= 2", 0), "!=");
        assert_eq!(lexeme_at("> 2", 0), ">");
        assert_eq!(category_at("< 2", 0), Some(TokenCategory::RelationalOp));
    }

    #[test]
    fn test_decimal_before_integer() {
        assert_eq!(category_at("3.14", 0), Some(TokenCategory::DecimalLiteral));
        assert_eq!(lexeme_at("3.14", 0), "3.14");
        assert_eq!(category_at("42", 0), Some(TokenCategory::IntegerLiteral));
    }

    #[test]
    fn test_comment_before_identifier() {
        assert_eq!(category_at("# hora do show", 0), Some(TokenCategory::Comment));
        assert_eq!(lexeme_at("# hora do show", 0), "# hora do show");
    }

    #[test]
    fn test_string_recognizers() {
        assert_eq!(category_at("\"oi\"", 0), Some(TokenCategory::StringLiteral));
        assert_eq!(lexeme_at("\"oi\"", 0), "\"oi\"");
        assert_eq!(category_at("\"aberta", 0), Some(TokenCategory::UnterminatedString));
        assert_eq!(lexeme_at("\"aberta", 0), "\"aberta");
    }

    #[test]
    fn test_stray_bracket_and_catch_all() {
        assert_eq!(category_at("(x)", 0), Some(TokenCategory::StrayBracket));
        assert_eq!(category_at(")", 0), Some(TokenCategory::StrayBracket));
        assert_eq!(category_at("@", 0), Some(TokenCategory::UnrecognizedCharacter));
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(category_at("E depois", 0), Some(TokenCategory::LogicalOp));
        assert_eq!(category_at("OU nada", 0), Some(TokenCategory::LogicalOp));
        assert_eq!(category_at("NÃO", 0), Some(TokenCategory::LogicalOp));
        // 'E' inside a word stays identifier territory
        assert_eq!(category_at("Ele", 0), Some(TokenCategory::Identifier));
    }

    #[test]
    fn test_booleans() {
        assert_eq!(category_at("VERDADEIRO", 0), Some(TokenCategory::BooleanTrue));
        assert_eq!(category_at("FALSO", 0), Some(TokenCategory::BooleanFalse));
    }

    #[test]
    fn test_whitespace_is_skip() {
        let (rule, text) = match_at("   x", 0).unwrap();
        assert_eq!(rule.name, "whitespace");
        assert!(rule.category.is_none());
        assert_eq!(text, "   ");
    }

    #[test]
    fn test_match_never_starts_past_position() {
        // A later match in the line must not be reported for this position
        let (rule, text) = match_at("x BORA", 0).unwrap();
        assert_eq!(rule.name, "identifier");
        assert_eq!(text, "x");
    }
}
