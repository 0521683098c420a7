//! Core scanner implementation
//!
//! Single pass over the source, line by line, driven by the ordered pattern
//! table. The pass never fails: every character lands in exactly one token
//! (valid or error) and problems become diagnostics, not early returns.
//! Structural spot-checks (program bracketing, pre-declaration, foreign
//! keywords, delimiter balance) run interleaved with tokenization so their
//! diagnostics appear in source order.

use crate::config::constants::compile_time::lexical::{
    MAX_NUMBER_DIGITS, MAX_STRING_CONTENT_LENGTH,
};
use crate::config::runtime::LexicalPreferences;
use crate::diagnostics::{dedup_keep_first, Diagnostic};
use crate::lexical::patterns::match_at;
use crate::logging::codes;
use crate::tokens::{Token, TokenCategory};
use crate::{log_debug, log_success};
use std::collections::{HashMap, HashSet};

/// Suggested BIRL replacement for a foreign control keyword.
/// Closed set; anything else passes through as a plain identifier.
pub(crate) fn keyword_suggestion(word: &str) -> Option<&'static str> {
    match word {
        "if" => Some("CONFERE_AI"),
        "elif" => Some("CONFERE_MAIS"),
        "else" => Some("OU_NAO"),
        "while" => Some("TREINA ATÉ"),
        "for" => Some("TREINA ATÉ"),
        "print" => Some("GRITA"),
        "def" => Some("FICA GRANDE"),
        "function" => Some("FICA GRANDE"),
        "var" => Some("MONSTRO"),
        "let" => Some("MONSTRO"),
        "true" => Some("VERDADEIRO"),
        "false" => Some("FALSO"),
        "call" => Some("CHAMA"),
        _ => None,
    }
}

/// Scan metrics with runtime preference-controlled detail
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub keyword_tokens: usize,
    pub identifier_tokens: usize,
    pub operator_tokens: usize,
    pub literal_tokens: usize,
    pub comment_tokens: usize,
    pub error_tokens: usize,
    pub lines_scanned: usize,
    pub max_string_length: usize,

    // Populated only when detailed metrics are enabled
    pub category_counts: HashMap<&'static str, usize>,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        let category = token.category;

        if category.is_grammar_relevant() || preferences.include_all_tokens_in_counts {
            self.total_tokens += 1;
        }

        match category {
            TokenCategory::ProgramStart
            | TokenCategory::ProgramEnd
            | TokenCategory::VariableDeclaration
            | TokenCategory::Assignment
            | TokenCategory::Print
            | TokenCategory::If
            | TokenCategory::Elif
            | TokenCategory::Else
            | TokenCategory::While
            | TokenCategory::FunctionDeclaration
            | TokenCategory::FunctionCall
            | TokenCategory::OpenBracket
            | TokenCategory::CloseBracket => self.keyword_tokens += 1,
            TokenCategory::Identifier => self.identifier_tokens += 1,
            TokenCategory::LogicalOp
            | TokenCategory::CompoundAssignment
            | TokenCategory::RelationalOp
            | TokenCategory::ArithmeticOp => self.operator_tokens += 1,
            TokenCategory::Comment => self.comment_tokens += 1,
            _ if category.is_error() => self.error_tokens += 1,
            _ if category.is_literal() => self.literal_tokens += 1,
            _ => {}
        }

        if category == TokenCategory::StringLiteral {
            let content_len = token.lexeme.chars().count().saturating_sub(2);
            self.max_string_length = self.max_string_length.max(content_len);
        }

        if preferences.collect_detailed_metrics {
            *self.category_counts.entry(token.wire_label()).or_insert(0) += 1;
        }
    }
}

/// An identifier waiting to see whether the next token assigns to it
#[derive(Debug, Clone)]
struct PendingAssignment {
    name: String,
    line: u32,
}

/// Opening delimiter remembered for the balance check
#[derive(Debug, Clone)]
struct OpenDelimiter {
    lexeme: String,
    line: u32,
    column: u32,
    category: TokenCategory,
}

impl OpenDelimiter {
    fn pairs_with(&self, close_category: TokenCategory) -> bool {
        match (self.category, close_category) {
            (TokenCategory::OpenBracket, TokenCategory::CloseBracket) => true,
            (TokenCategory::StrayBracket, TokenCategory::StrayBracket) => true,
            _ => false,
        }
    }
}

/// Mutable state of one scan invocation; fresh per call
#[derive(Debug, Default)]
struct ScanPass {
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    declared_names: HashSet<String>,
    pending_assignment: Option<PendingAssignment>,
    delimiters: Vec<OpenDelimiter>,
    meaningful_count: usize,
    prev_tracked: Option<TokenCategory>,
    start_accepted: bool,
}

impl ScanPass {
    /// Category used by the pre-declaration tracking: meaningful tokens count
    /// as themselves, oversized literals count under their original category,
    /// other error tokens and comments do not count at all.
    fn tracked_category(token: &Token) -> Option<TokenCategory> {
        if token.is_meaningful() {
            Some(token.category)
        } else {
            token.original_category
        }
    }

    fn handle_match(&mut self, category: TokenCategory, lexeme: &str, line: u32, column: u32) {
        let token = self.build_token(category, lexeme, line, column);

        self.push_lexical_diagnostics(&token);
        self.track_balance(&token);
        self.check_misplaced_start(&token);
        self.track_declarations(&token);

        if token.is_meaningful() {
            self.meaningful_count += 1;
        }
        self.tokens.push(token);
    }

    /// Apply size validation, reclassifying oversized literals while keeping
    /// the original category visible for downstream checks
    fn build_token(
        &self,
        category: TokenCategory,
        lexeme: &str,
        line: u32,
        column: u32,
    ) -> Token {
        match category {
            TokenCategory::IntegerLiteral | TokenCategory::DecimalLiteral => {
                let digit_count = lexeme.chars().filter(char::is_ascii_digit).count();
                if digit_count > MAX_NUMBER_DIGITS {
                    return Token::reclassified(
                        line,
                        column,
                        lexeme,
                        TokenCategory::OversizedNumber,
                        category,
                    );
                }
            }
            TokenCategory::StringLiteral => {
                let content_len = lexeme.chars().count().saturating_sub(2);
                if content_len > MAX_STRING_CONTENT_LENGTH {
                    return Token::reclassified(
                        line,
                        column,
                        lexeme,
                        TokenCategory::OversizedString,
                        category,
                    );
                }
            }
            _ => {}
        }
        Token::new(line, column, lexeme, category)
    }

    fn push_lexical_diagnostics(&mut self, token: &Token) {
        let line = token.line;
        let column = token.column;
        let lexeme = &token.lexeme;

        let diagnostic = match token.category {
            TokenCategory::UnrecognizedCharacter => Some(Diagnostic::lexical(
                codes::lexical::UNRECOGNIZED_CHARACTER,
                line,
                column,
                format!(
                    "Erro léxico na linha {}, coluna {}: Caractere não reconhecido '{}'.",
                    line, column, lexeme
                ),
            )),
            TokenCategory::UnterminatedString => Some(Diagnostic::lexical(
                codes::lexical::UNTERMINATED_STRING,
                line,
                column,
                format!(
                    "Erro léxico na linha {}, coluna {}: String não fechada: {}.",
                    line, column, lexeme
                ),
            )),
            TokenCategory::StrayBracket => Some(Diagnostic::lexical(
                codes::lexical::STRAY_BRACKET_CHARACTER,
                line,
                column,
                format!(
                    "Erro léxico na linha {}, coluna {}: Parêntese '{}' não é permitido. \
                     Use 'Coloca anilha' e 'Tira anilha'.",
                    line, column, lexeme
                ),
            )),
            TokenCategory::OversizedNumber => Some(Diagnostic::lexical(
                codes::lexical::OVERSIZED_NUMBER,
                line,
                column,
                format!(
                    "Erro léxico na linha {}, coluna {}: Número '{}' excede o limite de {} dígitos.",
                    line, column, lexeme, MAX_NUMBER_DIGITS
                ),
            )),
            TokenCategory::OversizedString => Some(Diagnostic::lexical(
                codes::lexical::OVERSIZED_STRING,
                line,
                column,
                format!(
                    "Erro léxico na linha {}, coluna {}: String excede o limite de {} caracteres: {}.",
                    line, column, MAX_STRING_CONTENT_LENGTH, lexeme
                ),
            )),
            _ => None,
        };

        if let Some(diagnostic) = diagnostic {
            self.diagnostics.push(diagnostic);
        }
    }

    /// Delimiter pairing, maintained incrementally. Keyword bracket phrases
    /// and stray parenthesis characters share one stack so mixed pairs are
    /// reported as mismatches citing the opening site.
    fn track_balance(&mut self, token: &Token) {
        let opens = token.category == TokenCategory::OpenBracket
            || (token.category == TokenCategory::StrayBracket && token.lexeme == "(");
        let closes = token.category == TokenCategory::CloseBracket
            || (token.category == TokenCategory::StrayBracket && token.lexeme == ")");

        if opens {
            self.delimiters.push(OpenDelimiter {
                lexeme: token.lexeme.clone(),
                line: token.line,
                column: token.column,
                category: token.category,
            });
        } else if closes {
            match self.delimiters.pop() {
                None => self.diagnostics.push(Diagnostic::balance(
                    codes::balance::UNMATCHED_CLOSE,
                    Some(token.line),
                    format!(
                        "Erro na linha {}: Delimitador de fechamento '{}' sem abertura correspondente.",
                        token.line, token.lexeme
                    ),
                )),
                Some(open) if !open.pairs_with(token.category) => {
                    self.diagnostics.push(Diagnostic::balance(
                        codes::balance::MISMATCHED_PAIR,
                        Some(token.line),
                        format!(
                            "Erro na linha {}: Delimitador '{}' não corresponde a '{}' aberto na linha {}, coluna {}.",
                            token.line, token.lexeme, open.lexeme, open.line, open.column
                        ),
                    ));
                }
                Some(_) => {}
            }
        }
    }

    /// A start keyword in first meaningful position is accepted once; until
    /// then every later occurrence is misplaced. After acceptance, extra
    /// start keywords reach the parser and fail statement dispatch there.
    fn check_misplaced_start(&mut self, token: &Token) {
        if token.category != TokenCategory::ProgramStart || self.start_accepted {
            return;
        }
        if self.meaningful_count == 0 {
            self.start_accepted = true;
            return;
        }
        self.diagnostics.push(Diagnostic::structural(
            codes::structural::MISPLACED_PROGRAM_START,
            Some(token.line),
            format!(
                "Erro na linha {}: 'BORA' deve ser o primeiro comando do programa. Lexema: '{}'",
                token.line, token.lexeme
            ),
        ));
    }

    fn track_declarations(&mut self, token: &Token) {
        let tracked = match Self::tracked_category(token) {
            Some(tracked) => tracked,
            None => return,
        };

        // An open assignment watch resolves against the next tracked token
        // on the same line, then lapses either way
        if let Some(pending) = self.pending_assignment.take() {
            if token.line == pending.line && tracked.is_assignment_operator() {
                self.diagnostics.push(Diagnostic::initialization(
                    pending.line,
                    format!(
                        "Erro na linha {}: Variável '{}' usada em atribuição sem declaração prévia com 'MONSTRO'.",
                        pending.line, pending.name
                    ),
                ));
                self.declared_names.insert(pending.name);
            }
        }

        if tracked == TokenCategory::Identifier {
            if let Some(suggestion) = keyword_suggestion(&token.lexeme) {
                self.diagnostics.push(Diagnostic::keyword_misuse(
                    token.line,
                    format!(
                        "Erro na linha {}: Palavra-chave '{}' não pertence à linguagem BIRL. Use '{}'.",
                        token.line, token.lexeme, suggestion
                    ),
                ));
            }

            if self.prev_tracked == Some(TokenCategory::VariableDeclaration) {
                self.declared_names.insert(token.lexeme.clone());
            } else if !self.declared_names.contains(&token.lexeme) {
                self.pending_assignment = Some(PendingAssignment {
                    name: token.lexeme.clone(),
                    line: token.line,
                });
            }
        }

        self.prev_tracked = Some(tracked);
    }

    /// End-of-scan checks: program bracketing and unclosed delimiters
    fn finish(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let first_meaningful = self.tokens.iter().find(|t| t.is_meaningful());
        let last_meaningful = self.tokens.iter().rev().find(|t| t.is_meaningful());

        if first_meaningful.map(|t| t.category) != Some(TokenCategory::ProgramStart) {
            self.diagnostics.push(Diagnostic::structural(
                codes::structural::MISSING_PROGRAM_START,
                first_meaningful.map(|t| t.line),
                "Erro de Estrutura: O programa deve começar com 'BORA'.",
            ));
        }

        let last_program_end = self
            .tokens
            .iter()
            .rev()
            .find(|t| t.category == TokenCategory::ProgramEnd);
        match last_program_end {
            None => self.diagnostics.push(Diagnostic::structural(
                codes::structural::MISSING_PROGRAM_END,
                None,
                "Erro de Estrutura: O programa deve terminar com 'BIRL!'.",
            )),
            Some(end_token) => {
                if last_meaningful.map(|t| t.category) != Some(TokenCategory::ProgramEnd) {
                    self.diagnostics.push(Diagnostic::structural(
                        codes::structural::PROGRAM_END_NOT_LAST,
                        Some(end_token.line),
                        "Erro de Estrutura: 'BIRL!' deve ser o último comando significativo do programa.",
                    ));
                }
            }
        }

        // First-opened first, so the report reads in source order
        let unclosed = std::mem::take(&mut self.delimiters);
        for open in unclosed {
            self.diagnostics.push(Diagnostic::balance(
                codes::balance::UNCLOSED_DELIMITER,
                Some(open.line),
                format!(
                    "Erro de Estrutura: Delimitador '{}' aberto na linha {}, coluna {} nunca foi fechado.",
                    open.lexeme, open.line, open.column
                ),
            ));
        }

        let diagnostics = dedup_keep_first(self.diagnostics);
        (self.tokens, diagnostics)
    }
}

/// Pattern-table scanner with structural spot-checks
pub struct LexicalAnalyzer {
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Scan source text into the full token list and ordered diagnostics.
    /// Completes for every input; problems surface as diagnostics.
    pub fn scan_source(&mut self, source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        self.metrics = LexicalMetrics::default();

        log_debug!("Starting lexical analysis",
            "char_count" => source.chars().count(),
            "line_count" => source.lines().count()
        );

        let mut pass = ScanPass::default();

        for (line_index, line_text) in source.lines().enumerate() {
            let line = (line_index + 1) as u32;
            self.scan_line(&mut pass, line_text, line);
            self.metrics.lines_scanned += 1;

            if self.preferences.log_scan_statistics {
                log_debug!("Line scanned",
                    "line" => line,
                    "tokens_so_far" => pass.tokens.len(),
                    "diagnostics_so_far" => pass.diagnostics.len()
                );
            }
        }

        let (tokens, diagnostics) = pass.finish();

        for token in &tokens {
            self.metrics.record_token(token, &self.preferences);
        }

        log_success!(codes::success::TOKENIZATION_COMPLETE,
            "Lexical analysis completed",
            "token_count" => tokens.len(),
            "diagnostic_count" => diagnostics.len(),
            "keywords" => self.metrics.keyword_tokens,
            "identifiers" => self.metrics.identifier_tokens,
            "operators" => self.metrics.operator_tokens,
            "error_tokens" => self.metrics.error_tokens,
            "lines" => self.metrics.lines_scanned
        );

        (tokens, diagnostics)
    }

    /// Columns count characters, not bytes; byte offsets drive the regex
    /// matching, character counts drive the bookkeeping.
    fn scan_line(&self, pass: &mut ScanPass, line_text: &str, line: u32) {
        let mut byte_pos = 0;
        let mut column: u32 = 1;

        while byte_pos < line_text.len() {
            match match_at(line_text, byte_pos) {
                Some((rule, lexeme)) => {
                    if let Some(category) = rule.category {
                        pass.handle_match(category, lexeme, line, column);
                    }
                    byte_pos += lexeme.len();
                    column += lexeme.chars().count() as u32;
                }
                None => {
                    // Unreachable with the catch-all rule in the table, but
                    // the coverage invariant must survive a table change
                    if let Some(ch) = line_text[byte_pos..].chars().next() {
                        pass.handle_match(
                            TokenCategory::UnrecognizedCharacter,
                            &ch.to_string(),
                            line,
                            column,
                        );
                        byte_pos += ch.len_utf8();
                        column += 1;
                    } else {
                        break;
                    }
                }
            }
        }
    }

    /// Metrics from the most recent scan
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
