//! Recursive-descent parser with panic-mode recovery
//!
//! The parser walks the grammar-filtered token stream and collects ordered
//! Portuguese diagnostics instead of building a tree. Nothing here is fatal:
//! every failed match records one diagnostic and the statement-list loop
//! guarantees the cursor moves forward, so parsing always terminates in at
//! most one step per token.
//!
//! Diagnostic lines follow the legacy resolution order: the token that
//! triggered the failure, otherwise the current token, otherwise the last
//! token of the stream, otherwise unknown.

use crate::diagnostics::{push_unless_repeated, Diagnostic};
use crate::logging::codes::{self, Code};
use crate::tokens::{Token, TokenCategory, TokenStream};
use crate::{log_debug, log_success};

/// Token categories that terminate a statement list without being consumed
fn is_statement_list_stop(category: TokenCategory) -> bool {
    matches!(
        category,
        TokenCategory::ProgramEnd
            | TokenCategory::Elif
            | TokenCategory::Else
            | TokenCategory::CloseBracket
    )
}

/// Token categories that legitimately follow a complete expression.
///
/// Statement-opening keywords end an expression because the next statement
/// begins there. Identifier is included because it usually opens the next
/// statement too (an assignment target), so adjacency with an identifier is
/// treated as a statement boundary rather than a malformed expression.
fn is_expression_boundary(category: TokenCategory) -> bool {
    category.starts_statement()
        || matches!(
            category,
            TokenCategory::Colon
                | TokenCategory::CloseBracket
                | TokenCategory::Comma
                | TokenCategory::ProgramEnd
                | TokenCategory::Elif
                | TokenCategory::Else
                | TokenCategory::Identifier
        )
}

/// Token categories that can open a term inside an expression
fn is_term_start(category: TokenCategory) -> bool {
    category.is_literal() || matches!(category, TokenCategory::OpenBracket)
}

/// Statement-level recursive-descent parser over a filtered token stream
#[derive(Debug)]
pub struct BirlParser {
    tokens: TokenStream,
    diagnostics: Vec<Diagnostic>,
}

impl BirlParser {
    /// Create a parser from raw scan output; comments and error tokens are
    /// filtered out by the stream
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            diagnostics: Vec::new(),
        }
    }

    /// Create a parser over an existing token stream
    pub fn from_stream(tokens: TokenStream) -> Self {
        Self {
            tokens,
            diagnostics: Vec::new(),
        }
    }

    /// Run the full grammar over the stream and return the collected
    /// diagnostics in emission order
    pub fn parse(mut self) -> Vec<Diagnostic> {
        log_debug!("Syntax analysis started",
            "grammar_tokens" => self.tokens.len()
        );

        self.parse_program();

        log_success!(codes::success::PARSE_COMPLETE, "Syntax analysis completed",
            "diagnostics" => self.diagnostics.len(),
            "tokens_consumed" => self.tokens.position()
        );

        self.diagnostics
    }

    /// Diagnostics collected so far
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // === DIAGNOSTIC RECORDING ===

    /// Append a syntax diagnostic unless it repeats the previous entry
    fn report(&mut self, code: Code, line: Option<u32>, message: String) {
        let line_text = match line {
            Some(value) => value.to_string(),
            None => "unknown".to_string(),
        };
        log_debug!("Syntax diagnostic recorded",
            "code" => code.as_str(),
            "line" => line_text,
            "message" => message.as_str()
        );

        push_unless_repeated(&mut self.diagnostics, Diagnostic::syntax(code, line, message));
    }

    /// Report at the current token's line, or unknown at end of input
    fn report_here(&mut self, code: Code, message: impl Into<String>) {
        let line = self.tokens.current_line();
        self.report(code, line, message.into());
    }

    /// Report at the current token's line, falling back to the last token of
    /// the stream, otherwise unknown
    fn report_with_fallback(&mut self, code: Code, message: impl Into<String>) {
        let line = self
            .tokens
            .current_line()
            .or_else(|| self.tokens.last_token().map(|token| token.line));
        self.report(code, line, message.into());
    }

    /// Code describing the current failure position
    fn mismatch_code(&self) -> Code {
        if self.tokens.is_at_end() {
            codes::syntax::UNEXPECTED_END_OF_INPUT
        } else {
            codes::syntax::UNEXPECTED_TOKEN
        }
    }

    /// Lexeme of the most recently consumed token
    fn previous_lexeme(&self) -> String {
        self.tokens
            .previous()
            .map(|token| token.lexeme.clone())
            .unwrap_or_default()
    }

    // === MATCH STEP ===

    /// Consume the current token if it has the expected category, otherwise
    /// record one mismatch diagnostic and leave the cursor in place
    fn match_category(&mut self, expected: TokenCategory) -> bool {
        match self.tokens.current() {
            Some(token) if token.category == expected => {
                self.tokens.advance();
                true
            }
            Some(token) => {
                let line = token.line;
                let message = format!(
                    "Token inesperado '{}'. Esperava '{}'.",
                    token.lexeme,
                    expected.wire_label()
                );
                self.report(codes::syntax::UNEXPECTED_TOKEN, Some(line), message);
                false
            }
            None => {
                let message = format!(
                    "Fim de arquivo inesperado. Esperava '{}'.",
                    expected.wire_label()
                );
                self.report_with_fallback(codes::syntax::UNEXPECTED_END_OF_INPUT, message);
                false
            }
        }
    }

    // === PROGRAM STRUCTURE ===

    fn parse_program(&mut self) {
        if self.match_category(TokenCategory::ProgramStart) {
            self.parse_statement_list();
            if !self.match_category(TokenCategory::ProgramEnd) {
                let code = self.mismatch_code();
                self.report_with_fallback(
                    code,
                    "Comando 'BIRL!' ausente ou mal posicionado no final do programa.",
                );
            }
        } else {
            let code = self.mismatch_code();
            self.report_with_fallback(
                code,
                "Comando 'BORA' ausente ou mal posicionado no início do programa.",
            );
        }

        if let Some(token) = self.tokens.current() {
            let line = token.line;
            let message = format!("Tokens extras após 'BIRL!': '{}'.", token.lexeme);
            self.report(codes::syntax::TRAILING_TOKENS, Some(line), message);
        }
    }

    /// Parse statements until a stop token or end of input.
    ///
    /// Forward progress is enforced here: a statement that failed without
    /// consuming anything costs one forced advance, so the loop touches each
    /// token at most once.
    fn parse_statement_list(&mut self) {
        loop {
            let category = match self.tokens.current() {
                Some(token) => token.category,
                None => break,
            };
            if is_statement_list_stop(category) {
                break;
            }

            let before = self.tokens.position();
            if !self.parse_statement() && self.tokens.position() == before {
                match self.tokens.current() {
                    Some(token) => {
                        let line = token.line;
                        let message = format!(
                            "Erro: Não foi possível processar o comando '{}'. Tentando sincronizar.",
                            token.lexeme
                        );
                        self.report(codes::syntax::UNEXPECTED_TOKEN, Some(line), message);
                        log_debug!("Forced synchronization advance",
                            "position" => self.tokens.position()
                        );
                        self.tokens.advance();
                    }
                    None => break,
                }
            }
        }
    }

    /// Dispatch one statement by the category of the current token
    fn parse_statement(&mut self) -> bool {
        let (category, line, lexeme) = match self.tokens.current() {
            Some(token) => (token.category, token.line, token.lexeme.clone()),
            None => return false,
        };

        match category {
            TokenCategory::VariableDeclaration => self.parse_variable_declaration(),
            TokenCategory::Print => self.parse_print(),
            TokenCategory::If => self.parse_conditional(),
            TokenCategory::While => self.parse_loop(),
            TokenCategory::FunctionDeclaration => self.parse_function_declaration(),
            TokenCategory::FunctionCall => self.parse_function_call(),
            TokenCategory::Identifier => {
                let next_is_assignment = self
                    .tokens
                    .peek()
                    .map(|token| token.category.is_assignment_operator())
                    .unwrap_or(false);
                if next_is_assignment {
                    return self.parse_assignment();
                }

                let message = format!(
                    "Comando inválido. Esperava 'MONSTRO', 'GRITA', 'CONFERE_AI', 'TREINA ATÉ', \
                     'FICA GRANDE', 'CHAMA' ou uma atribuição. Encontrou: '{}'",
                    lexeme
                );
                self.report(codes::syntax::UNEXPECTED_TOKEN, Some(line), message);
                self.tokens.advance();
                false
            }
            _ => {
                let message = format!("Comando não reconhecido ou mal formado: '{}'", lexeme);
                self.report(codes::syntax::UNEXPECTED_TOKEN, Some(line), message);
                self.tokens.advance();
                false
            }
        }
    }

    // === STATEMENTS ===

    /// var-decl := MONSTRO identifier TASAINDODAJAULA expression
    fn parse_variable_declaration(&mut self) -> bool {
        if self.match_category(TokenCategory::VariableDeclaration)
            && self.match_category(TokenCategory::Identifier)
            && self.match_category(TokenCategory::Assignment)
        {
            return self.parse_expression();
        }
        false
    }

    /// assignment := identifier (TASAINDODAJAULA | compound operator) expression
    fn parse_assignment(&mut self) -> bool {
        if self.match_category(TokenCategory::Identifier) {
            let operator_present = self
                .tokens
                .current()
                .map(|token| token.category.is_assignment_operator())
                .unwrap_or(false);
            if operator_present {
                self.tokens.advance();
                return self.parse_expression();
            }
        }
        false
    }

    /// print := GRITA Coloca anilha expression-list Tira anilha
    fn parse_print(&mut self) -> bool {
        if !self.match_category(TokenCategory::Print) {
            return false;
        }

        if !self.match_category(TokenCategory::OpenBracket) {
            let code = self.mismatch_code();
            self.report_here(code, "Delimitador 'Coloca anilha' ausente após 'GRITA'.");
            return false;
        }

        if !self.parse_expression_list() {
            self.report_here(
                codes::syntax::MALFORMED_EXPRESSION,
                "Expressão ou lista de expressões inválida dentro de GRITA Coloca anilha ... Tira anilha.",
            );
            return false;
        }

        if !self.match_category(TokenCategory::CloseBracket) {
            let code = self.mismatch_code();
            self.report_here(code, "Delimitador 'Tira anilha' ausente após lista de impressão.");
            return false;
        }

        true
    }

    /// conditional := CONFERE_AI expression : statement-list elif* else?
    fn parse_conditional(&mut self) -> bool {
        if !self.match_category(TokenCategory::If) {
            return false;
        }
        if !self.parse_expression() {
            return false;
        }
        if !self.match_category(TokenCategory::Colon) {
            let code = self.mismatch_code();
            self.report_here(code, "Dois pontos ':' ausente após condição 'CONFERE_AI'.");
            return false;
        }

        self.parse_statement_list();
        self.parse_elif_clauses();
        self.parse_else_clause();
        true
    }

    /// elif* := (CONFERE_MAIS expression : statement-list)*
    fn parse_elif_clauses(&mut self) -> bool {
        while self.tokens.check_category(TokenCategory::Elif) {
            self.tokens.advance();

            if !self.parse_expression() {
                self.report_here(
                    codes::syntax::MALFORMED_EXPRESSION,
                    "Expressão de condição ausente ou inválida após 'CONFERE_MAIS'.",
                );
                return false;
            }
            if !self.match_category(TokenCategory::Colon) {
                let code = self.mismatch_code();
                self.report_here(code, "Dois pontos ':' ausente após condição 'CONFERE_MAIS'.");
                return false;
            }

            self.parse_statement_list();
        }
        true
    }

    /// else? := (OU_NAO : statement-list)?
    fn parse_else_clause(&mut self) -> bool {
        if self.tokens.check_category(TokenCategory::Else) {
            self.tokens.advance();

            if !self.match_category(TokenCategory::Colon) {
                let code = self.mismatch_code();
                self.report_here(code, "Dois pontos ':' ausente após 'OU_NAO'.");
                return false;
            }

            self.parse_statement_list();
        }
        true
    }

    /// loop := TREINA ATÉ expression : statement-list
    fn parse_loop(&mut self) -> bool {
        if !self.match_category(TokenCategory::While) {
            return false;
        }
        if !self.parse_expression() {
            return false;
        }
        if !self.match_category(TokenCategory::Colon) {
            let code = self.mismatch_code();
            self.report_here(code, "Dois pontos ':' ausente após condição 'TREINA ATÉ'.");
            return false;
        }

        self.parse_statement_list();
        true
    }

    /// func-decl := FICA GRANDE identifier Coloca anilha parameters? Tira anilha : statement-list
    fn parse_function_declaration(&mut self) -> bool {
        if !self.match_category(TokenCategory::FunctionDeclaration) {
            return false;
        }
        if !self.match_category(TokenCategory::Identifier) {
            return false;
        }
        if !self.match_category(TokenCategory::OpenBracket) {
            return false;
        }

        self.parse_parameter_list();

        if !self.match_category(TokenCategory::CloseBracket) {
            return false;
        }
        if !self.match_category(TokenCategory::Colon) {
            let code = self.mismatch_code();
            self.report_here(code, "Dois pontos ':' ausente após declaração da função.");
            return false;
        }

        self.parse_statement_list();
        true
    }

    /// parameters := identifier (, identifier)*
    fn parse_parameter_list(&mut self) -> bool {
        if self.tokens.check_category(TokenCategory::Identifier) {
            self.match_category(TokenCategory::Identifier);

            while self.tokens.check_category(TokenCategory::Comma) {
                self.tokens.advance();
                if !self.match_category(TokenCategory::Identifier) {
                    let code = self.mismatch_code();
                    self.report_here(
                        code,
                        "Identificador ausente após vírgula na lista de parâmetros.",
                    );
                    return false;
                }
            }
        }
        true
    }

    /// func-call := CHAMA identifier Coloca anilha arguments? Tira anilha
    fn parse_function_call(&mut self) -> bool {
        if self.match_category(TokenCategory::FunctionCall)
            && self.match_category(TokenCategory::Identifier)
            && self.match_category(TokenCategory::OpenBracket)
        {
            self.parse_argument_list();
            return self.match_category(TokenCategory::CloseBracket);
        }
        false
    }

    /// arguments := expression (, expression)*
    fn parse_argument_list(&mut self) -> bool {
        let has_arguments = self
            .tokens
            .current()
            .map(|token| token.category != TokenCategory::CloseBracket)
            .unwrap_or(false);
        if !has_arguments {
            return true;
        }

        if !self.parse_expression() {
            self.report_here(
                codes::syntax::MALFORMED_EXPRESSION,
                "Expressão de argumento ausente ou mal formada.",
            );
            return false;
        }

        while self.tokens.check_category(TokenCategory::Comma) {
            self.tokens.advance();
            if !self.parse_expression() {
                self.report_here(
                    codes::syntax::MALFORMED_EXPRESSION,
                    "Expressão de argumento ausente ou mal formada após vírgula.",
                );
                return false;
            }
        }
        true
    }

    // === EXPRESSIONS ===

    /// expression-list := expression (, expression)*
    fn parse_expression_list(&mut self) -> bool {
        if !self.parse_expression() {
            return false;
        }

        while self.tokens.check_category(TokenCategory::Comma) {
            self.tokens.advance();
            if !self.parse_expression() {
                self.report_here(
                    codes::syntax::MALFORMED_EXPRESSION,
                    "Expressão ausente ou mal formada após vírgula na lista de expressões.",
                );
                return false;
            }
        }
        true
    }

    /// expression := term (operator term)*
    ///
    /// Arithmetic, relational and logical operators chain uniformly with no
    /// precedence. After the operator loop the expression is complete only if
    /// the next token is a boundary; an adjacent term means a missing
    /// operator, anything else is a stray token, and both consume one token
    /// to resynchronize.
    fn parse_expression(&mut self) -> bool {
        if !self.parse_term() {
            return false;
        }

        while self
            .tokens
            .current()
            .map(|token| token.category.is_binary_operator())
            .unwrap_or(false)
        {
            self.tokens.advance();
            if !self.parse_term() {
                let consumed = self.previous_lexeme();
                self.report_here(
                    codes::syntax::MALFORMED_EXPRESSION,
                    format!(
                        "Expressão incompleta. Esperava um termo após o operador '{}'.",
                        consumed
                    ),
                );
                return false;
            }
        }

        let (category, line, lexeme) = match self.tokens.current() {
            Some(token) => (token.category, token.line, token.lexeme.clone()),
            None => return true,
        };
        if is_expression_boundary(category) {
            return true;
        }

        let previous = self.previous_lexeme();
        let message = if is_term_start(category) {
            format!(
                "Expressão mal formada: Operador ausente entre '{}' e '{}'.",
                previous, lexeme
            )
        } else {
            format!(
                "Expressão mal formada: Token inesperado '{}' após '{}'.",
                lexeme, previous
            )
        };
        self.report(codes::syntax::MALFORMED_EXPRESSION, Some(line), message);
        self.tokens.advance();
        false
    }

    /// term := literal | identifier | Coloca anilha expression Tira anilha
    fn parse_term(&mut self) -> bool {
        let (category, line, lexeme) = match self.tokens.current() {
            Some(token) => (token.category, token.line, token.lexeme.clone()),
            None => {
                self.report(
                    codes::syntax::UNEXPECTED_END_OF_INPUT,
                    None,
                    "Termo inesperado: fim de arquivo ou token inválido.".to_string(),
                );
                return false;
            }
        };

        if category.is_literal() || category == TokenCategory::Identifier {
            self.tokens.advance();
            return true;
        }

        if category == TokenCategory::OpenBracket {
            self.tokens.advance();
            if !self.parse_expression() {
                self.report(
                    codes::syntax::MALFORMED_EXPRESSION,
                    Some(line),
                    "Expressão incompleta dentro de parênteses.".to_string(),
                );
                return false;
            }
            return self.match_category(TokenCategory::CloseBracket);
        }

        let message = format!("Termo inesperado na expressão: '{}'", lexeme);
        self.report(codes::syntax::UNEXPECTED_TOKEN, Some(line), message);
        self.tokens.advance();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenStreamBuilder;
    use TokenCategory::*;

    fn parse_tokens(tokens: Vec<Token>) -> Vec<Diagnostic> {
        BirlParser::new(tokens).parse()
    }

    fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
        diagnostics.iter().map(|d| d.message.as_str()).collect()
    }

    #[test]
    fn test_minimal_program_is_clean() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        assert!(parse_tokens(tokens).is_empty());
    }

    #[test]
    fn test_full_program_is_clean() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .newline()
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(IntegerLiteral, "1")
            .newline()
            .push(Identifier, "x")
            .push(CompoundAssignment, "+=")
            .push(IntegerLiteral, "2")
            .newline()
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(StringLiteral, "\"oi\"")
            .push(Comma, ",")
            .push(Identifier, "x")
            .push(CloseBracket, "Tira anilha")
            .newline()
            .push(If, "CONFERE_AI")
            .push(Identifier, "x")
            .push(RelationalOp, ">")
            .push(IntegerLiteral, "1")
            .push(Colon, ":")
            .newline()
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(Identifier, "x")
            .push(CloseBracket, "Tira anilha")
            .newline()
            .push(Elif, "CONFERE_MAIS")
            .push(Identifier, "x")
            .push(RelationalOp, "==")
            .push(IntegerLiteral, "1")
            .push(Colon, ":")
            .newline()
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(DecimalLiteral, "2.5")
            .newline()
            .push(Else, "OU_NAO")
            .push(Colon, ":")
            .newline()
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(BooleanTrue, "VERDADEIRO")
            .newline()
            .push(While, "TREINA ATÉ")
            .push(Identifier, "x")
            .push(RelationalOp, "<")
            .push(IntegerLiteral, "10")
            .push(LogicalOp, "E")
            .push(BooleanFalse, "FALSO")
            .push(Colon, ":")
            .newline()
            .push(Identifier, "x")
            .push(CompoundAssignment, "+=")
            .push(IntegerLiteral, "1")
            .newline()
            .push(FunctionDeclaration, "FICA GRANDE")
            .push(Identifier, "soma")
            .push(OpenBracket, "Coloca anilha")
            .push(Identifier, "a")
            .push(Comma, ",")
            .push(Identifier, "b")
            .push(CloseBracket, "Tira anilha")
            .push(Colon, ":")
            .newline()
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(Identifier, "a")
            .push(ArithmeticOp, "+")
            .push(Identifier, "b")
            .push(CloseBracket, "Tira anilha")
            .newline()
            .push(FunctionCall, "CHAMA")
            .push(Identifier, "soma")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(Comma, ",")
            .push(IntegerLiteral, "2")
            .push(CloseBracket, "Tira anilha")
            .newline()
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert!(diagnostics.is_empty(), "unexpected: {:?}", messages(&diagnostics));
    }

    #[test]
    fn test_parenthesized_expression_is_clean() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "y")
            .push(Assignment, "TASAINDODAJAULA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(ArithmeticOp, "+")
            .push(IntegerLiteral, "2")
            .push(CloseBracket, "Tira anilha")
            .push(ArithmeticOp, "*")
            .push(IntegerLiteral, "3")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        assert!(parse_tokens(tokens).is_empty());
    }

    #[test]
    fn test_comments_are_filtered_before_parsing() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(Comment, "# aquecimento")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        assert!(parse_tokens(tokens).is_empty());
    }

    #[test]
    fn test_missing_program_start() {
        let tokens = TokenStreamBuilder::new()
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado 'GRITA'. Esperava 'INICIO_PROGRAMA'.",
                "Comando 'BORA' ausente ou mal posicionado no início do programa.",
                "Tokens extras após 'BIRL!': 'GRITA'.",
            ]
        );
        assert_eq!(diagnostics[0].line, Some(1));
    }

    #[test]
    fn test_empty_stream_reports_unknown_lines() {
        let diagnostics = parse_tokens(Vec::new());

        assert_eq!(
            messages(&diagnostics),
            vec![
                "Fim de arquivo inesperado. Esperava 'INICIO_PROGRAMA'.",
                "Comando 'BORA' ausente ou mal posicionado no início do programa.",
            ]
        );
        assert!(diagnostics.iter().all(|d| d.line.is_none()));
    }

    #[test]
    fn test_missing_program_end_uses_last_token_line() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .newline()
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(IntegerLiteral, "1")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Fim de arquivo inesperado. Esperava 'FIM_PROGRAMA'.",
                "Comando 'BIRL!' ausente ou mal posicionado no final do programa.",
            ]
        );
        assert!(diagnostics.iter().all(|d| d.line == Some(2)));
    }

    #[test]
    fn test_trailing_tokens_after_end() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(ProgramEnd, "BIRL!")
            .push(Print, "GRITA")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(messages(&diagnostics), vec!["Tokens extras após 'BIRL!': 'GRITA'."]);
    }

    #[test]
    fn test_identifier_without_assignment_is_invalid_command() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(Identifier, "x")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Comando inválido. Esperava 'MONSTRO', 'GRITA', 'CONFERE_AI', 'TREINA ATÉ', \
                 'FICA GRANDE', 'CHAMA' ou uma atribuição. Encontrou: 'x'"
            ]
        );
    }

    #[test]
    fn test_unrecognized_command() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(Comma, ",")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec!["Comando não reconhecido ou mal formado: ','"]
        );
    }

    #[test]
    fn test_print_missing_open_bracket() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(Print, "GRITA")
            .push(StringLiteral, "\"oi\"")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics)[..2],
            [
                "Token inesperado '\"oi\"'. Esperava 'PARENTESES_ABRE'.",
                "Delimitador 'Coloca anilha' ausente após 'GRITA'.",
            ]
        );
    }

    #[test]
    fn test_print_missing_close_bracket() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado 'BIRL!'. Esperava 'PARENTESES_FECHA'.",
                "Delimitador 'Tira anilha' ausente após lista de impressão.",
            ]
        );
    }

    #[test]
    fn test_print_list_bad_element_after_comma() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(Comma, ",")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Termo inesperado na expressão: 'Tira anilha'",
                "Expressão ausente ou mal formada após vírgula na lista de expressões.",
                "Expressão ou lista de expressões inválida dentro de GRITA Coloca anilha ... Tira anilha.",
            ]
        );
    }

    #[test]
    fn test_missing_term_after_operator_at_end_of_input() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(IntegerLiteral, "1")
            .push(ArithmeticOp, "+")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Termo inesperado: fim de arquivo ou token inválido.",
                "Expressão incompleta. Esperava um termo após o operador '+'.",
                "Fim de arquivo inesperado. Esperava 'FIM_PROGRAMA'.",
                "Comando 'BIRL!' ausente ou mal posicionado no final do programa.",
            ]
        );
        assert_eq!(diagnostics[0].line, None);
        assert_eq!(diagnostics[1].line, None);
        assert_eq!(diagnostics[2].line, Some(1));
    }

    #[test]
    fn test_missing_operator_between_terms() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(IntegerLiteral, "1")
            .push(IntegerLiteral, "2")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec!["Expressão mal formada: Operador ausente entre '1' e '2'."]
        );
    }

    #[test]
    fn test_adjacent_identifier_ends_expression_cleanly() {
        // An identifier after a complete expression reads as the start of the
        // next statement, not as a missing operator.
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(IntegerLiteral, "1")
            .push(Identifier, "y")
            .push(Assignment, "TASAINDODAJAULA")
            .push(IntegerLiteral, "2")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert!(diagnostics.is_empty(), "unexpected: {:?}", messages(&diagnostics));
    }

    #[test]
    fn test_unexpected_token_after_complete_expression() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(IntegerLiteral, "1")
            .push(Assignment, "TASAINDODAJAULA")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec!["Expressão mal formada: Token inesperado 'TASAINDODAJAULA' após '1'."]
        );
    }

    #[test]
    fn test_declaration_rejects_compound_assignment() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(CompoundAssignment, "+=")
            .push(IntegerLiteral, "1")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado '+='. Esperava 'ATRIBUICAO'.",
                "Comando não reconhecido ou mal formado: '+='",
                "Comando não reconhecido ou mal formado: '1'",
            ]
        );
    }

    #[test]
    fn test_conditional_missing_colon() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(If, "CONFERE_AI")
            .push(Identifier, "x")
            .push(RelationalOp, ">")
            .push(IntegerLiteral, "1")
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(Identifier, "x")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado 'GRITA'. Esperava 'DOIS_PONTOS'.",
                "Dois pontos ':' ausente após condição 'CONFERE_AI'.",
            ]
        );
    }

    #[test]
    fn test_elif_with_bad_condition() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(If, "CONFERE_AI")
            .push(BooleanTrue, "VERDADEIRO")
            .push(Colon, ":")
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(CloseBracket, "Tira anilha")
            .push(Elif, "CONFERE_MAIS")
            .push(Colon, ":")
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "2")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Termo inesperado na expressão: ':'",
                "Expressão de condição ausente ou inválida após 'CONFERE_MAIS'.",
            ]
        );
    }

    #[test]
    fn test_else_missing_colon() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(If, "CONFERE_AI")
            .push(BooleanTrue, "VERDADEIRO")
            .push(Colon, ":")
            .push(Else, "OU_NAO")
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado 'GRITA'. Esperava 'DOIS_PONTOS'.",
                "Dois pontos ':' ausente após 'OU_NAO'.",
            ]
        );
    }

    #[test]
    fn test_loop_missing_colon() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(While, "TREINA ATÉ")
            .push(Identifier, "x")
            .push(RelationalOp, "<")
            .push(IntegerLiteral, "3")
            .push(Identifier, "x")
            .push(CompoundAssignment, "+=")
            .push(IntegerLiteral, "1")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado 'x'. Esperava 'DOIS_PONTOS'.",
                "Dois pontos ':' ausente após condição 'TREINA ATÉ'.",
            ]
        );
    }

    #[test]
    fn test_function_declaration_missing_colon() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(FunctionDeclaration, "FICA GRANDE")
            .push(Identifier, "f")
            .push(OpenBracket, "Coloca anilha")
            .push(CloseBracket, "Tira anilha")
            .push(Print, "GRITA")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado 'GRITA'. Esperava 'DOIS_PONTOS'.",
                "Dois pontos ':' ausente após declaração da função.",
            ]
        );
    }

    #[test]
    fn test_parameter_missing_after_comma() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(FunctionDeclaration, "FICA GRANDE")
            .push(Identifier, "f")
            .push(OpenBracket, "Coloca anilha")
            .push(Identifier, "a")
            .push(Comma, ",")
            .push(CloseBracket, "Tira anilha")
            .push(Colon, ":")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Token inesperado 'Tira anilha'. Esperava 'ID'.",
                "Identificador ausente após vírgula na lista de parâmetros.",
            ]
        );
    }

    #[test]
    fn test_call_argument_bad_element() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(FunctionCall, "CHAMA")
            .push(Identifier, "f")
            .push(OpenBracket, "Coloca anilha")
            .push(Comma, ",")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Termo inesperado na expressão: ','",
                "Expressão de argumento ausente ou mal formada.",
            ]
        );
    }

    #[test]
    fn test_call_argument_bad_after_comma() {
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(FunctionCall, "CHAMA")
            .push(Identifier, "f")
            .push(OpenBracket, "Coloca anilha")
            .push(IntegerLiteral, "1")
            .push(Comma, ",")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert_eq!(
            messages(&diagnostics),
            vec![
                "Termo inesperado na expressão: 'Tira anilha'",
                "Expressão de argumento ausente ou mal formada após vírgula.",
                "Token inesperado 'BIRL!'. Esperava 'PARENTESES_FECHA'.",
            ]
        );
    }

    #[test]
    fn test_consecutive_duplicates_are_collapsed() {
        // Nested open brackets fail inward-out with the same message on the
        // same line; only the first instance survives.
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(VariableDeclaration, "MONSTRO")
            .push(Identifier, "x")
            .push(Assignment, "TASAINDODAJAULA")
            .push(OpenBracket, "Coloca anilha")
            .push(OpenBracket, "Coloca anilha")
            .push(Comma, ",")
            .push(CloseBracket, "Tira anilha")
            .push(CloseBracket, "Tira anilha")
            .push(ProgramEnd, "BIRL!")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        let paren_message = "Expressão incompleta dentro de parênteses.";
        let count = diagnostics
            .iter()
            .filter(|d| d.message == paren_message)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_recovery_always_terminates() {
        // Every junk token costs exactly one diagnostic and one advance until
        // the close bracket stops the statement list.
        let tokens = TokenStreamBuilder::new()
            .push(ProgramStart, "BORA")
            .push(Comma, ",")
            .push(Colon, ":")
            .push(Assignment, "TASAINDODAJAULA")
            .push(ArithmeticOp, "+")
            .push(RelationalOp, ">")
            .push(LogicalOp, "E")
            .push(CompoundAssignment, "-=")
            .push(CloseBracket, "Tira anilha")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        let unrecognized = diagnostics
            .iter()
            .filter(|d| d.message.starts_with("Comando não reconhecido"))
            .count();
        assert_eq!(unrecognized, 7);
        assert!(diagnostics
            .iter()
            .all(|d| d.kind == crate::diagnostics::DiagnosticKind::Syntax));
    }

    #[test]
    fn test_all_diagnostics_use_syntax_wire_label() {
        let tokens = TokenStreamBuilder::new()
            .push(Print, "GRITA")
            .into_tokens();

        let diagnostics = parse_tokens(tokens);
        assert!(!diagnostics.is_empty());
        assert!(diagnostics.iter().all(|d| d.wire_label() == "ERRO SINTATICO"));
        assert!(diagnostics.iter().all(|d| d.column == 0));
    }
}
