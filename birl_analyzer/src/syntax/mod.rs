//! Syntax analysis module - grammar checking over filtered token streams
//!
//! The entry points here run the recursive-descent parser and hand back the
//! ordered diagnostic list. The parser never fails as a function: malformed
//! input produces diagnostics, not errors, and recovery keeps going to the
//! end of the stream.
//!
//! Callers are expected to honor the pipeline gate: syntax analysis is only
//! meaningful when the scan produced zero diagnostics. The functions here do
//! not re-check that contract.

mod parser;

pub use parser::BirlParser;

use crate::diagnostics::Diagnostic;
use crate::logging::codes;
use crate::tokens::{Token, TokenStream};
use crate::{log_debug, log_info};

/// Module version
pub const VERSION: &str = "1.0.0";

/// Parse a scanned token list and return syntax diagnostics in emission
/// order. Comments and error tokens are filtered out before parsing.
pub fn parse(tokens: &[Token]) -> Vec<Diagnostic> {
    BirlParser::new(tokens.to_vec()).parse()
}

/// Parse an already-built token stream
pub fn parse_stream(tokens: TokenStream) -> Vec<Diagnostic> {
    BirlParser::from_stream(tokens).parse()
}

/// Initialize syntax module logging validation
pub fn init_syntax_logging() -> Result<(), String> {
    let required_codes = [
        codes::syntax::UNEXPECTED_TOKEN,
        codes::syntax::UNEXPECTED_END_OF_INPUT,
        codes::syntax::MALFORMED_EXPRESSION,
        codes::syntax::TRAILING_TOKENS,
    ];

    for code in &required_codes {
        if codes::get_description(code.as_str()) == "Unknown error" {
            return Err(format!(
                "Syntax error code {} has no description",
                code.as_str()
            ));
        }
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Syntax error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    let success_codes = [codes::success::PARSE_COMPLETE, codes::success::SYNTAX_CLEAN];
    for code in &success_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            log_debug!("Success code outside error registry",
                "code" => code.as_str()
            );
        }
    }

    log_info!("Syntax module logging validation completed");
    Ok(())
}

/// Smoke-check the parser against a minimal valid program
pub fn validate_parsing() -> Result<(), String> {
    use crate::tokens::{TokenCategory, TokenStreamBuilder};

    let tokens = TokenStreamBuilder::new()
        .push(TokenCategory::ProgramStart, "BORA")
        .push(TokenCategory::ProgramEnd, "BIRL!")
        .into_tokens();

    let diagnostics = parse(&tokens);
    if !diagnostics.is_empty() {
        return Err(format!(
            "Minimal program produced {} syntax diagnostics",
            diagnostics.len()
        ));
    }
    Ok(())
}
