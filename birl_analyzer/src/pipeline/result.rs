use crate::diagnostics::Diagnostic;
use crate::file_processor::FileMetadata;
use crate::report::AnalysisReport;
use crate::tokens::Token;
use std::time::Duration;

/// Outcome of analyzing one source text: everything the wire payload needs
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// Complete raw token list in scan order
    pub tokens: Vec<Token>,
    /// Lexical and structural diagnostics from the scan, emission order
    pub scan_diagnostics: Vec<Diagnostic>,
    /// Parser diagnostics; `None` when scan findings gated the parser off
    pub syntax_diagnostics: Option<Vec<Diagnostic>>,
    /// Time spent scanning
    pub scan_duration: Duration,
    /// Time spent parsing, when parsing ran
    pub parse_duration: Option<Duration>,
}

impl AnalysisOutcome {
    /// Check if the parser ran (the scan reported nothing)
    pub fn gate_passed(&self) -> bool {
        self.syntax_diagnostics.is_some()
    }

    /// Parser diagnostics as a slice, when parsing ran
    pub fn syntax_slice(&self) -> Option<&[Diagnostic]> {
        self.syntax_diagnostics.as_deref()
    }

    /// Total findings across both passes
    pub fn total_diagnostics(&self) -> usize {
        self.scan_diagnostics.len()
            + self
                .syntax_diagnostics
                .as_ref()
                .map_or(0, |diagnostics| diagnostics.len())
    }

    /// Check if the run finished without findings
    pub fn is_clean(&self) -> bool {
        self.total_diagnostics() == 0
    }

    /// All findings in report order: scan first, then syntax
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.scan_diagnostics
            .iter()
            .chain(self.syntax_diagnostics.iter().flatten())
    }

    /// Assemble the report envelope for this outcome, without timing
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport::assemble(&self.scan_diagnostics, self.syntax_slice(), &self.tokens)
    }
}

/// Complete pipeline result for one file
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub file_metadata: FileMetadata,
    pub outcome: AnalysisOutcome,
    pub report: AnalysisReport,
    pub processing_duration: Duration,
}

impl PipelineResult {
    pub fn new(
        file_metadata: FileMetadata,
        outcome: AnalysisOutcome,
        report: AnalysisReport,
        processing_duration: Duration,
    ) -> Self {
        Self {
            file_metadata,
            outcome,
            report,
            processing_duration,
        }
    }

    /// Check if the run finished without findings
    pub fn is_clean(&self) -> bool {
        self.report.is_clean()
    }

    pub fn log_success(&self, file_path: &str) {
        let token_count = self.outcome.tokens.len();
        crate::log_success!(
            crate::logging::codes::success::PIPELINE_COMPLETE,
            "BIRL analysis pipeline finished",
            "file" => file_path,
            "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0),
            "processing_rate_bytes_per_sec" => format!("{:.0}",
                self.file_metadata.size as f64 / self.processing_duration.as_secs_f64()),
            "processing_rate_tokens_per_sec" => format!("{:.0}",
                token_count as f64 / self.processing_duration.as_secs_f64()),
            "diagnostics" => self.outcome.total_diagnostics(),
            "gate_passed" => self.outcome.gate_passed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::tokens::{TokenCategory, TokenStreamBuilder};

    fn sample_tokens() -> Vec<Token> {
        TokenStreamBuilder::new()
            .push(TokenCategory::ProgramStart, "BORA")
            .push(TokenCategory::ProgramEnd, "BIRL!")
            .into_tokens()
    }

    #[test]
    fn test_clean_outcome() {
        let outcome = AnalysisOutcome {
            tokens: sample_tokens(),
            scan_diagnostics: Vec::new(),
            syntax_diagnostics: Some(Vec::new()),
            scan_duration: Duration::from_micros(80),
            parse_duration: Some(Duration::from_micros(20)),
        };

        assert!(outcome.gate_passed());
        assert!(outcome.is_clean());
        assert_eq!(outcome.total_diagnostics(), 0);
        assert_eq!(outcome.all_diagnostics().count(), 0);

        let report = outcome.report();
        assert!(report.is_clean());
        assert_eq!(report.records.len(), outcome.tokens.len() + 1);
    }

    #[test]
    fn test_gated_outcome() {
        let outcome = AnalysisOutcome {
            tokens: sample_tokens(),
            scan_diagnostics: vec![Diagnostic::lexical(
                codes::lexical::UNRECOGNIZED_CHARACTER,
                1,
                6,
                "Erro léxico na linha 1, coluna 6: Caractere não reconhecido '@'.",
            )],
            syntax_diagnostics: None,
            scan_duration: Duration::from_micros(90),
            parse_duration: None,
        };

        assert!(!outcome.gate_passed());
        assert!(!outcome.is_clean());
        assert_eq!(outcome.total_diagnostics(), 1);
        assert!(outcome.syntax_slice().is_none());

        let report = outcome.report();
        assert!(!report.is_clean());
        assert!(report.records.iter().all(|r| !r.is_success_marker()));
    }

    #[test]
    fn test_all_diagnostics_order() {
        let scan = Diagnostic::keyword_misuse(1, "Erro: Palavra-chave de outra linguagem: 'if'.");
        let syntax = Diagnostic::syntax(
            codes::syntax::UNEXPECTED_TOKEN,
            Some(2),
            "Token inesperado 'GRITA'. Esperava 'DOIS_PONTOS'.",
        );
        let outcome = AnalysisOutcome {
            tokens: Vec::new(),
            scan_diagnostics: vec![scan.clone()],
            syntax_diagnostics: Some(vec![syntax.clone()]),
            scan_duration: Duration::default(),
            parse_duration: Some(Duration::default()),
        };

        let ordered: Vec<&Diagnostic> = outcome.all_diagnostics().collect();
        assert_eq!(ordered, vec![&scan, &syntax]);
    }
}
