/// Information about pipeline capabilities
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    pub pipeline_stages: usize,
    pub supports_file_processing: bool,
    pub supports_lexical_analysis: bool,
    pub supports_syntax_analysis: bool,
    pub supports_report_assembly: bool,
    pub max_file_size: u64,
    pub supported_extensions: Vec<String>,
    pub global_logging_enabled: bool,
    pub diagnostics_language: String,
}

impl PipelineInfo {
    pub fn report(&self) -> String {
        format!(
            "BIRL Analysis Pipeline:\n\
             - Pipeline Stages: {}\n\
             - File Processing: {}\n\
             - Lexical Analysis: {}\n\
             - Syntax Analysis: {}\n\
             - Report Assembly: {}\n\
             - Max File Size: {} KB\n\
             - Supported Extensions: {}\n\
             - Global Logging: {}\n\
             - Diagnostics Language: {}",
            self.pipeline_stages,
            self.supports_file_processing,
            self.supports_lexical_analysis,
            self.supports_syntax_analysis,
            self.supports_report_assembly,
            self.max_file_size / 1024,
            self.supported_extensions.join(", "),
            self.global_logging_enabled,
            self.diagnostics_language
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{}-stage BIRL analyzer supporting {} files with {} diagnostics",
            self.pipeline_stages,
            self.supported_extensions.join(", "),
            self.diagnostics_language
        )
    }
}

/// Get pipeline capabilities information
pub fn get_pipeline_info() -> PipelineInfo {
    PipelineInfo {
        pipeline_stages: 4,
        supports_file_processing: true,
        supports_lexical_analysis: true,
        supports_syntax_analysis: true,
        supports_report_assembly: true,
        max_file_size: crate::file_processor::get_max_file_size(),
        supported_extensions: vec!["birl".to_string()],
        global_logging_enabled: true,
        diagnostics_language: "pt-BR".to_string(),
    }
}
