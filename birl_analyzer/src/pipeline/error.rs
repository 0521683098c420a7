use crate::file_processor::FileProcessorError;
use crate::logging::codes::{self, Code};
use crate::report::ReportError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("File processing failed: {0}")]
    FileProcessing(#[from] FileProcessorError),

    #[error("Report assembly failed: {0}")]
    Report(#[from] ReportError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Stage-level classification code. The wrapped errors log their own
    /// more specific codes at the point of failure.
    pub fn error_code(&self) -> Code {
        match self {
            Self::FileProcessing(_) => codes::pipeline::FILE_STAGE_FAILED,
            Self::Report(_) => codes::pipeline::REPORT_STAGE_FAILED,
            Self::Pipeline { .. } => codes::pipeline::VALIDATION_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_by_stage() {
        let file_error: PipelineError = FileProcessorError::EmptyFile.into();
        assert_eq!(file_error.error_code().as_str(), "P001");

        let pipeline_error = PipelineError::pipeline_error("stage out of order");
        assert_eq!(pipeline_error.error_code().as_str(), "P002");
    }

    #[test]
    fn test_display_includes_stage() {
        let error: PipelineError = FileProcessorError::EmptyFile.into();
        assert!(error.to_string().starts_with("File processing failed:"));

        let generic = PipelineError::pipeline_error("bad wiring");
        assert_eq!(generic.to_string(), "Pipeline error: bad wiring");
    }
}
