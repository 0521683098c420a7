/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating complete pipeline configuration");

    crate::file_processor::init_file_processor_logging()?;
    crate::lexical::init_lexical_analysis_logging()?;
    crate::syntax::init_syntax_logging()?;
    crate::report::init_report_logging()?;

    crate::lexical::validate_tokenization()?;
    crate::syntax::validate_parsing()?;
    crate::report::validate_report_generation()?;

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Complete pipeline validation succeeded",
        "stages_validated" => 4,
        "file_processing" => true,
        "lexical_analysis" => true,
        "syntax_analysis" => true,
        "report_assembly" => true
    );

    Ok(())
}
