//! File processor module with compile-time limits and global logging integration

mod processor;

use crate::config::constants::compile_time::file_processing::{
    LARGE_FILE_THRESHOLD, MAX_FILE_SIZE, MAX_LINE_COUNT_FOR_ANALYSIS,
};
use crate::config::runtime::FileProcessorPreferences;
use crate::log_debug;
pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Process a file with default settings
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    processor::process_file(file_path)
}

/// Create a file processor with default settings
pub fn create_processor() -> FileProcessor {
    processor::create_processor()
}

/// Create a file processor from runtime preferences structure
pub fn create_processor_from_preferences(prefs: &FileProcessorPreferences) -> FileProcessor {
    processor::create_processor_from_preferences(prefs)
}

/// Check if an error should halt processing
pub fn should_halt_on_error(error: &FileProcessorError) -> bool {
    processor::should_halt_on_error(error)
}

/// Get error code for an error
pub fn get_error_code(error: &FileProcessorError) -> crate::logging::Code {
    processor::get_error_code(error)
}

/// Get the compile-time maximum file size limit
pub fn get_max_file_size() -> u64 {
    processor::get_max_file_size()
}

/// Get the compile-time large file threshold
pub fn get_large_file_threshold() -> u64 {
    processor::get_large_file_threshold()
}

/// Initialize file processor logging validation (for system startup)
pub fn init_file_processor_logging() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::file_processing::FILE_NOT_FOUND,
        crate::logging::codes::file_processing::INVALID_EXTENSION,
        crate::logging::codes::file_processing::FILE_TOO_LARGE,
        crate::logging::codes::file_processing::EMPTY_FILE,
        crate::logging::codes::file_processing::PERMISSION_DENIED,
        crate::logging::codes::file_processing::INVALID_ENCODING,
        crate::logging::codes::file_processing::IO_ERROR,
        crate::logging::codes::file_processing::INVALID_PATH,
        crate::logging::codes::file_processing::TOO_MANY_LINES,
    ];

    for code in &test_codes {
        let description = crate::logging::codes::get_description(code.as_str());
        if description == "Unknown error" {
            return Err(format!(
                "File processor error code {} has no description",
                code.as_str()
            ));
        }

        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "File processor error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    let success_code = crate::logging::codes::success::FILE_PROCESSING_SUCCESS;
    if crate::logging::codes::get_error_metadata(success_code.as_str()).is_none() {
        log_debug!("Success code validation skipped (not in error registry)",
            "code" => success_code.as_str());
    }

    let max_size_str = MAX_FILE_SIZE.to_string();
    let threshold_str = LARGE_FILE_THRESHOLD.to_string();
    let max_lines_str = MAX_LINE_COUNT_FOR_ANALYSIS.to_string();

    log_debug!("File processor compile-time configuration loaded",
        "max_file_size" => max_size_str.as_str(),
        "large_file_threshold" => threshold_str.as_str(),
        "max_line_count" => max_lines_str.as_str());

    Ok(())
}
