// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessorPreferences {
    /// Whether to require the .birl extension (user preference, not a limit)
    pub require_birl_extension: bool,

    /// Whether to enable detailed performance logging (user preference)
    pub enable_performance_logging: bool,

    /// Whether to log debug information for non-BIRL files
    pub log_non_birl_processing: bool,

    /// Whether an empty source file is accepted instead of rejected
    pub allow_empty_source: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            require_birl_extension: env::var("BIRL_REQUIRE_BIRL_EXTENSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_performance_logging: env::var("BIRL_ENABLE_PERFORMANCE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_non_birl_processing: env::var("BIRL_LOG_NON_BIRL_PROCESSING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            allow_empty_source: env::var("BIRL_ALLOW_EMPTY_SOURCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to collect detailed token metrics during the scan
    pub collect_detailed_metrics: bool,

    /// Whether metric counts cover the raw token list or only grammar tokens
    pub include_all_tokens_in_counts: bool,

    /// Whether to log per-line scan statistics at debug level
    pub log_scan_statistics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("BIRL_LEXICAL_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_all_tokens_in_counts: env::var("BIRL_LEXICAL_INCLUDE_ALL_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_scan_statistics: env::var("BIRL_LEXICAL_LOG_SCAN_STATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPreferences {
    /// Whether JSON output is pretty-printed by default
    pub pretty_json: bool,

    /// Whether the report envelope carries start/finish timestamps
    pub include_timestamps: bool,
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self {
            pretty_json: env::var("BIRL_REPORT_PRETTY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_timestamps: env::var("BIRL_REPORT_TIMESTAMPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level
    pub min_log_level: LogLevel,

    /// Whether to include performance metrics in logs
    pub log_performance_events: bool,

    /// Whether to include file context in log messages
    pub include_file_context: bool,

    /// Buffer limit for in-memory log capture
    pub log_buffer_limit: usize,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("BIRL_LOGGING_USE_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("BIRL_LOGGING_ENABLE_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var("BIRL_LOGGING_MIN_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            log_performance_events: env::var("BIRL_LOGGING_LOG_PERFORMANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_file_context: env::var("BIRL_LOGGING_INCLUDE_FILE_CONTEXT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_buffer_limit: env::var("BIRL_LOG_BUFFER_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(crate::config::compile_time::logging::LOG_BUFFER_SIZE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }

    /// Convert from events::LogLevel for compatibility
    pub fn from_events_log_level(level: crate::logging::events::LogLevel) -> Self {
        match level {
            crate::logging::events::LogLevel::Error => LogLevel::Error,
            crate::logging::events::LogLevel::Warning => LogLevel::Warning,
            crate::logging::events::LogLevel::Info => LogLevel::Info,
            crate::logging::events::LogLevel::Debug => LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub report: ReportPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // File Processor
    pub const REQUIRE_BIRL_EXTENSION: &str = "BIRL_REQUIRE_BIRL_EXTENSION";
    pub const ENABLE_PERFORMANCE_LOGGING: &str = "BIRL_ENABLE_PERFORMANCE_LOGGING";
    pub const LOG_NON_BIRL_PROCESSING: &str = "BIRL_LOG_NON_BIRL_PROCESSING";
    pub const ALLOW_EMPTY_SOURCE: &str = "BIRL_ALLOW_EMPTY_SOURCE";

    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "BIRL_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_INCLUDE_ALL_TOKENS: &str = "BIRL_LEXICAL_INCLUDE_ALL_TOKENS";
    pub const LEXICAL_LOG_SCAN_STATS: &str = "BIRL_LEXICAL_LOG_SCAN_STATS";

    // Report
    pub const REPORT_PRETTY: &str = "BIRL_REPORT_PRETTY";
    pub const REPORT_TIMESTAMPS: &str = "BIRL_REPORT_TIMESTAMPS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "BIRL_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "BIRL_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "BIRL_LOGGING_MIN_LEVEL";
    pub const LOGGING_LOG_PERFORMANCE: &str = "BIRL_LOGGING_LOG_PERFORMANCE";
    pub const LOGGING_INCLUDE_FILE_CONTEXT: &str = "BIRL_LOGGING_INCLUDE_FILE_CONTEXT";
    pub const LOG_BUFFER_LIMIT: &str = "BIRL_LOG_BUFFER_LIMIT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("2"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
    }

    #[test]
    fn test_env_var_names_exist() {
        // Verify all env var names are properly defined
        assert!(!env_vars::ENABLE_PERFORMANCE_LOGGING.is_empty());
        assert!(!env_vars::LOGGING_MIN_LEVEL.is_empty());
        assert!(!env_vars::REPORT_PRETTY.is_empty());
        assert!(env_vars::REQUIRE_BIRL_EXTENSION.starts_with("BIRL_"));
    }

    #[test]
    fn test_runtime_config_aggregates_section_defaults() {
        let config = RuntimeConfig::default();
        assert!(!config.file_processor.require_birl_extension);
        assert!(config.lexical.collect_detailed_metrics);
        assert!(config.report.pretty_json);
        assert_eq!(config.logging.min_log_level, LogLevel::Info);
    }
}
