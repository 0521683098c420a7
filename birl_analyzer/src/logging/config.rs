//! Configuration module for logging - using compile-time constants
//!
//! This module provides access to compile-time resource constants and runtime user preferences.
//! Resource ceilings are enforced at compile time and cannot be raised at runtime.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

// Type aliases for clarity
type EventsLogLevel = crate::logging::events::LogLevel;
type RuntimeLogLevel = crate::config::runtime::LogLevel;

// ============================================================================
// RUNTIME PREFERENCES STORAGE
// ============================================================================

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    // Validate preferences against resource constraints
    validate_preferences(&preferences)?;

    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Validate runtime preferences against resource constraints
fn validate_preferences(preferences: &LoggingPreferences) -> Result<(), String> {
    // Buffer limit cannot exceed the compile-time ceiling
    if preferences.log_buffer_limit > LOG_BUFFER_SIZE {
        return Err(format!(
            "Log buffer limit {} exceeds compile-time ceiling {}",
            preferences.log_buffer_limit, LOG_BUFFER_SIZE
        ));
    }

    if preferences.log_buffer_limit == 0 {
        return Err("Log buffer limit cannot be zero".to_string());
    }

    Ok(())
}

// ============================================================================
// CONFIGURATION ACCESS FUNCTIONS
// ============================================================================

/// Get minimum log level (user preference)
pub fn get_min_log_level() -> EventsLogLevel {
    let preferences = get_runtime_preferences();

    // Convert runtime::LogLevel to events::LogLevel using the conversion method
    preferences.min_log_level.to_events_log_level()
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if console logging is enabled (user preference)
pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

/// Check if performance events should be logged (user preference)
pub fn log_performance_events() -> bool {
    get_runtime_preferences().log_performance_events
}

/// Check if file context should be included (user preference)
pub fn include_file_context() -> bool {
    get_runtime_preferences().include_file_context
}

/// Get effective log event buffer limit (preference capped by compile-time ceiling)
pub fn get_log_buffer_limit() -> usize {
    get_runtime_preferences().log_buffer_limit.min(LOG_BUFFER_SIZE)
}

/// Get maximum log message length (compile-time resource constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

// ============================================================================
// CONFIGURATION VALIDATION
// ============================================================================

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    // Validate compile-time constants are reasonable
    if LOG_BUFFER_SIZE > 100_000 {
        return Err(format!("Log buffer size too large: {}", LOG_BUFFER_SIZE));
    }

    if LOG_BUFFER_SIZE < 100 {
        return Err(format!("Log buffer size too small: {}", LOG_BUFFER_SIZE));
    }

    if MAX_LOG_MESSAGE_LENGTH < 256 {
        return Err(format!(
            "Max log message length too small: {}",
            MAX_LOG_MESSAGE_LENGTH
        ));
    }

    // Validate runtime preferences if set
    if let Some(preferences) = RUNTIME_PREFERENCES.get() {
        validate_preferences(preferences)?;
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();

    format!(
        "Logging Configuration:\n\
         === Resource Constants (Compile-time) ===\n\
         - Log buffer size: {}\n\
         - Max message length: {}\n\
         === User Preferences (Runtime) ===\n\
         - Min log level: {:?}\n\
         - Structured logging: {}\n\
         - Console logging: {}\n\
         - Performance events: {}\n\
         - Include file context: {}\n\
         - Buffer limit: {}",
        LOG_BUFFER_SIZE,
        MAX_LOG_MESSAGE_LENGTH,
        preferences.min_log_level,
        preferences.use_structured_logging,
        preferences.enable_console_logging,
        preferences.log_performance_events,
        preferences.include_file_context,
        preferences.log_buffer_limit,
    )
}

/// Check if configuration is in development mode
pub fn is_development_mode() -> bool {
    cfg!(debug_assertions)
}

/// Check if configuration is in production mode
pub fn is_production_mode() -> bool {
    !cfg!(debug_assertions)
}

/// Get recommended configuration for development
pub fn get_development_preferences() -> LoggingPreferences {
    LoggingPreferences {
        use_structured_logging: false,
        enable_console_logging: true,
        min_log_level: RuntimeLogLevel::Debug,
        log_performance_events: true,
        include_file_context: true,
        log_buffer_limit: LOG_BUFFER_SIZE,
    }
}

/// Get recommended configuration for production
pub fn get_production_preferences() -> LoggingPreferences {
    LoggingPreferences {
        use_structured_logging: true,
        enable_console_logging: false,
        min_log_level: RuntimeLogLevel::Info,
        log_performance_events: false,
        include_file_context: false,
        log_buffer_limit: LOG_BUFFER_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_preference_validation() {
        let valid_prefs = LoggingPreferences {
            min_log_level: RuntimeLogLevel::Error,
            ..Default::default()
        };
        assert!(validate_preferences(&valid_prefs).is_ok());

        let oversized_prefs = LoggingPreferences {
            log_buffer_limit: LOG_BUFFER_SIZE + 1,
            ..Default::default()
        };
        assert!(validate_preferences(&oversized_prefs).is_err());

        let zero_prefs = LoggingPreferences {
            log_buffer_limit: 0,
            ..Default::default()
        };
        assert!(validate_preferences(&zero_prefs).is_err());
    }

    #[test]
    fn test_compile_time_constants() {
        // Verify compile-time constants are accessible
        assert!(LOG_BUFFER_SIZE > 0);
        assert!(MAX_LOG_MESSAGE_LENGTH > 0);
    }

    #[test]
    fn test_buffer_limit_capped_by_ceiling() {
        assert!(get_log_buffer_limit() <= LOG_BUFFER_SIZE);
    }

    #[test]
    fn test_mode_detection() {
        // Exactly one of the modes is active
        assert_ne!(is_development_mode(), is_production_mode());
    }

    #[test]
    fn test_preset_preferences() {
        let dev = get_development_preferences();
        assert!(dev.enable_console_logging);
        assert_eq!(dev.min_log_level, RuntimeLogLevel::Debug);

        let prod = get_production_preferences();
        assert!(prod.use_structured_logging);
        assert_eq!(prod.min_log_level, RuntimeLogLevel::Info);
    }
}
