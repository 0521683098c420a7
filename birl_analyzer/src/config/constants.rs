pub mod compile_time {
    pub mod lexical {
        /// Maximum digits allowed in a numeric literal, decimal point excluded
        /// Literals past this limit are reclassified as oversized-number tokens
        pub const MAX_NUMBER_DIGITS: usize = 9;

        /// Maximum characters allowed between the quotes of a string literal
        /// Literals past this limit are reclassified as oversized-string tokens
        pub const MAX_STRING_CONTENT_LENGTH: usize = 50;

        /// Number of rules in the pattern table, checked by the table tests
        pub const PATTERN_RULE_COUNT: usize = 30;
    }

    pub mod file_processing {
        /// Maximum file size allowed for processing (2MB)
        /// SECURITY: Prevents memory exhaustion via oversized uploads
        pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

        /// Threshold for considering a source file "large" (256KB)
        /// PERFORMANCE: Large files get a warning before analysis
        pub const LARGE_FILE_THRESHOLD: u64 = 256 * 1024;

        /// Maximum line count accepted for analysis
        /// SECURITY: Bounds scan work and parser nesting depth
        pub const MAX_LINE_COUNT_FOR_ANALYSIS: usize = 50_000;
    }

    pub mod logging {
        /// Log buffer size for in-memory capture
        /// RESOURCE: Controls memory usage for logging
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length
        /// RESOURCE: Prevents unbounded memory use via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
