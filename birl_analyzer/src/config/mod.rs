//! Configuration module for the BIRL analyzer
//!
//! Compile-time limits live in `constants`; user-tunable behavior comes from
//! `BIRL_*` environment variables read by the `runtime` preference types.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    FileProcessorPreferences, LexicalPreferences, LogLevel, LoggingPreferences,
    ReportPreferences, RuntimeConfig,
};

/// Build information for version reporting
pub mod build_info {
    /// Returns the crate version baked in at compile time
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Returns the build profile in effect
    pub fn profile() -> &'static str {
        if cfg!(debug_assertions) {
            "development"
        } else {
            "release"
        }
    }
}
