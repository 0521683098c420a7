//! Shared primitives for the BIRL analyzer
//!
//! Position tracking used by the tokenizer, diagnostics, and log events.

pub mod position;

pub use position::Position;
