//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Every command renders
//! into a `String` first, so the output is testable without capturing stdout.

pub mod engine;
pub mod period;
pub mod sample;
