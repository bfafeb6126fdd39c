//! Support library for the `strut` binary.
//!
//! Exposes the command pipeline, report writer, and logging setup so tests
//! can drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
pub mod report;
