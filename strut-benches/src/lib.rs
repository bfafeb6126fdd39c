//! Benchmark support crate for strut.
//!
//! Provides seeded synthetic graphs and parameter types used by the
//! Criterion benchmarks of the spanning tree solver.

pub mod error;
pub mod params;
pub mod source;
