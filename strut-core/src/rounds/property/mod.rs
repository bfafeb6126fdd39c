//! Property-based tests for the round engine.
//!
//! Validates the structural invariants of the produced tree against an
//! independent union-find oracle, checks the per-round coupling between the
//! mutual-selection count and the labelled component count, and asserts
//! that every execution strategy reproduces the same output across graph
//! topologies.

mod phases;
mod strategies;
mod structural;
