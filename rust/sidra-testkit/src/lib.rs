//! Test instrumentation and data generation for sidra sequences.
//!
//! The counting wrapper in [`counting`] records how often a sequence's
//! primitives are exercised, which is how the test suites verify
//! single-pass and short-circuit behavior. [`data_gen`] provides seeded
//! random inputs so randomized tests stay reproducible.

pub mod counting;
pub mod data_gen;

pub use counting::{CountingSeq, Endless, TraversalStats, endless};
