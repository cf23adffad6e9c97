//! Benchmark support crate for homba.
//!
//! Provides the parameter types used by Criterion benchmarks for graph
//! generation and ensemble scaling.

pub mod params;
