//! Benchmark support crate for viewgraph.
//!
//! Provides seeded synthetic view graphs and parameter types used by the
//! Criterion benchmarks for bridge detection and view retention.

pub mod params;
pub mod source;
