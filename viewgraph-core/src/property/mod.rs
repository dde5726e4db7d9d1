//! Property-based tests for bridge removal and component retention.
//!
//! Generated view graphs are checked against brute-force oracles: a bridge is
//! an edge whose deletion raises the component count, and a retained set must
//! be one whole component of maximum size.

mod oracle;
mod retention;
mod strategies;
mod structural;
mod types;
