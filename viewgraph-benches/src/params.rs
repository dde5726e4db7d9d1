//! Benchmark parameter types.

use std::fmt;

/// Parameters for a retention or bridge-detection benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of views in the synthetic graph.
    pub view_count: usize,
    /// Number of views per 2-edge-connected cluster.
    pub cluster_size: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},cluster={}", self.view_count, self.cluster_size)
    }
}
