//! Fixture types for view-graph property tests.

/// Topology family used when generating a view graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Roughly `1.2n` random edges; usually several components.
    Sparse,
    /// Edge probability between 0.4 and 0.8 over all node pairs.
    Dense,
    /// Random spanning forest: every edge is a bridge.
    Forest,
    /// Cycles of random length linked by single edges.
    BridgedCycles,
    /// Sparse graph with repeated pairs in both orientations and self-loops.
    Multigraph,
}

impl GraphShape {
    pub(super) const ALL: [Self; 5] = [
        Self::Sparse,
        Self::Dense,
        Self::Forest,
        Self::BridgedCycles,
        Self::Multigraph,
    ];
}

/// Generated pair list plus the context needed to diagnose a failure.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of distinct views the generator drew ids for.
    pub node_count: usize,
    /// Pairs of view ids, in generation order.
    pub pairs: Vec<(u32, u32)>,
    /// Topology family used during generation.
    pub shape: GraphShape,
}

impl GraphFixture {
    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, nodes={}, pairs={}",
            self.shape,
            self.node_count,
            self.pairs.len()
        )
    }
}
