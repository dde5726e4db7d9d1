//! Diagnostics describing one retention run.

use crate::filter::RetentionStrategy;

/// Counts gathered while deciding which views to keep.
///
/// Informational only: nothing here feeds back into the retention decision.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PruneReport {
    strategy: RetentionStrategy,
    node_count: usize,
    input_edges: usize,
    bridges_removed: usize,
    component_sizes: Vec<usize>,
    retained_nodes: usize,
    remaining_edges: usize,
}

impl PruneReport {
    pub(crate) fn new(strategy: RetentionStrategy, node_count: usize, input_edges: usize) -> Self {
        Self {
            strategy,
            node_count,
            input_edges,
            bridges_removed: 0,
            component_sizes: Vec::new(),
            retained_nodes: 0,
            remaining_edges: 0,
        }
    }

    pub(crate) fn with_bridges_removed(mut self, bridges_removed: usize) -> Self {
        self.bridges_removed = bridges_removed;
        self
    }

    pub(crate) fn with_component_sizes(mut self, component_sizes: Vec<usize>) -> Self {
        self.component_sizes = component_sizes;
        self
    }

    pub(crate) fn with_retention(mut self, retained_nodes: usize, remaining_edges: usize) -> Self {
        self.retained_nodes = retained_nodes;
        self.remaining_edges = remaining_edges;
        self
    }

    /// Policy that produced this report.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> RetentionStrategy { self.strategy }

    /// Number of distinct views that appeared in any pair.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Number of pairs supplied, duplicates included.
    #[must_use]
    #[rustfmt::skip]
    pub fn input_edges(&self) -> usize { self.input_edges }

    /// Number of bridge edges erased before component selection.
    #[must_use]
    #[rustfmt::skip]
    pub fn bridges_removed(&self) -> usize { self.bridges_removed }

    /// Size of every component considered, in the order candidates were
    /// visited.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_sizes(&self) -> &[usize] { &self.component_sizes }

    /// Number of components considered.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.component_sizes.len()
    }

    /// Size of the largest component considered, or 0 when there was none.
    #[must_use]
    pub fn largest_component_size(&self) -> usize {
        self.component_sizes.iter().copied().max().unwrap_or(0)
    }

    /// Number of views kept.
    #[must_use]
    #[rustfmt::skip]
    pub fn retained_nodes(&self) -> usize { self.retained_nodes }

    /// Number of edges inside the kept component.
    #[must_use]
    #[rustfmt::skip]
    pub fn remaining_edges(&self) -> usize { self.remaining_edges }
}
