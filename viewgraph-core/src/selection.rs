//! Largest-component selection and the bi-edge-connected pruning path.

use std::collections::BTreeSet;

use tracing::{debug, instrument};

use crate::{
    bridges::remove_bridges,
    components::ComponentLabels,
    filter::RetentionStrategy,
    graph::IndexedGraph,
    registry::EntityId,
    report::PruneReport,
};

/// Picks the largest of `(id, size)` candidates.
///
/// Candidates must arrive in ascending id order. Only a strictly larger size
/// replaces the current best, so the first of several equally large
/// candidates wins. Returns `(id, size)` of the winner, or `None` when no
/// candidate has a positive size.
///
/// # Examples
/// ```
/// use viewgraph_core::select_largest;
///
/// assert_eq!(select_largest([(0, 3), (4, 5), (7, 5)]), Some((4, 5)));
/// assert_eq!(select_largest(std::iter::empty::<(usize, usize)>()), None);
/// ```
pub fn select_largest<I>(candidates: I) -> Option<(usize, usize)>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut best: Option<(usize, usize)> = None;
    let mut best_size = 0;
    for (id, size) in candidates {
        if size > best_size {
            best = Some((id, size));
            best_size = size;
        }
    }
    best
}

/// Strips every bridge from `graph`, then keeps only the largest remaining
/// component.
///
/// Nodes outside the kept component lose all their edges but stay in the
/// graph. The mutation is irreversible; clone the graph first if the original
/// is still needed. Returns the kept view ids and the run's diagnostics.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use viewgraph_core::{IndexedGraph, prune_to_largest_bi_edge};
///
/// let mut graph = IndexedGraph::from_pairs(&[(1, 2), (2, 3), (3, 1), (3, 4)]);
/// let (retained, report) = prune_to_largest_bi_edge(&mut graph);
/// assert_eq!(retained, BTreeSet::from([1, 2, 3]));
/// assert_eq!(report.bridges_removed(), 1);
/// assert_eq!(graph.pairs(), vec![(1, 2), (2, 3), (3, 1)]);
/// ```
#[instrument(
    name = "viewgraph.prune_bi_edge",
    level = "debug",
    skip(graph),
    fields(nodes = graph.graph().node_count(), edges = graph.graph().edge_count()),
)]
pub fn prune_to_largest_bi_edge<T: EntityId>(
    graph: &mut IndexedGraph<T>,
) -> (BTreeSet<T>, PruneReport) {
    let node_count = graph.graph().node_count();
    let input_edges = graph.graph().edge_count();

    let bridges_removed = remove_bridges(graph.graph_mut());
    let labels = ComponentLabels::label(graph.graph());
    let largest = labels.largest().map(|(label, _)| label);
    debug!(
        bridges_removed,
        components = labels.count(),
        "bridges erased and components relabelled"
    );

    let mut retained = BTreeSet::new();
    for node in 0..node_count {
        if Some(labels.label_of(node)) == largest {
            retained.insert(graph.registry().resolve(node).clone());
        } else {
            graph.graph_mut().erase_incident_edges(node);
        }
    }

    let report = PruneReport::new(RetentionStrategy::LargestBiEdgeConnected, node_count, input_edges)
        .with_bridges_removed(bridges_removed)
        .with_component_sizes(labels.sizes().to_vec())
        .with_retention(retained.len(), graph.graph().edge_count());
    (retained, report)
}

/// Returns the view ids of the largest bridge-free component of `pairs`.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use viewgraph_core::keep_largest_bi_edge_nodes;
///
/// let pairs = [(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)];
/// assert_eq!(keep_largest_bi_edge_nodes(&pairs), BTreeSet::from([1, 2, 3]));
/// ```
#[must_use]
pub fn keep_largest_bi_edge_nodes<T: EntityId>(pairs: &[(T, T)]) -> BTreeSet<T> {
    let mut graph = IndexedGraph::from_pairs(pairs);
    prune_to_largest_bi_edge(&mut graph).0
}
