//! Connected components, from raw pairs or from a [`ViewGraph`].
//!
//! The plain retention path never builds a graph: one union-find pass over
//! the pairs is enough to find every component and its size. Labelling over
//! a [`ViewGraph`] is used after bridges have been erased, when the pairs no
//! longer describe the graph.

use std::collections::{BTreeSet, VecDeque};

use tracing::instrument;

use crate::{
    disjoint_set::DisjointSet,
    filter::RetentionStrategy,
    graph::ViewGraph,
    registry::{EntityId, IndexRegistry},
    report::PruneReport,
    selection::select_largest,
};

const UNLABELLED: usize = usize::MAX;

/// Component label of every node in a [`ViewGraph`].
///
/// Nodes are scanned in ascending index order and each unlabelled node starts
/// a breadth-first search that claims the next label, so label 0 always
/// contains node 0. Nodes without live edges form singleton components.
///
/// # Examples
/// ```
/// use viewgraph_core::{ComponentLabels, ViewGraph};
///
/// let mut graph = ViewGraph::with_nodes(5);
/// graph.add_edge(3, 4);
/// graph.add_edge(0, 1);
/// let labels = ComponentLabels::label(&graph);
/// assert_eq!(labels.sizes(), &[2, 1, 2]);
/// assert_eq!(labels.members(2), vec![3, 4]);
/// assert_eq!(labels.largest(), Some((0, 2)));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentLabels {
    labels: Vec<usize>,
    sizes: Vec<usize>,
}

impl ComponentLabels {
    /// Labels the components formed by the live edges of `graph`.
    #[must_use]
    pub fn label(graph: &ViewGraph) -> Self {
        let node_count = graph.node_count();
        let mut labels = vec![UNLABELLED; node_count];
        let mut sizes = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..node_count {
            if labels[start] != UNLABELLED {
                continue;
            }
            let label = sizes.len();
            labels[start] = label;
            queue.push_back(start);
            let mut size = 0;
            while let Some(node) = queue.pop_front() {
                size += 1;
                for edge in graph.incident_edges(node) {
                    let next = graph.opposite(edge, node);
                    if labels[next] == UNLABELLED {
                        labels[next] = label;
                        queue.push_back(next);
                    }
                }
            }
            sizes.push(size);
        }

        Self { labels, sizes }
    }

    /// Number of labelled nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when the labelled graph had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of `node`.
    ///
    /// # Panics
    /// Panics when `node` was not part of the labelled graph.
    #[must_use]
    pub fn label_of(&self, node: usize) -> usize {
        self.labels[node]
    }

    /// Size of each component, indexed by label.
    #[must_use]
    #[rustfmt::skip]
    pub fn sizes(&self) -> &[usize] { &self.sizes }

    /// Number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Nodes carrying `label`, ascending.
    #[must_use]
    pub fn members(&self, label: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &node_label)| node_label == label)
            .map(|(node, _)| node)
            .collect()
    }

    /// Members of every component, indexed by label.
    #[must_use]
    pub fn members_by_label(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = self
            .sizes
            .iter()
            .map(|&size| Vec::with_capacity(size))
            .collect();
        for (node, &label) in self.labels.iter().enumerate() {
            groups[label].push(node);
        }
        groups
    }

    /// `(label, size)` of the largest component; ties go to the lowest label.
    #[must_use]
    pub fn largest(&self) -> Option<(usize, usize)> {
        select_largest(self.sizes.iter().copied().enumerate())
    }
}

/// Returns the view ids of the largest connected component of `pairs`.
///
/// Only views that appear in some pair are considered.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use viewgraph_core::keep_largest_cc_nodes;
///
/// let retained = keep_largest_cc_nodes(&[(1, 2), (2, 3), (4, 5)]);
/// assert_eq!(retained, BTreeSet::from([1, 2, 3]));
/// ```
#[must_use]
pub fn keep_largest_cc_nodes<T: EntityId>(pairs: &[(T, T)]) -> BTreeSet<T> {
    largest_connected_component(pairs).0
}

/// Like [`keep_largest_cc_nodes`], also returning the run's diagnostics.
///
/// Components are identified by their union-find root and visited in
/// ascending root order, so among equally large components the one whose
/// root has the smallest dense index wins.
#[instrument(name = "viewgraph.largest_cc", level = "debug", skip(pairs), fields(pairs = pairs.len()))]
pub fn largest_connected_component<T: EntityId>(pairs: &[(T, T)]) -> (BTreeSet<T>, PruneReport) {
    let registry = IndexRegistry::from_pairs(pairs);
    let dense: Vec<(usize, usize)> = pairs
        .iter()
        .map(|(first, second)| {
            (
                registry.registered_index(first),
                registry.registered_index(second),
            )
        })
        .collect();

    let mut sets = DisjointSet::new(registry.len());
    for &(first, second) in &dense {
        sets.union(first, second);
    }

    let roots: BTreeSet<usize> = dense.iter().map(|&(first, _)| sets.find(first)).collect();
    let component_sizes: Vec<usize> = roots.iter().map(|&root| sets.root_size(root)).collect();

    let mut retained = BTreeSet::new();
    let mut remaining_edges = 0;
    if roots.len() == 1 {
        for (first, second) in pairs {
            retained.insert(first.clone());
            retained.insert(second.clone());
        }
        remaining_edges = pairs.len();
    } else if let Some((best_root, _)) =
        select_largest(roots.iter().map(|&root| (root, sets.root_size(root))))
    {
        for (&(first_index, _), (first, second)) in dense.iter().zip(pairs) {
            if sets.find(first_index) == best_root {
                retained.insert(first.clone());
                retained.insert(second.clone());
                remaining_edges += 1;
            }
        }
    }

    let report = PruneReport::new(RetentionStrategy::LargestConnected, registry.len(), pairs.len())
        .with_component_sizes(component_sizes)
        .with_retention(retained.len(), remaining_edges);
    (retained, report)
}
