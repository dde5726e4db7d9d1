//! Mutable undirected multigraph over dense view indices.
//!
//! Edges live in an arena and are never moved: erasing one clears its
//! liveness flag and decrements the live count. Incidence lists keep the ids
//! of erased edges and skip them while iterating, so an erasure can never
//! invalidate a traversal that is walking the same lists. Nodes are never
//! removed; pruning only strips their edges.

use crate::registry::{EntityId, IndexRegistry};

/// Stable identifier of an edge slot in a [`ViewGraph`].
///
/// Ids are assigned in insertion order and remain valid after the edge is
/// erased.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Returns the raw slot index.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(self) -> usize { self.0 }
}

#[derive(Clone, Copy, Debug)]
struct EdgeSlot {
    source: usize,
    target: usize,
    live: bool,
}

/// Arena-backed multigraph with edge liveness flags.
///
/// Parallel edges are distinct slots; a self-loop is stored once in its
/// node's incidence list.
///
/// # Examples
/// ```
/// use viewgraph_core::ViewGraph;
///
/// let mut graph = ViewGraph::with_nodes(3);
/// let first = graph.add_edge(0, 1);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// assert_eq!(graph.edge_count(), 3);
///
/// assert!(graph.erase_edge(first));
/// assert!(!graph.erase_edge(first));
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.incident_edges(0).count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ViewGraph {
    incidence: Vec<Vec<EdgeId>>,
    edges: Vec<EdgeSlot>,
    live_edges: usize,
}

impl ViewGraph {
    /// Creates a graph with `node_count` edge-less nodes.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            incidence: vec![Vec::new(); node_count],
            edges: Vec::new(),
            live_edges: 0,
        }
    }

    /// Number of nodes, including those left without edges.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.incidence.len()
    }

    /// Number of live edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Adds an undirected edge between `source` and `target`.
    ///
    /// # Panics
    /// Panics when either endpoint is not a node of the graph.
    pub fn add_edge(&mut self, source: usize, target: usize) -> EdgeId {
        let node_count = self.node_count();
        assert!(
            source < node_count && target < node_count,
            "edge ({source}, {target}) references a node outside 0..{node_count}"
        );
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeSlot {
            source,
            target,
            live: true,
        });
        self.incidence[source].push(id);
        if source != target {
            self.incidence[target].push(id);
        }
        self.live_edges += 1;
        id
    }

    /// Erases `edge`. Returns `false` if it had already been erased.
    ///
    /// # Panics
    /// Panics when `edge` did not come from this graph.
    pub fn erase_edge(&mut self, edge: EdgeId) -> bool {
        let slot = &mut self.edges[edge.0];
        if !slot.live {
            return false;
        }
        slot.live = false;
        self.live_edges -= 1;
        true
    }

    /// Erases every live edge touching `node` and returns how many were
    /// erased. The node itself stays in the graph.
    ///
    /// # Panics
    /// Panics when `node` is out of range.
    pub fn erase_incident_edges(&mut self, node: usize) -> usize {
        let doomed: Vec<EdgeId> = self.incident_edges(node).collect();
        doomed
            .into_iter()
            .filter(|&edge| self.erase_edge(edge))
            .count()
    }

    /// Returns `true` while `edge` has not been erased.
    ///
    /// # Panics
    /// Panics when `edge` did not come from this graph.
    #[must_use]
    pub fn is_live(&self, edge: EdgeId) -> bool {
        self.edges[edge.0].live
    }

    /// Endpoints of `edge` in insertion order, whether or not it is live.
    ///
    /// # Panics
    /// Panics when `edge` did not come from this graph.
    #[must_use]
    pub fn endpoints(&self, edge: EdgeId) -> (usize, usize) {
        let slot = self.edges[edge.0];
        (slot.source, slot.target)
    }

    /// The endpoint of `edge` that is not `node` (or `node` for a self-loop).
    ///
    /// # Panics
    /// Panics when `edge` did not come from this graph.
    #[must_use]
    pub fn opposite(&self, edge: EdgeId, node: usize) -> usize {
        let (source, target) = self.endpoints(edge);
        if source == node { target } else { source }
    }

    /// Live edges touching `node`.
    ///
    /// # Panics
    /// Panics when `node` is out of range.
    pub fn incident_edges(&self, node: usize) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence[node]
            .iter()
            .copied()
            .filter(|&edge| self.is_live(edge))
    }

    /// Live edges as `(id, source, target)` in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, usize, usize)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.live)
            .map(|(index, slot)| (EdgeId(index), slot.source, slot.target))
    }

    /// Incidence slot `position` of `node`, including erased edges.
    ///
    /// Traversals that keep a cursor into the incidence list use this so the
    /// cursor stays valid while edges elsewhere are erased.
    pub(crate) fn incidence_slot(&self, node: usize, position: usize) -> Option<EdgeId> {
        self.incidence[node].get(position).copied()
    }
}

/// A [`ViewGraph`] together with the registry mapping its nodes back to view
/// ids.
///
/// # Examples
/// ```
/// use viewgraph_core::IndexedGraph;
///
/// let graph = IndexedGraph::from_pairs(&[(10_u32, 20), (20, 30)]);
/// assert_eq!(graph.graph().node_count(), 3);
/// assert_eq!(graph.pairs(), vec![(10, 20), (20, 30)]);
/// ```
#[derive(Clone, Debug)]
pub struct IndexedGraph<T> {
    graph: ViewGraph,
    registry: IndexRegistry<T>,
}

impl<T: EntityId> IndexedGraph<T> {
    /// Registers every endpoint in first-seen order and adds one edge per
    /// pair, duplicates included.
    #[must_use]
    pub fn from_pairs(pairs: &[(T, T)]) -> Self {
        let registry = IndexRegistry::from_pairs(pairs);
        let mut graph = ViewGraph::with_nodes(registry.len());
        for (first, second) in pairs {
            graph.add_edge(
                registry.registered_index(first),
                registry.registered_index(second),
            );
        }
        Self { graph, registry }
    }

    /// The underlying dense-index graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &ViewGraph { &self.graph }

    /// Mutable access to the underlying graph.
    #[rustfmt::skip]
    pub fn graph_mut(&mut self) -> &mut ViewGraph { &mut self.graph }

    /// The registry mapping dense indices to view ids.
    #[must_use]
    #[rustfmt::skip]
    pub fn registry(&self) -> &IndexRegistry<T> { &self.registry }

    /// Live edges mapped back to view ids, in ascending edge id order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(T, T)> {
        self.graph
            .edges()
            .map(|(_, source, target)| {
                (
                    self.registry.resolve(source).clone(),
                    self.registry.resolve(target).clone(),
                )
            })
            .collect()
    }

    /// Splits into the graph and its registry.
    #[must_use]
    pub fn into_parts(self) -> (ViewGraph, IndexRegistry<T>) {
        (self.graph, self.registry)
    }
}
