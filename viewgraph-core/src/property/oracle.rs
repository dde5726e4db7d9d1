//! Brute-force reference computations for view-graph properties.
//!
//! Nothing here shares code with the production paths: numbering, component
//! search and bridge detection are all recomputed from the raw pairs.

use std::collections::{BTreeSet, HashMap, VecDeque};

/// A pair list translated to dense node indices in first-seen order.
#[derive(Clone, Debug)]
pub(super) struct DenseView {
    /// View id of each dense index.
    pub ids: Vec<u32>,
    /// One dense edge per input pair, in input order.
    pub edges: Vec<(usize, usize)>,
}

impl DenseView {
    /// Numbers endpoints in first-seen order, each pair's first id before its
    /// second.
    pub(super) fn from_pairs(pairs: &[(u32, u32)]) -> Self {
        let mut index_of: HashMap<u32, usize> = HashMap::new();
        let mut ids = Vec::new();
        let mut intern = |id: u32| {
            *index_of.entry(id).or_insert_with(|| {
                ids.push(id);
                ids.len() - 1
            })
        };
        let edges = pairs
            .iter()
            .map(|&(first, second)| {
                let source = intern(first);
                (source, intern(second))
            })
            .collect();
        Self { ids, edges }
    }

    pub(super) fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Maps dense members back to their view ids.
    pub(super) fn resolve(&self, members: &[usize]) -> BTreeSet<u32> {
        members.iter().map(|&node| self.ids[node]).collect()
    }
}

/// Components over the edges whose `keep` flag is set, labelled by scanning
/// nodes in ascending index order.
pub(super) fn components(
    node_count: usize,
    edges: &[(usize, usize)],
    keep: &[bool],
) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); node_count];
    for (&(source, target), &kept) in edges.iter().zip(keep) {
        if kept {
            adjacency[source].push(target);
            adjacency[target].push(source);
        }
    }

    let mut seen = vec![false; node_count];
    let mut result = Vec::new();
    for start in 0..node_count {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut members = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            members.push(node);
            for &next in &adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        members.sort_unstable();
        result.push(members);
    }
    result
}

/// Edge positions whose deletion increases the component count.
pub(super) fn brute_force_bridges(node_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut keep = vec![true; edges.len()];
    let baseline = components(node_count, edges, &keep).len();
    let mut bridges = Vec::new();
    for position in 0..edges.len() {
        keep[position] = false;
        if components(node_count, edges, &keep).len() > baseline {
            bridges.push(position);
        }
        keep[position] = true;
    }
    bridges
}

/// View ids the bi-edge path must retain: drop every brute-force bridge, then
/// take the first component of maximum size in ascending label order.
pub(super) fn expected_bi_edge_retention(pairs: &[(u32, u32)]) -> BTreeSet<u32> {
    let view = DenseView::from_pairs(pairs);
    let bridges: BTreeSet<usize> = brute_force_bridges(view.node_count(), &view.edges)
        .into_iter()
        .collect();
    let keep: Vec<bool> = (0..view.edges.len())
        .map(|position| !bridges.contains(&position))
        .collect();
    let mut best: Option<Vec<usize>> = None;
    for members in components(view.node_count(), &view.edges, &keep) {
        if best.as_ref().is_none_or(|current| members.len() > current.len()) {
            best = Some(members);
        }
    }
    best.map(|members| view.resolve(&members)).unwrap_or_default()
}

/// Every component of the raw pair graph, as view-id sets.
pub(super) fn pair_components(pairs: &[(u32, u32)]) -> Vec<BTreeSet<u32>> {
    let view = DenseView::from_pairs(pairs);
    let keep = vec![true; view.edges.len()];
    components(view.node_count(), &view.edges, &keep)
        .iter()
        .map(|members| view.resolve(members))
        .collect()
}
