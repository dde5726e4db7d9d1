//! Structural properties of bridge detection and the disjoint-set forest.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, IndexedGraph, find_bridges, remove_bridges};

use super::oracle::{DenseView, brute_force_bridges, components};
use super::types::GraphFixture;

/// Bridges reported by the DFS equal the brute-force set, edge for edge.
///
/// Edge ids are assigned in pair order, so an edge id and the position of
/// its pair coincide.
pub(super) fn run_bridge_oracle_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = IndexedGraph::from_pairs(&fixture.pairs);
    let view = DenseView::from_pairs(&fixture.pairs);

    let registered: Vec<u32> = graph.registry().iter().map(|(_, &id)| id).collect();
    if registered != view.ids {
        return Err(TestCaseError::fail(format!(
            "registry order {registered:?} differs from first-seen order {:?} ({})",
            view.ids,
            fixture.describe(),
        )));
    }

    let actual: Vec<usize> = find_bridges(graph.graph())
        .into_iter()
        .map(|edge| edge.index())
        .collect();
    let expected = brute_force_bridges(view.node_count(), &view.edges);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "bridges {actual:?} != brute force {expected:?} ({}, pairs={:?})",
            fixture.describe(),
            fixture.pairs,
        )));
    }
    Ok(())
}

/// Erasing every bridge leaves a bridgeless graph and removes nothing else.
pub(super) fn run_bridge_removal_property(fixture: &GraphFixture) -> TestCaseResult {
    let mut graph = IndexedGraph::from_pairs(&fixture.pairs);
    let bridges = find_bridges(graph.graph());
    let removed = remove_bridges(graph.graph_mut());

    if removed != bridges.len() {
        return Err(TestCaseError::fail(format!(
            "removed {removed} edges but found {} bridges ({})",
            bridges.len(),
            fixture.describe(),
        )));
    }
    let remaining = graph.graph().edge_count();
    if remaining + removed != fixture.pairs.len() {
        return Err(TestCaseError::fail(format!(
            "{remaining} live edges after removing {removed} of {} ({})",
            fixture.pairs.len(),
            fixture.describe(),
        )));
    }
    if let Some(edge) = bridges.iter().find(|&&edge| graph.graph().is_live(edge)) {
        return Err(TestCaseError::fail(format!(
            "bridge {edge:?} still live ({})",
            fixture.describe(),
        )));
    }
    let leftover = find_bridges(graph.graph());
    if !leftover.is_empty() {
        return Err(TestCaseError::fail(format!(
            "graph still has bridges {leftover:?} after removal ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Unions over the pair edges partition nodes exactly like a BFS does.
pub(super) fn run_disjoint_set_property(fixture: &GraphFixture) -> TestCaseResult {
    let view = DenseView::from_pairs(&fixture.pairs);
    let node_count = view.node_count();
    let mut sets = DisjointSet::new(node_count);

    let merges = view
        .edges
        .iter()
        .filter(|&&(source, target)| sets.union(source, target))
        .count();

    let keep = vec![true; view.edges.len()];
    let expected = components(node_count, &view.edges, &keep);
    if merges + expected.len() != node_count {
        return Err(TestCaseError::fail(format!(
            "{merges} successful unions for {} components over {node_count} nodes ({})",
            expected.len(),
            fixture.describe(),
        )));
    }

    for members in &expected {
        let roots: BTreeSet<usize> = members.iter().map(|&node| sets.find(node)).collect();
        if roots.len() != 1 {
            return Err(TestCaseError::fail(format!(
                "component {members:?} spread over roots {roots:?} ({})",
                fixture.describe(),
            )));
        }
        for &node in members {
            let root = sets.find(node);
            if sets.find(root) != root {
                return Err(TestCaseError::fail(format!(
                    "root {root} of node {node} is not its own root ({})",
                    fixture.describe(),
                )));
            }
            if sets.set_size(node) != members.len() {
                return Err(TestCaseError::fail(format!(
                    "node {node} reports set size {} but its component has {} ({})",
                    sets.set_size(node),
                    members.len(),
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}
