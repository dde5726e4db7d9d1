//! Graph generators for view-graph property tests.
//!
//! Node `i` is published under a scrambled view id so the registry's
//! first-seen numbering never coincides with the ids themselves.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::test_utils::max_generated_nodes;

use super::types::{GraphFixture, GraphShape};

const MIN_NODES: usize = 2;

/// Samples a shape and a seed, then generates the fixture.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    let shapes: Vec<_> = GraphShape::ALL.iter().copied().map(Just).collect();
    (proptest::strategy::Union::new(shapes), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for an explicitly chosen shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> GraphFixture {
    let max_nodes = max_generated_nodes();
    let node_count = rng.gen_range(MIN_NODES..=max_nodes);
    let edges = match shape {
        GraphShape::Sparse => sparse_edges(node_count, rng),
        GraphShape::Dense => dense_edges(node_count, rng),
        GraphShape::Forest => forest_edges(node_count, rng),
        GraphShape::BridgedCycles => bridged_cycle_edges(node_count, rng),
        GraphShape::Multigraph => multigraph_edges(node_count, rng),
    };
    GraphFixture {
        node_count,
        pairs: publish(node_count, &edges, rng),
        shape,
    }
}

fn sparse_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let edge_count = node_count + node_count / 5;
    (0..edge_count)
        .map(|_| distinct_pair(node_count, rng))
        .collect()
}

fn dense_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let probability = rng.gen_range(0.4..=0.8);
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(probability) {
                edges.push((source, target));
            }
        }
    }
    edges
}

fn forest_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    (1..node_count)
        .filter_map(|node| rng.gen_bool(0.85).then(|| (rng.gen_range(0..node), node)))
        .collect()
}

fn bridged_cycle_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    let mut previous_cycle: Option<(usize, usize)> = None;
    let mut start = 0;
    while start < node_count {
        let length = rng.gen_range(3..=6).min(node_count - start);
        let end = start + length;
        if length >= 3 {
            for node in start..end {
                let next = if node + 1 == end { start } else { node + 1 };
                edges.push((node, next));
            }
        } else {
            for node in (start + 1)..end {
                edges.push((node - 1, node));
            }
        }
        if let Some((previous_start, previous_end)) = previous_cycle {
            edges.push((rng.gen_range(previous_start..previous_end), rng.gen_range(start..end)));
        }
        previous_cycle = Some((start, end));
        start = end;
    }
    edges.shuffle(rng);
    edges
}

fn multigraph_edges(node_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut edges = sparse_edges(node_count, rng);
    let repeats: Vec<(usize, usize)> = edges
        .iter()
        .filter(|_| rng.gen_bool(0.3))
        .map(|&(source, target)| (target, source))
        .collect();
    edges.extend(repeats);
    for _ in 0..rng.gen_range(0..=2) {
        let node = rng.gen_range(0..node_count);
        edges.push((node, node));
    }
    edges.shuffle(rng);
    edges
}

fn distinct_pair(node_count: usize, rng: &mut SmallRng) -> (usize, usize) {
    let source = rng.gen_range(0..node_count);
    let mut target = rng.gen_range(0..node_count - 1);
    if target >= source {
        target += 1;
    }
    (source, target)
}

/// Maps generator nodes to scrambled, sparse view ids.
fn publish(node_count: usize, edges: &[(usize, usize)], rng: &mut SmallRng) -> Vec<(u32, u32)> {
    let mut ids: Vec<u32> = (0..node_count)
        .map(|node| u32::try_from(node * 7 + 3).unwrap_or(u32::MAX))
        .collect();
    ids.shuffle(rng);
    edges
        .iter()
        .map(|&(source, target)| (ids[source], ids[target]))
        .collect()
}
