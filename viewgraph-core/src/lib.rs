//! View-graph robustification for multi-view reconstruction.
//!
//! Given the pairwise relations an upstream matching stage found between
//! views, this crate decides which views are reliable enough to keep. Two
//! policies are offered: keep the largest connected component, or first strip
//! every bridge (an edge whose loss would split its component) and keep the
//! largest remaining 2-edge-connected piece.
//!
//! Largest-component selection is deterministic: candidates are visited in
//! ascending component id and only a strictly larger size replaces the
//! current best, so among equally sized components the lowest id wins.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "parallel")]
mod batch;
mod bridges;
mod components;
mod disjoint_set;
mod error;
mod filter;
mod graph;
mod pairs;
mod registry;
mod report;
mod selection;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    bridges::{find_bridges, remove_bridges},
    components::{ComponentLabels, keep_largest_cc_nodes, largest_connected_component},
    disjoint_set::DisjointSet,
    filter::{Retention, RetentionStrategy, ViewGraphFilter, ViewGraphFilterBuilder},
    graph::{EdgeId, IndexedGraph, ViewGraph},
    pairs::{PairFileError, PairFileErrorCode, read_pairs, write_pairs},
    registry::{EntityId, IndexRegistry},
    report::PruneReport,
    selection::{keep_largest_bi_edge_nodes, prune_to_largest_bi_edge, select_largest},
};
