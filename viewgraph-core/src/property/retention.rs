//! Retention properties for both strategies.

use std::collections::BTreeSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    RetentionStrategy, ViewGraphFilterBuilder, keep_largest_bi_edge_nodes,
    largest_connected_component,
};

use super::oracle::{DenseView, brute_force_bridges, expected_bi_edge_retention, pair_components};
use super::types::GraphFixture;

/// The plain path keeps one whole component of maximum size and reports
/// every component of the pair graph.
pub(super) fn run_plain_retention_property(fixture: &GraphFixture) -> TestCaseResult {
    let (retained, report) = largest_connected_component(&fixture.pairs);
    let components = pair_components(&fixture.pairs);
    let max_size = components.iter().map(BTreeSet::len).max().unwrap_or(0);

    if components.is_empty() {
        return if retained.is_empty() {
            Ok(())
        } else {
            Err(TestCaseError::fail(format!(
                "retained {retained:?} from no pairs ({})",
                fixture.describe(),
            )))
        };
    }
    if !components.contains(&retained) {
        return Err(TestCaseError::fail(format!(
            "retained {retained:?} is not a component of the pair graph ({})",
            fixture.describe(),
        )));
    }
    if retained.len() != max_size {
        return Err(TestCaseError::fail(format!(
            "retained {} views, largest component has {max_size} ({})",
            retained.len(),
            fixture.describe(),
        )));
    }

    let mut reported = report.component_sizes().to_vec();
    let mut expected: Vec<usize> = components.iter().map(BTreeSet::len).collect();
    reported.sort_unstable();
    expected.sort_unstable();
    if reported != expected {
        return Err(TestCaseError::fail(format!(
            "reported component sizes {reported:?}, expected {expected:?} ({})",
            fixture.describe(),
        )));
    }

    let inside = fixture
        .pairs
        .iter()
        .filter(|(first, _)| retained.contains(first))
        .count();
    if report.remaining_edges() != inside {
        return Err(TestCaseError::fail(format!(
            "report counts {} remaining edges, {inside} pairs lie inside ({})",
            report.remaining_edges(),
            fixture.describe(),
        )));
    }
    Ok(())
}

/// The bi-edge path keeps exactly the oracle's component and its report
/// agrees with brute-force bridge counting.
pub(super) fn run_bi_edge_retention_property(fixture: &GraphFixture) -> TestCaseResult {
    let retained = keep_largest_bi_edge_nodes(&fixture.pairs);
    let expected = expected_bi_edge_retention(&fixture.pairs);
    if retained != expected {
        return Err(TestCaseError::fail(format!(
            "retained {retained:?}, oracle expects {expected:?} ({}, pairs={:?})",
            fixture.describe(),
            fixture.pairs,
        )));
    }

    let outcome = ViewGraphFilterBuilder::new()
        .with_strategy(RetentionStrategy::LargestBiEdgeConnected)
        .with_pruned_pairs(true)
        .build()
        .run(&fixture.pairs);
    let view = DenseView::from_pairs(&fixture.pairs);
    let bridges = brute_force_bridges(view.node_count(), &view.edges).len();
    if outcome.report().bridges_removed() != bridges {
        return Err(TestCaseError::fail(format!(
            "report counts {} bridges, brute force finds {bridges} ({})",
            outcome.report().bridges_removed(),
            fixture.describe(),
        )));
    }
    if outcome.retained() != &expected {
        return Err(TestCaseError::fail(format!(
            "filter retained {:?}, direct call retained {expected:?} ({})",
            outcome.retained(),
            fixture.describe(),
        )));
    }

    let pruned = outcome.pruned_pairs().unwrap_or_default();
    if pruned.len() != outcome.report().remaining_edges() {
        return Err(TestCaseError::fail(format!(
            "{} pruned pairs but report counts {} remaining edges ({})",
            pruned.len(),
            outcome.report().remaining_edges(),
            fixture.describe(),
        )));
    }
    if let Some(pair) = pruned
        .iter()
        .find(|(first, second)| !expected.contains(first) || !expected.contains(second))
    {
        return Err(TestCaseError::fail(format!(
            "pruned pair {pair:?} leaves the retained set ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Repeated runs on the same input agree exactly.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    for strategy in [
        RetentionStrategy::LargestConnected,
        RetentionStrategy::LargestBiEdgeConnected,
    ] {
        let filter = ViewGraphFilterBuilder::new().with_strategy(strategy).build();
        let first = filter.run(&fixture.pairs);
        let second = filter.run(&fixture.pairs);
        if first != second {
            return Err(TestCaseError::fail(format!(
                "{strategy} produced {:?} then {:?} ({})",
                first.retained(),
                second.retained(),
                fixture.describe(),
            )));
        }
    }
    Ok(())
}
