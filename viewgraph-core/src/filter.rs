//! Configurable entry point for view-graph retention.
//!
//! [`ViewGraphFilter`] picks a policy, runs it inside a `viewgraph.filter`
//! span and reports the outcome as structured `tracing` events (and as
//! counters when the `metrics` feature is enabled).

use std::{collections::BTreeSet, fmt};

use tracing::{debug, info, instrument};

use crate::{
    components::largest_connected_component,
    graph::IndexedGraph,
    registry::EntityId,
    report::PruneReport,
    selection::prune_to_largest_bi_edge,
};

/// Policy deciding which views survive.
///
/// # Examples
/// ```
/// use viewgraph_core::RetentionStrategy;
///
/// assert_eq!(RetentionStrategy::default(), RetentionStrategy::LargestBiEdgeConnected);
/// assert_eq!(RetentionStrategy::LargestConnected.as_str(), "largest_connected");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum RetentionStrategy {
    /// Keep the largest connected component.
    LargestConnected,
    /// Erase every bridge, then keep the largest remaining component.
    #[default]
    LargestBiEdgeConnected,
}

impl RetentionStrategy {
    /// Stable name used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LargestConnected => "largest_connected",
            Self::LargestBiEdgeConnected => "largest_bi_edge_connected",
        }
    }
}

impl fmt::Display for RetentionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configures and constructs [`ViewGraphFilter`] instances.
///
/// # Examples
/// ```
/// use viewgraph_core::{RetentionStrategy, ViewGraphFilterBuilder};
///
/// let filter = ViewGraphFilterBuilder::new()
///     .with_strategy(RetentionStrategy::LargestConnected)
///     .build();
/// assert_eq!(filter.strategy(), RetentionStrategy::LargestConnected);
/// assert!(!filter.keeps_pruned_pairs());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ViewGraphFilterBuilder {
    strategy: RetentionStrategy,
    keep_pruned_pairs: bool,
}

impl ViewGraphFilterBuilder {
    /// Creates a builder with the bi-edge strategy and no pruned-pair output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the retention policy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: RetentionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Requests the pruned pair list alongside the retained ids.
    ///
    /// Only the bi-edge policy prunes a graph, so the plain policy ignores
    /// this setting.
    #[must_use]
    pub fn with_pruned_pairs(mut self, keep: bool) -> Self {
        self.keep_pruned_pairs = keep;
        self
    }

    /// Returns the configured policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> RetentionStrategy { self.strategy }

    /// Returns whether pruned pairs will be materialised.
    #[must_use]
    #[rustfmt::skip]
    pub fn pruned_pairs(&self) -> bool { self.keep_pruned_pairs }

    /// Finalises the configuration.
    #[must_use]
    pub fn build(self) -> ViewGraphFilter {
        ViewGraphFilter {
            strategy: self.strategy,
            keep_pruned_pairs: self.keep_pruned_pairs,
        }
    }
}

/// Decides which views of a pair list are reliable enough to keep.
///
/// Each call owns its registry, forest and graph, so one filter can serve
/// any number of independent runs, concurrently included.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use viewgraph_core::ViewGraphFilterBuilder;
///
/// let filter = ViewGraphFilterBuilder::new().with_pruned_pairs(true).build();
/// let pairs = [(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 6), (6, 4)];
/// let retention = filter.run(&pairs);
/// assert_eq!(retention.retained(), &BTreeSet::from([1, 2, 3]));
/// assert_eq!(retention.pruned_pairs(), Some(&[(1, 2), (2, 3), (3, 1)][..]));
/// assert_eq!(retention.report().bridges_removed(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ViewGraphFilter {
    strategy: RetentionStrategy,
    keep_pruned_pairs: bool,
}

impl ViewGraphFilter {
    /// Returns the retention policy.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> RetentionStrategy { self.strategy }

    /// Returns whether runs materialise the pruned pair list.
    #[must_use]
    #[rustfmt::skip]
    pub fn keeps_pruned_pairs(&self) -> bool { self.keep_pruned_pairs }

    /// Applies the configured policy to `pairs`.
    ///
    /// An empty pair list is not an error: it retains nothing.
    #[instrument(
        name = "viewgraph.filter",
        skip(self, pairs),
        fields(strategy = %self.strategy, pairs = pairs.len()),
    )]
    pub fn run<T: EntityId>(&self, pairs: &[(T, T)]) -> Retention<T> {
        if pairs.is_empty() {
            debug!("no pairs supplied, nothing to retain");
        }

        let (retained, pruned_pairs, report) = match self.strategy {
            RetentionStrategy::LargestConnected => {
                let (retained, report) = largest_connected_component(pairs);
                (retained, None, report)
            }
            RetentionStrategy::LargestBiEdgeConnected => {
                let mut graph = IndexedGraph::from_pairs(pairs);
                let (retained, report) = prune_to_largest_bi_edge(&mut graph);
                let pruned_pairs = self.keep_pruned_pairs.then(|| graph.pairs());
                (retained, pruned_pairs, report)
            }
        };

        emit_report(&report);
        Retention {
            retained,
            pruned_pairs,
            report,
        }
    }
}

fn emit_report(report: &PruneReport) {
    for (component, &size) in report.component_sizes().iter().enumerate() {
        debug!(component, size, "component discovered");
    }
    info!(
        views = report.node_count(),
        components = report.component_count(),
        largest = report.largest_component_size(),
        bridges_removed = report.bridges_removed(),
        retained = report.retained_nodes(),
        remaining_edges = report.remaining_edges(),
        "view graph filtered"
    );
    record_metrics(report);
}

#[cfg(feature = "metrics")]
fn record_metrics(report: &PruneReport) {
    let as_count = |value: usize| u64::try_from(value).unwrap_or(u64::MAX);
    let strategy = report.strategy().as_str();
    metrics::counter!("viewgraph_filter_runs_total", "strategy" => strategy).increment(1);
    metrics::counter!("viewgraph_bridges_removed_total", "strategy" => strategy)
        .increment(as_count(report.bridges_removed()));
    metrics::counter!("viewgraph_components_total", "strategy" => strategy)
        .increment(as_count(report.component_count()));
}

#[cfg(not(feature = "metrics"))]
fn record_metrics(_report: &PruneReport) {}

/// Outcome of one [`ViewGraphFilter::run`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Retention<T> {
    retained: BTreeSet<T>,
    pruned_pairs: Option<Vec<(T, T)>>,
    report: PruneReport,
}

impl<T> Retention<T> {
    /// View ids kept, ascending.
    #[must_use]
    #[rustfmt::skip]
    pub fn retained(&self) -> &BTreeSet<T> { &self.retained }

    /// Pairs left in the pruned graph, when requested and the bi-edge policy
    /// ran.
    #[must_use]
    pub fn pruned_pairs(&self) -> Option<&[(T, T)]> {
        self.pruned_pairs.as_deref()
    }

    /// Diagnostics for the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn report(&self) -> &PruneReport { &self.report }

    /// Consumes the outcome, keeping only the retained ids.
    #[must_use]
    pub fn into_retained(self) -> BTreeSet<T> {
        self.retained
    }
}
