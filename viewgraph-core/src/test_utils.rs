//! Shared test utilities for `viewgraph-core`.

use proptest::test_runner::Config as ProptestConfig;
use viewgraph_test_support::ci::property_test_profile::ProptestRunProfile;

/// Default ceiling on generated view counts when the environment is silent.
const DEFAULT_MAX_NODES: usize = 24;

/// Builds a proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false, DEFAULT_MAX_NODES);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Upper bound on generated view counts for property suites.
#[must_use]
pub(crate) fn max_generated_nodes() -> usize {
    ProptestRunProfile::load(1, false, DEFAULT_MAX_NODES).max_nodes()
}
