//! Property-test run profile parsing for CI and local overrides.
//!
//! Every view-graph property suite reads the same environment variables so a
//! CI job can widen or shrink the search space in one place.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const VIEWGRAPH_PBT_FORK_ENV_KEY: &str = "VIEWGRAPH_PBT_FORK";
/// Environment variable bounding the node count of generated view graphs.
pub const VIEWGRAPH_PBT_MAX_NODES_ENV_KEY: &str = "VIEWGRAPH_PBT_MAX_NODES";

/// Smallest node ceiling accepted from the environment. Anything lower cannot
/// express a bridge between two cycles.
const MIN_NODE_CEILING: usize = 6;

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    max_nodes: usize,
}

impl ProptestRunProfile {
    /// Load a profile from environment variables with provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use viewgraph_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false, 24);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.max_nodes() >= 6);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool, default_max_nodes: usize) -> Self {
        let cases = read_env_or_default(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases);
        let fork = read_env_or_default(VIEWGRAPH_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        let max_nodes = read_env_or_default(
            VIEWGRAPH_PBT_MAX_NODES_ENV_KEY,
            default_max_nodes.max(MIN_NODE_CEILING),
            parse_node_ceiling,
        );
        Self {
            cases,
            fork,
            max_nodes,
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }

    /// Upper bound on the number of views in a generated graph.
    #[must_use]
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }
}

fn read_env_or_default<T, F>(key: &'static str, default: T, parser: F) -> T
where
    T: Copy,
    F: Fn(&str) -> Result<T, String>,
{
    match env::var(key) {
        Ok(raw) => match parser(&raw) {
            Ok(value) => value,
            Err(reason) => {
                tracing::warn!(
                    env = key,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test profile override; using default",
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}

fn parse_node_ceiling(raw: &str) -> Result<usize, String> {
    let parsed = raw
        .trim()
        .parse::<usize>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed < MIN_NODE_CEILING {
        return Err(format!("node ceiling must be >= {MIN_NODE_CEILING}"));
    }
    Ok(parsed)
}
