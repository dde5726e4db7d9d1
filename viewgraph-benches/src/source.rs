//! Synthetic view graphs for benchmarking.
//!
//! Views are split into clusters. Each cluster is a ring with one random
//! chord, consecutive clusters are joined by a single bridging pair, and a
//! configurable number of random cross links is sprinkled on top. Generation
//! is seeded for reproducibility across benchmark runs.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested view count was zero.
    #[error("view count must be greater than zero")]
    ZeroViews,
    /// The requested cluster size was zero.
    #[error("cluster size must be greater than zero")]
    ZeroClusterSize,
    /// The requested view count does not fit in a `u32` view id.
    #[error("view count {count} exceeds the u32 id space")]
    TooManyViews {
        /// Requested number of views.
        count: usize,
    },
}

/// Configuration for synthetic view-graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of views to generate.
    pub view_count: usize,
    /// Number of views per cluster; the last cluster may be smaller.
    pub cluster_size: usize,
    /// Number of random pairs added across the whole graph.
    pub cross_links: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A seeded pair list with known cluster structure.
///
/// # Examples
///
/// ```
/// use viewgraph_benches::source::{SyntheticConfig, SyntheticViewGraph};
///
/// let config = SyntheticConfig { view_count: 12, cluster_size: 4, cross_links: 0, seed: 7 };
/// let graph = SyntheticViewGraph::generate(&config).expect("valid config");
/// assert_eq!(graph.view_count(), 12);
/// assert!(!graph.pairs().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticViewGraph {
    pairs: Vec<(u32, u32)>,
    view_count: usize,
}

impl SyntheticViewGraph {
    /// Generates the pair list eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroViews`] if `view_count` is zero,
    /// [`SyntheticError::ZeroClusterSize`] if `cluster_size` is zero, or
    /// [`SyntheticError::TooManyViews`] if the views cannot be numbered with
    /// `u32` ids.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.view_count == 0 {
            return Err(SyntheticError::ZeroViews);
        }
        if config.cluster_size == 0 {
            return Err(SyntheticError::ZeroClusterSize);
        }
        let ids = (0..config.view_count)
            .map(u32::try_from)
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|_| SyntheticError::TooManyViews {
                count: config.view_count,
            })?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut pairs = Vec::new();
        let mut previous_last: Option<u32> = None;
        for cluster in ids.chunks(config.cluster_size) {
            push_cluster(cluster, &mut rng, &mut pairs);
            if let (Some(last), Some(&first)) = (previous_last, cluster.first()) {
                pairs.push((last, first));
            }
            previous_last = cluster.last().copied();
        }

        for _ in 0..config.cross_links {
            if let (Some(&first), Some(&second)) = (ids.choose(&mut rng), ids.choose(&mut rng)) {
                if first != second {
                    pairs.push((first, second));
                }
            }
        }

        Ok(Self {
            pairs,
            view_count: config.view_count,
        })
    }

    /// Generated pairs, in generation order.
    #[must_use]
    pub fn pairs(&self) -> &[(u32, u32)] {
        &self.pairs
    }

    /// Number of views the pairs were drawn from.
    #[must_use]
    pub const fn view_count(&self) -> usize {
        self.view_count
    }
}

/// Pushes a path over `cluster`, closed into a ring for three or more views,
/// plus one random chord when the ring is long enough to take one.
fn push_cluster(cluster: &[u32], rng: &mut SmallRng, pairs: &mut Vec<(u32, u32)>) {
    pairs.extend(cluster.iter().copied().zip(cluster.iter().copied().skip(1)));
    if cluster.len() < 3 {
        return;
    }
    if let (Some(&first), Some(&last)) = (cluster.first(), cluster.last()) {
        pairs.push((last, first));
    }
    if cluster.len() >= 4 {
        let from = rng.gen_range(0..cluster.len());
        let to = rng.gen_range(0..cluster.len());
        if let (Some(&first), Some(&second)) = (cluster.get(from), cluster.get(to)) {
            if first != second {
                pairs.push((first, second));
            }
        }
    }
}
