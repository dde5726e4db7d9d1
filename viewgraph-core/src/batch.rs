//! Independent filter runs spread over rayon's thread pool.

use rayon::prelude::*;

use crate::{
    filter::{Retention, ViewGraphFilter},
    registry::EntityId,
};

impl ViewGraphFilter {
    /// Runs the filter on every pair list in `batches`, in parallel.
    ///
    /// Runs share nothing mutable; the outcome at position `i` belongs to
    /// `batches[i]`.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use viewgraph_core::ViewGraphFilter;
    ///
    /// let batches = vec![vec![(0, 1), (1, 0)], vec![(5, 6)]];
    /// let outcomes = ViewGraphFilter::default().run_many(&batches);
    /// assert_eq!(outcomes[0].retained(), &BTreeSet::from([0, 1]));
    /// assert_eq!(outcomes[1].retained(), &BTreeSet::from([5]));
    /// ```
    #[must_use]
    pub fn run_many<T>(&self, batches: &[Vec<(T, T)>]) -> Vec<Retention<T>>
    where
        T: EntityId + Send + Sync,
    {
        batches.par_iter().map(|pairs| self.run(pairs)).collect()
    }
}
