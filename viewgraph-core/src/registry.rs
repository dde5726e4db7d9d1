//! Bijective mapping between caller view ids and dense `0..n` indices.

use std::{collections::HashMap, hash::Hash};

/// Requirements on caller-supplied view identifiers.
///
/// Ids must be hashable for the registry and totally ordered so retained
/// sets iterate deterministically.
pub trait EntityId: Clone + Eq + Hash + Ord {}

impl<T> EntityId for T where T: Clone + Eq + Hash + Ord {}

/// Assigns dense indices to view ids in first-seen order.
///
/// Entries are never removed: the registry maps identities and knows nothing
/// about which views are later retained.
///
/// # Examples
/// ```
/// use viewgraph_core::IndexRegistry;
///
/// let registry = IndexRegistry::from_pairs(&[(7_u32, 3), (3, 9)]);
/// assert_eq!(registry.len(), 3);
/// assert_eq!(registry.index_of(&3), Some(1));
/// assert_eq!(registry.resolve(2), &9);
/// ```
#[derive(Clone, Debug)]
pub struct IndexRegistry<T> {
    index_of: HashMap<T, usize>,
    ids: Vec<T>,
}

impl<T> Default for IndexRegistry<T> {
    fn default() -> Self {
        Self {
            index_of: HashMap::new(),
            ids: Vec::new(),
        }
    }
}

impl<T: EntityId> IndexRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every endpoint of `pairs`, scanning left to right and each
    /// pair's first element before its second.
    #[must_use]
    pub fn from_pairs(pairs: &[(T, T)]) -> Self {
        let mut registry = Self::new();
        for (first, second) in pairs {
            registry.register(first.clone());
            registry.register(second.clone());
        }
        registry
    }

    /// Returns the index of `id`, assigning the next unused one if `id` has not
    /// been seen before.
    pub fn register(&mut self, id: T) -> usize {
        if let Some(&index) = self.index_of.get(&id) {
            return index;
        }
        let index = self.ids.len();
        self.ids.push(id.clone());
        self.index_of.insert(id, index);
        index
    }

    /// Returns the index previously assigned to `id`.
    #[must_use]
    pub fn index_of(&self, id: &T) -> Option<usize> {
        self.index_of.get(id).copied()
    }

    /// Index of an id known to be registered, such as an endpoint of the
    /// pairs this registry was built from.
    pub(crate) fn registered_index(&self, id: &T) -> usize {
        match self.index_of.get(id) {
            Some(&index) => index,
            None => panic!("id missing from a registry built over the same pairs"),
        }
    }

    /// Returns the id registered at `index`, or `None` if it was never
    /// assigned.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.ids.get(index)
    }

    /// Returns the id registered at `index`.
    ///
    /// # Panics
    /// Panics when `index` was never assigned; dense indices only come from
    /// this registry, so a miss is a bookkeeping bug.
    #[must_use]
    pub fn resolve(&self, index: usize) -> &T {
        match self.ids.get(index) {
            Some(id) => id,
            None => panic!(
                "dense index {index} was never registered (registry holds {} ids)",
                self.ids.len()
            ),
        }
    }

    /// Number of registered ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates `(index, id)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.ids.iter().enumerate()
    }
}
