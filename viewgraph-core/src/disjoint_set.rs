//! Union-find (disjoint set union) over dense view indices.
//!
//! Sets are merged by size so `root_size` is always available for the
//! largest-component search. When both sets have the same size the root of
//! the first argument stays the root, which keeps root ids deterministic for
//! a given sequence of unions.

/// Disjoint-set forest with path compression and union by size.
///
/// Indices outside `0..len()` are a caller bug and panic.
///
/// # Examples
/// ```
/// use viewgraph_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(1), sets.find(0));
/// assert_eq!(sets.set_size(1), 2);
/// assert_eq!(sets.set_size(3), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Creates `len` singleton sets, each its own root with size 1.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Number of elements tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root of the set containing `node`, compressing the path
    /// walked to reach it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` (and changes nothing) when both are already in the same
    /// set.
    ///
    /// # Panics
    /// Panics when either index is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        if self.size[left] < self.size[right] {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        self.size[left] += self.size[right];
        true
    }

    /// Cardinality of the set containing `node`.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn set_size(&mut self, node: usize) -> usize {
        let root = self.find(node);
        self.size[root]
    }

    /// Cached cardinality stored at `root`.
    ///
    /// Only meaningful when `root` is a current root; for any other element it
    /// returns the size its set had when it stopped being a root.
    ///
    /// # Panics
    /// Panics when `root >= self.len()`.
    #[must_use]
    pub fn root_size(&self, root: usize) -> usize {
        self.size[root]
    }
}
