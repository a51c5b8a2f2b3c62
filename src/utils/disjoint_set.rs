//! Union-find over the dense indices `0..n`.
//!
//! Path compression plus union by rank gives near-constant amortised
//! `find`/`union`. Used by Kruskal and by [`connected_components`](crate::connected_components).

use crate::{Error, Result};

/// A disjoint-set forest over `0..len`.
///
/// Sets only ever merge. [`find`](Self::find), [`union`](Self::union) and
/// [`same_set`](Self::same_set) panic on indices outside `0..len`; the engine
/// validates vertices before they reach them. Callers holding untrusted
/// indices use the `try_` variants, which return [`Error::IndexOutOfRange`].
///
/// # Examples
///
/// ```rust
/// use graphscope::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
///
/// assert!(sets.same_set(0, 1));
/// assert!(!sets.same_set(1, 2));
/// assert_eq!(sets.set_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointer of each element; roots point at themselves
    parent: Vec<usize>,
    /// Upper bound on the height of each root's tree
    rank: Vec<u8>,
    /// Number of disjoint sets
    sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.len() {
            Ok(())
        } else {
            Err(Error::out_of_range(x, self.len()))
        }
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every element on the walked path is re-pointed at the root.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.len()`.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.rank[root_a] < self.rank[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        if self.rank[root_a] == self.rank[root_b] {
            self.rank[root_a] = self.rank[root_a].saturating_add(1);
        }

        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` are in the same set.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= self.len()`.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Checked [`find`](Self::find).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `x >= self.len()`.
    pub fn try_find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find(x))
    }

    /// Checked [`union`](Self::union); nothing is merged on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is `>= self.len()`.
    pub fn try_union(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.union(a, b))
    }

    /// Checked [`same_set`](Self::same_set).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if either index is `>= self.len()`.
    pub fn try_same_set(&mut self, a: usize, b: usize) -> Result<bool> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.same_set(a, b))
    }
}
