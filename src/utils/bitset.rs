//! Fixed-capacity vertex set.
//!
//! Used wherever an algorithm needs a set of vertices over `[0, V)`: visited
//! marks inside traversals, the reachable set of a shortest-path run and the
//! articulation points of an undirected graph.
//!
//! # Example
//!
//! ```rust
//! use graphscope::BitSet;
//!
//! let mut set = BitSet::new(100);
//! assert!(set.insert(0));
//! assert!(set.insert(64));
//! assert!(!set.insert(64));
//!
//! assert!(set.contains(64));
//! assert_eq!(set.count(), 2);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 64]);
//! ```

use std::fmt;

use crate::graph::NodeId;

const WORD_BITS: usize = u64::BITS as usize;

/// A bit vector holding a subset of `0..capacity`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitSet {
    /// Set bits, 64 indices per word
    words: Vec<u64>,
    /// Number of addressable indices
    capacity: usize,
}

impl BitSet {
    /// Creates an empty set able to hold the indices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        BitSet {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
        }
    }

    /// Returns the number of addressable indices.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if no index is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Adds `index` to the set, returning `true` if it was not present before.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.capacity, "index {index} out of bounds");
        let (word, mask) = Self::locate(index);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// Removes `index` from the set, returning `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn remove(&mut self, index: usize) -> bool {
        assert!(index < self.capacity, "index {index} out of bounds");
        let (word, mask) = Self::locate(index);
        let present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        present
    }

    /// Returns `true` if `index` is in the set.
    ///
    /// Indices beyond the capacity are never members.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    /// Returns `true` if the vertex is in the set.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.contains(node.index())
    }

    /// Returns the number of indices in the set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Removes every index.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Adds every index of `other`, returning `true` if `self` changed.
    ///
    /// # Panics
    ///
    /// Panics if the two sets have different capacities.
    pub fn union_with(&mut self, other: &Self) -> bool {
        assert_eq!(
            self.capacity, other.capacity,
            "bit sets must have the same capacity"
        );
        let mut changed = false;
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            let before = *mine;
            *mine |= *theirs;
            changed |= before != *mine;
        }
        changed
    }

    /// Returns the set indices in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Returns the set indices as vertices, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().map(NodeId::new)
    }

    fn locate(index: usize) -> (usize, u64) {
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ascending iterator over the members of a [`BitSet`].
pub struct Iter<'a> {
    words: &'a [u64],
    word_index: usize,
    /// Bits of the current word not yet yielded
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                // clear lowest set bit
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
