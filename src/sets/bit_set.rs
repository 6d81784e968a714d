// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! BitSet type for representing sets of vertices or edge identifiers.
//!
//! A BitSet is a compact representation of a set of small integers using an
//! array of words, where bit i represents the presence of element i. The
//! universe is `0..CAPACITY`; the same type is used for vertex sets and for
//! edge-identifier sets.
//!
//! # Examples
//!
//! ```
//! use lonely_edges::sets::BitSet;
//!
//! let mut set = BitSet::empty();
//! set.insert(0);
//! set.insert(5);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(0));
//! assert!(set.contains(5));
//! assert!(!set.contains(3));
//! assert_eq!(set.first(), Some(0));
//!
//! let rest = BitSet::full(8).difference(&set);
//! assert_eq!(rest.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 6, 7]);
//! ```

use crate::sets::constants::{CAPACITY, SET_WORDS, WORD_BITS};
use std::fmt;

/// A set of integers in `0..CAPACITY` represented as a bitset.
///
/// Bit i (across all words) is set if element i is in the set. Indices at or
/// above CAPACITY cannot be represented; callers validate bounds first (see
/// [`crate::graph::Graph::build`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitSet([u64; SET_WORDS]);

/// A set of vertices.
pub type VertexSet = BitSet;

/// A set of edge identifiers.
pub type EdgeSet = BitSet;

#[inline]
fn locate(index: usize) -> (usize, u64) {
    assert!(
        index < CAPACITY,
        "BitSet index out of range: {} >= {}",
        index,
        CAPACITY
    );
    (index / WORD_BITS, 1u64 << (index % WORD_BITS))
}

impl BitSet {
    /// Create an empty set.
    pub const fn empty() -> Self {
        Self([0; SET_WORDS])
    }

    /// Create the set `{index}`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CAPACITY`.
    pub fn singleton(index: usize) -> Self {
        let mut set = Self::empty();
        set.insert(index);
        set
    }

    /// Create the set `{0, 1, ..., n-1}`.
    ///
    /// # Panics
    ///
    /// Panics if `n > CAPACITY`.
    pub fn full(n: usize) -> Self {
        assert!(n <= CAPACITY, "BitSet size out of range: {} > {}", n, CAPACITY);
        let mut words = [0u64; SET_WORDS];

        // Fill complete words
        let complete_words = n / WORD_BITS;
        for word in words.iter_mut().take(complete_words) {
            *word = u64::MAX;
        }

        // Fill partial last word if needed
        let remaining_bits = n % WORD_BITS;
        if remaining_bits > 0 {
            words[complete_words] = (1u64 << remaining_bits) - 1;
        }

        Self(words)
    }

    /// Complement of this set within `{0, ..., n-1}`.
    pub fn complement(&self, n: usize) -> Self {
        Self::full(n).difference(self)
    }

    /// Check if the set contains `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CAPACITY`.
    pub fn contains(&self, index: usize) -> bool {
        let (word, mask) = locate(index);
        self.0[word] & mask != 0
    }

    /// Insert `index` into the set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CAPACITY`.
    pub fn insert(&mut self, index: usize) {
        let (word, mask) = locate(index);
        self.0[word] |= mask;
    }

    /// Remove `index` from the set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= CAPACITY`.
    pub fn remove(&mut self, index: usize) {
        let (word, mask) = locate(index);
        self.0[word] &= !mask;
    }

    /// Get the number of elements in the set (population count).
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    /// Smallest element of the set, if any.
    pub fn first(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, &w)| w != 0)
            .map(|(i, w)| i * WORD_BITS + w.trailing_zeros() as usize)
    }

    /// Get a reference to the underlying bitset words.
    pub fn words(&self) -> &[u64; SET_WORDS] {
        &self.0
    }

    /// Iterate over all elements of the set.
    ///
    /// Elements are yielded in ascending order (0, 1, 2, ...).
    pub fn iter(&self) -> BitSetIter {
        BitSetIter {
            words: self.0,
            word_idx: 0,
        }
    }

    /// Compute the union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = [0u64; SET_WORDS];
        for i in 0..SET_WORDS {
            result[i] = self.0[i] | other.0[i];
        }
        Self(result)
    }

    /// Compute the intersection of two sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = [0u64; SET_WORDS];
        for i in 0..SET_WORDS {
            result[i] = self.0[i] & other.0[i];
        }
        Self(result)
    }

    /// Compute the difference of two sets (self - other).
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = [0u64; SET_WORDS];
        for i in 0..SET_WORDS {
            result[i] = self.0[i] & !other.0[i];
        }
        Self(result)
    }
}

/// Iterator over the elements of a BitSet, in ascending order.
#[derive(Debug, Clone)]
pub struct BitSetIter {
    words: [u64; SET_WORDS],
    word_idx: usize,
}

impl Iterator for BitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < SET_WORDS {
            let word = self.words[self.word_idx];
            if word != 0 {
                let bit = word.trailing_zeros() as usize;
                // Clear lowest set bit
                self.words[self.word_idx] = word & (word - 1);
                return Some(self.word_idx * WORD_BITS + bit);
            }
            self.word_idx += 1;
        }
        None
    }
}

impl IntoIterator for BitSet {
    type Item = usize;
    type IntoIter = BitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &BitSet {
    type Item = usize;
    type IntoIter = BitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::empty();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl From<&[usize]> for BitSet {
    fn from(indices: &[usize]) -> Self {
        indices.iter().copied().collect()
    }
}

impl fmt::Display for BitSet {
    /// Format a set as "{0, 5, 12}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for index in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        write!(f, "}}")
    }
}
