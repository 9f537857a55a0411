//! A bit vector used as the node-set abstraction of every algorithm.
//!
//! This module provides a compact, fixed-capacity bit set indexed by node index.
//! It backs the working sets of the clique engine (R, P and X), the visited
//! markers of the traversals and the deduplication of condensation arcs.
//!
//! # Features
//!
//! - Efficient storage: 64 nodes per word
//! - O(1) membership test, insert and remove
//! - Word-level scans for the next member at or after a position
//! - Set algebra: union, intersection, difference (AND-NOT) and complement
//! - Iteration over members in ascending order
//!
//! # Example
//!
//! ```rust
//! use adjgraph::utils::BitSet;
//!
//! let mut set = BitSet::new(100);
//! set.insert(0);
//! set.insert(50);
//! set.insert(99);
//!
//! assert!(set.contains(50));
//! assert_eq!(set.count(), 3);
//! assert_eq!(set.next_set(1), Some(50));
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 50, 99]);
//! ```

const WORD_BITS: usize = 64;

/// A fixed-capacity set of small integers, stored one bit per member.
///
/// The capacity is chosen at construction and all operations taking an index
/// panic when the index is outside of it. Binary set operations require both
/// operands to have the same capacity.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// The bits, stored as a vector of words.
    words: Vec<u64>,
    /// The number of addressable bits.
    len: usize,
}

impl BitSet {
    /// Creates a new empty bit set with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            len: capacity,
        }
    }

    /// Creates a new bit set with every bit in `0..capacity` set.
    #[must_use]
    pub fn full(capacity: usize) -> Self {
        let mut set = Self {
            words: vec![u64::MAX; capacity.div_ceil(WORD_BITS)],
            len: capacity,
        };
        set.trim_tail();
        set
    }

    /// Creates a bit set of the given capacity containing `indices`.
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= capacity`.
    #[must_use]
    pub fn from_indices<I>(capacity: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::new(capacity);
        set.extend(indices);
        set
    }

    /// Returns the capacity of this bit set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bit set has no bits set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn insert(&mut self, index: usize) {
        assert!(index < self.len, "index out of bounds");
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Clears the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn remove(&mut self, index: usize) {
        assert!(index < self.len, "index out of bounds");
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.len, "index out of bounds");
        (self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS))) != 0
    }

    /// Returns the number of bits set (population count).
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Sets all bits.
    pub fn fill(&mut self) {
        self.words.fill(u64::MAX);
        self.trim_tail();
    }

    /// Returns the smallest member, or `None` if the set is empty.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.next_set(0)
    }

    /// Returns the smallest member that is `>= from`, or `None` if there is none.
    ///
    /// `from` may be anywhere, including past the capacity, which simply yields
    /// `None`. This is the primitive every ascending scan in the crate is built on.
    #[must_use]
    pub fn next_set(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }

        let mut word_idx = from / WORD_BITS;
        // Mask off the bits below `from` in the first word
        let mut word = self.words[word_idx] & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(word_idx * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_idx += 1;
            word = *self.words.get(word_idx)?;
        }
    }

    /// Inverts every bit in `0..len()` in place.
    pub fn complement(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.trim_tail();
    }

    /// Computes the union with another bit set (in place).
    ///
    /// Returns `true` if `self` changed.
    pub fn union_with(&mut self, other: &Self) -> bool {
        self.combine(other, |a, b| a | b)
    }

    /// Computes the intersection with another bit set (in place).
    ///
    /// Returns `true` if `self` changed.
    pub fn intersect_with(&mut self, other: &Self) -> bool {
        self.combine(other, |a, b| a & b)
    }

    /// Computes the difference with another bit set (in place).
    ///
    /// Removes all bits that are set in `other` from `self` (AND-NOT).
    /// Returns `true` if `self` changed.
    pub fn difference_with(&mut self, other: &Self) -> bool {
        self.combine(other, |a, b| a & !b)
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            set: self,
            next: 0,
        }
    }

    fn combine(&mut self, other: &Self, op: impl Fn(u64, u64) -> u64) -> bool {
        assert_eq!(self.len, other.len, "bit sets must have same length");
        let mut changed = false;
        for (a, &b) in self.words.iter_mut().zip(other.words.iter()) {
            let old = *a;
            *a = op(old, b);
            changed |= old != *a;
        }
        changed
    }

    /// Clears the bits of the last word that lie beyond `len`.
    fn trim_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = BitSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set bits in a `BitSet`, in ascending order.
pub struct BitSetIter<'a> {
    set: &'a BitSet,
    next: usize,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.set.next_set(self.next)?;
        self.next = found + 1;
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitset_basic() {
        let mut bs = BitSet::new(100);
        assert!(bs.is_empty());
        assert_eq!(bs.count(), 0);

        bs.insert(0);
        bs.insert(50);
        bs.insert(99);

        assert!(!bs.is_empty());
        assert_eq!(bs.count(), 3);
        assert!(bs.contains(0));
        assert!(bs.contains(50));
        assert!(bs.contains(99));
        assert!(!bs.contains(1));
    }

    #[test]
    fn test_bitset_remove() {
        let mut bs = BitSet::new(100);
        bs.insert(42);
        assert!(bs.contains(42));

        bs.remove(42);
        assert!(!bs.contains(42));
        assert!(bs.is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_bitset_insert_out_of_bounds() {
        let mut bs = BitSet::new(10);
        bs.insert(10);
    }

    #[test]
    fn test_bitset_full_trims_tail() {
        let bs = BitSet::full(100);
        assert_eq!(bs.count(), 100);
        assert_eq!(bs.next_set(99), Some(99));
        assert_eq!(bs.next_set(100), None);

        // Exact multiple of the word size has no tail to trim
        assert_eq!(BitSet::full(128).count(), 128);
        assert_eq!(BitSet::full(0).count(), 0);
    }

    #[test]
    fn test_bitset_next_set() {
        let bs = BitSet::from_indices(200, [3, 64, 65, 190]);

        assert_eq!(bs.first(), Some(3));
        assert_eq!(bs.next_set(0), Some(3));
        assert_eq!(bs.next_set(3), Some(3));
        assert_eq!(bs.next_set(4), Some(64));
        assert_eq!(bs.next_set(65), Some(65));
        assert_eq!(bs.next_set(66), Some(190));
        assert_eq!(bs.next_set(191), None);
        assert_eq!(bs.next_set(1000), None);

        assert_eq!(BitSet::new(200).first(), None);
        assert_eq!(BitSet::new(0).first(), None);
    }

    #[test]
    fn test_bitset_complement() {
        let mut bs = BitSet::from_indices(70, [0, 69]);
        bs.complement();

        assert_eq!(bs.count(), 68);
        assert!(!bs.contains(0));
        assert!(!bs.contains(69));
        assert!(bs.contains(1));
        assert!(bs.contains(68));

        bs.complement();
        assert_eq!(bs.iter().collect::<Vec<_>>(), vec![0, 69]);
    }

    #[test]
    fn test_bitset_union() {
        let mut a = BitSet::from_indices(100, [0, 1]);
        let b = BitSet::from_indices(100, [1, 2]);

        assert!(a.union_with(&b));
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![0, 1, 2]);

        // Second union changes nothing
        assert!(!a.union_with(&b));
    }

    #[test]
    fn test_bitset_intersect() {
        let mut a = BitSet::from_indices(100, [0, 1, 2]);
        let b = BitSet::from_indices(100, [1, 2, 3]);

        assert!(a.intersect_with(&b));
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_bitset_difference() {
        let mut a = BitSet::from_indices(100, [0, 1, 2]);
        let b = BitSet::from_indices(100, [1]);

        assert!(a.difference_with(&b));
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![0, 2]);
        assert!(!a.difference_with(&b));
    }

    #[test]
    #[should_panic(expected = "bit sets must have same length")]
    fn test_bitset_mismatched_lengths() {
        let mut a = BitSet::new(10);
        a.union_with(&BitSet::new(11));
    }

    #[test]
    fn test_bitset_iter_across_words() {
        let indices = [5, 63, 64, 127, 128, 199];
        let bs = BitSet::from_indices(200, indices);
        assert_eq!(bs.iter().collect::<Vec<_>>(), indices.to_vec());
        assert_eq!((&bs).into_iter().count(), indices.len());
    }

    #[test]
    fn test_bitset_clear_fill() {
        let mut bs = BitSet::new(100);
        bs.insert(50);
        assert_eq!(bs.count(), 1);

        bs.clear();
        assert!(bs.is_empty());

        bs.fill();
        assert_eq!(bs.count(), 100);
    }

    #[test]
    fn test_bitset_debug() {
        let bs = BitSet::from_indices(10, [1, 5]);
        assert_eq!(format!("{bs:?}"), "{1, 5}");
    }
}
