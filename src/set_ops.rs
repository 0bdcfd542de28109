//! Implementations of set operations for `FixedBitSet`.

use crate::{
    FixedBitSet, bits,
    macros::precondition,
    word::{Element, Word},
};

impl<E: Element, W: Word> FixedBitSet<E, W> {
    #[inline(always)]
    fn check_compatible(&self, other: &Self, op: &str) {
        precondition!(
            self.is_compatible(other),
            "{op}: universe mismatch ({} elements in {} words vs {} elements in {} words)",
            self.universe,
            self.words.len(),
            other.universe,
            other.words.len()
        );
    }

    /// Removes every member.
    ///
    /// Time complexity: O(n) where n is the number of words.
    #[inline]
    pub fn clear(&mut self) {
        bits::clear_all(&mut self.words);
    }

    /// Replaces the contents of `self` with those of `other` without
    /// reallocating.
    ///
    /// # Panics
    ///
    /// In checked builds, if the two sets have different universes. Use
    /// [`Clone::clone_from`] to copy across universes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut a = FixedBitSet::<u32>::new(10)?;
    /// let mut b = FixedBitSet::<u32>::new(10)?;
    /// a.insert(1);
    /// b.insert(2);
    ///
    /// a.copy_from(&b);
    /// assert!(!a.contains(1));
    /// assert!(a.contains(2));
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[inline]
    pub fn copy_from(&mut self, other: &Self) {
        self.check_compatible(other, "copy_from");
        self.words.copy_from_slice(&other.words);
    }

    /// Adds every member of `other` to `self`.
    ///
    /// This sets each word of `self` to `self[i] | other[i]`.
    ///
    /// # Panics
    ///
    /// In checked builds, if the two sets have different universes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut a = FixedBitSet::<u32>::new(10)?;
    /// let mut b = FixedBitSet::<u32>::new(10)?;
    /// for e in [1, 2, 3] {
    ///     a.insert(e);
    /// }
    /// for e in [3, 4, 5] {
    ///     b.insert(e);
    /// }
    ///
    /// a.union_with(&b);
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        self.check_compatible(other, "union_with");
        bits::or_assign(&mut self.words, &other.words);
    }

    /// Removes every member of `self` that is not in `other`.
    ///
    /// This sets each word of `self` to `self[i] & other[i]`.
    ///
    /// # Panics
    ///
    /// In checked builds, if the two sets have different universes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut a = FixedBitSet::<u32>::new(10)?;
    /// let mut b = FixedBitSet::<u32>::new(10)?;
    /// for e in [1, 2, 3] {
    ///     a.insert(e);
    /// }
    /// for e in [3, 4, 5] {
    ///     b.insert(e);
    /// }
    ///
    /// a.intersect_with(&b);
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [3]);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[inline]
    pub fn intersect_with(&mut self, other: &Self) {
        self.check_compatible(other, "intersect_with");
        bits::and_assign(&mut self.words, &other.words);
    }

    /// Replaces the set with its complement relative to the universe.
    ///
    /// Every storage bit is flipped, including the padding above the
    /// universe in the last word. Membership queries and iteration are
    /// unaffected by that padding; [`is_empty`](Self::is_empty) is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32, u32>::new(5)?;
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// set.complement();
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [0, 2, 4]);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[inline]
    pub fn complement(&mut self) {
        for word in self.words.iter_mut() {
            *word = !*word;
        }
    }

    /// Returns `true` if every member of `self` is also in `other`.
    ///
    /// # Panics
    ///
    /// In checked builds, if the two sets have different universes.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.check_compatible(other, "is_subset");
        self.masked_words()
            .zip(other.masked_words())
            .all(|(a, b)| a & !b == W::ZERO)
    }

    /// Returns `true` if `self` and `other` have no members in common.
    ///
    /// # Panics
    ///
    /// In checked builds, if the two sets have different universes.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.check_compatible(other, "is_disjoint");
        self.masked_words()
            .zip(other.masked_words())
            .all(|(a, b)| a & b == W::ZERO)
    }
}
