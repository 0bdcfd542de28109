//! `FixedBitSet` struct and core implementation.

use alloc::{boxed::Box, vec::Vec};
use core::{marker::PhantomData, mem};

use crate::{
    bits,
    iter::Members,
    macros::{bitpos, precondition},
    traits::AllocError,
    word::{Element, Word},
};

/// A set of small integers drawn from a universe fixed at construction.
///
/// # Overview
///
/// Membership is stored one bit per element in a single heap buffer of
/// [`Word`]s sized to the universe. Element `e` lives in word
/// `e / W::BITS`, bit `e % W::BITS`. The buffer never grows or shrinks, so
/// no operation other than construction and [`Clone`] allocates.
///
/// - [`contains`](Self::contains), [`insert`](Self::insert) and
///   [`remove`](Self::remove) are O(1)
/// - [`union_with`](Self::union_with),
///   [`intersect_with`](Self::intersect_with),
///   [`complement`](Self::complement), [`copy_from`](Self::copy_from),
///   [`clear`](Self::clear) and [`is_empty`](Self::is_empty) are O(words)
/// - [`iter`](Self::iter) is O(words + members)
///
/// # Preconditions
///
/// Elements must lie in `0..universe_size()`, and binary operations require
/// both sets to share the same universe. Breaking either contract is a bug in
/// the caller: it panics in debug builds or with the `checked` feature, and is
/// unchecked otherwise.
///
/// # Tail bits
///
/// When the universe is not a multiple of the word width the last word has
/// padding bits that name no element. [`complement`](Self::complement) flips
/// them along with everything else and [`is_empty`](Self::is_empty) does not
/// look past them. Iteration, [`len`](Self::len), equality and hashing mask
/// them out.
///
/// # Examples
///
/// ```
/// use fixed_bitset::FixedBitSet;
///
/// let mut set = FixedBitSet::<u32, u32>::new(70)?;
/// set.insert(0);
/// set.insert(31);
/// set.insert(32);
/// set.insert(69);
///
/// assert!(set.contains(69));
/// assert!(!set.contains(68));
/// assert_eq!(set.iter().collect::<Vec<_>>(), [0, 31, 32, 69]);
///
/// set.clear();
/// assert!(set.is_empty());
/// # Ok::<(), fixed_bitset::AllocError>(())
/// ```
pub struct FixedBitSet<E, W = u64> {
    pub(crate) words: Box<[W]>,
    pub(crate) universe: usize,
    pub(crate) tail_mask: W,
    pub(crate) _element: PhantomData<fn(E) -> E>,
}

/// A [`FixedBitSet`] packed into 32-bit words.
pub type FixedBitSet32<E> = FixedBitSet<E, u32>;
/// A [`FixedBitSet`] packed into 64-bit words.
pub type FixedBitSet64<E> = FixedBitSet<E, u64>;

/// Allocates `count` zeroed words, reporting failure instead of aborting.
pub(crate) fn alloc_words<W: Word>(count: usize) -> Result<Box<[W]>, AllocError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(count)
        .map_err(|_| AllocError::AllocationFailed { words: count })?;
    vec.resize(count, W::ZERO);
    Ok(vec.into_boxed_slice())
}

impl<E: Element, W: Word> FixedBitSet<E, W> {
    /// Creates an empty set able to hold the elements `0..universe_size`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::UniverseTooLarge`] if the largest element of the
    /// universe cannot be named by `E`, and
    /// [`AllocError::AllocationFailed`] if the storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::{AllocError, FixedBitSet};
    ///
    /// let set = FixedBitSet::<u16, u32>::new(100)?;
    /// assert_eq!(set.universe_size(), 100);
    /// assert_eq!(set.word_count(), 4);
    /// assert!(set.is_empty());
    ///
    /// let err = FixedBitSet::<u8, u32>::new(300).unwrap_err();
    /// assert_eq!(err, AllocError::UniverseTooLarge { universe: 300, max: 256 });
    /// # Ok::<(), AllocError>(())
    /// ```
    pub fn new(universe_size: usize) -> Result<Self, AllocError> {
        if universe_size > 0 && universe_size - 1 > E::MAX_INDEX {
            return Err(AllocError::UniverseTooLarge {
                universe: universe_size,
                max: E::MAX_INDEX.saturating_add(1),
            });
        }

        Ok(Self {
            words: alloc_words(bits::word_count::<W>(universe_size))?,
            universe: universe_size,
            tail_mask: bits::tail_mask(universe_size),
            _element: PhantomData,
        })
    }

    /// Returns the number of elements in the universe, i.e. one past the
    /// largest element the set can hold.
    #[must_use]
    #[inline(always)]
    pub fn universe_size(&self) -> usize {
        self.universe
    }

    /// Returns the number of storage words.
    #[must_use]
    #[inline(always)]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the mask of valid bits in the last storage word.
    #[must_use]
    #[inline(always)]
    pub fn tail_mask(&self) -> W {
        self.tail_mask
    }

    /// Returns `true` if `self` and `other` are defined over the same
    /// universe, which is what [`copy_from`](Self::copy_from),
    /// [`union_with`](Self::union_with) and
    /// [`intersect_with`](Self::intersect_with) require.
    #[must_use]
    #[inline]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.words.len() == other.words.len()
            && self.universe == other.universe
            && self.tail_mask == other.tail_mask
    }

    /// Returns the raw storage words.
    ///
    /// Padding bits above the universe in the last word are unspecified:
    /// [`complement`](Self::complement) sets them. Use
    /// [`masked_words`](Self::masked_words) for a canonical view.
    #[must_use]
    #[inline]
    pub fn as_words(&self) -> &[W] {
        &self.words
    }

    /// Returns the storage words with the padding bits of the last word
    /// cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32, u8>::new(10)?;
    /// set.complement();
    /// assert_eq!(set.as_words(), [0xff, 0xff]);
    /// assert_eq!(set.masked_words().collect::<Vec<_>>(), [0xff, 0b11]);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    pub fn masked_words(&self) -> impl ExactSizeIterator<Item = W> + '_ {
        let last = self.words.len().wrapping_sub(1);
        let mask = self.tail_mask;
        self.words
            .iter()
            .enumerate()
            .map(move |(i, &w)| if i == last { w & mask } else { w })
    }

    #[inline(always)]
    fn locate(&self, element: E) -> (usize, u32) {
        let idx = element.to_index();
        precondition!(
            idx < self.universe,
            "element {idx} out of range for universe of {} elements",
            self.universe
        );
        bitpos!(idx, W)
    }

    /// Returns `true` if `element` is a member of the set.
    ///
    /// # Panics
    ///
    /// In checked builds, if `element` is outside the universe.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32>::new(128)?;
    /// set.insert(42);
    ///
    /// assert!(set.contains(42));
    /// assert!(!set.contains(43));
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn contains(&self, element: E) -> bool {
        let (wi, bi) = self.locate(element);
        bits::test_bit(self.words[wi], bi)
    }

    /// Adds `element` to the set.
    ///
    /// Returns `true` if the element was not already a member.
    ///
    /// # Panics
    ///
    /// In checked builds, if `element` is outside the universe.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32>::new(16)?;
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[inline]
    pub fn insert(&mut self, element: E) -> bool {
        let (wi, bi) = self.locate(element);
        let word = &mut self.words[wi];
        let prev = bits::test_bit(*word, bi);
        bits::set_bit(word, bi);
        !prev
    }

    /// Removes `element` from the set.
    ///
    /// Returns `true` if the element was a member.
    ///
    /// # Panics
    ///
    /// In checked builds, if `element` is outside the universe.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32>::new(16)?;
    /// set.insert(3);
    /// assert!(set.remove(3));
    /// assert!(!set.remove(3));
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[inline]
    pub fn remove(&mut self, element: E) -> bool {
        let (wi, bi) = self.locate(element);
        let word = &mut self.words[wi];
        let prev = bits::test_bit(*word, bi);
        bits::clear_bit(word, bi);
        prev
    }

    /// Returns `true` if no storage bit is set.
    ///
    /// This reads raw words and does not mask the padding above the
    /// universe, so it reports `false` after [`complement`](Self::complement)
    /// even for a set whose universe was fully populated beforehand.
    ///
    /// Time complexity: O(n) where n is the number of words.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == W::ZERO)
    }

    /// Returns the number of members.
    ///
    /// Time complexity: O(n) where n is the number of words.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32, u32>::new(70)?;
    /// assert_eq!(set.len(), 0);
    ///
    /// set.complement();
    /// assert_eq!(set.len(), 70);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.masked_words().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the smallest member, or [`None`] if the set has no members.
    #[must_use]
    pub fn first(&self) -> Option<E> {
        self.iter().next()
    }

    /// Returns an iterator over the members in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u16, u32>::new(100)?;
    /// set.insert(64);
    /// set.insert(5);
    ///
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(5));
    /// assert_eq!(iter.next(), Some(64));
    /// assert_eq!(iter.next(), None);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[must_use]
    pub fn iter(&self) -> Members<'_, E, W> {
        Members::new(&self.words, self.tail_mask)
    }

    /// Calls `visit` on each member in ascending order until it returns
    /// `false`.
    ///
    /// Returns `true` if every member was visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32>::new(10)?;
    /// set.insert(2);
    /// set.insert(7);
    ///
    /// let mut seen = Vec::new();
    /// let finished = set.for_each_member(|e| {
    ///     seen.push(e);
    ///     false
    /// });
    /// assert!(!finished);
    /// assert_eq!(seen, [2]);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    pub fn for_each_member<F>(&self, visit: F) -> bool
    where
        F: FnMut(E) -> bool,
    {
        self.iter().all(visit)
    }

    /// Moves the contents out, leaving `self` as the empty set over an empty
    /// universe.
    ///
    /// The returned set owns the storage `self` had; no bits are copied.
    /// Afterwards `self` can only be dropped or overwritten meaningfully: any
    /// element operation on it is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut src = FixedBitSet::<u32>::new(10)?;
    /// src.insert(4);
    ///
    /// let dst = src.take();
    /// assert!(dst.contains(4));
    /// assert_eq!(src.universe_size(), 0);
    /// assert_eq!(src.word_count(), 0);
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    #[must_use = "use `drop` or assignment to discard the set"]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let set = FixedBitSet::<u32, u32>::new(70).unwrap();
        assert_eq!(set.word_count(), 3);
        assert_eq!(set.tail_mask(), 0b11_1111);

        let set = FixedBitSet::<u32, u32>::new(64).unwrap();
        assert_eq!(set.word_count(), 2);
        assert_eq!(set.tail_mask(), u32::MAX);

        let set = FixedBitSet::<u32, u32>::new(0).unwrap();
        assert_eq!(set.word_count(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_word_addressing() {
        let mut set = FixedBitSet::<u32, u32>::new(70).unwrap();
        set.insert(0);
        set.insert(31);
        set.insert(32);
        set.insert(69);
        assert_eq!(&*set.words, [0x8000_0001, 1, 1 << 5]);
    }

    #[test]
    fn test_element_type_bound() {
        assert!(FixedBitSet::<u8, u64>::new(256).is_ok());
        assert_eq!(
            FixedBitSet::<u8, u64>::new(257).err(),
            Some(AllocError::UniverseTooLarge {
                universe: 257,
                max: 256
            })
        );
    }

    #[test]
    fn test_allocation_failure_is_reported() {
        let err = FixedBitSet::<usize, u64>::new(usize::MAX).err();
        assert!(matches!(err, Some(AllocError::AllocationFailed { .. })));
    }
}
