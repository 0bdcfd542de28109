//! Word-level bit primitives.
//!
//! These operate on raw [`Word`] values and slices and know nothing about
//! universes or elements. [`FixedBitSet`](crate::FixedBitSet) is built on top
//! of them, but they are usable on their own.

use crate::word::Word;

/// Number of words needed to hold `universe` bits.
#[inline(always)]
#[must_use]
pub const fn word_count<W: Word>(universe: usize) -> usize {
    universe.div_ceil(W::BITS as usize)
}

/// Mask selecting the valid bits of the last storage word for a universe of
/// `universe` bits. All bits are set when `universe` is an exact multiple of
/// the word width.
#[inline]
#[must_use]
pub fn tail_mask<W: Word>(universe: usize) -> W {
    match (universe % W::BITS as usize) as u32 {
        0 => W::ONES,
        rem => W::low_mask(rem),
    }
}

/// Returns whether bit `pos` of `word` is set.
#[inline(always)]
#[must_use]
pub fn test_bit<W: Word>(word: W, pos: u32) -> bool {
    word & W::bit(pos) != W::ZERO
}

/// Sets bit `pos` of `word`.
#[inline(always)]
pub fn set_bit<W: Word>(word: &mut W, pos: u32) {
    *word |= W::bit(pos);
}

/// Clears bit `pos` of `word`.
#[inline(always)]
pub fn clear_bit<W: Word>(word: &mut W, pos: u32) {
    *word &= !W::bit(pos);
}

/// Zeroes every word in `words`.
#[inline]
pub fn clear_all<W: Word>(words: &mut [W]) {
    words.fill(W::ZERO);
}

/// `dst[i] |= src[i]` for every word. Both slices must have the same length.
#[inline]
pub fn or_assign<W: Word>(dst: &mut [W], src: &[W]) {
    debug_assert_eq!(dst.len(), src.len(), "word vectors differ in length");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d |= s;
    }
}

/// `dst[i] &= src[i]` for every word. Both slices must have the same length.
#[inline]
pub fn and_assign<W: Word>(dst: &mut [W], src: &[W]) {
    debug_assert_eq!(dst.len(), src.len(), "word vectors differ in length");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d &= s;
    }
}

/// Position of the lowest set bit of `word`, or [`None`] if it is zero.
///
/// # Examples
///
/// ```
/// use fixed_bitset::bits::find_lowest_set_bit;
///
/// assert_eq!(find_lowest_set_bit(0b1010_0000u32), Some(5));
/// assert_eq!(find_lowest_set_bit(0u64), None);
/// ```
#[inline(always)]
#[must_use]
pub fn find_lowest_set_bit<W: Word>(word: W) -> Option<u32> {
    if word == W::ZERO {
        None
    } else {
        Some(word.trailing_zeros())
    }
}
