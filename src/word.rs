//! Storage word and element index abstractions.
//!
//! [`FixedBitSet`](crate::FixedBitSet) is generic over two unsigned integer
//! types: the [`Word`] it packs membership bits into, and the [`Element`]
//! type callers use to name members. Both traits are sealed and implemented
//! for the primitive unsigned integers.

use core::{
    fmt,
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned machine word used as the storage unit of a bit set.
///
/// The width of the word fixes the addressing arithmetic: element `e` lives
/// in word `e / BITS` at bit `e % BITS`.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitAndAssign
    + BitOr<Output = Self>
    + BitOrAssign
    + Not<Output = Self>
{
    /// Number of bits in the word.
    const BITS: u32;
    /// The word with no bits set.
    const ZERO: Self;
    /// The word with every bit set.
    const ONES: Self;

    /// Returns a word with only bit `pos` set.
    fn bit(pos: u32) -> Self;

    /// Returns a word with the low `n` bits set. `n` must not exceed
    /// [`BITS`](Self::BITS).
    fn low_mask(n: u32) -> Self;

    /// Index of the lowest set bit. Equals [`BITS`](Self::BITS) for zero.
    fn trailing_zeros(self) -> u32;

    /// Number of set bits.
    fn count_ones(self) -> u32;
}

/// An unsigned integer type used to name the members of a set.
pub trait Element: sealed::Sealed + Copy + Ord + fmt::Debug {
    /// Largest index representable by this type.
    const MAX_INDEX: usize;

    /// Widens the element to a storage index.
    fn to_index(self) -> usize;

    /// Narrows a storage index back to an element. The caller guarantees
    /// `index <= MAX_INDEX`.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_word {
    ($($t:ty)+) => {
        $(
        impl sealed::Sealed for $t {}

        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONES: Self = <$t>::MAX;

            #[inline(always)]
            fn bit(pos: u32) -> Self {
                1 << pos
            }

            #[inline(always)]
            fn low_mask(n: u32) -> Self {
                if n >= <$t>::BITS {
                    <$t>::MAX
                } else {
                    (1 << n) - 1
                }
            }

            #[inline(always)]
            fn trailing_zeros(self) -> u32 {
                <$t>::trailing_zeros(self)
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$t>::count_ones(self)
            }
        }
        )+
    };
}

impl_word!(u8 u16 u32 u64 u128 usize);

macro_rules! impl_element {
    ($($t:ty)+) => {
        $(
        impl Element for $t {
            const MAX_INDEX: usize = if (<$t>::MAX as u128) > (usize::MAX as u128) {
                usize::MAX
            } else {
                <$t>::MAX as usize
            };

            #[inline(always)]
            fn to_index(self) -> usize {
                self as usize
            }

            #[inline(always)]
            fn from_index(index: usize) -> Self {
                debug_assert!(index <= Self::MAX_INDEX);
                index as $t
            }
        }
        )+
    };
}

impl_element!(u8 u16 u32 u64 usize);
