//! Trait implementations for `FixedBitSet`.

use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{
    FixedBitSet,
    bitset::alloc_words,
    word::{Element, Word},
};

/// Errors that can occur when allocating storage for a [`FixedBitSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The storage buffer could not be allocated.
    AllocationFailed {
        /// Number of words requested
        words: usize,
    },

    /// The universe contains elements the element type cannot name.
    UniverseTooLarge {
        /// Requested universe size
        universe: usize,
        /// Largest universe the element type supports
        max: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { words } => {
                write!(f, "failed to allocate storage for {words} words")
            }
            Self::UniverseTooLarge { universe, max } => {
                write!(
                    f,
                    "universe of {universe} elements exceeds the {max} the element type can name"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AllocError {}

impl<E, W> Default for FixedBitSet<E, W>
where
    W: Word,
{
    /// Returns a set over the empty universe. It owns no storage.
    fn default() -> Self {
        Self {
            words: Default::default(),
            universe: 0,
            tail_mask: W::ONES,
            _element: PhantomData,
        }
    }
}

impl<E: Element, W: Word> FixedBitSet<E, W> {
    /// Returns an independent copy of the set, reporting allocation failure
    /// instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::AllocationFailed`] if the storage cannot be
    /// allocated.
    pub fn try_clone(&self) -> Result<Self, AllocError> {
        let mut words = alloc_words(self.words.len())?;
        words.copy_from_slice(&self.words);
        Ok(Self {
            words,
            universe: self.universe,
            tail_mask: self.tail_mask,
            _element: PhantomData,
        })
    }

    /// Makes `self` an independent copy of `source`, reporting allocation
    /// failure instead of aborting.
    ///
    /// If the two sets occupy the same number of words the existing storage
    /// is reused. Otherwise new storage is allocated first and `self` adopts
    /// the universe of `source`. On error `self` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::AllocationFailed`] if the storage cannot be
    /// allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut small = FixedBitSet::<u32>::new(10)?;
    /// let mut large = FixedBitSet::<u32>::new(1000)?;
    /// large.insert(999);
    ///
    /// small.try_clone_from(&large)?;
    /// assert_eq!(small.universe_size(), 1000);
    /// assert!(small.contains(999));
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), AllocError> {
        if self.words.len() != source.words.len() {
            self.words = alloc_words(source.words.len())?;
        }
        self.universe = source.universe;
        self.tail_mask = source.tail_mask;
        self.words.copy_from_slice(&source.words);
        Ok(())
    }
}

impl<E, W: Word> Clone for FixedBitSet<E, W> {
    fn clone(&self) -> Self {
        Self {
            words: self.words.clone(),
            universe: self.universe,
            tail_mask: self.tail_mask,
            _element: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.words.len() == source.words.len() {
            self.words.copy_from_slice(&source.words);
        } else {
            self.words = source.words.clone();
        }
        self.universe = source.universe;
        self.tail_mask = source.tail_mask;
    }
}

impl<E: Element, W: Word> fmt::Debug for FixedBitSet<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E: Element, W: Word> fmt::Binary for FixedBitSet<E, W> {
    /// Formats the membership bits of the universe, highest element first,
    /// with the `0b` prefix in alternate mode. Padding bits are not shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_bitset::FixedBitSet;
    ///
    /// let mut set = FixedBitSet::<u32, u8>::new(10)?;
    /// set.insert(0);
    /// set.insert(9);
    /// assert_eq!(format!("{set:#b}"), "0b1000000001");
    /// # Ok::<(), fixed_bitset::AllocError>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        if self.universe == 0 {
            return f.write_str("0");
        }
        let bits = W::BITS as usize;
        for i in (0..self.universe).rev() {
            let set = crate::bits::test_bit(self.words[i / bits], (i % bits) as u32);
            f.write_str(if set { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<E: Element, W: Word> PartialEq for FixedBitSet<E, W> {
    /// Two sets are equal when they share a universe and have the same
    /// members. Padding bits are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.is_compatible(other) && self.masked_words().eq(other.masked_words())
    }
}

impl<E: Element, W: Word> Eq for FixedBitSet<E, W> {}

impl<E: Element, W: Word> Hash for FixedBitSet<E, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.universe.hash(state);
        for word in self.masked_words() {
            word.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_debug_renders_members() {
        let mut set = FixedBitSet::<u32, u32>::new(70).unwrap();
        set.extend([0u32, 31, 32, 69]);
        assert_eq!(format!("{set:?}"), "{0, 31, 32, 69}");
        assert_eq!(format!("{:?}", FixedBitSet::<u32, u32>::default()), "{}");
    }

    #[test]
    fn test_eq_ignores_padding() {
        let mut a = FixedBitSet::<u32, u32>::new(70).unwrap();
        a.complement();

        let mut b = FixedBitSet::<u32, u32>::new(70).unwrap();
        b.extend(0..70u32);

        assert_ne!(a.as_words(), b.as_words());
        assert_eq!(a, b);
    }

    #[test]
    fn test_eq_requires_same_universe() {
        let a = FixedBitSet::<u32, u32>::new(10).unwrap();
        let b = FixedBitSet::<u32, u32>::new(20).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_from_reallocates_across_universes() {
        let mut src = FixedBitSet::<u32, u32>::new(100).unwrap();
        src.insert(99);

        let mut dst = FixedBitSet::<u32, u32>::new(10).unwrap();
        dst.clone_from(&src);
        assert_eq!(dst.word_count(), 4);
        assert_eq!(dst.universe_size(), 100);
        assert_eq!(dst, src);
    }

    #[test]
    fn test_error_display() {
        let err = AllocError::UniverseTooLarge {
            universe: 300,
            max: 256,
        };
        assert_eq!(
            format!("{err}"),
            "universe of 300 elements exceeds the 256 the element type can name"
        );
        let err = AllocError::AllocationFailed { words: 4 };
        assert_eq!(format!("{err}"), "failed to allocate storage for 4 words");
    }
}
