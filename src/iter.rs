//! Iterator implementations for `FixedBitSet`.

use core::{iter::FusedIterator, marker::PhantomData};

use crate::{
    FixedBitSet, bits,
    word::{Element, Word},
};

/// An iterator over the members of a [`FixedBitSet`] in ascending order.
///
/// This struct is created by the [`iter`](FixedBitSet::iter) method. It scans
/// storage word by word: each word is copied out (the last one masked to the
/// universe), and its set bits are peeled off lowest first by clearing them
/// in the copy. The set itself is never written to.
///
/// # Examples
///
/// ```
/// use fixed_bitset::FixedBitSet;
///
/// let mut set = FixedBitSet::<u32, u32>::new(70)?;
/// for e in [69, 0, 32, 31] {
///     set.insert(e);
/// }
///
/// let members: Vec<_> = set.iter().collect();
/// assert_eq!(members, [0, 31, 32, 69]);
///
/// // Stop whenever you like.
/// assert_eq!(set.iter().take_while(|&e| e < 32).count(), 2);
/// # Ok::<(), fixed_bitset::AllocError>(())
/// ```
#[derive(Clone)]
pub struct Members<'a, E, W> {
    words: &'a [W],
    tail_mask: W,
    /// Index of the word after `current`.
    next_word: usize,
    /// Element index of bit 0 of `current`.
    base: usize,
    /// Local copy of the word being scanned, minus bits already yielded.
    current: W,
    _element: PhantomData<fn() -> E>,
}

impl<'a, E: Element, W: Word> Members<'a, E, W> {
    pub(crate) fn new(words: &'a [W], tail_mask: W) -> Self {
        Self {
            words,
            tail_mask,
            next_word: 0,
            base: 0,
            current: W::ZERO,
            _element: PhantomData,
        }
    }

    /// Loads the next word into `current`. Returns `false` once storage is
    /// exhausted.
    #[inline]
    fn advance(&mut self) -> bool {
        let Some(&word) = self.words.get(self.next_word) else {
            return false;
        };
        self.base = self.next_word * W::BITS as usize;
        self.next_word += 1;
        self.current = if self.next_word == self.words.len() {
            word & self.tail_mask
        } else {
            word
        };
        true
    }
}

impl<E: Element, W: Word> Iterator for Members<'_, E, W> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bit) = bits::find_lowest_set_bit(self.current) {
                bits::clear_bit(&mut self.current, bit);
                return Some(E::from_index(self.base + bit as usize));
            }
            if !self.advance() {
                return None;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<E: Element, W: Word> ExactSizeIterator for Members<'_, E, W> {
    fn len(&self) -> usize {
        let rest = &self.words[self.next_word..];
        let mut count = self.current.count_ones() as usize;
        if let [body @ .., last] = rest {
            count += body.iter().map(|w| w.count_ones() as usize).sum::<usize>();
            count += (*last & self.tail_mask).count_ones() as usize;
        }
        count
    }
}

impl<E: Element, W: Word> FusedIterator for Members<'_, E, W> {}

impl<'a, E: Element, W: Word> IntoIterator for &'a FixedBitSet<E, W> {
    type IntoIter = Members<'a, E, W>;
    type Item = E;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Element, W: Word> Extend<E> for FixedBitSet<E, W> {
    /// Inserts every element yielded by `iter`.
    ///
    /// # Panics
    ///
    /// In checked builds, if any element is outside the universe.
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for e in iter {
            self.insert(e);
        }
    }
}

impl<'a, E: Element, W: Word> Extend<&'a E> for FixedBitSet<E, W> {
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedBitSet;

    #[test]
    fn test_len_tracks_progress() {
        let mut set = FixedBitSet::<u32, u8>::new(20).unwrap();
        set.extend([0u32, 7, 8, 19]);
        set.complement();
        set.complement();

        let mut iter = set.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.next(), Some(8));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(19));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_len_masks_padding() {
        let mut set = FixedBitSet::<u32, u8>::new(20).unwrap();
        set.complement();
        assert_eq!(set.iter().len(), 20);
        assert_eq!(set.iter().count(), 20);
    }

    #[test]
    fn test_empty_universe() {
        let set = FixedBitSet::<u32, u64>::new(0).unwrap();
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.iter().len(), 0);
    }
}
