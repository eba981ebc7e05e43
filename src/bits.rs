/// An iterator over the positions of the set bits of a word, in increasing order.
///
/// Each step reads the trailing zero count and then clears the lowest set bit with
/// `word &= word - 1` (Hacker's Delight, section 2-1). The iterator owns a copy of the word, so
/// stopping early costs nothing and the word it was built from is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits<W> {
    word: W,
}

impl<W> SetBits<W> {
    pub const fn new(word: W) -> Self {
        Self { word }
    }
}

macro_rules! impl_set_bits {
    ($W:ty) => {
        impl Iterator for SetBits<$W> {
            type Item = usize;

            #[inline]
            fn next(&mut self) -> Option<usize> {
                if self.word == 0 {
                    return None;
                }
                let result = self.word.trailing_zeros() as usize;
                self.word &= self.word - 1;
                Some(result)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = self.word.count_ones() as usize;
                (len, Some(len))
            }
        }

        impl ExactSizeIterator for SetBits<$W> {}

        impl std::iter::FusedIterator for SetBits<$W> {}

        impl FromIterator<usize> for SetBits<$W> {
            /// Packs positions back into a word. Positions must be below the width of the word.
            fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
                Self::new(iter.into_iter().fold(0, |word, i| word | (1 << i)))
            }
        }

        impl SetBits<$W> {
            /// The word whose set bits have not been yielded yet.
            pub const fn word(&self) -> $W {
                self.word
            }
        }
    };
}

impl_set_bits!(u32);
impl_set_bits!(u64);
