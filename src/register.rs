//! Cool-lex in a machine word, following section 3.3 of Ruskey and Williams.
//!
//! The combination is the low `n` bits of `word`. `mask` has the single bit `n` set; the final
//! transition carries a one into that position, which is how exhaustion is detected. The register
//! therefore needs one bit more than `n`.

use crate::{bits::SetBits, doz::Doz, error::check_arguments, iter::Driver, CoolLex, Result};

macro_rules! register_generator {
    ($bits:literal, $R:ty, $W:ty) => {
        paste::paste! {
            #[doc = concat!("A cool-lex generator working in ", stringify!($bits), "-bit registers, for `n < ", stringify!($bits), "`.")]
            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct [<Register $bits>] {
                n: usize,
                k: usize,
                mask: $R,
                word: $R,
            }

            impl [<Register $bits>] {
                pub const BITS: u32 = $bits;

                /// Fails if `k > n`, or if `n` does not fit in the register together with the
                /// guard bit.
                pub fn new(n: usize, k: usize) -> Result<Self> {
                    check_arguments(n, k, Some(Self::BITS))?;
                    let mask: $R = 1 << n;
                    if k == 0 {
                        tracing::debug!(n, bits = $bits, "k = 0, generator starts exhausted");
                        return Ok(Self { n, k, mask, word: mask });
                    }
                    tracing::debug!(n, k, bits = $bits, "register generator");
                    Ok(Self {
                        n,
                        k,
                        mask,
                        word: ((1 as $R) << k).wrapping_sub(1),
                    })
                }

                /// The current combination as a bit pattern. Bit `i` is set if `i` is selected; bits
                /// `n` and above are clear.
                #[inline]
                pub fn word(&self) -> $W {
                    (self.word & !self.mask) as $W
                }

                /// The remaining combinations as bit patterns, in the format of [`Self::word`].
                pub fn words(&mut self) -> [<Words $bits>]<'_> {
                    [<Words $bits>] {
                        driver: Driver::new(self),
                    }
                }
            }

            impl CoolLex for [<Register $bits>] {
                type Elements<'a> = SetBits<$W>;

                fn n(&self) -> usize {
                    self.n
                }

                fn k(&self) -> usize {
                    self.k
                }

                #[inline]
                fn has_more(&self) -> bool {
                    self.word & self.mask == 0
                }

                #[inline]
                fn advance(&mut self) {
                    let w = self.word;

                    let t0 = w & w.wrapping_add(1);
                    let t1 = t0 ^ t0.wrapping_sub(1);
                    let t0 = t1.wrapping_add(1);
                    let t1 = t1 & w;
                    let t0 = (t0 & w).doz(1);

                    self.word = w.wrapping_add(t1).wrapping_sub(t0);
                }

                fn elements(&self) -> Self::Elements<'_> {
                    SetBits::new(self.word())
                }
            }

            #[doc = concat!("Iterator returned by [`Register", stringify!($bits), "::words`].")]
            #[derive(Debug)]
            pub struct [<Words $bits>]<'a> {
                driver: Driver<'a, [<Register $bits>]>,
            }

            impl Iterator for [<Words $bits>]<'_> {
                type Item = $W;

                fn next(&mut self) -> Option<$W> {
                    self.driver.step().map(|generator| generator.word())
                }
            }

            impl std::iter::FusedIterator for [<Words $bits>]<'_> {}
        }
    };
}

register_generator!(32, i32, u32);
register_generator!(64, i64, u64);
