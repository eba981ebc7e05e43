//! Difference or zero.
//!
//! `doz(a, b)` is `a - b` if `a >= b` and `0` otherwise, with `a - b` computed modulo the width of
//! the type. See Hacker's Delight, section 2-19.

pub trait Doz: Sized {
    /// Branch-free difference or zero. This is what the register generators call on every step.
    fn doz(self, other: Self) -> Self;

    /// The obvious implementation, which [`Doz::doz`] must agree with on every input.
    fn doz_branching(self, other: Self) -> Self;
}

macro_rules! impl_doz {
    ($T:ty) => {
        impl Doz for $T {
            #[inline]
            fn doz(self, other: Self) -> Self {
                let d = self.wrapping_sub(other);
                // The sign bit of `d ^ ((self ^ other) & (d ^ self))` is set exactly when
                // `self < other`, overflow included. Its complement, smeared over the whole word,
                // is the mask that keeps `d`.
                d & (!(d ^ ((self ^ other) & (d ^ self))) >> (<$T>::BITS - 1))
            }

            #[inline]
            fn doz_branching(self, other: Self) -> Self {
                if self >= other {
                    self.wrapping_sub(other)
                } else {
                    0
                }
            }
        }
    };
}

impl_doz!(i8);
impl_doz!(i16);
impl_doz!(i32);
impl_doz!(i64);
