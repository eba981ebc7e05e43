//! Fixed-length multi-limb integers.
//!
//! A [`BigWord`] is an integer modulo `2^(64 * limbs)`, stored least significant limb first. All
//! arithmetic wraps, and every binary operation requires both operands to have the same number of
//! limbs. Operations work in place so that a caller holding a few words of the right size never
//! allocates.

use std::fmt;

pub type Limb = u64;

pub const BITS_PER_LIMB: usize = Limb::BITS as usize;

/// Return the number of limbs required to hold `bits` bits.
pub const fn number(bits: usize) -> usize {
    bits.div_ceil(BITS_PER_LIMB)
}

#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigWord {
    limbs: Vec<Limb>,
}

impl BigWord {
    pub fn zero(limbs: usize) -> Self {
        Self {
            limbs: vec![0; limbs],
        }
    }

    /// The word with only bit `bit` set.
    pub fn bit(limbs: usize, bit: usize) -> Self {
        let mut result = Self::zero(limbs);
        result.limbs[bit / BITS_PER_LIMB] = 1 << (bit % BITS_PER_LIMB);
        result
    }

    /// The word whose lowest `count` bits are set.
    pub fn low_ones(limbs: usize, count: usize) -> Self {
        let mut result = Self::zero(limbs);
        let full = count / BITS_PER_LIMB;
        result.limbs[..full].fill(!0);
        let rest = count % BITS_PER_LIMB;
        if rest > 0 {
            result.limbs[full] = (1 << rest) - 1;
        }
        result
    }

    /// The word with exactly the bits in `positions` set.
    pub fn from_elements(limbs: usize, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut result = Self::zero(limbs);
        for i in positions {
            result.limbs[i / BITS_PER_LIMB] |= 1 << (i % BITS_PER_LIMB);
        }
        result
    }

    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn num_limbs(&self) -> usize {
        self.limbs.len()
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&limb| limb == 0)
    }

    /// Whether `self & other` is nonzero.
    pub fn intersects(&self, other: &Self) -> bool {
        self.limbs
            .iter()
            .zip(&other.limbs)
            .any(|(&a, &b)| a & b != 0)
    }

    pub fn test_bit(&self, bit: usize) -> bool {
        self.limbs
            .get(bit / BITS_PER_LIMB)
            .is_some_and(|limb| limb & (1 << (bit % BITS_PER_LIMB)) != 0)
    }

    pub fn count_ones(&self) -> usize {
        self.limbs.iter().map(|limb| limb.count_ones() as usize).sum()
    }

    /// The position of the lowest set bit, or `None` if the word is zero.
    pub fn trailing_zeros(&self) -> Option<usize> {
        self.limbs
            .iter()
            .position(|&limb| limb != 0)
            .map(|i| i * BITS_PER_LIMB + self.limbs[i].trailing_zeros() as usize)
    }

    /// Overwrite `self` with `other`, reusing the allocation.
    pub fn assign(&mut self, other: &Self) {
        debug_assert_eq!(self.limbs.len(), other.limbs.len());
        self.limbs.copy_from_slice(&other.limbs);
    }

    /// `self += 1`
    pub fn increment(&mut self) {
        for limb in &mut self.limbs {
            let (sum, carry) = limb.overflowing_add(1);
            *limb = sum;
            if !carry {
                return;
            }
        }
    }

    /// `self -= 1`
    pub fn decrement(&mut self) {
        for limb in &mut self.limbs {
            let (difference, borrow) = limb.overflowing_sub(1);
            *limb = difference;
            if !borrow {
                return;
            }
        }
    }

    pub fn add_assign(&mut self, other: &Self) {
        debug_assert_eq!(self.limbs.len(), other.limbs.len());
        let mut carry = false;
        for (a, &b) in self.limbs.iter_mut().zip(&other.limbs) {
            let (sum, c1) = a.overflowing_add(b);
            let (sum, c2) = sum.overflowing_add(carry as Limb);
            *a = sum;
            carry = c1 || c2;
        }
    }

    pub fn sub_assign(&mut self, other: &Self) {
        debug_assert_eq!(self.limbs.len(), other.limbs.len());
        let mut borrow = false;
        for (a, &b) in self.limbs.iter_mut().zip(&other.limbs) {
            let (difference, b1) = a.overflowing_sub(b);
            let (difference, b2) = difference.overflowing_sub(borrow as Limb);
            *a = difference;
            borrow = b1 || b2;
        }
    }

    pub fn and_assign(&mut self, other: &Self) {
        debug_assert_eq!(self.limbs.len(), other.limbs.len());
        for (a, &b) in self.limbs.iter_mut().zip(&other.limbs) {
            *a &= b;
        }
    }

    pub fn xor_assign(&mut self, other: &Self) {
        debug_assert_eq!(self.limbs.len(), other.limbs.len());
        for (a, &b) in self.limbs.iter_mut().zip(&other.limbs) {
            *a ^= b;
        }
    }

    /// The positions of the set bits, in increasing order.
    pub fn set_bits(&self) -> BigSetBits<'_> {
        BigSetBits::new(&self.limbs, self.limbs.len() * BITS_PER_LIMB)
    }
}

impl fmt::Debug for BigWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigWord({self:#x})")
    }
}

impl fmt::LowerHex for BigWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        let mut limbs = self.limbs.iter().rev().skip_while(|&&limb| limb == 0);
        match limbs.next() {
            None => write!(f, "0"),
            Some(top) => {
                write!(f, "{top:x}")?;
                limbs.try_for_each(|limb| write!(f, "{limb:016x}"))
            }
        }
    }
}

/// Iterator over the positions of the set bits of a slice of limbs that lie below `end`.
///
/// The limb currently being scanned is copied into the iterator and cleared bit by bit there, so
/// the limbs themselves are only read.
#[derive(Debug, Clone)]
pub struct BigSetBits<'a> {
    limbs: &'a [Limb],
    limb_index: usize,
    cur_limb: Limb,
    end: usize,
}

impl<'a> BigSetBits<'a> {
    pub(crate) fn new(limbs: &'a [Limb], end: usize) -> Self {
        Self {
            limbs,
            limb_index: 0,
            cur_limb: limbs.first().copied().unwrap_or(0),
            end,
        }
    }
}

impl Iterator for BigSetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.cur_limb == 0 {
            if self.limb_index * BITS_PER_LIMB >= self.end {
                return None;
            }
            self.limb_index += 1;
            self.cur_limb = *self.limbs.get(self.limb_index)?;
        }
        let result = self.limb_index * BITS_PER_LIMB + self.cur_limb.trailing_zeros() as usize;
        if result >= self.end {
            self.cur_limb = 0;
            self.limb_index = self.limbs.len();
            return None;
        }
        self.cur_limb &= self.cur_limb - 1;
        Some(result)
    }
}

impl std::iter::FusedIterator for BigSetBits<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A `BigWord` with two limbs and the same value as `x`
    fn from_u128(x: u128) -> BigWord {
        BigWord {
            limbs: vec![x as Limb, (x >> 64) as Limb],
        }
    }

    fn to_u128(x: &BigWord) -> u128 {
        assert_eq!(x.num_limbs(), 2);
        x.limbs[0] as u128 | (x.limbs[1] as u128) << 64
    }

    #[test]
    fn test_constructors() {
        assert_eq!(number(0), 0);
        assert_eq!(number(1), 1);
        assert_eq!(number(64), 1);
        assert_eq!(number(65), 2);

        assert_eq!(to_u128(&BigWord::bit(2, 70)), 1 << 70);
        assert_eq!(to_u128(&BigWord::low_ones(2, 0)), 0);
        assert_eq!(to_u128(&BigWord::low_ones(2, 64)), u64::MAX as u128);
        assert_eq!(to_u128(&BigWord::low_ones(2, 70)), (1 << 70) - 1);
        assert_eq!(to_u128(&BigWord::low_ones(2, 128)), u128::MAX);
        assert_eq!(
            to_u128(&BigWord::from_elements(2, [0, 3, 64, 127])),
            1 | 1 << 3 | 1 << 64 | 1 << 127
        );
    }

    #[test]
    fn test_carries() {
        let mut x = BigWord::low_ones(3, 128);
        x.increment();
        assert_eq!(x, BigWord::bit(3, 128));
        x.decrement();
        assert_eq!(x, BigWord::low_ones(3, 128));

        let mut x = BigWord::zero(2);
        x.decrement();
        assert_eq!(x, BigWord::low_ones(2, 128));
        x.increment();
        assert!(x.is_zero());
    }

    #[test]
    fn test_format() {
        assert_eq!(format!("{:x}", BigWord::zero(2)), "0");
        assert_eq!(format!("{:#x}", BigWord::bit(2, 64)), "0x10000000000000000");
        assert_eq!(format!("{:?}", BigWord::low_ones(1, 8)), "BigWord(0xff)");
    }

    #[test]
    fn test_set_bits_end() {
        let x = BigWord::from_elements(3, [1, 63, 64, 130, 140]);
        assert_eq!(x.set_bits().collect::<Vec<_>>(), vec![1, 63, 64, 130, 140]);
        assert_eq!(
            BigSetBits::new(x.limbs(), 130).collect::<Vec<_>>(),
            vec![1, 63, 64]
        );
        assert_eq!(BigSetBits::new(x.limbs(), 64).collect::<Vec<_>>(), vec![1, 63]);
        assert_eq!(BigSetBits::new(&[], 0).next(), None);
    }

    proptest! {
        #[test]
        fn test_arithmetic(a: u128, b: u128) {
            let mut x = from_u128(a);
            x.add_assign(&from_u128(b));
            prop_assert_eq!(to_u128(&x), a.wrapping_add(b));

            let mut x = from_u128(a);
            x.sub_assign(&from_u128(b));
            prop_assert_eq!(to_u128(&x), a.wrapping_sub(b));

            let mut x = from_u128(a);
            x.and_assign(&from_u128(b));
            prop_assert_eq!(to_u128(&x), a & b);
            prop_assert_eq!(from_u128(a).intersects(&from_u128(b)), a & b != 0);

            let mut x = from_u128(a);
            x.xor_assign(&from_u128(b));
            prop_assert_eq!(to_u128(&x), a ^ b);

            let mut x = from_u128(a);
            x.increment();
            prop_assert_eq!(to_u128(&x), a.wrapping_add(1));

            let mut x = from_u128(a);
            x.decrement();
            prop_assert_eq!(to_u128(&x), a.wrapping_sub(1));
        }

        #[test]
        fn test_bits(a: u128) {
            let x = from_u128(a);
            let expected = (0..128).filter(|&i| a & (1 << i) != 0).collect::<Vec<usize>>();
            prop_assert_eq!(x.set_bits().collect::<Vec<_>>(), expected.clone());
            prop_assert_eq!(x.count_ones(), a.count_ones() as usize);
            prop_assert_eq!(
                x.trailing_zeros(),
                (a != 0).then(|| a.trailing_zeros() as usize)
            );
            prop_assert_eq!(BigWord::from_elements(2, expected.iter().copied()), x.clone());
            for i in 0..128 {
                prop_assert_eq!(x.test_bit(i), a & (1 << i) != 0);
            }
        }
    }
}
