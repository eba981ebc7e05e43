use crate::{
    error::check_arguments,
    iter::{Driver, LendingIterator},
    limb::{self, BigSetBits, BigWord},
    CoolLex, Result,
};

/// The register algorithm of [`crate::Register64`] on multi-limb words, for arbitrary `n`.
///
/// Words have enough limbs to hold bit `n`, the guard bit. Arithmetic wraps at the top limb, which
/// is harmless: every value the algorithm relies on is below `2^(n + 1)`, and the wrapping
/// operations agree with exact two's complement arithmetic on the low bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigRegister {
    n: usize,
    k: usize,
    mask: BigWord,
    word: BigWord,
    // Scratch space for `advance`. The contents are meaningless between calls, and are
    // overwritten before being read.
    t0: BigWord,
    t1: BigWord,
}

impl BigRegister {
    pub fn new(n: usize, k: usize) -> Result<Self> {
        check_arguments(n, k, None)?;
        let limbs = limb::number(n + 1);
        let mask = BigWord::bit(limbs, n);
        let word = if k == 0 {
            tracing::debug!(n, "k = 0, generator starts exhausted");
            mask.clone()
        } else {
            tracing::debug!(n, k, limbs, "big register generator");
            BigWord::low_ones(limbs, k)
        };
        Ok(Self {
            n,
            k,
            mask,
            word,
            t0: BigWord::zero(limbs),
            t1: BigWord::zero(limbs),
        })
    }

    /// A view of the current combination: bit `i` is set if `i` is selected. The view borrows the
    /// generator, and the word behind it is rewritten by the next call to `advance`. Use
    /// [`BigRegister::to_word`] to keep a combination around.
    ///
    /// Once the generator is exhausted, bit `n` is set as well.
    pub fn word(&self) -> &BigWord {
        &self.word
    }

    /// An owned copy of [`BigRegister::word`].
    pub fn to_word(&self) -> BigWord {
        self.word.clone()
    }

    /// The remaining combinations as borrowed words.
    pub fn words(&mut self) -> BigWords<'_> {
        BigWords {
            driver: Driver::new(self),
        }
    }
}

impl CoolLex for BigRegister {
    type Elements<'a> = BigSetBits<'a>;

    fn n(&self) -> usize {
        self.n
    }

    fn k(&self) -> usize {
        self.k
    }

    fn has_more(&self) -> bool {
        !self.word.intersects(&self.mask)
    }

    fn advance(&mut self) {
        let Self { word, t0, t1, .. } = self;

        // t0 = w & (w + 1)
        t0.assign(word);
        t0.increment();
        t0.and_assign(word);

        // t1 = t0 ^ (t0 - 1)
        t1.assign(t0);
        t1.decrement();
        t1.xor_assign(t0);

        // t0 = t1 + 1
        t0.assign(t1);
        t0.increment();

        // t1 = t1 & w
        t1.and_assign(word);

        // t0 = doz(t0 & w, 1). The operand is nonnegative, so this is a decrement unless it is 0.
        t0.and_assign(word);
        if !t0.is_zero() {
            t0.decrement();
        }

        // w = w + t1 - t0
        word.add_assign(t1);
        word.sub_assign(t0);
    }

    fn elements(&self) -> Self::Elements<'_> {
        BigSetBits::new(self.word.limbs(), self.n)
    }
}

/// Lending iterator returned by [`BigRegister::words`].
#[derive(Debug)]
pub struct BigWords<'a> {
    driver: Driver<'a, BigRegister>,
}

impl LendingIterator for BigWords<'_> {
    type Item<'b> = &'b BigWord
    where
        Self: 'b;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        self.driver.step().map(BigRegister::word)
    }
}
