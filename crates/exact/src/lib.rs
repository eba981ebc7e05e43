//! Overflow-checked integer arithmetic for counting combinations.
//!
//! Everything here works on `u64` and reports an [`Error`] instead of wrapping. The generators in
//! `coollex` never call into this crate; it exists so that their output can be checked against an
//! independent count.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The exact result of `lhs op rhs` does not fit in a `u64`.
    Overflow {
        op: &'static str,
        lhs: u64,
        rhs: u64,
    },
    KExceedsN {
        n: u64,
        k: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { op, lhs, rhs } => {
                write!(f, "numeric overflow occurred computing {lhs} {op} {rhs}")
            }
            Self::KExceedsN { n, k } => write!(f, "k ({k}) > n ({n})"),
        }
    }
}

impl std::error::Error for Error {}

pub fn add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(Error::Overflow {
        op: "+",
        lhs: a,
        rhs: b,
    })
}

pub fn multiply(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(Error::Overflow {
        op: "*",
        lhs: a,
        rhs: b,
    })
}

/// The product of every integer between `a` and `b`, both included. The order of the arguments
/// does not matter.
pub fn multiply_range(a: u64, b: u64) -> Result<u64> {
    let (mut lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut result = lo;
    while lo < hi {
        lo = add(lo, 1)?;
        result = multiply(result, lo)?;
    }
    Ok(result)
}

/// `n!`, with `0! = 1`.
pub fn factorial(n: u64) -> Result<u64> {
    if n == 0 {
        return Ok(1);
    }
    multiply_range(n, 1)
}

/// The number of `k`-element subsets of an `n`-element set.
///
/// This walks up the row of Pascal's triangle one entry at a time, using that
/// `C(n, i + 1) = C(n, i) * (n - i) / (i + 1)` is exact. The product is formed in a `u128`, and
/// the entries only grow on the way to `C(n, k)`, so an error means the answer does not fit.
pub fn binomial(n: u64, k: u64) -> Result<u64> {
    if k > n {
        return Err(Error::KExceedsN { n, k });
    }
    let k = std::cmp::min(k, n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        let next = u128::from(result) * u128::from(n - i) / u128::from(i + 1);
        result = u64::try_from(next).map_err(|_| Error::Overflow {
            op: "*",
            lhs: result,
            rhs: n - i,
        })?;
    }
    Ok(result)
}
