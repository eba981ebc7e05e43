use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a generator could not be constructed. Once a generator exists, nothing it does can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `k` is larger than `n`.
    InvalidArguments { n: usize, k: usize },
    /// `n` does not leave a free guard bit in a register of `bits` bits.
    RegisterOverflow { n: usize, bits: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments { n, k } => write!(f, "n ({n}) less than k ({k})"),
            Self::RegisterOverflow { n, bits } => write!(
                f,
                "n ({n}) greater than {}, consider using BigRegister or LinkedList",
                bits - 1
            ),
        }
    }
}

impl std::error::Error for Error {}

/// The checks shared by every representation. `bits` is the register width of the fixed-width
/// representations and `None` for the unbounded ones.
pub(crate) fn check_arguments(n: usize, k: usize, bits: Option<u32>) -> Result<()> {
    if n < k {
        return Err(Error::InvalidArguments { n, k });
    }
    if let Some(bits) = bits {
        if n >= bits as usize {
            return Err(Error::RegisterOverflow { n, bits });
        }
    }
    Ok(())
}
