use std::{fmt, str::FromStr};

use crate::{
    bits::SetBits, limb::BigSetBits, list::ListElements, BigRegister, CoolLex, LinkedList,
    Register32, Register64, Result,
};

/// The available generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// [`Register32`]
    Narrow,
    /// [`Register64`]
    Wide,
    /// [`BigRegister`]
    Big,
    /// [`LinkedList`]
    List,
}

impl Representation {
    pub const ALL: [Self; 4] = [Self::Narrow, Self::Wide, Self::Big, Self::List];

    /// The cheapest representation that can hold `n` elements. For `n` beyond a machine word the
    /// linked list wins over [`BigRegister`], whose steps cost time proportional to `n`.
    pub fn for_size(n: usize) -> Self {
        if n < Register32::BITS as usize {
            Self::Narrow
        } else if n < Register64::BITS as usize {
            Self::Wide
        } else {
            Self::List
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
            Self::Big => "big",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

impl FromStr for Representation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "narrow" | "32" => Ok(Self::Narrow),
            "wide" | "64" => Ok(Self::Wide),
            "big" => Ok(Self::Big),
            "list" => Ok(Self::List),
            _ => Err(format!(
                "unknown representation '{s}'. Should be one of narrow, wide, big or list"
            )),
        }
    }
}

/// Any of the four generators, chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyGenerator {
    Narrow(Register32),
    Wide(Register64),
    Big(BigRegister),
    List(LinkedList),
}

impl AnyGenerator {
    pub fn new(representation: Representation, n: usize, k: usize) -> Result<Self> {
        Ok(match representation {
            Representation::Narrow => Self::Narrow(Register32::new(n, k)?),
            Representation::Wide => Self::Wide(Register64::new(n, k)?),
            Representation::Big => Self::Big(BigRegister::new(n, k)?),
            Representation::List => Self::List(LinkedList::new(n, k)?),
        })
    }

    /// Use the representation given by [`Representation::for_size`].
    pub fn auto(n: usize, k: usize) -> Result<Self> {
        Self::new(Representation::for_size(n), n, k)
    }

    pub fn representation(&self) -> Representation {
        match self {
            Self::Narrow(_) => Representation::Narrow,
            Self::Wide(_) => Representation::Wide,
            Self::Big(_) => Representation::Big,
            Self::List(_) => Representation::List,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            AnyGenerator::Narrow($g) => $body,
            AnyGenerator::Wide($g) => $body,
            AnyGenerator::Big($g) => $body,
            AnyGenerator::List($g) => $body,
        }
    };
}

impl CoolLex for AnyGenerator {
    type Elements<'a> = AnyElements<'a>;

    fn n(&self) -> usize {
        dispatch!(self, g => g.n())
    }

    fn k(&self) -> usize {
        dispatch!(self, g => g.k())
    }

    fn has_more(&self) -> bool {
        dispatch!(self, g => g.has_more())
    }

    fn advance(&mut self) {
        dispatch!(self, g => g.advance())
    }

    fn elements(&self) -> Self::Elements<'_> {
        match self {
            Self::Narrow(g) => AnyElements::Narrow(g.elements()),
            Self::Wide(g) => AnyElements::Wide(g.elements()),
            Self::Big(g) => AnyElements::Big(g.elements()),
            Self::List(g) => AnyElements::List(g.elements()),
        }
    }
}

/// The elements of the current combination of an [`AnyGenerator`].
#[derive(Debug, Clone)]
pub enum AnyElements<'a> {
    Narrow(SetBits<u32>),
    Wide(SetBits<u64>),
    Big(BigSetBits<'a>),
    List(ListElements<'a>),
}

impl Iterator for AnyElements<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Self::Narrow(e) => e.next(),
            Self::Wide(e) => e.next(),
            Self::Big(e) => e.next(),
            Self::List(e) => e.next(),
        }
    }
}
