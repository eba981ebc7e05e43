//! Generate the `k`-element subsets of `{0, ..., n - 1}` in cool-lex order.
//!
//! Cool-lex order is described in "The Coolest Way to Generate Combinations" by Frank Ruskey and
//! Aaron Williams. Consecutive combinations differ by rotating a prefix of the bit string by one
//! position, which takes constant time. This crate offers four generators producing the same
//! sequence:
//!
//!  - [`Register32`] and [`Register64`] keep the bit string in a machine word and support `n`
//!    up to 31 and 63 respectively.
//!  - [`BigRegister`] runs the same word algorithm on a vector of limbs, for any `n`.
//!  - [`LinkedList`] keeps the bit string as a list of nodes and does constant work per step
//!    without any arithmetic, for any `n`.
//!
//! [`AnyGenerator`] wraps all four and can pick one automatically.
//!
//! Every generator implements [`CoolLex`]. A combination is handed out as an iterator over its
//! elements, which borrows the generator, so the combinations themselves come from a
//! [`LendingIterator`]:
//!
//! ```
//! use coollex::{CoolLex, LendingIterator, LinkedList};
//!
//! let mut generator = LinkedList::new(3, 2).unwrap();
//! let mut combinations = generator.combinations();
//! let mut all = Vec::new();
//! while let Some(elements) = combinations.next() {
//!     all.push(elements.collect::<Vec<_>>());
//! }
//! assert_eq!(all, vec![vec![0, 1], vec![1, 2], vec![0, 2]]);
//! ```
//!
//! Requesting `k = 0` produces no combinations at all, rather than a single empty one.

mod any;
mod big;
mod bits;
pub mod doz;
mod error;
pub mod iter;
pub mod limb;
mod list;
mod register;
pub mod utils;

pub use any::{AnyElements, AnyGenerator, Representation};
pub use big::{BigRegister, BigWords};
pub use bits::SetBits;
pub use error::{Error, Result};
pub use iter::{Combinations, LendingIterator};
pub use limb::{BigSetBits, BigWord};
pub use list::{LinkedList, ListElements};
pub use register::{Register32, Register64, Words32, Words64};

/// A generator of combinations in cool-lex order.
///
/// The generator holds one combination at a time. [`CoolLex::has_more`] tells whether the current
/// state is a combination that has not been exhausted, and [`CoolLex::advance`] moves to the next
/// one. Callers that only want to iterate should use [`CoolLex::combinations`], which drives these
/// two in the right order.
pub trait CoolLex {
    type Elements<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// The size of the set the elements are drawn from.
    fn n(&self) -> usize;

    /// The number of elements in each combination.
    fn k(&self) -> usize;

    /// Whether the current state holds a combination. Once this returns `false` it never returns
    /// `true` again.
    fn has_more(&self) -> bool;

    /// Move to the next combination.
    ///
    /// This must only be called while [`CoolLex::has_more`] returns `true`. Calling it afterwards
    /// leaves the generator in an unspecified (but memory safe) state.
    fn advance(&mut self);

    /// The elements of the current combination, in increasing order.
    fn elements(&self) -> Self::Elements<'_>;

    /// The combinations that have not been visited yet, starting with the current one.
    ///
    /// Running this again on an exhausted generator yields nothing.
    fn combinations(&mut self) -> Combinations<'_, Self>
    where
        Self: Sized,
    {
        Combinations::new(self)
    }
}
