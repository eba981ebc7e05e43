use crate::CoolLex;

/// An iterator whose items may borrow from the iterator itself, so that an item has to be dropped
/// before the next one is requested.
///
/// The combinations of a generator are views into its state, which is mutated in place between
/// two combinations. This is exactly the situation where [`Iterator`] does not apply.
pub trait LendingIterator {
    type Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>>;

    /// Consume the iterator, returning the number of items.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }
}

/// The loop shared by every iterator over the states of a generator.
///
/// The generator is advanced lazily, at the start of the following call to [`Driver::step`]. A
/// consumer that stops pulling therefore never causes an extra transition, and the generator is
/// left on the last state that was handed out.
#[derive(Debug)]
pub(crate) struct Driver<'a, G> {
    generator: &'a mut G,
    pending_advance: bool,
}

impl<'a, G: CoolLex> Driver<'a, G> {
    pub(crate) fn new(generator: &'a mut G) -> Self {
        Self {
            generator,
            pending_advance: false,
        }
    }

    pub(crate) fn step(&mut self) -> Option<&G> {
        if std::mem::take(&mut self.pending_advance) {
            self.generator.advance();
        }
        if !self.generator.has_more() {
            return None;
        }
        self.pending_advance = true;
        Some(&*self.generator)
    }
}

/// The combinations of a generator, each given as an iterator over its elements.
///
/// See [`CoolLex::combinations`].
#[derive(Debug)]
pub struct Combinations<'a, G> {
    driver: Driver<'a, G>,
}

impl<'a, G: CoolLex> Combinations<'a, G> {
    pub fn new(generator: &'a mut G) -> Self {
        Self {
            driver: Driver::new(generator),
        }
    }
}

impl<'a, G: CoolLex> LendingIterator for Combinations<'a, G> {
    type Item<'b> = G::Elements<'b>
    where
        Self: 'b;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        self.driver.step().map(|generator| generator.elements())
    }
}
