use core::fmt::{Display, Formatter};

use crate::error::PairError;

/// Two values of independent types, accessed by position.
///
/// Neither value is validated or constrained, so either may be any value of its
/// type, including "absence" where the type allows it (e.g. `Option<T>`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Pair<X, Y> {
    first: X,
    second: Y,
}

impl<X, Y> Pair<X, Y> {
    pub const fn new(first: X, second: Y) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &X {
        &self.first
    }

    pub fn second(&self) -> &Y {
        &self.second
    }

    /// Replace the first value, leaving the second untouched
    pub fn set_first(&mut self, first: X) {
        self.first = first;
    }

    /// Replace the second value, leaving the first untouched
    pub fn set_second(&mut self, second: Y) {
        self.second = second;
    }

    pub fn first_mut(&mut self) -> &mut X {
        &mut self.first
    }

    pub fn second_mut(&mut self) -> &mut Y {
        &mut self.second
    }

    /// Consume the pair, returning `(first, second)`
    pub fn into_parts(self) -> (X, Y) {
        (self.first, self.second)
    }
}

impl<X, Y> From<(X, Y)> for Pair<X, Y> {
    fn from((first, second): (X, Y)) -> Self {
        Self::new(first, second)
    }
}

impl<X, Y> From<Pair<X, Y>> for (X, Y) {
    fn from(pair: Pair<X, Y>) -> Self {
        pair.into_parts()
    }
}

impl<T: Clone> TryFrom<&[T]> for Pair<T, T> {
    type Error = PairError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        match values {
            [first, second] => Ok(Self::new(first.clone(), second.clone())),
            _ => Err(PairError::IncorrectLength(values.len())),
        }
    }
}

#[cfg(feature = "defmt")]
impl<X: defmt::Format, Y: defmt::Format> defmt::Format for Pair<X, Y> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "({}, {})", self.first, self.second)
    }
}

impl<X: Display, Y: Display> Display for Pair<X, Y> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
