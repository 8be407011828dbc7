use core::fmt::{Display, Formatter};

/// An error occurring while attempting to build a [crate::pair::Pair] from
/// a sequence of values.
///
/// Construction from two values directly can never fail, this only covers
/// conversions where the number of values is not known at compile time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PairError {
    /// A pair needs exactly two values, the source contained the given number instead
    IncorrectLength(usize),
}

impl Display for PairError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PairError::IncorrectLength(len) => {
                write!(f, "expected exactly 2 values for a pair, found {}", len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PairError {}
