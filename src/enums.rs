use core::fmt::{Display, Formatter, Result};

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            FifoState::Full => write!(f, "Full"),
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}
