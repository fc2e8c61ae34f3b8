// src/core/qubit.rs

use std::fmt;

/// Position of a qubit within a register.
///
/// Qubit `q` corresponds to bit `q` of a basis-state index, so qubit 0 is the
/// least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub usize);

impl QubitId {
    /// Gets the position of this qubit as a plain index.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Single-bit mask selecting this qubit within a basis index.
    pub(crate) fn mask(&self) -> usize {
        1 << self.0
    }
}

impl From<usize> for QubitId {
    fn from(index: usize) -> Self {
        QubitId(index)
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}
