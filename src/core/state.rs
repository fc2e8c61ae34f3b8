// src/core/state.rs

use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;

/// Dense amplitude vector of a register with `2^num_qubits` entries.
///
/// Entry `k` is the complex amplitude of the basis state whose bit `q` is the
/// value of qubit `q`.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct Amplitudes {
    vector: Vec<Complex<f64>>,
}

impl Amplitudes {
    /// Wraps an existing amplitude vector. No normalization is enforced here;
    /// see `validation::check_normalization`.
    pub fn new(vector: Vec<Complex<f64>>) -> Self {
        Self { vector }
    }

    /// The all-zero basis state `|0...0>` of the given dimension.
    pub(crate) fn zero_state(dim: usize) -> Self {
        let mut vector = vec![Complex::zero(); dim];
        if let Some(first) = vector.first_mut() {
            *first = Complex::one();
        }
        Self { vector }
    }

    /// Provides read-only access to the amplitude vector.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.vector
    }

    pub(crate) fn vector_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.vector
    }

    /// Number of basis states represented.
    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    /// Squared magnitude of every amplitude, in basis-index order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.vector.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Sum of all squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.vector.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Amplitudes, tolerance: f64) -> bool {
        self.dim() == other.dim()
            && self
                .vector
                .iter()
                .zip(other.vector.iter())
                .all(|(a, b)| (a - b).norm_sqr() < tolerance * tolerance)
    }
}

impl fmt::Display for Amplitudes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amplitudes[")?;
        for (i, c) in self.vector.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
