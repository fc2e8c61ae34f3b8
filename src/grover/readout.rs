// src/grover/readout.rs

//! Non-destructive readout of basis-state probabilities.

use crate::backend::QuantumRegister;
use crate::core::QsatError;
use crate::formula::RegisterLayout;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Probabilities of every joint-register basis state after amplification.
///
/// The low `n` bits of a joint index are the input assignment; the remaining
/// bits are the auxiliary (clause) qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    layout: RegisterLayout,
    joint: Vec<f64>,
}

impl ProbabilityTable {
    pub(crate) fn new(layout: RegisterLayout, joint: Vec<f64>) -> Self {
        Self { layout, joint }
    }

    pub fn layout(&self) -> &RegisterLayout {
        &self.layout
    }

    /// Probabilities indexed by full joint-register basis index.
    pub fn joint(&self) -> &[f64] {
        &self.joint
    }

    /// Probability of each input assignment, summed over auxiliary states.
    pub fn assignment_probabilities(&self) -> Vec<f64> {
        let mut marginal = vec![0.0; self.layout.input_space()];
        for (index, p) in self.joint.iter().enumerate() {
            let (assignment, _) = self.layout.split_index(index);
            marginal[assignment] += p;
        }
        marginal
    }

    /// Combined probability of the assignments accepted by `predicate`.
    pub fn mass_of<F>(&self, predicate: F) -> f64
    where
        F: Fn(usize) -> bool,
    {
        self.assignment_probabilities()
            .iter()
            .enumerate()
            .filter(|(assignment, _)| predicate(*assignment))
            .map(|(_, p)| p)
            .sum()
    }

    /// Sum over the whole joint space; 1 up to rounding for a valid run.
    pub fn total(&self) -> f64 {
        self.joint.iter().sum()
    }

    /// Draws `shots` assignments from the table with a seeded generator and
    /// returns how often each assignment came up. The register is not involved.
    pub fn sample(&self, shots: usize, seed: u64) -> Vec<usize> {
        let marginal = self.assignment_probabilities();
        let total: f64 = marginal.iter().sum();
        let mut counts = vec![0usize; marginal.len()];
        if total <= 0.0 {
            return counts;
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let last = marginal.len() - 1;
        for _ in 0..shots {
            let p_sample: f64 = rng.random::<f64>() * total;
            let mut cumulative = 0.0;
            // Rounding can leave p_sample past the final bucket.
            let mut chosen = last;
            for (assignment, p) in marginal.iter().enumerate() {
                cumulative += p;
                if p_sample < cumulative {
                    chosen = assignment;
                    break;
                }
            }
            counts[chosen] += 1;
        }
        counts
    }
}

impl fmt::Display for ProbabilityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.layout.num_inputs();
        let names: Vec<String> = (1..=n).map(|v| format!("x{}", v)).collect();
        for (assignment, p) in self.assignment_probabilities().iter().enumerate() {
            let bits: Vec<String> = (0..n).map(|v| ((assignment >> v) & 1).to_string()).collect();
            writeln!(f, "Probability of ({}) = ({}) : {:.6}", names.join(", "), bits.join(", "), p)?;
        }
        Ok(())
    }
}

/// Reads the probability of every joint basis state from `register`.
///
/// Queries only; calling it twice with no gate in between gives identical tables.
pub fn read_out<R: QuantumRegister + ?Sized>(
    register: &R,
    layout: &RegisterLayout,
) -> Result<ProbabilityTable, QsatError> {
    let joint = (0..register.dim())
        .map(|index| register.probability(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ProbabilityTable::new(*layout, joint))
}
