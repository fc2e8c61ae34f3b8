// src/operations/mod.rs

//! Primitive register operations consumed by the amplification engine.
//!
//! These are exactly the gates a backend must offer: a basis change, a bit
//! flip, a pattern-controlled 2x2 unitary and an all-ones-conditioned phase
//! flip. Circuits are ordered sequences of them.

use crate::core::QubitId;
use num_complex::Complex;
use num_traits::{One, Zero};

/// A 2x2 complex matrix acting on a single target qubit.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// The involutory bit-flip matrix `[[0, 1], [1, 0]]` used by the oracle compiler.
pub fn pauli_x_matrix() -> Matrix2 {
    [
        [Complex::zero(), Complex::one()],
        [Complex::one(), Complex::zero()],
    ]
}

/// One primitive operation on a register.
#[derive(Debug, Clone, PartialEq)] // f64 matrices rule out Eq
pub enum Gate {
    /// Basis change `|0> -> |+>`, `|1> -> |->` on one qubit.
    Hadamard {
        /// The qubit transformed.
        target: QubitId,
    },

    /// Bit flip on one qubit.
    PauliX {
        /// The qubit flipped.
        target: QubitId,
    },

    /// Applies `matrix` to `target` on exactly those basis states where each
    /// `controls[j]` holds the value `control_states[j]`.
    ControlledUnitary {
        /// Qubits the condition is read from.
        controls: Vec<QubitId>,
        /// Required value of each control, parallel to `controls`.
        control_states: Vec<bool>,
        /// Qubit the matrix acts on.
        target: QubitId,
        /// The 2x2 unitary applied when the pattern matches.
        matrix: Matrix2,
    },

    /// Multiplies by -1 every amplitude whose `qubits` all read 1.
    MultiControlledPhaseFlip {
        /// Qubits that must all be 1 for the flip.
        qubits: Vec<QubitId>,
    },
}

impl Gate {
    /// Returns every qubit the gate reads or writes.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::Hadamard { target } => vec![*target],
            Gate::PauliX { target } => vec![*target],
            Gate::ControlledUnitary { controls, target, .. } => {
                let mut qubits = controls.clone();
                qubits.push(*target);
                qubits
            }
            Gate::MultiControlledPhaseFlip { qubits } => qubits.clone(),
        }
    }

    /// Short symbol used in circuit diagrams.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::Hadamard { .. } => "H",
            Gate::PauliX { .. } => "X",
            Gate::ControlledUnitary { matrix, .. } if *matrix == pauli_x_matrix() => "X",
            Gate::ControlledUnitary { .. } => "U",
            Gate::MultiControlledPhaseFlip { .. } => "Z",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controlled_unitary_involves_controls_and_target() {
        let gate = Gate::ControlledUnitary {
            controls: vec![QubitId(0), QubitId(1)],
            control_states: vec![false, true],
            target: QubitId(3),
            matrix: pauli_x_matrix(),
        };
        assert_eq!(gate.involved_qubits(), vec![QubitId(0), QubitId(1), QubitId(3)]);
        assert_eq!(gate.symbol(), "X");
    }
}
