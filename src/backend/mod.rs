// src/backend/mod.rs

//! The register capability the amplification engine is written against.
//!
//! Oracle compilation, marking, diffusion and readout only ever see these two
//! traits. `simulation::StateVectorBackend` is one implementation; any engine
//! that can allocate a register, apply the primitive gates and report basis
//! amplitudes can be swapped in.

use crate::core::{QsatError, QubitId};
use crate::operations::{Gate, Matrix2};
use num_complex::Complex;

/// Allocates and releases registers.
pub trait QuantumBackend {
    /// The register type this backend hands out.
    type Register: QuantumRegister;

    /// Allocates a register of `num_qubits` qubits in the all-zero basis state.
    fn allocate(&self, num_qubits: usize) -> Result<Self::Register, QsatError>;

    /// Releases a register. The default simply drops it.
    fn release(&self, register: Self::Register) {
        drop(register);
    }

    /// Human readable backend name for logs and reports.
    fn name(&self) -> &'static str;
}

/// A live register owned by exactly one caller.
pub trait QuantumRegister {
    /// Width of the register.
    fn num_qubits(&self) -> usize;

    /// Applies a Hadamard to `target`.
    fn hadamard(&mut self, target: QubitId) -> Result<(), QsatError>;

    /// Applies a bit flip to `target`.
    fn pauli_x(&mut self, target: QubitId) -> Result<(), QsatError>;

    /// Applies `matrix` to `target` where every control matches its state.
    fn controlled_unitary(
        &mut self,
        controls: &[QubitId],
        control_states: &[bool],
        target: QubitId,
        matrix: &Matrix2,
    ) -> Result<(), QsatError>;

    /// Negates every amplitude whose `qubits` all read 1.
    fn multi_controlled_phase_flip(&mut self, qubits: &[QubitId]) -> Result<(), QsatError>;

    /// Complex amplitude of the full-register basis state `index`.
    fn amplitude(&self, index: usize) -> Result<Complex<f64>, QsatError>;

    /// Probability of observing basis state `index`. Does not disturb the state.
    fn probability(&self, index: usize) -> Result<f64, QsatError> {
        Ok(self.amplitude(index)?.norm_sqr())
    }

    /// Number of full-register basis states.
    fn dim(&self) -> usize {
        1usize << self.num_qubits()
    }

    /// Dispatches a `Gate` to the matching primitive.
    fn apply_gate(&mut self, gate: &Gate) -> Result<(), QsatError> {
        match gate {
            Gate::Hadamard { target } => self.hadamard(*target),
            Gate::PauliX { target } => self.pauli_x(*target),
            Gate::ControlledUnitary { controls, control_states, target, matrix } => {
                self.controlled_unitary(controls, control_states, *target, matrix)
            }
            Gate::MultiControlledPhaseFlip { qubits } => self.multi_controlled_phase_flip(qubits),
        }
    }
}
