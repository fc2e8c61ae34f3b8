// src/simulation/engine.rs
use crate::backend::QuantumRegister;
use crate::core::constants::qsat_constants::UNITARY_TOLERANCE;
use crate::core::{Amplitudes, QsatError, QubitId};
use crate::operations::Matrix2;
use num_complex::Complex;
use std::collections::HashSet;
use std::f64::consts::FRAC_1_SQRT_2;
use tracing::trace;

/// Dense state-vector register handed out by `StateVectorBackend`.
///
/// Holds `2^num_qubits` complex amplitudes. Qubit `q` is bit `q` of the
/// basis index.
#[derive(Debug, Clone)]
pub struct StateVectorRegister {
    state: Amplitudes,
    num_qubits: usize,
}

impl StateVectorRegister {
    /// Creates a register in `|0...0>`.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, QsatError> {
        if num_qubits == 0 {
            return Err(QsatError::Allocation {
                qubits: 0,
                message: "cannot allocate a register with zero qubits".to_string(),
            });
        }
        let dim = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| QsatError::Allocation {
                qubits: num_qubits,
                message: "amplitude vector dimension overflows usize".to_string(),
            })?;
        Ok(Self { state: Amplitudes::zero_state(dim), num_qubits })
    }

    /// Read-only view of the full amplitude vector.
    pub fn state(&self) -> &Amplitudes {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: Amplitudes) -> Result<(), QsatError> {
        if state.dim() != self.state.dim() {
            return Err(QsatError::InvalidGate {
                message: format!(
                    "cannot set state: provided dimension {} does not match register dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId) -> Result<(), QsatError> {
        if qubit.index() >= self.num_qubits {
            return Err(QsatError::QubitOutOfRange { qubit, num_qubits: self.num_qubits });
        }
        Ok(())
    }

    /// Rejects out-of-range or repeated qubits.
    fn check_distinct(&self, qubits: &[QubitId]) -> Result<(), QsatError> {
        let mut seen = HashSet::with_capacity(qubits.len());
        for qubit in qubits {
            self.check_qubit(*qubit)?;
            if !seen.insert(*qubit) {
                return Err(QsatError::InvalidGate {
                    message: format!("{} appears more than once in a gate", qubit),
                });
            }
        }
        Ok(())
    }

    /// Applies `matrix` to every amplitude pair differing only at `target`,
    /// restricted to pairs whose (target = 0) index satisfies `condition`.
    fn apply_single_qubit_gate<F>(&mut self, target: QubitId, matrix: &Matrix2, condition: F)
    where
        F: Fn(usize) -> bool,
    {
        let t_mask = target.mask();
        let lower_mask = t_mask - 1; // bits to the right of the target
        let half = self.state.dim() / 2;
        let vector = self.state.vector_mut();

        for i in 0..half {
            // Insert a 0 at the target position.
            let i0 = ((i & !lower_mask) << 1) | (i & lower_mask);
            if !condition(i0) {
                continue;
            }
            let i1 = i0 | t_mask;
            let psi_0 = vector[i0];
            let psi_1 = vector[i1];
            vector[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            vector[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
    }
}

/// Checks `U·U† = I` within tolerance.
fn is_unitary(m: &Matrix2) -> bool {
    for r in 0..2 {
        for c in 0..2 {
            let entry = m[r][0] * m[c][0].conj() + m[r][1] * m[c][1].conj();
            let expected = if r == c { 1.0 } else { 0.0 };
            if (entry - Complex::new(expected, 0.0)).norm() > UNITARY_TOLERANCE {
                return false;
            }
        }
    }
    true
}

fn hadamard_matrix() -> Matrix2 {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

impl QuantumRegister for StateVectorRegister {
    fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    fn hadamard(&mut self, target: QubitId) -> Result<(), QsatError> {
        self.check_qubit(target)?;
        trace!(%target, "hadamard");
        self.apply_single_qubit_gate(target, &hadamard_matrix(), |_| true);
        Ok(())
    }

    fn pauli_x(&mut self, target: QubitId) -> Result<(), QsatError> {
        self.check_qubit(target)?;
        trace!(%target, "pauli_x");
        let t_mask = target.mask();
        let vector = self.state.vector_mut();
        for i in 0..vector.len() {
            if i & t_mask == 0 {
                vector.swap(i, i | t_mask);
            }
        }
        Ok(())
    }

    fn controlled_unitary(
        &mut self,
        controls: &[QubitId],
        control_states: &[bool],
        target: QubitId,
        matrix: &Matrix2,
    ) -> Result<(), QsatError> {
        if controls.len() != control_states.len() {
            return Err(QsatError::InvalidGate {
                message: format!(
                    "{} controls but {} control states",
                    controls.len(),
                    control_states.len()
                ),
            });
        }
        self.check_qubit(target)?;
        self.check_distinct(controls)?;
        if controls.contains(&target) {
            return Err(QsatError::InvalidGate {
                message: format!("{} cannot be both control and target", target),
            });
        }
        if !is_unitary(matrix) {
            return Err(QsatError::InvalidGate {
                message: "controlled matrix is not unitary".to_string(),
            });
        }

        // Fold the pattern into a (mask, expected bits) pair.
        let (ctrl_mask, ctrl_value) = controls.iter().zip(control_states.iter()).fold(
            (0usize, 0usize),
            |(mask, value), (qubit, state)| {
                (mask | qubit.mask(), if *state { value | qubit.mask() } else { value })
            },
        );
        trace!(%target, controls = controls.len(), "controlled_unitary");
        self.apply_single_qubit_gate(target, matrix, |i0| i0 & ctrl_mask == ctrl_value);
        Ok(())
    }

    fn multi_controlled_phase_flip(&mut self, qubits: &[QubitId]) -> Result<(), QsatError> {
        if qubits.is_empty() {
            return Err(QsatError::InvalidGate {
                message: "phase flip needs at least one qubit".to_string(),
            });
        }
        self.check_distinct(qubits)?;
        let mask = qubits.iter().fold(0usize, |m, q| m | q.mask());
        trace!(qubits = qubits.len(), "multi_controlled_phase_flip");
        for (i, amp) in self.state.vector_mut().iter_mut().enumerate() {
            if i & mask == mask {
                *amp = -*amp;
            }
        }
        Ok(())
    }

    fn amplitude(&self, index: usize) -> Result<Complex<f64>, QsatError> {
        self.state
            .vector()
            .get(index)
            .copied()
            .ok_or(QsatError::IndexOutOfRange { index, dim: self.state.dim() })
    }
}

