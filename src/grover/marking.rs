// src/grover/marking.rs

use crate::circuits::{Circuit, CircuitBuilder};
use crate::formula::RegisterLayout;

/// Phase flip on every basis state whose auxiliary qubits all read 1, i.e.
/// every state where all clauses hold. Probabilities are unchanged.
pub fn marking_operator(layout: &RegisterLayout) -> Circuit {
    CircuitBuilder::new(layout.num_qubits())
        .phase_flip(layout.auxiliary_qubits().collect())
        .build()
}
