// src/grover/diffusion.rs

//! Inversion about the mean over the whole joint register.
//!
//! `H^⊗m · X^⊗m · CZ_all · X^⊗m · H^⊗m` maps every amplitude `ψ` to
//! `ψ − 2·mean`, the reflection `2·mean − ψ` up to a global phase of −1.
//! It spans inputs and auxiliaries together: the auxiliaries stay entangled
//! with the inputs from oracle compilation, so the joint register is the
//! reflection target.

use crate::circuits::{Circuit, CircuitBuilder};
use crate::formula::RegisterLayout;

pub fn diffusion_operator(layout: &RegisterLayout) -> Circuit {
    let all = layout.all_qubits();
    CircuitBuilder::new(layout.num_qubits())
        .hadamard_all(all.clone())
        .pauli_x_all(all.clone())
        .phase_flip(all.clone().collect())
        .pauli_x_all(all.clone())
        .hadamard_all(all)
        .build()
}
