// src/simulation/mod.rs

//! Dense state-vector implementation of the `backend` traits.
//!
//! This is the collaborator the amplification engine drives in tests and in
//! the demo binary: a full `2^n` amplitude vector with exact gate application
//! and non-destructive amplitude queries.

pub(crate) mod engine;

pub use engine::StateVectorRegister;

use crate::backend::QuantumBackend;
use crate::core::QsatError;
use crate::core::constants::qsat_constants::DEFAULT_MAX_QUBITS;
use tracing::info;

/// Allocates `StateVectorRegister`s up to a configured width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateVectorBackend {
    max_qubits: usize,
}

impl StateVectorBackend {
    /// Creates a backend with the default register width cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend that refuses registers wider than `max_qubits`.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self { max_qubits }
    }
}

impl Default for StateVectorBackend {
    fn default() -> Self {
        Self { max_qubits: DEFAULT_MAX_QUBITS }
    }
}

impl QuantumBackend for StateVectorBackend {
    type Register = StateVectorRegister;

    fn allocate(&self, num_qubits: usize) -> Result<StateVectorRegister, QsatError> {
        if num_qubits > self.max_qubits {
            return Err(QsatError::Allocation {
                qubits: num_qubits,
                message: format!("backend is limited to {} qubits", self.max_qubits),
            });
        }
        let register = StateVectorRegister::init(num_qubits)?;
        info!(
            backend = self.name(),
            qubits = num_qubits,
            amplitudes = register.state().dim(),
            "allocated register"
        );
        Ok(register)
    }

    fn name(&self) -> &'static str {
        "state-vector"
    }
}
