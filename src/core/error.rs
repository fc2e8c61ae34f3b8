//! Error handling logic

use thiserror::Error;

use super::qubit::QubitId;

/// Errors raised while validating a formula, compiling its oracle, or driving
/// the register backend.
///
/// Validation variants are produced before the backend is touched; backend
/// variants mean the register is no longer usable and the run must stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QsatError {
    /// A formula must contain at least one clause.
    #[error("Formula Violation: formula has no clauses")]
    EmptyFormula,

    /// A formula must range over at least one variable.
    #[error("Formula Violation: formula has no variables")]
    NoVariables,

    /// Inputs plus auxiliaries do not fit a basis index.
    #[error("Formula Violation: {qubits} variables and clauses exceed the {max}-qubit index limit")]
    RegisterTooWide {
        /// Variables plus clauses
        qubits: usize,
        /// Widest register whose basis index fits in a `usize`
        max: usize,
    },

    /// A literal names a variable outside `0..num_vars`.
    #[error("Formula Violation: clause {clause} references variable {variable}, but the formula has {num_vars} variables")]
    VariableOutOfRange {
        /// Index of the offending clause
        clause: usize,
        /// Offending variable index
        variable: usize,
        /// Number of variables in the formula
        num_vars: usize,
    },

    /// The same variable appears twice within one clause.
    #[error("Formula Violation: clause {clause} mentions variable {variable} more than once")]
    DuplicateVariable {
        /// Index of the offending clause
        clause: usize,
        /// Repeated variable index
        variable: usize,
    },

    /// A full-arity clause does not mention one of the formula's variables.
    #[error("Formula Violation: clause {clause} has no literal for variable {variable}")]
    MissingLiteral {
        /// Index of the offending clause
        clause: usize,
        /// Variable without a literal
        variable: usize,
    },

    /// A clause with no literals can never be satisfied.
    #[error("Formula Violation: clause {clause} has no literals")]
    EmptyClause {
        /// Index of the offending clause
        clause: usize,
    },

    /// The estimated number of satisfying assignments must lie in `1..space`.
    #[error("Invalid Solution Count: {count} is outside 1..{space}")]
    InvalidSolutionCount {
        /// The rejected estimate
        count: usize,
        /// Size of the input space (2^n)
        space: usize,
    },

    /// The backend could not allocate a register of the requested width.
    #[error("Allocation Failure ({qubits} qubits): {message}")]
    Allocation {
        /// Requested register width
        qubits: usize,
        /// Allocation failure message
        message: String,
    },

    /// A gate referenced a qubit the register does not have.
    #[error("Reference Violation: {qubit} is outside a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// Offending qubit
        qubit: QubitId,
        /// Register width
        num_qubits: usize,
    },

    /// A gate is malformed (overlapping controls, non-unitary matrix, ...).
    #[error("Invalid Gate: {message}")]
    InvalidGate {
        /// InvalidGate failure message
        message: String,
    },

    /// A basis index outside `0..2^num_qubits` was queried.
    #[error("Reference Violation: basis index {index} is outside dimension {dim}")]
    IndexOutOfRange {
        /// Queried basis index
        index: usize,
        /// Dimension of the register's amplitude vector
        dim: usize,
    },

    /// An amplitude vector or probability table lost normalization.
    #[error("Incoherence Violation: {message}")]
    Incoherence {
        /// Incoherence failure message
        message: String,
    },
}

impl QsatError {
    /// Returns `true` for errors detected before any backend interaction.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QsatError::EmptyFormula
                | QsatError::NoVariables
                | QsatError::RegisterTooWide { .. }
                | QsatError::VariableOutOfRange { .. }
                | QsatError::DuplicateVariable { .. }
                | QsatError::MissingLiteral { .. }
                | QsatError::EmptyClause { .. }
                | QsatError::InvalidSolutionCount { .. }
        )
    }
}
