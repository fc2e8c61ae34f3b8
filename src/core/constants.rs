//! Numeric constants shared by the simulator and the amplification engine.

/// Constants and tolerances used throughout the crate
pub mod qsat_constants {
    /// Used for the round-count estimate `(π/4)·sqrt(N/t)`.
    pub const PI: f64 = std::f64::consts::PI;
    /// Allowed deviation of a total probability from 1.0.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Allowed deviation when checking a gate matrix for unitarity.
    pub const UNITARY_TOLERANCE: f64 = 1e-9;
    /// Register width cap used by `StateVectorBackend::new`.
    pub const DEFAULT_MAX_QUBITS: usize = 24;
}
