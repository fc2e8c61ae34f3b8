// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod qubit;
pub mod state;

pub use error::QsatError;
pub use qubit::QubitId;
pub use state::Amplitudes;

pub mod constants;
pub use constants::qsat_constants::{NORM_TOLERANCE, PI}; // Re-export
