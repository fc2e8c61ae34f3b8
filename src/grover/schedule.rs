// src/grover/schedule.rs

//! Amplification round count.

use crate::core::{PI, QsatError};
use std::fmt;

/// Caller-supplied knobs for one amplification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmplificationConfig {
    /// Replaces the computed round count, e.g. to show over- or under-rotation.
    pub rounds_override: Option<usize>,
}

impl AmplificationConfig {
    /// Config that always runs exactly `rounds` rounds.
    pub fn with_rounds(rounds: usize) -> Self {
        Self { rounds_override: Some(rounds) }
    }
}

/// Where a schedule's round count came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundSource {
    Computed,
    Override,
}

/// Round count fixed once, before any amplification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Number of Marking → Diffusion rounds to run.
    pub rounds: usize,
    /// The value `round((π/4)·sqrt(N/t))` would give, kept for reporting.
    pub computed_rounds: usize,
    pub source: RoundSource,
}

impl Schedule {
    /// Validates the estimate and fixes the round count for this run.
    pub fn plan(input_space: usize, estimated_solutions: usize, config: &AmplificationConfig) -> Result<Self, QsatError> {
        let computed_rounds = round_count(input_space, estimated_solutions)?;
        Ok(match config.rounds_override {
            Some(rounds) => Self { rounds, computed_rounds, source: RoundSource::Override },
            None => Self { rounds: computed_rounds, computed_rounds, source: RoundSource::Computed },
        })
    }

    /// `true` when no rounds will run and the uniform superposition is read out as is.
    pub fn is_degenerate(&self) -> bool {
        self.rounds == 0
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            RoundSource::Computed => write!(f, "{} round(s)", self.rounds),
            RoundSource::Override => {
                write!(f, "{} round(s) (override; computed {})", self.rounds, self.computed_rounds)
            }
        }
    }
}

/// `round((π/4)·sqrt(N/t))` for `N = input_space`, `t = estimated_solutions`.
///
/// # Errors
/// `InvalidSolutionCount` when `t = 0` or `t ≥ N`.
pub fn round_count(input_space: usize, estimated_solutions: usize) -> Result<usize, QsatError> {
    if estimated_solutions == 0 || estimated_solutions >= input_space {
        return Err(QsatError::InvalidSolutionCount { count: estimated_solutions, space: input_space });
    }
    let ratio = input_space as f64 / estimated_solutions as f64;
    Ok((PI / 4.0 * ratio.sqrt()).round() as usize)
}
