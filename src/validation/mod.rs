// src/validation/mod.rs

//! Normalization checks for amplitude vectors and readout tables.

use crate::core::{Amplitudes, NORM_TOLERANCE, QsatError};
use crate::grover::ProbabilityTable;

fn check_total(total: f64, tolerance: Option<f64>, what: &str) -> Result<(), QsatError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    if (total - 1.0).abs() > effective_tolerance {
        Err(QsatError::Incoherence {
            message: format!("{} normalization failed. Sum = {} (Deviation > {})", what, total, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Checks that the squared amplitudes sum to 1.0.
///
/// # Arguments
/// * `state` - The `Amplitudes` to check.
/// * `tolerance` - Allowed deviation from 1.0; defaults to `NORM_TOLERANCE`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QsatError::Incoherence)` otherwise.
pub fn check_normalization(state: &Amplitudes, tolerance: Option<f64>) -> Result<(), QsatError> {
    check_total(state.norm_sqr(), tolerance, "State vector")
}

/// Checks that a readout table's joint probabilities sum to 1.0 and that no
/// entry is negative.
pub fn check_table_normalization(table: &ProbabilityTable, tolerance: Option<f64>) -> Result<(), QsatError> {
    if let Some((index, p)) = table.joint().iter().enumerate().find(|(_, p)| **p < 0.0) {
        return Err(QsatError::Incoherence {
            message: format!("Probability table has negative entry {} at index {}", p, index),
        });
    }
    check_total(table.total(), tolerance, "Probability table")
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_check_normalization() {
        let good = Amplitudes::new(vec![Complex::new(0.6, 0.0), Complex::new(0.0, 0.8)]);
        assert!(check_normalization(&good, None).is_ok());

        let bad = Amplitudes::new(vec![Complex::new(0.6, 0.0), Complex::new(0.6, 0.0)]);
        assert!(matches!(check_normalization(&bad, None), Err(QsatError::Incoherence { .. })));
        assert!(check_normalization(&bad, Some(0.5)).is_ok());
    }
}
