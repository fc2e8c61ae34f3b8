// src/lib.rs

//! `qsat` - amplitude-amplification search over CNF formulas
//!
//! A formula's clauses are compiled into a reversible oracle that writes each
//! clause's truth value into an auxiliary qubit; a marking operator flips the
//! phase of states where every clause holds, and a diffusion operator reflects
//! the joint register about its mean. The engine talks to its register only
//! through the `backend` traits; `simulation::StateVectorBackend` is the
//! bundled implementation.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod backend;
pub mod simulation;
pub mod formula;
pub mod grover;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use self::core::{Amplitudes, QsatError, QubitId};
pub use operations::Gate;
pub use circuits::{Circuit, CircuitBuilder};
pub use backend::{QuantumBackend, QuantumRegister};
pub use simulation::{StateVectorBackend, StateVectorRegister};
pub use formula::{CANONICAL_SOLUTION_COUNT, Clause, Formula, Literal, MAX_REGISTER_WIDTH, RegisterLayout};
pub use grover::{
    AmplificationConfig, AmplificationReport, AmplificationSession, Amplifier, ProbabilityTable,
    Schedule, round_count, run_amplification,
};
pub use validation::{check_normalization, check_table_normalization};

// Example: canonical 3-SAT instance
/// ```
/// use qsat::{Formula, Literal, run_amplification, QsatError};
///
/// // (x1 ∨ x2 ∨ ¬x3) ∧ (¬x1 ∨ ¬x2 ∨ ¬x3) ∧ (¬x1 ∨ x2 ∨ x3)
/// let formula = Formula::new(3, vec![
///     vec![Literal::pos(0), Literal::pos(1), Literal::neg(2)],
///     vec![Literal::neg(0), Literal::neg(1), Literal::neg(2)],
///     vec![Literal::neg(0), Literal::pos(1), Literal::pos(2)],
/// ])?;
///
/// let table = run_amplification(&formula, 5)?;
/// println!("{}", table);
///
/// // One probability per assignment, and the joint space is normalized.
/// assert_eq!(table.assignment_probabilities().len(), 8);
/// assert!((table.total() - 1.0).abs() < 1e-9);
/// # Ok::<(), QsatError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example: a sparse instance where one round pair visibly amplifies
/// ```
/// use qsat::{Formula, Literal, run_amplification, QsatError};
///
/// // x1 ∧ x2 over three variables: 2 of 8 assignments satisfy it.
/// let formula = Formula::with_partial_clauses(3, vec![
///     vec![Literal::pos(0)],
///     vec![Literal::pos(1)],
/// ])?;
///
/// let table = run_amplification(&formula, 2)?;
/// let satisfied = table.mass_of(|x| formula.evaluate(x));
/// assert!(satisfied > 0.25, "amplified mass {}", satisfied);
/// # Ok::<(), QsatError>(())
/// ```
#[doc(hidden)]
const _: () = ();
