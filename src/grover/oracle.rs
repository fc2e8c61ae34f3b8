// src/grover/oracle.rs

//! Clause-evaluation oracle.
//!
//! Each clause is an OR, so it is false on exactly the assignments where every
//! literal it mentions is false. Clause `i` therefore compiles to a bit flip
//! of auxiliary `n+i` (start at "true") followed by a flip controlled on the
//! clause's falsifying pattern (back to "false" there). The result is
//! `aux_i = clause_i(x)` for every input basis state `x`, and the fragment is
//! its own inverse.

use crate::circuits::Circuit;
use crate::formula::{Clause, Formula, RegisterLayout};
use crate::operations::{Gate, pauli_x_matrix};
use crate::core::QubitId;
use tracing::debug;

/// Gates that write clause `index`'s truth value into its auxiliary qubit.
///
/// Variables the clause does not mention are left out of the control set.
pub fn compile_clause(layout: &RegisterLayout, index: usize, clause: &Clause) -> Vec<Gate> {
    let target = layout.auxiliary(index);
    let (controls, control_states): (Vec<QubitId>, Vec<bool>) = clause
        .literals()
        // A literal is false when its variable holds the opposite of its polarity.
        .map(|lit| (QubitId(lit.var), !lit.polarity))
        .unzip();

    vec![
        Gate::PauliX { target },
        Gate::ControlledUnitary { controls, control_states, target, matrix: pauli_x_matrix() },
    ]
}

/// Compiles every clause of `formula`, in formula order, into one circuit over
/// the joint register.
pub fn compile_oracle(formula: &Formula) -> Circuit {
    let layout = formula.layout();
    let mut circuit = Circuit::new(layout.num_qubits());
    for (index, clause) in formula.clauses().iter().enumerate() {
        debug!(clause = index, literals = clause.len(), aux = %layout.auxiliary(index), "compiling clause");
        circuit.add_gates(compile_clause(&layout, index, clause));
    }
    circuit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{QuantumBackend, QuantumRegister};
    use crate::core::QsatError;
    use crate::formula::Literal;
    use crate::simulation::StateVectorBackend;

    #[test]
    fn test_clause_controls_on_falsifying_pattern() {
        let formula = Formula::canonical();
        let gates = compile_clause(&formula.layout(), 0, &formula.clauses()[0]);
        assert_eq!(gates[0], Gate::PauliX { target: QubitId(3) });
        match &gates[1] {
            Gate::ControlledUnitary { controls, control_states, target, .. } => {
                assert_eq!(controls, &vec![QubitId(0), QubitId(1), QubitId(2)]);
                // (x1 ∨ x2 ∨ ¬x3) is false only at x1 = 0, x2 = 0, x3 = 1.
                assert_eq!(control_states, &vec![false, false, true]);
                assert_eq!(*target, QubitId(3));
            }
            other => panic!("expected a controlled flip, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_clause_skips_absent_variables() -> Result<(), QsatError> {
        let formula = Formula::with_partial_clauses(3, vec![vec![Literal::neg(1)]])?;
        let gates = compile_clause(&formula.layout(), 0, &formula.clauses()[0]);
        assert!(matches!(
            &gates[1],
            Gate::ControlledUnitary { controls, control_states, .. }
                if controls == &vec![QubitId(1)] && control_states == &vec![true]
        ));
        Ok(())
    }

    #[test]
    fn test_oracle_on_each_basis_input() -> Result<(), QsatError> {
        let formula = Formula::canonical();
        let layout = formula.layout();
        let oracle = compile_oracle(&formula);
        let backend = StateVectorBackend::new();

        for x in 0..formula.input_space() {
            let mut register = backend.allocate(layout.num_qubits())?;
            for q in layout.input_qubits().filter(|q| (x >> q.index()) & 1 == 1) {
                register.pauli_x(q)?;
            }
            oracle.apply(&mut register)?;
            let expected = x | (formula.clause_bits(x) << layout.num_inputs());
            assert!((register.probability(expected)? - 1.0).abs() < 1e-12, "input {:03b}", x);
        }
        Ok(())
    }

    #[test]
    fn test_oracle_is_self_inverse() -> Result<(), QsatError> {
        let formula = Formula::canonical();
        let oracle = compile_oracle(&formula);
        let mut register = StateVectorBackend::new().allocate(formula.layout().num_qubits())?;
        for q in formula.layout().input_qubits() {
            register.hadamard(q)?;
        }
        let before = register.state().clone();
        oracle.apply(&mut register)?;
        assert!(!register.state().approx_eq(&before, 1e-9));
        oracle.apply(&mut register)?;
        assert!(register.state().approx_eq(&before, 1e-9));
        Ok(())
    }
}
