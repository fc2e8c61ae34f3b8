// tests/property_tests.rs

use proptest::prelude::*;
use qsat::{AmplificationConfig, AmplificationSession, Amplifier, Formula, Literal, StateVectorBackend};

const TOLERANCE: f64 = 1e-9;

/// Random formulas with partial clauses: 1..=4 variables, 1..=3 clauses.
/// Each variable is absent (0), positive (1) or negated (2) in each clause.
fn arb_formula() -> impl Strategy<Value = Formula> {
    (1usize..=4).prop_flat_map(|num_vars| {
        prop::collection::vec(prop::collection::vec(0u8..3, num_vars), 1..=3).prop_map(move |patterns| {
            let clauses = patterns
                .into_iter()
                .map(|pattern| {
                    let mut literals: Vec<Literal> = pattern
                        .iter()
                        .enumerate()
                        .filter(|(_, choice)| **choice != 0)
                        .map(|(var, choice)| Literal::new(var, *choice == 1))
                        .collect();
                    if literals.is_empty() {
                        literals.push(Literal::pos(0));
                    }
                    literals
                })
                .collect();
            Formula::with_partial_clauses(num_vars, clauses).unwrap()
        })
    })
}

fn session(formula: &Formula) -> AmplificationSession<qsat::StateVectorRegister> {
    AmplificationSession::compile(&StateVectorBackend::new(), formula).unwrap()
}

proptest! {
    /// Before any round, each assignment sits on the joint state whose
    /// auxiliary bits are its clause values.
    #[test]
    fn oracle_writes_clause_values(formula in arb_formula()) {
        let layout = formula.layout();
        let table = session(&formula).read_out().unwrap();
        let share = 1.0 / formula.input_space() as f64;
        for x in 0..formula.input_space() {
            let index = x | (formula.clause_bits(x) << layout.num_inputs());
            prop_assert!((table.joint()[index] - share).abs() < TOLERANCE);
        }
        prop_assert!((table.total() - 1.0).abs() < TOLERANCE);
    }

    /// Marking changes phases only.
    #[test]
    fn marking_preserves_probabilities(formula in arb_formula(), warmup in 0usize..3) {
        let mut s = session(&formula);
        for _ in 0..warmup {
            s.round().unwrap();
        }
        let before = s.read_out().unwrap();
        s.mark().unwrap();
        let after = s.read_out().unwrap();
        for (p, q) in before.joint().iter().zip(after.joint()) {
            prop_assert!((p - q).abs() < TOLERANCE);
        }
    }

    #[test]
    fn diffusion_is_self_inverse(formula in arb_formula()) {
        let mut s = session(&formula);
        s.mark().unwrap();
        let before = s.register().state().clone();
        s.diffuse().unwrap();
        s.diffuse().unwrap();
        prop_assert!(s.register().state().approx_eq(&before, TOLERANCE));
    }

    #[test]
    fn runs_stay_normalized(formula in arb_formula(), rounds in 0usize..4) {
        let amplifier = Amplifier::with_config(StateVectorBackend::new(), AmplificationConfig::with_rounds(rounds));
        let report = amplifier.run(&formula, 1).unwrap();
        prop_assert_eq!(report.schedule.rounds, rounds);
        prop_assert!((report.table.total() - 1.0).abs() < TOLERANCE);
        prop_assert_eq!(report.table.assignment_probabilities().len(), formula.input_space());
    }
}
