// src/formula/mod.rs

//! Conjunctive-normal-form formulas and the register layout derived from them.
//!
//! A `Formula` is validated once at construction and immutable afterwards.
//! Variable `v` maps to input qubit `v`; clause `i` maps to auxiliary qubit
//! `num_vars + i`.

use crate::core::{QsatError, QubitId};
use std::collections::HashSet;
use std::fmt;

/// Number of satisfying assignments of `Formula::canonical()`.
pub const CANONICAL_SOLUTION_COUNT: usize = 5;

/// Widest joint register (inputs plus auxiliaries) whose basis indices fit in a `usize`.
pub const MAX_REGISTER_WIDTH: usize = usize::BITS as usize - 1;

/// A variable together with the value it must take for the literal to be true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Index of the variable in `0..num_vars`.
    pub var: usize,
    /// Required value: `true` for `x`, `false` for `¬x`.
    pub polarity: bool,
}

impl Literal {
    pub fn new(var: usize, polarity: bool) -> Self {
        Self { var, polarity }
    }

    /// The positive literal `x_var`.
    pub fn pos(var: usize) -> Self {
        Self::new(var, true)
    }

    /// The negative literal `¬x_var`.
    pub fn neg(var: usize) -> Self {
        Self::new(var, false)
    }

    /// Truth value of the literal under `assignment` (bit `v` = variable `v`).
    pub fn evaluate(&self, assignment: usize) -> bool {
        ((assignment >> self.var) & 1 == 1) == self.polarity
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Variables are printed 1-based, the way the formula is usually written.
        if self.polarity {
            write!(f, "x{}", self.var + 1)
        } else {
            write!(f, "¬x{}", self.var + 1)
        }
    }
}

/// A disjunction of literals, stored as one optional polarity per variable.
///
/// `None` marks a variable the clause does not mention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    polarities: Vec<Option<bool>>,
}

impl Clause {
    /// Literals in variable order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.polarities
            .iter()
            .enumerate()
            .filter_map(|(var, p)| p.map(|polarity| Literal::new(var, polarity)))
    }

    /// Required polarity of `var`, or `None` when the clause does not mention it.
    pub fn polarity(&self, var: usize) -> Option<bool> {
        self.polarities.get(var).copied().flatten()
    }

    /// Number of literals in the clause.
    pub fn len(&self) -> usize {
        self.polarities.iter().filter(|p| p.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` if any literal holds under `assignment`.
    pub fn evaluate(&self, assignment: usize) -> bool {
        self.literals().any(|lit| lit.evaluate(assignment))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, lit) in self.literals().enumerate() {
            write!(f, "{}{}", if i > 0 { " ∨ " } else { "" }, lit)?;
        }
        write!(f, ")")
    }
}

/// Qubit positions assigned to a formula: inputs first, then one auxiliary per clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterLayout {
    num_inputs: usize,
    num_auxiliary: usize,
}

impl RegisterLayout {
    /// Total register width, `n + terms`.
    pub fn num_qubits(&self) -> usize {
        self.num_inputs + self.num_auxiliary
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_auxiliary(&self) -> usize {
        self.num_auxiliary
    }

    /// Input qubits `0..n`.
    pub fn input_qubits(&self) -> impl Iterator<Item = QubitId> + Clone {
        (0..self.num_inputs).map(QubitId)
    }

    /// Auxiliary qubits `n..n+terms`.
    pub fn auxiliary_qubits(&self) -> impl Iterator<Item = QubitId> + Clone {
        (self.num_inputs..self.num_qubits()).map(QubitId)
    }

    /// Every qubit of the joint register.
    pub fn all_qubits(&self) -> impl Iterator<Item = QubitId> + Clone {
        (0..self.num_qubits()).map(QubitId)
    }

    /// The auxiliary qubit holding clause `clause`.
    pub fn auxiliary(&self, clause: usize) -> QubitId {
        QubitId(self.num_inputs + clause)
    }

    /// Size of the input space, `N = 2^n`.
    pub fn input_space(&self) -> usize {
        1 << self.num_inputs
    }

    /// Splits a joint basis index into (input assignment, auxiliary bits).
    pub fn split_index(&self, index: usize) -> (usize, usize) {
        (index & (self.input_space() - 1), index >> self.num_inputs)
    }
}

/// A validated CNF formula over `num_vars` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    num_vars: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    /// Builds a formula in which every clause mentions every variable exactly once.
    ///
    /// # Errors
    /// Fails on an empty formula, an out-of-range or repeated variable, a
    /// clause missing a literal for one of the `num_vars` variables, or more
    /// than `MAX_REGISTER_WIDTH` variables and clauses combined.
    pub fn new(num_vars: usize, clauses: Vec<Vec<Literal>>) -> Result<Self, QsatError> {
        Self::build(num_vars, clauses, true)
    }

    /// Like `new`, but clauses may omit variables ("don't care").
    pub fn with_partial_clauses(num_vars: usize, clauses: Vec<Vec<Literal>>) -> Result<Self, QsatError> {
        Self::build(num_vars, clauses, false)
    }

    /// `(x1 ∨ x2 ∨ ¬x3) ∧ (¬x1 ∨ ¬x2 ∨ ¬x3) ∧ (¬x1 ∨ x2 ∨ x3)`, with
    /// `CANONICAL_SOLUTION_COUNT` satisfying assignments.
    pub fn canonical() -> Self {
        let clauses = [
            [true, true, false],
            [false, false, false],
            [false, true, true],
        ]
        .iter()
        .map(|pattern| Clause { polarities: pattern.iter().map(|p| Some(*p)).collect() })
        .collect();
        Self { num_vars: 3, clauses }
    }

    fn build(num_vars: usize, clauses: Vec<Vec<Literal>>, full_arity: bool) -> Result<Self, QsatError> {
        if num_vars == 0 {
            return Err(QsatError::NoVariables);
        }
        if clauses.is_empty() {
            return Err(QsatError::EmptyFormula);
        }
        let qubits = num_vars.saturating_add(clauses.len());
        if qubits > MAX_REGISTER_WIDTH {
            return Err(QsatError::RegisterTooWide { qubits, max: MAX_REGISTER_WIDTH });
        }

        let mut built = Vec::with_capacity(clauses.len());
        for (index, literals) in clauses.into_iter().enumerate() {
            if literals.is_empty() {
                return Err(QsatError::EmptyClause { clause: index });
            }
            let mut polarities = vec![None; num_vars];
            let mut seen = HashSet::with_capacity(literals.len());
            for lit in literals {
                if lit.var >= num_vars {
                    return Err(QsatError::VariableOutOfRange { clause: index, variable: lit.var, num_vars });
                }
                if !seen.insert(lit.var) {
                    return Err(QsatError::DuplicateVariable { clause: index, variable: lit.var });
                }
                polarities[lit.var] = Some(lit.polarity);
            }
            if full_arity {
                if let Some(variable) = polarities.iter().position(Option::is_none) {
                    return Err(QsatError::MissingLiteral { clause: index, variable });
                }
            }
            built.push(Clause { polarities });
        }

        Ok(Self { num_vars, clauses: built })
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Number of clauses (`terms`).
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Size of the input space, `2^num_vars`.
    pub fn input_space(&self) -> usize {
        1 << self.num_vars
    }

    /// Qubit layout for this formula.
    pub fn layout(&self) -> RegisterLayout {
        RegisterLayout { num_inputs: self.num_vars, num_auxiliary: self.clauses.len() }
    }

    /// Classical reference evaluation: `true` if every clause holds.
    pub fn evaluate(&self, assignment: usize) -> bool {
        self.clauses.iter().all(|c| c.evaluate(assignment))
    }

    /// Truth value of each clause under `assignment`, packed as bit `i` = clause `i`.
    pub fn clause_bits(&self, assignment: usize) -> usize {
        self.clauses
            .iter()
            .enumerate()
            .filter(|(_, c)| c.evaluate(assignment))
            .fold(0, |bits, (i, _)| bits | (1 << i))
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            write!(f, "{}{}", if i > 0 { " ∧ " } else { "" }, clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(p: [bool; 3]) -> Vec<Literal> {
        p.iter().enumerate().map(|(v, pol)| Literal::new(v, *pol)).collect()
    }

    #[test]
    fn test_canonical_matches_explicit_construction() -> Result<(), QsatError> {
        let built = Formula::new(
            3,
            vec![full([true, true, false]), full([false, false, false]), full([false, true, true])],
        )?;
        assert_eq!(built, Formula::canonical());
        assert_eq!(built.to_string(), "(x1 ∨ x2 ∨ ¬x3) ∧ (¬x1 ∨ ¬x2 ∨ ¬x3) ∧ (¬x1 ∨ x2 ∨ x3)");
        Ok(())
    }

    #[test]
    fn test_canonical_solutions() {
        let formula = Formula::canonical();
        // (x1, x2, x3) packed as bit 0, 1, 2.
        let expected: Vec<usize> = vec![0b000, 0b010, 0b110, 0b101, 0b011];
        let mut found: Vec<usize> = (0..8).filter(|x| formula.evaluate(*x)).collect();
        let mut expected_sorted = expected.clone();
        expected_sorted.sort();
        found.sort();
        assert_eq!(found, expected_sorted);
        assert_eq!(found.len(), CANONICAL_SOLUTION_COUNT);
    }

    #[test]
    fn test_strict_construction_errors() {
        assert_eq!(Formula::new(3, vec![]), Err(QsatError::EmptyFormula));
        assert_eq!(Formula::new(0, vec![vec![]]), Err(QsatError::NoVariables));
        assert_eq!(
            Formula::new(3, vec![full([true; 3]), vec![Literal::pos(0), Literal::neg(1)]]),
            Err(QsatError::MissingLiteral { clause: 1, variable: 2 })
        );
        assert_eq!(
            Formula::new(2, vec![vec![Literal::pos(0), Literal::neg(2)]]),
            Err(QsatError::VariableOutOfRange { clause: 0, variable: 2, num_vars: 2 })
        );
        assert_eq!(
            Formula::new(2, vec![vec![Literal::pos(1), Literal::neg(1)]]),
            Err(QsatError::DuplicateVariable { clause: 0, variable: 1 })
        );
    }

    #[test]
    fn test_register_width_limit() {
        let wide = usize::BITS as usize;
        let err = Formula::new(wide, vec![(0..wide).map(Literal::pos).collect()]).unwrap_err();
        assert_eq!(err, QsatError::RegisterTooWide { qubits: wide + 1, max: MAX_REGISTER_WIDTH });
        assert!(err.is_validation());

        // One clause short of the limit still builds, and its input space fits.
        let formula = Formula::with_partial_clauses(MAX_REGISTER_WIDTH - 1, vec![vec![Literal::pos(0)]]).unwrap();
        assert_eq!(formula.layout().num_qubits(), MAX_REGISTER_WIDTH);
        assert_eq!(formula.input_space(), 1 << (MAX_REGISTER_WIDTH - 1));
    }

    #[test]
    fn test_partial_clauses() -> Result<(), QsatError> {
        let formula = Formula::with_partial_clauses(3, vec![vec![Literal::pos(0)], vec![Literal::neg(2)]])?;
        assert_eq!(formula.clauses()[0].polarity(1), None);
        assert_eq!(formula.clauses()[1].polarity(2), Some(false));
        assert!(formula.evaluate(0b001));
        assert!(!formula.evaluate(0b101));
        assert_eq!(
            Formula::with_partial_clauses(3, vec![vec![Literal::pos(0)], vec![]]),
            Err(QsatError::EmptyClause { clause: 1 })
        );
        Ok(())
    }

    #[test]
    fn test_layout_positions() {
        let layout = Formula::canonical().layout();
        assert_eq!(layout.num_qubits(), 6);
        assert_eq!(layout.auxiliary(0), QubitId(3));
        assert_eq!(layout.auxiliary_qubits().collect::<Vec<_>>(), vec![QubitId(3), QubitId(4), QubitId(5)]);
        assert_eq!(layout.split_index(0b101_011), (0b011, 0b101));
    }

    #[test]
    fn test_clause_bits() {
        let formula = Formula::canonical();
        // x = (1, 1, 1): clause 0 true, clause 1 false, clause 2 true.
        assert_eq!(formula.clause_bits(0b111), 0b101);
    }
}
