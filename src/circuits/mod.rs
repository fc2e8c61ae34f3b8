// src/circuits/mod.rs

//! Ordered gate sequences over a fixed-width register.
//!
//! The oracle compiler, the marking operator and the diffusion operator each
//! produce a `Circuit`; the scheduler replays them onto a backend register.

use crate::backend::QuantumRegister;
use crate::core::{QsatError, QubitId};
use crate::operations::Gate;
use std::fmt;

/// An ordered sequence of gates acting on a register of `num_qubits` qubits.
///
/// Order is load-bearing: `apply` replays gates exactly as they were added.
#[derive(Clone, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit for a register of `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self { num_qubits, gates: Vec::new() }
    }

    /// Appends a single gate.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Appends every gate yielded by `gates`.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// Register width this circuit was built for.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Slice of the ordered gates.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the total number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Replays every gate onto `register`, stopping at the first backend error.
    pub fn apply<R: QuantumRegister + ?Sized>(&self, register: &mut R) -> Result<(), QsatError> {
        if register.num_qubits() != self.num_qubits {
            return Err(QsatError::InvalidGate {
                message: format!(
                    "circuit built for {} qubits applied to a {}-qubit register",
                    self.num_qubits,
                    register.num_qubits()
                ),
            });
        }
        for gate in &self.gates {
            register.apply_gate(gate)?;
        }
        Ok(())
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining helper for building `Circuit`s.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a builder for a register of `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self { circuit: Circuit::new(num_qubits) }
    }

    /// Adds a single gate.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds a Hadamard on each of `targets`.
    pub fn hadamard_all<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = QubitId>,
    {
        self.circuit.add_gates(targets.into_iter().map(|target| Gate::Hadamard { target }));
        self
    }

    /// Adds a bit flip on each of `targets`.
    pub fn pauli_x_all<I>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = QubitId>,
    {
        self.circuit.add_gates(targets.into_iter().map(|target| Gate::PauliX { target }));
        self
    }

    /// Adds an all-ones-conditioned phase flip over `qubits`.
    pub fn phase_flip(mut self, qubits: Vec<QubitId>) -> Self {
        self.circuit.add_gate(Gate::MultiControlledPhaseFlip { qubits });
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "qsat::Circuit[{} gates on {} qubits]", self.gates.len(), self.num_qubits)?;
        if self.gates.is_empty() || self.num_qubits == 0 {
            return Ok(());
        }

        const GATE_WIDTH: usize = 5; // e.g. "──H──"
        const H_WIRE: char = '─';
        const V_WIRE: char = '│';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            let total = GATE_WIDTH.saturating_sub(slen);
            let pre = total / 2;
            format!(
                "{}{}{}",
                H_WIRE.to_string().repeat(pre),
                symbol,
                H_WIRE.to_string().repeat(total - pre)
            )
        }

        let rows = self.num_qubits;
        let cols = self.gates.len();
        let wire = H_WIRE.to_string().repeat(GATE_WIDTH);
        let mut grid: Vec<Vec<String>> = vec![vec![wire; cols]; rows];
        // v_connect[row][t] is the connector drawn below `row` at time `t`.
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; cols]; rows];

        for (t, gate) in self.gates.iter().enumerate() {
            let mut span: Vec<usize> = Vec::new();
            match gate {
                Gate::Hadamard { target } | Gate::PauliX { target } => {
                    if target.index() < rows {
                        grid[target.index()][t] = format_gate(gate.symbol());
                    }
                }
                Gate::ControlledUnitary { controls, control_states, target, .. } => {
                    for (control, state) in controls.iter().zip(control_states.iter()) {
                        if control.index() < rows {
                            grid[control.index()][t] = format_gate(if *state { "●" } else { "○" });
                            span.push(control.index());
                        }
                    }
                    if target.index() < rows {
                        grid[target.index()][t] = format_gate(gate.symbol());
                        span.push(target.index());
                    }
                }
                Gate::MultiControlledPhaseFlip { qubits } => {
                    for qubit in qubits.iter().filter(|q| q.index() < rows) {
                        grid[qubit.index()][t] = format_gate("●");
                        span.push(qubit.index());
                    }
                }
            }
            if let (Some(lo), Some(hi)) = (span.iter().min(), span.iter().max()) {
                for row in v_connect.iter_mut().take(*hi).skip(*lo) {
                    row[t] = V_WIRE;
                }
            }
        }

        let label_width = format!("{}", QubitId(rows - 1)).len() + 2;
        for r in 0..rows {
            let label = format!("{}: ", QubitId(r));
            writeln!(f, "{:<width$}{}", label, grid[r].join(""), width = label_width)?;
            if r + 1 < rows {
                write!(f, "{}", " ".repeat(label_width))?;
                for t in 0..cols {
                    let pre = (GATE_WIDTH - 1) / 2;
                    let post = GATE_WIDTH - 1 - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), v_connect[r][t], " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
