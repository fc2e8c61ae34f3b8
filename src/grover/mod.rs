// src/grover/mod.rs

//! Amplitude-amplification search over a CNF formula.
//!
//! The run is strictly sequential: prepare the input superposition, compile
//! the clause oracle once, then alternate Marking → Diffusion for the
//! scheduled number of rounds, then read out. The oracle's auxiliary
//! entanglement is never recomputed between rounds and never uncomputed at
//! the end; readout works on joint-register probabilities.

pub mod diffusion;
pub mod marking;
pub mod oracle;
pub mod readout;
pub mod schedule;

pub use diffusion::diffusion_operator;
pub use marking::marking_operator;
pub use oracle::{compile_clause, compile_oracle};
pub use readout::{ProbabilityTable, read_out};
pub use schedule::{AmplificationConfig, RoundSource, Schedule, round_count};

use crate::backend::{QuantumBackend, QuantumRegister};
use crate::circuits::{Circuit, CircuitBuilder};
use crate::core::QsatError;
use crate::formula::{Formula, RegisterLayout};
use crate::simulation::StateVectorBackend;
use crate::validation::check_table_normalization;
use tracing::{debug, info, instrument};

/// Hadamard on every input qubit; auxiliaries stay at `|0>`.
pub fn input_superposition(layout: &RegisterLayout) -> Circuit {
    CircuitBuilder::new(layout.num_qubits()).hadamard_all(layout.input_qubits()).build()
}

/// A register prepared for one formula, with its operators built once.
///
/// Exposes the individual steps so callers can observe the state between
/// them; `Amplifier::run` drives the whole sequence.
pub struct AmplificationSession<R: QuantumRegister> {
    layout: RegisterLayout,
    register: R,
    marking: Circuit,
    diffusion: Circuit,
    rounds_applied: usize,
}

impl<R: QuantumRegister> AmplificationSession<R> {
    /// Allocates the joint register, prepares the input superposition and
    /// applies the compiled oracle exactly once.
    pub fn compile<B>(backend: &B, formula: &Formula) -> Result<Self, QsatError>
    where
        B: QuantumBackend<Register = R>,
    {
        let layout = formula.layout();
        let mut register = backend.allocate(layout.num_qubits())?;
        input_superposition(&layout).apply(&mut register)?;
        compile_oracle(formula).apply(&mut register)?;
        Ok(Self {
            layout,
            register,
            marking: marking_operator(&layout),
            diffusion: diffusion_operator(&layout),
            rounds_applied: 0,
        })
    }

    pub fn layout(&self) -> &RegisterLayout {
        &self.layout
    }

    /// Read-only access to the underlying register.
    pub fn register(&self) -> &R {
        &self.register
    }

    /// Rounds completed so far.
    pub fn rounds_applied(&self) -> usize {
        self.rounds_applied
    }

    /// Applies the marking operator alone.
    pub fn mark(&mut self) -> Result<(), QsatError> {
        self.marking.apply(&mut self.register)
    }

    /// Applies the diffusion operator alone.
    pub fn diffuse(&mut self) -> Result<(), QsatError> {
        self.diffusion.apply(&mut self.register)
    }

    /// One round: exactly one marking followed by exactly one diffusion.
    pub fn round(&mut self) -> Result<(), QsatError> {
        self.mark()?;
        self.diffuse()?;
        self.rounds_applied += 1;
        debug!(round = self.rounds_applied, "amplification round complete");
        Ok(())
    }

    /// Probabilities of every joint basis state; does not alter the register.
    pub fn read_out(&self) -> Result<ProbabilityTable, QsatError> {
        read_out(&self.register, &self.layout)
    }

    /// Hands the register back to `backend`.
    pub fn release<B>(self, backend: &B)
    where
        B: QuantumBackend<Register = R>,
    {
        backend.release(self.register);
    }
}

/// Result of one run: the schedule that was used and the probability table.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplificationReport {
    pub schedule: Schedule,
    pub table: ProbabilityTable,
}

/// Drives amplification runs on a backend.
pub struct Amplifier<B: QuantumBackend> {
    backend: B,
    config: AmplificationConfig,
}

impl<B: QuantumBackend> Amplifier<B> {
    /// Creates an amplifier that trusts the computed round count.
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, AmplificationConfig::default())
    }

    pub fn with_config(backend: B, config: AmplificationConfig) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &AmplificationConfig {
        &self.config
    }

    /// Runs amplitude amplification for `formula`.
    ///
    /// # Arguments
    /// * `formula` - the instance to search.
    /// * `estimated_solutions` - caller's count `t` of satisfying assignments.
    ///
    /// Each diffusion maps amplitudes to `ψ − 2·mean`, so raw amplitudes on
    /// the register carry a global phase of −1 per round relative to the
    /// `2·mean − ψ` form. Probabilities are unaffected.
    ///
    /// # Errors
    /// * `InvalidSolutionCount` if `t = 0` or `t ≥ 2^n`, before the backend is touched.
    /// * Any backend error, after which the register is dropped.
    #[instrument(skip(self, formula), fields(vars = formula.num_vars(), clauses = formula.num_clauses()))]
    pub fn run(&self, formula: &Formula, estimated_solutions: usize) -> Result<AmplificationReport, QsatError> {
        let schedule = Schedule::plan(formula.input_space(), estimated_solutions, &self.config)?;
        info!(%schedule, backend = self.backend.name(), "planned amplification");

        let mut session = AmplificationSession::compile(&self.backend, formula)?;
        for _ in 0..schedule.rounds {
            session.round()?;
        }
        let table = session.read_out()?;
        session.release(&self.backend);

        check_table_normalization(&table, None)?;
        Ok(AmplificationReport { schedule, table })
    }
}

/// Runs `formula` on the default state-vector backend with the computed round count.
pub fn run_amplification(formula: &Formula, estimated_solutions: usize) -> Result<ProbabilityTable, QsatError> {
    Amplifier::new(StateVectorBackend::new())
        .run(formula, estimated_solutions)
        .map(|report| report.table)
}
