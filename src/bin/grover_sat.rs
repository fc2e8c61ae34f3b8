//! Demo: amplitude amplification on the canonical 3-SAT instance
//! `(x1 ∨ x2 ∨ ¬x3) ∧ (¬x1 ∨ ¬x2 ∨ ¬x3) ∧ (¬x1 ∨ x2 ∨ x3)`.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use qsat::grover::{compile_oracle, diffusion_operator, input_superposition, marking_operator};
use qsat::{AmplificationConfig, Amplifier, CANONICAL_SOLUTION_COUNT, Formula, StateVectorBackend};

#[derive(Debug, Parser)]
#[command(name = "grover-sat")]
struct Args {
    /// Estimated number of satisfying assignments.
    #[arg(long, default_value_t = CANONICAL_SOLUTION_COUNT)]
    solutions: usize,

    /// Run exactly this many rounds instead of the computed count.
    #[arg(long)]
    rounds: Option<usize>,

    /// Sample this many measurement outcomes from the final table.
    #[arg(long, default_value_t = 0)]
    shots: usize,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print the compiled circuits.
    #[arg(long, default_value_t = false)]
    show_circuit: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let formula = Formula::canonical();
    info!(%formula, "searching");

    if args.show_circuit {
        let layout = formula.layout();
        println!("State preparation:\n{}", input_superposition(&layout));
        println!("Oracle:\n{}", compile_oracle(&formula));
        println!("Marking:\n{}", marking_operator(&layout));
        println!("Diffusion:\n{}", diffusion_operator(&layout));
    }

    let config = AmplificationConfig { rounds_override: args.rounds };
    let amplifier = Amplifier::with_config(StateVectorBackend::new(), config);
    let report = amplifier.run(&formula, args.solutions)?;

    println!("\nCircuit output after {}:", report.schedule);
    print!("{}", report.table);

    let satisfied = report.table.mass_of(|x| formula.evaluate(x));
    println!("Satisfying assignments hold {:.6} of the probability mass", satisfied);

    if args.shots > 0 {
        println!("\n{} shots (seed {}):", args.shots, args.seed);
        let counts = report.table.sample(args.shots, args.seed);
        for (assignment, count) in counts.iter().enumerate() {
            let bits: Vec<String> = (0..formula.num_vars()).map(|v| ((assignment >> v) & 1).to_string()).collect();
            let mark = if formula.evaluate(assignment) { "*" } else { " " };
            println!("  ({}){} {}", bits.join(", "), mark, count);
        }
    }

    Ok(())
}
