use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use satgpt::dimacs;
use satgpt::formula::{Formula, FormulaOutcome};
use satgpt::reference;
use satgpt::solver::{self, Outcome};

/// A watched-literal SAT solver (Knuth's Algorithm B).
#[derive(Parser, Debug)]
#[command(name = "satgpt", version, about)]
struct Cli {
    /// Path to a DIMACS CNF file.
    path: PathBuf,

    /// Use the recursive Davis-Putnam reference solver instead of the
    /// watched-literal engine.
    #[arg(long)]
    reference: bool,

    /// Enumerate every satisfying assignment via the reference solver
    /// (implies --reference).
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.path)
        .with_context(|| format!("reading {}", cli.path.display()))?;
    let parsed =
        dimacs::parse(&content).with_context(|| format!("parsing {}", cli.path.display()))?;
    info!(
        "{}: {} vars, {} clauses",
        cli.path.display(),
        parsed.num_vars,
        parsed.clauses.len()
    );

    let start = Instant::now();

    if cli.all {
        let models = reference::solve_all(&parsed.clauses, parsed.num_vars)
            .with_context(|| format!("solving {}", cli.path.display()))?;
        if models.is_empty() {
            println!("s UNSATISFIABLE");
        } else {
            println!("s SATISFIABLE");
            for model in &models {
                print!("{}", dimacs::write(&Outcome::Sat(model.clone())));
            }
            println!("c {} model(s)", models.len());
        }
        println!("c time: {:.4}s", start.elapsed().as_secs_f64());
        return Ok(());
    }

    let outcome = if cli.reference {
        let solved = reference::solve_any(&parsed.clauses, parsed.num_vars)
            .with_context(|| format!("solving {}", cli.path.display()))?;
        match solved {
            Some(model) => Outcome::Sat(model),
            None => Outcome::Unsat,
        }
    } else {
        match Formula::from_clauses(&parsed.clauses)? {
            FormulaOutcome::TriviallySat => Outcome::Sat(vec![]),
            FormulaOutcome::TrivialUnsat => Outcome::Unsat,
            FormulaOutcome::Built(formula) => solver::solve(&formula),
        }
    };

    print!("{}", dimacs::write(&outcome));
    println!("c time: {:.4}s", start.elapsed().as_secs_f64());

    Ok(())
}
