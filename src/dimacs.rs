//! DIMACS CNF input and SAT-competition-style output.

use std::fmt::Write as _;

use crate::error::SolverError;
use crate::solver::Outcome;

/// A parsed DIMACS file: its clauses (raw signed literals, zero-terminators
/// already stripped) and the variable count declared in the `p cnf` header.
pub struct Dimacs {
    pub clauses: Vec<Vec<i64>>,
    pub num_vars: usize,
}

/// Parses a DIMACS CNF document. `c` comment lines and a leading `p cnf
/// <vars> <clauses>` header are recognized; the header's variable count is
/// taken as authoritative even if a clause references a lower index.
pub fn parse(content: &str) -> Result<Dimacs, SolverError> {
    let mut declared_vars = None;
    let mut clauses = Vec::new();
    let mut current = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("p cnf") {
            let mut fields = rest.split_whitespace();
            let vars = fields
                .next()
                .ok_or_else(|| SolverError::MalformedInput("missing variable count in p cnf header".to_string()))?
                .parse::<usize>()
                .map_err(|e| SolverError::MalformedInput(format!("bad variable count: {e}")))?;
            declared_vars = Some(vars);
            continue;
        }

        for token in line.split_whitespace() {
            let value: i64 = token
                .parse()
                .map_err(|e| SolverError::MalformedInput(format!("not an integer literal: {token} ({e})")))?;
            if value == 0 {
                clauses.push(std::mem::take(&mut current));
            } else {
                current.push(value);
            }
        }
    }
    if !current.is_empty() {
        clauses.push(current);
    }

    let num_vars = declared_vars.unwrap_or_else(|| {
        clauses
            .iter()
            .flatten()
            .map(|&l| l.unsigned_abs() as usize)
            .max()
            .unwrap_or(0)
    });

    Ok(Dimacs { clauses, num_vars })
}

/// Renders an [`Outcome`] in the `s .../v ...` form SAT-competition tooling
/// expects, e.g. for piping into a verifier.
pub fn write(outcome: &Outcome) -> String {
    let mut out = String::new();
    match outcome {
        Outcome::Sat(model) => {
            writeln!(out, "s SATISFIABLE").unwrap();
            write!(out, "v").unwrap();
            for lit in model {
                write!(out, " {lit}").unwrap();
            }
            writeln!(out, " 0").unwrap();
        }
        Outcome::Unsat => {
            writeln!(out, "s UNSATISFIABLE").unwrap();
        }
    }
    out
}
