//! The watched-literal search driver: Knuth's Algorithm B (TAOCP 7.2.2.2),
//! reproduced as an explicit state machine rather than recursive search.

use log::{debug, trace};

use crate::formula::Formula;
use crate::lit::Lit;

/// Outcome of a `solve` call. `Unsat` is the single marker for both
/// algorithmic UNSAT and trivial (empty-clause) UNSAT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A satisfying assignment, one signed literal per variable in
    /// 1..=num_vars order.
    Sat(Vec<i64>),
    Unsat,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    B2,
    B3,
    B4,
    B5,
    B6,
}

/// Runs Algorithm B to completion. Single-shot: all working storage is
/// local to this call, nothing survives across invocations.
pub fn solve(formula: &Formula) -> Outcome {
    let num_vars = formula.num_vars();
    let num_clauses = formula.num_clauses();
    debug!(
        "solve: {} vars, {} clauses",
        num_vars, num_clauses
    );

    // `literals` is mutated in place by B3's swap-to-front; `start` never
    // changes after layout.
    let mut literals: Vec<Lit> = formula.literals().to_vec();
    let start: &[usize] = formula.clause_starts();
    let sentinel = num_clauses;

    let mut watch = vec![sentinel; 2 * num_vars];
    let mut next = vec![sentinel; num_clauses];

    // Thread initial watch chains in reverse clause order so chain order
    // ends up matching input order: each clause's first literal is its
    // watched literal.
    for i in (0..num_clauses).rev() {
        let l0 = literals[start[i]].to_usize();
        next[i] = watch[l0];
        watch[l0] = i;
    }

    let mut mv = vec![0u8; num_vars];
    let mut d = 0usize;
    let mut l = 0usize;
    let mut state = State::B2;

    loop {
        match state {
            State::B2 => {
                if d == num_vars {
                    let assignment = decode_assignment(num_vars, &mv);
                    debug!("solve: SAT at depth {}", d);
                    return Outcome::Sat(assignment);
                }
                let pos = 2 * d;
                let neg = pos + 1;
                let prefer_negative = watch[pos] >= sentinel || watch[neg] < sentinel;
                mv[d] = prefer_negative as u8;
                l = pos | (mv[d] as usize & 1);
                trace!("B2: d={} choose l={}", d, l);
                state = State::B3;
            }
            State::B3 => {
                state = run_b3(&mut literals, start, &mut watch, &mut next, &mv, d, l, sentinel);
            }
            State::B4 => {
                watch[l ^ 1] = sentinel;
                d += 1;
                state = State::B2;
            }
            State::B5 => {
                if mv[d] < 2 {
                    mv[d] ^= 3;
                    l ^= 1;
                    trace!("B5: retry d={} l={}", d, l);
                    state = State::B3;
                } else {
                    state = State::B6;
                }
            }
            State::B6 => {
                loop {
                    if d == 0 {
                        debug!("solve: UNSAT");
                        return Outcome::Unsat;
                    }
                    d -= 1;
                    if mv[d] < 2 {
                        break;
                    }
                }
                l = (2 * d) | (mv[d] as usize & 1);
                trace!("B6: backtrack to d={} l={}", d, l);
                state = State::B5;
            }
        }
    }
}

/// Drains the chain of clauses watching `!l` (B3). Returns the next state:
/// `B4` if every clause in the chain found a replacement watch, `B5` if one
/// could not (it still watches `!l`, which is written back as the chain
/// head).
#[allow(clippy::too_many_arguments)]
fn run_b3(
    literals: &mut [Lit],
    start: &[usize],
    watch: &mut [usize],
    next: &mut [usize],
    mv: &[u8],
    d: usize,
    l: usize,
    sentinel: usize,
) -> State {
    let not_l = l ^ 1;
    let mut j = watch[not_l];

    loop {
        if j == sentinel {
            return State::B4;
        }
        let i0 = start[j];
        let i1 = start[j + 1];
        let next_in_chain = next[j];

        let replacement = ((i0 + 1)..i1).find(|&k| not_false(literals[k].to_usize(), d, mv));

        match replacement {
            Some(k) => {
                literals.swap(i0, k);
                let new_watched = literals[i0].to_usize();
                next[j] = watch[new_watched];
                watch[new_watched] = j;
                trace!("B3: clause {} now watches {}", j, new_watched);
                j = next_in_chain;
            }
            None => {
                watch[not_l] = j;
                return State::B5;
            }
        }
    }
}

/// Whether literal code `code` is *not false* under the partial assignment
/// at depth `d`: its variable is still unassigned (strictly deeper than
/// `d`), or it's assigned and agrees with the chosen polarity.
#[inline]
fn not_false(code: usize, d: usize, mv: &[u8]) -> bool {
    let var = code >> 1;
    if var > d {
        return true;
    }
    ((code as u8).wrapping_add(mv[var]) & 1) == 0
}

/// Decodes the final `move` array into DIMACS-signed output: variable `k`
/// (1-indexed) maps to `k * (1 - 2*(move[k-1] & 1))`.
fn decode_assignment(num_vars: usize, mv: &[u8]) -> Vec<i64> {
    (0..num_vars)
        .map(|var| {
            let k = (var + 1) as i64;
            if mv[var] & 1 == 0 { k } else { -k }
        })
        .collect()
}

/// Verifies that every clause of `clauses` has at least one literal true
/// under `assignment`. Exposed for tests and for embedders that want to
/// double-check a returned model.
pub fn check_model(clauses: &[Vec<i64>], assignment: &[i64]) -> bool {
    let value_of = |raw: i64| -> bool {
        let var = raw.unsigned_abs() as usize - 1;
        let signed = assignment[var];
        (signed > 0) == (raw > 0)
    };
    clauses
        .iter()
        .all(|clause| clause.iter().any(|&raw| value_of(raw)))
}
