//! Binomial cardinality encoders: at-most-k, at-least-k, and exactly-k over
//! a slice of literals, each expressed as plain CNF clauses.
//!
//! Generalizes the combination-enumeration idiom used for XOR-to-CNF
//! expansion (iterate every subset of a fixed size, emit one clause per
//! subset) from a `1 << n` bitmask, which tops out at 64 literals, to an
//! index-vector enumerator with no such ceiling.

use crate::lit::Lit;

/// Yields every size-`k` subset of `0..n` as an ascending index vector
/// (`c[0] < c[1] < ... < c[k-1] < n`), in lexicographic order. Advances by
/// incrementing the rightmost index that still has room and resetting
/// everything to its right.
struct Combinations {
    n: usize,
    k: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        let current = if k <= n { Some((0..k).collect()) } else { None };
        Combinations { n, k, current }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let c = self.current.take()?;
        let mut next = c.clone();
        let mut i = self.k;
        self.current = loop {
            if i == 0 {
                break None;
            }
            i -= 1;
            if next[i] != i + self.n - self.k {
                next[i] += 1;
                for j in (i + 1)..self.k {
                    next[j] = next[j - 1] + 1;
                }
                break Some(next);
            }
        };
        Some(c)
    }
}

/// At most `k` of `lits` may be true: one clause per `(k+1)`-subset,
/// forbidding all of them from holding simultaneously.
pub fn at_most(lits: &[Lit], k: usize) -> Vec<Vec<Lit>> {
    let n = lits.len();
    if k >= n {
        return Vec::new();
    }
    Combinations::new(n, k + 1)
        .map(|idxs| idxs.iter().map(|&i| lits[i].not()).collect())
        .collect()
}

/// At least `k` of `lits` must be true: one clause per `(n-k+1)`-subset,
/// forbidding all of them from being simultaneously false. `k == 0` is
/// unconstrained; `k` exceeding `lits.len()` is out of range and, like
/// `at_most`'s symmetric case, produces no clauses rather than an explicit
/// conflict marker — the caller is responsible for keeping `k` in range.
pub fn at_least(lits: &[Lit], k: usize) -> Vec<Vec<Lit>> {
    let n = lits.len();
    if k == 0 || k > n {
        return Vec::new();
    }
    Combinations::new(n, n - k + 1)
        .map(|idxs| idxs.iter().map(|&i| lits[i]).collect())
        .collect()
}

/// Exactly `k` of `lits` are true: the union of `at_most` and `at_least`.
pub fn exactly(lits: &[Lit], k: usize) -> Vec<Vec<Lit>> {
    let mut clauses = at_most(lits, k);
    clauses.extend(at_least(lits, k));
    clauses
}
