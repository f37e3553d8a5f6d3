//! Recursive demonstrations: factorial, Tower of Hanoi, permutations and
//! subsets.

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;

use crate::constants::MAX_FACTORIAL_U64;
use crate::error::AlgoError;

/// n! as a `u64`. O(n).
///
/// # Errors
///
/// `Overflow` for n > 20.
pub fn factorial(n: u64) -> Result<u64, AlgoError> {
    if n > MAX_FACTORIAL_U64 {
        return Err(AlgoError::Overflow {
            operation: "factorial",
            n,
        });
    }
    Ok((2..=n).product())
}

/// n! with arbitrary precision.
#[must_use]
pub fn factorial_big(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// A single disk move in the Tower of Hanoi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: char,
    pub to: char,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

/// Moves that transfer `disks` disks from `from` to `to` using `via`.
/// Always 2^n - 1 moves, so O(2^n).
#[must_use]
pub fn hanoi(disks: u32, from: char, to: char, via: char) -> Vec<Move> {
    fn go(n: u32, from: char, to: char, via: char, moves: &mut Vec<Move>) {
        if n == 0 {
            return;
        }
        go(n - 1, from, via, to, moves);
        moves.push(Move { disk: n, from, to });
        go(n - 1, via, to, from, moves);
    }
    let mut moves = Vec::new();
    go(disks, from, to, via, &mut moves);
    moves
}

/// Every ordering of `items`. O(n!).
#[must_use]
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (i, head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}

/// Every subset of `items`. O(2^n).
///
/// Subsets without the first element come first, then those with it.
#[must_use]
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let Some((first, rest)) = items.split_first() else {
        return vec![Vec::new()];
    };
    let without = subsets(rest);
    let with: Vec<Vec<T>> = without
        .iter()
        .map(|s| {
            let mut subset = Vec::with_capacity(s.len() + 1);
            subset.push(first.clone());
            subset.extend_from_slice(s);
            subset
        })
        .collect();
    let mut all = without;
    all.extend(with);
    all
}
