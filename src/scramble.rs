use std::str::FromStr;

use rand::Rng;

use crate::constants::ALL_MOVES;
use crate::{error::Error, moves::Move};

/// Parse a whitespace separated move sequence like `R U R' U'`.
pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace().map(Move::from_str).collect()
}

pub fn scramble_to_str(s: &[Move]) -> String {
    s.iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random move sequence of the given length. Consecutive moves never turn the same face or two opposite faces.
pub fn gen_scramble(length: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    let mut scramble: Vec<Move> = Vec::with_capacity(length);
    while scramble.len() < length {
        let m = ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())];
        if let Some(&prev) = scramble.last() {
            if m.is_redundant_after(prev) {
                continue;
            }
        }
        scramble.push(m);
    }
    scramble
}

/// The move sequence undoing `s`.
pub fn inverse_scramble(s: &[Move]) -> Vec<Move> {
    s.iter().rev().map(|m| m.inverse()).collect()
}
