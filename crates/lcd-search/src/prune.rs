//! Rejection rules for partial generator matrices.
//!
//! Every rule only discards a prefix that no completion can rescue, so
//! pruning never changes whether a matrix is found.

use lcd_code::gram::{gram_rank, leading_block_rank_floor};
use lcd_code::{add, hamming_weight, scale, Vector};
use lcd_core::Base;

/// Whether `candidate` and its sums with nonzero multiples of each accepted
/// row are all at least `d` heavy.
///
/// These are codewords of any completion, so a light one rules the prefix out.
pub fn partial_distance_ok(accepted: &[Vector], candidate: Vector, base: Base, d: usize) -> bool {
    if hamming_weight(candidate) < d {
        return false;
    }
    accepted.iter().all(|&row| {
        base.units()
            .iter()
            .all(|&unit| hamming_weight(add(candidate, scale(row, unit))) >= d)
    })
}

/// Whether the Gram matrix of `accepted + [candidate]` can still be the
/// leading block of a nonsingular `k`×`k` Gram matrix.
pub fn gram_rank_ok(accepted: &[Vector], candidate: Vector, k: usize) -> bool {
    let depth = accepted.len() + 1;
    let floor = leading_block_rank_floor(depth, k);
    if floor == 0 {
        return true;
    }
    let mut rows = Vec::with_capacity(depth);
    rows.extend_from_slice(accepted);
    rows.push(candidate);
    gram_rank(&rows) >= floor
}
