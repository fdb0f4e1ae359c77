use lcd_core::Base;
use serde::{Deserialize, Serialize};

use crate::field::{add, hamming_weight, scale, Vector};

/// Histogram of codeword weights, indexed by weight `0..=n`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightEnumerator {
    counts: Vec<u64>,
}

impl WeightEnumerator {
    /// Empty histogram for length-`len` codewords.
    pub fn zeroed(len: usize) -> Self {
        Self {
            counts: vec![0; len + 1],
        }
    }

    /// Builds a histogram from explicit counts.
    pub fn from_counts(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    fn record(&mut self, weight: usize) {
        if weight >= self.counts.len() {
            self.counts.resize(weight + 1, 0);
        }
        self.counts[weight] += 1;
    }

    /// Counts indexed by weight.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of codewords of weight `weight`.
    pub fn count(&self, weight: usize) -> u64 {
        self.counts.get(weight).copied().unwrap_or(0)
    }

    /// Total number of codewords recorded.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Smallest positive weight with a nonzero count.
    pub fn minimum_distance(&self) -> Option<usize> {
        self.counts
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, &count)| count > 0)
            .map(|(weight, _)| weight)
    }

    /// `(weight, count)` pairs with a nonzero count.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(weight, &count)| (weight, count))
    }
}

/// Odometer over all `base^k` coefficient vectors, yielding each codeword.
///
/// Partial sums are cached per position so each step only recomputes the
/// suffix that changed.
struct Codewords {
    multiples: Vec<[Vector; 4]>,
    order: usize,
    coefficients: Vec<usize>,
    partial: Vec<Vector>,
    done: bool,
}

impl Codewords {
    fn new(rows: &[Vector], base: Base) -> Self {
        let multiples = rows
            .iter()
            .map(|&row| [Vector::ZERO, row, scale(row, 2), scale(row, 3)])
            .collect();
        Self {
            multiples,
            order: base.order() as usize,
            coefficients: vec![0; rows.len()],
            partial: vec![Vector::ZERO; rows.len() + 1],
            done: false,
        }
    }
}

impl Iterator for Codewords {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.done {
            return None;
        }
        let k = self.coefficients.len();
        let current = self.partial[k];
        let mut position = k;
        loop {
            if position == 0 {
                self.done = true;
                return Some(current);
            }
            position -= 1;
            self.coefficients[position] += 1;
            if self.coefficients[position] < self.order {
                break;
            }
            self.coefficients[position] = 0;
        }
        for j in position..k {
            self.partial[j + 1] = add(self.partial[j], self.multiples[j][self.coefficients[j]]);
        }
        Some(current)
    }
}

/// Weight distribution of the code spanned by `rows` (length `len`).
///
/// Every one of the `base^k` combinations is visited, the zero combination included.
pub fn weight_enumerator(rows: &[Vector], len: usize, base: Base) -> WeightEnumerator {
    let mut enumerator = WeightEnumerator::zeroed(len);
    for codeword in Codewords::new(rows, base) {
        enumerator.record(hamming_weight(codeword));
    }
    enumerator
}

/// Whether every nonzero combination of `rows` has weight at least `d`.
///
/// Stops at the first light codeword; agrees with
/// `weight_enumerator(..).minimum_distance() >= d` for independent rows.
pub fn meets_distance(rows: &[Vector], base: Base, d: usize) -> bool {
    Codewords::new(rows, base)
        .skip(1)
        .all(|codeword| hamming_weight(codeword) >= d)
}
