use crate::field::{add, inverse_digit, scale, Vector};

/// Incrementally maintained row-echelon basis over GF(4).
///
/// Every stored vector has digit 1 at its pivot and zeros at the pivots of all
/// vectors inserted before it, so a single forward pass reduces any vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Echelon {
    basis: Vec<(usize, Vector)>,
}

impl Echelon {
    /// Empty basis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of independent vectors inserted.
    pub fn rank(&self) -> usize {
        self.basis.len()
    }

    /// Residue of `v` after eliminating every pivot.
    pub fn reduce(&self, mut v: Vector) -> Vector {
        for &(pivot, row) in &self.basis {
            let digit = v.digit(pivot);
            if digit != 0 {
                v = add(v, scale(row, digit));
            }
        }
        v
    }

    /// Whether `v` lies outside the current span.
    pub fn is_independent(&self, v: Vector) -> bool {
        !self.reduce(v).is_zero()
    }

    /// Inserts `v`; returns `false` (leaving the basis untouched) when `v` is dependent.
    pub fn insert(&mut self, v: Vector) -> bool {
        let residue = self.reduce(v);
        match residue.leading() {
            None => false,
            Some((pivot, digit)) => {
                self.basis.push((pivot, scale(residue, inverse_digit(digit))));
                true
            }
        }
    }

    /// Removes the most recently inserted vector.
    pub fn pop(&mut self) {
        self.basis.pop();
    }
}
