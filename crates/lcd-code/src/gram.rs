use lcd_core::PACKED_CAPACITY;

use crate::echelon::Echelon;
use crate::field::{hermitian_inner_product, Vector};

/// Hermitian Gram matrix `M[i][j] = <row_i, row_j>_H` as digits.
pub fn hermitian_gram(rows: &[Vector]) -> Vec<Vec<u8>> {
    rows.iter()
        .map(|&u| {
            rows.iter()
                .map(|&v| hermitian_inner_product(u, v))
                .collect()
        })
        .collect()
}

/// Gram row `i` packed as a vector whose position `j` holds `M[i][j]`.
fn packed_gram_row(rows: &[Vector], i: usize) -> Vector {
    let raw = rows.iter().enumerate().fold(0u64, |acc, (j, &v)| {
        acc | (u64::from(hermitian_inner_product(rows[i], v)) << (2 * j))
    });
    Vector::from_raw(raw)
}

/// Rank of the Hermitian Gram matrix of `rows` (at most [`PACKED_CAPACITY`] rows).
pub fn gram_rank(rows: &[Vector]) -> usize {
    debug_assert!(rows.len() <= PACKED_CAPACITY);
    let mut echelon = Echelon::new();
    for i in 0..rows.len() {
        echelon.insert(packed_gram_row(rows, i));
    }
    echelon.rank()
}

/// Whether the rows span a Hermitian LCD code: the Gram matrix is nonsingular.
///
/// Rows wider than `len`, or more rows than a packed Gram row can hold, are
/// reported as not LCD.
pub fn is_hermitian_lcd(rows: &[Vector], len: usize) -> bool {
    if rows.len() > PACKED_CAPACITY || len > PACKED_CAPACITY {
        return false;
    }
    if rows.iter().any(|row| !row.fits(len)) {
        return false;
    }
    gram_rank(rows) == rows.len()
}

/// Lower bound on the rank of the leading `i`×`i` block of any nonsingular `k`×`k` matrix.
///
/// Dropping `k - i` columns from `i` independent rows loses at most `k - i` of rank.
pub fn leading_block_rank_floor(i: usize, k: usize) -> usize {
    (2 * i).saturating_sub(k)
}
