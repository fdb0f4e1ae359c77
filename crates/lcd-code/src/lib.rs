#![deny(missing_docs)]
#![doc = "Packed GF(4)/GF(2) arithmetic, candidate row enumeration, Hermitian LCD validation and weight enumeration."]

/// Immutable search results.
pub mod code;
/// Incremental row-echelon basis used for independence and rank checks.
pub mod echelon;
/// Packed vector arithmetic over GF(4).
pub mod field;
/// Hermitian Gram matrices and the LCD test.
pub mod gram;
/// Canonical hashing helpers for codes.
pub mod hash;
/// Validated generator matrices.
pub mod matrix;
/// Candidate row enumeration in ascending packed order.
pub mod rows;
/// Serialization routines for JSON and binary round-trips.
pub mod serde;
/// Exhaustive weight distribution.
pub mod weight;

pub use code::{Code, Verification};
pub use echelon::Echelon;
pub use field::{
    add, hamming_weight, hermitian, hermitian_inner_product, inner_product,
    multiply_elementwise, scalar_multiply, scale, Vector,
};
pub use gram::{gram_rank, hermitian_gram, is_hermitian_lcd};
pub use hash::canonical_code_hash;
pub use matrix::GeneratorMatrix;
pub use rows::{RowEnumerator, RowFilter};
pub use self::serde::{from_bytes, from_json, to_bytes, to_json};
pub use weight::{meets_distance, weight_enumerator, WeightEnumerator};
