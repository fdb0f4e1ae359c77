use std::fmt;

use lcd_core::{Base, ErrorInfo, LcdError};
use serde::Serialize;

use crate::echelon::Echelon;
use crate::field::Vector;
use crate::gram;
use crate::weight::{self, WeightEnumerator};

/// `k` linearly independent rows of length `n` over a [`Base`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratorMatrix {
    length: usize,
    base: Base,
    rows: Vec<Vector>,
}

impl GeneratorMatrix {
    /// Validates shape, alphabet and independence of `rows`.
    pub fn new(length: usize, base: Base, rows: Vec<Vector>) -> Result<Self, LcdError> {
        let mut echelon = Echelon::new();
        for (idx, &row) in rows.iter().enumerate() {
            let problem = if !row.fits(length) {
                Some(("row-out-of-range", "row has elements beyond the block length"))
            } else if base == Base::Binary && !row.is_binary() {
                Some(("row-not-binary", "row holds ω or ω̄ in a binary code"))
            } else if !echelon.insert(row) {
                Some(("dependent-rows", "rows are linearly dependent"))
            } else {
                None
            };
            if let Some((code, message)) = problem {
                return Err(LcdError::Parameters(
                    ErrorInfo::new(code, message)
                        .with_context("row_index", idx.to_string())
                        .with_context("length", length.to_string())
                        .with_context("base", base.order().to_string()),
                ));
            }
        }
        Ok(Self { length, base, rows })
    }

    /// Builds a matrix from digit strings (most significant position first).
    pub fn from_digit_rows(base: Base, digit_rows: &[Vec<u8>]) -> Result<Self, LcdError> {
        let length = digit_rows.first().map_or(0, Vec::len);
        let mut rows = Vec::with_capacity(digit_rows.len());
        for (idx, digits) in digit_rows.iter().enumerate() {
            if digits.len() != length {
                return Err(LcdError::Parameters(
                    ErrorInfo::new("ragged-rows", "rows have different lengths")
                        .with_context("row_index", idx.to_string())
                        .with_context("expected", length.to_string())
                        .with_context("found", digits.len().to_string()),
                ));
            }
            rows.push(Vector::from_digits(digits, base)?);
        }
        Self::new(length, base, rows)
    }

    /// Block length `n`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Dimension `k`.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Field base.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Packed rows.
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    /// Rows as digit strings.
    pub fn digit_rows(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(|row| row.digits(self.length)).collect()
    }

    /// Hermitian Gram matrix of the rows.
    pub fn hermitian_gram(&self) -> Vec<Vec<u8>> {
        gram::hermitian_gram(&self.rows)
    }

    /// Whether the spanned code is Hermitian LCD.
    pub fn is_hermitian_lcd(&self) -> bool {
        gram::is_hermitian_lcd(&self.rows, self.length)
    }

    /// Weight distribution of the spanned code.
    pub fn weight_enumerator(&self) -> WeightEnumerator {
        weight::weight_enumerator(&self.rows, self.length, self.base)
    }
}

impl fmt::Debug for GeneratorMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorMatrix")
            .field("length", &self.length)
            .field("base", &self.base)
            .field("rows", &self.digit_rows())
            .finish()
    }
}

impl fmt::Display for GeneratorMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.digit_rows().iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(u8::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
