//! Target code parameters and the field base they live over.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LcdError};

/// Maximum number of field elements a packed vector can hold (two bits each in a `u64`).
pub const PACKED_CAPACITY: usize = 32;

/// Field over which a code is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Base {
    /// GF(2), digits {0, 1}.
    Binary,
    /// GF(4), digits {0, 1, 2 = ω, 3 = ω̄}.
    Quaternary,
}

impl Base {
    /// Number of field elements.
    pub const fn order(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Quaternary => 4,
        }
    }

    /// Nonzero digits of the field in ascending order.
    pub const fn units(self) -> &'static [u8] {
        match self {
            Base::Binary => &[1],
            Base::Quaternary => &[1, 2, 3],
        }
    }

    /// Checks that `digit` is a legal field symbol for this base.
    pub fn check_digit(self, digit: u8) -> Result<u8, LcdError> {
        if u32::from(digit) < self.order() {
            Ok(digit)
        } else {
            Err(LcdError::Field(
                ErrorInfo::new("invalid-digit", "scalar digit outside the field")
                    .with_context("digit", digit.to_string())
                    .with_context("base", self.order().to_string()),
            ))
        }
    }

    /// Number of codewords spanned by `k` independent rows, if it fits in a `u64`.
    pub fn codeword_count(self, k: usize) -> Option<u64> {
        let k = u32::try_from(k).ok()?;
        u64::from(self.order()).checked_pow(k)
    }
}

impl TryFrom<u32> for Base {
    type Error = LcdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Base::Binary),
            4 => Ok(Base::Quaternary),
            other => Err(LcdError::Field(
                ErrorInfo::new("invalid-base", "base must be 2 or 4")
                    .with_context("base", other.to_string()),
            )),
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.order()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.order())
    }
}

#[derive(Deserialize)]
struct RawParameters {
    n: usize,
    k: usize,
    d: usize,
    base: u32,
}

/// Validated target parameters `(n, k, d)` over a [`Base`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct CodeParameters {
    n: usize,
    k: usize,
    d: usize,
    base: Base,
}

impl CodeParameters {
    /// Validates and builds a parameter set.
    ///
    /// Fails with `invalid-base`, `invalid-parameters`, `length-overflow` or
    /// `enumerator-overflow`.
    pub fn new(n: usize, k: usize, d: usize, base: u32) -> Result<Self, LcdError> {
        let base = Base::try_from(base)?;
        Self::with_base(n, k, d, base)
    }

    /// Builds a parameter set over an already validated base.
    pub fn with_base(n: usize, k: usize, d: usize, base: Base) -> Result<Self, LcdError> {
        let describe = |info: ErrorInfo| {
            info.with_context("n", n.to_string())
                .with_context("k", k.to_string())
                .with_context("d", d.to_string())
                .with_context("base", base.order().to_string())
        };
        if k < 1 || d < 1 || n < k {
            return Err(LcdError::Parameters(describe(ErrorInfo::new(
                "invalid-parameters",
                "parameters must satisfy n >= k >= 1 and d >= 1",
            ))));
        }
        if n > PACKED_CAPACITY {
            return Err(LcdError::Overflow(describe(
                ErrorInfo::new("length-overflow", "length exceeds packed vector capacity")
                    .with_context("capacity", PACKED_CAPACITY.to_string()),
            )));
        }
        if base.codeword_count(k).is_none() {
            return Err(LcdError::Overflow(describe(ErrorInfo::new(
                "enumerator-overflow",
                "number of codewords does not fit in a 64-bit counter",
            ))));
        }
        Ok(Self { n, k, d, base })
    }

    /// Block length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Dimension.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Target minimum distance.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Field base.
    pub fn base(&self) -> Base {
        self.base
    }

    /// Adds the parameters to an error payload.
    pub fn annotate(&self, info: ErrorInfo) -> ErrorInfo {
        info.with_context("n", self.n.to_string())
            .with_context("k", self.k.to_string())
            .with_context("d", self.d.to_string())
            .with_context("base", self.base.order().to_string())
    }
}

impl TryFrom<RawParameters> for CodeParameters {
    type Error = LcdError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(raw.n, raw.k, raw.d, raw.base)
    }
}

impl fmt::Display for CodeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}] over {}", self.n, self.k, self.d, self.base)
    }
}
