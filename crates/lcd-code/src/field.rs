use std::fmt;

use lcd_core::{Base, LcdError, PACKED_CAPACITY};
use serde::{Deserialize, Serialize};

/// Low bit of every two-bit element.
pub const LOW_PLANE: u64 = 0x5555_5555_5555_5555;
/// High bit of every two-bit element.
pub const HIGH_PLANE: u64 = 0xAAAA_AAAA_AAAA_AAAA;
/// ω at every position.
const OMEGA_EVERYWHERE: u64 = HIGH_PLANE;
/// ω̄ at every position.
const OMEGA_BAR_EVERYWHERE: u64 = u64::MAX;

const _: () = assert!(PACKED_CAPACITY * 2 == u64::BITS as usize);

/// Packed vector over GF(4), two bits per element.
///
/// Element `p` lives in bits `2p` (low plane) and `2p + 1` (high plane) and is
/// encoded as `high * ω + low`, so the digits `0, 1, 2, 3` stand for
/// `0, 1, ω, ω̄`. Digit sequences are written most significant position first,
/// which makes ascending packed order the lexicographic order of digit strings.
/// Bits beyond a vector's declared length are always zero.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Vector(u64);

impl Vector {
    /// The zero vector of any length.
    pub const ZERO: Vector = Vector(0);

    /// Wraps a raw packed word.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw packed word.
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// Vector with a single `1` at packed position `position`.
    pub const fn unit(position: usize) -> Self {
        Self(1 << (2 * position))
    }

    /// Packs a digit string (most significant position first).
    pub fn from_digits(digits: &[u8], base: Base) -> Result<Self, LcdError> {
        if digits.len() > PACKED_CAPACITY {
            return Err(LcdError::Overflow(
                lcd_core::ErrorInfo::new("length-overflow", "digit string exceeds capacity")
                    .with_context("len", digits.len().to_string()),
            ));
        }
        let mut raw = 0u64;
        for &digit in digits {
            raw = (raw << 2) | u64::from(base.check_digit(digit)?);
        }
        Ok(Self(raw))
    }

    /// Digit at packed position `position`.
    pub fn digit(self, position: usize) -> u8 {
        ((self.0 >> (2 * position)) & 0b11) as u8
    }

    /// Digit string of length `len`, most significant position first.
    pub fn digits(self, len: usize) -> Vec<u8> {
        (0..len).rev().map(|position| self.digit(position)).collect()
    }

    /// Whether every element is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether all bits beyond `len` elements are clear.
    pub fn fits(self, len: usize) -> bool {
        self.0 & !length_mask(len) == 0
    }

    /// Whether every element is 0 or 1.
    pub fn is_binary(self) -> bool {
        self.0 & HIGH_PLANE == 0
    }

    /// Highest nonzero position and its digit.
    pub fn leading(self) -> Option<(usize, u8)> {
        if self.0 == 0 {
            return None;
        }
        let position = (63 - self.0.leading_zeros() as usize) / 2;
        Some((position, self.digit(position)))
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:#x})", self.0)
    }
}

/// Mask covering the first `len` elements.
pub const fn length_mask(len: usize) -> u64 {
    if len >= PACKED_CAPACITY {
        u64::MAX
    } else {
        (1u64 << (2 * len)) - 1
    }
}

/// Componentwise sum; GF(4) has characteristic 2, so this is XOR.
#[inline]
pub fn add(u: Vector, v: Vector) -> Vector {
    Vector(u.0 ^ v.0)
}

/// Componentwise product.
///
/// With `a = a1 ω + a0`, `b = b1 ω + b0` and `ω² = ω + 1`:
/// `high = a1 b1 + a1 b0 + a0 b1`, `low = a1 b1 + a0 b0`.
#[inline]
pub fn multiply_elementwise(u: Vector, v: Vector) -> Vector {
    let (u_lo, u_hi) = (u.0 & LOW_PLANE, (u.0 >> 1) & LOW_PLANE);
    let (v_lo, v_hi) = (v.0 & LOW_PLANE, (v.0 >> 1) & LOW_PLANE);
    let both_hi = u_hi & v_hi;
    let hi = both_hi ^ (u_hi & v_lo) ^ (u_lo & v_hi);
    let lo = both_hi ^ (u_lo & v_lo);
    Vector((hi << 1) | lo)
}

/// Conjugation `x ↦ x²` per element: fixes 0 and 1, swaps ω and ω̄.
#[inline]
pub fn hermitian(v: Vector) -> Vector {
    Vector(v.0 ^ ((v.0 >> 1) & LOW_PLANE))
}

/// Sum of the componentwise product, as a digit.
///
/// The product's elements are split into the positions holding 1, ω and ω̄;
/// only the parity of each group matters, and the three parities are summed
/// with the field's addition table.
#[inline]
pub fn inner_product(u: Vector, v: Vector) -> u8 {
    let w = multiply_elementwise(u, v).0;
    let lo = w & LOW_PLANE;
    let hi = (w >> 1) & LOW_PLANE;
    let ones = ((lo & !hi).count_ones() & 1) as u8;
    let omegas = ((hi & !lo).count_ones() & 1) as u8;
    let omega_bars = ((hi & lo).count_ones() & 1) as u8;
    ones ^ (omegas * 2) ^ (omega_bars * 3)
}

/// Hermitian form `Σ conj(u_i) v_i`.
#[inline]
pub fn hermitian_inner_product(u: Vector, v: Vector) -> u8 {
    inner_product(hermitian(u), v)
}

/// Multiplies every element by `digit`; only the low two bits of `digit` are read.
#[inline]
pub fn scale(v: Vector, digit: u8) -> Vector {
    match digit & 0b11 {
        0 => Vector::ZERO,
        1 => v,
        2 => multiply_elementwise(v, Vector(OMEGA_EVERYWHERE)),
        _ => multiply_elementwise(v, Vector(OMEGA_BAR_EVERYWHERE)),
    }
}

/// Validated scalar multiplication: `base` must be 2 or 4 and `digit` a symbol of that field.
pub fn scalar_multiply(v: Vector, digit: u8, base: u32) -> Result<Vector, LcdError> {
    let base = Base::try_from(base)?;
    Ok(scale(v, base.check_digit(digit)?))
}

/// Number of nonzero elements.
#[inline]
pub fn hamming_weight(v: Vector) -> usize {
    ((v.0 | (v.0 >> 1)) & LOW_PLANE).count_ones() as usize
}

/// Product of two digits.
pub fn mul_digit(a: u8, b: u8) -> u8 {
    multiply_elementwise(Vector(u64::from(a & 0b11)), Vector(u64::from(b & 0b11))).0 as u8
}

/// Multiplicative inverse of a nonzero digit; `0` maps to `0`.
pub fn inverse_digit(a: u8) -> u8 {
    [0, 1, 3, 2][usize::from(a & 0b11)]
}
