use lcd_core::Base;

use crate::field::Vector;

/// Which candidate rows an enumerator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFilter {
    /// Every vector of the length, the zero vector included.
    All,
    /// Nonzero vectors whose leading digit is 1: one representative per
    /// scalar-multiple class.
    Normalized,
    /// Vectors whose digits are all 0 or 1.
    BinaryDigits,
}

/// Lazily enumerates packed vectors of a fixed length in ascending order.
///
/// Internally the enumerator walks an index space: over GF(4) the index is the
/// packed word itself, over GF(2) (or with [`RowFilter::BinaryDigits`]) index
/// bit `j` is spread to packed bit `2j`. Both maps are monotone, so packed
/// order is preserved.
#[derive(Debug, Clone)]
pub struct RowEnumerator {
    len: usize,
    binary_space: bool,
    normalized: bool,
    next_index: Option<u64>,
    last_index: u64,
    cursor: Option<Vector>,
}

impl RowEnumerator {
    /// Starts an enumeration of all length-`len` vectors admitted by `filter`.
    pub fn new(len: usize, base: Base, filter: RowFilter) -> Self {
        let binary_space = base == Base::Binary || filter == RowFilter::BinaryDigits;
        let bits_per_digit = if binary_space { 1 } else { 2 };
        let width = len * bits_per_digit;
        let last_index = if width >= 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        Self {
            len,
            binary_space,
            normalized: filter == RowFilter::Normalized,
            next_index: Some(0),
            last_index,
            cursor: None,
        }
    }

    /// Repositions the enumeration strictly after `cursor`.
    ///
    /// `cursor` need not be a legal candidate itself; the next emitted vector
    /// is the smallest legal one greater than it.
    pub fn resume_after(mut self, cursor: Vector) -> Self {
        self.next_index = cursor
            .as_raw()
            .checked_add(1)
            .and_then(|raw| self.index_at_or_above(raw));
        self.cursor = Some(cursor);
        self
    }

    /// Length of the emitted vectors.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the enumerator covers zero-length vectors only.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last emitted vector (or the resume point), usable with [`Self::resume_after`].
    pub fn cursor(&self) -> Option<Vector> {
        self.cursor
    }

    fn raw(&self, index: u64) -> u64 {
        if self.binary_space {
            spread(index)
        } else {
            index
        }
    }

    /// Smallest index whose packed word is at least `raw`.
    fn index_at_or_above(&self, raw: u64) -> Option<u64> {
        if !self.binary_space {
            return (raw <= self.last_index).then_some(raw);
        }
        let high = raw & crate::field::HIGH_PLANE;
        let index = if high == 0 {
            compress(raw)
        } else {
            // Highest position holding ω or ω̄: bump the binary prefix above it.
            let position = (63 - high.leading_zeros() as usize) / 2;
            let prefix = compress(raw.checked_shr(2 * (position as u32 + 1)).unwrap_or(0));
            (prefix + 1).checked_shl(position as u32 + 1)?
        };
        (index <= self.last_index).then_some(index)
    }

    /// Skips indices rejected by the normalization filter.
    fn admit(&self, index: u64) -> Result<u64, Option<u64>> {
        if !self.normalized {
            return Ok(index);
        }
        let candidate = Vector::from_raw(self.raw(index));
        match candidate.leading() {
            None => Err(index.checked_add(1)),
            Some((_, 1)) => Ok(index),
            Some((position, _)) => {
                // Leading ω or ω̄ at `position`: every vector up to the next
                // power of four shares that leading digit.
                if position + 1 >= self.len {
                    Err(None)
                } else {
                    Err(Some(1u64 << (2 * (position + 1))))
                }
            }
        }
    }
}

impl Iterator for RowEnumerator {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        loop {
            let index = self.next_index?;
            if index > self.last_index {
                self.next_index = None;
                return None;
            }
            match self.admit(index) {
                Ok(index) => {
                    self.next_index = if index == self.last_index {
                        None
                    } else {
                        Some(index + 1)
                    };
                    let vector = Vector::from_raw(self.raw(index));
                    self.cursor = Some(vector);
                    return Some(vector);
                }
                Err(next) => self.next_index = next,
            }
        }
    }
}

/// Spreads bit `j` of the low 32 bits to bit `2j`.
fn spread(index: u64) -> u64 {
    let mut x = index & 0xFFFF_FFFF;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    (x | (x << 1)) & 0x5555_5555_5555_5555
}

/// Inverse of [`spread`] on the low plane.
fn compress(raw: u64) -> u64 {
    let mut x = raw & 0x5555_5555_5555_5555;
    x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
    x = (x | (x >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x >> 4)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x >> 8)) & 0x0000_FFFF_0000_FFFF;
    (x | (x >> 16)) & 0xFFFF_FFFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_and_compress_are_inverse() {
        for index in [0u64, 1, 2, 3, 0b1011, 0xFFFF_FFFF, 0x8000_0001] {
            assert_eq!(compress(spread(index)), index);
        }
        assert_eq!(spread(0b101), 0b010001);
    }

    #[test]
    fn binary_resume_skips_past_high_digits() {
        let rows = RowEnumerator::new(3, Base::Quaternary, RowFilter::BinaryDigits);
        // 0 2 0 -> next binary vector above it is 1 0 0.
        let cursor = Vector::from_digits(&[0, 2, 0], Base::Quaternary).unwrap();
        let mut rows = rows.resume_after(cursor);
        let next = rows.next().unwrap();
        assert_eq!(next.digits(3), vec![1, 0, 0]);
    }
}
