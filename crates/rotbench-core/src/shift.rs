//! Shift normalization and the rotation index mapping.
//!
//! A raw shift is any `i64`. Normalizing it against a sequence length `N`
//! yields the number of positions every element moves toward higher
//! indices, in `[1, N)`. Shifts that leave the sequence unchanged
//! normalize to `None`.

/// A rotation offset reduced into `[1, len)` for a specific length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedShift {
    offset: usize,
    len: usize,
}

impl NormalizedShift {
    /// Normalize `raw` against a sequence of `len` elements.
    ///
    /// Returns `None` when the rotation is a no-op: `len == 0`, `raw == 0`,
    /// or `raw` is a multiple of `len` in either direction. Negative shifts
    /// move elements toward lower indices, so `-s` and `len - s` agree.
    ///
    /// The remainder is Euclidean, so the result never depends on the sign
    /// of `raw` and `i64::MIN` is handled without overflow.
    #[must_use]
    pub fn new(raw: i64, len: usize) -> Option<Self> {
        if len == 0 || raw == 0 {
            return None;
        }
        let modulus = i128::try_from(len).ok()?;
        let offset = i128::from(raw).rem_euclid(modulus);
        if offset == 0 {
            return None;
        }
        Some(Self {
            offset: usize::try_from(offset).ok()?,
            len,
        })
    }

    /// Positions each element moves toward higher indices.
    #[must_use]
    pub fn offset(self) -> usize {
        self.offset
    }

    /// Length this shift was normalized against.
    #[must_use]
    pub fn modulus(self) -> usize {
        self.len
    }

    /// Destination of source index `i`: `(i + offset) mod len`.
    ///
    /// `i` must be below `len`. The sum is never formed, so this cannot
    /// overflow for any length.
    #[inline]
    #[must_use]
    pub fn destination(self, i: usize) -> usize {
        debug_assert!(i < self.len);
        let wrap_at = self.len - self.offset;
        if i >= wrap_at {
            i - wrap_at
        } else {
            i + self.offset
        }
    }
}

/// Offset actually applied for `raw` over `len` elements, `0` for a no-op.
#[must_use]
pub fn effective_offset(raw: i64, len: usize) -> usize {
    NormalizedShift::new(raw, len).map_or(0, NormalizedShift::offset)
}
