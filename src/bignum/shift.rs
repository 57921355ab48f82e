use std::fmt;

use crate::bignum::Bignum;

/// Error returned by [`Bignum::shift_left`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShiftError {
    /// The shift would push significant bits beyond the word capacity.
    Overflow,
}

impl fmt::Display for ShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftError::Overflow => write!(f, "shift overflows the bignum capacity"),
        }
    }
}

impl std::error::Error for ShiftError {}

/// Outcome of the status-level [`shift_left`] entry point.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShiftStatus {
    Success,
    NullArgument,
    Overflow,
}

impl<const CAPACITY: usize> Bignum<CAPACITY> {
    /// Logically shift the value left by `shift_amount` bits, in place.
    ///
    /// On success the value holds the old magnitude multiplied by
    /// `2^shift_amount` and the normalization invariant is re-established.
    /// When the shift would push significant bits past `CAPACITY` words the
    /// value is left completely untouched and [`ShiftError::Overflow`] is
    /// returned. No allocation takes place either way.
    pub fn shift_left(&mut self, shift_amount: usize) -> Result<(), ShiftError> {
        debug_assert!(self.len <= CAPACITY, "len exceeds capacity");

        if shift_amount == 0 {
            return Ok(());
        }

        let bits = self.bit_length();

        // a zero keeps its stored representation, denormalized or not
        if bits == 0 {
            return Ok(());
        }

        // phrased as remaining headroom so a huge shift_amount cannot wrap
        if shift_amount > Self::BITS - bits {
            return Err(ShiftError::Overflow);
        }

        let word_shift = shift_amount / 64;
        let bit_shift = (shift_amount % 64) as u32;
        let old_len = self.len;

        // whole-word move towards the top; every destination sits above its
        // source, so the copy must run high-to-low (copy_within does)
        if word_shift > 0 {
            self.words.copy_within(..old_len, word_shift);
            self.words[..word_shift].fill(0);
        }

        // first index past the moved block; a sub-word carry may spill there
        let moved_top = word_shift + old_len;

        if bit_shift != 0 {
            if moved_top < CAPACITY {
                self.words[moved_top] = self.words[moved_top - 1] >> (64 - bit_shift);
            }
            // high-to-low again: each word is combined with the still
            // unshifted bits of its lower neighbour
            for i in (word_shift + 1..moved_top).rev() {
                self.words[i] =
                    (self.words[i] << bit_shift) | (self.words[i - 1] >> (64 - bit_shift));
            }
            self.words[word_shift] <<= bit_shift;
        }

        // renormalize from the highest index the shift may have written;
        // stale words above it never enter the scan
        let mut len = if bit_shift != 0 {
            moved_top.min(CAPACITY - 1) + 1
        } else {
            moved_top
        };
        while len > 0 && self.words[len - 1] == 0 {
            len -= 1;
        }
        self.len = len;

        Ok(())
    }
}

/// Status-returning shift entry point.
///
/// [`Bignum::shift_left`] makes an absent operand unrepresentable at the type
/// level; this wrapper keeps the null case observable for callers carrying an
/// optional value, reporting it without touching any storage.
pub fn shift_left<const CAPACITY: usize>(
    num: Option<&mut Bignum<CAPACITY>>,
    shift_amount: usize,
) -> ShiftStatus {
    match num {
        None => ShiftStatus::NullArgument,
        Some(num) => match num.shift_left(shift_amount) {
            Ok(()) => ShiftStatus::Success,
            Err(ShiftError::Overflow) => ShiftStatus::Overflow,
        },
    }
}
