use std::fmt;

mod shift;

pub use shift::{shift_left, ShiftError, ShiftStatus};

/// Fixed-capacity unsigned big number.
///
/// `words` holds the value least-significant word first; `len` counts the
/// significant words. The normalization invariant is that the word at
/// `len - 1` is nonzero whenever `len > 0`. Words at indices `>= len` are
/// logically zero: their stored contents are insignificant and may be stale,
/// so they never participate in comparisons or magnitude computations.
#[derive(Debug, Copy, Clone)]
pub struct Bignum<const CAPACITY: usize> {
    words: [u64; CAPACITY],
    len: usize,
}

/// Public utility functions
impl<const CAPACITY: usize> Bignum<CAPACITY> {
    /// Total bit capacity of the representation.
    pub const BITS: usize = CAPACITY * 64;

    pub const ZERO: Self = Self {
        words: [0; CAPACITY],
        len: 0,
    };

    pub const ONE: Self = {
        let mut words = [0u64; CAPACITY];
        words[0] = 1;
        Bignum { words, len: 1 }
    };

    /// Adopt a raw representation as-is.
    ///
    /// `len` must not exceed `CAPACITY`; upholding the normalization
    /// invariant is the caller's responsibility.
    pub fn from_raw(words: [u64; CAPACITY], len: usize) -> Self {
        debug_assert!(len <= CAPACITY, "len exceeds capacity");
        Self { words, len }
    }

    /// Build a value from its words, counting out leading zero words.
    pub fn from_words(words: [u64; CAPACITY]) -> Self {
        let len = CAPACITY - words.iter().rev().take_while(|&&w| w == 0).count();
        Self { words, len }
    }

    pub fn words(&self) -> &[u64; CAPACITY] {
        &self.words
    }

    /// Number of significant words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_zero(&self) -> bool {
        self.words[..self.len].iter().all(|&w| w == 0)
    }

    /// The number of bits required to represent this number
    pub fn bit_length(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.len - 1) * 64 + (64 - self.words[self.len - 1].leading_zeros() as usize)
    }

    /// Whether the top counted word is nonzero (or the value is empty).
    pub fn is_normalized(&self) -> bool {
        self.len == 0 || self.words[self.len - 1] != 0
    }
}

macro_rules! impl_from_for_bignum {
    ($uX:ty) => {
        impl<const CAPACITY: usize> From<$uX> for Bignum<CAPACITY> {
            fn from(value: $uX) -> Self {
                let mut words = [0; CAPACITY];
                words[0] = value.into();
                Self {
                    words,
                    len: (words[0] != 0) as usize,
                }
            }
        }
    };
}

impl_from_for_bignum!(u64);
impl_from_for_bignum!(u32);
impl_from_for_bignum!(u16);
impl_from_for_bignum!(u8);

impl<const CAPACITY: usize> Default for Bignum<CAPACITY> {
    fn default() -> Self {
        Self::ZERO
    }
}

// equality over the significant words only, so stale storage beyond `len`
// cannot distinguish otherwise equal values
impl<const CAPACITY: usize> PartialEq for Bignum<CAPACITY> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.words[..self.len] == other.words[..other.len]
    }
}

impl<const CAPACITY: usize> Eq for Bignum<CAPACITY> {}

impl<const CAPACITY: usize> fmt::Display for Bignum<CAPACITY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0x0");
        }

        let mut first = true;
        for word in self.words[..self.len].iter().rev() {
            if first {
                write!(f, "0x{word:x}")?;
                first = false;
            } else {
                write!(f, "{word:016x}")?;
            }
        }

        Ok(())
    }
}
