//! In-place logical left shift for fixed-capacity big numbers.
//!
//! The only non-trivial operation here is [`Bignum::shift_left`]: an
//! allocation-free multi-word shift that splits the shift amount into whole
//! words and residual bits, rejects shifts that would push significant bits
//! past the capacity, and renormalizes the significant length afterwards.

pub mod bignum;

pub use bignum::{shift_left, Bignum, ShiftError, ShiftStatus};

pub const VER_MAJOR: u32 = 1;
pub const VER_MINOR: u32 = 0;
pub const VER_PATCH: u32 = 0;

/// The crate version as a "MAJOR.MINOR.PATCH" string.
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The crate version packed as `(MAJOR << 16) | (MINOR << 8) | PATCH`.
pub const fn version_number() -> u32 {
    (VER_MAJOR << 16) | (VER_MINOR << 8) | VER_PATCH
}
