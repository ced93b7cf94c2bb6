//! The check functions.
//!
//! Flat, pure and synchronous: each check either returns its input unchanged
//! or fails through the caller-chosen error type.

pub mod integer;
pub mod length;
pub mod scalar;

// Re-export scalar checks
pub use scalar::{clip, exactly, limited};

// Re-export integer checks
pub use integer::{
    int8, int16, int32, int64, negative, non_negative, non_positive, positive, uint8, uint16,
    uint32, uint64, uint_bits,
};

// Re-export length checks
pub use length::{Length, exact_len, limited_len};
