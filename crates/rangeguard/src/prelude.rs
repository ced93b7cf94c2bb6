//! Prelude module for convenient imports.
//!
//! A single `use rangeguard::prelude::*;` brings in every check function and
//! the foundation types.
//!
//! ```
//! use rangeguard::prelude::*;
//!
//! let retries: CheckResult<u32> = positive(3, Some("retries"));
//! assert_eq!(retries.unwrap(), 3);
//! ```

pub use crate::foundation::{Bound, CheckError, CheckResult, ErrorKind, RangeError};

pub use crate::checks::{
    Length, clip, exact_len, exactly, int8, int16, int32, int64, limited, limited_len, negative,
    non_negative, non_positive, positive, uint8, uint16, uint32, uint64, uint_bits,
};
