//! # rangeguard
//!
//! Range, length and equality checks for scalars and sized collections, with
//! error messages fit to show a user as-is.
//!
//! ## Quick Start
//!
//! ```rust
//! use rangeguard::prelude::*;
//!
//! let port: CheckResult<u32> = uint16(8080_u32, Some("port"));
//! assert_eq!(port.unwrap(), 8080);
//!
//! let level: CheckResult<i32> = limited(12, Some(0), Some(9), Some("level"));
//! assert_eq!(
//!     level.unwrap_err().to_string(),
//!     "level must be in range [0, 9]. 12 found instead.",
//! );
//!
//! // clip never fails; it saturates into the bound instead.
//! assert_eq!(clip(12, Some(0), Some(9)), 9);
//! ```
//!
//! ## Checks
//!
//! - **Scalar**: [`limited`](checks::limited), [`exactly`](checks::exactly),
//!   [`clip`](checks::clip)
//! - **Fixed-width integer**: [`int8`](checks::int8)..[`int64`](checks::int64),
//!   [`uint8`](checks::uint8)..[`uint64`](checks::uint64),
//!   [`uint_bits`](checks::uint_bits)
//! - **Sign category**: [`positive`](checks::positive),
//!   [`negative`](checks::negative), [`non_negative`](checks::non_negative),
//!   [`non_positive`](checks::non_positive)
//! - **Length**: [`limited_len`](checks::limited_len),
//!   [`exact_len`](checks::exact_len)
//!
//! ## Custom error types
//!
//! Every check is generic over its error. Implement
//! [`CheckError`](foundation::CheckError) to fail with your own type while
//! keeping the exact message the default [`RangeError`](foundation::RangeError)
//! would carry.

pub mod checks;
pub mod foundation;
pub mod prelude;
