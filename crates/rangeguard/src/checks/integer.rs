//! Fixed-width and sign-category integer checks.
//!
//! Every check here is [`limited`] specialized to a fixed integer domain. The
//! input is widened to `i128` before comparison so that any primitive integer
//! can be checked against any domain: `uint8(256_i32, None)` fails, and
//! `int64(u64::MAX, None)` fails, without the domain having to be
//! representable in the input type.

use std::fmt::Display;

use super::scalar::limited;
use crate::foundation::CheckError;

/// Checks the widened value against a fixed `i128` domain, handing back the
/// original input on success.
fn widened<T, E>(value: T, min: Option<i128>, max: Option<i128>, name: Option<&str>) -> Result<T, E>
where
    T: Copy + Into<i128> + Display,
    E: CheckError,
{
    limited(value.into(), min, max, name).map(|_| value)
}

macro_rules! fixed_width {
    ($(#[$meta:meta])* $name:ident, $domain:ty) => {
        $(#[$meta])*
        ///
        /// Returns the value unchanged on success.
        pub fn $name<T, E>(value: T, name: Option<&str>) -> Result<T, E>
        where
            T: Copy + Into<i128> + Display,
            E: CheckError,
        {
            widened(
                value,
                Some(i128::from(<$domain>::MIN)),
                Some(i128::from(<$domain>::MAX)),
                name,
            )
        }
    };
}

fixed_width! {
    /// Checks that the value lies in the `i8` domain `[-128, 127]`.
    int8, i8
}
fixed_width! {
    /// Checks that the value lies in the `i16` domain `[-32768, 32767]`.
    int16, i16
}
fixed_width! {
    /// Checks that the value lies in the `i32` domain.
    int32, i32
}
fixed_width! {
    /// Checks that the value lies in the `i64` domain.
    int64, i64
}
fixed_width! {
    /// Checks that the value lies in the `u8` domain `[0, 255]`.
    ///
    /// ```
    /// use rangeguard::checks::uint8;
    /// use rangeguard::foundation::CheckResult;
    ///
    /// let ok: CheckResult<i32> = uint8(255, None);
    /// assert_eq!(ok.unwrap(), 255);
    ///
    /// let err: CheckResult<i32> = uint8(256, None);
    /// assert!(err.is_err());
    /// ```
    uint8, u8
}
fixed_width! {
    /// Checks that the value lies in the `u16` domain `[0, 65535]`.
    uint16, u16
}
fixed_width! {
    /// Checks that the value lies in the `u32` domain.
    uint32, u32
}
fixed_width! {
    /// Checks that the value lies in the `u64` domain.
    uint64, u64
}

/// Checks that the value lies in the unsigned domain of an arbitrary bit
/// width: `[0, 2^bits - 1]`.
///
/// Widths of 127 bits or more saturate the upper bound at `i128::MAX`, which
/// every widened input satisfies.
///
/// ```
/// use rangeguard::checks::uint_bits;
/// use rangeguard::foundation::CheckResult;
///
/// let ok: CheckResult<i32> = uint_bits(7, 3, None);
/// assert_eq!(ok.unwrap(), 7);
///
/// let err: CheckResult<i32> = uint_bits(8, 3, None);
/// assert!(err.is_err());
/// ```
pub fn uint_bits<T, E>(value: T, bits: u32, name: Option<&str>) -> Result<T, E>
where
    T: Copy + Into<i128> + Display,
    E: CheckError,
{
    let max = if bits >= 127 {
        i128::MAX
    } else {
        (1_i128 << bits) - 1
    };
    widened(value, Some(0), Some(max), name)
}

/// Checks that the value is a positive integer (`>= 1`).
pub fn positive<T, E>(value: T, name: Option<&str>) -> Result<T, E>
where
    T: Copy + Into<i128> + Display,
    E: CheckError,
{
    widened(value, Some(1), None, name)
}

/// Checks that the value is a negative integer (`<= -1`).
pub fn negative<T, E>(value: T, name: Option<&str>) -> Result<T, E>
where
    T: Copy + Into<i128> + Display,
    E: CheckError,
{
    widened(value, None, Some(-1), name)
}

/// Checks that the value is zero or positive.
pub fn non_negative<T, E>(value: T, name: Option<&str>) -> Result<T, E>
where
    T: Copy + Into<i128> + Display,
    E: CheckError,
{
    widened(value, Some(0), None, name)
}

/// Checks that the value is zero or negative.
pub fn non_positive<T, E>(value: T, name: Option<&str>) -> Result<T, E>
where
    T: Copy + Into<i128> + Display,
    E: CheckError,
{
    widened(value, None, Some(0), name)
}

// ============================================================================
// TESTS
// ============================================================================
