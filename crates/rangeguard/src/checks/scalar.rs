//! Scalar range, equality and clipping checks.

use std::fmt::Display;

use crate::foundation::{Bound, CheckError, DEFAULT_SUBJECT, ErrorKind, violation};

/// Checks that a value lies within an inclusive bound, either side of which
/// may be absent.
///
/// On success the value is returned unchanged. With both sides absent the
/// check always succeeds. The `name` appears as the message subject and
/// defaults to `"Value"`.
///
/// # Examples
///
/// ```
/// use rangeguard::checks::limited;
/// use rangeguard::foundation::CheckResult;
///
/// let ok: CheckResult<i32> = limited(7, Some(0), Some(10), None);
/// assert_eq!(ok.unwrap(), 7);
///
/// let err: CheckResult<i32> = limited(2, Some(100), Some(1000), None);
/// assert_eq!(
///     err.unwrap_err().to_string(),
///     "Value must be in range [100, 1000]. 2 found instead.",
/// );
/// ```
pub fn limited<T, E>(value: T, min: Option<T>, max: Option<T>, name: Option<&str>) -> Result<T, E>
where
    T: PartialOrd + Display,
    E: CheckError,
{
    let bound = Bound::new(min, max);
    if bound.contains(&value) {
        Ok(value)
    } else {
        Err(E::from_violation(
            ErrorKind::RangeExceeded,
            violation(name.unwrap_or(DEFAULT_SUBJECT), bound, &value),
        ))
    }
}

/// Checks that a value equals the expected one.
///
/// # Examples
///
/// ```
/// use rangeguard::checks::exactly;
/// use rangeguard::foundation::CheckResult;
///
/// let ok: CheckResult<i32> = exactly(42, 42, None);
/// assert_eq!(ok.unwrap(), 42);
/// ```
pub fn exactly<T, E>(value: T, expected: T, name: Option<&str>) -> Result<T, E>
where
    T: PartialEq + Display,
    E: CheckError,
{
    if value == expected {
        Ok(value)
    } else {
        Err(E::from_violation(
            ErrorKind::NotEqual,
            violation(
                name.unwrap_or(DEFAULT_SUBJECT),
                format!("exactly {expected}"),
                &value,
            ),
        ))
    }
}

/// Saturates a value into a bound without failing.
///
/// Returns `min` if the value is below it (when present), `max` if above it
/// (when present), else the value unchanged. Idempotent.
///
/// # Examples
///
/// ```
/// use rangeguard::checks::clip;
///
/// assert_eq!(clip(10, Some(0), Some(5)), 5);
/// assert_eq!(clip(-3, Some(0), Some(5)), 0);
/// assert_eq!(clip(3, Some(0), Some(5)), 3);
/// ```
pub fn clip<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> T {
    Bound::new(min, max).clamp(value)
}

// ============================================================================
// TESTS
// ============================================================================
