//! Shared building blocks for checks
//!
//! - **[`Bound`]**: inclusive interval with optionally absent sides, plus the
//!   constraint phrasing used in messages.
//! - **[`RangeError`] / [`ErrorKind`] / [`CheckError`]**: the default error,
//!   its kind tag, and the trait that lets callers substitute their own error
//!   type.

pub mod bound;
pub mod error;

pub use bound::Bound;
pub use error::{CheckError, DEFAULT_SUBJECT, ErrorKind, RangeError};

pub(crate) use error::violation;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Result of a check, defaulting to [`RangeError`].
///
/// ```
/// use rangeguard::foundation::CheckResult;
/// use rangeguard::checks::limited;
///
/// let checked: CheckResult<u32> = limited(7, Some(0), Some(10), None);
/// assert_eq!(checked.unwrap(), 7);
/// ```
pub type CheckResult<T, E = RangeError> = Result<T, E>;
