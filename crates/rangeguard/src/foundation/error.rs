//! Error types for failed checks.
//!
//! Every failing check produces a single-sentence, user-displayable message of
//! the form `"<Subject> must <constraint>. <Actual> found instead."`. The
//! concrete error type is chosen by the caller through the [`CheckError`]
//! trait; [`RangeError`] is the default.

use std::fmt::Display;

/// Placeholder subject used in messages when a check is given no value name.
pub const DEFAULT_SUBJECT: &str = "Value";

// ============================================================================
// ERROR KIND
// ============================================================================

/// What a failed check was checking.
///
/// Purely informational: every kind maps to the same message-construction
/// rule, and custom error types are free to ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A scalar fell outside its permitted range.
    RangeExceeded,
    /// A collection length fell outside its permitted range.
    LengthOutOfRange,
    /// A collection length differed from the expected exact length.
    LengthMismatch,
    /// A value differed from the expected exact value.
    NotEqual,
}

// ============================================================================
// DEFAULT ERROR
// ============================================================================

/// The default error type produced by checks.
///
/// Displays as the bare message, so it can be surfaced to users as-is:
///
/// ```
/// use rangeguard::foundation::CheckResult;
/// use rangeguard::checks::uint8;
///
/// let checked: CheckResult<i32> = uint8(256, None);
/// let err = checked.unwrap_err();
/// assert_eq!(err.to_string(), "Value must be in range [0, 255]. 256 found instead.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct RangeError {
    kind: ErrorKind,
    message: String,
}

impl RangeError {
    /// What the failed check was checking.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The formatted, user-displayable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// CONFIGURABLE ERROR TYPE
// ============================================================================

/// An error type that checks can fail with.
///
/// Checks are generic over their error, so callers can substitute their own
/// type and still receive the exact message the default would carry. The only
/// requirement is a constructor from the formatted message; the kind may be
/// ignored.
///
/// ```
/// use rangeguard::foundation::{CheckError, ErrorKind};
/// use rangeguard::checks::positive;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct ConfigError(String);
///
/// impl CheckError for ConfigError {
///     fn from_violation(_kind: ErrorKind, message: String) -> Self {
///         Self(message)
///     }
/// }
///
/// let err: ConfigError = positive(-3, Some("retries")).unwrap_err();
/// assert_eq!(err.to_string(), "retries must be >= 1. -3 found instead.");
/// ```
pub trait CheckError: std::error::Error + Sized {
    /// Builds the error from a fully formatted, user-displayable message.
    fn from_violation(kind: ErrorKind, message: String) -> Self;
}

impl CheckError for RangeError {
    fn from_violation(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

// ============================================================================
// MESSAGE CONSTRUCTION
// ============================================================================

/// The one message-construction rule shared by every check.
pub(crate) fn violation(
    subject: impl Display,
    constraint: impl Display,
    actual: impl Display,
) -> String {
    format!("{subject} must be {constraint}. {actual} found instead.")
}

// ============================================================================
// TESTS
// ============================================================================
