//! Collection length checks.
//!
//! These take the collection by value and hand it back unchanged on success,
//! so a check slots into a pipeline without cloning:
//!
//! ```
//! use rangeguard::checks::limited_len;
//! use rangeguard::foundation::CheckResult;
//!
//! let header: CheckResult<Vec<u8>> = limited_len(vec![0x7f, 0x45], Some(2), Some(4), Some("header"));
//! assert_eq!(header.unwrap(), vec![0x7f, 0x45]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::foundation::{Bound, CheckError, DEFAULT_SUBJECT, ErrorKind, violation};

// ============================================================================
// LENGTH TRAIT
// ============================================================================

/// A collection with a known element count.
///
/// Implemented for the standard sized collections; string types count bytes.
pub trait Length {
    /// Number of elements.
    fn length(&self) -> usize;
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for &[T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Length for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl Length for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Length for &str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Length for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> Length for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Length for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Length for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

// ============================================================================
// LENGTH CHECKS
// ============================================================================

/// The message subject for length checks: `Length of <name>`.
fn length_subject(name: Option<&str>) -> String {
    format!("Length of {}", name.unwrap_or(DEFAULT_SUBJECT))
}

/// Checks that a collection's length lies within an inclusive bound, either
/// side of which may be absent.
///
/// Same bound logic as [`limited`](super::limited) applied to the length,
/// with the subject prefixed `"Length of ..."`.
pub fn limited_len<C, E>(
    collection: C,
    min: Option<usize>,
    max: Option<usize>,
    name: Option<&str>,
) -> Result<C, E>
where
    C: Length,
    E: CheckError,
{
    let len = collection.length();
    let bound = Bound::new(min, max);
    if bound.contains(&len) {
        Ok(collection)
    } else {
        Err(E::from_violation(
            ErrorKind::LengthOutOfRange,
            violation(length_subject(name), bound, len),
        ))
    }
}

/// Checks that a collection has exactly the expected length.
///
/// ```
/// use rangeguard::checks::exact_len;
/// use rangeguard::foundation::CheckResult;
///
/// let checked: CheckResult<Vec<i32>> = exact_len(vec![1, 2, 3], 2, None);
/// assert_eq!(
///     checked.unwrap_err().to_string(),
///     "Length of Value must be exactly 2. 3 found instead.",
/// );
/// ```
pub fn exact_len<C, E>(collection: C, expected: usize, name: Option<&str>) -> Result<C, E>
where
    C: Length,
    E: CheckError,
{
    let len = collection.length();
    if len == expected {
        Ok(collection)
    } else {
        Err(E::from_violation(
            ErrorKind::LengthMismatch,
            violation(length_subject(name), format!("exactly {expected}"), len),
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================
