//! Substituting the error type through `CheckError`.

use rangeguard::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
struct PipelineError(String);

impl CheckError for PipelineError {
    fn from_violation(_kind: ErrorKind, message: String) -> Self {
        Self(message)
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
struct TaggedError {
    kind: ErrorKind,
    message: String,
}

impl CheckError for TaggedError {
    fn from_violation(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

#[test]
fn custom_type_is_raised_instead_of_the_default() {
    let checked: Result<i32, PipelineError> = limited(2, Some(100), Some(1000), None);
    let err = checked.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value must be in range [100, 1000]. 2 found instead."
    );
}

#[test]
fn custom_type_carries_the_same_message_as_the_default() {
    let default: CheckResult<i32> = uint8(300, Some("alpha"));
    let custom: Result<i32, PipelineError> = uint8(300, Some("alpha"));
    assert_eq!(
        default.unwrap_err().to_string(),
        custom.unwrap_err().to_string()
    );
}

#[test]
fn custom_type_may_keep_the_kind() {
    let checked: Result<Vec<i32>, TaggedError> = exact_len(vec![1, 2, 3], 2, None);
    let err = checked.unwrap_err();
    assert_eq!(err.kind, ErrorKind::LengthMismatch);
    assert_eq!(
        err.message,
        "Length of Value must be exactly 2. 3 found instead."
    );
}

#[test]
fn every_check_family_works_with_a_custom_error() {
    let scalar: Result<i32, PipelineError> = limited(5, Some(0), Some(10), None);
    assert_eq!(scalar.unwrap(), 5);

    let width: Result<i32, PipelineError> = int32(7, None);
    assert_eq!(width.unwrap(), 7);

    let sign: Result<i32, PipelineError> = non_negative(0, None);
    assert_eq!(sign.unwrap(), 0);

    let equal: Result<i32, PipelineError> = exactly(42, 42, None);
    assert_eq!(equal.unwrap(), 42);

    let length: Result<Vec<i32>, PipelineError> = limited_len(vec![1, 2, 3], Some(2), Some(7), None);
    assert_eq!(length.unwrap(), vec![1, 2, 3]);
}
