//! Error accumulation for boundary validation.
//!
//! Rejecting an assessment one problem at a time makes users resubmit
//! repeatedly, so input checks use stillwater's [`Validation`] to collect
//! every problem and only collapse to a [`Result`](crate::errors::Result)
//! at the end.
//!
//! ```rust
//! use techmap::effects::{combine_validations, run_validation, validation_failure, validation_success};
//!
//! let checks = vec![
//!     validation_success(1),
//!     validation_failure("maturity.Asset: rating 9 is outside 1..=5".to_string()),
//!     validation_failure("priorities.ranking[0]: unknown priority 'Speed'".to_string()),
//! ];
//! let err = run_validation(combine_validations(checks)).unwrap_err();
//! assert_eq!(err.messages().len(), 2);
//! ```

use crate::errors::Error;
use stillwater::{NonEmptyVec, Validation};

/// Accumulated problem messages. Each names the offending field first.
pub type InputErrors = NonEmptyVec<String>;

/// Validation over assessment or reference input.
pub type InputValidation<T> = Validation<T, InputErrors>;

pub fn validation_success<T>(value: T) -> InputValidation<T> {
    Validation::Success(value)
}

pub fn validation_failure<T>(error: String) -> InputValidation<T> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Create a failed validation result with multiple errors.
///
/// # Panics
///
/// Panics if `errors` is empty.
pub fn validation_failures<T>(errors: Vec<String>) -> InputValidation<T> {
    let nev =
        NonEmptyVec::from_vec(errors).expect("validation_failures requires at least one error");
    Validation::Failure(nev)
}

/// Combine validations, keeping every success in order or every error.
pub fn combine_validations<T>(validations: Vec<InputValidation<T>>) -> InputValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures: Vec<String> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors),
        }
    }

    match NonEmptyVec::from_vec(failures) {
        None => Validation::Success(successes),
        Some(errors) => Validation::Failure(errors),
    }
}

/// Map a function over a validation's success value.
pub fn validation_map<T, U, F>(validation: InputValidation<T>, f: F) -> InputValidation<U>
where
    F: FnOnce(T) -> U,
{
    match validation {
        Validation::Success(value) => Validation::Success(f(value)),
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

/// Collapse a validation into a fail-fast result.
pub fn run_validation<T>(validation: InputValidation<T>) -> crate::errors::Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => Err(Error::validations(errors.into_vec())),
    }
}
