//! Conversions between [`Outcome`], [`Error`] and the standard `Result`.
//!
//! These make it straightforward to adopt `outcome-rail` at the edges of an
//! existing codebase: errors convert directly into failed outcomes, and
//! outcomes flatten back into `Result<T, Error>` for `?`-based code.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! let outcome: Outcome<u8> = Error::gateway_timeout("Upstream.Timeout", "no answer in 5s").into();
//! let result: Result<u8, Error> = outcome.into();
//! assert_eq!(result.unwrap_err().code(), "Upstream.Timeout");
//!
//! let back = Outcome::try_from(Ok::<_, Error>(7)).unwrap();
//! assert_eq!(back.into_value(), Some(7));
//! ```
use crate::types::{ContractViolation, Error, Outcome, ValidationError};

/// Converts an error into a failed outcome.
///
/// # Panics
///
/// Panics if `error` is [`Error::NONE`], exactly like [`Outcome::failure`].
impl<T> From<Error> for Outcome<T> {
    #[inline]
    #[track_caller]
    fn from(error: Error) -> Self {
        Outcome::failure(error)
    }
}

impl<T> From<ValidationError> for Outcome<T> {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Outcome::failure(Error::Validation(error))
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

/// Rejects `Err(Error::NONE)`, the only `Result` with no outcome counterpart.
impl<T> TryFrom<Result<T, Error>> for Outcome<T> {
    type Error = ContractViolation;

    #[inline]
    fn try_from(result: Result<T, Error>) -> Result<Self, Self::Error> {
        match result {
            Ok(value) => Ok(Outcome::success(value)),
            Err(error) => Outcome::try_failure(error),
        }
    }
}
