//! Success/failure container returned by fallible operations and handlers.
//!
//! An [`Outcome`] is either a success carrying a value, or a failure carrying
//! a real [`Error`]. The pairing is enforced at construction: a success always
//! reports [`Error::NONE`] and a failure can never be built from it.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, Outcome};
//!
//! fn find_user(id: u64) -> Outcome<String> {
//!     if id == 42 {
//!         Outcome::success("deep thought".to_string())
//!     } else {
//!         Outcome::failure(Error::not_found("User.NotFound", "no such user"))
//!     }
//! }
//!
//! let message = find_user(7).fold(
//!     |name| format!("hello {name}"),
//!     |error| format!("failed with {}", error.code()),
//! );
//! assert_eq!(message, "failed with User.NotFound");
//! ```
use core::fmt::{self, Display};

use crate::types::error::{Error, NONE};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum State<T> {
    Success(T),
    Failure(Error),
}

/// Either a successful value or a tagged failure, never both.
///
/// `Outcome<()>` (the default) is the value-less form.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T = ()> {
    state: State<T>,
}

/// Raised when an [`Outcome`] would break the success/error pairing.
///
/// This signals a caller programming error, not a business failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractViolation {
    /// A failure was requested with the [`Error::NONE`] sentinel.
    FailureWithoutError,
    /// A success was requested together with a real error.
    SuccessWithError,
    /// A success was requested without a value.
    SuccessWithoutValue,
}

impl Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::FailureWithoutError => "a failed outcome must carry an error other than Error::NONE",
            Self::SuccessWithError => "a successful outcome cannot carry an error",
            Self::SuccessWithoutValue => "a successful outcome must carry a value",
        };
        f.write_str(message)
    }
}

impl core::error::Error for ContractViolation {}

impl Outcome<()> {
    /// Value-less success.
    #[inline]
    pub const fn ok() -> Self {
        Self { state: State::Success(()) }
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome carrying `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { state: State::Success(value) }
    }

    /// Creates a failed outcome carrying `error`.
    ///
    /// # Panics
    ///
    /// Panics if `error` is [`Error::NONE`]; only successes may carry the
    /// sentinel. Use [`Outcome::try_failure`] to check instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let outcome: Outcome = Outcome::failure(Error::conflict("Email.Taken", "already registered"));
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    #[track_caller]
    pub fn failure(error: Error) -> Self {
        match Self::try_failure(error) {
            Ok(outcome) => outcome,
            Err(violation) => panic!("{}", violation),
        }
    }

    /// Creates a failed outcome, rejecting the sentinel instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ContractViolation, Error, Outcome};
    ///
    /// let rejected = Outcome::<()>::try_failure(Error::NONE);
    /// assert_eq!(rejected.unwrap_err(), ContractViolation::FailureWithoutError);
    /// ```
    #[inline]
    pub fn try_failure(error: Error) -> Result<Self, ContractViolation> {
        if error.is_none() {
            return Err(ContractViolation::FailureWithoutError);
        }
        Ok(Self { state: State::Failure(error) })
    }

    /// Builds an outcome from its raw parts, checking every invariant.
    ///
    /// `is_success` must agree with `error` being the sentinel, and a success
    /// must come with a value. A failure discards any value it is handed.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{ContractViolation, Error, Outcome};
    ///
    /// let ok = Outcome::from_parts(true, Some(1), Error::NONE).unwrap();
    /// assert_eq!(ok.value(), Some(&1));
    ///
    /// let bad = Outcome::from_parts(true, Some(1), Error::CONDITION_NOT_MET);
    /// assert_eq!(bad.unwrap_err(), ContractViolation::SuccessWithError);
    /// ```
    pub fn from_parts(
        is_success: bool,
        value: Option<T>,
        error: Error,
    ) -> Result<Self, ContractViolation> {
        match (is_success, error.is_none()) {
            (true, false) => Err(ContractViolation::SuccessWithError),
            (false, true) => Err(ContractViolation::FailureWithoutError),
            (true, true) => value.map(Self::success).ok_or(ContractViolation::SuccessWithoutValue),
            (false, false) => Ok(Self { state: State::Failure(error) }),
        }
    }

    /// Succeeds with the contained value, or fails with [`Error::NULL_VALUE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let missing = Outcome::<i32>::from_option(None);
    /// assert_eq!(missing.error(), &Error::NULL_VALUE);
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::success(value),
            None => Self { state: State::Failure(Error::NULL_VALUE) },
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the carried error; [`Error::NONE`] for a success.
    #[inline]
    pub fn error(&self) -> &Error {
        match &self.state {
            State::Success(_) => &NONE,
            State::Failure(error) => error,
        }
    }

    /// Returns a reference to the value of a success.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Dispatches on the state, running exactly one of the two branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let status = Outcome::success(3).fold(|n| n * 2, |_| 0);
    /// assert_eq!(status, 6);
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self.state {
            State::Success(value) => on_success(value),
            State::Failure(error) => on_failure(error),
        }
    }

    /// Like [`fold`](Outcome::fold) but borrows the outcome.
    #[inline]
    pub fn fold_ref<'a, R, S, F>(&'a self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(&'a T) -> R,
        F: FnOnce(&'a Error) -> R,
    {
        match &self.state {
            State::Success(value) => on_success(value),
            State::Failure(error) => on_failure(error),
        }
    }

    /// Converts `&Outcome<T>` into `Outcome<&T>`, cloning the error on failure.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match &self.state {
            State::Success(value) => Outcome::success(value),
            State::Failure(error) => Outcome { state: State::Failure(error.clone()) },
        }
    }

    /// Maps the success value, leaving failures untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(error) => Outcome { state: State::Failure(error) },
        }
    }

    /// Maps the error of a failure.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns [`Error::NONE`].
    #[inline]
    #[track_caller]
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self.state {
            State::Success(value) => Self::success(value),
            State::Failure(error) => Self::failure(f(error)),
        }
    }

    /// Chains a computation that only runs on success.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.state {
            State::Success(value) => f(value),
            State::Failure(error) => Outcome { state: State::Failure(error) },
        }
    }

    /// Fails with [`Error::CONDITION_NOT_MET`] unless `predicate` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, Outcome};
    ///
    /// let adult = Outcome::success(15).ensure(|age| *age >= 18);
    /// assert_eq!(adult.error(), &Error::CONDITION_NOT_MET);
    /// ```
    #[inline]
    pub fn ensure<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_or(predicate, Error::CONDITION_NOT_MET)
    }

    /// Fails with `error` unless `predicate` holds.
    ///
    /// # Panics
    ///
    /// Panics if the predicate fails and `error` is [`Error::NONE`].
    #[inline]
    #[track_caller]
    pub fn ensure_or<P>(self, predicate: P, error: Error) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.state {
            State::Success(value) => {
                if predicate(&value) {
                    Self::success(value)
                } else {
                    Self::failure(error)
                }
            },
            State::Failure(error) => Self { state: State::Failure(error) },
        }
    }

    /// Extracts the value of a success.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// Extracts the error of a failure.
    #[inline]
    pub fn into_error(self) -> Option<Error> {
        match self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Error> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }
}

impl Default for Outcome<()> {
    #[inline]
    fn default() -> Self {
        Self::ok()
    }
}
