//! Extension traits lifting `Result` and `Option` into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{OptionExt, ResultExt};
//! use outcome_rail::{Error, ErrorKind};
//!
//! let port = "80a".parse::<u16>().or_problem("Config.Port", "port must be a number");
//! assert_eq!(port.error().code(), "Config.Port");
//!
//! let user = None::<&str>.or_error(Error::not_found("User.NotFound", "no such user"));
//! assert_eq!(user.error().kind(), ErrorKind::NotFound);
//! ```

use crate::types::alloc_type::Cow;
use crate::types::{Error, Outcome};

/// Extension trait turning a `Result` into an [`Outcome`].
pub trait ResultExt<T, E> {
    /// Converts the error side with its `Into<Error>` impl.
    ///
    /// # Panics
    ///
    /// Panics if the error converts into [`Error::NONE`].
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Error>;

    /// Replaces any error with a [`Error::Problem`] carrying `code` and `description`.
    fn or_problem<C, D>(self, code: C, description: D) -> Outcome<T>
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>;

    /// Maps the error with `f`; the closure only runs on failure.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns [`Error::NONE`].
    fn or_error_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    #[track_caller]
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Error>,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error.into()),
        }
    }

    #[inline]
    fn or_problem<C, D>(self, code: C, description: D) -> Outcome<T>
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(_) => Outcome::failure(Error::problem(code, description)),
        }
    }

    #[inline]
    #[track_caller]
    fn or_error_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(f(error)),
        }
    }
}

/// Extension trait turning an `Option` into an [`Outcome`].
pub trait OptionExt<T> {
    /// Fails with [`Error::NULL_VALUE`] when empty.
    fn into_outcome(self) -> Outcome<T>;

    /// Fails with `error` when empty.
    ///
    /// # Panics
    ///
    /// Panics if the option is empty and `error` is [`Error::NONE`].
    fn or_error(self, error: Error) -> Outcome<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from_option(self)
    }

    #[inline]
    #[track_caller]
    fn or_error(self, error: Error) -> Outcome<T> {
        match self {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error),
        }
    }
}
