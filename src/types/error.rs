//! Tagged error taxonomy shared by every [`Outcome`](crate::Outcome).
//!
//! An [`Error`] is a plain value: a kind tag, a stable string code and an
//! optional human readable description. The kind tells callers how to present
//! the failure (for example which transport status to map it to); the crate
//! itself never branches on it.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Error, ErrorKind};
//!
//! let err = Error::not_found("User.NotFound", "No user with id 42");
//! assert_eq!(err.kind(), ErrorKind::NotFound);
//! assert_eq!(err.code(), "User.NotFound");
//! assert_eq!(err.description(), Some("No user with id 42"));
//!
//! assert!(Error::NONE.is_none());
//! assert_eq!(Error::NONE.code(), "");
//! ```
use core::fmt::{self, Display};

use crate::types::alloc_type::Cow;
use crate::types::validation_error::ValidationError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Code and optional description carried by every non-sentinel error kind.
///
/// Two details are equal when both the code and the description are equal.
/// A missing description is distinct from an empty one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorDetail {
    code: Cow<'static, str>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    description: Option<Cow<'static, str>>,
}

impl ErrorDetail {
    /// Creates a detail with a code and a description.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::ErrorDetail;
    ///
    /// let detail = ErrorDetail::new("Email", format!("{} is not valid", "a@"));
    /// assert_eq!(detail.code(), "Email");
    /// assert_eq!(detail.description(), Some("a@ is not valid"));
    /// ```
    #[inline]
    pub fn new<C, D>(code: C, description: D) -> Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), description: Some(description.into()) }
    }

    /// Creates a detail that carries a code but no description.
    #[inline]
    pub fn code_only<C>(code: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), description: None }
    }

    /// Builds a detail from static strings in const context.
    #[inline]
    pub const fn from_static(code: &'static str, description: Option<&'static str>) -> Self {
        let description = match description {
            Some(text) => Some(Cow::Borrowed(text)),
            None => None,
        };
        Self { code: Cow::Borrowed(code), description }
    }

    /// Returns the error code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the description, if one was supplied.
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Cow<'static, str>, Option<Cow<'static, str>>) {
        (self.code, self.description)
    }
}

impl Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.code, description),
            None => f.write_str(&self.code),
        }
    }
}

/// Fieldless tag mirroring the variants of [`Error`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    None,
    Problem,
    Validation,
    NotFound,
    Conflict,
    Forbidden,
    Unauthorised,
    ServiceUnavailable,
    TooManyRequests,
    GatewayTimeout,
    ResourceLocked,
    ResourceGone,
    InternalServerError,
}

impl ErrorKind {
    /// Short, stable name of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Problem => "problem",
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Forbidden => "forbidden",
            Self::Unauthorised => "unauthorised",
            Self::ServiceUnavailable => "service_unavailable",
            Self::TooManyRequests => "too_many_requests",
            Self::GatewayTimeout => "gateway_timeout",
            Self::ResourceLocked => "resource_locked",
            Self::ResourceGone => "resource_gone",
            Self::InternalServerError => "internal_server_error",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure value, tagged with its kind.
///
/// [`Error::None`] is the sentinel carried by successful outcomes and is never
/// a real failure. Every other variant carries a code and an optional
/// description; [`Error::Validation`] additionally carries the per-code
/// description lists collected by a
/// [`ValidationErrorBuilder`](crate::validation::ValidationErrorBuilder).
///
/// Equality is structural: two errors are equal when their kind, code and
/// description (and, for validation errors, the field map) are equal.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    None,
    Problem(ErrorDetail),
    Validation(ValidationError),
    NotFound(ErrorDetail),
    Conflict(ErrorDetail),
    Forbidden(ErrorDetail),
    Unauthorised(ErrorDetail),
    ServiceUnavailable(ErrorDetail),
    TooManyRequests(ErrorDetail),
    GatewayTimeout(ErrorDetail),
    ResourceLocked(ErrorDetail),
    ResourceGone(ErrorDetail),
    InternalServerError(ErrorDetail),
}

/// Shared instance handed out by `Outcome::error` on success.
pub(crate) static NONE: Error = Error::None;

macro_rules! kind_constructors {
    ($($(#[$meta:meta])* $fn_name:ident => $variant:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $fn_name<C, D>(code: C, description: D) -> Self
            where
                C: Into<Cow<'static, str>>,
                D: Into<Cow<'static, str>>,
            {
                Self::$variant(ErrorDetail::new(code, description))
            }
        )*
    };
}

impl Error {
    /// The "no error" sentinel. Only successful outcomes carry it.
    pub const NONE: Error = Error::None;

    /// Generic failure for a value that was required but absent.
    pub const NULL_VALUE: Error = Error::Problem(ErrorDetail::from_static(
        "Error.NullValue",
        Some("The specified result value is null."),
    ));

    /// Generic failure for a predicate that did not hold.
    pub const CONDITION_NOT_MET: Error = Error::Problem(ErrorDetail::from_static(
        "Error.ConditionNotMet",
        Some("The specified condition was not met."),
    ));

    kind_constructors! {
        /// Generic business failure.
        problem => Problem,
        /// The requested resource does not exist.
        not_found => NotFound,
        /// The request conflicts with the current state.
        conflict => Conflict,
        /// The caller is known but not allowed to perform the operation.
        forbidden => Forbidden,
        /// The caller could not be identified.
        unauthorised => Unauthorised,
        service_unavailable => ServiceUnavailable,
        too_many_requests => TooManyRequests,
        gateway_timeout => GatewayTimeout,
        resource_locked => ResourceLocked,
        resource_gone => ResourceGone,
        internal_server_error => InternalServerError,
    }

    /// Builds an error of the given kind from a detail.
    ///
    /// [`ErrorKind::None`] yields the sentinel and discards the detail.
    /// [`ErrorKind::Validation`] yields a validation error with the detail's
    /// code and description and an empty field map.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Error, ErrorDetail, ErrorKind};
    ///
    /// let err = Error::from_detail(ErrorKind::Conflict, ErrorDetail::code_only("Order.Duplicate"));
    /// assert_eq!(err.kind(), ErrorKind::Conflict);
    /// assert_eq!(err.description(), None);
    /// ```
    pub fn from_detail(kind: ErrorKind, detail: ErrorDetail) -> Self {
        match kind {
            ErrorKind::None => Self::None,
            ErrorKind::Problem => Self::Problem(detail),
            ErrorKind::Validation => {
                let (code, description) = detail.into_parts();
                Self::Validation(ValidationError::new(code, description, Default::default()))
            },
            ErrorKind::NotFound => Self::NotFound(detail),
            ErrorKind::Conflict => Self::Conflict(detail),
            ErrorKind::Forbidden => Self::Forbidden(detail),
            ErrorKind::Unauthorised => Self::Unauthorised(detail),
            ErrorKind::ServiceUnavailable => Self::ServiceUnavailable(detail),
            ErrorKind::TooManyRequests => Self::TooManyRequests(detail),
            ErrorKind::GatewayTimeout => Self::GatewayTimeout(detail),
            ErrorKind::ResourceLocked => Self::ResourceLocked(detail),
            ErrorKind::ResourceGone => Self::ResourceGone(detail),
            ErrorKind::InternalServerError => Self::InternalServerError(detail),
        }
    }

    /// Returns the kind tag of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::None => ErrorKind::None,
            Self::Problem(_) => ErrorKind::Problem,
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::Unauthorised(_) => ErrorKind::Unauthorised,
            Self::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
            Self::TooManyRequests(_) => ErrorKind::TooManyRequests,
            Self::GatewayTimeout(_) => ErrorKind::GatewayTimeout,
            Self::ResourceLocked(_) => ErrorKind::ResourceLocked,
            Self::ResourceGone(_) => ErrorKind::ResourceGone,
            Self::InternalServerError(_) => ErrorKind::InternalServerError,
        }
    }

    /// Returns the detail of a non-validation, non-sentinel error.
    pub const fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::None | Self::Validation(_) => None,
            Self::Problem(detail)
            | Self::NotFound(detail)
            | Self::Conflict(detail)
            | Self::Forbidden(detail)
            | Self::Unauthorised(detail)
            | Self::ServiceUnavailable(detail)
            | Self::TooManyRequests(detail)
            | Self::GatewayTimeout(detail)
            | Self::ResourceLocked(detail)
            | Self::ResourceGone(detail)
            | Self::InternalServerError(detail) => Some(detail),
        }
    }

    /// Returns the error code. The sentinel's code is the empty string.
    pub fn code(&self) -> &str {
        match self {
            Self::None => "",
            Self::Validation(validation) => validation.code(),
            other => other.detail().map_or("", ErrorDetail::code),
        }
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Validation(validation) => validation.description(),
            other => other.detail().and_then(ErrorDetail::description),
        }
    }

    pub(crate) fn into_parts(self) -> (Cow<'static, str>, Option<Cow<'static, str>>) {
        match self {
            Self::None => (Cow::Borrowed(""), None),
            Self::Validation(validation) => validation.into_parts(),
            Self::Problem(detail)
            | Self::NotFound(detail)
            | Self::Conflict(detail)
            | Self::Forbidden(detail)
            | Self::Unauthorised(detail)
            | Self::ServiceUnavailable(detail)
            | Self::TooManyRequests(detail)
            | Self::GatewayTimeout(detail)
            | Self::ResourceLocked(detail)
            | Self::ResourceGone(detail)
            | Self::InternalServerError(detail) => detail.into_parts(),
        }
    }

    /// Returns `true` for the success sentinel.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the validation payload when this is a validation error.
    #[inline]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(validation) => Some(validation),
            _ => None,
        }
    }
}

impl Default for Error {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl From<ValidationError> for Error {
    #[inline]
    fn from(validation: ValidationError) -> Self {
        Self::Validation(validation)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("no error"),
            Self::Validation(validation) => Display::fmt(validation, f),
            other => match other.detail() {
                Some(detail) => Display::fmt(detail, f),
                None => Ok(()),
            },
        }
    }
}

impl core::error::Error for Error {}
