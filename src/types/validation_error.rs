use core::fmt::{self, Display};

use crate::types::alloc_type::{BTreeMap, Cow};
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered descriptions recorded for a single code.
pub type Descriptions = ErrorVec<Cow<'static, str>>;

/// Per-code description lists, keyed by field or error code.
pub type ErrorMap = BTreeMap<Cow<'static, str>, Descriptions>;

/// Aggregate error bundling every field-level failure of a validation pass.
///
/// Produced by
/// [`ValidationErrorBuilder::to_outcome`](crate::validation::ValidationErrorBuilder::to_outcome),
/// which always uses [`ValidationError::CODE`] and
/// [`ValidationError::DESCRIPTION`].
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::ValidationErrorBuilder;
///
/// let mut builder = ValidationErrorBuilder::create();
/// builder.add("Email", "Email is required");
///
/// let error = builder.to_outcome().into_error().unwrap();
/// let validation = error.as_validation().unwrap();
/// assert_eq!(validation.descriptions("Email").unwrap(), ["Email is required"]);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidationError {
    code: Cow<'static, str>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    description: Option<Cow<'static, str>>,
    errors: ErrorMap,
}

impl ValidationError {
    /// Code of every aggregate produced by the builder.
    pub const CODE: &'static str = "Error-Validation";

    /// Description of every aggregate produced by the builder.
    pub const DESCRIPTION: &'static str = "A validation error has occured.";

    /// Creates a validation error with an explicit code and description.
    #[inline]
    pub fn new<C>(code: C, description: Option<Cow<'static, str>>, errors: ErrorMap) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        Self { code: code.into(), description, errors }
    }

    /// Wraps a field map under the fixed aggregate code and description.
    #[inline]
    pub fn from_errors(errors: ErrorMap) -> Self {
        Self {
            code: Cow::Borrowed(Self::CODE),
            description: Some(Cow::Borrowed(Self::DESCRIPTION)),
            errors,
        }
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the full per-code map.
    #[inline]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Returns the descriptions recorded for `code`, in insertion order.
    #[inline]
    pub fn descriptions(&self, code: &str) -> Option<&[Cow<'static, str>]> {
        self.errors.get(code).map(|descriptions| descriptions.as_slice())
    }

    /// Number of distinct codes.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub(crate) fn into_parts(self) -> (Cow<'static, str>, Option<Cow<'static, str>>) {
        (self.code, self.description)
    }

    /// Consumes the error and returns the field map.
    #[inline]
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;
        if let Some(description) = &self.description {
            write!(f, ": {}", description)?;
        }
        for (code, descriptions) in &self.errors {
            write!(f, "\n  {}:", code)?;
            for (idx, description) in descriptions.iter().enumerate() {
                let sep = if idx == 0 { " " } else { "; " };
                write!(f, "{}{}", sep, description)?;
            }
        }
        Ok(())
    }
}

impl core::error::Error for ValidationError {}
