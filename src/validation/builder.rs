use crate::types::alloc_type::Cow;
use crate::types::validation_error::{ErrorMap, ValidationError};
use crate::types::{Error, Outcome};
use crate::validation::iter::Iter;

/// Mutable accumulator of `(code, description)` failures.
///
/// Descriptions are grouped by code and kept in insertion order; the same
/// description recorded twice appears twice. Errors without a description
/// carry nothing to report and are dropped by
/// [`add_error`](ValidationErrorBuilder::add_error).
///
/// A builder has two observable states, empty and non-empty. Converting it
/// with [`to_outcome`](ValidationErrorBuilder::to_outcome) neither consumes
/// nor freezes it.
///
/// # Examples
///
/// ```
/// use outcome_rail::validation::ValidationErrorBuilder;
///
/// let mut account = ValidationErrorBuilder::create();
/// account
///     .add("Email", "Email is required")
///     .add("Email", "Email format is invalid");
///
/// let mut profile = ValidationErrorBuilder::create();
/// profile.add("Username", "Username is required");
///
/// account.merge(&profile);
///
/// let error = account.to_outcome().into_error().unwrap();
/// let validation = error.as_validation().unwrap();
/// assert_eq!(validation.len(), 2);
/// assert_eq!(
///     validation.descriptions("Email").unwrap(),
///     ["Email is required", "Email format is invalid"]
/// );
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrorBuilder {
    errors: ErrorMap,
}

impl ValidationErrorBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn create() -> Self {
        Self::new()
    }

    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorMap::new() }
    }

    /// Records the description of `error` under its code.
    ///
    /// An error without a description is silently ignored. Callers that need
    /// a code-only marker recorded must supply a description.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::ValidationErrorBuilder;
    /// use outcome_rail::{Error, ErrorDetail, ErrorKind};
    ///
    /// let mut builder = ValidationErrorBuilder::create();
    /// builder.add_error(Error::from_detail(ErrorKind::Problem, ErrorDetail::code_only("Email")));
    /// assert!(builder.is_empty());
    ///
    /// builder.add_error(Error::problem("Email", "Email is required"));
    /// assert_eq!(builder.len(), 1);
    /// ```
    pub fn add_error(&mut self, error: Error) -> &mut Self {
        let (code, description) = error.into_parts();
        match description {
            Some(description) => self.push(code, description),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(code = %code, "dropping validation failure without description");
            },
        }
        self
    }

    /// Records `description` under `code`.
    #[inline]
    pub fn add<C, D>(&mut self, code: C, description: D) -> &mut Self
    where
        C: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        self.push(code.into(), description.into());
        self
    }

    fn push(&mut self, code: Cow<'static, str>, description: Cow<'static, str>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(code = %code, description = %description, "recorded validation failure");

        self.errors.entry(code).or_default().push(description);
    }

    /// Appends every entry of `other` after the entries already held.
    ///
    /// Per code, the descriptions of `other` follow this builder's own in
    /// their original order. Successive merges append in call order.
    pub fn merge(&mut self, other: &ValidationErrorBuilder) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            entries = self.errors.len(),
            incoming = other.errors.len(),
            "merging validation failures"
        );

        for (code, descriptions) in &other.errors {
            self.errors
                .entry(code.clone())
                .or_default()
                .extend(descriptions.iter().cloned());
        }
        self
    }

    /// Same as [`merge`](ValidationErrorBuilder::merge) but takes ownership of
    /// `other`, moving its descriptions instead of cloning them.
    pub fn merge_owned(&mut self, other: ValidationErrorBuilder) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            entries = self.errors.len(),
            incoming = other.errors.len(),
            "merging validation failures"
        );

        for (code, descriptions) in other.errors {
            self.errors.entry(code).or_default().extend(descriptions);
        }
        self
    }

    /// Returns `true` when nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of distinct codes recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Descriptions recorded for `code`, in insertion order.
    #[inline]
    pub fn descriptions(&self, code: &str) -> Option<&[Cow<'static, str>]> {
        self.errors.get(code).map(|descriptions| descriptions.as_slice())
    }

    /// Iterates over `(code, descriptions)` entries ordered by code.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.errors.iter())
    }

    /// Snapshots the builder into an outcome.
    ///
    /// An empty builder yields a success. Otherwise the failure carries a
    /// single [`ValidationError`] with [`ValidationError::CODE`],
    /// [`ValidationError::DESCRIPTION`] and a copy of every recorded entry.
    /// Calling it again without mutating the builder yields an equal outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::ValidationErrorBuilder;
    /// use outcome_rail::Error;
    ///
    /// let builder = ValidationErrorBuilder::create();
    /// let outcome = builder.to_outcome();
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.error(), &Error::NONE);
    /// ```
    pub fn to_outcome(&self) -> Outcome {
        self.to_outcome_with(())
    }

    /// Like [`to_outcome`](ValidationErrorBuilder::to_outcome) but succeeds with `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::validation::ValidationErrorBuilder;
    ///
    /// let mut builder = ValidationErrorBuilder::create();
    /// let name = "  ada ".trim();
    /// if name.is_empty() {
    ///     builder.add("Name", "Name is required");
    /// }
    /// assert_eq!(builder.to_outcome_with(name).into_value(), Some("ada"));
    /// ```
    pub fn to_outcome_with<T>(&self, value: T) -> Outcome<T> {
        if self.errors.is_empty() {
            return Outcome::success(value);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(fields = self.errors.len(), "validation failed");

        Outcome::failure(Error::Validation(ValidationError::from_errors(self.errors.clone())))
    }

    /// Consumes the builder into its accumulated map.
    #[inline]
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}

impl Extend<Error> for ValidationErrorBuilder {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        for error in iter {
            self.add_error(error);
        }
    }
}

impl FromIterator<Error> for ValidationErrorBuilder {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

impl<'a> IntoIterator for &'a ValidationErrorBuilder {
    type Item = (&'a str, &'a [Cow<'static, str>]);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
