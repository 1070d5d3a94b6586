//! Shorthand macros for recording validation failures.
//!
//! - [`macro@crate::validate`] - Records a `(code, description)` pair on a
//!   [`ValidationErrorBuilder`](crate::validation::ValidationErrorBuilder)
//!   when a rule does not hold.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validate;
//! use outcome_rail::validation::ValidationErrorBuilder;
//!
//! let email = "ada.example.com";
//! let mut builder = ValidationErrorBuilder::create();
//! validate!(builder, !email.is_empty(), "Email", "Email is required");
//! validate!(builder, email.contains('@'), "Email", "Email format is invalid");
//!
//! assert_eq!(builder.descriptions("Email").unwrap(), ["Email format is invalid"]);
//! ```

/// Records a validation failure when `condition` is false.
///
/// The description accepts either a single expression or a format string
/// with arguments; formatting only happens when the rule fails.
///
/// # Syntax
///
/// - `validate!(builder, condition, code, description)`
/// - `validate!(builder, condition, code, "format {}", args...)`
///
/// # Examples
///
/// ```
/// use outcome_rail::validate;
/// use outcome_rail::validation::ValidationErrorBuilder;
///
/// let age = 12;
/// let mut builder = ValidationErrorBuilder::create();
/// validate!(builder, age >= 18, "Age", "must be at least 18, got {}", age);
///
/// assert_eq!(builder.descriptions("Age").unwrap(), ["must be at least 18, got 12"]);
/// ```
#[macro_export]
macro_rules! validate {
    ($builder:expr, $condition:expr, $code:expr, $fmt:literal, $($arg:tt)+) => {
        if !$condition {
            $builder.add($code, $crate::__private::format!($fmt, $($arg)+));
        }
    };
    ($builder:expr, $condition:expr, $code:expr, $description:expr $(,)?) => {
        if !$condition {
            $builder.add($code, $description);
        }
    };
}
