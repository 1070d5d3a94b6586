//! Accumulation of field-level validation failures.
//!
//! A [`ValidationErrorBuilder`] collects every failure of a validation pass
//! instead of stopping at the first one, then turns the whole set into a
//! single [`Outcome`](crate::Outcome) via
//! [`to_outcome`](ValidationErrorBuilder::to_outcome).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::validation::ValidationErrorBuilder;
//! use outcome_rail::{Error, ValidationError};
//!
//! let mut builder = ValidationErrorBuilder::create();
//! builder.add_error(Error::problem("Email", "Email is required"));
//! builder.add_error(Error::problem("Password", "Password is required"));
//!
//! let outcome = builder.to_outcome();
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().code(), ValidationError::CODE);
//! ```
pub mod builder;
pub mod iter;

pub use self::builder::ValidationErrorBuilder;
pub use self::iter::Iter;
