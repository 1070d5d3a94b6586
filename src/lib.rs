//! Disciplined success/failure outcomes and validation error accumulation.
//!
//! Expected failures are values, not panics: operations return an
//! [`Outcome`] that is either a success or a tagged [`Error`]. Validation
//! collects every field-level failure in a
//! [`ValidationErrorBuilder`](validation::ValidationErrorBuilder) and reports
//! them together as one [`ValidationError`].
//!
//! # Examples
//!
//! ## Tagged Outcomes
//!
//! ```
//! use outcome_rail::{Error, ErrorKind, Outcome};
//!
//! fn withdraw(balance: u64, amount: u64) -> Outcome<u64> {
//!     if amount > balance {
//!         return Outcome::failure(Error::conflict("Account.Insufficient", "balance too low"));
//!     }
//!     Outcome::success(balance - amount)
//! }
//!
//! let kind = withdraw(10, 50).fold(|_| None, |error| Some(error.kind()));
//! assert_eq!(kind, Some(ErrorKind::Conflict));
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use outcome_rail::validation::ValidationErrorBuilder;
//! use outcome_rail::{Error, ValidationError};
//!
//! let mut credentials = ValidationErrorBuilder::create();
//! credentials.add_error(Error::problem("Email", "Email is required"));
//! credentials.add_error(Error::problem("Password", "Password is required"));
//!
//! let mut profile = ValidationErrorBuilder::create();
//! profile.add_error(Error::problem("Username", "Username is required"));
//!
//! credentials.merge(&profile);
//!
//! let error = credentials.to_outcome().into_error().unwrap();
//! assert_eq!(error.code(), ValidationError::CODE);
//! assert_eq!(error.as_validation().unwrap().len(), 3);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Error and Result
pub mod convert;
/// Explicit command/query handler registry
pub mod handler;
/// Validation macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for Result and Option
pub mod traits;
/// Error model and Outcome
pub mod types;
/// Validation error accumulation
pub mod validation;

/// Tower integration - Service implementations for handlers (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use traits::*;
pub use types::{
    ContractViolation, Descriptions, Error, ErrorDetail, ErrorKind, ErrorMap, ErrorVec, Outcome,
    ValidationError,
};
pub use validation::ValidationErrorBuilder;

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
