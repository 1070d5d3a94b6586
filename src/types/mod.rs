//! Error model and outcome types.
//!
//! This module holds the value types every other part of the crate is built
//! on: the tagged [`Error`] taxonomy, the aggregate [`ValidationError`] and the
//! [`Outcome`] container.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Error, Outcome};
//!
//! let outcome: Outcome<u32> = Outcome::failure(Error::forbidden("Order.Forbidden", "not your order"));
//! assert_eq!(outcome.error().code(), "Order.Forbidden");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error;
pub mod outcome;
pub mod validation_error;

pub use error::*;
pub use outcome::*;
pub use validation_error::*;

/// SmallVec-backed collection used for accumulating descriptions.
///
/// Uses inline storage for one element, the common case of a field failing
/// a single rule.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
