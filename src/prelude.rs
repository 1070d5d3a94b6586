//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn check(name: &str) -> Outcome {
//!     let mut builder = ValidationErrorBuilder::create();
//!     validate!(builder, !name.is_empty(), "Name", "Name is required");
//!     builder.to_outcome()
//! }
//!
//! assert!(check("").is_failure());
//! ```

// Macros
pub use crate::validate;

// Core types
pub use crate::types::{Error, ErrorDetail, ErrorKind, Outcome, ValidationError};
pub use crate::validation::ValidationErrorBuilder;

// Handlers
pub use crate::handler::{handler_fn, Command, Handler, HandlerRegistry, Query, Request};

// Traits
pub use crate::traits::{OptionExt, ResultExt};
