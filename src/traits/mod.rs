//! Extension traits for adopting [`Outcome`](crate::Outcome) alongside std types.
//!
//! - [`ResultExt`]: lifts `Result<T, E>` into `Outcome<T>`
//! - [`OptionExt`]: lifts `Option<T>` into `Outcome<T>`

pub mod result_ext;

pub use result_ext::{OptionExt, ResultExt};
