//! # tsur
//!
//! Explicit optional and fallible values with a functional API, plus slice
//! helpers driven by optional results.
//!
//! ## Overview
//!
//! - **[`Maybe`]**: a value that may be absent (`Some` / `None`)
//! - **[`Outcome`]**: a computation that either succeeded (`Ok`) or failed (`Err`)
//! - **[`array`]**: `filter_map`, `map_while`, `reduce_while` and first/last
//!   lookups over slices
//! - **[`ext`]**: the same helpers as methods on slices
//! - **[`typeclass`]**: `Functor` and `Monad` for both containers
//!
//! Panicking code can be turned into an [`Outcome`] with
//! [`Outcome::attempt`], or, for futures, `Outcome::attempt_async`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor`, `Functor` and `Monad`
//! - `array`: slice helpers as free functions
//! - `ext`: slice helpers as methods (enables `array`)
//! - `async`: `Outcome::attempt_async`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use tsur::prelude::*;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::from(input.trim().parse::<i32>()).map_err(|error| error.to_string())
//! }
//!
//! let total = parse("20").and_then(|left| parse(" 22").map(|right| left + right));
//! assert_eq!(total, Outcome::Ok(42));
//!
//! let missing = Maybe::from_truthy("").or(Maybe::Some("fallback"));
//! assert_eq!(missing.unwrap(), "fallback");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use tsur::prelude::*;
///
/// assert!(is_maybe(&Maybe::Some(1_u8)));
/// ```
pub mod prelude {
    pub use crate::error::{Failure, Panic, UnwrapError};
    pub use crate::maybe::{IntoMaybe, Maybe, Truthy};
    pub use crate::outcome::{IntoOutcome, Outcome};
    pub use crate::same::SameValue;
    pub use crate::sentinel::{Tag, Tagged, is_maybe, is_outcome};

    #[cfg(feature = "ext")]
    pub use crate::ext::SliceExt;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod same;
pub mod sentinel;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "ext")]
pub mod ext;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::{Failure, Panic, UnwrapError};
pub use maybe::{IntoMaybe, Maybe, Truthy};
pub use outcome::{IntoOutcome, Outcome};
pub use same::SameValue;
pub use sentinel::{Tag, Tagged, is_maybe, is_outcome};
