//! Type classes for the containers.
//!
//! - [`TypeConstructor`]: higher-kinded emulation via generic associated types
//! - [`Functor`]: mapping over the contained value
//! - [`Monad`]: lifting values and chaining dependent computations
//!
//! [`Maybe`](crate::Maybe) and [`Outcome`](crate::Outcome) implement all three,
//! which lets generic code be written once for both.
//!
//! # Examples
//!
//! ```rust
//! use tsur::{Maybe, Outcome};
//! use tsur::typeclass::{Functor, Monad};
//!
//! fn increment<M: Functor<Inner = i32>>(container: M) -> M::WithType<i32> {
//!     container.fmap(|n| n + 1)
//! }
//!
//! assert_eq!(increment(Maybe::Some(1)), Maybe::Some(2));
//! assert_eq!(increment(Outcome::<i32, String>::Ok(1)), Outcome::Ok(2));
//! assert_eq!(Maybe::<()>::pure(3), Maybe::Some(3));
//! ```

mod functor;
mod higher;
mod monad;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
