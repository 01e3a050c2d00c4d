//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Maybe<_>` as a type constructor directly.
//! [`TypeConstructor`] names the applied type (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`), which is enough to
//! state [`Functor`](super::Functor) and [`Monad`](super::Monad) once for both
//! containers.
//!
//! # Example
//!
//! ```rust
//! use tsur::Maybe;
//! use tsur::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! assert_eq!(empty_like(&Maybe::Some(42)), Maybe::None);
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type constructor applied to `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Outcome<T, E> {
    type Inner = T;
    type WithType<B> = Outcome<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn outcome_keeps_error_type_when_rebuilt() {
        fn rebuilt<T: TypeConstructor>() -> std::marker::PhantomData<T::WithType<String>> {
            std::marker::PhantomData
        }
        let _: std::marker::PhantomData<Outcome<String, u8>> = rebuilt::<Outcome<i32, u8>>();
    }
}
