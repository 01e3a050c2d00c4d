//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws are checked by property tests for [`Maybe`] and [`Outcome`].

use super::higher::TypeConstructor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Types whose contents can be transformed without changing their shape.
///
/// # Examples
///
/// ```rust
/// use tsur::Maybe;
/// use tsur::typeclass::Functor;
///
/// let length = Maybe::Some("four").fmap(str::len);
/// assert_eq!(length, Maybe::Some(4));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the contained value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T, E: Clone> Functor for Outcome<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_err(Clone::clone)
    }
}
