//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! m.flat_map(pure) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Functors that can lift a value and chain computations returning the same
/// container.
///
/// # Examples
///
/// ```rust
/// use tsur::Outcome;
/// use tsur::typeclass::Monad;
///
/// let halved: Outcome<i32, &str> = Outcome::<i32, &str>::pure(10)
///     .flat_map(|n| if n % 2 == 0 { Outcome::Ok(n / 2) } else { Outcome::Err("odd") });
/// assert_eq!(halved, Outcome::Ok(5));
/// ```
pub trait Monad: Functor {
    /// Lifts a value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to the contained value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// A failed `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.and_then(function)
    }
}

impl<T, E: Clone> Monad for Outcome<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, E> {
        Outcome::Ok(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B, E>
    where
        F: FnOnce(T) -> Outcome<B, E>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn then_propagates_none() {
        assert_eq!(Maybe::<i32>::None.then(Maybe::Some("next")), Maybe::None);
        assert_eq!(Maybe::Some(1).then(Maybe::Some("next")), Maybe::Some("next"));
    }

    #[rstest]
    fn then_propagates_err() {
        let failed: Outcome<i32, &str> = Outcome::Err("first");
        assert_eq!(failed.then(Outcome::Ok(2)), Outcome::Err("first"));
    }
}
