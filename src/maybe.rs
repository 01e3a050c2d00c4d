//! Maybe type - an immutable optional value.
//!
//! `Maybe<T>` is either `Some(T)` and holds a value, or `None` and does not.
//! The variant is the enum discriminant, so any payload (including `0`, `""`,
//! `false` or another `Maybe`) is a legitimate `Some` value.
//!
//! `Maybe::None` is a unit variant: every `None` of a given type is the same
//! value and compares the same as every other `None`.
//!
//! # Examples
//!
//! ```rust
//! use tsur::{Maybe, Outcome};
//!
//! let port = Maybe::Some("8080")
//!     .map(str::parse::<u16>)
//!     .and_then(|parsed| Maybe::from(parsed.ok()))
//!     .filter(|port| *port > 1024);
//! assert_eq!(port, Maybe::Some(8080));
//!
//! let missing: Maybe<u16> = Maybe::None;
//! assert_eq!(missing.ok_or("no port"), Outcome::Err("no port"));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::UnwrapError;
use crate::outcome::{IntoOutcome, Outcome};
use crate::same::SameValue;

const UNWRAP_NONE_MESSAGE: &str = "called `Maybe::unwrap()` on a `None` value";

/// An immutable optional value.
///
/// # Examples
///
/// ```rust
/// use tsur::Maybe;
///
/// let zero = Maybe::Some(0);
/// assert!(zero.is_some());
///
/// let nothing: Maybe<i32> = Maybe::None;
/// assert_eq!(nothing.xor(zero), Maybe::Some(0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Maybe<T> {
    /// No value.
    None,
    /// A value of type `T`.
    Some(T),
}

/// Conversion into a `Maybe`, used by [`Maybe::flatten`] and [`Outcome::transpose`].
///
/// A `Maybe<T>` converts into itself; every plain payload wraps as `Some`.
pub trait IntoMaybe {
    /// The item type of the resulting `Maybe`.
    type Item;

    /// Converts `self` into a `Maybe`.
    fn into_maybe(self) -> Maybe<Self::Item>;
}

impl<T> IntoMaybe for Maybe<T> {
    type Item = T;

    #[inline]
    fn into_maybe(self) -> Self {
        self
    }
}

/// Truthiness, as used by [`Maybe::from_truthy`].
///
/// Zero numbers, `NaN`, empty strings, `false`, `()` and `Option::None` are falsy.
pub trait Truthy {
    /// Returns `true` if the value is truthy.
    fn is_truthy(&self) -> bool;
}

macro_rules! truthy_integers {
    ($($integer:ty),*) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

truthy_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! truthy_floats {
    ($($float:ty),*) => {
        $(
            impl Truthy for $float {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !self.is_nan() && *self != 0.0
                }
            }
        )*
    };
}

truthy_floats!(f32, f64);

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T> Maybe<T> {
    /// The empty value.
    pub const NONE: Self = Self::None;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` if it is truthy, otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// assert_eq!(Maybe::from_truthy("name"), Maybe::Some("name"));
    /// assert_eq!(Maybe::from_truthy(""), Maybe::None);
    /// assert_eq!(Maybe::from_truthy(0), Maybe::None);
    /// ```
    #[inline]
    pub fn from_truthy(value: T) -> Self
    where
        T: Truthy,
    {
        if value.is_truthy() {
            Self::Some(value)
        } else {
            Self::None
        }
    }

    /// Wraps `source` if it satisfies `predicate`, otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// assert_eq!(Maybe::from_predicate(4, |n| n % 2 == 0), Maybe::Some(4));
    /// assert_eq!(Maybe::from_predicate(3, |n| n % 2 == 0), Maybe::None);
    /// ```
    #[inline]
    pub fn from_predicate<P>(source: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&source) {
            Self::Some(source)
        } else {
            Self::None
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is a `Some` value that satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// assert!(Maybe::Some(2).is_some_and(|n| *n > 1));
    /// assert!(!Maybe::Some(0).is_some_and(|n| *n > 1));
    /// assert!(!Maybe::<i32>::None.is_some_and(|n| *n > 1));
    /// ```
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if both are `None`, or both are `Some` with the same payload.
    ///
    /// "Same" is identity as defined by [`SameValue`], not structural equality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// assert!(Maybe::<i32>::None.is_same(&Maybe::None));
    /// assert!(Maybe::Some(f64::NAN).is_same(&Maybe::Some(f64::NAN)));
    ///
    /// let list = Maybe::Some(vec![1, 2]);
    /// assert!(list.is_same(&list));
    /// assert!(!list.is_same(&list.clone()));
    /// ```
    pub fn is_same(&self, other: &Self) -> bool
    where
        T: SameValue,
    {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => left.same_value(right),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns an iterator over the possibly contained value.
    ///
    /// Each call returns a fresh iterator yielding zero or one item.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into_option(),
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `None` if `self` is `None`, otherwise returns `other`.
    ///
    /// `other` is evaluated eagerly; use [`Maybe::and_then`] to defer it.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Returns `None` if `self` is `None`, otherwise calls `function` with the
    /// value and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// let half = |n: i32| if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None };
    /// assert_eq!(Maybe::Some(8).and_then(half).and_then(half), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(6).and_then(half).and_then(half), Maybe::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns `self` if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if it holds a value, otherwise calls `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Returns the one `Some` if exactly one of `self` and `other` is `Some`,
    /// otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).xor(Maybe::None), Maybe::Some(1));
    /// assert_eq!(Maybe::None.xor(Maybe::Some(2)), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(1).xor(Maybe::Some(2)), Maybe::None);
    /// assert_eq!(Maybe::<i32>::None.xor(Maybe::None), Maybe::None);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Zipping
    // =========================================================================

    /// Returns `Some((a, b))` if `self` is `Some(a)` and `other` is `Some(b)`,
    /// otherwise `None`.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Returns `Some(function(a, b))` if `self` is `Some(a)` and `other` is
    /// `Some(b)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// assert_eq!(Maybe::Some(2).zip_with(Maybe::Some(3), |a, b| a * b), Maybe::Some(6));
    /// assert_eq!(Maybe::Some(2).zip_with(Maybe::<i32>::None, |a, b| a * b), Maybe::None);
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, function: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some(function(left, right)),
            _ => Maybe::None,
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Returns `self` if it holds a value satisfying `predicate`, otherwise `None`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self {
            if predicate(&value) {
                return Self::Some(value);
            }
        }
        Self::None
    }

    /// Maps `Maybe<T>` to `Maybe<U>` by applying `function` to a contained value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Collapses one level of nesting.
    ///
    /// `Some(Some(v))` becomes `Some(v)` and `Some(None)` becomes `None`. A plain
    /// payload passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// assert_eq!(Maybe::Some(Maybe::Some(1)).flatten(), Maybe::Some(1));
    /// assert_eq!(Maybe::Some(Maybe::<i32>::None).flatten(), Maybe::None);
    /// assert_eq!(Maybe::Some(1).flatten(), Maybe::Some(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T::Item>
    where
        T: IntoMaybe,
    {
        match self {
            Self::Some(value) => value.into_maybe(),
            Self::None => Maybe::None,
        }
    }

    /// Transposes a `Maybe` of an `Outcome` into an `Outcome` of a `Maybe`.
    ///
    /// `None` maps to `Ok(None)`, `Some(Ok(v))` to `Ok(Some(v))` and
    /// `Some(Err(e))` to `Err(e)`. A plain payload `v` maps to `Ok(Some(v))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::{Maybe, Outcome};
    ///
    /// let found: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Ok(5));
    /// assert_eq!(found.transpose(), Outcome::Ok(Maybe::Some(5)));
    ///
    /// let failed: Maybe<Outcome<i32, String>> = Maybe::Some(Outcome::Err("bad".into()));
    /// assert_eq!(failed.transpose(), Outcome::Err("bad".to_string()));
    ///
    /// let missing: Maybe<Outcome<i32, String>> = Maybe::None;
    /// assert_eq!(missing.transpose(), Outcome::Ok(Maybe::None));
    /// ```
    pub fn transpose<E>(self) -> Outcome<Maybe<T::Value>, E>
    where
        T: IntoOutcome<E>,
    {
        match self {
            Self::Some(value) => value.into_outcome().map(Maybe::Some),
            Self::None => Outcome::Ok(Maybe::None),
        }
    }

    /// Converts into an `Outcome`, mapping `None` to `Err(error)`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Converts into an `Outcome`, mapping `None` to `Err(function())`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(function()),
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Maybe::unwrap()` on a `None` value`` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect(UNWRAP_NONE_MESSAGE)
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use tsur::Maybe;
    ///
    /// let user: Maybe<&str> = Maybe::None;
    /// user.expect("user must be logged in");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the contained value, or the error `unwrap` would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is `None`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::new(UNWRAP_NONE_MESSAGE)),
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Eliminates the `Maybe` by calling exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Maybe;
    ///
    /// let greet = |name: Maybe<&str>| name.fold(|name| format!("hi {name}"), || "hi".to_string());
    /// assert_eq!(greet(Maybe::Some("ann")), "hi ann");
    /// assert_eq!(greet(Maybe::None), "hi");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_some: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }
}

impl<A, B> Maybe<(A, B)> {
    /// Splits a `Maybe` of a pair into a pair of `Maybe`s.
    ///
    /// `Some((a, b))` becomes `(Some(a), Some(b))`, `None` becomes `(None, None)`.
    #[inline]
    pub fn unzip(self) -> (Maybe<A>, Maybe<B>) {
        match self {
            Self::Some((left, right)) => (Maybe::Some(left), Maybe::Some(right)),
            Self::None => (Maybe::None, Maybe::None),
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over a [`Maybe`], yielding zero or one item.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Maybe`], yielding zero or one item.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn falsy_payloads_are_still_some() {
        assert!(Maybe::Some(0).is_some());
        assert!(Maybe::Some(false).is_some());
        assert!(Maybe::Some("").is_some());
        assert!(Maybe::Some(Maybe::<i32>::None).is_some());
    }

    #[rstest]
    fn none_constant_is_none() {
        assert!(Maybe::<String>::NONE.is_none());
        assert_eq!(Maybe::<String>::default(), Maybe::NONE);
    }

    #[rstest]
    #[case(Maybe::Some(1), Maybe::Some(2), Maybe::None)]
    #[case(Maybe::Some(1), Maybe::None, Maybe::Some(1))]
    #[case(Maybe::None, Maybe::Some(2), Maybe::Some(2))]
    #[case(Maybe::None, Maybe::None, Maybe::None)]
    fn xor_truth_table(
        #[case] left: Maybe<i32>,
        #[case] right: Maybe<i32>,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(left.xor(right), expected);
    }

    #[rstest]
    fn iterator_is_fresh_per_call() {
        let value = Maybe::Some(3);
        assert_eq!(value.iter().count(), 1);
        assert_eq!(value.iter().copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(Maybe::<i32>::None.iter().count(), 0);
    }

    #[rstest]
    fn option_conversion_roundtrip() {
        let maybe: Maybe<i32> = Some(4).into();
        assert_eq!(maybe, Maybe::Some(4));
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(4));
    }
}
