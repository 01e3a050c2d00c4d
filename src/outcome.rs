//! Outcome type - the immutable result of a computation.
//!
//! `Outcome<T, E>` is either `Ok(T)` for success or `Err(E)` for failure.
//! The variant is stored as the enum discriminant when the value is built and
//! never re-derived from the payload, so an `Err` holding any value at all
//! (including one equal to some `Ok` payload) is always an `Err`.
//!
//! # Examples
//!
//! ```rust
//! use tsur::{Maybe, Outcome};
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("20").and_then(|a| parse("22").map(|b| a + b));
//! assert_eq!(total, Outcome::Ok(42));
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.is_err());
//! assert_eq!(failed.ok(), Maybe::None);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::{Panic, UnwrapError};
use crate::maybe::{IntoMaybe, Maybe};
use crate::same::SameValue;

/// The immutable result of a computation: `Ok(T)` or `Err(E)`.
///
/// # Examples
///
/// ```rust
/// use tsur::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Ok(2);
/// assert_eq!(success.map(|n| n * 21), Outcome::Ok(42));
///
/// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
/// assert_eq!(failure.map_err(|e| e.len()), Outcome::Err(4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Outcome<T, E> {
    /// A success value.
    Ok(T),
    /// A failure value.
    Err(E),
}

/// Conversion into an `Outcome` with error type `E`, used by
/// [`Outcome::flatten`] and [`Maybe::transpose`].
///
/// An `Outcome<T, E>` converts into itself; every plain payload wraps as `Ok`.
pub trait IntoOutcome<E> {
    /// The success type of the resulting `Outcome`.
    type Value;

    /// Converts `self` into an `Outcome`.
    fn into_outcome(self) -> Outcome<Self::Value, E>;
}

impl<T, E> IntoOutcome<E> for Outcome<T, E> {
    type Value = T;

    #[inline]
    fn into_outcome(self) -> Self {
        self
    }
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Converts a standard library `Result`.
    ///
    /// The error-ness of a value is carried by its type: `Err(e)` becomes
    /// `Outcome::Err(e)` and everything else `Outcome::Ok`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is an `Ok` value that satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is an `Err` value that satisfies `predicate`.
    #[inline]
    pub fn is_err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Compares the `Ok` side of two outcomes by identity.
    ///
    /// Two `Ok` values are the same if their payloads are the same
    /// [`SameValue`]. Two `Err` values have no `Ok` payload on either side and
    /// are the same; an `Ok` is never the same as an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Outcome;
    ///
    /// let one: Outcome<i32, &str> = Outcome::Ok(1);
    /// assert!(one.is_same(&Outcome::Ok(1)));
    /// assert!(!one.is_same(&Outcome::Err("1")));
    /// assert!(Outcome::<i32, &str>::Err("a").is_same(&Outcome::Err("b")));
    /// ```
    pub fn is_same(&self, other: &Self) -> bool
    where
        T: SameValue,
    {
        match (self, other) {
            (Self::Ok(left), Self::Ok(right)) => left.same_value(right),
            (Self::Err(_), Self::Err(_)) => true,
            _ => false,
        }
    }

    /// Compares the `Err` side of two outcomes by identity.
    ///
    /// The mirror image of [`Outcome::is_same`].
    pub fn is_same_err(&self, other: &Self) -> bool
    where
        E: SameValue,
    {
        match (self, other) {
            (Self::Err(left), Self::Err(right)) => left.same_value(right),
            (Self::Ok(_), Self::Ok(_)) => true,
            _ => false,
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns an iterator over the `Ok` value, empty for `Err`.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().ok().into_option(),
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if `self` is `Ok`, otherwise the `Err` of `self`.
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Calls `function` with the `Ok` value, or passes the `Err` through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Outcome;
    ///
    /// let checked = |n: u32| if n < 10 { Outcome::Ok(n) } else { Outcome::Err("too big") };
    /// assert_eq!(Outcome::Ok(3).and_then(checked), Outcome::Ok(3));
    /// assert_eq!(Outcome::Ok(30).and_then(checked), Outcome::Err("too big"));
    /// assert_eq!(Outcome::Err("earlier").and_then(checked), Outcome::Err("earlier"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns `self` if it is `Ok`, otherwise calls `function` with the error.
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Transforms the `Ok` value, leaving an `Err` untouched.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the `Err` value, leaving an `Ok` untouched.
    #[inline]
    pub fn map_err<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Collapses a nested `Outcome` on the `Ok` side.
    ///
    /// `Ok(Ok(v))` becomes `Ok(v)`, `Ok(Err(e))` becomes `Err(e)` and `Err(e)`
    /// stays `Err(e)`. A plain `Ok` payload passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Err("inner"));
    /// assert_eq!(nested.flatten(), Outcome::Err("inner"));
    ///
    /// let plain: Outcome<i32, &str> = Outcome::Ok(1);
    /// assert_eq!(plain.flatten(), Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T::Value, E>
    where
        T: IntoOutcome<E>,
    {
        match self {
            Self::Ok(value) => value.into_outcome(),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transposes an `Outcome` of a `Maybe` into a `Maybe` of an `Outcome`.
    ///
    /// `Ok(Some(v))` maps to `Some(Ok(v))`, `Ok(None)` to `None` and `Err(e)`
    /// to `Some(Err(e))`. A plain payload `v` maps to `Some(Ok(v))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::{Maybe, Outcome};
    ///
    /// let found: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::Some(5));
    /// assert_eq!(found.transpose(), Maybe::Some(Outcome::Ok(5)));
    ///
    /// let empty: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::None);
    /// assert_eq!(empty.transpose(), Maybe::None);
    ///
    /// let failed: Outcome<Maybe<i32>, &str> = Outcome::Err("bad");
    /// assert_eq!(failed.transpose(), Maybe::Some(Outcome::Err("bad")));
    /// ```
    pub fn transpose(self) -> Maybe<Outcome<T::Item, E>>
    where
        T: IntoMaybe,
    {
        match self {
            Self::Ok(value) => value.into_maybe().map(Outcome::Ok),
            Self::Err(error) => Maybe::Some(Outcome::Err(error)),
        }
    }

    /// Converts into a `Maybe` of the `Ok` value, discarding any error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Converts into a `Maybe` of the `Err` value, discarding any success.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Outcome::unwrap()` on an `Err` value: {error:?}``
    /// if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{}", unwrap_message(&error)),
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{message}"),
        }
    }

    /// Returns the `Ok` value, or the error `unwrap` would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is `Err`.
    pub fn try_unwrap(self) -> Result<T, UnwrapError>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::new(unwrap_message(&error))),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with ``called `Outcome::unwrap_err()` on an `Ok` value: {value:?}``
    /// if this is `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use tsur::Outcome;
    ///
    /// Outcome::<i32, &str>::Ok(1).unwrap_err();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("{}", unwrap_err_message(&value)),
            Self::Err(error) => error,
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_err(self, message: &str) -> E {
        match self {
            Self::Ok(_) => panic!("{message}"),
            Self::Err(error) => error,
        }
    }

    /// Returns the `Err` value, or the error `unwrap_err` would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrapError`] if this is `Ok`.
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError>
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => Err(UnwrapError::new(unwrap_err_message(&value))),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the `Ok` value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the `Ok` value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Returns the `Ok` value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    /// Returns the `Err` value or `default`.
    #[inline]
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Self::Ok(_) => default,
            Self::Err(error) => error,
        }
    }

    /// Returns the `Err` value or computes one from the `Ok` value.
    #[inline]
    pub fn unwrap_err_or_else<F>(self, function: F) -> E
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => error,
        }
    }

    /// Eliminates the `Outcome` by calling exactly one of the two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Outcome;
    ///
    /// let describe = |outcome: Outcome<i32, &str>| {
    ///     outcome.fold(|n| format!("got {n}"), |e| format!("failed: {e}"))
    /// };
    /// assert_eq!(describe(Outcome::Ok(1)), "got 1");
    /// assert_eq!(describe(Outcome::Err("io")), "failed: io");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }
}

impl<T> Outcome<T, T> {
    /// `Ok(source)` if `source` satisfies `predicate`, otherwise `Err(source)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Outcome;
    ///
    /// assert_eq!(Outcome::from_predicate(42, |n| *n > 10), Outcome::Ok(42));
    /// assert_eq!(Outcome::from_predicate(4, |n| *n > 10), Outcome::Err(4));
    /// ```
    #[inline]
    pub fn from_predicate<P>(source: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&source) {
            Self::Ok(source)
        } else {
            Self::Err(source)
        }
    }
}

// =============================================================================
// Capturing Panics
// =============================================================================

impl<T> Outcome<T, Panic> {
    /// Runs `function`, capturing a panic as `Err`.
    ///
    /// Arguments are passed by capturing them in the closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Outcome;
    ///
    /// let divisor = 0;
    /// let outcome = Outcome::attempt(move || 10 / divisor);
    /// assert!(outcome.is_err());
    ///
    /// let outcome = Outcome::attempt(|| 10 / 2);
    /// assert_eq!(outcome.unwrap(), 5);
    /// ```
    pub fn attempt<F>(function: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Ok(value),
            Err(payload) => {
                let panic = Panic::new(payload);
                tracing::debug!(reason = panic.message(), "captured panic in Outcome::attempt");
                Self::Err(panic)
            }
        }
    }
}

#[cfg(feature = "async")]
impl<T, E> Outcome<T, crate::error::Failure<E>> {
    /// Runs the future produced by `function`, capturing both its error and any panic.
    ///
    /// Resolves to `Ok(v)` when the future yields `Ok(v)`,
    /// `Err(Failure::Rejected(e))` when it yields `Err(e)` and
    /// `Err(Failure::Panicked(_))` when creating or polling it panics. No
    /// timeout or cancellation is applied; build those into the future.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tsur::Outcome;
    ///
    /// # futures::executor::block_on(async {
    /// let outcome = Outcome::attempt_async(|| async { Ok::<_, String>(7) }).await;
    /// assert_eq!(outcome.ok(), tsur::Maybe::Some(7));
    ///
    /// let outcome = Outcome::attempt_async(|| async { Err::<i32, _>("down".to_string()) }).await;
    /// assert!(outcome.unwrap_err().is_rejected());
    /// # });
    /// ```
    pub async fn attempt_async<F, Fut>(function: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        use crate::error::Failure;
        use futures::FutureExt;

        let future = match catch_unwind(AssertUnwindSafe(function)) {
            Ok(future) => future,
            Err(payload) => return Self::Err(Failure::Panicked(captured(payload))),
        };

        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(Ok(value)) => Self::Ok(value),
            Ok(Err(error)) => {
                tracing::debug!("future rejected in Outcome::attempt_async");
                Self::Err(Failure::Rejected(error))
            }
            Err(payload) => Self::Err(Failure::Panicked(captured(payload))),
        }
    }
}

#[cfg(feature = "async")]
fn captured(payload: Box<dyn std::any::Any + Send + 'static>) -> Panic {
    let panic = Panic::new(payload);
    tracing::debug!(
        reason = panic.message(),
        "captured panic in Outcome::attempt_async"
    );
    panic
}

fn unwrap_message<E: fmt::Debug>(error: &E) -> String {
    format!("called `Outcome::unwrap()` on an `Err` value: {error:?}")
}

fn unwrap_err_message<T: fmt::Debug>(value: &T) -> String {
    format!("called `Outcome::unwrap_err()` on an `Ok` value: {value:?}")
}

// =============================================================================
// Display and Conversions
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Borrowing iterator over the `Ok` value of an [`Outcome`].
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

/// Owning iterator over the `Ok` value of an [`Outcome`].
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

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.ok().into_option(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
