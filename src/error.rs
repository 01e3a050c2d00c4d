//! Error types for container extraction and captured failures.
//!
//! - [`UnwrapError`]: returned by the `try_unwrap` family when the container
//!   holds the other variant. Its message is exactly the one `unwrap` panics with.
//! - [`Panic`]: a panic captured by [`Outcome::attempt`](crate::Outcome::attempt).
//! - [`Failure`]: how an asynchronous attempt can fail, either by resolving to
//!   an error or by panicking.

use std::any::Any;
use std::fmt;

/// Represents an extraction from the wrong container variant.
///
/// # Examples
///
/// ```rust
/// use tsur::Maybe;
///
/// let error = Maybe::<i32>::None.try_unwrap().unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "called `Maybe::unwrap()` on a `None` value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    message: String,
}

impl UnwrapError {
    /// Creates an error carrying the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message this error was created with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for UnwrapError {}

/// A captured panic payload.
///
/// The payload is kept as-is so that it can be re-raised with
/// [`std::panic::resume_unwind`].
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    /// Wraps a payload obtained from `catch_unwind`.
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message if the payload is a string.
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Returns the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }
}

impl fmt::Debug for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Panic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panicked: {message}"),
            None => formatter.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

/// How an asynchronous attempt failed.
#[derive(Debug)]
pub enum Failure<E> {
    /// The computation resolved to an error.
    Rejected(E),
    /// The computation panicked, either when it was created or while it was polled.
    Panicked(Panic),
}

impl<E> Failure<E> {
    /// Returns `true` if the computation resolved to an error.
    #[inline]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns `true` if the computation panicked.
    #[inline]
    pub const fn is_panicked(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Returns the rejection error, discarding a panic.
    #[inline]
    pub fn rejected(self) -> Option<E> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for Failure<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(error) => write!(formatter, "rejected: {error}"),
            Self::Panicked(panic) => fmt::Display::fmt(panic, formatter),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Failure<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Panicked(panic) => Some(panic),
        }
    }
}
