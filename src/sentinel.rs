//! Container tags and the plain payload types.
//!
//! Every container in this crate knows its own variant through its enum
//! discriminant; nothing is ever inferred by comparing a payload against a
//! marker value. What generic code sometimes still needs to know is whether a
//! *payload* is itself a container, e.g. when [`Maybe::flatten`] collapses
//! `Maybe<Maybe<T>>` but leaves `Maybe<i32>` alone. This module provides that
//! answer at the type level:
//!
//! - [`Tag`]: the two container kinds.
//! - [`Tagged`]: reports the [`Tag`] of a type, `None` for plain payloads.
//! - [`plain_payload!`](crate::plain_payload): registers plain payloads. It also
//!   wires [`IntoMaybe`] and [`IntoOutcome`] so that a non-container inner value
//!   passes through `flatten` and `transpose` unchanged. The std scalars,
//!   strings, references, arrays, collections, smart pointers and tuples are
//!   registered here; other crates register their own types the same way.
//!
//! # Examples
//!
//! ```rust
//! use tsur::{Maybe, Outcome, is_maybe, is_outcome};
//!
//! assert!(is_maybe(&Maybe::Some(1)));
//! assert!(!is_maybe(&1));
//! assert!(is_outcome(&Outcome::<i32, String>::Ok(1)));
//! assert!(!is_outcome(&"text"));
//! ```

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::maybe::{IntoMaybe, Maybe};
use crate::outcome::{IntoOutcome, Outcome};

/// The kind of container a [`Tagged`] type is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A [`Maybe`] value.
    Maybe,
    /// An [`Outcome`] value.
    Outcome,
}

/// Reports whether a type is one of this crate's containers.
///
/// The default `TAG` is `None`, which marks a plain payload.
pub trait Tagged {
    /// The container tag of this type.
    const TAG: Option<Tag> = None;

    /// Returns the container tag of this value's type.
    #[inline]
    fn tag(&self) -> Option<Tag> {
        Self::TAG
    }
}

impl<T> Tagged for Maybe<T> {
    const TAG: Option<Tag> = Some(Tag::Maybe);
}

impl<T, E> Tagged for Outcome<T, E> {
    const TAG: Option<Tag> = Some(Tag::Outcome);
}

/// Returns `true` if the value is a [`Maybe`].
#[inline]
pub fn is_maybe<V: Tagged + ?Sized>(_value: &V) -> bool {
    matches!(V::TAG, Some(Tag::Maybe))
}

/// Returns `true` if the value is an [`Outcome`].
#[inline]
pub fn is_outcome<V: Tagged + ?Sized>(_value: &V) -> bool {
    matches!(V::TAG, Some(Tag::Outcome))
}

/// Predicate that accepts everything.
///
/// Used by [`crate::array::first`] and [`crate::array::last`].
#[inline]
pub const fn always_true<T: ?Sized>(_: &T) -> bool {
    true
}

// =============================================================================
// Plain Payloads
// =============================================================================

/// Registers types as plain payloads.
///
/// A plain payload is any type that is not one of this crate's containers. The
/// macro implements [`Tagged`] (untagged), [`IntoMaybe`] (wrap as `Some`) and
/// [`IntoOutcome`] (wrap as `Ok`) for each listed type, which lets
/// [`Maybe::flatten`], [`Maybe::transpose`], [`Outcome::flatten`],
/// [`Outcome::transpose`], [`is_maybe`] and [`is_outcome`] accept it.
///
/// Each entry is `impl[<generic parameters>] Type;`. Generic parameters are
/// written as in an `impl<...>` header and every one of them, including the
/// last, is followed by a comma.
///
/// # Examples
///
/// ```rust
/// use tsur::{Maybe, Outcome, is_maybe};
///
/// #[derive(Debug, PartialEq)]
/// struct Celsius(f64);
///
/// #[derive(Debug, PartialEq)]
/// struct Reading<T>(T);
///
/// tsur::plain_payload! {
///     impl[] Celsius;
///     impl[T,] Reading<T>;
/// }
///
/// assert_eq!(Maybe::Some(Celsius(21.5)).flatten(), Maybe::Some(Celsius(21.5)));
/// let transposed: Outcome<Maybe<Reading<u8>>, String> = Maybe::Some(Reading(3)).transpose();
/// assert_eq!(transposed, Outcome::Ok(Maybe::Some(Reading(3))));
/// assert!(!is_maybe(&Celsius(0.0)));
/// ```
#[macro_export]
macro_rules! plain_payload {
    ($(impl[$($generics:tt)*] $payload:ty;)*) => {
        $(
            impl<$($generics)*> $crate::Tagged for $payload {}

            impl<$($generics)*> $crate::IntoMaybe for $payload {
                type Item = Self;

                #[inline]
                fn into_maybe(self) -> $crate::Maybe<Self> {
                    $crate::Maybe::Some(self)
                }
            }

            impl<$($generics)* PayloadError> $crate::IntoOutcome<PayloadError> for $payload {
                type Value = Self;

                #[inline]
                fn into_outcome(self) -> $crate::Outcome<Self, PayloadError> {
                    $crate::Outcome::Ok(self)
                }
            }
        )*
    };
}

plain_payload! {
    impl[] ();
    impl[] bool;
    impl[] char;
    impl[] i8;
    impl[] i16;
    impl[] i32;
    impl[] i64;
    impl[] i128;
    impl[] isize;
    impl[] u8;
    impl[] u16;
    impl[] u32;
    impl[] u64;
    impl[] u128;
    impl[] usize;
    impl[] f32;
    impl[] f64;
    impl[] String;
    impl['a, T: ?Sized,] &'a T;
    impl[T, const N: usize,] [T; N];
    impl[T,] Vec<T>;
    impl[T,] VecDeque<T>;
    impl[T,] LinkedList<T>;
    impl[T,] BinaryHeap<T>;
    impl[K, V, S,] HashMap<K, V, S>;
    impl[T, S,] HashSet<T, S>;
    impl[K, V,] BTreeMap<K, V>;
    impl[T,] BTreeSet<T>;
    impl[T: ?Sized,] Box<T>;
    impl[T: ?Sized,] Rc<T>;
    impl[T: ?Sized,] Arc<T>;
    impl[T,] Option<T>;
    impl[T, U,] Result<T, U>;
    impl[A,] (A,);
    impl[A, B,] (A, B);
    impl[A, B, C,] (A, B, C);
    impl[A, B, C, D,] (A, B, C, D);
}

// A Maybe is a plain payload from an Outcome's point of view and vice versa.

impl<T, Failure> IntoOutcome<Failure> for Maybe<T> {
    type Value = Self;

    #[inline]
    fn into_outcome(self) -> Outcome<Self, Failure> {
        Outcome::Ok(self)
    }
}

impl<T, E> IntoMaybe for Outcome<T, E> {
    type Item = Self;

    #[inline]
    fn into_maybe(self) -> Maybe<Self> {
        Maybe::Some(self)
    }
}
