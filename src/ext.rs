//! Method syntax for the slice helpers.
//!
//! [`SliceExt`] forwards to the free functions in [`crate::array`]. Slices
//! already have inherent `first` and `last` methods, so the predicate-less
//! lookups are named [`SliceExt::first_maybe`] and [`SliceExt::last_maybe`].
//!
//! # Examples
//!
//! ```rust
//! use tsur::Maybe;
//! use tsur::ext::SliceExt;
//!
//! let scores = vec![12, 40, 7, 55];
//! assert_eq!(scores.first_index(|score, _, _| *score > 30), Maybe::Some(1));
//! assert_eq!(scores.last_where(|score, _, _| *score > 30), Maybe::Some(&55));
//! assert_eq!(scores.first_maybe(), Maybe::Some(&12));
//! ```

use crate::array;
use crate::maybe::Maybe;

/// Slice helpers as methods.
pub trait SliceExt<T> {
    /// See [`array::filter_map`].
    fn filter_map<U, F>(&self, function: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>;

    /// See [`array::map_while`].
    fn map_while<U, F>(&self, function: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>;

    /// See [`array::reduce_while`].
    fn reduce_while<A, F>(&self, function: F, initial: A) -> A
    where
        F: FnMut(&A, &T, usize, &[T]) -> Maybe<A>;

    /// See [`array::first_index`].
    fn first_index<P>(&self, predicate: P) -> Maybe<usize>
    where
        P: FnMut(&T, usize, &[T]) -> bool;

    /// See [`array::last_index`].
    fn last_index<P>(&self, predicate: P) -> Maybe<usize>
    where
        P: FnMut(&T, usize, &[T]) -> bool;

    /// See [`array::first`].
    fn first_maybe(&self) -> Maybe<&T>;

    /// See [`array::last`].
    fn last_maybe(&self) -> Maybe<&T>;

    /// See [`array::first_where`].
    fn first_where<P>(&self, predicate: P) -> Maybe<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool;

    /// See [`array::last_where`].
    fn last_where<P>(&self, predicate: P) -> Maybe<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool;

    /// See [`array::first_map`].
    fn first_map<U, F>(&self, function: F) -> Maybe<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>;

    /// See [`array::last_map`].
    fn last_map<U, F>(&self, function: F) -> Maybe<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn filter_map<U, F>(&self, function: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>,
    {
        array::filter_map(self, function)
    }

    #[inline]
    fn map_while<U, F>(&self, function: F) -> Vec<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>,
    {
        array::map_while(self, function)
    }

    #[inline]
    fn reduce_while<A, F>(&self, function: F, initial: A) -> A
    where
        F: FnMut(&A, &T, usize, &[T]) -> Maybe<A>,
    {
        array::reduce_while(self, function, initial)
    }

    #[inline]
    fn first_index<P>(&self, predicate: P) -> Maybe<usize>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        array::first_index(self, predicate)
    }

    #[inline]
    fn last_index<P>(&self, predicate: P) -> Maybe<usize>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        array::last_index(self, predicate)
    }

    #[inline]
    fn first_maybe(&self) -> Maybe<&T> {
        array::first(self)
    }

    #[inline]
    fn last_maybe(&self) -> Maybe<&T> {
        array::last(self)
    }

    #[inline]
    fn first_where<P>(&self, predicate: P) -> Maybe<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        array::first_where(self, predicate)
    }

    #[inline]
    fn last_where<P>(&self, predicate: P) -> Maybe<&T>
    where
        P: FnMut(&T, usize, &[T]) -> bool,
    {
        array::last_where(self, predicate)
    }

    #[inline]
    fn first_map<U, F>(&self, function: F) -> Maybe<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>,
    {
        array::first_map(self, function)
    }

    #[inline]
    fn last_map<U, F>(&self, function: F) -> Maybe<U>
    where
        F: FnMut(&T, usize, &[T]) -> Maybe<U>,
    {
        array::last_map(self, function)
    }
}
