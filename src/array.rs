//! Slice helpers driven by [`Maybe`]-returning callbacks.
//!
//! Every callback receives the item, its index and the whole slice, in that
//! order. The slice is only ever read, so the helpers can be called
//! concurrently on shared data.
//!
//! | Function | Visits | Returns |
//! |---|---|---|
//! | [`filter_map`] | every item | all `Some` results |
//! | [`map_while`] | up to the first `None` | the `Some` results before it |
//! | [`reduce_while`] | up to the first `None` | the last accumulator |
//! | [`first_map`] / [`last_map`] | up to the first hit | the first / last `Some` result |
//! | [`first_index`] / [`last_index`] | up to the first hit | the matching index |
//! | [`first_where`] / [`last_where`] | up to the first hit | the matching item |
//!
//! # Examples
//!
//! ```rust
//! use tsur::Maybe;
//! use tsur::array::{filter_map, map_while, reduce_while};
//!
//! let numbers = [1, 2, 3, 4, 5];
//!
//! let doubled_evens = filter_map(&numbers, |n, _, _| {
//!     if n % 2 == 0 { Maybe::Some(n * 2) } else { Maybe::None }
//! });
//! assert_eq!(doubled_evens, vec![4, 8]);
//!
//! let doubled_prefix = map_while(&numbers, |n, _, _| {
//!     if *n < 4 { Maybe::Some(n * 2) } else { Maybe::None }
//! });
//! assert_eq!(doubled_prefix, vec![2, 4, 6]);
//!
//! let prefix_sum = reduce_while(&numbers, |sum, n, _, _| {
//!     if *n < 4 { Maybe::Some(sum + n) } else { Maybe::None }
//! }, 0);
//! assert_eq!(prefix_sum, 6);
//! ```

use crate::maybe::Maybe;
use crate::sentinel::always_true;

/// Filters and maps in one pass, keeping every `Some` result in order.
///
/// Never short-circuits: every item is visited.
pub fn filter_map<T, U, F>(items: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> Maybe<U>,
{
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| function(item, index, items).into_option())
        .collect()
}

/// Maps items in order until the first `None`, which is not included.
pub fn map_while<T, U, F>(items: &[T], mut function: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> Maybe<U>,
{
    items
        .iter()
        .enumerate()
        .map_while(|(index, item)| function(item, index, items).into_option())
        .collect()
}

/// Left fold that stops at the first `None`.
///
/// The accumulator is lent to `function`; when it answers `None` the fold
/// stops and the accumulator from the previous step is returned.
///
/// # Examples
///
/// ```rust
/// use tsur::Maybe;
/// use tsur::array::reduce_while;
///
/// let words = ["alpha", "beta", "", "delta"];
/// let joined = reduce_while(&words, |acc: &String, word, _, _| {
///     Maybe::from_predicate(*word, |word| !word.is_empty()).map(|word| acc.clone() + word)
/// }, String::new());
/// assert_eq!(joined, "alphabeta");
/// ```
pub fn reduce_while<T, A, F>(items: &[T], mut function: F, initial: A) -> A
where
    F: FnMut(&A, &T, usize, &[T]) -> Maybe<A>,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        match function(&accumulator, item, index, items) {
            Maybe::Some(next) => accumulator = next,
            Maybe::None => break,
        }
    }
    accumulator
}

/// Returns the index of the first item satisfying `predicate`.
pub fn first_index<T, P>(items: &[T], mut predicate: P) -> Maybe<usize>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .find_map(|(index, item)| predicate(item, index, items).then_some(index))
        .into()
}

/// Returns the index of the last item satisfying `predicate`.
///
/// Items are tested from the back.
pub fn last_index<T, P>(items: &[T], mut predicate: P) -> Maybe<usize>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    items
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, item)| predicate(item, index, items).then_some(index))
        .into()
}

/// Returns the first item, or `None` for an empty slice.
#[inline]
pub fn first<T>(items: &[T]) -> Maybe<&T> {
    first_where(items, |item, _, _| always_true(item))
}

/// Returns the last item, or `None` for an empty slice.
#[inline]
pub fn last<T>(items: &[T]) -> Maybe<&T> {
    last_where(items, |item, _, _| always_true(item))
}

/// Returns the first item satisfying `predicate`.
pub fn first_where<T, P>(items: &[T], predicate: P) -> Maybe<&T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    first_index(items, predicate).map(|index| &items[index])
}

/// Returns the last item satisfying `predicate`.
pub fn last_where<T, P>(items: &[T], predicate: P) -> Maybe<&T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    last_index(items, predicate).map(|index| &items[index])
}

/// Returns the first `Some` produced by `function`, scanning forwards.
///
/// Equivalent to taking the first element of [`filter_map`], without visiting
/// the rest of the slice.
pub fn first_map<T, U, F>(items: &[T], mut function: F) -> Maybe<U>
where
    F: FnMut(&T, usize, &[T]) -> Maybe<U>,
{
    items
        .iter()
        .enumerate()
        .find_map(|(index, item)| function(item, index, items).into_option())
        .into()
}

/// Returns the last `Some` produced by `function`, scanning backwards.
///
/// Equivalent to taking the last element of [`filter_map`], without visiting
/// the front of the slice.
pub fn last_map<T, U, F>(items: &[T], mut function: F) -> Maybe<U>
where
    F: FnMut(&T, usize, &[T]) -> Maybe<U>,
{
    items
        .iter()
        .enumerate()
        .rev()
        .find_map(|(index, item)| function(item, index, items).into_option())
        .into()
}
