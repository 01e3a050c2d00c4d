//! Identity comparison for container payloads.
//!
//! [`SameValue`] answers "is this the very same value?", which is stricter
//! than `PartialEq`. It backs [`Maybe::is_same`](crate::Maybe::is_same),
//! [`Outcome::is_same`](crate::Outcome::is_same) and
//! [`Outcome::is_same_err`](crate::Outcome::is_same_err).
//!
//! - Scalars and strings compare by value.
//! - Floats compare bitwise, except that every `NaN` is the same as every
//!   other `NaN`. `0.0` and `-0.0` are different values.
//! - References compare what they point to, so `&str` compares by value.
//! - Shared pointers compare by address.
//! - Owned heap values (`Vec`, `Box`) compare by the address of the compared
//!   slot: a value is the same as itself, but two equal-content values are not.
//! - Tuples, `Option`, `Maybe` and `Outcome` compare component-wise.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//! use tsur::SameValue;
//!
//! assert!(f64::NAN.same_value(&f64::NAN));
//! assert!(!0.0_f64.same_value(&-0.0));
//!
//! let shared = Rc::new(vec![1, 2]);
//! assert!(shared.same_value(&Rc::clone(&shared)));
//! assert!(!shared.same_value(&Rc::new(vec![1, 2])));
//! ```

use std::ptr;
use std::rc::Rc;
use std::sync::Arc;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Identity comparison.
///
/// Implementations must be reflexive for every value that compares equal to
/// itself under this relation's own rules (including `NaN`).
pub trait SameValue {
    /// Returns `true` if `self` and `other` are the same value.
    fn same_value(&self, other: &Self) -> bool;
}

macro_rules! same_by_equality {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl SameValue for $scalar {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_by_equality!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    str,
    String,
);

macro_rules! same_by_bits {
    ($($float:ty),*) => {
        $(
            impl SameValue for $float {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
                }
            }
        )*
    };
}

same_by_bits!(f32, f64);

// A reference is the value it points to: `&str` compares text, `&Vec<T>`
// compares the address of the referenced vector.
impl<T: SameValue + ?Sized> SameValue for &T {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }
}

impl<T: ?Sized> SameValue for Rc<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameValue for Arc<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T> SameValue for Vec<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl<T: ?Sized> SameValue for Box<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.same_value(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<A: SameValue> SameValue for (A,) {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0)
    }
}

impl<A: SameValue, B: SameValue> SameValue for (A, B) {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1)
    }
}

impl<A: SameValue, B: SameValue, C: SameValue> SameValue for (A, B, C) {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1) && self.2.same_value(&other.2)
    }
}

impl<T: SameValue> SameValue for Maybe<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        self.is_same(other)
    }
}

// Unlike `Outcome::is_same`, a nested outcome compares both sides.
impl<T: SameValue, E: SameValue> SameValue for Outcome<T, E> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Ok(left), Self::Ok(right)) => left.same_value(right),
            (Self::Err(left), Self::Err(right)) => left.same_value(right),
            _ => false,
        }
    }
}
