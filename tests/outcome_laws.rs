//! Property-based tests for Outcome laws.
//!
//! - **Functor**: identity and composition
//! - **Monad**: left identity, right identity and associativity
//! - **Bifunctor-style**: `map` and `map_err` commute

use proptest::prelude::*;
use tsur::{Maybe, Outcome};

fn outcome_of(
    value: impl Strategy<Value = i32>,
    error: impl Strategy<Value = String>,
) -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(value, error).prop_map(Outcome::from_result)
}

#[cfg(feature = "typeclass")]
mod typeclass_laws {
    use super::*;
    use tsur::typeclass::{Functor, Monad};

    fn checked_double(n: i32) -> Outcome<i32, String> {
        n.checked_mul(2)
            .map_or_else(|| Outcome::Err(format!("{n} overflows")), Outcome::Ok)
    }

    fn non_negative(n: i32) -> Outcome<i32, String> {
        Outcome::from_predicate(n, |n| *n >= 0).map_err(|n| format!("{n} is negative"))
    }

    proptest! {
        #[test]
        fn prop_outcome_identity_law(value in outcome_of(any::<i32>(), any::<String>())) {
            prop_assert_eq!(value.clone().fmap(|x| x), value);
        }

        #[test]
        fn prop_outcome_composition_law(value in outcome_of(any::<i32>(), any::<String>())) {
            let function1 = |n: i32| n.wrapping_add(1);
            let function2 = |n: i32| n.wrapping_mul(2);

            let left = value.clone().fmap(function1).fmap(function2);
            let right = value.fmap(|x| function2(function1(x)));

            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_outcome_left_identity_law(value in any::<i32>()) {
            prop_assert_eq!(
                Outcome::<i32, String>::pure(value).flat_map(checked_double),
                checked_double(value)
            );
        }

        #[test]
        fn prop_outcome_right_identity_law(value in outcome_of(any::<i32>(), any::<String>())) {
            prop_assert_eq!(value.clone().flat_map(Outcome::<i32, String>::pure), value);
        }

        #[test]
        fn prop_outcome_associativity_law(value in outcome_of(any::<i32>(), any::<String>())) {
            let left = value.clone().flat_map(checked_double).flat_map(non_negative);
            let right = value.flat_map(|x| checked_double(x).flat_map(non_negative));
            prop_assert_eq!(left, right);
        }
    }
}

proptest! {
    #[test]
    fn prop_map_and_map_err_commute(value in outcome_of(any::<i32>(), "[a-z]{0,8}")) {
        let left = value.clone().map(i64::from).map_err(|e| e.len());
        let right = value.map_err(|e| e.len()).map(i64::from);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_exactly_one_side_is_present(value in outcome_of(any::<i32>(), any::<String>())) {
        let ok = value.clone().ok();
        let err = value.err();
        prop_assert!(ok.is_some() != err.is_some());
    }

    #[test]
    fn prop_result_round_trip(value in prop::result::maybe_ok(any::<i32>(), any::<String>())) {
        prop_assert_eq!(Outcome::from(value.clone()).into_result(), value);
    }

    #[test]
    fn prop_unwrap_round_trips(value in any::<i32>(), error in any::<String>()) {
        prop_assert_eq!(Outcome::<i32, String>::Ok(value).unwrap(), value);
        prop_assert_eq!(Outcome::<i32, String>::Err(error.clone()).unwrap_err(), error);
    }

    #[test]
    fn prop_err_never_becomes_ok(error in any::<i32>()) {
        let outcome: Outcome<i32, i32> = Outcome::Err(error);
        prop_assert!(outcome.is_err());
        prop_assert_eq!(outcome.ok(), Maybe::None);
    }

    #[test]
    fn prop_transpose_maps_err_to_some_err(error in any::<String>()) {
        let outcome: Outcome<Maybe<i32>, String> = Outcome::Err(error.clone());
        prop_assert_eq!(outcome.transpose(), Maybe::Some(Outcome::Err(error)));
    }
}
