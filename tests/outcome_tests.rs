//! Integration tests for the Outcome<T, E> type.
//!
//! Outcome represents the result of a computation:
//! - `Ok(T)`: the computation succeeded
//! - `Err(E)`: the computation failed
//!
//! The variant is fixed at construction and never inferred from the payload.

use rstest::rstest;
use std::rc::Rc;
use tsur::{Maybe, Outcome, Panic, UnwrapError, is_maybe, is_outcome};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn from_result_keeps_the_variant() {
    let parsed: Outcome<i32, _> = Outcome::from("12".parse::<i32>());
    assert_eq!(parsed, Outcome::Ok(12));

    let failed: Outcome<i32, _> = Outcome::from_result("x".parse::<i32>());
    assert!(failed.is_err());
}

#[rstest]
#[case(11, Outcome::Ok(11))]
#[case(10, Outcome::Err(10))]
fn from_predicate_routes_the_source(#[case] source: i32, #[case] expected: Outcome<i32, i32>) {
    assert_eq!(Outcome::from_predicate(source, |n| *n > 10), expected);
}

#[rstest]
fn is_outcome_checks_the_type_tag() {
    assert!(is_outcome(&Outcome::<(), ()>::Ok(())));
    assert!(!is_outcome(&Ok::<(), ()>(())));
    assert!(!is_maybe(&Outcome::<(), ()>::Err(())));
}

#[rstest]
fn err_payload_equal_to_ok_payload_stays_err() {
    let marker = "__ok__";
    let failed: Outcome<&str, &str> = Outcome::Err(marker);
    assert!(failed.is_err());
    assert_eq!(failed.ok(), Maybe::None);
    assert_eq!(failed.err(), Maybe::Some(marker));
}

// =============================================================================
// Predicates and Identity
// =============================================================================

#[rstest]
fn variant_predicates() {
    let success: Outcome<i32, &str> = Outcome::Ok(3);
    let failure: Outcome<i32, &str> = Outcome::Err("io");
    assert!(success.is_ok_and(|n| *n == 3));
    assert!(!success.is_err_and(|_| true));
    assert!(failure.is_err_and(|e| e.len() == 2));
    assert!(!failure.is_ok_and(|_| true));
}

#[rstest]
fn is_same_compares_ok_payloads_by_identity() {
    let shared = Rc::new(1);
    let left: Outcome<Rc<i32>, ()> = Outcome::Ok(Rc::clone(&shared));
    let right: Outcome<Rc<i32>, ()> = Outcome::Ok(Rc::clone(&shared));
    let other: Outcome<Rc<i32>, ()> = Outcome::Ok(Rc::new(1));
    assert!(left.is_same(&right));
    assert!(!left.is_same(&other));
    assert!(!left.is_same(&Outcome::Err(())));
}

#[rstest]
fn is_same_err_compares_err_payloads_by_identity() {
    let left: Outcome<(), i32> = Outcome::Err(4);
    assert!(left.is_same_err(&Outcome::Err(4)));
    assert!(!left.is_same_err(&Outcome::Err(5)));
    assert!(!left.is_same_err(&Outcome::Ok(())));
}

#[rstest]
fn is_same_and_is_same_err_compare_string_slices_by_text() {
    let first = String::from("user");
    let second = String::from("user");

    let left: Outcome<&str, &str> = Outcome::Err(first.as_str());
    assert!(left.is_same_err(&Outcome::Err(second.as_str())));
    assert!(!left.is_same_err(&Outcome::Err("admin")));

    let left: Outcome<&str, &str> = Outcome::Ok(first.as_str());
    assert!(left.is_same(&Outcome::Ok(second.as_str())));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn and_short_circuits_on_err() {
    let failure: Outcome<i32, &str> = Outcome::Err("first");
    assert_eq!(failure.and(Outcome::<u8, &str>::Ok(2)), Outcome::Err("first"));
    let success: Outcome<i32, &str> = Outcome::Ok(1);
    assert_eq!(success.and(Outcome::<u8, &str>::Err("second")), Outcome::Err("second"));
}

#[rstest]
fn or_replaces_err_only() {
    let success: Outcome<i32, &str> = Outcome::Ok(1);
    assert_eq!(success.or(Outcome::<i32, u8>::Ok(2)), Outcome::Ok(1));
    let failure: Outcome<i32, &str> = Outcome::Err("e");
    assert_eq!(failure.or(Outcome::<i32, u8>::Err(9)), Outcome::Err(9));
}

#[rstest]
fn map_and_map_err_touch_one_side() {
    let success: Outcome<i32, String> = Outcome::Ok(2);
    assert_eq!(success.clone().map(|n| n * 2), Outcome::Ok(4));
    assert_eq!(success.map_err(|e| e.len()), Outcome::Ok(2));

    let failure: Outcome<i32, String> = Outcome::Err("oops".to_string());
    assert_eq!(failure.clone().map(|n| n * 2), Outcome::Err("oops".to_string()));
    assert_eq!(failure.map_err(|e| e.len()), Outcome::Err(4));
}

#[rstest]
fn flatten_only_touches_the_ok_side() {
    let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::Ok(Outcome::Ok(1));
    assert_eq!(nested.flatten(), Outcome::Ok(1));

    let outer: Outcome<Outcome<i32, &str>, &str> = Outcome::Err("outer");
    assert_eq!(outer.flatten(), Outcome::Err("outer"));

    let holds_maybe: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::None);
    assert_eq!(holds_maybe.flatten(), Outcome::Ok(Maybe::None));
}

#[rstest]
fn transpose_plain_payload_becomes_some_ok() {
    let plain: Outcome<i32, &str> = Outcome::Ok(4);
    assert_eq!(plain.transpose(), Maybe::Some(Outcome::Ok(4)));
}

#[rstest]
fn transpose_round_trips_through_maybe() {
    let original: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::Some(2));
    assert_eq!(original.transpose().transpose(), original);

    let empty: Outcome<Maybe<i32>, &str> = Outcome::Ok(Maybe::None);
    assert_eq!(empty.transpose().transpose(), empty);
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn unwrap_and_unwrap_err_return_the_payload() {
    let shared = Rc::new(());
    let ok: Outcome<Rc<()>, ()> = Outcome::Ok(Rc::clone(&shared));
    assert!(Rc::ptr_eq(&ok.unwrap(), &shared));

    let err: Outcome<(), Rc<()>> = Outcome::Err(Rc::clone(&shared));
    assert!(Rc::ptr_eq(&err.unwrap_err(), &shared));
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value: \"disk full\"")]
fn unwrap_on_err_includes_the_error() {
    Outcome::<i32, &str>::Err("disk full").unwrap();
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap_err()` on an `Ok` value: 1")]
fn unwrap_err_on_ok_includes_the_value() {
    Outcome::<i32, &str>::Ok(1).unwrap_err();
}

#[rstest]
#[should_panic(expected = "expected a failure here")]
fn expect_err_uses_custom_message() {
    Outcome::<i32, &str>::Ok(1).expect_err("expected a failure here");
}

#[rstest]
#[should_panic(expected = "must succeed")]
fn expect_uses_custom_message() {
    Outcome::<i32, &str>::Err("no").expect("must succeed");
}

#[rstest]
fn try_unwrap_family_returns_errors_instead_of_panicking() {
    assert_eq!(
        Outcome::<i32, &str>::Err("x").try_unwrap(),
        Err(UnwrapError::new("called `Outcome::unwrap()` on an `Err` value: \"x\""))
    );
    assert_eq!(
        Outcome::<i32, &str>::Ok(2).try_unwrap_err(),
        Err(UnwrapError::new("called `Outcome::unwrap_err()` on an `Ok` value: 2"))
    );
    assert_eq!(Outcome::<i32, &str>::Ok(2).try_unwrap(), Ok(2));
}

#[rstest]
fn defaulted_extraction() {
    let failure: Outcome<usize, &str> = Outcome::Err("four");
    assert_eq!(failure.unwrap_or(1), 1);
    assert_eq!(failure.unwrap_or_default(), 0);
    assert_eq!(failure.unwrap_or_else(str::len), 4);

    let success: Outcome<usize, &str> = Outcome::Ok(3);
    assert_eq!(success.unwrap_err_or("none"), "none");
    assert_eq!(
        success.unwrap_err_or_else(|n| if n > 2 { "big" } else { "small" }),
        "big"
    );
    assert_eq!(failure.unwrap_err_or("none"), "four");
}

#[rstest]
fn fold_calls_exactly_one_branch() {
    let success: Outcome<i32, &str> = Outcome::Ok(2);
    assert_eq!(success.fold(|n| n * 10, |e| e.len() as i32), 20);
    let failure: Outcome<i32, &str> = Outcome::Err("abc");
    assert_eq!(failure.fold(|n| n * 10, |e| e.len() as i32), 3);
}

// =============================================================================
// Capturing Panics
// =============================================================================

#[rstest]
fn attempt_wraps_return_value() {
    let outcome = Outcome::attempt(|| "done");
    assert_eq!(outcome.ok(), Maybe::Some("done"));
}

#[rstest]
fn attempt_captures_formatted_panic() {
    let limit = 3;
    let outcome: Outcome<(), Panic> = Outcome::attempt(move || panic!("limit {limit} exceeded"));
    let panic = outcome.err().unwrap();
    assert_eq!(panic.message(), Some("limit 3 exceeded"));
}

#[rstest]
fn attempt_payload_can_be_resumed() {
    let outcome: Outcome<(), Panic> = Outcome::attempt(|| std::panic::panic_any(17_u32));
    let payload = outcome.err().unwrap().into_payload();
    assert_eq!(payload.downcast_ref::<u32>(), Some(&17));
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

#[rstest]
fn converts_back_to_result() {
    let outcome: Outcome<i32, &str> = Outcome::Err("e");
    let result: Result<i32, &str> = outcome.into();
    assert_eq!(result, Err("e"));
}

#[rstest]
fn iterates_over_ok_payload_only() {
    let outcomes: Vec<Outcome<i32, &str>> =
        vec![Outcome::Ok(1), Outcome::Err("skip"), Outcome::Ok(2)];
    let values: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(values, vec![1, 2]);
}
