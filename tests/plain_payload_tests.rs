//! Integration tests for registering downstream types as plain payloads.
//!
//! Registered types pass through `flatten` and `transpose` unchanged and are
//! reported as neither a `Maybe` nor an `Outcome`.

use rstest::rstest;
use std::collections::HashMap;
use tsur::{Maybe, Outcome, is_maybe, is_outcome};

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    owner: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Page<T> {
    items: Vec<T>,
}

tsur::plain_payload! {
    impl[] Account;
    impl[T,] Page<T>;
}

fn account() -> Account {
    Account {
        id: 7,
        owner: "ann".to_string(),
    }
}

// =============================================================================
// Registered Types
// =============================================================================

#[rstest]
fn registered_struct_passes_through_maybe_flatten() {
    assert_eq!(Maybe::Some(account()).flatten(), Maybe::Some(account()));
    assert_eq!(Maybe::<Account>::None.flatten(), Maybe::None);
}

#[rstest]
fn registered_struct_passes_through_outcome_flatten() {
    let outcome: Outcome<Account, String> = Outcome::Ok(account());
    assert_eq!(outcome.flatten(), Outcome::Ok(account()));
}

#[rstest]
fn registered_struct_transposes_into_ok_some() {
    let transposed: Outcome<Maybe<Account>, String> = Maybe::Some(account()).transpose();
    assert_eq!(transposed, Outcome::Ok(Maybe::Some(account())));

    let outcome: Outcome<Account, String> = Outcome::Ok(account());
    assert_eq!(outcome.transpose(), Maybe::Some(Outcome::Ok(account())));
}

#[rstest]
fn registered_generic_struct_is_untagged() {
    let page = Page { items: vec![1, 2] };
    assert!(!is_maybe(&page));
    assert!(!is_outcome(&page));
    assert_eq!(Maybe::Some(page.clone()).flatten(), Maybe::Some(page));
}

// =============================================================================
// Built-in Registrations
// =============================================================================

#[rstest]
fn arrays_pass_through_flatten_and_transpose() {
    assert_eq!(Maybe::Some([1_u8; 4]).flatten(), Maybe::Some([1_u8; 4]));
    let transposed: Outcome<Maybe<[u8; 4]>, ()> = Maybe::Some([0_u8; 4]).transpose();
    assert_eq!(transposed, Outcome::Ok(Maybe::Some([0_u8; 4])));
}

#[rstest]
fn maps_pass_through_flatten() {
    let mut scores = HashMap::new();
    scores.insert("ann", 3);
    assert_eq!(Maybe::Some(scores.clone()).flatten(), Maybe::Some(scores));
}
