//! Tests and examples for the testing utilities
//!
//! Shows the usual patterns for checking laziness and optional results.

use pullstream::prelude::*;
use pullstream::testing::CallCounter;
use pullstream::{assert_absent, assert_present, assert_present_eq};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    total_cents: u64,
}

fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            total_cents: 1_200,
        },
        Order {
            id: 2,
            total_cents: 80,
        },
        Order {
            id: 3,
            total_cents: 15_000,
        },
    ]
}

#[test]
fn test_first_large_order() {
    let found = Stream::of(orders())
        .filter(|o| o.total_cents > 1_000)
        .map(|o| o.id)
        .find_first();
    assert_present_eq!(found, 1);
}

#[test]
fn test_no_matching_order() {
    let found = Stream::of(orders()).filter(|o| o.total_cents > 100_000).find_first();
    assert_absent!(found);
}

#[test]
fn test_counter_proves_short_circuit() {
    let inspected = CallCounter::new();
    let any_small = Stream::of(orders())
        .map(inspected.counting(|o: Order| o.total_cents))
        .any_match(|cents| *cents < 100);
    assert!(any_small);
    assert_eq!(inspected.get(), 2);
}

#[test]
fn test_counter_proves_stateful_drain() {
    let inspected = CallCounter::new();
    let cheapest = Stream::of(orders())
        .map(inspected.counting(|o: Order| o.total_cents))
        .sorted()
        .find_first();
    assert_present!(cheapest);
    assert_eq!(inspected.get(), 3);
}

#[test]
fn test_grouping_orders() {
    let groups = Stream::of(orders()).collect(collector::grouping_by(|o: &Order| o.total_cents >= 1_000));
    assert_eq!(groups[&true].len(), 2);
    assert_eq!(groups[&false][0].id, 2);
}

#[test]
fn test_optional_error_on_empty_get() {
    let err = Stream::<Order>::empty().find_first().get().unwrap_err();
    assert!(err.is_no_such_element());
    assert_eq!(err, OptionalError::NoSuchElement);
}
