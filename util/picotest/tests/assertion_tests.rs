//! Unit tests for assertions and test bodies

#![cfg(test)]

use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use picotest::{AssertionFailure, TestResult, check, check_eq, check_ne, def_test};

// ========== Test Bodies ==========

static AFTER_FAILURE: AtomicUsize = AtomicUsize::new(0);
static FAILING_LINE: AtomicU32 = AtomicU32::new(0);

#[def_test]
fn no_assertions() {}

#[def_test]
fn only_true_conditions() {
    let value = 42;
    check!(value > 0);
    check!(value < 100);
    check_eq!(value, 42);
    check_ne!(value, 7);
}

#[def_test]
fn stops_at_first_failure() {
    let value = 3;
    check!(value == 3);
    FAILING_LINE.store(line!() + 1, Ordering::SeqCst);
    check!(value == 4);
    AFTER_FAILURE.fetch_add(1, Ordering::SeqCst);
    check!(value == 5);
}

#[def_test]
fn fails_equality() {
    let items = [1, 2, 3];
    check_eq!(items.len(), 2);
}

#[def_test]
fn fails_inequality() {
    check_ne!("same", "same");
}

#[def_test]
fn fails_in_loop() {
    for i in 0..10 {
        check!(i < 5);
    }
}

#[def_test]
fn explicit_result() -> Result<(), AssertionFailure> {
    picotest::check(true, "true", "explicit.t", 1)?;
    picotest::check(1 + 1 == 3, "1+1==3", "explicit.t", 2)?;
    picotest::check(false, "never reached", "explicit.t", 3)
}

#[def_test]
fn explicit_test_result() -> TestResult {
    TestResult::Pass
}

// ========== Behaviour ==========

#[test]
fn test_zero_assertions_pass() {
    assert_eq!(no_assertions(), TestResult::Pass);
}

#[test]
fn test_true_conditions_pass() {
    assert!(only_true_conditions().is_pass());
}

#[test]
fn test_first_failure_wins_and_stops_body() {
    // Act
    let result = stops_at_first_failure();

    // Assert: reported failure is the second check, the marker never moved
    let failure = result.failure().expect("test should fail");
    assert_eq!(failure.expression, stringify!(value == 4));
    assert_eq!(failure.line, FAILING_LINE.load(Ordering::SeqCst));
    assert!(failure.file.ends_with("assertion_tests.rs"));
    assert_eq!(AFTER_FAILURE.load(Ordering::SeqCst), 0);
}

#[test]
fn test_check_eq_reports_source_text() {
    let failure = *fails_equality().failure().unwrap();
    assert_eq!(
        failure.expression,
        concat!(stringify!(items.len()), " == ", stringify!(2))
    );
}

#[test]
fn test_check_ne_reports_source_text() {
    let failure = *fails_inequality().failure().unwrap();
    assert_eq!(
        failure.expression,
        concat!(stringify!("same"), " != ", stringify!("same"))
    );
}

#[test]
fn test_failure_inside_loop_returns_from_body() {
    let failure = *fails_in_loop().failure().unwrap();
    assert_eq!(failure.expression, stringify!(i < 5));
}

#[test]
fn test_explicit_text_and_location() {
    assert_eq!(
        explicit_result(),
        TestResult::Fail(AssertionFailure::new("1+1==3", "explicit.t", 2))
    );
    assert_eq!(explicit_test_result(), TestResult::Pass);
}

#[test]
fn test_repeated_invocations_are_independent() {
    assert_eq!(stops_at_first_failure(), stops_at_first_failure());
    assert_eq!(AFTER_FAILURE.load(Ordering::SeqCst), 0);
}

#[def_test]
fn compact_condition() {
    check!(2+2==5);
}

#[test]
fn test_check_macro_reports_stringified_text() {
    let failure = *compact_condition().failure().unwrap();
    assert_eq!(failure.expression, stringify!(2 + 2 == 5));

    // The explicit helper keeps the author's spelling
    let literal = picotest::check(2 + 2 == 5, "2+2==5", "m.t", 10).unwrap_err();
    assert_eq!(literal.to_string(), "'2+2==5' (m.t:10)");
}
