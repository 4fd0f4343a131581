use reason_rail::{Error, Outcome, Reason, Success};
use std::cell::Cell;
use std::num::TryFromIntError;

#[test]
fn map_transforms_the_value() {
    let outcome = Outcome::ok_with(5).map(|v| v + 1);
    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&6));
}

#[test]
fn map_keeps_reasons() {
    let outcome = Outcome::ok_with("7").with_success("read").map(str::len);
    assert_eq!(outcome.successes()[0].message(), "read");
    assert_eq!(outcome.value(), Some(&1));
}

#[test]
fn map_has_no_success_guard() {
    // a failed outcome still holding a value gets it mapped
    let calls = Cell::new(0);
    let outcome = Outcome::ok_with(1).with_error("late").map(|v| {
        calls.set(calls.get() + 1);
        v * 10
    });

    assert_eq!(calls.get(), 1);
    assert!(outcome.is_failed());
    assert_eq!(outcome.held_value(), Some(&10));
    assert_eq!(outcome.value(), None);
}

#[test]
fn map_on_failure_without_value_is_not_called() {
    let outcome = Outcome::<i32>::fail("E").map(|_| -> i32 { unreachable!("no value held") });
    assert!(outcome.is_failed());
}

#[test]
fn map_errors_replaces_only_errors_in_place() {
    let outcome = Outcome::<()>::fail("e1")
        .with_success("s1")
        .with_error("e2")
        .map_errors(|e| Error::new(format!("wrapped {}", e.message())).caused_by(e));

    let messages: Vec<&str> = outcome.reasons().iter().map(Reason::message).collect();
    assert_eq!(messages, vec!["wrapped e1", "s1", "wrapped e2"]);
    assert_eq!(outcome.errors()[0].reasons()[0].message(), "e1");
}

#[test]
fn map_successes_replaces_only_successes_in_place() {
    let outcome = Outcome::ok()
        .with_success("s1")
        .with_error("e1")
        .with_success("s2")
        .map_successes(|s| s.with_metadata("seen", true));

    let reasons = outcome.reasons().as_slice();
    assert!(reasons[0].has_metadata_key("seen"));
    assert!(!reasons[1].has_metadata_key("seen"));
    assert!(reasons[2].has_metadata_key("seen"));
}

#[test]
fn bind_short_circuits_on_failure() {
    let called = Cell::new(false);
    let outcome = Outcome::<i32>::fail("E").bind(|v| {
        called.set(true);
        Outcome::ok_with(v)
    });

    assert!(!called.get());
    assert!(outcome.is_failed());
    assert_eq!(outcome.errors()[0].message(), "E");
    assert_eq!(outcome.held_value(), None);
}

#[test]
fn bind_on_failure_drops_held_value() {
    let outcome = Outcome::ok_with(3).with_error("late").bind(Outcome::ok_with);
    assert_eq!(outcome.held_value(), None);
    assert_eq!(outcome.errors().len(), 1);
}

#[test]
fn bind_concatenates_reasons_on_success() {
    let outcome = Outcome::ok_with(2)
        .with_success("S1")
        .bind(|v| Outcome::ok_with(v * 2).with_success("S2"));

    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&4));
    let messages: Vec<&str> = outcome.successes().into_iter().map(Success::message).collect();
    assert_eq!(messages, vec!["S1", "S2"]);
}

#[test]
fn bind_into_failure_keeps_prior_successes() {
    let outcome = Outcome::ok_with(2)
        .with_success("parsed")
        .bind(|_| Outcome::<i32>::fail("rejected"));

    assert!(outcome.is_failed());
    assert_eq!(outcome.reasons().len(), 2);
    assert_eq!(outcome.successes()[0].message(), "parsed");
}

#[test]
fn untyped_bind_receives_unit() {
    let outcome = Outcome::ok().bind(|()| Outcome::ok_with("typed"));
    assert_eq!(outcome.value(), Some(&"typed"));
}

#[test]
fn with_family_appends_in_order() {
    let outcome = Outcome::ok_with(1)
        .with_success("s1")
        .with_successes(["s2", "s3"])
        .with_reason(Error::new("e1"))
        .with_reasons([Reason::from(Success::new("s4")), Reason::from(Error::new("e2"))])
        .with_errors(vec!["e3"]);

    let messages: Vec<&str> = outcome.reasons().iter().map(Reason::message).collect();
    assert_eq!(messages, vec!["s1", "s2", "s3", "e1", "s4", "e2", "e3"]);
    assert!(outcome.is_failed());
}

#[test]
fn with_value_replaces_only_the_value() {
    let outcome = Outcome::ok_with(1).with_success("kept").with_value(2);
    assert_eq!(outcome.value(), Some(&2));
    assert_eq!(outcome.reasons().len(), 1);

    let failed = Outcome::<i32>::fail("E").with_value(9);
    assert!(failed.is_failed());
    assert_eq!(failed.held_value(), Some(&9));
}

#[test]
fn to_unit_is_idempotent_on_untyped() {
    let outcome = Outcome::ok().with_success("s");
    assert_eq!(outcome.clone().to_unit(), outcome);

    let failed = Outcome::<()>::fail("e");
    assert_eq!(failed.clone().to_unit(), failed);
}

#[test]
fn to_unit_drops_the_value_type() {
    let typed = Outcome::ok_with("value").with_success("s");
    assert_eq!(typed.to_unit(), Outcome::ok().with_success("s"));
}

#[test]
fn to_typed_keeps_value_only_on_success() {
    assert_eq!(Outcome::ok().to_typed(5).value(), Some(&5));

    let failed = Outcome::<()>::fail("e").to_typed(5);
    assert!(failed.is_failed());
    assert_eq!(failed.held_value(), None);
}

#[test]
fn try_convert_succeeds_for_supported_conversions() {
    let outcome = Outcome::ok_with(255_u32).with_success("read").try_convert::<u8>();

    assert_eq!(outcome.value(), Some(&255_u8));
    assert_eq!(outcome.reasons().len(), 1);
}

#[test]
fn try_convert_failure_prepends_exceptional_error() {
    let outcome = Outcome::ok_with(-1_i64).with_success("read").try_convert::<u32>();

    assert!(outcome.is_failed());
    assert_eq!(outcome.reasons().len(), 2);
    let first = outcome.reasons().as_slice()[0].as_error().expect("conversion error first");
    assert!(first.is_exceptional());
    assert!(first.message().contains("u32"));
    assert!(outcome.has_exception::<TryFromIntError>());
    assert!(outcome.reasons().as_slice()[1].is_success());
}

#[test]
fn try_convert_without_value_carries_reasons() {
    let outcome = Outcome::<i64>::fail("E").try_convert::<u32>();
    assert_eq!(outcome.errors().len(), 1);
    assert_eq!(outcome.errors()[0].message(), "E");
}
