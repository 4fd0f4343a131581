use reason_rail::types::{Exception, SerializedException};
use reason_rail::{Error, Outcome, Success};
use serde_json::json;
use std::io;

#[test]
fn success_outcome_round_trips() {
    let outcome = Outcome::ok_with(7_u32).with_success(Success::new("computed").with_metadata("ms", 12));

    let text = serde_json::to_string(&outcome).unwrap();
    let back: Outcome<u32> = serde_json::from_str(&text).unwrap();

    assert_eq!(back, outcome);
}

#[test]
fn untyped_outcome_keeps_its_unit_value() {
    let outcome = Outcome::ok();

    let text = serde_json::to_string(&outcome).unwrap();
    let back: Outcome = serde_json::from_str(&text).unwrap();

    assert_eq!(back, outcome);
    assert_eq!(back.value(), Some(&()));
}

#[test]
fn failed_outcome_omits_the_value() {
    let outcome = Outcome::<u32>::fail(Error::new("broke").caused_by("deeper"));
    let value = serde_json::to_value(&outcome).unwrap();

    assert!(value.get("value").is_none());
    assert_eq!(value["reasons"][0]["Error"]["message"], "broke");
    assert_eq!(value["reasons"][0]["Error"]["reasons"][0]["message"], "deeper");

    let back: Outcome<u32> = serde_json::from_value(value).unwrap();
    assert_eq!(back, outcome);
}

#[test]
fn metadata_serializes_as_ordered_pairs() {
    let error = Error::new("x").with_metadata("b", 1).with_metadata("a", "two");
    let value = serde_json::to_value(&error).unwrap();

    assert_eq!(value["metadata"], json!([["b", 1], ["a", "two"]]));
}

#[test]
fn exception_survives_as_type_name_and_message() {
    let outcome = Outcome::<()>::fail_exception(io::Error::other("disk full"));

    let text = serde_json::to_string(&outcome).unwrap();
    let back: Outcome = serde_json::from_str(&text).unwrap();

    let exception: &Exception = back.errors()[0].exception().expect("exception kept");
    assert!(exception.type_name().ends_with("Error"));
    assert_eq!(exception.message(), "disk full");
    assert_eq!(
        exception.downcast_ref::<SerializedException>().map(|e| e.message.as_str()),
        Some("disk full")
    );
    // equal by type name and message
    assert_eq!(back, outcome);
}

#[test]
fn attachments_are_not_serialized() {
    let error = Error::new("x").with_attachment(5_u8);
    let back: Error = serde_json::from_value(serde_json::to_value(&error).unwrap()).unwrap();

    assert!(back.attachment::<u8>().is_none());
    assert_eq!(back.message(), "x");
}

#[test]
fn successful_outcome_without_value_is_rejected() {
    assert!(serde_json::from_str::<Outcome<i32>>(r#"{"reasons":[]}"#).is_err());
    assert!(serde_json::from_str::<Outcome>(r#"{"reasons":[]}"#).is_err());
    assert!(serde_json::from_str::<Outcome>(r#"{"reasons":[{"Success":{"message":"s"}}]}"#).is_err());
}

#[test]
fn deserialized_success_feeds_bind() {
    let outcome: Outcome<i32> = serde_json::from_str(r#"{"reasons":[],"value":4}"#).unwrap();

    let mut called = false;
    let bound = outcome.bind(|v| {
        called = true;
        Outcome::ok_with(v + 1)
    });

    assert!(called);
    assert_eq!(bound.value(), Some(&5));
}

#[test]
fn failed_outcome_without_value_is_accepted() {
    let outcome: Outcome<i32> =
        serde_json::from_value(json!({ "reasons": [{ "Error": { "message": "broke" } }] })).unwrap();

    assert!(outcome.is_failed());
    assert_eq!(outcome.errors()[0].message(), "broke");
}
