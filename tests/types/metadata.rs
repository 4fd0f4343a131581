use reason_rail::types::{Metadata, MetadataValue};
use reason_rail::{Error, Success};

#[test]
fn metadata_round_trips_on_a_reason() {
    let error = Error::new("x").with_metadata("k", "v");

    assert_eq!(error.metadata().get("k"), Some(&MetadataValue::from("v")));
    assert!(error.metadata().get("missing").is_none());
}

#[test]
fn metadata_overwrite_keeps_position() {
    let success = Success::new("saved")
        .with_metadata("first", 1)
        .with_metadata("second", 2)
        .with_metadata("first", 3);

    let keys: Vec<&str> = success.metadata().keys().collect();
    assert_eq!(keys, vec!["first", "second"]);
    assert_eq!(success.metadata().get("first").and_then(MetadataValue::as_i64), Some(3));
}

#[test]
fn metadata_keys_are_case_sensitive() {
    let mut metadata = Metadata::new();
    metadata.insert("Key", true);
    metadata.insert("key", false);

    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata.get("Key").and_then(MetadataValue::as_bool), Some(true));
}

#[test]
fn metadata_insert_returns_previous_value() {
    let mut metadata = Metadata::new();
    assert!(metadata.insert("retries", 1_u32).is_none());
    assert_eq!(metadata.insert("retries", 2_u32), Some(MetadataValue::UInt(1)));
}

#[test]
fn metadata_map_sets_entries_in_order() {
    let error = Error::new("x").with_metadata_map([("a", 1), ("b", 2)]);

    assert_eq!(error.metadata().to_string(), "a=1; b=2");
}

#[test]
fn metadata_value_accessors() {
    assert_eq!(MetadataValue::from(1.5_f64).as_f64(), Some(1.5));
    assert_eq!(MetadataValue::from(7_i32).as_f64(), Some(7.0));
    assert_eq!(MetadataValue::from(u64::MAX).as_i64(), None);
    assert_eq!(MetadataValue::from("text").as_str(), Some("text"));
    assert_eq!(MetadataValue::from(String::from("text")), "text");
    assert!(MetadataValue::from(true).as_str().is_none());
}

#[test]
fn metadata_predicate_query() {
    let error = Error::new("throttled").with_metadata("retry_after", 30);

    assert!(error.has_metadata_key("retry_after"));
    assert!(error.has_metadata("retry_after", |v| v.as_i64() == Some(30)));
    assert!(!error.has_metadata("retry_after", |v| v.as_i64() == Some(5)));
    assert!(!error.has_metadata("missing", |_| true));
}
