use reason_rail::settings::{self, Settings};
use reason_rail::{Error, ErrorKind, Reason, Success};
use std::io;

#[derive(Debug, PartialEq)]
struct HttpStatus(u16);

#[test]
fn success_display_omits_empty_segments() {
    assert_eq!(Success::new("done").to_string(), "Success with Message='done'");
    assert_eq!(Success::new("").to_string(), "Success");
}

#[test]
fn error_display_lists_metadata_and_causes() {
    let error = Error::new("outer")
        .with_metadata("a", 1)
        .with_metadata("b", "two")
        .caused_by(Error::new("inner 1"))
        .caused_by(Error::new("inner 2"));

    assert_eq!(
        error.to_string(),
        "Error with Message='outer', Metadata='a=1; b=two', \
         Reasons='Error with Message='inner 1'; Error with Message='inner 2''"
    );
}

#[test]
fn error_without_message_starts_with_first_present_segment() {
    let error = Error::new("").with_metadata("code", 7);
    assert_eq!(error.to_string(), "Error with Metadata='code=7'");
}

#[derive(Debug)]
struct DiskFull;

impl std::fmt::Display for DiskFull {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("disk full")
    }
}

impl std::error::Error for DiskFull {}

#[test]
fn exceptional_error_display() {
    let error = Error::from_exception(DiskFull);

    assert_eq!(error.type_name(), "ExceptionalError");
    assert_eq!(
        error.to_string(),
        format!(
            "ExceptionalError with Message='disk full', Exception='{}: disk full'",
            std::any::type_name::<DiskFull>()
        )
    );
}

#[test]
fn exceptional_error_display_names_the_native_type() {
    let error = Error::from_exception(io::Error::other("reset"));
    let rendered = error.to_string();

    assert!(rendered.contains("Exception='std::io::"));
    assert!(rendered.ends_with(": reset'"));
}

#[test]
fn exceptional_error_keeps_the_native_error() {
    let error = Error::exceptional(
        "reading config failed",
        reason_rail::Exception::new(io::Error::new(io::ErrorKind::NotFound, "config.toml")),
    );

    let exception = error.exception().expect("exceptional error");
    assert!(exception.is::<io::Error>());
    assert_eq!(exception.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::NotFound));
    assert!(matches!(error.kind(), ErrorKind::Exceptional(_)));
    assert_eq!(error.message(), "reading config failed");
}

#[test]
fn domain_error_has_no_exception() {
    let error = Error::new("plain");
    assert!(!error.is_exceptional());
    assert!(error.exception().is_none());
    assert_eq!(error.kind(), &ErrorKind::Domain);
}

#[test]
fn caused_by_appends_in_order() {
    let error = Error::new("root")
        .caused_by("first")
        .caused_by_many(["second", "third"])
        .caused_by_exception(io::Error::other("fourth"));

    let messages: Vec<&str> = error.reasons().iter().map(Error::message).collect();
    assert_eq!(messages, vec!["first", "second", "third", "fourth"]);
    assert!(error.reasons()[3].is_exceptional());
}

#[test]
fn caused_by_message_uses_the_error_factory() {
    let tagged = Settings::builder()
        .error_factory(|message| Error::new(message).with_metadata("tagged", true))
        .build();

    let error = settings::scoped(tagged, || Error::new("root").caused_by("child"));

    assert!(error.reasons()[0].has_metadata_key("tagged"));
    assert!(!error.has_metadata_key("tagged"));
}

#[test]
fn caused_by_exception_uses_the_exceptional_error_factory() {
    let custom = Settings::builder()
        .exceptional_error_factory(|message, exception| {
            Error::exceptional(format!("wrapped: {message}"), exception)
        })
        .build();

    let error =
        settings::scoped(custom, || Error::new("root").caused_by_exception(io::Error::other("eof")));

    assert_eq!(error.reasons()[0].message(), "wrapped: eof");
}

#[test]
fn attachments_are_typed() {
    let error = Error::new("request failed").with_attachment(HttpStatus(503));

    assert_eq!(error.attachment::<HttpStatus>(), Some(&HttpStatus(503)));
    assert!(error.attachment::<String>().is_none());

    let success = Success::new("cached").with_attachment(42_u32);
    assert_eq!(success.attachment::<u32>(), Some(&42));
}

#[test]
fn cloned_reasons_are_equal() {
    let error = Error::new("x").with_attachment(HttpStatus(500)).caused_by("y");
    assert_eq!(error.clone(), error);

    // a separately attached payload is a different attachment
    let other = Error::new("x").with_attachment(HttpStatus(500)).caused_by("y");
    assert_ne!(error, other);
}

#[test]
fn reason_accessors() {
    let error: Reason = Error::new("bad").with_metadata("k", "v").into();
    let success: Reason = Success::new("good").into();

    assert!(error.is_error());
    assert!(success.is_success());
    assert_eq!(error.message(), "bad");
    assert!(error.has_metadata("k", |v| v == "v"));
    assert!(error.as_success().is_none());
    assert_eq!(success.as_success().map(Success::message), Some("good"));
    assert_eq!(success.to_string(), "Success with Message='good'");
}
