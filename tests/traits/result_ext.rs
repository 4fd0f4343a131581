use reason_rail::settings::{self, Settings};
use reason_rail::traits::ResultExt;
use reason_rail::Error;
use std::io;

#[test]
fn into_outcome_keeps_ok_value() {
    let result: Result<u16, io::Error> = Ok(8080);
    assert_eq!(result.into_outcome().value(), Some(&8080));
}

#[test]
fn into_outcome_wraps_err_as_exception() {
    let result: Result<u16, io::Error> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    let outcome = result.into_outcome();

    assert!(outcome.has_exception_matching::<io::Error, _>(|e| {
        e.kind() == io::ErrorKind::PermissionDenied
    }));
    assert_eq!(outcome.errors()[0].message(), "denied");
}

#[test]
fn into_outcome_with_maps_err_lazily() {
    let ok: Result<u8, &str> = Ok(1);
    let outcome = ok.into_outcome_with(|_| -> Error { unreachable!("only called for Err") });
    assert!(outcome.is_success());

    let err: Result<u8, &str> = Err("missing");
    let outcome = err.into_outcome_with(|e| Error::new(e).with_metadata("layer", "cache"));
    assert!(outcome.errors()[0].has_metadata_key("layer"));
}

#[test]
fn into_outcome_with_message_uses_the_error_factory() {
    let prefixed = Settings::builder().error_factory(|m| Error::new(format!("cache: {m}"))).build();

    let err: Result<u8, String> = Err("miss".to_owned());
    let outcome = settings::scoped(prefixed, || err.into_outcome_with(|e| e));

    assert_eq!(outcome.errors()[0].message(), "cache: miss");
}
