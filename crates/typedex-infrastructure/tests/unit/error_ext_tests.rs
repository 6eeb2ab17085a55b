//! Error Extension Tests

use std::error::Error as _;
use std::io;

use typedex_domain::error::{Error, Result};
use typedex_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let io_error = io::Error::other("bad value");

    let err = Err::<(), _>(io_error).config_context("parsing").unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert_eq!(err.source().unwrap().to_string(), "bad value");
}

#[test]
fn test_lazy_context_runs_only_on_error() {
    let mut calls = 0;
    let ok: std::result::Result<u8, io::Error> = Ok(1);

    let value = ok
        .with_config_context(|| {
            calls += 1;
            "never"
        })
        .unwrap();

    assert_eq!(value, 1);
    assert_eq!(calls, 0);
}
