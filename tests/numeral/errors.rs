//! Integration tests for Error types
//!
//! Tests error kinds, display, and the carried range value.

use vinculum_numeral::{Error, ErrorKind, MAX_VALUE, decode, encode};

#[test]
fn format_error_kind() {
    let err = decode("XIIII").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Format { ref input } if input == "XIIII"));
}

#[test]
fn range_error_kind_from_encode() {
    let err = encode(5_000_000).unwrap_err();
    if let ErrorKind::ValueRange { value, max } = err.kind {
        assert_eq!(value, 5_000_000);
        assert_eq!(max, MAX_VALUE);
    } else {
        panic!("expected ValueRange, got {:?}", err.kind);
    }
}

#[test]
fn format_error_display() {
    let msg = format!("{}", Error::format("ABC"));
    assert!(msg.contains("invalid roman format"));
    assert!(msg.contains("ABC"));
}

#[test]
fn range_error_display() {
    let msg = format!("{}", Error::value_out_of_range(4_000_000));
    assert!(msg.contains("4000000"));
    assert!(msg.contains("3999999"));
}

#[test]
fn format_error_has_no_value() {
    assert_eq!(Error::format("X").value(), None);
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(Error::format("Q"));
    assert!(err.to_string().contains('Q'));
}
