//! Integration tests for Error types
//!
//! Tests error construction, display, context, and the fatal classification.

use gametext_foundation::{Error, ErrorContext, ErrorKind, InfoViolation};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_invalid_key() {
    let err = Error::invalid_key(InfoViolation::ForbiddenByte {
        byte: b';',
        offset: 3,
    });
    assert!(matches!(err.kind, ErrorKind::InvalidKey(_)));
    let msg = format!("{err}");
    assert!(msg.contains("';'"));
    assert!(msg.contains('3'));
}

#[test]
fn error_overflow() {
    let err = Error::overflow(530, 512);
    assert!(matches!(
        err.kind,
        ErrorKind::InfoStringOverflow {
            required: 530,
            limit: 512
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains("530"));
    assert!(msg.contains("512"));
}

#[test]
fn error_unbalanced_quotes() {
    let err = Error::unbalanced_quotes(3);
    assert!(matches!(err.kind, ErrorKind::UnbalancedQuotes { quotes: 3 }));
    assert!(format!("{err}").contains("unbalanced"));
}

#[test]
fn error_corrupt_content() {
    let err = Error::corrupt_content("entity string doesn't start with {");
    assert!(format!("{err}").contains("doesn't start with"));
}

// =============================================================================
// Fatal Classification
// =============================================================================

#[test]
fn only_corrupt_content_is_fatal() {
    assert!(Error::corrupt_content("bad").is_fatal());

    let recoverable = [
        Error::invalid_info_string(InfoViolation::Empty),
        Error::invalid_key(InfoViolation::Empty),
        Error::invalid_value(InfoViolation::TooLong {
            length: 70,
            limit: 64,
        }),
        Error::overflow(600, 512),
        Error::unbalanced_quotes(1),
        Error::invalid_config("zero"),
    ];
    for err in recoverable {
        assert!(!err.is_fatal(), "{err}");
    }
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_travels_with_error() {
    let err = Error::corrupt_content("truncated").with_context(
        ErrorContext::new()
            .with_source("maps/dm1.bsp")
            .with_offset(17)
            .with_frame("extract_entity_property(message)"),
    );
    let context = err.context.as_ref().unwrap();
    assert_eq!(context.source.as_deref(), Some("maps/dm1.bsp"));
    assert_eq!(context.offset, Some(17));
    assert_eq!(context.stack.len(), 1);
    assert!(format!("{context}").contains("maps/dm1.bsp+17"));
}

#[test]
fn violation_display() {
    let cases = [
        (InfoViolation::Empty, "empty"),
        (InfoViolation::EmptyKey { offset: 5 }, "empty key at offset 5"),
        (InfoViolation::MissingDelimiter { offset: 9 }, "offset 9"),
        (
            InfoViolation::SegmentTooLong {
                offset: 1,
                length: 64,
                limit: 64,
            },
            "length 64",
        ),
    ];
    for (violation, expected) in cases {
        assert!(violation.to_string().contains(expected), "{violation}");
    }
}
