//! Integration tests for the info string codec
//!
//! Tests lookup, upsert, removal, overflow, and the rotating value slots.

use gametext_foundation::{ErrorKind, InfoLimits};
use gametext_info::{InfoBuffer, InfoCodec};

fn userinfo() -> InfoBuffer {
    InfoBuffer::from("\\name\\bob\\rate\\25000\\snaps\\20\\model\\sarge/default")
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn lookup_existing_keys() {
    let codec = InfoCodec::default();
    let info = userinfo();
    assert_eq!(codec.find_value(info.as_str(), "rate").unwrap(), Some("25000"));
    assert_eq!(
        codec.find_value(info.as_str(), "model").unwrap(),
        Some("sarge/default")
    );
    assert_eq!(codec.find_key(info.as_str(), "name").unwrap(), Some(0));
}

#[test]
fn lookup_is_case_sensitive() {
    let codec = InfoCodec::default();
    assert_eq!(codec.find_value(userinfo().as_str(), "Name").unwrap(), None);
}

#[test]
fn lookup_in_empty_info() {
    let mut codec = InfoCodec::default();
    assert_eq!(codec.find_value("", "name").unwrap(), None);
    assert_eq!(codec.value_for_key("", "name").unwrap(), None);
}

#[test]
fn value_slots_rotate() {
    let mut codec = InfoCodec::default();
    let info = userinfo();
    let name = codec.value_for_key(info.as_str(), "name").unwrap().unwrap();
    let rate = codec.value_for_key(info.as_str(), "rate").unwrap().unwrap();
    assert_eq!(codec.value(name), Some("bob"));
    assert_eq!(codec.value(rate), Some("25000"));

    // a miss does not advance the ring
    assert_eq!(codec.value_for_key(info.as_str(), "missing").unwrap(), None);
    assert_eq!(codec.value(name), Some("bob"));

    let snaps = codec.value_for_key(info.as_str(), "snaps").unwrap().unwrap();
    assert_eq!(codec.value(name), None);
    assert_eq!(codec.value(rate), Some("25000"));
    assert_eq!(codec.value(snaps), Some("20"));
}

#[test]
fn value_outlives_info() {
    let mut codec = InfoCodec::default();
    let slot = {
        let info = userinfo();
        codec.value_for_key(info.as_str(), "name").unwrap().unwrap()
    };
    assert_eq!(codec.value(slot), Some("bob"));
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn upsert_builds_and_replaces() {
    let codec = InfoCodec::default();
    let mut info = InfoBuffer::new();
    codec.set_value_for_key(&mut info, "name", "bob").unwrap();
    codec.set_value_for_key(&mut info, "rate", "25000").unwrap();
    codec.set_value_for_key(&mut info, "name", "^1bob").unwrap();
    assert_eq!(info, "\\rate\\25000\\name\\^1bob");
}

#[test]
fn empty_value_is_stored() {
    let codec = InfoCodec::default();
    let mut info = userinfo();
    codec.set_value_for_key(&mut info, "rate", "").unwrap();
    assert_eq!(codec.find_value(info.as_str(), "rate").unwrap(), Some(""));
    assert!(codec.validate_info_string(info.as_str()).is_ok());
}

#[test]
fn remove_then_lookup() {
    let codec = InfoCodec::default();
    let mut info = userinfo();
    assert_eq!(codec.remove_key(&mut info, "snaps").unwrap(), 1);
    assert_eq!(info, "\\name\\bob\\rate\\25000\\model\\sarge/default");
    assert_eq!(codec.find_key(info.as_str(), "snaps").unwrap(), None);
}

#[test]
fn forbidden_characters_refused() {
    let codec = InfoCodec::default();
    let mut info = userinfo();
    let before = info.clone();
    for (key, value) in [("na\\me", "x"), ("name", "a;b"), ("name", "\"q\""), ("k;", "v")] {
        assert!(codec.set_value_for_key(&mut info, key, value).is_err());
    }
    assert_eq!(info, before);
}

// =============================================================================
// Overflow
// =============================================================================

#[test]
fn overflow_never_reaches_limit() {
    let codec = InfoCodec::new(InfoLimits::standard().with_max_info_string(32));
    let mut info = InfoBuffer::new();
    let mut stored = 0;
    for i in 0..10 {
        match codec.set_value_for_key(&mut info, &format!("k{i}"), "value") {
            Ok(()) => stored += 1,
            Err(err) => {
                assert!(matches!(err.kind, ErrorKind::InfoStringOverflow { limit: 32, .. }));
                break;
            }
        }
    }
    // each record is "\kN\value", 9 bytes
    assert_eq!(stored, 3);
    assert_eq!(info.len(), 27);
}

#[test]
fn overflow_on_replace_loses_old_record() {
    let codec = InfoCodec::new(InfoLimits::standard().with_max_info_string(24));
    let mut info = InfoBuffer::from("\\a\\1\\name\\bob");
    let err = codec
        .set_value_for_key(&mut info, "name", "a_much_longer_name")
        .unwrap_err();
    assert!(!err.is_fatal());
    assert_eq!(info, "\\a\\1");
    assert_eq!(codec.find_value(info.as_str(), "name").unwrap(), None);
}

#[test]
fn compact_limits_bound_segments() {
    let codec = InfoCodec::new(InfoLimits::compact());
    let mut info = InfoBuffer::new();
    let long = "x".repeat(32);
    let err = codec.set_value_for_key(&mut info, "name", &long).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidValue(_)));
    codec.set_value_for_key(&mut info, "name", &long[..31]).unwrap();
}
