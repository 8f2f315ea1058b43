//! Purpose: Regression coverage for decode-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels and pass-through of serde_json errors.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.

use optfield::Maybe;
use optfield::api::{FailureCategory, codec};
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_data_and_eof() {
    let syntax_err = codec::from_slice::<Value>(br#"{"a":}"#).unwrap_err();
    assert_eq!(
        codec::categorize_error(&syntax_err),
        FailureCategory::Syntax
    );

    let data_err = codec::from_slice::<Maybe<i32>>(br#""seven""#).unwrap_err();
    assert_eq!(codec::categorize_error(&data_err), FailureCategory::Data);

    let eof_err = codec::from_slice::<Value>(b"[1,").unwrap_err();
    assert_eq!(codec::categorize_error(&eof_err), FailureCategory::Eof);
}

#[test]
fn hint_contains_category_and_context_but_not_payload() {
    let err = codec::from_slice::<Maybe<u16>>(br#""secret-token""#).unwrap_err();
    let hint = codec::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: data"));
    assert!(hint.contains("context: test.context"));
    assert!(hint.contains("line 1"));
    assert!(!hint.contains("secret-token"));
}

#[test]
fn container_errors_match_plain_serde_json_errors() {
    let input = b"null";
    let mut slot = Maybe::<i32>::absent();
    let ours = slot.from_json(input).unwrap_err();
    let plain = serde_json::from_slice::<i32>(input).unwrap_err();
    assert_eq!(ours.to_string(), plain.to_string());
    assert!(slot.is_present());
}

#[test]
fn container_rejects_trailing_input() {
    let mut slot = Maybe::<i32>::absent();
    let err = slot.from_json(b"1 2").unwrap_err();
    assert_eq!(codec::categorize_error(&err), FailureCategory::Syntax);
    assert!(slot.is_present());
    assert_eq!(slot.get(), 1);
}
