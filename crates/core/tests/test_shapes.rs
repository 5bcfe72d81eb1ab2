//! Wire-shape and rendering tests
//!
//! The tagged value and the facade serialize to two intentionally distinct
//! JSON shapes. Both are pinned here against literal strings so that a shape
//! change shows up as a test failure, not as silently broken consumers.

#![cfg(feature = "serde")]

use outcome_core::{Outcome, RawOutcome, failure, success};

#[test]
fn test_tagged_value_shape_is_tag_plus_inner() {
    let ok: RawOutcome<i32, String> = success(5);
    assert_eq!(
        serde_json::to_string(&ok).unwrap(),
        r#"{"tag":"ok","inner":5}"#
    );

    let err: RawOutcome<i32, String> = failure("boom".to_string());
    assert_eq!(
        serde_json::to_string(&err).unwrap(),
        r#"{"tag":"err","inner":"boom"}"#
    );
}

#[test]
fn test_facade_shape_uses_variant_specific_fields() {
    let ok = Outcome::<i32, String>::success(5);
    assert_eq!(
        serde_json::to_string(&ok).unwrap(),
        r#"{"kind":"ok","value":5}"#
    );

    let err = Outcome::<i32, String>::failure("boom".to_string());
    assert_eq!(
        serde_json::to_string(&err).unwrap(),
        r#"{"kind":"err","error":"boom"}"#
    );
}

#[test]
fn test_both_shapes_round_trip() {
    let raw: RawOutcome<i32, String> = failure("boom".to_string());
    let parsed: RawOutcome<i32, String> =
        serde_json::from_str(&serde_json::to_string(&raw).unwrap()).unwrap();
    assert_eq!(parsed, raw);

    let facade = Outcome::<i32, String>::success(42);
    let parsed: Outcome<i32, String> =
        serde_json::from_str(&serde_json::to_string(&facade).unwrap()).unwrap();
    assert_eq!(parsed, facade);
}

#[test]
fn test_bridge_preserves_payloads_across_shapes() {
    // Same logical value, two renderings, one bijection between them.
    let raw: RawOutcome<i32, String> = success(5);
    let facade = Outcome::from_raw(raw.clone());

    assert_eq!(
        serde_json::to_string(&raw).unwrap(),
        r#"{"tag":"ok","inner":5}"#
    );
    assert_eq!(
        serde_json::to_string(&facade).unwrap(),
        r#"{"kind":"ok","value":5}"#
    );
    assert_eq!(facade.into_raw(), raw);
}

#[test]
fn test_display_renders_with_the_payload_display() {
    assert_eq!(Outcome::<i32, String>::success(5).to_string(), "Ok(5)");
    assert_eq!(
        Outcome::<i32, String>::failure("boom".to_string()).to_string(),
        "Err(boom)"
    );
}

#[test]
fn test_nested_payloads_serialize_structurally() {
    let ok: RawOutcome<Vec<i32>, String> = success(vec![1, 2, 3]);
    assert_eq!(
        serde_json::to_string(&ok).unwrap(),
        r#"{"tag":"ok","inner":[1,2,3]}"#
    );

    let facade = Outcome::<Vec<i32>, String>::success(vec![1, 2, 3]);
    assert_eq!(
        serde_json::to_string(&facade).unwrap(),
        r#"{"kind":"ok","value":[1,2,3]}"#
    );
}
