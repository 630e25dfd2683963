use campaign_model::FieldValue;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::BTreeMap;

// ── Untagged JSON representation ─────────────────────────────────

#[test]
fn scalars_deserialize_to_matching_variants() {
    let v: FieldValue = serde_json::from_value(json!("x")).unwrap();
    assert_eq!(v, FieldValue::Text("x".into()));

    let v: FieldValue = serde_json::from_value(json!(3)).unwrap();
    assert_eq!(v, FieldValue::from(3i64));

    let v: FieldValue = serde_json::from_value(json!(true)).unwrap();
    assert_eq!(v, FieldValue::Bool(true));

    let v: FieldValue = serde_json::from_value(json!(null)).unwrap();
    assert_eq!(v, FieldValue::Null);
}

#[test]
fn collections_deserialize_recursively() {
    let v: FieldValue = serde_json::from_value(json!({"hp": 12, "tags": ["a"]})).unwrap();
    let mut expected = BTreeMap::new();
    expected.insert("hp".to_string(), FieldValue::from(12i64));
    expected.insert("tags".to_string(), FieldValue::List(vec!["a".into()]));
    assert_eq!(v, FieldValue::Map(expected));
}

#[test]
fn serializes_without_tags() {
    assert_eq!(serde_json::to_value(FieldValue::from("good")).unwrap(), json!("good"));
    assert_eq!(serde_json::to_value(FieldValue::Null).unwrap(), json!(null));
    assert_eq!(
        serde_json::to_value(FieldValue::from(vec!["a", "b"])).unwrap(),
        json!(["a", "b"])
    );
}

#[test]
fn numbers_keep_their_json_form() {
    let fields: BTreeMap<String, FieldValue> =
        serde_json::from_str(r#"{"level":3,"gold":9007199254740993,"weight":2.5}"#).unwrap();
    assert_eq!(
        serde_json::to_string(&fields).unwrap(),
        r#"{"gold":9007199254740993,"level":3,"weight":2.5}"#
    );
}

#[test]
fn non_finite_floats_become_null() {
    assert_eq!(FieldValue::from(f64::NAN), FieldValue::Null);
    assert_eq!(FieldValue::from(f64::INFINITY), FieldValue::Null);
}

// ── Accessors & conversions ──────────────────────────────────────

#[test]
fn accessors_match_variant() {
    assert_eq!(FieldValue::from("s").as_str(), Some("s"));
    assert_eq!(FieldValue::from(true).as_bool(), Some(true));
    assert_eq!(FieldValue::from(2.5).as_number(), Some(2.5));
    assert_eq!(FieldValue::from(7i64).as_number(), Some(7.0));
    assert_eq!(FieldValue::from(true).as_str(), None);
    assert!(FieldValue::default().is_null());
}

#[test]
fn option_converts_to_null_when_absent() {
    assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
    assert_eq!(FieldValue::from(Some("x")), FieldValue::Text("x".into()));
}
