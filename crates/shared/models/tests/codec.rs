use csc_models::{ApiFeature, ApiModel, ApiUpload, JsonObject};
use serde_json::{Value, json};

fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(object) => object,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn decodes_full_feature_pair() {
    let feature = ApiFeature::from_json(&json!({ "accessible": true, "enabled": false })).unwrap();
    assert_eq!(feature.accessible, Some(true));
    assert_eq!(feature.enabled, Some(false));
}

#[test]
fn decodes_partial_feature_pair() {
    let feature = ApiFeature::from_json(&json!({ "accessible": true })).unwrap();
    assert_eq!(feature, ApiFeature { accessible: Some(true), enabled: None });
}

#[test]
fn explicit_null_is_absent() {
    let upload = ApiUpload::from_json(&json!({ "href": null, "uuid": "abc-123" })).unwrap();
    assert_eq!(upload.href, None);
    assert_eq!(upload.uuid.as_deref(), Some("abc-123"));
}

#[test]
fn encodes_absent_field_as_null_key() {
    let upload = ApiUpload {
        href: Some("http://x".to_owned()),
        sha256: None,
        uuid: Some("abc-123".to_owned()),
    };
    let json = ApiUpload::to_json(Some(&upload));

    assert_eq!(json, json!({ "href": "http://x", "sha256": null, "uuid": "abc-123" }));
    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["href", "sha256", "uuid"]);
}

#[test]
fn null_propagates_both_ways() {
    assert!(ApiFeature::from_json(&Value::Null).is_none());
    assert!(ApiUpload::from_json(&Value::Null).is_none());
    assert_eq!(ApiFeature::to_json(None), Value::Null);
    assert_eq!(ApiUpload::to_json(None), Value::Null);
}

#[test]
fn instance_of_accepts_any_object() {
    assert!(ApiFeature::instance_of(&JsonObject::new()));
    assert!(ApiFeature::instance_of(&object(json!({ "accessible": "not a bool", "other": [1] }))));
    assert!(ApiUpload::instance_of(&object(json!({ "href": 42 }))));
}

#[test]
fn unknown_keys_are_dropped() {
    let input = json!({ "accessible": true, "enabled": true, "beta": "yes" });
    let out = ApiFeature::to_json(ApiFeature::from_json(&input).as_ref());
    assert_eq!(out, json!({ "accessible": true, "enabled": true }));
}

#[test]
fn wrong_type_only_affects_its_field() {
    let upload = ApiUpload::from_json(&json!({ "href": 7, "sha256": "beef", "uuid": ["a"] })).unwrap();
    assert_eq!(upload, ApiUpload { href: None, sha256: Some("beef".to_owned()), uuid: None });
}

#[test]
fn non_object_payload_decodes_to_empty_record() {
    assert_eq!(ApiFeature::from_json(&json!("text")), Some(ApiFeature::default()));
    assert_eq!(ApiUpload::from_json(&json!([1, 2])), Some(ApiUpload::default()));
}

#[test]
fn text_helpers_parse_and_print() {
    let feature = ApiFeature::from_json_str(r#"{"enabled":true}"#).unwrap().unwrap();
    assert_eq!(feature.enabled, Some(true));
    assert!(ApiFeature::from_json_str("null").unwrap().is_none());

    let text = ApiFeature::to_json_string(Some(&feature), false).unwrap();
    assert_eq!(text, r#"{"accessible":null,"enabled":true}"#);
    assert_eq!(ApiFeature::to_json_string(None, true).unwrap(), "null");
}

#[test]
fn malformed_text_is_an_error_with_context() {
    let err = ApiUpload::from_json_str("{\"href\": ").unwrap_err();
    assert!(err.to_string().starts_with("JSON error (Parsing ApiUpload payload)"), "{err}");
}

#[test]
fn declared_fields_are_listed_in_order() {
    assert_eq!(ApiFeature::NAME, "ApiFeature");
    assert_eq!(ApiFeature::FIELDS, ["accessible", "enabled"]);
    assert_eq!(ApiUpload::FIELDS, ["href", "sha256", "uuid"]);
}

#[test]
fn serde_follows_the_codec_rules() {
    let upload: ApiUpload = serde_json::from_value(json!({ "uuid": "u-1", "extra": true })).unwrap();
    assert_eq!(upload.uuid.as_deref(), Some("u-1"));
    assert_eq!(serde_json::to_value(&upload).unwrap(), ApiUpload::to_json(Some(&upload)));
}

#[test]
fn serde_treats_wrong_types_as_absent() {
    let payload = json!({ "href": 7, "uuid": "u-1" });

    let upload: ApiUpload = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(Some(&upload), ApiUpload::from_json(&payload).as_ref());
    assert_eq!(upload.href, None);

    let text: ApiUpload = serde_json::from_str(r#"{"href":7,"uuid":"u-1"}"#).unwrap();
    assert_eq!(text, upload);
}

#[test]
fn serde_propagates_null_through_option() {
    let feature: Option<ApiFeature> = serde_json::from_value(Value::Null).unwrap();
    assert_eq!(feature, None);
    assert_eq!(feature, ApiFeature::from_json(&Value::Null));

    let err = serde_json::from_value::<ApiFeature>(Value::Null).unwrap_err();
    assert!(err.to_string().contains("expected ApiFeature"), "{err}");
}

#[test]
fn serde_writes_every_declared_key() {
    let upload = ApiUpload { uuid: Some("u-1".to_owned()), ..Default::default() };
    assert_eq!(
        serde_json::to_string(&upload).unwrap(),
        r#"{"href":null,"sha256":null,"uuid":"u-1"}"#
    );
}
