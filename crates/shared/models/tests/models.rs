use csc_models::{
    ApiDetectRpmsRequest, ApiDetectRpmsResponse, ApiFeature, ApiFeatureSet, ApiModel,
    ApiRepositoryRpm, ApiRepositoryRpmCollectionResponse, ApiSearchRpmRequest, ApiSearchRpmResponse,
    ApiSnapshotErrataCollectionResponse, ApiSnapshotRpmCollectionResponse, ApiUuidListRequest,
    decode_map, encode_map, registry,
};
use std::collections::BTreeMap;
use serde_json::json;

#[test]
fn collection_response_decodes_nested_records() {
    let payload = json!({
        "data": [
            { "uuid": "r-1", "name": "bash", "arch": "x86_64", "epoch": 0, "checksum": "aa" },
            { "uuid": "r-2", "name": "zsh", "epoch": 1 }
        ],
        "meta": { "limit": 100, "offset": 0, "count": 2 },
        "links": { "first": "/rpms?offset=0", "last": "/rpms?offset=0" }
    });

    let page = ApiRepositoryRpmCollectionResponse::from_json(&payload).unwrap();
    let data = page.data.as_deref().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].name.as_deref(), Some("bash"));
    assert_eq!(data[1].epoch, Some(1));
    assert_eq!(data[1].arch, None);
    assert_eq!(page.meta.as_ref().and_then(|m| m.count), Some(2));
    assert_eq!(page.links.as_ref().and_then(|l| l.next.clone()), None);
}

#[test]
fn collection_response_encodes_nested_absent_fields() {
    let page = ApiRepositoryRpmCollectionResponse {
        data: Some(vec![ApiRepositoryRpm { name: Some("bash".to_owned()), ..Default::default() }]),
        ..Default::default()
    };

    assert_eq!(
        page.to_json_value(),
        json!({
            "data": [{
                "uuid": null, "name": "bash", "arch": null, "version": null,
                "release": null, "epoch": null, "summary": null, "checksum": null
            }],
            "meta": null,
            "links": null
        })
    );
}

#[test]
fn nested_record_of_wrong_type_is_absent() {
    let page = ApiRepositoryRpmCollectionResponse::from_json(&json!({
        "data": "oops",
        "meta": [1, 2],
        "links": { "first": "/a" }
    }))
    .unwrap();

    assert_eq!(page.data, None);
    assert_eq!(page.meta, None);
    assert_eq!(page.links.and_then(|l| l.first).as_deref(), Some("/a"));
}

#[test]
fn snake_case_wire_keys() {
    let hit = ApiSearchRpmResponse::from_json(&json!({
        "package_name": "bash",
        "packageName": "ignored",
        "summary": "GNU shell"
    }))
    .unwrap();
    assert_eq!(hit.package_name.as_deref(), Some("bash"));
    assert_eq!(ApiSearchRpmResponse::FIELDS, ["package_name", "summary", "package_sources"]);
}

#[test]
fn detect_response_lists() {
    let detected =
        ApiDetectRpmsResponse::from_json(&json!({ "found": ["bash"], "missing": [] })).unwrap();
    assert_eq!(detected.found, Some(vec!["bash".to_owned()]));
    assert_eq!(detected.missing, Some(Vec::new()));

    let mixed = ApiDetectRpmsResponse::from_json(&json!({ "found": ["bash", 3] })).unwrap();
    assert_eq!(mixed.found, None);
}

#[test]
fn feature_set_maps_each_entry() {
    let payload = json!({
        "snapshots": { "accessible": true, "enabled": true },
        "admintasks": { "accessible": false }
    });

    let features: ApiFeatureSet = decode_map(&payload).unwrap();
    assert_eq!(features.len(), 2);
    assert_eq!(features["snapshots"], ApiFeature { accessible: Some(true), enabled: Some(true) });
    assert_eq!(features["admintasks"].enabled, None);

    assert_eq!(
        encode_map(Some(&features)),
        json!({
            "admintasks": { "accessible": false, "enabled": null },
            "snapshots": { "accessible": true, "enabled": true }
        })
    );
    assert!(decode_map::<ApiFeature>(&serde_json::Value::Null).is_none());
}

#[test]
fn feature_set_can_keep_null_entries() {
    let payload = json!({ "snapshots": null, "admintasks": { "enabled": true } });

    let features: ApiFeatureSet = decode_map(&payload).unwrap();
    assert_eq!(features.keys().collect::<Vec<_>>(), ["admintasks"]);

    let nullable: BTreeMap<String, Option<ApiFeature>> = decode_map(&payload).unwrap();
    assert_eq!(nullable["snapshots"], None);
    assert_eq!(nullable["admintasks"].as_ref().and_then(|f| f.enabled), Some(true));
    assert_eq!(encode_map(Some(&nullable))["snapshots"], serde_json::Value::Null);
}

#[test]
fn search_response_keeps_package_sources() {
    let payload = json!({
        "package_name": "nodejs",
        "summary": "JavaScript runtime",
        "package_sources": [
            { "type": "package", "arch": "x86_64", "version": "16.20.2" },
            {
                "type": "module", "name": "nodejs", "stream": "18", "context": "rhel9",
                "arch": "x86_64", "version": "9010020221",
                "description": "Node.js 18", "start_date": "2022-11-15", "end_date": "2025-04-30"
            }
        ]
    });

    let hit = ApiSearchRpmResponse::from_json(&payload).unwrap();
    let sources = hit.package_sources.as_deref().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0].r#type.as_deref(), Some("package"));
    assert_eq!(sources[0].stream, None);
    assert_eq!(sources[1].end_date.as_deref(), Some("2025-04-30"));

    let normalized = registry::find("api-search-rpm-response").unwrap().normalize(&payload);
    assert_eq!(normalized["package_sources"][1]["stream"], "18");
    assert_eq!(normalized["package_sources"][0]["name"], serde_json::Value::Null);
}

#[test]
fn request_bodies_encode_every_key() {
    let search = ApiSearchRpmRequest {
        uuids: Some(vec!["r-1".to_owned()]),
        search: Some("ba".to_owned()),
        limit: Some(50),
        ..Default::default()
    };
    assert_eq!(
        search.to_json_value(),
        json!({ "urls": null, "uuids": ["r-1"], "search": "ba", "limit": 50 })
    );

    let detect = ApiDetectRpmsRequest {
        urls: Some(vec!["https://example.com/repo/".to_owned()]),
        rpm_names: Some(vec!["bash".to_owned(), "zsh".to_owned()]),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&detect).unwrap(),
        json!({
            "urls": ["https://example.com/repo/"],
            "uuids": null,
            "rpm_names": ["bash", "zsh"],
            "limit": null
        })
    );

    let uuids = ApiUuidListRequest { uuids: Some(vec!["a".to_owned(), "b".to_owned()]) };
    assert_eq!(ApiUuidListRequest::to_json(Some(&uuids)), json!({ "uuids": ["a", "b"] }));
}

#[test]
fn snapshot_collections_decode() {
    let rpms = ApiSnapshotRpmCollectionResponse::from_json(&json!({
        "data": [{ "name": "bash", "epoch": "0", "release": "1.el9" }],
        "meta": { "count": 1 }
    }))
    .unwrap();
    let rpm = &rpms.data.as_deref().unwrap()[0];
    assert_eq!(rpm.epoch.as_deref(), Some("0"));
    assert_eq!(rpms.links, None);

    let errata = ApiSnapshotErrataCollectionResponse::from_json(&json!({
        "data": [{
            "id": "e-1",
            "errata_id": "RHSA-2024:0001",
            "type": "security",
            "updated_date": "2024-01-02",
            "reboot_suggested": true,
            "cves": ["CVE-2024-0001"]
        }]
    }))
    .unwrap();
    let advisory = &errata.data.as_deref().unwrap()[0];
    assert_eq!(advisory.r#type.as_deref(), Some("security"));
    assert_eq!(advisory.updated_date.as_deref(), Some("2024-01-02"));
    assert_eq!(advisory.reboot_suggested, Some(true));
    assert_eq!(advisory.cves.as_deref(), Some(&["CVE-2024-0001".to_owned()][..]));
}
