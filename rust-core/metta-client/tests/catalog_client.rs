// SPDX-License-Identifier: PMPL-1.0-or-later
//! Catalog client tests against a mock catalog server.
//!
//! Each test starts its own `httpmock` server mounted under `/api/metta`, the
//! same prefix the real backend uses.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::{json, Value};

use metta_client::{
    CatalogClient, CatalogError, ClientConfig, Record, SearchFilters, ValidationStatus,
    ValidationUpdate,
};

const PREFIX: &str = "/api/metta";

fn endpoint(server: &MockServer) -> String {
    server.url(PREFIX)
}

fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(ClientConfig::default().with_endpoint(endpoint(server))).unwrap()
}

/// A client pointing at a port nothing listens on.
fn unreachable_client() -> CatalogClient {
    CatalogClient::new(
        ClientConfig::default()
            .with_endpoint("http://127.0.0.1:1/api/metta")
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap()
}

fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn sample_dataset(token_id: &str, name: &str) -> Record {
    record(json!({
        "tokenId": token_id,
        "cid": "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi",
        "metadata": {
            "name": name,
            "category": "Computer Vision",
            "size": "2.4GB"
        },
        "validation": { "status": "verified", "score": 92 }
    }))
}

// ---------------------------------------------------------------------------
// store
// ---------------------------------------------------------------------------

#[test]
fn test_store_posts_record_verbatim() {
    let server = MockServer::start();
    let dataset = sample_dataset("7", "Street Scenes");

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/metta/store")
            .json_body(Value::Object(dataset.clone()));
        then.status(201);
    });

    let client = client_for(&server);
    assert!(client.store_dataset(&dataset));
    mock.assert();
}

#[test]
fn test_store_returns_false_on_server_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/metta/store");
        then.status(500).body("knowledge graph offline");
    });

    let client = client_for(&server);
    let dataset = sample_dataset("7", "Street Scenes");
    assert!(!client.store_dataset(&dataset));

    match client.try_store_dataset(&dataset) {
        Err(CatalogError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "knowledge graph offline");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    mock.assert_hits(2);
}

#[test]
fn test_store_ignores_non_json_success_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/metta/store");
        then.status(200).body("stored");
    });

    assert!(client_for(&server).store_dataset(&sample_dataset("1", "Bird Calls")));
}

#[test]
fn test_transport_detail_names_the_cause() {
    let err = unreachable_client()
        .try_store_dataset(&sample_dataset("1", "Bird Calls"))
        .unwrap_err();
    let detail = err.detail();

    assert!(detail.starts_with(&err.to_string()));
    assert!(detail.len() > err.to_string().len(), "no cause in: {detail}");
    assert!(
        detail.to_lowercase().contains("connect"),
        "cause missing from: {detail}"
    );
}

#[test]
fn test_store_returns_false_when_unreachable() {
    let client = unreachable_client();
    assert!(!client.store_dataset(&sample_dataset("1", "Bird Calls")));
    assert!(matches!(
        client.try_store_dataset(&sample_dataset("1", "Bird Calls")),
        Err(CatalogError::Transport(_))
    ));
}

// ---------------------------------------------------------------------------
// query
// ---------------------------------------------------------------------------

#[test]
fn test_query_sends_filters_and_returns_datasets() {
    let server = MockServer::start();
    let datasets = json!([
        {"tokenId": "1", "metadata": {"name": "Street Scenes"}},
        {"tokenId": "3", "metadata": {"name": "Aerial Farmland"}}
    ]);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/metta/search")
            .json_body(json!({"category": "Computer Vision", "min_quality_score": 80}));
        then.status(200)
            .json_body(json!({"datasets": datasets.clone(), "total": 2}));
    });

    let client = client_for(&server);
    let filters = SearchFilters::new()
        .category("Computer Vision")
        .min_quality_score(80);
    let found = client.query_datasets(&filters);

    mock.assert();
    assert_eq!(Value::Array(found.into_iter().map(Value::Object).collect()), datasets);
}

#[test]
fn test_query_without_datasets_key_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/metta/search");
        then.status(200).json_body(json!({"total": 0}));
    });

    let client = client_for(&server);
    let filters = SearchFilters::new().validation_status(ValidationStatus::Verified);
    assert!(client.query_datasets(&filters).is_empty());
    assert!(client.try_query_datasets(&filters).unwrap().is_empty());
}

#[test]
fn test_query_failure_is_empty_but_strict_form_reports_it() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/metta/search");
        then.status(503);
    });

    let client = client_for(&server);
    let filters = SearchFilters::new().seller("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6");

    assert!(client.query_datasets(&filters).is_empty());
    match client.try_query_datasets(&filters) {
        Err(CatalogError::Status { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn test_query_malformed_body_is_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/metta/search");
        then.status(200).body("<html>gateway</html>");
    });

    let client = client_for(&server);
    let filters = SearchFilters::new().min_size("1GB");
    assert!(client.query_datasets(&filters).is_empty());
    assert!(matches!(
        client.try_query_datasets(&filters),
        Err(CatalogError::Decode(_))
    ));
}

#[test]
fn test_query_unreachable_is_empty() {
    let client = unreachable_client();
    assert!(client
        .query_datasets(&SearchFilters::new().category("Audio"))
        .is_empty());
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn test_get_dataset_decodes_body() {
    let server = MockServer::start();
    let dataset = sample_dataset("42", "Handwritten Digits");

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/metta/dataset/42");
        then.status(200).json_body(Value::Object(dataset.clone()));
    });

    let client = client_for(&server);
    assert_eq!(client.get_dataset("42"), Some(dataset));
    mock.assert();
}

#[test]
fn test_get_dataset_not_found_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/metta/dataset/404");
        then.status(404).json_body(json!({"error": "Dataset not found"}));
    });

    let client = client_for(&server);
    assert_eq!(client.get_dataset("404"), None);
    assert!(matches!(
        client.try_get_dataset("404"),
        Err(CatalogError::Status { status: 404, .. })
    ));
}

#[test]
fn test_get_dataset_unreachable_is_none() {
    assert_eq!(unreachable_client().get_dataset("42"), None);
}

#[test]
fn test_get_dataset_twice_is_identical() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/metta/dataset/5");
        then.status(200)
            .json_body(Value::Object(sample_dataset("5", "Traffic Signs")));
    });

    let client = client_for(&server);
    let first = client.get_dataset("5");
    let second = client.get_dataset("5");

    assert!(first.is_some());
    assert_eq!(first, second);
    mock.assert_hits(2);
}

#[test]
fn test_get_dataset_non_object_body_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/metta/dataset/9");
        then.status(200).json_body(json!(["not", "a", "record"]));
    });

    assert_eq!(client_for(&server).get_dataset("9"), None);
}

// ---------------------------------------------------------------------------
// update validation
// ---------------------------------------------------------------------------

#[test]
fn test_update_validation_passes_record_through() {
    let server = MockServer::start();
    let update = ValidationUpdate::new(
        ValidationStatus::Verified,
        95,
        "QmNewAttestation123",
        "0xNewValidator123",
    );
    let expected = serde_json::to_value(&update).unwrap();

    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/metta/dataset/1/validation")
            .json_body(expected.clone());
        then.status(204);
    });

    let client = client_for(&server);
    assert!(client.update_validation("1", &update));
    mock.assert();
}

#[test]
fn test_update_validation_raw_record() {
    let server = MockServer::start();
    let raw = record(json!({
        "status": "failed",
        "score": 12,
        "attestationCID": "QmBad",
        "validator": "0xValidator",
        "timestamp": "2026-10-19T08:15:00Z",
        "notes": "schema mismatch"
    }));

    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/metta/dataset/3/validation")
            .json_body(Value::Object(raw.clone()));
        then.status(200);
    });

    assert!(client_for(&server).update_validation("3", &raw));
    mock.assert();
}

#[test]
fn test_update_validation_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/api/metta/dataset/1/validation");
        then.status(403);
    });

    let update = ValidationUpdate::new(ValidationStatus::Failed, 10, "QmX", "0xV");
    assert!(!client_for(&server).update_validation("1", &update));
}

// ---------------------------------------------------------------------------
// provenance
// ---------------------------------------------------------------------------

#[test]
fn test_get_provenance() {
    let server = MockServer::start();
    let provenance = json!({
        "tokenId": "1",
        "events": [
            {"type": "minted", "actor": "0xSeller"},
            {"type": "validated", "actor": "0xValidator"}
        ]
    });

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/metta/dataset/1/provenance");
        then.status(200).json_body(provenance.clone());
    });

    let client = client_for(&server);
    assert_eq!(client.get_provenance("1").map(Value::Object), Some(provenance));
    mock.assert();
}

#[test]
fn test_get_provenance_failure_is_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/metta/dataset/1/provenance");
        then.status(500);
    });

    assert_eq!(client_for(&server).get_provenance("1"), None);
}

// ---------------------------------------------------------------------------
// auth
// ---------------------------------------------------------------------------

#[test]
fn test_credential_sent_on_every_request() {
    let server = MockServer::start();
    let store = server.mock(|when, then| {
        when.method(POST)
            .path("/api/metta/store")
            .header("authorization", "Bearer s3cret");
        then.status(200);
    });
    let get = server.mock(|when, then| {
        when.method(GET)
            .path("/api/metta/dataset/1")
            .header("authorization", "Bearer s3cret");
        then.status(200).json_body(json!({"tokenId": "1"}));
    });
    let provenance = server.mock(|when, then| {
        when.method(GET)
            .path("/api/metta/dataset/1/provenance")
            .header("authorization", "Bearer s3cret");
        then.status(200).json_body(json!({"events": []}));
    });

    let search = server.mock(|when, then| {
        when.method(POST)
            .path("/api/metta/search")
            .header("authorization", "Bearer s3cret");
        then.status(200).json_body(json!({"datasets": [{"tokenId": "1"}]}));
    });
    let validation = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/metta/dataset/1/validation")
            .header("authorization", "Bearer s3cret");
        then.status(204);
    });

    let client = CatalogClient::new(
        ClientConfig::default()
            .with_endpoint(endpoint(&server))
            .with_credential("s3cret"),
    )
    .unwrap();

    let update = ValidationUpdate::new(ValidationStatus::Verified, 90, "QmAttest", "0xV");
    assert!(client.store_dataset(&sample_dataset("1", "Bird Calls")));
    assert_eq!(client.query_datasets(&SearchFilters::new().category("Audio")).len(), 1);
    assert!(client.get_dataset("1").is_some());
    assert!(client.update_validation("1", &update));
    assert!(client.get_provenance("1").is_some());

    store.assert();
    search.assert();
    get.assert();
    validation.assert();
    provenance.assert();
}

#[test]
fn test_no_credential_no_header() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/metta/search")
            .matches(|req| {
                req.headers.as_ref().map_or(true, |headers| {
                    !headers
                        .iter()
                        .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                })
            });
        then.status(200).json_body(json!({"datasets": []}));
    });

    let client = client_for(&server);
    assert!(client.try_query_datasets(&SearchFilters::new()).unwrap().is_empty());
    mock.assert();
}

// ---------------------------------------------------------------------------
// timeout
// ---------------------------------------------------------------------------

#[test]
fn test_timeout_is_a_transport_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/metta/dataset/1");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .json_body(json!({"tokenId": "1"}));
    });

    let client = CatalogClient::new(
        ClientConfig::default()
            .with_endpoint(endpoint(&server))
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    assert!(matches!(
        client.try_get_dataset("1"),
        Err(CatalogError::Transport(_))
    ));
    assert_eq!(client.get_dataset("1"), None);
}
