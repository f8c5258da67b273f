use crate::helpers::{TEST_TOKEN, server_json};

use inventory_core::compute::COMPUTE_API_VERSION;
use inventory_core::error::ComputeError;
use inventory_core::http::build_client;
use inventory_core::identity::{CatalogEndpoint, CatalogService, ServiceCatalog};
use inventory_core::inventory::host_vars;
use inventory_core::{ComputeApi, ComputeClient, EndpointSelection, Session};

use common::RedactedSecret;

use std::num::NonZeroU32;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ComputeClient {
    ComputeClient::new(
        &format!("{}/v2.1", server.uri()),
        build_client(Duration::from_secs(5)).unwrap(),
        RedactedSecret::new(TEST_TOKEN),
    )
    .unwrap()
}

fn limit(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap()
}

/// **VALUE**: Verifies the request carries the token, the microversion and the paging query.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` replacing the `/v2.1` segment, or the
/// marker being sent on the first page.
#[tokio::test]
async fn given_first_page_when_listing_then_headers_and_limit_sent() {
    // GIVEN: A compute service expecting auth headers
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.1/servers/detail"))
        .and(query_param("limit", "2"))
        .and(header("x-auth-token", TEST_TOKEN))
        .and(header("x-openstack-nova-api-version", COMPUTE_API_VERSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [server_json("a", None), server_json("b", Some("x"))]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Listing the first page
    let servers = client_for(&server).list_servers(None, limit(2)).await.unwrap();

    // THEN: Both servers decoded, IPv6 kept in the raw record
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[1].metadata_value("stack"), Some("x"));
    assert_eq!(servers[0].addresses["public"].len(), 2);

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query_pairs().all(|(k, _)| k != "marker"));
}

#[tokio::test]
async fn given_marker_when_listing_then_marker_query_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.1/servers/detail"))
        .and(query_param("limit", "100"))
        .and(query_param("marker", "abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"servers": []})))
        .expect(1)
        .mount(&server)
        .await;

    let servers = client_for(&server)
        .list_servers(Some("abc-123"), limit(100))
        .await
        .unwrap();

    assert!(servers.is_empty());
}

/// **VALUE**: Verifies networks keep the order the compute API sent them in, all the way
/// into host vars.
///
/// **WHY THIS MATTERS**: Without the preferred network, `ansible_host` is the first address of
/// the first network in provider order. Sorted names would hand Ansible a different address.
///
/// **BUG THIS CATCHES**: Would catch decoding through `serde_json::Value`, whose default map
/// sorts keys.
#[tokio::test]
async fn given_unsorted_networks_when_listing_then_provider_order_kept() {
    // GIVEN: A raw body with "zeta" before "alpha"
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2.1/servers/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"servers":[{"id":"s1","name":"app","addresses":{"zeta":[{"addr":"10.9.9.9","version":4}],"alpha":[{"addr":"10.1.1.1","version":4}]}}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    // WHEN: Listing and building host vars without the preferred network
    let servers = client_for(&server).list_servers(None, limit(10)).await.unwrap();
    let vars = host_vars::build(&servers[0], "somethingweird");

    // THEN: Provider order, and the first network's address wins
    let networks: Vec<&str> = servers[0].addresses.keys().map(String::as_str).collect();
    assert_eq!(networks, vec!["zeta", "alpha"]);
    assert_eq!(vars.ansible_host.as_deref(), Some("10.9.9.9"));
}

/// **VALUE**: Verifies null name, addresses and metadata degrade to absent or empty values.
///
/// **WHY THIS MATTERS**: One odd server (building, errored) must not hide the whole fleet.
#[tokio::test]
async fn given_server_with_null_fields_when_listing_then_decoded_with_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [{"id": "n1", "name": null, "addresses": null, "metadata": null}]
        })))
        .mount(&server)
        .await;

    let servers = client_for(&server).list_servers(None, limit(10)).await.unwrap();

    assert_eq!(servers[0].id, "n1");
    assert_eq!(servers[0].name, None);
    assert!(servers[0].addresses.is_empty());
    assert!(servers[0].metadata.is_empty());
}

/// **VALUE**: Verifies a 5xx maps to `ComputeError::Server` with the status.
#[tokio::test]
async fn given_server_error_when_listing_then_compute_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("nova exploded"))
        .mount(&server)
        .await;

    let error = client_for(&server).list_servers(None, limit(10)).await.unwrap_err();

    match error {
        ComputeError::Server {
            status, message, ..
        } => {
            assert_eq!(status.0, 500);
            assert_eq!(message, "nova exploded");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[tokio::test]
async fn given_body_without_servers_key_when_listing_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let error = client_for(&server).list_servers(None, limit(10)).await.unwrap_err();

    assert!(matches!(error, ComputeError::Json { .. }));
}

/// **VALUE**: Verifies endpoint selection out of a session catalog.
#[test]
fn given_catalog_without_compute_when_binding_then_endpoint_not_found() {
    let session = Session::new(
        build_client(Duration::from_secs(5)).unwrap(),
        RedactedSecret::new(TEST_TOKEN),
        ServiceCatalog::new(vec![CatalogService {
            service_type: String::from("image"),
            name: None,
            endpoints: vec![CatalogEndpoint {
                interface: String::from("public"),
                url: String::from("https://glance/"),
                region: None,
                region_id: None,
            }],
        }]),
    );

    let error = ComputeClient::from_session(&session, &EndpointSelection::default()).unwrap_err();

    assert!(matches!(error, ComputeError::EndpointNotFound { .. }));
    assert!(error.to_string().contains("compute"));
}

#[test]
fn given_endpoint_without_trailing_slash_when_binding_then_base_url_keeps_version() {
    let client = ComputeClient::new(
        "https://nova.example:8774/v2.1",
        build_client(Duration::from_secs(5)).unwrap(),
        RedactedSecret::new(TEST_TOKEN),
    )
    .unwrap();

    assert_eq!(client.base_url().as_str(), "https://nova.example:8774/v2.1/");
}
