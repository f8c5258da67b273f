use crate::helpers::{TEST_TOKEN, credentials_for, server_json, token_body};

use inventory_core::identity::SUBJECT_TOKEN_HEADER;
use inventory_core::{
    ComputeClient, EndpointSelection, InventoryConfig, Session, collect_inventory,
};

use std::num::NonZeroU32;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies authenticate, endpoint selection and paging work together against
/// one fake cloud.
///
/// **WHY THIS MATTERS**: Each piece can pass alone while the catalog URL and the paging
/// path disagree about `/v2.1`.
///
/// **BUG THIS CATCHES**: Would catch the token not reaching compute calls or the scan
/// stopping on a short page without requesting the empty one.
#[tokio::test]
async fn given_fake_cloud_when_collecting_inventory_then_all_servers_grouped() {
    // GIVEN: Identity and compute on one mock server, three servers, page size 2
    let server = MockServer::start().await;
    let compute_url = format!("{}/compute/v2.1", server.uri());

    Mock::given(method("POST"))
        .and(path("/identity/v3/auth/tokens"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header(SUBJECT_TOKEN_HEADER, TEST_TOKEN)
                .set_body_json(token_body(&compute_url)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/compute/v2.1/servers/detail"))
        .and(query_param("marker", "s2"))
        .and(header("x-auth-token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [server_json("s3", None)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/compute/v2.1/servers/detail"))
        .and(query_param("marker", "s3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"servers": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/compute/v2.1/servers/detail"))
        .and(query_param("limit", "2"))
        .and(header("x-auth-token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [server_json("s1", Some("blue")), server_json("s2", Some("blue"))]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = InventoryConfig {
        page_size: NonZeroU32::new(2).unwrap(),
        ..InventoryConfig::default()
    };

    // WHEN: Running the whole pipeline
    let session = Session::authenticate(
        &credentials_for(&format!("{}/identity", server.uri())),
        config.timeout,
    )
    .await
    .unwrap();
    let compute = ComputeClient::from_session(&session, &EndpointSelection::default()).unwrap();
    let document = collect_inventory(&compute, &config).await.unwrap();

    // THEN: Every server present and grouped
    assert_eq!(document.host_count(), 3);
    assert_eq!(
        document.group("stack_blue").map(|g| g.hosts.clone()),
        Some(vec![String::from("s1"), String::from("s2")])
    );
    assert_eq!(
        document.hostvars()["s3"].ansible_host.as_deref(),
        Some("192.0.2.2")
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 4);
}
