use os_inventory::cli::{Cli, run_with_lookup};
use os_inventory::error::OsInventoryError;
use os_inventory::render::render_inventory;

use inventory_core::CoreError;
use inventory_core::error::{ConfigError, IdentityError};

use std::collections::HashMap;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "tok-e2e";

fn environment(auth_url: &str, extra: &[(&str, &str)]) -> HashMap<String, String> {
    let mut vars: HashMap<String, String> = [
        ("OS_AUTH_URL", auth_url),
        ("OS_USERNAME", "alice"),
        ("OS_PASSWORD", "hunter2"),
        ("OS_PROJECT_NAME", "ops"),
        ("OS_USER_DOMAIN_NAME", "Default"),
        ("OS_PROJECT_DOMAIN_NAME", "Default"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }
    vars
}

async fn mount_identity(server: &MockServer, compute_url: &str) {
    Mock::given(method("POST"))
        .and(path("/v3/auth/tokens"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-Subject-Token", TOKEN)
                .set_body_json(json!({
                    "token": {
                        "catalog": [{
                            "type": "compute",
                            "endpoints": [
                                {"interface": "public", "region": "RegionOne", "url": compute_url}
                            ]
                        }]
                    }
                })),
        )
        .mount(server)
        .await;
}

/// **VALUE**: Verifies a full run against a fake cloud produces the expected inventory.
///
/// **WHY THIS MATTERS**: This is what `ansible-playbook -i os-inventory` sees.
///
/// **BUG THIS CATCHES**: Would catch settings read from the wrong variables, or the
/// lookup not reaching one of the loaders.
#[tokio::test]
async fn given_fake_cloud_when_running_then_inventory_document() {
    // GIVEN: One tagged server, page size 1 from the environment
    let server = MockServer::start().await;
    let compute_url = format!("{}/v2.1", server.uri());
    mount_identity(&server, &compute_url).await;

    Mock::given(method("GET"))
        .and(path("/v2.1/servers/detail"))
        .and(query_param("marker", "srv-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"servers": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2.1/servers/detail"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "servers": [{
                "id": "srv-1",
                "name": "web-1",
                "addresses": {"mgmt": [{"addr": "10.1.0.7", "version": 4}]},
                "metadata": {"stack": "blue", "group": "web"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let vars = environment(
        &server.uri(),
        &[
            ("OS_INVENTORY_PAGE_SIZE", "1"),
            ("OS_INVENTORY_PREFERRED_NETWORK", "mgmt"),
        ],
    );
    let cli = Cli {
        list: true,
        refresh: false,
    };

    // WHEN: Running and rendering
    let document = run_with_lookup(&cli, |name| vars.get(name).cloned())
        .await
        .unwrap();
    let text = render_inventory(&document).unwrap();

    // THEN: The whole document
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed,
        json!({
            "_meta": {"hostvars": {"srv-1": {
                "server_id": "srv-1",
                "server_name": "web-1",
                "addresses": {"mgmt": ["10.1.0.7"]},
                "ansible_host": "10.1.0.7"
            }}},
            "stack_blue": {"vars": {"stack": "blue"}, "hosts": ["srv-1"]},
            "group_web": {"vars": {"group": "web"}, "hosts": ["srv-1"]},
            "stack_blue_web": {"hosts": ["srv-1"]}
        })
    );
}

/// **VALUE**: Verifies a refused password ends the run before any compute call.
#[tokio::test]
async fn given_rejected_credentials_when_running_then_identity_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"servers": []})))
        .expect(0)
        .mount(&server)
        .await;

    let vars = environment(&server.uri(), &[]);
    let error = run_with_lookup(&Cli::default(), |name| vars.get(name).cloned())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OsInventoryError::Core(CoreError::Identity(IdentityError::Rejected { .. }))
    ));
}

/// **VALUE**: Verifies bad settings fail fast without contacting the cloud.
#[tokio::test]
async fn given_invalid_page_size_when_running_then_config_error_and_no_requests() {
    let server = MockServer::start().await;

    let vars = environment(&server.uri(), &[("OS_INVENTORY_PAGE_SIZE", "zero")]);
    let error = run_with_lookup(&Cli::default(), |name| vars.get(name).cloned())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        OsInventoryError::Core(CoreError::Config(ConfigError::Parse { .. }))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// **VALUE**: Verifies a region with no compute endpoint is reported, not ignored.
#[tokio::test]
async fn given_unknown_region_when_running_then_endpoint_not_found() {
    let server = MockServer::start().await;
    mount_identity(&server, &format!("{}/v2.1", server.uri())).await;

    let vars = environment(&server.uri(), &[("OS_REGION_NAME", "RegionTwo")]);
    let error = run_with_lookup(&Cli::default(), |name| vars.get(name).cloned())
        .await
        .unwrap_err();

    assert!(error.to_string().contains("RegionTwo"));
}
