use crate::config::{EndpointInterface, EndpointSelection};
use crate::identity::{CatalogEndpoint, CatalogService, ServiceCatalog};

use serde_json::json;

fn endpoint(interface: &str, url: &str, region: &str) -> CatalogEndpoint {
    CatalogEndpoint {
        interface: interface.to_string(),
        url: url.to_string(),
        region: Some(region.to_string()),
        region_id: Some(region.to_string()),
    }
}

fn catalog() -> ServiceCatalog {
    ServiceCatalog::new(vec![
        CatalogService {
            service_type: String::from("identity"),
            name: Some(String::from("keystone")),
            endpoints: vec![endpoint("public", "https://id.example/v3", "one")],
        },
        CatalogService {
            service_type: String::from("compute"),
            name: Some(String::from("nova")),
            endpoints: vec![
                endpoint("internal", "http://nova.internal:8774/v2.1", "one"),
                endpoint("public", "https://nova.one.example/v2.1", "one"),
                endpoint("public", "https://nova.two.example/v2.1", "two"),
            ],
        },
    ])
}

fn selection(interface: EndpointInterface, region: Option<&str>) -> EndpointSelection {
    EndpointSelection {
        interface,
        region: region.map(str::to_owned),
    }
}

/// **VALUE**: Verifies the default selection returns the first public compute endpoint.
///
/// **BUG THIS CATCHES**: Would catch picking the first endpoint regardless of interface.
#[test]
fn given_default_selection_when_looking_up_compute_then_first_public_url() {
    let catalog = catalog();

    let url = catalog.endpoint_url("compute", &EndpointSelection::default());

    assert_eq!(url, Some("https://nova.one.example/v2.1"));
}

/// **VALUE**: Verifies the region narrows the match.
///
/// **WHY THIS MATTERS**: Multi-region clouds list every region's endpoint; the wrong one
/// inventories the wrong fleet.
#[test]
fn given_region_when_looking_up_compute_then_region_endpoint() {
    let catalog = catalog();

    let url = catalog.endpoint_url("compute", &selection(EndpointInterface::Public, Some("two")));

    assert_eq!(url, Some("https://nova.two.example/v2.1"));
}

#[test]
fn given_internal_interface_when_looking_up_compute_then_internal_url() {
    let catalog = catalog();

    let url = catalog.endpoint_url("compute", &selection(EndpointInterface::Internal, None));

    assert_eq!(url, Some("http://nova.internal:8774/v2.1"));
}

#[test]
fn given_unknown_region_or_service_when_looking_up_then_none() {
    let catalog = catalog();

    assert_eq!(
        catalog.endpoint_url("compute", &selection(EndpointInterface::Public, Some("three"))),
        None
    );
    assert_eq!(
        catalog.endpoint_url("image", &EndpointSelection::default()),
        None
    );
}

/// **VALUE**: Verifies the catalog decodes from the identity service's JSON shape.
#[test]
fn given_keystone_catalog_json_when_decoded_then_type_field_mapped() {
    let value = json!([
        {
            "type": "compute",
            "id": "abc",
            "endpoints": [
                {"id": "e1", "interface": "public", "region": "RegionOne",
                 "region_id": "RegionOne", "url": "https://nova/v2.1"}
            ]
        }
    ]);

    let catalog: ServiceCatalog = serde_json::from_value(value).unwrap();

    assert_eq!(catalog.services.len(), 1);
    assert_eq!(catalog.services[0].service_type, "compute");
    assert_eq!(catalog.services[0].name, None);
    assert_eq!(
        catalog.endpoint_url("compute", &selection(EndpointInterface::Public, Some("RegionOne"))),
        Some("https://nova/v2.1")
    );
}
