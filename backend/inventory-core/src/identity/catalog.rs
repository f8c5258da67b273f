//! Service catalog returned alongside an identity token.

use crate::config::EndpointSelection;

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogEndpoint {
    pub interface: String,
    pub url: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_id: Option<String>,
}

impl CatalogEndpoint {
    fn in_region(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region) || self.region_id.as_deref() == Some(region)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogService {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<CatalogEndpoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    pub services: Vec<CatalogService>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<CatalogService>) -> Self {
        Self { services }
    }

    /// URL of the first endpoint of `service_type` matching the selection.
    ///
    /// Services are scanned in catalog order, endpoints in service order.
    pub fn endpoint_url(&self, service_type: &str, selection: &EndpointSelection) -> Option<&str> {
        let interface = selection.interface.as_str();

        self.services
            .iter()
            .filter(|service| service.service_type == service_type)
            .flat_map(|service| service.endpoints.iter())
            .find(|endpoint| {
                endpoint.interface == interface
                    && selection
                        .region
                        .as_deref()
                        .is_none_or(|region| endpoint.in_region(region))
            })
            .map(|endpoint| endpoint.url.as_str())
    }
}
