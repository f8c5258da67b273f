//! Compute API (Nova) client: "list servers" with marker pagination.

pub mod paginator;

pub use paginator::ServerPaginator;

use crate::config::EndpointSelection;
use crate::error::compute::ComputeError;
use crate::identity::Session;

use common::RedactedSecret;

use models::ServerRecord;

use std::num::NonZeroU32;

use log::{debug, trace};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const COMPUTE_SERVICE_TYPE: &str = "compute";
pub const COMPUTE_API_VERSION: &str = "2.1";

const AUTH_TOKEN_HEADER: &str = "x-auth-token";
const API_VERSION_HEADER: &str = "x-openstack-nova-api-version";
const SERVERS_DETAIL_ENDPOINT: &str = "servers/detail";
const LIMIT_PARAM: &str = "limit";
const MARKER_PARAM: &str = "marker";

/// The one call the inventory needs from the compute service.
#[allow(async_fn_in_trait)]
pub trait ComputeApi {
    /// Up to `limit` servers ordered after `marker` (from the start when `None`).
    async fn list_servers(
        &self,
        marker: Option<&str>,
        limit: NonZeroU32,
    ) -> Result<Vec<ServerRecord>, ComputeError>;
}

#[derive(Debug, Deserialize)]
struct ServersPage {
    servers: Vec<ServerRecord>,
}

/// HTTP client bound to one compute endpoint and one token.
#[derive(Debug, Clone)]
pub struct ComputeClient {
    base_url: Url,
    client: Client,
    token: RedactedSecret,
}

impl ComputeClient {
    /// Pick the compute endpoint out of the session's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::EndpointNotFound`] when no compute endpoint
    /// matches the interface (and region, if set).
    pub fn from_session(
        session: &Session,
        selection: &EndpointSelection,
    ) -> Result<Self, ComputeError> {
        let endpoint = session
            .catalog()
            .endpoint_url(COMPUTE_SERVICE_TYPE, selection)
            .ok_or_else(|| {
                ComputeError::endpoint_not_found(format!(
                    "no {} endpoint for service type '{COMPUTE_SERVICE_TYPE}'{}",
                    selection.interface,
                    selection
                        .region
                        .as_deref()
                        .map(|region| format!(" in region '{region}'"))
                        .unwrap_or_default()
                ))
            })?;

        debug!("Using compute endpoint {endpoint} ({})", selection.interface);

        Self::new(endpoint, session.http_client().clone(), session.token().clone())
    }

    /// Bind directly to `endpoint` with an existing token.
    pub fn new(endpoint: &str, client: Client, token: RedactedSecret) -> Result<Self, ComputeError> {
        // Url::join drops the last path segment unless the base ends in '/'.
        let base_url = if endpoint.ends_with('/') {
            Url::parse(endpoint)?
        } else {
            Url::parse(&format!("{endpoint}/"))?
        };

        Ok(Self {
            base_url,
            client,
            token,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn servers_url(&self, marker: Option<&str>, limit: NonZeroU32) -> Result<Url, ComputeError> {
        let mut url = self.base_url.join(SERVERS_DETAIL_ENDPOINT)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(LIMIT_PARAM, &limit.to_string());
            if let Some(marker) = marker {
                query.append_pair(MARKER_PARAM, marker);
            }
        }
        Ok(url)
    }
}

impl ComputeApi for ComputeClient {
    async fn list_servers(
        &self,
        marker: Option<&str>,
        limit: NonZeroU32,
    ) -> Result<Vec<ServerRecord>, ComputeError> {
        let url = self.servers_url(marker, limit)?;

        trace!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(AUTH_TOKEN_HEADER, self.token.expose())
            .header(API_VERSION_HEADER, COMPUTE_API_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ComputeError::from_http_response(
                response.status().as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        // Straight from bytes: a serde_json::Value would sort the network names.
        let body = response.bytes().await?;
        let page: ServersPage = serde_json::from_slice(&body)?;

        debug!(
            "Fetched {} servers (marker: {})",
            page.servers.len(),
            marker.unwrap_or("<none>")
        );

        Ok(page.servers)
    }
}
