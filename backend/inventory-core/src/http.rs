use std::time::Duration;

use const_format::concatcp;
use reqwest::Client;

const USER_AGENT: &str = concatcp!("os-inventory/", env!("CARGO_PKG_VERSION"));

/// The one HTTP client shared by the identity and compute calls.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
