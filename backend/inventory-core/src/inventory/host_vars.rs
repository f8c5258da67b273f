use models::{HostVars, ServerRecord};

use indexmap::IndexMap;

/// Host variables for one server. Pure: depends only on the record and the
/// preferred network name.
pub fn build(server: &ServerRecord, preferred_network: &str) -> HostVars {
    let addresses = ipv4_addresses(server);
    let ansible_host = select_ansible_host(&addresses, preferred_network).map(str::to_owned);

    HostVars {
        server_id: server.id.clone(),
        server_name: server.name.clone(),
        addresses,
        ansible_host,
    }
}

/// Network name to IPv4 addresses, provider order. Networks without an
/// IPv4 address keep an empty list.
pub fn ipv4_addresses(server: &ServerRecord) -> IndexMap<String, Vec<String>> {
    server
        .addresses
        .iter()
        .map(|(network, interfaces)| {
            let v4 = interfaces
                .iter()
                .filter_map(|interface| interface.ipv4())
                .map(str::to_owned)
                .collect();
            (network.clone(), v4)
        })
        .collect()
}

/// First address on the preferred network, else the first address of the
/// first non-empty network, else nothing.
pub fn select_ansible_host<'a>(
    addresses: &'a IndexMap<String, Vec<String>>,
    preferred_network: &str,
) -> Option<&'a str> {
    addresses
        .get(preferred_network)
        .and_then(|addrs| addrs.first())
        .or_else(|| addresses.values().find_map(|addrs| addrs.first()))
        .map(String::as_str)
}
