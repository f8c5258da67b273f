use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of a server's `addresses` list as reported by the compute API.
///
/// The provider sends more (`OS-EXT-IPS:type`, MAC address); only these two
/// fields matter for the inventory and everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddress {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub version: Option<u8>,
}

impl InterfaceAddress {
    pub fn new(addr: impl Into<String>, version: u8) -> Self {
        Self {
            addr: Some(addr.into()),
            version: Some(version),
        }
    }

    /// Present, non-empty and IPv4.
    pub fn ipv4(&self) -> Option<&str> {
        match (self.addr.as_deref(), self.version) {
            (Some(addr), Some(4)) if !addr.is_empty() => Some(addr),
            _ => None,
        }
    }
}

/// A compute instance as seen through `GET /servers/detail`.
///
/// A missing or `null` name stays absent; missing or `null` addresses and
/// metadata degrade to empty maps instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: IndexMap<String, Vec<InterfaceAddress>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: IndexMap<String, String>,
}

impl ServerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            addresses: IndexMap::new(),
            metadata: IndexMap::new(),
        }
    }

    pub fn with_address(
        mut self,
        network: impl Into<String>,
        addr: impl Into<String>,
        version: u8,
    ) -> Self {
        self.addresses
            .entry(network.into())
            .or_default()
            .push(InterfaceAddress::new(addr, version));
        self
    }

    /// Register a network with no interfaces on it.
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.addresses.entry(network.into()).or_default();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
