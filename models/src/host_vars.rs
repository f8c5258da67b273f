use indexmap::IndexMap;
use serde::Serialize;

/// Per-host variables published under `_meta.hostvars.<server id>`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostVars {
    pub server_id: String,
    /// `null` when the compute API reported no name.
    pub server_name: Option<String>,
    /// Network name to IPv4 addresses, provider order.
    pub addresses: IndexMap<String, Vec<String>>,
    /// Address Ansible connects to; `null` when the server has no IPv4 at all.
    pub ansible_host: Option<String>,
}
