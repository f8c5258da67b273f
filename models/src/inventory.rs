use crate::HostVars;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

const META_KEY: &str = "_meta";

/// A named group of hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InventoryGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<IndexMap<String, String>>,
    pub hosts: Vec<String>,
}

impl InventoryGroup {
    pub fn with_vars(vars: IndexMap<String, String>) -> Self {
        Self {
            vars: Some(vars),
            hosts: Vec::new(),
        }
    }

    pub fn without_vars() -> Self {
        Self::default()
    }
}

#[derive(Serialize)]
struct Meta<'a> {
    hostvars: &'a IndexMap<String, HostVars>,
}

/// The whole dynamic inventory.
///
/// Serializes as `{"_meta": {"hostvars": {...}}, "<group>": {...}, ...}` with
/// `_meta` first and groups in the order they were first referenced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryDocument {
    hostvars: IndexMap<String, HostVars>,
    groups: IndexMap<String, InventoryGroup>,
}

impl InventoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a host's variables, keyed by its server id.
    ///
    /// A replaced host keeps its original position.
    pub fn insert_host(&mut self, host_vars: HostVars) {
        self.hostvars.insert(host_vars.server_id.clone(), host_vars);
    }

    /// Get the named group, creating it with `init` on first reference.
    pub fn group_entry(
        &mut self,
        name: String,
        init: impl FnOnce() -> InventoryGroup,
    ) -> &mut InventoryGroup {
        self.groups.entry(name).or_insert_with(init)
    }

    pub fn hostvars(&self) -> &IndexMap<String, HostVars> {
        &self.hostvars
    }

    pub fn groups(&self) -> &IndexMap<String, InventoryGroup> {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&InventoryGroup> {
        self.groups.get(name)
    }

    pub fn host_count(&self) -> usize {
        self.hostvars.len()
    }
}

impl Serialize for InventoryDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len() + 1))?;
        map.serialize_entry(
            META_KEY,
            &Meta {
                hostvars: &self.hostvars,
            },
        )?;
        for (name, group) in &self.groups {
            map.serialize_entry(name, group)?;
        }
        map.end()
    }
}
