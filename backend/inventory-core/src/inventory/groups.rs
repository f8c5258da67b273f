//! Tag-driven host grouping.
//!
//! Two metadata keys drive three families of groups:
//!
//! | stack tag | group tag | groups joined |
//! |---|---|---|
//! | `s` | absent | `stack_s` |
//! | absent | `g` | `group_g` |
//! | `s` | `g` | `stack_s`, `group_g`, `stack_s_g` |
//! | `""` | `g` | `stack_`, `group_g` |
//!
//! The single-tag groups only need the key to be present; the combined group
//! needs both values non-empty.

use models::{HostVars, InventoryDocument, InventoryGroup, ServerRecord};

use indexmap::IndexMap;
use log::trace;

/// Group variable names, fixed whatever metadata keys are configured.
pub const STACK_VAR: &str = "stack";
pub const GROUP_VAR: &str = "group";

pub fn stack_group_name(stack_value: &str) -> String {
    format!("stack_{stack_value}")
}

pub fn group_group_name(group_value: &str) -> String {
    format!("group_{group_value}")
}

pub fn combined_group_name(stack_value: &str, group_value: &str) -> String {
    format!("stack_{stack_value}_{group_value}")
}

/// Builds the inventory document one server at a time.
#[derive(Debug)]
pub struct GroupAccumulator {
    stack_key: String,
    group_key: String,
    document: InventoryDocument,
}

impl GroupAccumulator {
    pub fn new(stack_key: impl Into<String>, group_key: impl Into<String>) -> Self {
        Self {
            stack_key: stack_key.into(),
            group_key: group_key.into(),
            document: InventoryDocument::new(),
        }
    }

    /// Record the server's host vars, then add its id to every group its tags select.
    pub fn add(&mut self, server: &ServerRecord, host_vars: HostVars) {
        // Hostvars first: every id in a group must also be a hostvars key.
        self.document.insert_host(host_vars);

        let stack_value = server.metadata_value(&self.stack_key);
        let group_value = server.metadata_value(&self.group_key);

        if let Some(stack) = stack_value {
            let vars = single_var(STACK_VAR, stack);
            self.join(stack_group_name(stack), &server.id, || {
                InventoryGroup::with_vars(vars)
            });
        }

        if let Some(group) = group_value {
            let vars = single_var(GROUP_VAR, group);
            self.join(group_group_name(group), &server.id, || {
                InventoryGroup::with_vars(vars)
            });
        }

        if let (Some(stack), Some(group)) = (stack_value, group_value)
            && !stack.is_empty()
            && !group.is_empty()
        {
            self.join(
                combined_group_name(stack, group),
                &server.id,
                InventoryGroup::without_vars,
            );
        }
    }

    pub fn host_count(&self) -> usize {
        self.document.host_count()
    }

    pub fn finish(self) -> InventoryDocument {
        self.document
    }

    fn join(&mut self, name: String, server_id: &str, init: impl FnOnce() -> InventoryGroup) {
        trace!("Adding {server_id} to {name}");
        self.document
            .group_entry(name, init)
            .hosts
            .push(server_id.to_owned());
    }
}

fn single_var(key: &str, value: &str) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    vars.insert(key.to_owned(), value.to_owned());
    vars
}
