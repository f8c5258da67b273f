use crate::render::{render_inventory, write_inventory};

use inventory_core::InventoryConfig;
use inventory_core::inventory::inventory_from_records;

use models::{InventoryDocument, ServerRecord};

/// **VALUE**: Verifies the empty inventory text, byte for byte.
///
/// **WHY THIS MATTERS**: Ansible only needs valid JSON, but operators diff inventories
/// between runs; the layout must match what the script has always printed.
///
/// **BUG THIS CATCHES**: Would catch 2-space indentation or a compact encoder.
#[test]
fn given_empty_document_when_rendered_then_four_space_indent() {
    let text = render_inventory(&InventoryDocument::new()).unwrap();

    assert_eq!(text, "{\n    \"_meta\": {\n        \"hostvars\": {}\n    }\n}");
}

/// **VALUE**: Verifies a grouped server renders with `_meta` first and groups after.
#[test]
fn given_tagged_server_when_rendered_then_expected_layout() {
    let server = ServerRecord::new("a1", "web")
        .with_address("public", "8.8.8.8", 4)
        .with_metadata("stack", "james");
    let document = inventory_from_records([&server], &InventoryConfig::default());

    let text = render_inventory(&document).unwrap();

    let expected = r#"{
    "_meta": {
        "hostvars": {
            "a1": {
                "server_id": "a1",
                "server_name": "web",
                "addresses": {
                    "public": [
                        "8.8.8.8"
                    ]
                },
                "ansible_host": "8.8.8.8"
            }
        }
    },
    "stack_james": {
        "vars": {
            "stack": "james"
        },
        "hosts": [
            "a1"
        ]
    }
}"#;
    assert_eq!(text, expected);
}

/// **VALUE**: Verifies non-ASCII names are written as UTF-8, not `\u` escapes.
#[test]
fn given_non_ascii_name_when_rendered_then_utf8_kept() {
    let server = ServerRecord::new("a1", "café-01");
    let document = inventory_from_records([&server], &InventoryConfig::default());

    let text = render_inventory(&document).unwrap();

    assert!(text.contains("\"server_name\": \"café-01\""));
}

#[test]
fn given_writer_when_writing_inventory_then_trailing_newline() {
    let mut out = Vec::new();

    write_inventory(&mut out, &InventoryDocument::new()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("}\n"));
    assert_eq!(text.trim_end(), render_inventory(&InventoryDocument::new()).unwrap());
}
