//! Inventory document to text.

use crate::error::OsInventoryError;

use common::ErrorLocation;

use models::InventoryDocument;

use std::io::Write;
use std::panic::Location;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Serialize `document` with 4-space indentation, no trailing newline.
#[track_caller]
pub fn render_inventory(document: &InventoryDocument) -> Result<String, OsInventoryError> {
    let mut buffer = Vec::new();
    write_pretty(&mut buffer, document)?;
    String::from_utf8(buffer).map_err(|e| OsInventoryError::Render {
        message: format!("Rendered inventory is not UTF-8: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Write the rendered document and a trailing newline to `out`, then flush.
#[track_caller]
pub fn write_inventory<W: Write>(
    mut out: W,
    document: &InventoryDocument,
) -> Result<(), OsInventoryError> {
    write_pretty(&mut out, document)?;
    out.write_all(b"\n")
        .and_then(|()| out.flush())
        .map_err(|e| OsInventoryError::Render {
            message: format!("Failed to write inventory: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}

#[track_caller]
fn write_pretty<W: Write>(out: W, document: &InventoryDocument) -> Result<(), OsInventoryError> {
    let mut serializer = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(|e| OsInventoryError::Render {
            message: format!("Failed to serialize inventory: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
