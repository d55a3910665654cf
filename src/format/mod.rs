//! Output for the lookup: one compact JSON line, or `null` when nothing was found.

use crate::amazon::ProductRecord;
use anyhow::{Context, Result};
use std::io::Write;

/// Marker written when no product record was produced.
pub const NO_RESULT: &str = "null";

/// Renders the outcome as a single line without the trailing newline.
pub fn render(record: Option<&ProductRecord>) -> Result<String> {
    match record {
        Some(record) => {
            serde_json::to_string(record).context("Failed to serialize product record")
        }
        None => Ok(NO_RESULT.to_string()),
    }
}

/// Writes the outcome as exactly one line to `out` and flushes it.
pub fn emit(out: &mut impl Write, record: Option<&ProductRecord>) -> Result<()> {
    let line = render(record)?;
    writeln!(out, "{}", line).context("Failed to write output")?;
    out.flush().context("Failed to flush output")
}
