use crate::app::AppContext;
use crate::db;
use crate::error::CliError;
use crate::output;
use mole_history::{read_rows, registry, scan_row};
use std::io::Write;

/// Exports `table` as one JSON object per line.
///
/// The table name is checked before any file is touched. Rows are only
/// written once the whole table has been read without error.
pub fn run<W: Write>(context: &AppContext, table: &str, out: &mut W) -> Result<(), CliError> {
    let descriptor = registry::lookup(table)?;
    let history_path = db::resolve_history_path(context)?;
    let conn = db::open_history_snapshot(&history_path)?;

    let rows = read_rows(conn, descriptor.query, scan_row)?.collect_rows()?;
    tracing::info!(table, rows = rows.len(), "exporting table");

    output::write_rows_ndjson(out, &rows)
}
