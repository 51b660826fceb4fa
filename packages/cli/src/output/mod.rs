use crate::error::CliError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use comfy_table::{presets::UTF8_BORDERS_ONLY, Cell, ContentArrangement, Row as TableRow, Table};
use mole_history::{QueryDescriptor, Row, Value};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::io::Write;

pub fn write_rows_ndjson<W: Write>(out: &mut W, rows: &[Row]) -> Result<(), CliError> {
    for row in rows {
        let line = serde_json::to_string(&row_to_json(row))?;
        writeln!(out, "{line}").map_err(|source| CliError::io("failed to write row", source))?;
    }
    Ok(())
}

/// Keys keep the row's column order.
pub fn row_to_json(row: &Row) -> Map<String, JsonValue> {
    row.iter()
        .map(|(column, value)| (column.to_string(), value_to_json(value)))
        .collect()
}

pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Integer(v) => JsonValue::from(*v),
        Value::Real(v) => serde_json::Number::from_f64(*v)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::Text(v) => JsonValue::from(v.clone()),
        Value::Blob(bytes) => JsonValue::from(STANDARD.encode(bytes)),
    }
}

#[derive(Serialize)]
struct TableListing<'a> {
    table: &'a str,
    query: &'a str,
}

pub fn write_descriptors_ndjson<W: Write>(
    out: &mut W,
    descriptors: &[QueryDescriptor],
) -> Result<(), CliError> {
    for descriptor in descriptors {
        let line = serde_json::to_string(&TableListing {
            table: descriptor.table,
            query: descriptor.query,
        })?;
        writeln!(out, "{line}")
            .map_err(|source| CliError::io("failed to write table listing", source))?;
    }
    Ok(())
}

pub fn write_descriptors_table<W: Write>(
    out: &mut W,
    descriptors: &[QueryDescriptor],
) -> Result<(), CliError> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(TableRow::from(vec![Cell::new("table"), Cell::new("query")]));

    for descriptor in descriptors {
        table.add_row(TableRow::from(vec![
            Cell::new(descriptor.table),
            Cell::new(descriptor.query),
        ]));
    }

    writeln!(out, "{table}").map_err(|source| CliError::io("failed to write tables", source))?;
    writeln!(out, "({} tables)", descriptors.len())
        .map_err(|source| CliError::io("failed to write tables", source))
}
