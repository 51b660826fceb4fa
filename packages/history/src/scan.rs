use crate::{HistoryError, Row, Value};
use rusqlite::types::ValueRef;

/// Converts the row a cursor is positioned on into a [`Row`].
pub trait RowScanner: Fn(&rusqlite::Row<'_>) -> Result<Row, HistoryError> + Send + 'static {}

impl<F> RowScanner for F where
    F: Fn(&rusqlite::Row<'_>) -> Result<Row, HistoryError> + Send + 'static
{
}

/// Maps every column of the row a cursor is positioned on to its
/// storage-class value, unconverted.
pub fn scan_row(row: &rusqlite::Row<'_>) -> Result<Row, HistoryError> {
    let stmt = row.as_ref();
    let column_count = stmt.column_count();
    let mut mapped = Row::with_capacity(column_count);
    for idx in 0..column_count {
        let name = stmt
            .column_name(idx)
            .map_err(|source| HistoryError::Scan { column: idx, source })?;
        let value = row
            .get_ref(idx)
            .map_err(|source| HistoryError::Scan { column: idx, source })?;
        mapped.insert(name, to_value(value));
    }
    Ok(mapped)
}

fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(value) => Value::Integer(value),
        ValueRef::Real(value) => Value::Real(value),
        ValueRef::Text(value) => Value::Text(String::from_utf8_lossy(value).to_string()),
        ValueRef::Blob(value) => Value::Blob(value.to_vec()),
    }
}
