use rusqlite::Connection;
use rusqlite::types::ValueRef;

use crate::error::{TourError, TourResult};
use crate::metadata;

/// One table's rows rendered for display.
#[derive(Debug)]
pub struct TableDump {
    /// Result-set column names, in column order.
    pub columns: Vec<String>,
    /// One line per row: comma-joined `columnName: value` cells.
    pub lines: Vec<String>,
}

/// Reads every row of `table` and renders it for display.
///
/// Table names cannot be bound as statement parameters, so the name is
/// checked against the catalog before it is interpolated.
pub fn dump_table(conn: &Connection, table: &str) -> TourResult<TableDump> {
    if !metadata::list_tables(conn)?.iter().any(|t| t == table) {
        return Err(TourError::NoSuchTable(table.to_string()));
    }

    let mut stmt = conn.prepare(&format!("SELECT * FROM \"{}\"", table))?;
    let columns: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|c| c.to_string())
        .collect();

    let mut lines = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            cells.push(format!("{}: {}", column, render_value(row.get_ref(i)?)));
        }
        lines.push(cells.join(", "));
    }

    Ok(TableDump { columns, lines })
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("x'{}'", hex::encode(b)),
    }
}
