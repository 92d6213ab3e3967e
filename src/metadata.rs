use rusqlite::Connection;

use crate::error::{TourError, TourResult};

/// Name and declared type of one table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub type_name: String,
}

/// User tables in name order. SQLite's internal tables are excluded.
pub fn list_tables(conn: &Connection) -> TourResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(names)
}

/// Columns of one table, in column order.
pub fn table_columns(conn: &Connection, table: &str) -> TourResult<Vec<ColumnInfo>> {
    let mut stmt =
        conn.prepare("SELECT name, type FROM pragma_table_info(?1) ORDER BY cid")?;
    let columns = stmt
        .query_map([table], |row| {
            Ok(ColumnInfo {
                name: row.get(0)?,
                type_name: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    // pragma_table_info yields no rows for unknown tables rather than erroring
    if columns.is_empty() {
        return Err(TourError::NoSuchTable(table.to_string()));
    }
    Ok(columns)
}
