use rusqlite::Connection;

use crate::error::TourResult;

/// Creates the walkthrough schema and its starting data.
///
/// `units_on_hand` carries a non-negative CHECK, so an oversized decrement
/// fails the UPDATE. That is the savepoint demonstration's failure mode.
pub fn install(conn: &Connection) -> TourResult<()> {
    conn.execute_batch(
        "CREATE TABLE parts (
             part_num      TEXT PRIMARY KEY,
             description   TEXT NOT NULL,
             units_on_hand INTEGER NOT NULL CHECK (units_on_hand >= 0),
             unit_price    REAL NOT NULL
         );
         CREATE TABLE employee_data (
             emp_num          INTEGER PRIMARY KEY,
             email_work       TEXT NOT NULL,
             email_personal   TEXT NOT NULL,
             work_cell_number TEXT NOT NULL
         );
         INSERT INTO parts VALUES
             ('A100', 'Gas range', 37, 495.00),
             ('B200', 'Washer', 12, 399.99),
             ('C300', 'Cordless drill', 21, 129.50);",
    )?;
    Ok(())
}
