use rusqlite::Connection;

use crate::error::{TourError, TourResult};

/// Endpoint string that selects an in-memory database.
pub const MEMORY: &str = ":memory:";

/// Opens a connection to the given endpoint and applies session pragmas.
///
/// Failure here is not recoverable by callers; it propagates to the top
/// level and aborts the run.
pub fn open(endpoint: &str) -> TourResult<Connection> {
    let conn = if endpoint == MEMORY {
        Connection::open_in_memory()?
    } else {
        Connection::open(endpoint)?
    };
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Explicit close that surfaces the driver error if teardown fails.
///
/// Dropping the connection covers every other exit path.
pub fn close(conn: Connection) -> TourResult<()> {
    conn.close().map_err(|(_, err)| TourError::Close(err))
}
