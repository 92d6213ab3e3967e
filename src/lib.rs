// sqltour: a guided walkthrough of a SQLite database session

pub mod connection;
pub mod dump;
pub mod error;
pub mod insert;
pub mod metadata;
pub mod savepoint;
pub mod seed;

// Re-export key items for convenient access
pub use connection::{close, open};
pub use dump::{TableDump, dump_table};
pub use error::{TourError, TourResult};
pub use insert::{EmployeeRecord, SAMPLE_EMPLOYEES, insert_employees};
pub use metadata::{ColumnInfo, list_tables, table_columns};
pub use savepoint::{DecrementOutcome, decrement_units};
