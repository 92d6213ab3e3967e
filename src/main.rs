use anyhow::{Context, Result};

use sqltour::savepoint::{self, DecrementOutcome};
use sqltour::{connection, dump, insert, metadata, seed};

const DATABASE_ENDPOINT: &str = connection::MEMORY;

fn main() -> Result<()> {
    env_logger::init();

    let conn = connection::open(DATABASE_ENDPOINT).context("failed to open database")?;
    println!("Connected successfully");

    if metadata::list_tables(&conn)?.is_empty() {
        seed::install(&conn)?;
    }

    // Task 1: schema and data
    for table in metadata::list_tables(&conn)? {
        println!("Table: {}", table);
        for column in metadata::table_columns(&conn, &table)? {
            println!("    Column: {} Type: {}", column.name, column.type_name);
        }
        for line in dump::dump_table(&conn, &table)?.lines {
            println!("{}", line);
        }
    }

    // Task 2: prepared-statement inserts
    let inserted = insert::insert_employees(&conn, &insert::SAMPLE_EMPLOYEES)?;
    println!("Inserted {} employee rows", inserted);

    // Task 3: savepoint and rollback
    match savepoint::decrement_units(&conn, savepoint::DEMO_PART, 10)? {
        DecrementOutcome::Applied { rows } => {
            println!("Decrement applied to {} row(s)", rows);
        }
        DecrementOutcome::RolledBack { reason } => {
            println!("Rolled back to savepoint due to: {}", reason);
        }
    }
    println!("Changes committed successfully");

    connection::close(conn).context("failed to close connection")?;
    Ok(())
}
