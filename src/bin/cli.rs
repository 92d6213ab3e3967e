use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use sqltour::savepoint::{self, DecrementOutcome};
use sqltour::{connection, dump, insert, metadata, seed};

#[derive(Parser)]
#[command(author, version, about = "sqlt - a walkthrough client for a SQLite database")]
struct Cli {
    /// Database endpoint (file path, or :memory:)
    #[arg(short, long, default_value = "tour.db")]
    db_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the sample schema and starting data
    Seed,

    /// List tables with their columns and types
    Schema,

    /// Print every row of a table
    Dump {
        /// Table to dump
        table: String,
    },

    /// Insert the three sample employee records
    Insert,

    /// Run the savepoint/rollback demonstration
    Demo {
        /// Units to decrement from the demo part
        #[arg(long, default_value_t = 10)]
        amount: i64,
    },

    /// Run the whole walkthrough: seed if empty, schema, data, inserts, demo
    Run,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let conn = connection::open(&cli.db_path)
        .with_context(|| format!("failed to open database at {}", cli.db_path))?;

    match &cli.command {
        Commands::Seed => {
            seed::install(&conn)?;
            println!("Sample schema installed");
        }
        Commands::Schema => {
            print_schema(&conn)?;
        }
        Commands::Dump { table } => {
            for line in dump::dump_table(&conn, table)?.lines {
                println!("{}", line);
            }
        }
        Commands::Insert => {
            let inserted = insert::insert_employees(&conn, &insert::SAMPLE_EMPLOYEES)?;
            println!("Inserted {} employee rows", inserted);
        }
        Commands::Demo { amount } => {
            run_demo(&conn, *amount)?;
        }
        Commands::Run => {
            if metadata::list_tables(&conn)?.is_empty() {
                seed::install(&conn)?;
            }
            print_schema(&conn)?;
            for table in metadata::list_tables(&conn)? {
                println!("Data for {}:", table);
                for line in dump::dump_table(&conn, &table)?.lines {
                    println!("{}", line);
                }
            }
            let inserted = insert::insert_employees(&conn, &insert::SAMPLE_EMPLOYEES)?;
            println!("Inserted {} employee rows", inserted);
            run_demo(&conn, 10)?;
        }
    }

    connection::close(conn).context("failed to close connection")?;
    Ok(())
}

fn print_schema(conn: &Connection) -> Result<()> {
    for table in metadata::list_tables(conn)? {
        println!("Table: {}", table);
        for column in metadata::table_columns(conn, &table)? {
            println!("    Column: {} Type: {}", column.name, column.type_name);
        }
    }
    Ok(())
}

fn run_demo(conn: &Connection, amount: i64) -> Result<()> {
    match savepoint::decrement_units(conn, savepoint::DEMO_PART, amount)? {
        DecrementOutcome::Applied { rows } => {
            println!("Decrement applied to {} row(s)", rows);
        }
        DecrementOutcome::RolledBack { reason } => {
            println!("Rolled back to savepoint due to: {}", reason);
        }
    }
    println!("Changes committed successfully");
    Ok(())
}
