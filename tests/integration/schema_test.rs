use anyhow::Result;
use sqltour::{TourError, connection, dump, metadata, seed};

/// Seeded tables come back from introspection in name order.
#[test]
fn introspection_lists_seeded_tables() -> Result<()> {
    let conn = connection::open(connection::MEMORY)?;
    seed::install(&conn)?;

    let tables = metadata::list_tables(&conn)?;
    assert_eq!(tables, vec!["employee_data".to_string(), "parts".to_string()]);
    Ok(())
}

#[test]
fn parts_columns_have_expected_names_and_types() -> Result<()> {
    let conn = connection::open(connection::MEMORY)?;
    seed::install(&conn)?;

    let columns = metadata::table_columns(&conn, "parts")?;
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["part_num", "description", "units_on_hand", "unit_price"]
    );

    let units = columns.iter().find(|c| c.name == "units_on_hand").unwrap();
    assert_eq!(units.type_name, "INTEGER");
    Ok(())
}

/// Every column introspection reports for a table must appear in that
/// table's dump header.
#[test]
fn introspected_columns_appear_in_dump_header() -> Result<()> {
    let conn = connection::open(connection::MEMORY)?;
    seed::install(&conn)?;

    for table in metadata::list_tables(&conn)? {
        let dump = dump::dump_table(&conn, &table)?;
        for column in metadata::table_columns(&conn, &table)? {
            assert!(
                dump.columns.contains(&column.name),
                "column {} of {} missing from dump header",
                column.name,
                table
            );
        }
    }
    Ok(())
}

#[test]
fn dump_renders_one_line_per_row_in_column_order() -> Result<()> {
    let conn = connection::open(connection::MEMORY)?;
    seed::install(&conn)?;

    let dump = dump::dump_table(&conn, "parts")?;
    assert_eq!(dump.lines.len(), 3);

    let a100 = dump
        .lines
        .iter()
        .find(|l| l.contains("part_num: A100"))
        .expect("A100 row missing from dump");
    assert_eq!(
        a100,
        "part_num: A100, description: Gas range, units_on_hand: 37, unit_price: 495"
    );
    Ok(())
}

#[test]
fn unknown_table_is_reported_for_both_introspection_and_dump() -> Result<()> {
    let conn = connection::open(connection::MEMORY)?;
    seed::install(&conn)?;

    assert!(matches!(
        metadata::table_columns(&conn, "no_such"),
        Err(TourError::NoSuchTable(_))
    ));
    assert!(matches!(
        dump::dump_table(&conn, "no_such"),
        Err(TourError::NoSuchTable(_))
    ));
    Ok(())
}
