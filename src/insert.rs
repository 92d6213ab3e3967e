use rusqlite::{Connection, params};

use crate::error::TourResult;

/// The fixed 4-column record shape bound by the prepared statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord<'a> {
    pub emp_num: i64,
    pub email_work: &'a str,
    pub email_personal: &'a str,
    pub work_cell_number: &'a str,
}

/// The three literal records the walkthrough inserts on every run.
pub const SAMPLE_EMPLOYEES: [EmployeeRecord<'static>; 3] = [
    EmployeeRecord {
        emp_num: 145,
        email_work: "adeena@touro",
        email_personal: "adeena@gmail",
        work_cell_number: "9172732579",
    },
    EmployeeRecord {
        emp_num: 155,
        email_work: "shira@touro",
        email_personal: "shira@gmail",
        work_cell_number: "7185753004",
    },
    EmployeeRecord {
        emp_num: 165,
        email_work: "ahuva@touro",
        email_personal: "ahuva@gmail",
        work_cell_number: "9172575031",
    },
];

/// Inserts the given records through one prepared statement, executed once
/// per record with bound parameters. Returns the number of rows inserted.
/// Statement errors propagate; there is no retry.
pub fn insert_employees(conn: &Connection, records: &[EmployeeRecord<'_>]) -> TourResult<usize> {
    let mut stmt = conn.prepare(
        "INSERT INTO employee_data (emp_num, email_work, email_personal, work_cell_number) \
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    let mut inserted = 0;
    for record in records {
        inserted += stmt.execute(params![
            record.emp_num,
            record.email_work,
            record.email_personal,
            record.work_cell_number
        ])?;
    }
    Ok(inserted)
}
