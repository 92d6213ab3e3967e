use log::warn;
use rusqlite::{Connection, params};

use crate::error::TourResult;

/// Part key the demonstration decrements.
pub const DEMO_PART: &str = "A100";

const CHECKPOINT: &str = "before_decrement";

/// What the demonstration did with its one mutating statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// The UPDATE ran and the commit made it permanent.
    Applied { rows: usize },
    /// The UPDATE failed; state was rolled back to the checkpoint and the
    /// transaction still committed.
    RolledBack { reason: String },
}

/// Decrements `units_on_hand` for one part under a named checkpoint.
///
/// The transaction always ends committed. On failure the rollback targets
/// the checkpoint only, and the final commit still runs, confirming
/// whatever state remains after the rollback. The checkpoint is referenced
/// at most once: rolled back to, or superseded by the commit.
///
/// A mutation error is caught and reported in the outcome, never re-raised.
/// A failure of the rollback itself is fatal and propagates.
pub fn decrement_units(
    conn: &Connection,
    part_num: &str,
    amount: i64,
) -> TourResult<DecrementOutcome> {
    conn.execute_batch("BEGIN")?;
    conn.execute_batch(&format!("SAVEPOINT {CHECKPOINT}"))?;

    let outcome = match conn.execute(
        "UPDATE parts SET units_on_hand = units_on_hand - ?1 WHERE part_num = ?2",
        params![amount, part_num],
    ) {
        Ok(rows) => DecrementOutcome::Applied { rows },
        Err(err) => {
            conn.execute_batch(&format!("ROLLBACK TO SAVEPOINT {CHECKPOINT}"))?;
            warn!("rolled back to {CHECKPOINT}, then committed anyway: {err}");
            DecrementOutcome::RolledBack {
                reason: err.to_string(),
            }
        }
    };

    conn.execute_batch("COMMIT")?;
    Ok(outcome)
}
