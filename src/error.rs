use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("no such table: {0}")]
    NoSuchTable(String),
    #[error("failed to close connection: {0}")]
    Close(rusqlite::Error),
}

pub type TourResult<T> = Result<T, TourError>;
