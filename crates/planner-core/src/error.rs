use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The stored repeat rule passed the syntax check but cannot produce a date.
    #[error("Cannot compute the next date for repeat rule '{0}'")]
    InvalidRule(String),

    #[error("Task {id} has a malformed date in storage: '{raw}'")]
    CorruptDate { id: i64, raw: String },
}
