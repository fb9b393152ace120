use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// MySQL: cannot delete or update a parent row (ER_ROW_IS_REFERENCED, ER_ROW_IS_REFERENCED_2)
const ROW_IS_REFERENCED: [u16; 2] = [1217, 1451];

/// MySQL messages name the offending column as ``FOREIGN KEY (`column`)``
static FOREIGN_KEY_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"FOREIGN KEY \(`([^`]+)`\)").expect("foreign key column pattern is valid"));

/// Unified error type for repository operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Entity not found by the given identifier
    #[error("Entity not found")]
    NotFound,

    /// Unique constraint violation
    #[error("Unique constraint violation")]
    UniqueViolation { constraint: Option<String>, message: String },

    /// Foreign key constraint violation
    #[error("Foreign key constraint violation")]
    ForeignKeyViolation {
        constraint: Option<String>,
        /// Column named in the driver message, if it could be extracted
        column: Option<String>,
        /// `true` when the row is referenced by dependents, `false` when a referenced row is missing
        referenced: bool,
        message: String,
    },

    /// Recognized storage fault: the database rejected the statement or could not be reached
    #[error("Storage failure: {0:#}")]
    Internal(anyhow::Error),

    /// Catch-all for errors the repository does not classify
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convert from sqlx::Error using sqlx's error categorization
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DbError::NotFound,
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    DbError::UniqueViolation {
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        message: db_err.message().to_string(),
                    }
                } else if db_err.is_foreign_key_violation() {
                    let referenced = db_err
                        .try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
                        .is_some_and(|mysql_err| ROW_IS_REFERENCED.contains(&mysql_err.number()));

                    DbError::ForeignKeyViolation {
                        constraint: db_err.constraint().map(|s| s.to_string()),
                        column: extract_foreign_key_column(db_err.message()),
                        referenced,
                        message: db_err.message().to_string(),
                    }
                } else {
                    DbError::Internal(anyhow::Error::from(err))
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DbError::Internal(anyhow::Error::from(err)),
            // Decode failures, column mismatches and anything newer sqlx adds
            _ => DbError::Other(anyhow::Error::from(err)),
        }
    }
}

/// Extract the column from a MySQL foreign key message, e.g.
/// "... CONSTRAINT `employees_warehouse_id_fk` FOREIGN KEY (`warehouse_id`) REFERENCES ..."
fn extract_foreign_key_column(message: &str) -> Option<String> {
    FOREIGN_KEY_COLUMN
        .captures(message)
        .and_then(|captures| captures.get(1))
        .map(|column| column.as_str().to_string())
}

/// Type alias for repository operation results
pub type Result<T> = std::result::Result<T, DbError>;
