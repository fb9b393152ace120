use std::fmt;

use thiserror::Error;

use crate::db::errors::DbError;

/// Why a foreign key constraint rejected the operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForeignKeyConflict {
    /// Other rows still reference the entity (delete)
    HasDependents,
    /// The entity points at a row that does not exist (save / update)
    MissingReference { column: Option<String> },
}

impl fmt::Display for ForeignKeyConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForeignKeyConflict::HasDependents => write!(f, "has dependencies"),
            ForeignKeyConflict::MissingReference { column: Some(column) } => write!(f, "invalid reference: {column}"),
            ForeignKeyConflict::MissingReference { column: None } => write!(f, "invalid reference"),
        }
    }
}

/// Error type for service operations.
///
/// Repository errors are always re-wrapped into one of these kinds, so handlers never depend on
/// storage vocabulary. `Internal` and `Unknown` keep the original cause for logging.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("field required: {field}")]
    FieldRequired { field: &'static str },

    #[error("field can't be negative: {field}")]
    NotNegativeField { field: &'static str },

    #[error("invalid field: {field}")]
    InvalidField { field: &'static str },

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("{resource} already exists")]
    Duplicated { resource: &'static str, constraint: Option<String> },

    #[error("foreign key conflict on {resource}: {conflict}")]
    ForeignKey {
        resource: &'static str,
        conflict: ForeignKeyConflict,
    },

    /// A recognized storage fault
    #[error("storage failure on {resource}: {source:#}")]
    Internal {
        resource: &'static str,
        source: anyhow::Error,
    },

    /// An error nothing below the service knew how to classify
    #[error("unexpected failure on {resource}: {source:#}")]
    Unknown {
        resource: &'static str,
        source: anyhow::Error,
    },
}

impl ServiceError {
    /// Translate a repository error for the named entity
    pub fn from_db(resource: &'static str, err: DbError) -> Self {
        match err {
            DbError::NotFound => ServiceError::NotFound { resource },
            DbError::UniqueViolation { constraint, .. } => ServiceError::Duplicated { resource, constraint },
            DbError::ForeignKeyViolation { referenced: true, .. } => ServiceError::ForeignKey {
                resource,
                conflict: ForeignKeyConflict::HasDependents,
            },
            DbError::ForeignKeyViolation { column, .. } => ServiceError::ForeignKey {
                resource,
                conflict: ForeignKeyConflict::MissingReference { column },
            },
            DbError::Internal(source) => ServiceError::Internal { resource, source },
            DbError::Other(source) => ServiceError::Unknown { resource, source },
        }
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, ServiceError>;
