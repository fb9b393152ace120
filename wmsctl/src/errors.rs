use crate::api::models::ErrorBody;
use crate::service::{ForeignKeyConflict, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Malformed request: unreadable body, bad JSON, missing key or zero-valued field
    #[error("{message}")]
    BadRequest { message: String },

    /// Error returned by an entity service
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Error::BadRequest { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::Service(service_err) => match service_err {
                ServiceError::FieldRequired { .. } | ServiceError::NotNegativeField { .. } | ServiceError::InvalidField { .. } => {
                    StatusCode::BAD_REQUEST
                }
                ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::Duplicated { .. } | ServiceError::ForeignKey { .. } => StatusCode::CONFLICT,
                ServiceError::Internal { .. } | ServiceError::Unknown { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::BadRequest { message } => message.clone(),
            Error::Service(service_err) => match service_err {
                ServiceError::ForeignKey {
                    resource,
                    conflict: ForeignKeyConflict::HasDependents,
                } => format!("{resource} has dependencies"),
                ServiceError::ForeignKey { conflict, .. } => conflict.to_string(),
                ServiceError::Internal { .. } => "internal server error".to_string(),
                ServiceError::Unknown { .. } => "unknown service error".to_string(),
                // Validation, not-found and duplicate messages are already client-facing
                other => other.to_string(),
            },
            Error::Other(_) => "unknown server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Service(ServiceError::Internal { .. } | ServiceError::Unknown { .. }) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::Service(ServiceError::Duplicated { .. } | ServiceError::ForeignKey { .. }) => {
                tracing::warn!("Conflict error: {}", self);
            }
            Error::BadRequest { .. } | Error::Service(_) => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();
        error_response(status, self.user_message())
    }
}

/// Render the `{message, status}` envelope for `status`
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        message: message.into(),
        status: status.canonical_reason().unwrap_or("unknown").to_lowercase(),
    };
    (status, Json(body)).into_response()
}

/// Type alias for handler results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn service(err: ServiceError) -> Error {
        Error::Service(err)
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (service(ServiceError::FieldRequired { field: "first name" }), StatusCode::BAD_REQUEST),
            (service(ServiceError::NotNegativeField { field: "warehouse id" }), StatusCode::BAD_REQUEST),
            (service(ServiceError::InvalidField { field: "telephone" }), StatusCode::BAD_REQUEST),
            (service(ServiceError::NotFound { resource: "employee" }), StatusCode::NOT_FOUND),
            (
                service(ServiceError::Duplicated {
                    resource: "employee",
                    constraint: None,
                }),
                StatusCode::CONFLICT,
            ),
            (
                service(ServiceError::ForeignKey {
                    resource: "employee",
                    conflict: ForeignKeyConflict::HasDependents,
                }),
                StatusCode::CONFLICT,
            ),
            (
                service(ServiceError::Internal {
                    resource: "employee",
                    source: anyhow::anyhow!("pool closed"),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (Error::bad_request("invalid id"), StatusCode::BAD_REQUEST),
            (Error::Other(anyhow::anyhow!("boom")), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected, "{err}");
        }
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            service(ServiceError::NotFound { resource: "employee" }).user_message(),
            "employee not found"
        );
        assert_eq!(
            service(ServiceError::Duplicated {
                resource: "seller",
                constraint: Some("cid".to_string()),
            })
            .user_message(),
            "seller already exists"
        );
        assert_eq!(
            service(ServiceError::ForeignKey {
                resource: "warehouse",
                conflict: ForeignKeyConflict::HasDependents,
            })
            .user_message(),
            "warehouse has dependencies"
        );
        assert_eq!(
            service(ServiceError::ForeignKey {
                resource: "product",
                conflict: ForeignKeyConflict::MissingReference {
                    column: Some("seller_id".to_string()),
                },
            })
            .user_message(),
            "invalid reference: seller_id"
        );
        assert_eq!(
            service(ServiceError::ForeignKey {
                resource: "product",
                conflict: ForeignKeyConflict::MissingReference { column: None },
            })
            .user_message(),
            "invalid reference"
        );
        assert_eq!(
            service(ServiceError::NotNegativeField { field: "minimum capacity" }).user_message(),
            "field can't be negative: minimum capacity"
        );
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let internal = service(ServiceError::Internal {
            resource: "employee",
            source: anyhow::anyhow!("Access denied for user 'root'@'10.0.0.3'"),
        });
        assert_eq!(internal.user_message(), "internal server error");

        let unknown = service(ServiceError::Unknown {
            resource: "employee",
            source: anyhow::anyhow!("column index out of bounds"),
        });
        assert_eq!(unknown.user_message(), "unknown service error");

        assert_eq!(Error::Other(anyhow::anyhow!("secret")).user_message(), "unknown server error");
    }
}
