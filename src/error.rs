use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Failures raised by the data-access layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid: id {0} does not exist")]
    NotFound(i64),

    #[error("Empty update: no fields to update")]
    EmptyUpdate,

    /// A NOT NULL, UNIQUE, CHECK or foreign key rule rejected the statement
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation
                | ErrorKind::ForeignKeyViolation => {
                    return StoreError::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

/// Errors returned from HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Store(err @ StoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            ApiError::Store(
                err @ (StoreError::EmptyUpdate | StoreError::ConstraintViolation(_)),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Store(StoreError::Database(err)) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_store_errors_to_status_codes() {
        let cases = [
            (ApiError::from(StoreError::NotFound(7)), StatusCode::NOT_FOUND),
            (ApiError::from(StoreError::EmptyUpdate), StatusCode::BAD_REQUEST),
            (
                ApiError::from(StoreError::ConstraintViolation(
                    "UNIQUE constraint failed: teams.name".into(),
                )),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(StoreError::Database(sqlx::Error::PoolClosed)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::BadRequest("nope".into()), StatusCode::BAD_REQUEST),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn non_database_sqlx_errors_are_not_constraint_violations() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(StoreError::NotFound(42).to_string(), "Invalid: id 42 does not exist");
    }
}
