use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Log the underlying failure and collapse it into the response a caller
    /// of `operation` sees.
    ///
    /// Not-found errors keep their 404 meaning; every other failure becomes a
    /// 400 carrying only `Error <operation>`.
    pub fn for_operation(self, operation: &str) -> AppError {
        match self {
            AppError::NotFound(msg) => {
                tracing::warn!("Error {}: {}", operation, msg);
                AppError::NotFound("Ticket not found".to_string())
            }
            other => {
                tracing::error!("Error {}: {}", operation, other);
                AppError::BadRequest(format!("Error {}", operation))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::BAD_REQUEST, "Database error occurred".to_string())
            }
            AppError::InvalidId(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::BAD_REQUEST, "Internal server error".to_string())
            }
        };

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_operation_keeps_not_found() {
        let err = AppError::NotFound("Ticket 'abc' not found".to_string())
            .for_operation("deleting ticket");
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Ticket not found"));
    }

    #[test]
    fn test_for_operation_hides_details() {
        let err = AppError::InvalidId("zzz".to_string()).for_operation("updating ticket");
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Error updating ticket"));

        let err = AppError::Internal("boom".to_string()).for_operation("creating ticket");
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg == "Error creating ticket"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("x".to_string()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidId("x".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("x".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
