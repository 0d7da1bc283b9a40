//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::journal::JournalError;
use crate::ledger::LedgerError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Journal operation failed
    #[error("{0}")]
    Journal(#[from] JournalError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Service unavailable (dependency down or not configured)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Journal(JournalError::Ledger(err))
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Journal(e) => match e {
                JournalError::EmptyInput | JournalError::InvalidId(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
                }
                JournalError::NoAccount => (StatusCode::CONFLICT, "NO_ACCOUNT"),
                JournalError::NotSubmittable => (StatusCode::CONFLICT, "NOT_SUBMITTABLE"),
                JournalError::MissingCreatedObject(_) => {
                    (StatusCode::BAD_GATEWAY, "MISSING_CREATED_OBJECT")
                }
                JournalError::NoPackage => (StatusCode::SERVICE_UNAVAILABLE, "NO_PACKAGE"),
                JournalError::Ledger(LedgerError::Timeout) => {
                    (StatusCode::GATEWAY_TIMEOUT, "LEDGER_TIMEOUT")
                }
                // Executed but not confirmed; clients must not resubmit
                JournalError::Ledger(LedgerError::FinalizationTimeout(_)) => {
                    (StatusCode::GATEWAY_TIMEOUT, "FINALIZATION_TIMEOUT")
                }
                JournalError::Ledger(LedgerError::Wallet { .. }) => {
                    (StatusCode::BAD_GATEWAY, "WALLET_ERROR")
                }
                JournalError::Ledger(_) => (StatusCode::BAD_GATEWAY, "LEDGER_ERROR"),
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "API error occurred"
        );

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Digest;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (JournalError::EmptyInput.into(), StatusCode::BAD_REQUEST),
            (JournalError::NoAccount.into(), StatusCode::CONFLICT),
            (
                LedgerError::Unavailable("network down".into()).into(),
                StatusCode::BAD_GATEWAY,
            ),
            (
                LedgerError::FinalizationTimeout(Digest::new("d")).into(),
                StatusCode::GATEWAY_TIMEOUT,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_and_code().0, expected, "{}", err);
        }
    }

    #[test]
    fn test_post_execution_codes() {
        let finalization: ApiError = LedgerError::FinalizationTimeout(Digest::new("d")).into();
        assert_eq!(finalization.status_and_code().1, "FINALIZATION_TIMEOUT");

        let missing: ApiError = JournalError::MissingCreatedObject(Digest::new("d")).into();
        assert_eq!(missing.status_and_code().1, "MISSING_CREATED_OBJECT");

        let request: ApiError = LedgerError::Timeout.into();
        assert_eq!(request.status_and_code().1, "LEDGER_TIMEOUT");
    }

    #[test]
    fn test_ledger_message_passes_through() {
        let err: ApiError = LedgerError::Unavailable("network down".into()).into();
        assert_eq!(err.to_string(), "network down");
    }
}
