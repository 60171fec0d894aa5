//! Unified error handling for the expense tracker
//!
//! Every failure the service can observe is folded into one of a small set of
//! categories. Callers branch on the category, never on driver internals.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Message returned for 5xx responses outside diagnostic mode
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Database Errors ====================
    /// Pool not initialized, closed, or exhausted beyond its wait policy
    #[error("Database connection unavailable: {0}")]
    ConnectionUnavailable(String),

    /// Malformed SQL, type mismatch, constraint violation, or row-mapping failure
    #[error("Database query failed: {0}")]
    Query(String),

    // ==================== Resource Errors ====================
    #[error("{0}")]
    NotFound(String),

    // ==================== Validation Errors ====================
    #[error("Validation error: {0}")]
    Validation(String),

    // ==================== Internal Errors ====================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Not-found error naming the missing expense
    pub fn expense_not_found(id: i32) -> Self {
        AppError::NotFound(format!("Expense with ID {} not found", id))
    }

    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ConnectionUnavailable(_) => "connection_unavailable",
            AppError::Query(_) => "query_error",
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation_error",
            AppError::Internal(_) => "internal_error",
            AppError::Config(_) => "config_error",
            AppError::Serialization(_) => "serialization_error",
        }
    }

    /// Whether the error text may reveal internals and must be hidden by default
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Build the JSON error response, optionally exposing internal detail
    pub fn to_response(&self, expose_detail: bool) -> HttpResponse {
        let status = self.status_code();
        let message = if self.is_internal() && !expose_detail {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(json!({
            "error": self.error_code(),
            "message": message,
            "status": status.as_u16(),
        }))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        self.to_response(false)
    }
}

// ==================== From implementations ====================

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                AppError::ConnectionUnavailable("timed out waiting for a pooled connection".into())
            }
            sqlx::Error::PoolClosed => {
                AppError::ConnectionUnavailable("connection pool is closed".into())
            }
            sqlx::Error::Io(e) => AppError::ConnectionUnavailable(e.to_string()),
            sqlx::Error::Tls(e) => AppError::ConnectionUnavailable(e.to_string()),
            sqlx::Error::RowNotFound => AppError::NotFound("no rows returned".into()),
            other => AppError::Query(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
