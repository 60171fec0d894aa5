//! HTTP error wrapper
//!
//! `AppError` alone always redacts 5xx detail. `ApiError` carries the
//! diagnostic flag from `ApiState` so the detail can be exposed when the
//! service runs in debug mode.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use expense_core::AppError;
use std::fmt;
use tracing::{debug, error};

/// Failure returned by handlers
#[derive(Debug)]
pub struct ApiError {
    inner: AppError,
    expose_detail: bool,
}

impl ApiError {
    /// Wrap an application error
    pub fn new(inner: AppError, expose_detail: bool) -> Self {
        if inner.is_internal() {
            error!(code = inner.error_code(), "Request failed: {}", inner);
        } else {
            debug!(code = inner.error_code(), "Request rejected: {}", inner);
        }

        Self {
            inner,
            expose_detail,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.inner.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        self.inner.to_response(self.expose_detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn message(err: ApiError) -> String {
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        value["message"].as_str().unwrap().to_string()
    }

    #[actix_web::test]
    async fn test_detail_follows_diagnostic_flag() {
        let hidden = ApiError::new(AppError::Query("deadlock detected".to_string()), false);
        assert_eq!(hidden.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!message(hidden).await.contains("deadlock"));

        let shown = ApiError::new(AppError::Query("deadlock detected".to_string()), true);
        assert!(message(shown).await.contains("deadlock"));
    }

    #[actix_web::test]
    async fn test_not_found_passes_through() {
        let err = ApiError::new(AppError::expense_not_found(3), false);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(message(err).await, "Expense with ID 3 not found");
    }
}
