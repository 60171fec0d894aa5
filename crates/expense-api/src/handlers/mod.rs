//! HTTP request handlers

pub mod expense;
pub mod health;
pub mod metrics;

use actix_web::{error::JsonPayloadError, web, HttpRequest};
use expense_core::AppError;
use tracing::warn;

/// Maximum accepted JSON body size
const JSON_LIMIT: usize = 64 * 1024;

/// Register every route along with the extractor error handlers
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::render_metrics))
        .configure(expense::configure);
}

/// Malformed or ill-typed JSON bodies become 400 validation errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err: JsonPayloadError, req: &HttpRequest| {
            warn!(path = %req.path(), "Rejected request body: {}", err);
            AppError::Validation(err.to_string()).into()
        })
}
