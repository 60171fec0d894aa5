//! Metrics exposition handler

use crate::metrics::HttpMetrics;
use actix_web::{web, HttpResponse};
use expense_core::AppError;

/// Prometheus text exposition
///
/// GET /metrics
pub async fn render_metrics(metrics: web::Data<HttpMetrics>) -> Result<HttpResponse, AppError> {
    let body = metrics.render()?;

    Ok(HttpResponse::Ok()
        .content_type(prometheus::TEXT_FORMAT)
        .body(body))
}
