//! Health handler

use crate::dto::HealthResponse;
use actix_web::HttpResponse;

/// Liveness probe; never touches the database
///
/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}
