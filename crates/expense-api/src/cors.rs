//! CORS policy

use actix_cors::Cors;
use actix_web::http::header;
use expense_core::config::ServerConfig;

/// Build the CORS middleware from the configured origins
pub fn build_cors(server: &ServerConfig) -> Cors {
    let cors = match server.allowed_origins() {
        None => Cors::default().allow_any_origin(),
        Some(origins) => origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin)),
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
