//! Expense Tracker HTTP server
//!
//! Serves the expense CRUD API, a health probe and Prometheus metrics over a
//! single PostgreSQL pool.

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use expense_api::{build_cors, configure_routes, ApiState, HttpMetrics, RequestMetrics};
use expense_core::traits::ExpenseRepository;
use expense_core::AppConfig;
use expense_db::{apply_schema, Database, PgExpenseRepository};
use expense_tracker::telemetry::init_tracing;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    info!("Starting Expense Tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().context("Failed to load configuration")?;

    if config.debug {
        warn!("Diagnostic mode is on: error responses include internal detail");
    }

    info!("Connecting to database...");
    let db = Arc::new(Database::new(config.database.clone()));
    db.connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    info!(
        "Database connection established with {} max connections",
        config.database.max_connections
    );

    if config.database.run_migrations {
        apply_schema(&db, Path::new(&config.database.migrations_path))
            .await
            .context("Failed to apply schema")?;
    }

    let expenses: Arc<dyn ExpenseRepository> = Arc::new(PgExpenseRepository::new(db.clone()));
    let state = web::Data::new(ApiState::new(expenses, config.debug));
    let metrics = HttpMetrics::new().context("Failed to register metrics")?;

    let bind_addr = config.server_addr();
    let workers = config.server.workers;
    info!(
        "Starting HTTP server on {} with {} workers",
        bind_addr, workers
    );

    let server_config = config.server.clone();
    let result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::Data::new(metrics.clone()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(build_cors(&server_config))
            .wrap(TracingLogger::default())
            // Outermost, so it sees every response
            .wrap(RequestMetrics::new(metrics.clone()))
            .configure(configure_routes)
    })
    .workers(workers)
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await;

    info!("Server stopped, closing database pool");
    db.close().await;

    result.context("HTTP server failed")
}
