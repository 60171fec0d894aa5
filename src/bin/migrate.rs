//! Applies the schema script to the configured database and exits.
//!
//! Usage: expense-migrate [SCRIPT]
//! SCRIPT defaults to `database.migrations_path`.

use anyhow::Context;
use expense_core::AppConfig;
use expense_db::{apply_schema, Database};
use expense_tracker::telemetry::init_tracing;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let script = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.database.migrations_path));

    let db = Database::new(config.database.clone());
    db.connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    let outcome = apply_schema(&db, &script).await;
    db.close().await;
    outcome.with_context(|| format!("Failed to apply {}", script.display()))?;

    info!(script = %script.display(), "Schema applied");
    Ok(())
}
