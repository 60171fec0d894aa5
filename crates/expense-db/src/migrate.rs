//! Startup schema script
//!
//! The schema is a single static SQL file applied as-is. It is written to be
//! idempotent, so applying it on every start is safe.

use crate::pool::Database;
use expense_core::{AppError, AppResult};
use std::path::Path;
use tracing::{error, info, instrument};

/// Read the SQL file at `path` and execute it
#[instrument(skip(db))]
pub async fn apply_schema(db: &Database, path: &Path) -> AppResult<()> {
    info!("Running database migrations");

    let sql = tokio::fs::read_to_string(path).await.map_err(|e| {
        error!("Failed to read migration file {}: {}", path.display(), e);
        AppError::Config(format!(
            "Migration file not found: {} ({})",
            path.display(),
            e
        ))
    })?;

    if sql.trim().is_empty() {
        info!("Migration file is empty, nothing to apply");
        return Ok(());
    }

    db.execute_script(&sql).await?;

    info!("Database migrations completed successfully");
    Ok(())
}
