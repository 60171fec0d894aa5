//! Expense Tracker Database Layer
//!
//! This crate provides PostgreSQL database access for the expense tracker.
//! It includes:
//!
//! - A pool-backed executor with `execute`, `fetch_all` and `fetch_one` primitives
//! - Startup schema script execution
//! - The PostgreSQL expense repository

pub mod migrate;
pub mod pool;
pub mod repositories;

pub use migrate::apply_schema;
pub use pool::{Database, PoolStatus, SqlArgs};
pub use repositories::*;

// Re-export commonly used types
pub use expense_core::{AppError, AppResult};
pub use sqlx::postgres::{PgQueryResult, PgRow};
