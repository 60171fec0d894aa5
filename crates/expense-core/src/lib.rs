//! Expense Tracker Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the expense tracker. It includes:
//!
//! - Domain models (ExpenseDraft, Expense)
//! - The repository trait implemented by the database layer
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
