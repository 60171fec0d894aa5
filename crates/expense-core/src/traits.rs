//! Common traits for repositories
//!
//! Repository operations report not-found as a value (`None` / `false`),
//! never as an error, and never choose an HTTP status themselves.

use crate::error::AppError;
use crate::models::{Expense, ExpenseDraft};
use async_trait::async_trait;

/// Expense repository
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a new expense and return the persisted record
    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense, AppError>;

    /// All expenses, newest first
    async fn list(&self) -> Result<Vec<Expense>, AppError>;

    /// Find expense by ID
    async fn get(&self, id: i32) -> Result<Option<Expense>, AppError>;

    /// Replace every mutable field and refresh `updated_at`
    async fn update(&self, id: i32, draft: &ExpenseDraft) -> Result<Option<Expense>, AppError>;

    /// Delete expense by ID; `false` when nothing matched
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}
