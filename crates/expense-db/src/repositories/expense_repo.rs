//! Expense repository implementation
//!
//! Each operation is exactly one parameterized statement. Rows are mapped
//! through `ExpenseRow`, which names every expected column, so a missing or
//! mistyped column fails the call instead of producing a partial record.

use crate::pool::{Database, SqlArgs};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use expense_core::models::{Expense, ExpenseDraft};
use expense_core::traits::ExpenseRepository;
use expense_core::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Database row representation of an expense
#[derive(Debug, FromRow)]
struct ExpenseRow {
    id: i32,
    amount: Decimal,
    vendor: String,
    category: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id,
            amount: row.amount,
            vendor: row.vendor,
            category: row.category,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_expense(row: &PgRow) -> AppResult<Expense> {
    ExpenseRow::from_row(row)
        .map(Into::into)
        .map_err(|e| AppError::Query(format!("Failed to map expense row: {}", e)))
}

const INSERT_EXPENSE: &str = r#"
    INSERT INTO expenses (amount, vendor, category, description)
    VALUES ($1, $2, $3, $4)
    RETURNING id, amount, vendor, category, description, created_at, updated_at
"#;

const SELECT_EXPENSES: &str = r#"
    SELECT id, amount, vendor, category, description, created_at, updated_at
    FROM expenses
    ORDER BY created_at DESC, id DESC
"#;

const SELECT_EXPENSE: &str = r#"
    SELECT id, amount, vendor, category, description, created_at, updated_at
    FROM expenses
    WHERE id = $1
"#;

const UPDATE_EXPENSE: &str = r#"
    UPDATE expenses
    SET amount = $1, vendor = $2, category = $3, description = $4, updated_at = NOW()
    WHERE id = $5
    RETURNING id, amount, vendor, category, description, created_at, updated_at
"#;

const DELETE_EXPENSE: &str = r#"
    DELETE FROM expenses
    WHERE id = $1
    RETURNING id
"#;

fn draft_args(draft: &ExpenseDraft) -> SqlArgs {
    SqlArgs::new()
        .bind(draft.amount)
        .bind(draft.vendor.clone())
        .bind(draft.category.clone())
        .bind(draft.description.clone())
}

/// PostgreSQL implementation of the expense repository
pub struct PgExpenseRepository {
    db: Arc<Database>,
}

impl PgExpenseRepository {
    /// Create a new expense repository over a shared executor
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExpenseRepository for PgExpenseRepository {
    #[instrument(skip(self, draft), fields(vendor = %draft.vendor))]
    async fn create(&self, draft: &ExpenseDraft) -> AppResult<Expense> {
        debug!("Creating expense");

        let expense = self
            .db
            .fetch_one_as(INSERT_EXPENSE, draft_args(draft), map_expense)
            .await?
            .ok_or_else(|| AppError::Query("Insert returned no row".to_string()))?;

        info!(id = expense.id, "Expense created");
        Ok(expense)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> AppResult<Vec<Expense>> {
        debug!("Listing expenses");

        self.db
            .fetch_all_as(SELECT_EXPENSES, SqlArgs::new(), map_expense)
            .await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: i32) -> AppResult<Option<Expense>> {
        debug!("Finding expense by id: {}", id);

        self.db
            .fetch_one_as(SELECT_EXPENSE, SqlArgs::new().bind(id), map_expense)
            .await
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i32, draft: &ExpenseDraft) -> AppResult<Option<Expense>> {
        debug!("Updating expense: {}", id);

        let updated = self
            .db
            .fetch_one_as(UPDATE_EXPENSE, draft_args(draft).bind(id), map_expense)
            .await?;

        if updated.is_some() {
            info!(id, "Expense updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> AppResult<bool> {
        debug!("Deleting expense: {}", id);

        let deleted = self
            .db
            .fetch_one(DELETE_EXPENSE, SqlArgs::new().bind(id))
            .await?
            .is_some();

        if deleted {
            info!(id, "Expense deleted");
        }
        Ok(deleted)
    }
}
