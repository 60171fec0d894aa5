//! Shared handler state

use crate::error::ApiError;
use expense_core::traits::ExpenseRepository;
use expense_core::AppError;
use std::sync::Arc;

/// State handed to every handler through `web::Data`
///
/// Built once at startup and passed in explicitly, so tests can swap the
/// repository for an in-memory one.
#[derive(Clone)]
pub struct ApiState {
    /// Expense storage
    pub expenses: Arc<dyn ExpenseRepository>,

    /// Expose underlying failure text in 500 responses
    pub debug: bool,
}

impl ApiState {
    /// Create handler state
    pub fn new(expenses: Arc<dyn ExpenseRepository>, debug: bool) -> Self {
        Self { expenses, debug }
    }

    /// Convert a failure into a response-ready error honoring diagnostic mode
    pub fn reject(&self, err: AppError) -> ApiError {
        ApiError::new(err, self.debug)
    }
}
