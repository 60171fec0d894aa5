//! Domain models for the expense tracker

pub mod expense;

pub use expense::{Expense, ExpenseDraft, MAX_AMOUNT, MAX_TEXT_LEN};
