//! Expense Tracker service
//!
//! Shared start-up helpers for the `expense-tracker` and `expense-migrate`
//! binaries.

pub mod telemetry;
