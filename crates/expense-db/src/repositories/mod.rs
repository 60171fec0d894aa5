//! Repository implementations
//!
//! Concrete implementations of the repository traits defined in
//! expense-core, running on the pool-backed executor.

pub mod expense_repo;

pub use expense_repo::PgExpenseRepository;
