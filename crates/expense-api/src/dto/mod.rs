//! Data Transfer Objects (DTOs) for API requests and responses

pub mod common;
pub mod expense;

pub use common::*;
pub use expense::*;
