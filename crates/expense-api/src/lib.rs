//! API layer for the expense tracker
//!
//! HTTP handlers for the expense CRUD surface, health, and Prometheus metrics.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod cors;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod state;

pub use cors::build_cors;
pub use error::ApiError;
pub use handlers::configure_routes;
pub use metrics::{HttpMetrics, RequestMetrics};
pub use state::ApiState;
