//! Common DTOs used across the API

use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving
    pub status: String,
}

impl HealthResponse {
    /// The healthy response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
