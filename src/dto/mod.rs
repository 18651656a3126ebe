pub mod candidate_dto;
pub mod dashboard_dto;
pub mod job_dto;
pub mod notification_dto;

use serde::{Deserialize, Serialize};

/// Single-item response envelope: `{"data": ..., "error": null}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { data, error: None }
    }
}
