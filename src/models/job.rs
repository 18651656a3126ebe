use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a posted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Extended,
    Pending,
    Closed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Open,
        JobStatus::Extended,
        JobStatus::Pending,
        JobStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "Open",
            JobStatus::Extended => "Extended",
            JobStatus::Pending => "Pending",
            JobStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A posted position. The applicant count is never stored here; it is
/// recomputed from the candidate collection on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub location: String,
    pub deadline: NaiveDate,
    pub status: JobStatus,
    pub posted_date: DateTime<Utc>,
}

/// Every mutable field of a [`Job`], validated as a whole before it is
/// applied. `id` and `posted_date` can never appear here.
#[derive(Debug, Clone)]
pub struct JobUpdate {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub salary: Option<String>,
    pub location: String,
    pub deadline: NaiveDate,
    pub status: JobStatus,
}
