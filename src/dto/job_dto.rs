use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::job::{Job, JobStatus, JobUpdate};
use crate::services::job_service::{CountedJob, JobPage};

/// Body for both job creation and full-replace updates. Updates enumerate
/// every mutable field; unknown keys are never merged in.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(length(min = 1, message = "at least one skill is required"))]
    pub skills: Vec<String>,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
    pub salary: Option<String>,
    #[validate(custom(function = crate::utils::validation::iso_date))]
    pub deadline: String,
    pub status: JobStatus,
}

impl JobPayload {
    /// The validated mutable fields with the deadline parsed into a date.
    pub fn into_fields(self) -> Result<JobUpdate> {
        let deadline = NaiveDate::parse_from_str(&self.deadline, "%Y-%m-%d")
            .map_err(|_| Error::BadRequest("deadline must be a valid date (YYYY-MM-DD)".to_string()))?;
        Ok(JobUpdate {
            title: self.title,
            description: self.description,
            skills: self.skills,
            salary: self.salary,
            location: self.location,
            deadline,
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
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
    pub number_of_applicants: usize,
}

impl JobResponse {
    pub fn with_applicants(job: Job, number_of_applicants: usize) -> Self {
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            skills: job.skills,
            salary: job.salary,
            location: job.location,
            deadline: job.deadline,
            status: job.status,
            posted_date: job.posted_date,
            number_of_applicants,
        }
    }
}

impl From<CountedJob> for JobResponse {
    fn from(value: CountedJob) -> Self {
        Self::with_applicants(value.job, value.applicant_count)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub data: Vec<JobResponse>,
    pub meta: PageMeta,
    pub error: Option<String>,
}

impl From<JobPage> for JobListResponse {
    fn from(value: JobPage) -> Self {
        Self {
            data: value.items.into_iter().map(Into::into).collect(),
            meta: PageMeta {
                total: value.total,
                page: value.page,
                limit: value.limit,
                total_pages: value.total_pages,
            },
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub status: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedMessage {
    pub message: String,
}
