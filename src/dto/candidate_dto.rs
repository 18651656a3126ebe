use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::candidate::{Candidate, Stage};
use crate::services::candidate_service::EnrichedCandidate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    /// Defaults to a generated placeholder portrait when omitted.
    #[validate(url(message = "avatar must be a valid URL"))]
    pub avatar: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[validate(length(min = 10, message = "experience summary must be at least 10 characters"))]
    pub experience: String,
    /// New applications start at `Applied` unless explicitly overridden.
    pub stage: Option<Stage>,
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub stage: Stage,
    pub applied_date: NaiveDate,
    pub job_id: Uuid,
    pub job_title: String,
}

impl CandidateResponse {
    pub fn with_job_title(candidate: Candidate, job_title: String) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            email: candidate.email,
            avatar: candidate.avatar,
            skills: candidate.skills,
            experience: candidate.experience,
            stage: candidate.stage,
            applied_date: candidate.applied_date,
            job_id: candidate.job_id,
            job_title,
        }
    }
}

impl From<EnrichedCandidate> for CandidateResponse {
    fn from(value: EnrichedCandidate) -> Self {
        Self::with_job_title(value.candidate, value.job_title)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListMeta {
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateListResponse {
    pub data: Vec<CandidateResponse>,
    pub meta: CandidateListMeta,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CandidateListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveStagePayload {
    pub stage: Stage,
}

/// One pipeline bucket of the stage board, in natural collection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageColumn {
    pub stage: Stage,
    pub candidates: Vec<CandidateResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParseProfilePayload {
    #[validate(length(min = 1, message = "cvDataUri must not be empty"))]
    pub cv_data_uri: String,
}
