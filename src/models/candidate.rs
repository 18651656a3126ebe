use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed recruitment pipeline. The order is used for display grouping
/// only; a candidate may be moved to any stage from any other stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Applied,
    Screening,
    #[serde(rename = "Interview 1")]
    InterviewOne,
    #[serde(rename = "Interview 2")]
    InterviewTwo,
    Offer,
    Onboarding,
}

impl Stage {
    pub const PIPELINE: [Stage; 6] = [
        Stage::Applied,
        Stage::Screening,
        Stage::InterviewOne,
        Stage::InterviewTwo,
        Stage::Offer,
        Stage::Onboarding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Screening => "Screening",
            Stage::InterviewOne => "Interview 1",
            Stage::InterviewTwo => "Interview 2",
            Stage::Offer => "Offer",
            Stage::Onboarding => "Onboarding",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An application record tied to exactly one job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub stage: Stage,
    pub applied_date: NaiveDate,
    pub job_id: Uuid,
}
