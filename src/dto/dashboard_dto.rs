use serde::{Deserialize, Serialize};

use crate::models::candidate::Stage;
use crate::models::job::JobStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: JobStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCount {
    pub stage: Stage,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub open_jobs: usize,
    pub total_candidates: usize,
    /// Per-status job counts in status declaration order.
    pub jobs_by_status: Vec<StatusCount>,
    /// Per-stage candidate counts in pipeline order.
    pub candidates_by_stage: Vec<StageCount>,
}
