use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::dashboard_dto::{DashboardStats, StageCount, StatusCount},
    error::Result,
    models::job::JobStatus,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Derived pipeline totals", body = Json<DashboardStats>)
    )
)]
#[axum::debug_handler]
pub async fn get_dashboard_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs_by_status: Vec<StatusCount> = state
        .job_service
        .status_counts()
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect();
    let candidates_by_stage: Vec<StageCount> = state
        .candidate_service
        .stage_counts()
        .into_iter()
        .map(|(stage, count)| StageCount { stage, count })
        .collect();

    let stats = DashboardStats {
        total_jobs: state.store.job_count(),
        open_jobs: jobs_by_status
            .iter()
            .find(|entry| entry.status == JobStatus::Open)
            .map(|entry| entry.count)
            .unwrap_or(0),
        total_candidates: state.store.candidate_count(),
        jobs_by_status,
        candidates_by_stage,
    };

    Ok(Json(stats))
}
