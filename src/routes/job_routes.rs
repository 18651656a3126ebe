use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        candidate_dto::CandidateResponse,
        job_dto::{DeletedMessage, JobListQuery, JobListResponse, JobPayload, JobResponse},
        Envelope,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(
        ("status" = Option<String>, Query, description = "Filter by status; 'All' disables the filter"),
        ("location" = Option<String>, Query, description = "Case-insensitive location substring"),
        ("skills" = Option<String>, Query, description = "Comma-separated skills; every one must match"),
        ("page" = Option<usize>, Query, description = "1-based page number"),
        ("limit" = Option<usize>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Paginated job listing", body = Json<JobListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> Result<impl IntoResponse> {
    let page = state.job_service.list(&query);
    Ok(Json(JobListResponse::from(page)))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = JobPayload,
    responses(
        (status = 201, description = "Job created successfully", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(JobResponse::with_applicants(job, 0))),
    ))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job with its applicant count", body = Json<JobResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let counted = state.job_service.get(id)?;
    Ok(Json(Envelope::ok(JobResponse::from(counted))))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = JobPayload,
    responses(
        (status = 200, description = "Job updated successfully", body = Json<JobResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(id, payload)?;
    let applicants = state.store.job_with_applicants(id).map(|(_, n)| n).unwrap_or(0);
    Ok(Json(Envelope::ok(JobResponse::with_applicants(
        job, applicants,
    ))))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted successfully"),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Candidates still reference the job")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id)?;
    Ok(Json(Envelope::ok(DeletedMessage {
        message: "Job deleted successfully".to_string(),
    })))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}/candidates",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Candidates who applied for the job"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn job_candidates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get(id)?;
    let candidates: Vec<CandidateResponse> = state
        .job_service
        .candidates_for(id)?
        .into_iter()
        .map(|candidate| CandidateResponse::with_job_title(candidate, job.job.title.clone()))
        .collect();
    Ok(Json(Envelope::ok(candidates)))
}
