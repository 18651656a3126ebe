use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        candidate_dto::{
            CandidateListMeta, CandidateListQuery, CandidateListResponse, CandidateResponse,
            CreateCandidatePayload, MoveStagePayload, ParseProfilePayload, StageColumn,
        },
        Envelope,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(
        ("search" = Option<String>, Query, description = "Matches name, email, skills, or job title")
    ),
    responses(
        (status = 200, description = "Candidates sorted by applied date, newest first", body = Json<CandidateListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let candidates: Vec<CandidateResponse> = state
        .candidate_service
        .list(query.search.as_deref())
        .into_iter()
        .map(Into::into)
        .collect();
    let total = candidates.len();
    Ok(Json(CandidateListResponse {
        data: candidates,
        meta: CandidateListMeta { total },
        error: None,
    }))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 201, description = "Candidate created successfully"),
        (status = 400, description = "Invalid payload or unknown job reference")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.create(payload)?;
    let job_title = state
        .store
        .find_job(candidate.job_id)
        .map(|job| job.title)
        .unwrap_or_default();
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(CandidateResponse::with_job_title(
            candidate, job_title,
        ))),
    ))
}

#[utoipa::path(
    post,
    path = "/api/candidates/{id}/stage",
    params(
        ("id" = Uuid, Path, description = "Candidate ID")
    ),
    request_body = MoveStagePayload,
    responses(
        (status = 200, description = "Candidate after the move; same-stage moves are no-ops"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn move_candidate_stage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoveStagePayload>,
) -> Result<impl IntoResponse> {
    let candidate = state.candidate_service.move_stage(id, payload.stage)?;
    let job_title = state
        .store
        .find_job(candidate.job_id)
        .map(|job| job.title)
        .unwrap_or_else(|| crate::services::candidate_service::UNKNOWN_JOB_TITLE.to_string());
    Ok(Json(Envelope::ok(CandidateResponse::with_job_title(
        candidate, job_title,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/candidates/board",
    responses(
        (status = 200, description = "Candidates grouped by pipeline stage, in pipeline order")
    )
)]
#[axum::debug_handler]
pub async fn stage_board(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let columns: Vec<StageColumn> = state
        .candidate_service
        .board()
        .into_iter()
        .map(|(stage, bucket)| StageColumn {
            stage,
            candidates: bucket.into_iter().map(Into::into).collect(),
        })
        .collect();
    Ok(Json(Envelope::ok(columns)))
}

#[utoipa::path(
    post,
    path = "/api/candidates/parse-profile",
    request_body = ParseProfilePayload,
    responses(
        (status = 200, description = "Extracted candidate profile"),
        (status = 400, description = "Malformed data URI"),
        (status = 502, description = "Extraction collaborator failed; fall back to manual entry")
    )
)]
#[axum::debug_handler]
pub async fn parse_profile(
    State(state): State<AppState>,
    Json(payload): Json<ParseProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state.ai_service.extract_profile(&payload.cv_data_uri).await?;
    Ok(Json(Envelope::ok(profile)))
}
