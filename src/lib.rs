pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use reqwest::Client;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::services::{
    ai_service::AiService, candidate_service::CandidateService, job_service::JobService,
    notification_service::NotificationService,
};
use crate::store::entity_store::EntityStore;

#[derive(Clone)]
pub struct AppState {
    pub store: EntityStore,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub ai_service: AiService,
    pub notification_service: NotificationService,
}

impl AppState {
    pub fn new(store: EntityStore) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");

        let ai_service = AiService::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            http_client,
        );
        let job_service = JobService::new(store.clone());
        let candidate_service = CandidateService::new(store.clone());
        let notification_service = NotificationService::new(
            store.clone(),
            ai_service.clone(),
            config.company_name.clone(),
        );

        Self {
            store,
            job_service,
            candidate_service,
            ai_service,
            notification_service,
        }
    }
}

/// The full application router. Used by `main` and by the integration
/// tests, so both always serve the identical surface.
pub fn build_router(state: AppState) -> Router {
    let config = crate::config::get_config();

    let api = Router::new()
        .route(
            "/api/jobs",
            get(routes::job_routes::list_jobs).post(routes::job_routes::create_job),
        )
        .route(
            "/api/jobs/:id",
            get(routes::job_routes::get_job)
                .put(routes::job_routes::update_job)
                .delete(routes::job_routes::delete_job),
        )
        .route(
            "/api/jobs/:id/candidates",
            get(routes::job_routes::job_candidates),
        )
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates)
                .post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/board",
            get(routes::candidate_routes::stage_board),
        )
        .route(
            "/api/candidates/parse-profile",
            post(routes::candidate_routes::parse_profile),
        )
        .route(
            "/api/candidates/:id/stage",
            post(routes::candidate_routes::move_candidate_stage),
        )
        .route(
            "/api/notifications",
            post(routes::notification_routes::send_notification),
        )
        .route(
            "/api/dashboard/stats",
            get(routes::dashboard::get_dashboard_stats),
        )
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::ApiRateLimit::new(config.api_rps),
            middleware::rate_limit::rps_middleware,
        ));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
}
