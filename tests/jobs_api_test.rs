use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use hr_central_backend::{store::entity_store::EntityStore, AppState};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn test_app(store: EntityStore) -> Router {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("OPENAI_API_KEY", "sk-test");
    // unroutable collaborator so upstream calls fail fast in tests
    env::set_var("OPENAI_BASE_URL", "http://127.0.0.1:9");
    env::set_var("API_RPS", "10000");
    let _ = hr_central_backend::config::init_config();
    hr_central_backend::build_router(AppState::new(store))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn job_payload(title: &str) -> JsonValue {
    json!({
        "title": title,
        "description": "Own the release quality gates end to end.",
        "skills": ["Testing"],
        "location": "Hanoi",
        "deadline": "2025-01-01",
        "status": "Open"
    })
}

#[tokio::test]
async fn created_job_tracks_its_applicants() {
    let app = test_app(EntityStore::new());

    let (status, body) = send(&app, "POST", "/api/jobs", Some(job_payload("QA Engineer"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let job = &body["data"];
    assert!(job["id"].is_string());
    assert!(job["postedDate"].is_string());
    assert_eq!(job["numberOfApplicants"], 0);
    let job_id = job["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({
            "name": "An Nguyen",
            "email": "an.nguyen@example.com",
            "skills": ["Testing"],
            "experience": "Five years of QA automation.",
            "jobId": job_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["numberOfApplicants"], 1);
}

#[tokio::test]
async fn create_job_reports_every_violated_field() {
    let app = test_app(EntityStore::new());

    let (status, body) = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({
            "title": "",
            "description": "",
            "skills": [],
            "location": "",
            "deadline": "not-a-date",
            "status": "Open"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    let details = &body["details"];
    for field in ["title", "description", "skills", "location", "deadline"] {
        assert!(details[field].is_array(), "missing detail for {}", field);
    }
}

#[tokio::test]
async fn update_round_trip_preserves_identity() {
    let app = test_app(EntityStore::new());

    let (_, body) = send(&app, "POST", "/api/jobs", Some(job_payload("Original"))).await;
    let created = body["data"].clone();
    let job_id = created["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/jobs/{}", job_id),
        Some(json!({
            "title": "Renamed Role",
            "description": "A completely different description.",
            "skills": ["Rust", "Axum"],
            "location": "Remote",
            "salary": "Negotiable",
            "deadline": "2026-12-31",
            "status": "Extended"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = send(&app, "GET", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(status, StatusCode::OK);
    let job = &fetched["data"];
    assert_eq!(job["title"], "Renamed Role");
    assert_eq!(job["skills"], json!(["Rust", "Axum"]));
    assert_eq!(job["location"], "Remote");
    assert_eq!(job["salary"], "Negotiable");
    assert_eq!(job["deadline"], "2026-12-31");
    assert_eq!(job["status"], "Extended");
    assert_eq!(job["id"], created["id"]);
    assert_eq!(job["postedDate"], created["postedDate"]);
    assert_eq!(body["data"]["id"], created["id"]);
}

#[tokio::test]
async fn unknown_job_ids_return_not_found() {
    let app = test_app(EntityStore::new());
    let missing = uuid::Uuid::new_v4();

    let (status, _) = send(&app, "GET", &format!("/api/jobs/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/jobs/{}", missing),
        Some(job_payload("Ghost")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "DELETE", &format!("/api/jobs/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deletion_is_refused_while_candidates_reference_the_job() {
    let app = test_app(EntityStore::new());

    let (_, body) = send(&app, "POST", "/api/jobs", Some(job_payload("Guarded"))).await;
    let job_id = body["data"]["id"].as_str().unwrap().to_string();
    send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({
            "name": "Binh Tran",
            "email": "binh.tran@example.com",
            "experience": "Three years of backend work.",
            "jobId": job_id
        })),
    )
    .await;

    let (status, body) = send(&app, "DELETE", &format!("/api/jobs/{}", job_id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("candidate"));

    // a job nobody applied to deletes cleanly, and only once
    let (_, body) = send(&app, "POST", "/api/jobs", Some(job_payload("Unwanted"))).await;
    let empty_id = body["data"]["id"].as_str().unwrap().to_string();
    let (status, body) = send(&app, "DELETE", &format!("/api/jobs/{}", empty_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["message"].is_string());
    let (status, _) = send(&app, "DELETE", &format!("/api/jobs/{}", empty_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_paginates_without_gaps_or_duplicates() {
    let app = test_app(EntityStore::new());
    for i in 1..=5 {
        send(&app, "POST", "/api/jobs", Some(job_payload(&format!("Role {}", i)))).await;
    }

    let mut seen = Vec::new();
    for page in 1..=3 {
        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/jobs?page={}&limit=2", page),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["total"], 5);
        assert_eq!(body["meta"]["limit"], 2);
        assert_eq!(body["meta"]["totalPages"], 3);
        for job in body["data"].as_array().unwrap() {
            seen.push(job["id"].as_str().unwrap().to_string());
        }
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 5);

    // newest job is listed first
    let (_, body) = send(&app, "GET", "/api/jobs?limit=1", None).await;
    assert_eq!(body["data"][0]["title"], "Role 5");

    // a page past the data is an empty slice, not an error
    let (status, body) = send(&app, "GET", "/api/jobs?page=10&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["meta"]["total"], 5);
    assert_eq!(body["meta"]["totalPages"], 3);
}

#[tokio::test]
async fn skill_filter_requires_every_requested_skill() {
    let app = test_app(EntityStore::new());
    let mut frontend = job_payload("Frontend");
    frontend["skills"] = json!(["React", "Node.js"]);
    let mut backend = job_payload("Backend");
    backend["skills"] = json!(["Java", "Spring Boot"]);
    send(&app, "POST", "/api/jobs", Some(frontend)).await;
    send(&app, "POST", "/api/jobs", Some(backend)).await;

    let (_, body) = send(&app, "GET", "/api/jobs?skills=react,node", None).await;
    assert_eq!(body["meta"]["total"], 1);
    assert_eq!(body["data"][0]["title"], "Frontend");

    let (_, body) = send(&app, "GET", "/api/jobs?skills=react,java", None).await;
    assert_eq!(body["meta"]["total"], 0);
}

#[tokio::test]
async fn dashboard_reflects_the_seeded_store() {
    let app = test_app(EntityStore::with_seed());

    let (status, body) = send(&app, "GET", "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalJobs"], 5);
    assert_eq!(body["totalCandidates"], 10);
    assert_eq!(body["openJobs"], 3);

    let stages = body["candidatesByStage"].as_array().unwrap();
    assert_eq!(stages.len(), 6);
    assert_eq!(stages[0]["stage"], "Applied");
    let total: u64 = stages.iter().map(|s| s["count"].as_u64().unwrap()).sum();
    assert_eq!(total, 10);
}
