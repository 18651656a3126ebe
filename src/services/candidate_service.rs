use chrono::Utc;
use uuid::Uuid;

use crate::dto::candidate_dto::CreateCandidatePayload;
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, Stage};
use crate::store::entity_store::EntityStore;

/// Listing sentinel for candidates whose job reference no longer resolves.
pub const UNKNOWN_JOB_TITLE: &str = "Unknown Job";

/// A candidate joined with its job's title for listing and board views.
#[derive(Debug, Clone)]
pub struct EnrichedCandidate {
    pub candidate: Candidate,
    pub job_title: String,
}

#[derive(Clone)]
pub struct CandidateService {
    store: EntityStore,
}

impl CandidateService {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let id = Uuid::new_v4();
        let candidate = Candidate {
            id,
            name: payload.name,
            email: payload.email,
            avatar: payload
                .avatar
                .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/40/40", id)),
            skills: payload.skills,
            experience: payload.experience,
            stage: payload.stage.unwrap_or(Stage::Applied),
            applied_date: Utc::now().date_naive(),
            job_id: payload.job_id,
        };
        let candidate = self.store.insert_candidate(candidate).ok_or_else(|| {
            Error::BadRequest(format!(
                "jobId {} does not reference an existing job",
                payload.job_id
            ))
        })?;
        tracing::info!(candidate_id = %candidate.id, job_id = %candidate.job_id, "candidate created");
        Ok(candidate)
    }

    /// Search listing: the term matches name, email, any skill, or the
    /// joined job title, case-insensitively. Results are always sorted by
    /// applied date descending; the sort is stable so ties keep insertion
    /// order.
    pub fn list(&self, search: Option<&str>) -> Vec<EnrichedCandidate> {
        let mut enriched = self.enrich_all();

        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            let needle = term.to_lowercase();
            enriched.retain(|entry| {
                entry.candidate.name.to_lowercase().contains(&needle)
                    || entry.candidate.email.to_lowercase().contains(&needle)
                    || entry
                        .candidate
                        .skills
                        .iter()
                        .any(|skill| skill.to_lowercase().contains(&needle))
                    || entry.job_title.to_lowercase().contains(&needle)
            });
        }

        enriched.sort_by(|a, b| b.candidate.applied_date.cmp(&a.candidate.applied_date));
        enriched
    }

    pub fn move_stage(&self, id: Uuid, stage: Stage) -> Result<Candidate> {
        let (candidate, changed) = self
            .store
            .move_candidate_stage(id, stage)
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
        if changed {
            tracing::info!(candidate_id = %id, stage = %stage, "candidate moved");
        }
        Ok(candidate)
    }

    /// Stage board: one bucket per pipeline stage, in pipeline order, each
    /// bucket preserving natural collection order.
    pub fn board(&self) -> Vec<(Stage, Vec<EnrichedCandidate>)> {
        let enriched = self.enrich_all();
        Stage::PIPELINE
            .iter()
            .map(|stage| {
                let bucket = enriched
                    .iter()
                    .filter(|entry| entry.candidate.stage == *stage)
                    .cloned()
                    .collect();
                (*stage, bucket)
            })
            .collect()
    }

    pub fn stage_counts(&self) -> Vec<(Stage, usize)> {
        let candidates = self.store.candidates();
        Stage::PIPELINE
            .iter()
            .map(|stage| {
                (
                    *stage,
                    candidates.iter().filter(|c| c.stage == *stage).count(),
                )
            })
            .collect()
    }

    fn enrich_all(&self) -> Vec<EnrichedCandidate> {
        let (jobs, candidates) = self.store.snapshot();
        candidates
            .into_iter()
            .map(|candidate| {
                let job_title = jobs
                    .iter()
                    .find(|job| job.id == candidate.job_id)
                    .map(|job| job.title.clone())
                    .unwrap_or_else(|| {
                        tracing::warn!(
                            candidate_id = %candidate.id,
                            job_id = %candidate.job_id,
                            "candidate references a missing job"
                        );
                        UNKNOWN_JOB_TITLE.to_string()
                    });
                EnrichedCandidate {
                    candidate,
                    job_title,
                }
            })
            .collect()
    }
}
