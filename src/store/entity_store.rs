use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::models::candidate::{Candidate, Stage};
use crate::models::job::{Job, JobUpdate};

/// Outcome of a job removal attempt. Removal is refused while candidates
/// still reference the job, so pipeline history cannot be orphaned by the
/// documented flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobRemoval {
    Removed,
    NotFound,
    Referenced(usize),
}

#[derive(Debug, Default)]
struct StoreInner {
    jobs: Vec<Job>,
    candidates: Vec<Candidate>,
}

/// Single source of truth for jobs and candidates, held in process memory.
///
/// The handle is cheap to clone and is injected into services through
/// `AppState` — there is no process-global instance. Request handlers run on
/// multiple worker threads, so every compound operation (lookup + mutate)
/// takes one write guard for its whole duration; readers get consistent
/// snapshots and never hold a lock across an await point.
#[derive(Clone, Default)]
pub struct EntityStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the canonical demo dataset.
    pub fn with_seed() -> Self {
        let store = Self::new();
        let (jobs, candidates) = super::seed::demo_dataset();
        {
            let mut inner = store.write();
            inner.jobs = jobs;
            inner.candidates = candidates;
        }
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().expect("entity store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().expect("entity store lock poisoned")
    }

    /// Consistent snapshot of both collections under one read guard.
    pub fn snapshot(&self) -> (Vec<Job>, Vec<Candidate>) {
        let inner = self.read();
        (inner.jobs.clone(), inner.candidates.clone())
    }

    pub fn jobs(&self) -> Vec<Job> {
        self.read().jobs.clone()
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.read().candidates.clone()
    }

    pub fn job_count(&self) -> usize {
        self.read().jobs.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.read().candidates.len()
    }

    pub fn find_job(&self, id: Uuid) -> Option<Job> {
        self.read().jobs.iter().find(|j| j.id == id).cloned()
    }

    pub fn find_candidate(&self, id: Uuid) -> Option<Candidate> {
        self.read().candidates.iter().find(|c| c.id == id).cloned()
    }

    /// Job plus its applicant count, read under one guard.
    pub fn job_with_applicants(&self, id: Uuid) -> Option<(Job, usize)> {
        let inner = self.read();
        let job = inner.jobs.iter().find(|j| j.id == id).cloned()?;
        let count = inner.candidates.iter().filter(|c| c.job_id == id).count();
        Some((job, count))
    }

    /// Candidates referencing the given job, in natural collection order.
    /// Returns `None` when the job itself does not exist.
    pub fn candidates_for_job(&self, job_id: Uuid) -> Option<Vec<Candidate>> {
        let inner = self.read();
        inner.jobs.iter().find(|j| j.id == job_id)?;
        Some(
            inner
                .candidates
                .iter()
                .filter(|c| c.job_id == job_id)
                .cloned()
                .collect(),
        )
    }

    /// New jobs go to the head of the listing order.
    pub fn insert_job(&self, job: Job) {
        self.write().jobs.insert(0, job);
    }

    /// Replaces every mutable field of the job in place. `id` and
    /// `posted_date` are untouched. Returns the updated job.
    pub fn update_job(&self, id: Uuid, update: JobUpdate) -> Option<Job> {
        let mut inner = self.write();
        let job = inner.jobs.iter_mut().find(|j| j.id == id)?;
        job.title = update.title;
        job.description = update.description;
        job.skills = update.skills;
        job.salary = update.salary;
        job.location = update.location;
        job.deadline = update.deadline;
        job.status = update.status;
        Some(job.clone())
    }

    /// Removes a job unless candidates still reference it. The reference
    /// check and the removal share one write guard.
    pub fn remove_job(&self, id: Uuid) -> JobRemoval {
        let mut inner = self.write();
        let Some(pos) = inner.jobs.iter().position(|j| j.id == id) else {
            return JobRemoval::NotFound;
        };
        let referenced = inner.candidates.iter().filter(|c| c.job_id == id).count();
        if referenced > 0 {
            return JobRemoval::Referenced(referenced);
        }
        inner.jobs.remove(pos);
        JobRemoval::Removed
    }

    /// Inserts a candidate after confirming its job reference exists.
    /// Check and insert are atomic. Returns `None` for an unknown job.
    pub fn insert_candidate(&self, candidate: Candidate) -> Option<Candidate> {
        let mut inner = self.write();
        if !inner.jobs.iter().any(|j| j.id == candidate.job_id) {
            return None;
        }
        inner.candidates.push(candidate.clone());
        Some(candidate)
    }

    /// Inserts a candidate without the referential check. Used for seeding
    /// and data repair; listing tolerates the resulting orphans with an
    /// "Unknown Job" sentinel.
    pub fn insert_candidate_unchecked(&self, candidate: Candidate) {
        self.write().candidates.push(candidate);
    }

    /// Moves a candidate to a stage. Returns the candidate and whether the
    /// stage actually changed; moving to the current stage is a no-op.
    pub fn move_candidate_stage(&self, id: Uuid, stage: Stage) -> Option<(Candidate, bool)> {
        let mut inner = self.write();
        let candidate = inner.candidates.iter_mut().find(|c| c.id == id)?;
        if candidate.stage == stage {
            return Some((candidate.clone(), false));
        }
        candidate.stage = stage;
        Some((candidate.clone(), true))
    }
}
