use chrono::Utc;
use uuid::Uuid;

use crate::dto::job_dto::{JobListQuery, JobPayload};
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::job::Job;
use crate::store::entity_store::{EntityStore, JobRemoval};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// A job paired with its freshly computed applicant count.
#[derive(Debug, Clone)]
pub struct CountedJob {
    pub job: Job,
    pub applicant_count: usize,
}

pub struct JobPage {
    pub items: Vec<CountedJob>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[derive(Clone)]
pub struct JobService {
    store: EntityStore,
}

impl JobService {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    pub fn create(&self, payload: JobPayload) -> Result<Job> {
        let fields = payload.into_fields()?;
        let job = Job {
            id: Uuid::new_v4(),
            title: fields.title,
            description: fields.description,
            skills: fields.skills,
            salary: fields.salary,
            location: fields.location,
            deadline: fields.deadline,
            status: fields.status,
            posted_date: Utc::now(),
        };
        self.store.insert_job(job.clone());
        tracing::info!(job_id = %job.id, title = %job.title, "job created");
        Ok(job)
    }

    pub fn get(&self, id: Uuid) -> Result<CountedJob> {
        let (job, applicant_count) = self
            .store
            .job_with_applicants(id)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
        Ok(CountedJob {
            job,
            applicant_count,
        })
    }

    pub fn update(&self, id: Uuid, payload: JobPayload) -> Result<Job> {
        let fields = payload.into_fields()?;
        let job = self
            .store
            .update_job(id, fields)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))?;
        tracing::info!(job_id = %job.id, "job updated");
        Ok(job)
    }

    pub fn delete(&self, id: Uuid) -> Result<()> {
        match self.store.remove_job(id) {
            JobRemoval::Removed => {
                tracing::info!(job_id = %id, "job deleted");
                Ok(())
            }
            JobRemoval::NotFound => Err(Error::NotFound(format!("Job {} not found", id))),
            JobRemoval::Referenced(count) => Err(Error::Conflict(format!(
                "Job {} still has {} candidate(s) in the pipeline; move or resolve them first",
                id, count
            ))),
        }
    }

    /// Candidates for one job, in natural collection order.
    pub fn candidates_for(&self, id: Uuid) -> Result<Vec<Candidate>> {
        self.store
            .candidates_for_job(id)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", id)))
    }

    /// Read-side listing: filters, then pagination, over one consistent
    /// snapshot. Never mutates and never errors; an out-of-range page is an
    /// empty slice with correct metadata.
    pub fn list(&self, query: &JobListQuery) -> JobPage {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let (jobs, candidates) = self.store.snapshot();
        let mut filtered = jobs;

        if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty() && *s != "All") {
            filtered.retain(|job| job.status.as_str() == status);
        }
        if let Some(location) = query.location.as_deref().filter(|s| !s.is_empty()) {
            let needle = location.to_lowercase();
            filtered.retain(|job| job.location.to_lowercase().contains(&needle));
        }
        if let Some(skills) = query.skills.as_deref() {
            let wanted: Vec<String> = skills
                .split(',')
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            if !wanted.is_empty() {
                // AND semantics: every requested skill must be a substring
                // of some skill the job lists.
                filtered.retain(|job| {
                    wanted.iter().all(|wanted_skill| {
                        job.skills
                            .iter()
                            .any(|skill| skill.to_lowercase().contains(wanted_skill))
                    })
                });
            }
        }

        let total = filtered.len();
        let total_pages = total.div_ceil(limit);
        let items = filtered
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .map(|job| {
                let applicant_count = candidates.iter().filter(|c| c.job_id == job.id).count();
                CountedJob {
                    job,
                    applicant_count,
                }
            })
            .collect();

        JobPage {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    pub fn status_counts(&self) -> Vec<(crate::models::job::JobStatus, usize)> {
        let jobs = self.store.jobs();
        crate::models::job::JobStatus::ALL
            .iter()
            .map(|status| (*status, jobs.iter().filter(|j| j.status == *status).count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobStatus;
    use chrono::NaiveDate;

    fn payload(title: &str, location: &str, skills: &[&str], status: JobStatus) -> JobPayload {
        JobPayload {
            title: title.to_string(),
            description: "Long enough description".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            salary: None,
            deadline: "2025-01-01".to_string(),
            status,
        }
    }

    fn service_with_jobs(specs: &[(&str, &str, &[&str], JobStatus)]) -> JobService {
        let service = JobService::new(EntityStore::new());
        for (title, location, skills, status) in specs {
            service
                .create(payload(title, location, skills, *status))
                .unwrap();
        }
        service
    }

    #[test]
    fn skill_filter_uses_and_semantics() {
        let service = service_with_jobs(&[
            ("Frontend", "Remote", &["React", "Node.js"], JobStatus::Open),
            ("Backend", "Remote", &["Java", "Spring"], JobStatus::Open),
        ]);

        let query = JobListQuery {
            skills: Some("react,node".to_string()),
            ..Default::default()
        };
        let page = service.list(&query);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].job.title, "Frontend");

        let query = JobListQuery {
            skills: Some("react,java".to_string()),
            ..Default::default()
        };
        assert_eq!(service.list(&query).total, 0);
    }

    #[test]
    fn pagination_math_holds_for_any_page() {
        let service = service_with_jobs(&[
            ("A", "Remote", &["X"], JobStatus::Open),
            ("B", "Remote", &["X"], JobStatus::Open),
            ("C", "Remote", &["X"], JobStatus::Open),
            ("D", "Remote", &["X"], JobStatus::Open),
            ("E", "Remote", &["X"], JobStatus::Open),
        ]);

        let query = JobListQuery {
            limit: Some(2),
            ..Default::default()
        };
        let first = service.list(&query);
        assert_eq!(first.total, 5);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 2);

        let beyond = service.list(&JobListQuery {
            page: Some(9),
            limit: Some(2),
            ..Default::default()
        });
        assert_eq!(beyond.items.len(), 0);
        assert_eq!(beyond.total, 5);
        assert_eq!(beyond.total_pages, 3);
    }

    #[test]
    fn location_filter_is_case_insensitive_substring() {
        let service = service_with_jobs(&[
            ("Designer", "Hanoi", &["Figma"], JobStatus::Open),
            ("Sales", "Da Nang", &["CRM"], JobStatus::Open),
        ]);
        let page = service.list(&JobListQuery {
            location: Some("hAnOi".to_string()),
            ..Default::default()
        });
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].job.location, "Hanoi");
    }

    #[test]
    fn status_all_disables_the_filter() {
        let service = service_with_jobs(&[
            ("Open role", "Remote", &["X"], JobStatus::Open),
            ("Closed role", "Remote", &["X"], JobStatus::Closed),
        ]);
        assert_eq!(
            service
                .list(&JobListQuery {
                    status: Some("All".to_string()),
                    ..Default::default()
                })
                .total,
            2
        );
        assert_eq!(
            service
                .list(&JobListQuery {
                    status: Some("Closed".to_string()),
                    ..Default::default()
                })
                .total,
            1
        );
    }

    #[test]
    fn update_replaces_fields_but_not_identity() {
        let service = service_with_jobs(&[("Original", "Remote", &["X"], JobStatus::Open)]);
        let created = service.list(&JobListQuery::default()).items[0].job.clone();

        let mut replacement = payload("Renamed", "Hanoi", &["Y"], JobStatus::Closed);
        replacement.salary = Some("1,000 USD".to_string());
        replacement.deadline = "2026-06-30".to_string();
        let updated = service.update(created.id, replacement).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.posted_date, created.posted_date);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.location, "Hanoi");
        assert_eq!(updated.status, JobStatus::Closed);
        assert_eq!(
            updated.deadline,
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
        );
    }
}
