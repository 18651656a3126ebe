use crate::dto::notification_dto::{NotificationOutcome, SendNotificationPayload};
use crate::error::{Error, Result};
use crate::services::ai_service::{AiService, NotificationContext};
use crate::services::candidate_service::UNKNOWN_JOB_TITLE;
use crate::store::entity_store::EntityStore;

/// Orchestrates one notification: resolves the candidate and job, hands a
/// structured request to the generation collaborator, and normalizes the
/// outcome. Nothing is persisted and no mail is dispatched; delivery is
/// simulated and the generated text only reaches the logs.
#[derive(Clone)]
pub struct NotificationService {
    store: EntityStore,
    ai: AiService,
    default_company: String,
}

impl NotificationService {
    pub fn new(store: EntityStore, ai: AiService, default_company: String) -> Self {
        Self {
            store,
            ai,
            default_company,
        }
    }

    /// Resolution failures (unknown candidate) surface as errors before any
    /// orchestration happens; once the collaborator is involved, every
    /// outcome is a normal [`NotificationOutcome`].
    pub async fn send(&self, payload: SendNotificationPayload) -> Result<NotificationOutcome> {
        let candidate = self
            .store
            .find_candidate(payload.candidate_id)
            .ok_or_else(|| {
                Error::NotFound(format!("Candidate {} not found", payload.candidate_id))
            })?;
        let job_title = match self.store.find_job(candidate.job_id) {
            Some(job) => job.title,
            None => {
                tracing::warn!(
                    candidate_id = %candidate.id,
                    job_id = %candidate.job_id,
                    "notifying a candidate whose job no longer exists"
                );
                UNKNOWN_JOB_TITLE.to_string()
            }
        };

        let context = NotificationContext {
            candidate_name: candidate.name,
            candidate_email: candidate.email,
            job_title,
            stage: candidate.stage,
            notification_type: payload.notification_type,
            company_name: payload
                .company_name
                .unwrap_or_else(|| self.default_company.clone()),
            hiring_manager_name: payload.hiring_manager_name,
            interview_date_time: payload.interview_date_time,
            rejection_reason: payload.rejection_reason,
        };

        match self.ai.generate_notification(&context).await {
            Ok(email) => {
                tracing::info!(
                    candidate = %context.candidate_name,
                    kind = %context.notification_type,
                    "notification generated"
                );
                tracing::debug!(%email, "generated notification email (delivery simulated)");
                Ok(NotificationOutcome {
                    success: true,
                    message: format!(
                        "Notification sent successfully to {} for {} at stage {}.",
                        context.candidate_name, context.job_title, context.stage
                    ),
                })
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    candidate = %context.candidate_name,
                    "notification generation failed"
                );
                Ok(NotificationOutcome {
                    success: false,
                    message: format!(
                        "Failed to send notification to {}. Error: {}",
                        context.candidate_name, err
                    ),
                })
            }
        }
    }
}
