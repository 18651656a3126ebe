use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::candidate::Stage;
use crate::dto::notification_dto::NotificationType;
use crate::utils::validation::parse_data_uri;

/// Best-effort extraction from an uploaded CV. Callers fall back to manual
/// entry when the collaborator fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub experience: String,
}

/// Everything the generation collaborator needs to draft one notification
/// email. Conditionally-required fields stay optional and are passed through
/// as "N/A" when absent.
#[derive(Debug, Clone)]
pub struct NotificationContext {
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_title: String,
    pub stage: Stage,
    pub notification_type: NotificationType,
    pub company_name: String,
    pub hiring_manager_name: String,
    pub interview_date_time: Option<String>,
    pub rejection_reason: Option<String>,
}

/// Client for the external text-generation collaborator. Latency and
/// correctness of the upstream are outside this system's control; every
/// call carries its own timeout.
#[derive(Clone)]
pub struct AiService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AiService {
    pub fn new(api_key: String, base_url: String, client: Client) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Drafts a personalized notification email and returns its full text.
    pub async fn generate_notification(&self, context: &NotificationContext) -> Result<String> {
        let system_prompt = r#"You are an AI assistant specialized in generating personalized email notifications for candidates in a recruitment process.
Based on the candidate's information, the job title, the stage in the recruitment process, and the notification type, create a personalized email message.

Examples:
- Interview Invite: Subject: Interview Invitation for <job> at <company>
  Body: a warm invitation naming the scheduled interview date/time and asking the candidate to confirm availability.
- Rejection Notice: Subject: Update on your application for <job> at <company>
  Body: a considerate note that the company is moving forward with other candidates, including the given reason.
- Offer: Subject: Job Offer for <job> at <company>
  Body: an enthusiastic offer for the position, inviting questions.

Sign off with the hiring manager's name. Return a JSON object with string fields 'subject' and 'body'."#;

        let payload = serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": notification_user_content(context)}
            ],
            "response_format": { "type": "json_object" },
            "temperature": 0.7
        });

        let response = self.chat(payload).await?;
        let subject = response
            .get("subject")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .trim()
            .to_string();
        let body = response
            .get("body")
            .and_then(|v| v.as_str())
            .map(str::trim)
            .ok_or_else(|| Error::Upstream("generated email is missing its body".to_string()))?
            .to_string();

        Ok(format!("Subject: {}\n\n{}", subject, body))
    }

    /// Extracts name, email, and an experience summary from a CV supplied
    /// as a base64 data URI.
    pub async fn extract_profile(&self, cv_data_uri: &str) -> Result<CandidateProfile> {
        let (mime, bytes) = parse_data_uri(cv_data_uri)
            .map_err(|e| Error::BadRequest(format!("Invalid CV data URI: {}", e)))?;
        tracing::info!(mime = %mime, size = bytes.len(), "extracting candidate profile from CV");

        let system_prompt = r#"You are an expert in extracting information from CVs.
Analyze the provided CV document and extract the candidate's name, email address, and a short summary of their work experience.
Return a JSON object with string fields 'name', 'email' and 'experience'."#;

        let content: Vec<JsonValue> = vec![
            serde_json::json!({
                "type": "text",
                "text": "Extract the candidate profile from the CV below."
            }),
            serde_json::json!({
                "type": "image_url",
                "image_url": { "url": cv_data_uri, "detail": "high" }
            }),
        ];

        let payload = serde_json::json!({
            "model": "gpt-4o",
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": content}
            ],
            "response_format": { "type": "json_object" },
            "max_tokens": 800
        });

        let response = self.chat(payload).await?;
        let profile: CandidateProfile = serde_json::from_value(response)?;
        Ok(profile)
    }

    async fn chat(&self, payload: JsonValue) -> Result<JsonValue> {
        let res = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(60))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!(
                "text generation API error {}: {}",
                status, text
            )));
        }

        let body: JsonValue = res.json().await?;

        body.get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .and_then(|s| serde_json::from_str(s).ok())
            .ok_or_else(|| Error::Upstream("invalid text generation response format".to_string()))
    }
}

fn notification_user_content(context: &NotificationContext) -> String {
    format!(
        "Candidate Name: {}\nCandidate Email: {}\nJob Title: {}\nStage: {}\nNotification Type: {}\nCompany Name: {}\nHiring Manager Name: {}\nInterview Date/Time: {}\nRejection Reason: {}",
        context.candidate_name,
        context.candidate_email,
        context.job_title,
        context.stage,
        context.notification_type,
        context.company_name,
        context.hiring_manager_name,
        context.interview_date_time.as_deref().unwrap_or("N/A"),
        context.rejection_reason.as_deref().unwrap_or("N/A"),
    )
}
