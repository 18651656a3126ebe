use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Category of outbound message; drives template selection in the
/// generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationType {
    InterviewInvite,
    RejectionNotice,
    Offer,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::InterviewInvite => "interviewInvite",
            NotificationType::RejectionNotice => "rejectionNotice",
            NotificationType::Offer => "offer",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationPayload {
    pub candidate_id: Uuid,
    pub notification_type: NotificationType,
    /// Falls back to the configured company name when omitted.
    pub company_name: Option<String>,
    #[validate(length(min = 1, message = "hiringManagerName must not be empty"))]
    pub hiring_manager_name: String,
    /// Expected for interview invites; passed through as "N/A" when absent.
    pub interview_date_time: Option<String>,
    /// Expected for rejection notices; passed through as "N/A" when absent.
    pub rejection_reason: Option<String>,
}

/// Normalized orchestration result. The endpoint returns this for both
/// outcomes; an upstream failure never surfaces as an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationOutcome {
    pub success: bool,
    pub message: String,
}
