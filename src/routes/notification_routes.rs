use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::notification_dto::{NotificationOutcome, SendNotificationPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = SendNotificationPayload,
    responses(
        (status = 200, description = "Normalized result; success=false when the generator failed", body = Json<NotificationOutcome>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn send_notification(
    State(state): State<AppState>,
    Json(payload): Json<SendNotificationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let outcome = state.notification_service.send(payload).await?;
    Ok(Json(outcome))
}
