use axum::extract::State;
use axum::{Extension, Json};
use clubvest_core::services::notification_service::NotificationService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::notification_dto::NotificationDto;
use std::sync::Arc;

const RECENT_LIMIT: i64 = 50;

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notifications",
    summary = "Own recent notifications, newest first",
    responses(
        (status = 200, body = [NotificationDto]),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<NotificationDto>>, ApiError> {
    let user_id = claims.user_id()?;
    let rows = NotificationService::recent_for_user(&state, user_id, RECENT_LIMIT).await?;
    Ok(Json(rows.into_iter().map(NotificationDto::from).collect()))
}
