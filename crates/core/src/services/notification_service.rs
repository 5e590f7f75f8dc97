use crate::app_state::AppState;
use crate::repositories::notification_repository::NotificationRepository;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::notification::{NewNotification, Notification};
use tracing::warn;
use uuid::Uuid;

/// Fire-and-forget user notifications. Callers ignore the result; a lost
/// notification never blocks a ledger write.
pub struct NotificationService;

impl NotificationService {
    pub async fn notify(
        state: &AppState,
        user_id: Uuid,
        title: &str,
        body: &str,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get()?;

        NotificationRepository::create(
            &mut conn,
            NewNotification {
                user_id,
                title,
                body,
            },
        )
    }

    /// Convenience wrapper that only logs on failure.
    pub async fn notify_best_effort(state: &AppState, user_id: Uuid, title: &str, body: &str) {
        if let Err(e) = Self::notify(state, user_id, title, body).await {
            warn!(user_id = %user_id, "notification dropped: {}", e);
        }
    }

    pub async fn recent_for_user(
        state: &AppState,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Notification>, ApiError> {
        let mut conn = state.db.get()?;
        NotificationRepository::find_recent_by_user(&mut conn, user_id, limit)
    }
}
