use chrono::{DateTime, Utc};
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::notification::{NewNotification, Notification};
use clubvest_primitives::schema::notifications;
use diesel::prelude::*;
use uuid::Uuid;

pub struct NotificationRepository;

impl NotificationRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_notification: NewNotification,
    ) -> Result<(), ApiError> {
        diesel::insert_into(notifications::table)
            .values(&new_notification)
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn find_recent_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Notification>, ApiError> {
        notifications::table
            .filter(notifications::user_id.eq(user_id))
            .order(notifications::created_at.desc())
            .limit(limit)
            .load::<Notification>(conn)
            .map_err(ApiError::from)
    }

    pub fn delete_read_older_than(
        conn: &mut PgConnection,
        cutoff: DateTime<Utc>,
    ) -> Result<usize, ApiError> {
        diesel::delete(
            notifications::table
                .filter(notifications::is_read.eq(true))
                .filter(notifications::created_at.lt(cutoff)),
        )
        .execute(conn)
        .map_err(ApiError::from)
    }
}
