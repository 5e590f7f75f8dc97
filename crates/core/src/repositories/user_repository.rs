use chrono::Utc;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::schema::users;
use diesel::prelude::*;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    /// Bump aggregates after an investment. `first_in_project` controls the
    /// project counter so repeat investments in one project count once.
    pub fn record_investment(
        conn: &mut PgConnection,
        user_id: Uuid,
        amount: i64,
        first_in_project: bool,
    ) -> Result<(), ApiError> {
        let project_increment = if first_in_project { 1 } else { 0 };

        diesel::update(users::table.find(user_id))
            .set((
                users::investment_total.eq(users::investment_total + amount),
                users::projects_count.eq(users::projects_count + project_increment),
                users::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }
}
