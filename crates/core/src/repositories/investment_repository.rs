use chrono::{DateTime, Utc};
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::entities::enum_types::InvestmentState;
use clubvest_primitives::models::investment::{Investment, NewInvestment};
use clubvest_primitives::schema::investments;
use diesel::prelude::*;
use uuid::Uuid;

pub struct InvestmentRepository;

impl InvestmentRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_investment: NewInvestment,
    ) -> Result<Investment, ApiError> {
        diesel::insert_into(investments::table)
            .values(&new_investment)
            .get_result::<Investment>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_active_by_project(
        conn: &mut PgConnection,
        project_id: Uuid,
    ) -> Result<Vec<Investment>, ApiError> {
        investments::table
            .filter(investments::project_id.eq(project_id))
            .filter(investments::invest_state.eq(InvestmentState::Active))
            .order(investments::created_at.asc())
            .load::<Investment>(conn)
            .map_err(ApiError::from)
    }

    pub fn user_has_invested_in_project(
        conn: &mut PgConnection,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<bool, ApiError> {
        diesel::select(diesel::dsl::exists(
            investments::table
                .filter(investments::user_id.eq(user_id))
                .filter(investments::project_id.eq(project_id)),
        ))
        .get_result::<bool>(conn)
        .map_err(ApiError::from)
    }

    /// Best-effort duplicate suppression: same user, project and amount
    /// inside the given window.
    pub fn recent_duplicate_exists(
        conn: &mut PgConnection,
        user_id: Uuid,
        project_id: Uuid,
        amount: i64,
        since: DateTime<Utc>,
    ) -> Result<bool, ApiError> {
        diesel::select(diesel::dsl::exists(
            investments::table
                .filter(investments::user_id.eq(user_id))
                .filter(investments::project_id.eq(project_id))
                .filter(investments::amount.eq(amount))
                .filter(investments::created_at.gt(since)),
        ))
        .get_result::<bool>(conn)
        .map_err(ApiError::from)
    }

    /// Flip matured active investments to completed. Returns the rows flipped.
    pub fn complete_matured(
        conn: &mut PgConnection,
        now: DateTime<Utc>,
    ) -> Result<usize, ApiError> {
        diesel::update(investments::table)
            .filter(investments::invest_state.eq(InvestmentState::Active))
            .filter(investments::end_date.le(now))
            .set(investments::invest_state.eq(InvestmentState::Completed))
            .execute(conn)
            .map_err(ApiError::from)
    }
}
