use chrono::Utc;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::entities::enum_types::WithdrawalState;
use clubvest_primitives::models::withdrawal_request::{NewWithdrawalRequest, WithdrawalRequest};
use clubvest_primitives::schema::withdrawal_requests;
use diesel::prelude::*;
use uuid::Uuid;

pub struct WithdrawalRepository;

impl WithdrawalRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_request: NewWithdrawalRequest,
    ) -> Result<WithdrawalRequest, ApiError> {
        diesel::insert_into(withdrawal_requests::table)
            .values(&new_request)
            .get_result::<WithdrawalRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id_with_lock(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<WithdrawalRequest, ApiError> {
        withdrawal_requests::table
            .find(id)
            .for_update()
            .first::<WithdrawalRequest>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Withdrawal request not found".into())
                } else {
                    ApiError::from(e)
                }
            })
    }

    pub fn update_state(
        conn: &mut PgConnection,
        id: Uuid,
        state: WithdrawalState,
        admin_id: Uuid,
    ) -> Result<WithdrawalRequest, ApiError> {
        diesel::update(withdrawal_requests::table.find(id))
            .set((
                withdrawal_requests::request_state.eq(state),
                withdrawal_requests::admin_id.eq(admin_id),
                withdrawal_requests::processed_at.eq(Utc::now()),
            ))
            .get_result::<WithdrawalRequest>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_transaction(
        conn: &mut PgConnection,
        transaction_id: Uuid,
    ) -> Result<Option<WithdrawalRequest>, ApiError> {
        withdrawal_requests::table
            .filter(withdrawal_requests::transaction_id.eq(transaction_id))
            .first::<WithdrawalRequest>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<WithdrawalRequest>, ApiError> {
        withdrawal_requests::table
            .filter(withdrawal_requests::user_id.eq(user_id))
            .order(withdrawal_requests::requested_at.desc())
            .load::<WithdrawalRequest>(conn)
            .map_err(ApiError::from)
    }
}
