use chrono::Utc;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::entities::enum_types::PaymentRunState;
use clubvest_primitives::models::scheduled_payment::ScheduledPayment;
use clubvest_primitives::schema::scheduled_payments;
use diesel::prelude::*;
use uuid::Uuid;

pub struct ScheduledPaymentRepository;

impl ScheduledPaymentRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<ScheduledPayment, ApiError> {
        scheduled_payments::table
            .find(id)
            .first::<ScheduledPayment>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Scheduled payment not found".into())
                } else {
                    ApiError::from(e)
                }
            })
    }

    /// Set `processed_at` only if it is still null; the guard against a
    /// second distribution run.
    pub fn mark_processed(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<ScheduledPayment>, ApiError> {
        diesel::update(scheduled_payments::table)
            .filter(scheduled_payments::id.eq(id))
            .filter(scheduled_payments::processed_at.is_null())
            .set((
                scheduled_payments::run_state.eq(PaymentRunState::Paid),
                scheduled_payments::processed_at.eq(Utc::now()),
            ))
            .get_result::<ScheduledPayment>(conn)
            .optional()
            .map_err(ApiError::from)
    }
}
