use crate::models::entities::enum_types::PaymentRunState;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// One yield distribution event per project per period. `processed_at` is the
/// idempotency guard: once set, the fan-out must not repeat.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::scheduled_payments)]
#[diesel(belongs_to(crate::models::entities::project::Project))]
pub struct ScheduledPayment {
    pub id: Uuid,
    pub project_id: Uuid,
    pub payment_date: DateTime<Utc>,
    pub percentage: f64,
    pub run_state: PaymentRunState,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::scheduled_payments)]
pub struct NewScheduledPayment {
    pub project_id: Uuid,
    pub payment_date: DateTime<Utc>,
    pub percentage: f64,
    pub run_state: PaymentRunState,
}
