use crate::models::entities::enum_types::WithdrawalState;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// A member's request to move funds out. The wallet is debited when the row
/// is created; `transaction_id` points at that debit entry.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::withdrawal_requests)]
pub struct WithdrawalRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: i64,
    pub request_state: WithdrawalState,
    pub bank_name: String,
    pub iban: String,
    pub account_holder: String,
    pub transaction_id: Uuid,
    pub admin_id: Option<Uuid>,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::withdrawal_requests)]
pub struct NewWithdrawalRequest<'a> {
    pub user_id: Uuid,
    pub amount: i64,
    pub request_state: WithdrawalState,
    pub bank_name: &'a str,
    pub iban: &'a str,
    pub account_holder: &'a str,
    pub transaction_id: Uuid,
}
