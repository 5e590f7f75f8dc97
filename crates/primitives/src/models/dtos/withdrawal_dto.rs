use crate::models::entities::enum_types::WithdrawalState;
use crate::models::entities::withdrawal_request::WithdrawalRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RequestWithdrawalRequest {
    /// Minor units; the configured minimum (default 100.00) also applies.
    #[validate(range(min = 1))]
    pub amount: i64,
    #[validate(length(min = 2, max = 128))]
    pub bank_name: String,
    #[validate(custom(function = "crate::utility::validate_iban"))]
    pub iban: String,
    #[validate(length(min = 2, max = 128))]
    pub account_holder: String,
    #[validate(length(min = 8, max = 128))]
    pub idempotency_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RequestWithdrawalResponse {
    pub withdrawal_id: Uuid,
    pub transaction_id: Uuid,
    pub new_balance: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateWithdrawalStatusRequest {
    pub new_state: WithdrawalState,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateWithdrawalStatusResponse {
    pub withdrawal_id: Uuid,
    pub request_state: WithdrawalState,
    /// Set when the transition re-credited the wallet.
    pub refunded_amount: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WithdrawalDto {
    pub id: Uuid,
    pub amount: i64,
    pub request_state: WithdrawalState,
    pub bank_name: String,
    pub iban: String,
    pub requested_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl From<WithdrawalRequest> for WithdrawalDto {
    fn from(w: WithdrawalRequest) -> Self {
        Self {
            id: w.id,
            amount: w.amount,
            request_state: w.request_state,
            bank_name: w.bank_name,
            iban: w.iban,
            requested_at: w.requested_at,
            processed_at: w.processed_at,
        }
    }
}
