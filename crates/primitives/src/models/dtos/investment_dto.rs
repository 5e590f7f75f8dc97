use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct InvestRequest {
    pub project_id: Uuid,
    /// Minor units; must also meet the project's own minimum.
    #[validate(range(min = 1))]
    pub amount: i64,
    /// Optional override; defaults to the project duration.
    #[validate(range(min = 1, max = 120))]
    pub duration_months: Option<i32>,
    #[validate(length(min = 8, max = 128))]
    pub idempotency_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InvestResponse {
    pub investment_id: Uuid,
    pub transaction_id: Uuid,
    pub new_balance: i64,
}
