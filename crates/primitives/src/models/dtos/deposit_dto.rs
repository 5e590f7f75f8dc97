use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Member announces a bank transfer on its way in. Creates the pending
/// deposit an admin later confirms or rejects.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnnounceDepositRequest {
    #[validate(range(min = 1))]
    pub amount: i64,
    /// Reference code the member puts on the bank transfer.
    #[validate(length(min = 4, max = 64))]
    pub reference_code: String,
    #[validate(length(min = 8, max = 128))]
    pub idempotency_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnnounceDepositResponse {
    pub transaction_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ConfirmDepositRequest {
    /// Amount actually received, minor units. Must match or correct the
    /// announced figure.
    #[validate(range(min = 1))]
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DepositActionResponse {
    pub transaction_id: Uuid,
    pub new_balance: Option<i64>,
}
