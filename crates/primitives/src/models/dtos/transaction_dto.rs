use crate::models::entities::enum_types::{TransactionKind, TransactionState};
use chrono::{DateTime, Utc};
use diesel::Queryable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Queryable, ToSchema)]
pub struct TransactionSummaryDto {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub txn_state: TransactionState,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransactionListQuery {
    pub limit: Option<i64>,
}
