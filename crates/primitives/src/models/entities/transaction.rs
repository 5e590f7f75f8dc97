use crate::models::entities::enum_types::{TransactionKind, TransactionState};
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Immutable ledger entry. Amounts are signed: credits positive, debits
/// negative. Rows are never mutated once `txn_state` is terminal.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub txn_state: TransactionState,
    pub description: Option<String>,
    pub reference: Uuid,
    pub idempotency_key: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransaction<'a> {
    pub user_id: Uuid,
    pub kind: TransactionKind,
    pub amount: i64,
    pub txn_state: TransactionState,
    pub description: Option<&'a str>,
    pub reference: Uuid,
    pub idempotency_key: &'a str,
}
