use chrono::Utc;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::entities::enum_types::TransactionState;
use clubvest_primitives::models::transaction::{NewTransaction, Transaction};
use clubvest_primitives::models::transaction_dto::TransactionSummaryDto;
use clubvest_primitives::schema::transactions;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};
use uuid::Uuid;

pub struct TransactionRepository;

impl TransactionRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<Transaction>, ApiError> {
        transactions::table
            .find(id)
            .first::<Transaction>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_idempotency_key(
        conn: &mut PgConnection,
        user_id: Uuid,
        key: &str,
    ) -> Result<Option<Transaction>, ApiError> {
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::idempotency_key.eq(key))
            .first::<Transaction>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Insert guarded by the `(user_id, idempotency_key)` unique index.
    /// Returns `None` when an entry with the same key already exists.
    pub fn try_create(
        conn: &mut PgConnection,
        new_tx: NewTransaction,
    ) -> Result<Option<Transaction>, ApiError> {
        diesel::insert_into(transactions::table)
            .values(&new_tx)
            .on_conflict((transactions::user_id, transactions::idempotency_key))
            .do_nothing()
            .get_result::<Transaction>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(
        conn: &mut PgConnection,
        new_tx: NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let user_id = new_tx.user_id;
        let key = new_tx.idempotency_key.to_string();
        match Self::try_create(conn, new_tx)? {
            Some(tx) => Ok(tx),
            None => Self::find_by_idempotency_key(conn, user_id, &key)?.ok_or_else(|| {
                ApiError::Internal("Transaction vanished after idempotent insert".into())
            }),
        }
    }

    /// Conditional state transition; matches only while the row is still in
    /// `from`. Zero rows means someone else already moved it.
    pub fn transition_state(
        conn: &mut PgConnection,
        id: Uuid,
        from: TransactionState,
        to: TransactionState,
    ) -> Result<Option<Transaction>, ApiError> {
        diesel::update(transactions::table)
            .filter(transactions::id.eq(id))
            .filter(transactions::txn_state.eq(from))
            .set((
                transactions::txn_state.eq(to),
                transactions::updated_at.eq(Utc::now()),
            ))
            .get_result::<Transaction>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn sum_completed_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<i64, ApiError> {
        // `sum()` on an Int8 column widens to Numeric; keep the total in i64
        // since amounts are minor units.
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::txn_state.eq(TransactionState::Completed))
            .select(sql::<Nullable<BigInt>>("SUM(amount)"))
            .first::<Option<i64>>(conn)
            .map(|total| total.unwrap_or(0))
            .map_err(ApiError::from)
    }

    pub fn find_recent_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<TransactionSummaryDto>, ApiError> {
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::created_at.desc())
            .limit(limit)
            .select((
                transactions::id,
                transactions::kind,
                transactions::amount,
                transactions::txn_state,
                transactions::description,
                transactions::created_at,
            ))
            .load::<TransactionSummaryDto>(conn)
            .map_err(ApiError::from)
    }
}
