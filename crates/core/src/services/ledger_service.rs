use crate::app_state::AppState;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::wallet_repository::WalletRepository;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::wallet_dto::ReconcileResponse;
use clubvest_primitives::models::entities::enum_types::{TransactionKind, TransactionState};
use clubvest_primitives::models::transaction::{NewTransaction, Transaction};
use diesel::prelude::*;
use tracing::{info, warn};
use uuid::Uuid;

/// Metadata for one ledger entry written by `apply_delta`.
pub struct TxnMeta<'a> {
    pub kind: TransactionKind,
    pub description: Option<&'a str>,
    pub reference: Uuid,
    pub idempotency_key: &'a str,
}

/// The only path allowed to move money. Everything else composes these
/// primitives inside a database transaction.
pub struct LedgerService;

impl LedgerService {
    pub async fn get_balance(state: &AppState, user_id: Uuid) -> Result<i64, ApiError> {
        let mut conn = state.db.get()?;
        Ok(WalletRepository::find_by_user(&mut conn, user_id)?.balance)
    }

    /// Adjust a wallet by `delta` (credit positive, debit negative) and
    /// append the matching completed ledger entry. Runs inside the caller's
    /// DB transaction: either both writes land or neither does.
    ///
    /// A duplicate idempotency key returns `Conflict`; a debit past zero
    /// returns `InsufficientFunds`. Both roll the enclosing transaction back.
    pub fn apply_delta(
        conn: &mut PgConnection,
        user_id: Uuid,
        delta: i64,
        meta: TxnMeta,
    ) -> Result<(i64, Transaction), ApiError> {
        let Some(tx) = TransactionRepository::try_create(
            conn,
            NewTransaction {
                user_id,
                kind: meta.kind,
                amount: delta,
                txn_state: TransactionState::Completed,
                description: meta.description,
                reference: meta.reference,
                idempotency_key: meta.idempotency_key,
            },
        )?
        else {
            return Err(ApiError::Conflict(
                "Operation already applied for this idempotency key".into(),
            ));
        };

        let Some(new_balance) = WalletRepository::adjust_balance(conn, user_id, delta)? else {
            // Distinguish a missing wallet from a refused debit.
            WalletRepository::find_by_user(conn, user_id)?;
            warn!(
                user_id = %user_id,
                delta,
                "ledger.apply_delta: debit refused, would overdraw"
            );
            return Err(ApiError::InsufficientFunds(
                "Balance too low for this operation".into(),
            ));
        };

        Ok((new_balance, tx))
    }

    /// Recompute the balance as the sum of completed ledger entries and
    /// overwrite the stored value. Repair tool for suspected drift; the
    /// wallet row stays locked for the duration.
    pub async fn reconcile_balance(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<ReconcileResponse, ApiError> {
        let mut conn = state.db.get()?;

        conn.transaction::<ReconcileResponse, ApiError, _>(|conn| {
            let wallet = WalletRepository::find_by_user_with_lock(conn, user_id)?;
            let recomputed = TransactionRepository::sum_completed_for_user(conn, user_id)?;

            if recomputed != wallet.balance {
                warn!(
                    user_id = %user_id,
                    stored = wallet.balance,
                    recomputed,
                    "ledger.reconcile: balance drift detected"
                );
                WalletRepository::overwrite_balance(conn, wallet.id, recomputed)?;
            } else {
                info!(user_id = %user_id, balance = wallet.balance, "ledger.reconcile: in sync");
            }

            Ok(ReconcileResponse {
                user_id,
                previous_balance: wallet.balance,
                recomputed_balance: recomputed,
            })
        })
    }
}
