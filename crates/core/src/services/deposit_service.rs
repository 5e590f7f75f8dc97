use crate::app_state::AppState;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::wallet_repository::WalletRepository;
use crate::services::notification_service::NotificationService;
use chrono::Utc;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::deposit_dto::{
    AnnounceDepositRequest, AnnounceDepositResponse, ConfirmDepositRequest, DepositActionResponse,
};
use clubvest_primitives::models::entities::enum_types::{TransactionKind, TransactionState};
use clubvest_primitives::models::transaction::{NewTransaction, Transaction};
use clubvest_primitives::schema::transactions;
use clubvest_primitives::utility::format_minor;
use diesel::prelude::*;
use tracing::info;
use uuid::Uuid;

pub struct DepositService;

impl DepositService {
    /// Member announces an incoming bank transfer. Writes the pending
    /// deposit entry that `confirm` later turns into a credit. No balance
    /// effect until then.
    pub async fn announce(
        state: &AppState,
        user_id: Uuid,
        req: AnnounceDepositRequest,
    ) -> Result<AnnounceDepositResponse, ApiError> {
        let mut conn = state.db.get()?;

        if let Some(existing) =
            TransactionRepository::find_by_idempotency_key(&mut conn, user_id, &req.idempotency_key)?
        {
            info!(
                transaction_id = %existing.id,
                "deposit.announce: idempotent replay"
            );
            return Ok(AnnounceDepositResponse {
                transaction_id: existing.id,
            });
        }

        let description = format!("Bank transfer, reference {}", req.reference_code);
        let tx = TransactionRepository::create(
            &mut conn,
            NewTransaction {
                user_id,
                kind: TransactionKind::Deposit,
                amount: req.amount,
                txn_state: TransactionState::Pending,
                description: Some(&description),
                reference: Uuid::new_v4(),
                idempotency_key: &req.idempotency_key,
            },
        )?;

        Ok(AnnounceDepositResponse {
            transaction_id: tx.id,
        })
    }

    /// Admin confirms the funds arrived. Marking the source row completed and
    /// crediting the wallet happen in one database transaction; a failure in
    /// either leaves both untouched.
    pub async fn confirm(
        state: &AppState,
        transfer_id: Uuid,
        req: ConfirmDepositRequest,
    ) -> Result<DepositActionResponse, ApiError> {
        let mut conn = state.db.get()?;

        let (tx, new_balance) = conn.transaction::<(Transaction, i64), ApiError, _>(|conn| {
            // The received amount may correct the announced figure, so both
            // fields move in one conditional update gated on `pending`.
            let confirmed = diesel::update(transactions::table)
                .filter(transactions::id.eq(transfer_id))
                .filter(transactions::kind.eq(TransactionKind::Deposit))
                .filter(transactions::txn_state.eq(TransactionState::Pending))
                .set((
                    transactions::amount.eq(req.amount),
                    transactions::txn_state.eq(TransactionState::Completed),
                    transactions::updated_at.eq(Utc::now()),
                ))
                .get_result::<Transaction>(conn)
                .optional()?;

            let Some(tx) = confirmed else {
                return match TransactionRepository::find_by_id(conn, transfer_id)? {
                    Some(_) => Err(ApiError::Conflict(
                        "Deposit is not pending; already processed?".into(),
                    )),
                    None => Err(ApiError::NotFound("Pending deposit not found".into())),
                };
            };

            // The member may never have opened their wallet view; a first
            // deposit still has somewhere to land.
            WalletRepository::create_if_not_exists(conn, tx.user_id)?;
            let Some(new_balance) =
                WalletRepository::adjust_balance(conn, tx.user_id, req.amount)?
            else {
                return Err(ApiError::Internal("Deposit credit matched no wallet".into()));
            };

            Ok((tx, new_balance))
        })?;

        info!(
            transaction_id = %tx.id,
            user_id = %tx.user_id,
            amount = req.amount,
            "deposit.confirm: credited"
        );

        NotificationService::notify_best_effort(
            state,
            tx.user_id,
            "Deposit confirmed",
            &format!("Your deposit of {} has been credited.", format_minor(req.amount)),
        )
        .await;

        Ok(DepositActionResponse {
            transaction_id: tx.id,
            new_balance: Some(new_balance),
        })
    }

    /// Admin rejects a pending deposit. No balance effect.
    pub async fn reject(
        state: &AppState,
        transfer_id: Uuid,
    ) -> Result<DepositActionResponse, ApiError> {
        let mut conn = state.db.get()?;

        let rejected = TransactionRepository::transition_state(
            &mut conn,
            transfer_id,
            TransactionState::Pending,
            TransactionState::Rejected,
        )?;

        let Some(tx) = rejected else {
            return match TransactionRepository::find_by_id(&mut conn, transfer_id)? {
                Some(_) => Err(ApiError::Conflict(
                    "Deposit is not pending; already processed?".into(),
                )),
                None => Err(ApiError::NotFound("Pending deposit not found".into())),
            };
        };

        NotificationService::notify_best_effort(
            state,
            tx.user_id,
            "Deposit rejected",
            "Your announced deposit could not be matched to a bank transfer.",
        )
        .await;

        Ok(DepositActionResponse {
            transaction_id: tx.id,
            new_balance: None,
        })
    }
}
