use crate::app_state::AppState;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::withdrawal_repository::WithdrawalRepository;
use crate::services::ledger_service::{LedgerService, TxnMeta};
use crate::services::notification_service::NotificationService;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::withdrawal_dto::{
    RequestWithdrawalRequest, RequestWithdrawalResponse, UpdateWithdrawalStatusResponse,
    WithdrawalDto,
};
use clubvest_primitives::models::entities::enum_types::{TransactionKind, WithdrawalState};
use clubvest_primitives::models::withdrawal_request::{NewWithdrawalRequest, WithdrawalRequest};
use clubvest_primitives::utility::format_minor;
use diesel::prelude::*;
use tracing::info;
use uuid::Uuid;

pub struct WithdrawalService;

impl WithdrawalService {
    /// Member asks to move funds out. The wallet is debited here, inside the
    /// same database transaction that creates the request row, so two
    /// concurrent requests can never both pass the balance check.
    pub async fn request(
        state: &AppState,
        user_id: Uuid,
        req: RequestWithdrawalRequest,
    ) -> Result<RequestWithdrawalResponse, ApiError> {
        if req.amount < state.config.min_withdrawal_minor {
            return Err(ApiError::BadRequest(format!(
                "Minimum withdrawal is {}",
                format_minor(state.config.min_withdrawal_minor)
            )));
        }

        let mut conn = state.db.get()?;

        // Idempotent replay: the debit entry already exists, so hand back the
        // request that was created with it.
        if let Some(existing) =
            TransactionRepository::find_by_idempotency_key(&mut conn, user_id, &req.idempotency_key)?
        {
            let withdrawal =
                WithdrawalRepository::find_by_transaction(&mut conn, existing.id)?.ok_or_else(
                    || ApiError::Conflict("Idempotency key used by another operation".into()),
                )?;
            info!(withdrawal_id = %withdrawal.id, "withdrawal.request: idempotent replay");
            return Ok(RequestWithdrawalResponse {
                withdrawal_id: withdrawal.id,
                transaction_id: existing.id,
                new_balance: LedgerService::get_balance(state, user_id).await?,
            });
        }

        let description = format!("Withdrawal to {} ({})", req.bank_name, req.iban);

        let response = conn.transaction::<RequestWithdrawalResponse, ApiError, _>(|conn| {
            let (new_balance, tx) = LedgerService::apply_delta(
                conn,
                user_id,
                -req.amount,
                TxnMeta {
                    kind: TransactionKind::Withdrawal,
                    description: Some(&description),
                    reference: Uuid::new_v4(),
                    idempotency_key: &req.idempotency_key,
                },
            )?;

            let withdrawal = WithdrawalRepository::create(
                conn,
                NewWithdrawalRequest {
                    user_id,
                    amount: req.amount,
                    request_state: WithdrawalState::Pending,
                    bank_name: &req.bank_name,
                    iban: &req.iban,
                    account_holder: &req.account_holder,
                    transaction_id: tx.id,
                },
            )?;

            Ok(RequestWithdrawalResponse {
                withdrawal_id: withdrawal.id,
                transaction_id: tx.id,
                new_balance,
            })
        })?;

        NotificationService::notify_best_effort(
            state,
            user_id,
            "Withdrawal requested",
            &format!(
                "Your withdrawal of {} is pending review.",
                format_minor(req.amount)
            ),
        )
        .await;

        Ok(response)
    }

    /// Admin moves a request through its state machine. Rejection and
    /// cancellation re-credit the wallet, since the debit was taken at
    /// request time; the refund is a fresh ledger entry, keyed so a retried
    /// transition cannot refund twice.
    pub async fn update_status(
        state: &AppState,
        admin_id: Uuid,
        withdrawal_id: Uuid,
        new_state: WithdrawalState,
    ) -> Result<UpdateWithdrawalStatusResponse, ApiError> {
        let mut conn = state.db.get()?;

        let (updated, refunded) =
            conn.transaction::<(WithdrawalRequest, Option<i64>), ApiError, _>(|conn| {
                let current = WithdrawalRepository::find_by_id_with_lock(conn, withdrawal_id)?;

                if !current.request_state.can_transition_to(new_state) {
                    return Err(ApiError::Conflict(format!(
                        "Cannot move withdrawal from {} to {}",
                        current.request_state, new_state
                    )));
                }

                let refunded = if new_state.reverts_debit() {
                    let key = format!("withdrawal-refund:{}", current.id);
                    let description = format!("Refund of withdrawal request {}", current.id);
                    let (_, _tx) = LedgerService::apply_delta(
                        conn,
                        current.user_id,
                        current.amount,
                        TxnMeta {
                            kind: TransactionKind::Withdrawal,
                            description: Some(&description),
                            reference: current.id,
                            idempotency_key: &key,
                        },
                    )?;
                    Some(current.amount)
                } else {
                    None
                };

                let updated =
                    WithdrawalRepository::update_state(conn, current.id, new_state, admin_id)?;

                Ok((updated, refunded))
            })?;

        info!(
            withdrawal_id = %updated.id,
            state = %updated.request_state,
            refunded = refunded.unwrap_or(0),
            "withdrawal.update_status"
        );

        let message = match new_state {
            WithdrawalState::Rejected | WithdrawalState::Cancelled => format!(
                "Your withdrawal of {} was {} and the amount returned to your wallet.",
                format_minor(updated.amount),
                new_state
            ),
            _ => format!(
                "Your withdrawal of {} is now {}.",
                format_minor(updated.amount),
                new_state
            ),
        };
        NotificationService::notify_best_effort(state, updated.user_id, "Withdrawal update", &message)
            .await;

        Ok(UpdateWithdrawalStatusResponse {
            withdrawal_id: updated.id,
            request_state: updated.request_state,
            refunded_amount: refunded,
        })
    }

    pub async fn list_for_user(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<Vec<WithdrawalDto>, ApiError> {
        let mut conn = state.db.get()?;
        let rows = WithdrawalRepository::find_all_by_user(&mut conn, user_id)?;
        Ok(rows.into_iter().map(WithdrawalDto::from).collect())
    }
}
