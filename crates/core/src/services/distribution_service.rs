use crate::app_state::AppState;
use crate::repositories::investment_repository::InvestmentRepository;
use crate::repositories::scheduled_payment_repository::ScheduledPaymentRepository;
use crate::services::ledger_service::{LedgerService, TxnMeta};
use crate::services::notification_service::NotificationService;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::distribution_dto::DistributeResponse;
use clubvest_primitives::models::entities::enum_types::TransactionKind;
use clubvest_primitives::utility::{format_minor, yield_amount};
use diesel::prelude::*;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct DistributionService;

impl DistributionService {
    /// Fan a scheduled yield payment out to every active investor of the
    /// project. Each investor is its own atomic sub-operation, keyed by
    /// `yield:{payment}:{investment}`, so a re-run after partial failure
    /// credits only whoever is still missing. `processed_at` is set once the
    /// whole fan-out has succeeded; a call against an already-processed
    /// payment is a no-op.
    pub async fn distribute(
        state: &AppState,
        payment_id: Uuid,
    ) -> Result<DistributeResponse, ApiError> {
        let mut conn = state.db.get()?;

        let payment = ScheduledPaymentRepository::find_by_id(&mut conn, payment_id)?;

        if payment.processed_at.is_some() {
            info!(payment_id = %payment.id, "distribute: already processed, no-op");
            return Ok(DistributeResponse {
                processed: 0,
                skipped: 0,
            });
        }

        let investments =
            InvestmentRepository::find_active_by_project(&mut conn, payment.project_id)?;

        let mut processed = 0usize;
        let mut skipped = 0usize;
        let mut failed = 0usize;

        for investment in &investments {
            let credit = yield_amount(investment.amount, payment.percentage);
            let key = format!("yield:{}:{}", payment.id, investment.id);
            let description = format!(
                "Yield payout ({}%) on investment {}",
                payment.percentage, investment.id
            );

            let result = conn.transaction::<i64, ApiError, _>(|conn| {
                let (new_balance, _tx) = LedgerService::apply_delta(
                    conn,
                    investment.user_id,
                    credit,
                    TxnMeta {
                        kind: TransactionKind::Yield,
                        description: Some(&description),
                        reference: payment.id,
                        idempotency_key: &key,
                    },
                )?;
                Ok(new_balance)
            });

            match result {
                Ok(_) => {
                    processed += 1;
                    NotificationService::notify_best_effort(
                        state,
                        investment.user_id,
                        "Yield received",
                        &format!("A yield payment of {} was credited.", format_minor(credit)),
                    )
                    .await;
                }
                Err(ApiError::Conflict(_)) => {
                    // Credited by an earlier attempt.
                    skipped += 1;
                }
                Err(e) => {
                    failed += 1;
                    error!(
                        payment_id = %payment.id,
                        investment_id = %investment.id,
                        user_id = %investment.user_id,
                        "distribute: investor credit failed: {}",
                        e
                    );
                }
            }
        }

        if failed > 0 {
            // Leave processed_at unset so the run can be retried; investors
            // already credited are skipped by their idempotency keys.
            warn!(
                payment_id = %payment.id,
                processed,
                skipped,
                failed,
                "distribute: partial failure, payment left retryable"
            );
            return Err(ApiError::PartialFailure { processed, failed });
        }

        // Zero-investor runs are marked processed too, instead of staying
        // retryable forever.
        if ScheduledPaymentRepository::mark_processed(&mut conn, payment.id)?.is_none() {
            warn!(payment_id = %payment.id, "distribute: lost processed_at race after fan-out");
        }

        info!(
            payment_id = %payment.id,
            processed,
            skipped,
            investors = investments.len(),
            "distribute: completed"
        );

        Ok(DistributeResponse { processed, skipped })
    }
}
