use crate::app_state::AppState;
use crate::repositories::investment_repository::InvestmentRepository;
use crate::repositories::project_repository::ProjectRepository;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::ledger_service::{LedgerService, TxnMeta};
use crate::services::notification_service::NotificationService;
use crate::services::referral_service::ReferralService;
use chrono::{Duration, Utc};
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::investment_dto::{InvestRequest, InvestResponse};
use clubvest_primitives::models::entities::enum_types::{InvestmentState, TransactionKind};
use clubvest_primitives::models::investment::NewInvestment;
use clubvest_primitives::utility::{end_date_after_months, format_minor};
use diesel::prelude::*;
use tracing::{error, info};
use uuid::Uuid;

pub struct InvestmentService;

impl InvestmentService {
    /// Commit funds to a project: investment row, wallet debit, ledger entry
    /// and member aggregates land in one database transaction. The referral
    /// reward check runs after commit and never blocks the investment.
    pub async fn invest(
        state: &AppState,
        user_id: Uuid,
        req: InvestRequest,
    ) -> Result<InvestResponse, ApiError> {
        let mut conn = state.db.get()?;

        // Idempotent replay: the ledger entry carries the investment id as
        // its reference.
        if let Some(existing) =
            TransactionRepository::find_by_idempotency_key(&mut conn, user_id, &req.idempotency_key)?
        {
            info!(investment_id = %existing.reference, "invest: idempotent replay");
            return Ok(InvestResponse {
                investment_id: existing.reference,
                transaction_id: existing.id,
                new_balance: LedgerService::get_balance(state, user_id).await?,
            });
        }

        let window = Duration::seconds(state.config.duplicate_investment_window_secs);

        let response = conn.transaction::<InvestResponse, ApiError, _>(|conn| {
            let project = ProjectRepository::find_by_id(conn, req.project_id)?;

            if !project.is_active {
                return Err(ApiError::BadRequest("Project is not open for investment".into()));
            }
            if req.amount < project.min_investment {
                return Err(ApiError::BadRequest(format!(
                    "Minimum investment for this project is {}",
                    format_minor(project.min_investment)
                )));
            }

            if InvestmentRepository::recent_duplicate_exists(
                conn,
                user_id,
                project.id,
                req.amount,
                Utc::now() - window,
            )? {
                return Err(ApiError::Conflict(
                    "An identical investment was just submitted; ignoring duplicate".into(),
                ));
            }

            // Checked before the insert so the first investment in a project
            // is what bumps the project counter.
            let first_in_project =
                !InvestmentRepository::user_has_invested_in_project(conn, user_id, project.id)?;

            let duration_months = req.duration_months.unwrap_or(project.duration_months);
            let now = Utc::now();

            let investment = InvestmentRepository::create(
                conn,
                NewInvestment {
                    user_id,
                    project_id: project.id,
                    amount: req.amount,
                    yield_rate: project.yield_rate,
                    duration_months,
                    invest_state: InvestmentState::Active,
                    end_date: end_date_after_months(now, duration_months),
                },
            )?;

            let description = format!("Investment in {}", project.name);
            let (new_balance, tx) = LedgerService::apply_delta(
                conn,
                user_id,
                -req.amount,
                TxnMeta {
                    kind: TransactionKind::Investment,
                    description: Some(&description),
                    reference: investment.id,
                    idempotency_key: &req.idempotency_key,
                },
            )?;

            UserRepository::record_investment(conn, user_id, req.amount, first_in_project)?;

            Ok(InvestResponse {
                investment_id: investment.id,
                transaction_id: tx.id,
                new_balance,
            })
        })?;

        // Single trigger point for the referral bonus; idempotent on its own.
        if let Err(e) = ReferralService::process_reward(state, user_id).await {
            error!(user_id = %user_id, "referral reward check failed: {}", e);
        }

        NotificationService::notify_best_effort(
            state,
            user_id,
            "Investment confirmed",
            &format!("You invested {}.", format_minor(req.amount)),
        )
        .await;

        Ok(response)
    }
}
