use crate::app_state::AppState;
use crate::repositories::referral_repository::ReferralRepository;
use crate::services::ledger_service::{LedgerService, TxnMeta};
use crate::services::notification_service::NotificationService;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::distribution_dto::ReferralRewardResponse;
use clubvest_primitives::models::entities::enum_types::TransactionKind;
use clubvest_primitives::models::referral::Referral;
use clubvest_primitives::utility::format_minor;
use diesel::prelude::*;
use tracing::info;
use uuid::Uuid;

pub struct ReferralService;

impl ReferralService {
    /// One-time referrer bonus once the referred member invests. The claim
    /// is a conditional update on `referrer_rewarded`, so concurrent calls
    /// reward at most once; no matching row is a no-op, not an error.
    pub async fn process_reward(
        state: &AppState,
        referred_user_id: Uuid,
    ) -> Result<ReferralRewardResponse, ApiError> {
        let bonus = state.config.referral_bonus_minor;
        let mut conn = state.db.get()?;

        let claimed = conn.transaction::<Option<Referral>, ApiError, _>(|conn| {
            let Some(referral) = ReferralRepository::claim_reward(conn, referred_user_id)? else {
                return Ok(None);
            };

            let key = format!("referral-reward:{}", referral.id);
            LedgerService::apply_delta(
                conn,
                referral.referrer_id,
                bonus,
                TxnMeta {
                    kind: TransactionKind::ReferralReward,
                    description: Some("Referral bonus"),
                    reference: referral.id,
                    idempotency_key: &key,
                },
            )?;

            Ok(Some(referral))
        })?;

        let Some(referral) = claimed else {
            return Ok(ReferralRewardResponse { rewarded: false });
        };

        info!(
            referral_id = %referral.id,
            referrer_id = %referral.referrer_id,
            bonus,
            "referral.reward: credited"
        );

        NotificationService::notify_best_effort(
            state,
            referral.referrer_id,
            "Referral bonus",
            &format!(
                "You earned {} because someone you referred made their first investment.",
                format_minor(bonus)
            ),
        )
        .await;

        Ok(ReferralRewardResponse { rewarded: true })
    }
}
