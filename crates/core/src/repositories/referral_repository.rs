use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::entities::enum_types::ReferralState;
use clubvest_primitives::models::referral::Referral;
use clubvest_primitives::schema::referrals;
use diesel::prelude::*;
use uuid::Uuid;

pub struct ReferralRepository;

impl ReferralRepository {
    /// Single atomic claim of the reward: flips `referrer_rewarded` only if
    /// it is still false. Returns `None` when there is nothing to reward,
    /// which covers both "no referral" and "already rewarded".
    pub fn claim_reward(
        conn: &mut PgConnection,
        referred_id: Uuid,
    ) -> Result<Option<Referral>, ApiError> {
        diesel::update(referrals::table)
            .filter(referrals::referred_id.eq(referred_id))
            .filter(referrals::referrer_rewarded.eq(false))
            .set((
                referrals::referral_state.eq(ReferralState::Completed),
                referrals::referrer_rewarded.eq(true),
            ))
            .get_result::<Referral>(conn)
            .optional()
            .map_err(ApiError::from)
    }
}
