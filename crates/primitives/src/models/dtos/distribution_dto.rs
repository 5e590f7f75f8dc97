use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DistributeResponse {
    /// Investors credited by this call.
    pub processed: usize,
    /// Investors already credited by an earlier attempt.
    pub skipped: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReferralRewardResponse {
    pub rewarded: bool,
}
