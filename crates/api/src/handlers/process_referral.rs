use axum::extract::{Path, State};
use axum::{Extension, Json};
use clubvest_core::services::referral_service::ReferralService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::distribution_dto::ReferralRewardResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/admin/referrals/{user_id}/reward",
    tag = "Admin",
    summary = "Re-run the referral reward check for a referred member",
    description = "Repair endpoint for the reward that normally fires after a member's first \
                   investment. Pays out at most once; `rewarded: false` means there was nothing \
                   to do.",
    params(("user_id" = Uuid, Path, description = "The referred member's user id")),
    responses(
        (status = 200, body = ReferralRewardResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn process_referral(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ReferralRewardResponse>, ApiError> {
    claims.require_admin()?;
    let res = ReferralService::process_reward(&state, user_id).await?;
    Ok(Json(res))
}
