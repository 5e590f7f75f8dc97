use axum::extract::State;
use axum::{Extension, Json};
use clubvest_core::services::deposit_service::DepositService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::deposit_dto::{
    AnnounceDepositRequest, AnnounceDepositResponse,
};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/deposits/announce",
    tag = "Deposits",
    summary = "Announce an incoming bank transfer",
    description = "Creates the pending deposit record that an administrator later confirms \
                   once the bank transfer arrives. No balance effect until confirmation. \
                   Idempotent: retries with the same `idempotency_key` return the original record.",
    request_body = AnnounceDepositRequest,
    responses(
        (status = 200, body = AnnounceDepositResponse),
        (status = 400, description = "Invalid amount or reference code", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn announce_deposit(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AnnounceDepositRequest>,
) -> Result<Json<AnnounceDepositResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = claims.user_id()?;
    let res = DepositService::announce(&state, user_id, req).await?;
    Ok(Json(res))
}
