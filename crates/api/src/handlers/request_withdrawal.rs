use axum::extract::State;
use axum::{Extension, Json};
use clubvest_core::services::withdrawal_service::WithdrawalService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::withdrawal_dto::{
    RequestWithdrawalRequest, RequestWithdrawalResponse,
};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/withdrawals",
    tag = "Withdrawals",
    summary = "Request a withdrawal to a bank account",
    description = "Debits the wallet immediately and creates a pending withdrawal request for \
                   admin review. The debit and the request row are one atomic step, so the \
                   balance check cannot be raced by a second request. Retries with the same \
                   `idempotency_key` return the original request. Rejection or cancellation by \
                   an admin returns the amount to the wallet.",
    request_body = RequestWithdrawalRequest,
    responses(
        (status = 200, body = RequestWithdrawalResponse),
        (status = 400, description = "Below minimum or malformed bank details", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 402, description = "Insufficient balance", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn request_withdrawal(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<RequestWithdrawalRequest>,
) -> Result<Json<RequestWithdrawalResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = claims.user_id()?;
    let res = WithdrawalService::request(&state, user_id, req).await?;
    Ok(Json(res))
}
