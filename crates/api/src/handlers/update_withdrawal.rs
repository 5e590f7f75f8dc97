use axum::extract::{Path, State};
use axum::{Extension, Json};
use clubvest_core::services::withdrawal_service::WithdrawalService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::withdrawal_dto::{
    UpdateWithdrawalStatusRequest, UpdateWithdrawalStatusResponse,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/admin/withdrawals/{withdrawal_id}/status",
    tag = "Admin",
    summary = "Move a withdrawal request through its state machine",
    description = "Valid transitions only; anything else returns 409. Moving to `rejected` or \
                   `cancelled` re-credits the wallet with a fresh ledger entry, keyed so a \
                   retried transition cannot refund twice.",
    params(("withdrawal_id" = Uuid, Path, description = "Withdrawal request id")),
    request_body = UpdateWithdrawalStatusRequest,
    responses(
        (status = 200, body = UpdateWithdrawalStatusResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "Withdrawal request not found", body = ApiErrorResponse),
        (status = 409, description = "Transition not allowed from current state", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_withdrawal_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(withdrawal_id): Path<Uuid>,
    Json(req): Json<UpdateWithdrawalStatusRequest>,
) -> Result<Json<UpdateWithdrawalStatusResponse>, ApiError> {
    claims.require_admin()?;
    let admin_id = claims.user_id()?;

    let res =
        WithdrawalService::update_status(&state, admin_id, withdrawal_id, req.new_state).await?;
    Ok(Json(res))
}
