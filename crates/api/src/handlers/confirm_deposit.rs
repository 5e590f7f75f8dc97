use axum::extract::{Path, State};
use axum::{Extension, Json};
use clubvest_core::services::deposit_service::DepositService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::deposit_dto::{ConfirmDepositRequest, DepositActionResponse};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/admin/deposits/{transfer_id}/confirm",
    tag = "Admin",
    summary = "Confirm a pending deposit",
    description = "Marks the pending deposit completed and credits the member's wallet in a \
                   single atomic step, then notifies the member. Confirming an already-terminal \
                   deposit returns 409 and changes nothing.",
    params(("transfer_id" = Uuid, Path, description = "Pending deposit transaction id")),
    request_body = ConfirmDepositRequest,
    responses(
        (status = 200, body = DepositActionResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "Pending deposit not found", body = ApiErrorResponse),
        (status = 409, description = "Deposit already processed", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn confirm_deposit(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(transfer_id): Path<Uuid>,
    Json(req): Json<ConfirmDepositRequest>,
) -> Result<Json<DepositActionResponse>, ApiError> {
    claims.require_admin()?;

    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let res = DepositService::confirm(&state, transfer_id, req).await?;
    Ok(Json(res))
}
