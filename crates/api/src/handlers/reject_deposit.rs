use axum::extract::{Path, State};
use axum::{Extension, Json};
use clubvest_core::services::deposit_service::DepositService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::deposit_dto::DepositActionResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/admin/deposits/{transfer_id}/reject",
    tag = "Admin",
    summary = "Reject a pending deposit",
    params(("transfer_id" = Uuid, Path, description = "Pending deposit transaction id")),
    responses(
        (status = 200, body = DepositActionResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "Pending deposit not found", body = ApiErrorResponse),
        (status = 409, description = "Deposit already processed", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn reject_deposit(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(transfer_id): Path<Uuid>,
) -> Result<Json<DepositActionResponse>, ApiError> {
    claims.require_admin()?;
    let res = DepositService::reject(&state, transfer_id).await?;
    Ok(Json(res))
}
