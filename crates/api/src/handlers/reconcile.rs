use axum::extract::{Path, State};
use axum::{Extension, Json};
use clubvest_core::services::ledger_service::LedgerService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::wallet_dto::ReconcileResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/admin/wallets/{user_id}/reconcile",
    tag = "Admin",
    summary = "Recompute a wallet balance from its completed ledger entries",
    description = "Locks the wallet, sums completed ledger entries and overwrites the cached \
                   balance. Returns both values so drift is visible in the response.",
    params(("user_id" = Uuid, Path, description = "Wallet owner's user id")),
    responses(
        (status = 200, body = ReconcileResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "Wallet not found", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn reconcile_wallet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ReconcileResponse>, ApiError> {
    claims.require_admin()?;
    let res = LedgerService::reconcile_balance(&state, user_id).await?;
    Ok(Json(res))
}
