use axum::extract::State;
use axum::{Extension, Json};
use clubvest_core::services::withdrawal_service::WithdrawalService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::withdrawal_dto::WithdrawalDto;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/withdrawals",
    tag = "Withdrawals",
    summary = "Own withdrawal requests, newest first",
    responses(
        (status = 200, body = [WithdrawalDto]),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn list_withdrawals(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<WithdrawalDto>>, ApiError> {
    let user_id = claims.user_id()?;
    let rows = WithdrawalService::list_for_user(&state, user_id).await?;
    Ok(Json(rows))
}
