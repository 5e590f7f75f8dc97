use axum::extract::State;
use axum::{Extension, Json};
use clubvest_core::repositories::wallet_repository::WalletRepository;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::wallet_dto::WalletDto;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/wallet",
    tag = "Wallet",
    summary = "Current wallet balance",
    description = "Creates the wallet on first access, with a zero balance.",
    responses(
        (status = 200, body = WalletDto),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_wallet(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<WalletDto>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;
    let wallet = WalletRepository::create_if_not_exists(&mut conn, user_id)?;
    Ok(Json(WalletDto::from(wallet)))
}
