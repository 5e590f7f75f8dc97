use axum::extract::{Query, State};
use axum::{Extension, Json};
use clubvest_core::repositories::transaction_repository::TransactionRepository;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::transaction_dto::{
    TransactionListQuery, TransactionSummaryDto,
};
use std::sync::Arc;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 200;

#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Wallet",
    summary = "Recent ledger entries for the current member",
    params(("limit" = Option<i64>, Query, description = "Max rows, capped at 200")),
    responses(
        (status = 200, body = [TransactionSummaryDto]),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_transactions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<Vec<TransactionSummaryDto>>, ApiError> {
    let user_id = claims.user_id()?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let mut conn = state.db.get()?;
    let rows = TransactionRepository::find_recent_by_user(&mut conn, user_id, limit)?;
    Ok(Json(rows))
}
