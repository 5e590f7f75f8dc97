use axum::extract::State;
use axum::{Extension, Json};
use clubvest_core::services::investment_service::InvestmentService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::investment_dto::{InvestRequest, InvestResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/investments",
    tag = "Investments",
    summary = "Invest wallet funds in a project",
    description = "Debits the wallet and records the investment atomically. Retries with the \
                   same `idempotency_key` return the original investment. A submission matching \
                   a very recent identical one is rejected as an accidental duplicate.",
    request_body = InvestRequest,
    responses(
        (status = 200, body = InvestResponse),
        (status = 400, description = "Project closed or amount below project minimum", body = ApiErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 402, description = "Insufficient balance", body = ApiErrorResponse),
        (status = 404, description = "Project not found", body = ApiErrorResponse),
        (status = 409, description = "Duplicate submission", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn invest(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<InvestRequest>,
) -> Result<Json<InvestResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = claims.user_id()?;
    let res = InvestmentService::invest(&state, user_id, req).await?;
    Ok(Json(res))
}
