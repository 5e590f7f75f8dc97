use axum::extract::{Path, State};
use axum::{Extension, Json};
use clubvest_core::services::distribution_service::DistributionService;
use clubvest_core::{AppState, Claims};
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::distribution_dto::DistributeResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/admin/payments/{payment_id}/distribute",
    tag = "Admin",
    summary = "Fan a scheduled payment out to all active investors",
    description = "Each investor is credited in its own transaction, keyed per payment and \
                   investment, so a rerun after a partial failure only picks up the investors \
                   that were missed. A payment already fully processed is a no-op.",
    params(("payment_id" = Uuid, Path, description = "Scheduled payment id")),
    responses(
        (status = 200, body = DistributeResponse),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
        (status = 404, description = "Scheduled payment not found", body = ApiErrorResponse),
        (status = 500, description = "Some investors could not be credited; retry the call", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn distribute_payment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<DistributeResponse>, ApiError> {
    claims.require_admin()?;
    let res = DistributionService::distribute(&state, payment_id).await?;
    Ok(Json(res))
}
