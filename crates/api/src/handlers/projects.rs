use axum::extract::State;
use axum::Json;
use clubvest_core::services::project_service::ProjectService;
use clubvest_core::AppState;
use clubvest_primitives::error::{ApiError, ApiErrorResponse};
use clubvest_primitives::models::dtos::project_dto::ProjectDto;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Investments",
    summary = "Projects currently open for investment",
    responses(
        (status = 200, body = [ProjectDto]),
        (status = 401, description = "Missing or invalid token", body = ApiErrorResponse),
    ),
    security(("bearerAuth" = [])),
)]
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectDto>>, ApiError> {
    let rows = ProjectService::list_open(&state).await?;
    Ok(Json(rows))
}
