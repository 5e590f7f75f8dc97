use crate::app_state::AppState;
use crate::repositories::project_repository::ProjectRepository;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::project_dto::ProjectDto;

pub struct ProjectService;

impl ProjectService {
    pub async fn list_open(state: &AppState) -> Result<Vec<ProjectDto>, ApiError> {
        let mut conn = state.db.get()?;
        let rows = ProjectRepository::find_all_active(&mut conn)?;
        Ok(rows.into_iter().map(ProjectDto::from).collect())
    }
}
