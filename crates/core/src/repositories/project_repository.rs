use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::project::Project;
use clubvest_primitives::schema::projects;
use diesel::prelude::*;
use uuid::Uuid;

pub struct ProjectRepository;

impl ProjectRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Project, ApiError> {
        projects::table
            .find(id)
            .first::<Project>(conn)
            .map_err(|e| {
                if matches!(e, diesel::result::Error::NotFound) {
                    ApiError::NotFound("Project not found".into())
                } else {
                    ApiError::from(e)
                }
            })
    }

    pub fn find_all_active(conn: &mut PgConnection) -> Result<Vec<Project>, ApiError> {
        projects::table
            .filter(projects::is_active.eq(true))
            .order(projects::created_at.desc())
            .load::<Project>(conn)
            .map_err(ApiError::from)
    }
}
