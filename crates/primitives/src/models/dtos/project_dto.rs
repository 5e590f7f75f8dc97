use crate::models::entities::project::Project;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDto {
    pub id: Uuid,
    pub name: String,
    /// Minor units.
    pub min_investment: i64,
    /// Yield per scheduled payment as a percent figure, e.g. 5.0 for 5%.
    pub yield_rate: f64,
    pub duration_months: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            min_investment: p.min_investment,
            yield_rate: p.yield_rate,
            duration_months: p.duration_months,
            created_at: p.created_at,
        }
    }
}
