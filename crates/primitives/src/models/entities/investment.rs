use crate::models::entities::enum_types::InvestmentState;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::investments)]
#[diesel(belongs_to(crate::models::entities::project::Project))]
pub struct Investment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub amount: i64,
    pub yield_rate: f64,
    pub duration_months: i32,
    pub invest_state: InvestmentState,
    pub started_at: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::investments)]
pub struct NewInvestment {
    pub user_id: Uuid,
    pub project_id: Uuid,
    pub amount: i64,
    pub yield_rate: f64,
    pub duration_months: i32,
    pub invest_state: InvestmentState,
    pub end_date: DateTime<Utc>,
}
