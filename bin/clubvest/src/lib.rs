mod observability;

pub mod utility;

pub use clubvest_primitives::error::ApiError;

use crate::utility::db_pool::{create_db_pool, run_migrations};
use crate::utility::logging::setup_logging;
use crate::utility::maintenance::spawn_background_tasks;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env};
use clubvest_core::app_state::AppState;
use clubvest_primitives::models::app_config::AppConfig;
use eyre::Report;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    load_env();

    setup_logging();

    info!("Starting ClubVest wallet service...");

    let config = AppConfig::from_env()?;

    let pool = create_db_pool()?;
    run_migrations(&pool)?;

    let state = AppState::new(pool, config)?;

    spawn_background_tasks(state.clone());

    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    serve(app).await?;

    info!("ClubVest wallet service shut down gracefully");
    Ok(())
}
