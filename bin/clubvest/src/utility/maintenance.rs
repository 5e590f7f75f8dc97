use chrono::{Duration as ChronoDuration, Utc};
use clubvest_core::repositories::investment_repository::InvestmentRepository;
use clubvest_core::repositories::notification_repository::NotificationRepository;
use clubvest_core::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info};

const DAILY_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

/// Days a read notification is kept before pruning.
const NOTIFICATION_RETENTION_DAYS: i64 = 90;

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();

    tokio::spawn(async move {
        info!("Starting daily investment maturity task");
        complete_matured_investments(state_clone).await;
    });

    let state_clone = state.clone();
    tokio::spawn(async move {
        info!("Starting daily notification pruning task");
        prune_read_notifications(state_clone).await;
    });

    info!("Background maintenance tasks spawned");
}

/// Flips active investments past their end date to completed once a day.
async fn complete_matured_investments(state: Arc<AppState>) {
    let mut interval = interval(DAILY_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Investment maturity task: DB connection failed");
            continue;
        };

        match InvestmentRepository::complete_matured(&mut conn, Utc::now()) {
            Ok(0) => debug!("No matured investments"),
            Ok(n) => info!("Marked {} investment(s) completed", n),
            Err(e) => error!("Investment maturity task failed: {}", e),
        }
    }
}

async fn prune_read_notifications(state: Arc<AppState>) {
    let mut interval = interval(DAILY_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Notification pruning: DB connection failed");
            continue;
        };

        let cutoff = Utc::now() - ChronoDuration::days(NOTIFICATION_RETENTION_DAYS);
        match NotificationRepository::delete_read_older_than(&mut conn, cutoff) {
            Ok(0) => debug!("No stale notifications"),
            Ok(n) => info!("Pruned {} read notification(s)", n),
            Err(e) => error!("Notification pruning failed: {}", e),
        }
    }
}
