// Not every test binary uses every helper.
#![allow(dead_code)]

use clubvest_core::app_state::AppState;
use clubvest_primitives::models::app_config::{AppConfig, JwtInfo};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use secrecy::SecretString;
use std::sync::{Arc, OnceLock};

pub mod fixtures;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../../migrations");

pub fn test_config() -> AppConfig {
    AppConfig {
        jwt_details: JwtInfo {
            jwt_secret: SecretString::from("test_secret_key_minimum_32_characters_long"),
            jwt_issuer: "clubvest".to_string(),
            jwt_audience: "clubvest_api".to_string(),
        },
        min_withdrawal_minor: 10_000,
        referral_bonus_minor: 2_500,
        duplicate_investment_window_secs: 300,
    }
}

/// Shared state against the database named by `TEST_DATABASE_URL`. Returns
/// `None` when the variable is unset so the suite degrades to the pure tests.
pub fn test_state() -> Option<Arc<AppState>> {
    static STATE: OnceLock<Option<Arc<AppState>>> = OnceLock::new();

    STATE
        .get_or_init(|| {
            let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

            std::env::set_var("APP_ENV", "test");

            let manager = ConnectionManager::<PgConnection>::new(database_url);
            let pool = Pool::builder().max_size(5).build(manager).ok()?;

            {
                let mut conn = pool.get().ok()?;
                conn.run_pending_migrations(MIGRATIONS)
                    .expect("test migrations failed");
            }

            Some(Arc::new(AppState {
                db: pool,
                config: test_config(),
            }))
        })
        .clone()
}

