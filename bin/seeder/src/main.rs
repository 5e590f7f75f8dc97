//! Seeds a development database with demo members, projects and a scheduled
//! payment so the API is usable right after `diesel migration run`.

use chrono::{Duration, Utc};
use clubvest_primitives::models::entities::enum_types::{
    PaymentRunState, ReferralState, TransactionKind, TransactionState, UserRole,
};
use clubvest_primitives::models::{
    NewProject, NewReferral, NewScheduledPayment, NewTransaction, NewUser, NewWallet, Project,
    User, Wallet,
};
use clubvest_primitives::schema::{
    projects, referrals, scheduled_payments, transactions, users, wallets,
};
use diesel::prelude::*;
use eyre::Report;
use tracing::info;

fn main() -> Result<(), Report> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let db_url = std::env::var("DATABASE_URL")
        .map_err(|_| eyre::eyre!("DATABASE_URL must be set"))?;
    let mut conn = PgConnection::establish(&db_url)?;

    conn.transaction::<(), diesel::result::Error, _>(|conn| {
        let admin = insert_user(conn, "admin@clubvest.dev", "Club Admin", UserRole::Admin)?;
        let alice = insert_user(conn, "alice@clubvest.dev", "Alice Demo", UserRole::Member)?;
        let bob = insert_user(conn, "bob@clubvest.dev", "Bob Demo", UserRole::Member)?;

        for user in [&admin, &alice, &bob] {
            diesel::insert_into(wallets::table)
                .values(NewWallet { user_id: user.id })
                .on_conflict(wallets::user_id)
                .do_nothing()
                .execute(conn)?;
        }

        // Give Alice a starting balance: a completed deposit entry plus the
        // matching wallet balance, so reconciliation comes out clean.
        let opening: i64 = 500_000;
        diesel::insert_into(transactions::table)
            .values(NewTransaction {
                user_id: alice.id,
                kind: TransactionKind::Deposit,
                amount: opening,
                txn_state: TransactionState::Completed,
                description: Some("Seeded opening balance"),
                reference: alice.id,
                idempotency_key: "seed-opening-alice",
            })
            .on_conflict((transactions::user_id, transactions::idempotency_key))
            .do_nothing()
            .execute(conn)?;

        let alice_wallet: Wallet = wallets::table
            .filter(wallets::user_id.eq(alice.id))
            .first(conn)?;
        diesel::update(wallets::table.find(alice_wallet.id))
            .set(wallets::balance.eq(opening))
            .execute(conn)?;

        let solar = insert_project(conn, "Solar Farm Fund", 50_000, 5.0, 12)?;
        insert_project(conn, "Urban Real Estate Pool", 100_000, 3.0, 24)?;

        diesel::insert_into(scheduled_payments::table)
            .values(NewScheduledPayment {
                project_id: solar.id,
                payment_date: Utc::now() + Duration::days(30),
                percentage: 5.0,
                run_state: PaymentRunState::Scheduled,
            })
            .execute(conn)?;

        diesel::insert_into(referrals::table)
            .values(NewReferral {
                referrer_id: alice.id,
                referred_id: bob.id,
                referral_state: ReferralState::Pending,
            })
            .on_conflict(referrals::referred_id)
            .do_nothing()
            .execute(conn)?;

        Ok(())
    })?;

    info!("Demo data seeded");
    Ok(())
}

fn insert_user(
    conn: &mut PgConnection,
    email: &str,
    full_name: &str,
    role: UserRole,
) -> Result<User, diesel::result::Error> {
    diesel::insert_into(users::table)
        .values(NewUser {
            email,
            full_name: Some(full_name),
            role,
        })
        .on_conflict(users::email)
        .do_update()
        .set(users::updated_at.eq(diesel::dsl::now))
        .get_result(conn)
}

fn insert_project(
    conn: &mut PgConnection,
    name: &str,
    min_investment: i64,
    yield_rate: f64,
    duration_months: i32,
) -> Result<Project, diesel::result::Error> {
    diesel::insert_into(projects::table)
        .values(NewProject {
            name,
            min_investment,
            yield_rate,
            duration_months,
        })
        .get_result(conn)
}
