use clubvest_core::services::ledger_service::{LedgerService, TxnMeta};
use clubvest_primitives::models::entities::enum_types::{
    PaymentRunState, ReferralState, TransactionKind, UserRole,
};
use clubvest_primitives::models::{
    NewProject, NewReferral, NewScheduledPayment, NewUser, NewWallet, Project, Referral,
    ScheduledPayment, User,
};
use clubvest_primitives::schema::{projects, referrals, scheduled_payments, users, wallets};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use uuid::Uuid;

pub fn create_user(conn: &mut PgConnection, role: UserRole) -> User {
    let email = format!("user-{}@test.clubvest.dev", Uuid::new_v4());
    let user: User = diesel::insert_into(users::table)
        .values(NewUser {
            email: &email,
            full_name: Some("Test User"),
            role,
        })
        .get_result(conn)
        .expect("insert test user");

    diesel::insert_into(wallets::table)
        .values(NewWallet { user_id: user.id })
        .execute(conn)
        .expect("insert test wallet");

    user
}

pub fn create_member(conn: &mut PgConnection) -> User {
    create_user(conn, UserRole::Member)
}

/// A member who has never touched their wallet, so no wallet row exists yet.
pub fn create_member_without_wallet(conn: &mut PgConnection) -> User {
    let email = format!("user-{}@test.clubvest.dev", Uuid::new_v4());
    diesel::insert_into(users::table)
        .values(NewUser {
            email: &email,
            full_name: Some("Test User"),
            role: UserRole::Member,
        })
        .get_result(conn)
        .expect("insert test user")
}

pub fn create_admin(conn: &mut PgConnection) -> User {
    create_user(conn, UserRole::Admin)
}

/// Credits a wallet through the ledger so the reconciliation invariant holds
/// for fixture data too.
pub fn fund_wallet(conn: &mut PgConnection, user_id: Uuid, amount: i64) -> i64 {
    let key = format!("fixture-fund:{}", Uuid::new_v4());
    let (balance, _) = LedgerService::apply_delta(
        conn,
        user_id,
        amount,
        TxnMeta {
            kind: TransactionKind::Deposit,
            description: Some("Fixture funding"),
            reference: user_id,
            idempotency_key: &key,
        },
    )
    .expect("fund test wallet");
    balance
}

pub fn create_project(
    conn: &mut PgConnection,
    min_investment: i64,
    yield_rate: f64,
    duration_months: i32,
) -> Project {
    diesel::insert_into(projects::table)
        .values(NewProject {
            name: "Test Project",
            min_investment,
            yield_rate,
            duration_months,
        })
        .get_result(conn)
        .expect("insert test project")
}

pub fn deactivate_project(conn: &mut PgConnection, project_id: Uuid) {
    diesel::update(projects::table.find(project_id))
        .set(projects::is_active.eq(false))
        .execute(conn)
        .expect("deactivate test project");
}

pub fn create_scheduled_payment(
    conn: &mut PgConnection,
    project_id: Uuid,
    percentage: f64,
) -> ScheduledPayment {
    diesel::insert_into(scheduled_payments::table)
        .values(NewScheduledPayment {
            project_id,
            payment_date: Utc::now() + Duration::days(30),
            percentage,
            run_state: PaymentRunState::Scheduled,
        })
        .get_result(conn)
        .expect("insert test scheduled payment")
}

pub fn create_referral(conn: &mut PgConnection, referrer_id: Uuid, referred_id: Uuid) -> Referral {
    diesel::insert_into(referrals::table)
        .values(NewReferral {
            referrer_id,
            referred_id,
            referral_state: ReferralState::Pending,
        })
        .get_result(conn)
        .expect("insert test referral")
}
