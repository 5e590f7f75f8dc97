mod common;

use clubvest_core::services::investment_service::InvestmentService;
use clubvest_core::services::ledger_service::LedgerService;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::investment_dto::InvestRequest;
use clubvest_primitives::models::User;
use clubvest_primitives::schema::users;
use common::fixtures;
use diesel::prelude::*;
use serial_test::serial;
use uuid::Uuid;

fn invest_req(project_id: Uuid, amount: i64, key: &str) -> InvestRequest {
    InvestRequest {
        project_id,
        amount,
        duration_months: None,
        idempotency_key: key.into(),
    }
}

#[tokio::test]
#[serial]
async fn invest_debits_and_updates_member_aggregates() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 200_000);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);

    let res = InvestmentService::invest(
        &state,
        user.id,
        invest_req(project.id, 80_000, "inv-happy-1"),
    )
    .await
    .unwrap();

    assert_eq!(res.new_balance, 120_000);
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        120_000
    );

    let updated: User = users::table.find(user.id).first(&mut conn).unwrap();
    assert_eq!(updated.investment_total, 80_000);
    assert_eq!(updated.projects_count, 1);
}

#[tokio::test]
#[serial]
async fn second_investment_in_same_project_does_not_bump_project_count() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 300_000);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);

    InvestmentService::invest(&state, user.id, invest_req(project.id, 80_000, "inv-count-1"))
        .await
        .unwrap();
    InvestmentService::invest(&state, user.id, invest_req(project.id, 90_000, "inv-count-2"))
        .await
        .unwrap();

    let updated: User = users::table.find(user.id).first(&mut conn).unwrap();
    assert_eq!(updated.investment_total, 170_000);
    assert_eq!(updated.projects_count, 1);
}

#[tokio::test]
#[serial]
async fn below_project_minimum_is_rejected() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 200_000);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);
    drop(conn);

    let err = InvestmentService::invest(
        &state,
        user.id,
        invest_req(project.id, 10_000, "inv-min-1"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
#[serial]
async fn closed_project_is_rejected() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 200_000);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);
    fixtures::deactivate_project(&mut conn, project.id);
    drop(conn);

    let err = InvestmentService::invest(
        &state,
        user.id,
        invest_req(project.id, 80_000, "inv-closed-1"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
#[serial]
async fn insufficient_balance_rolls_the_investment_back() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 60_000);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);

    let err = InvestmentService::invest(
        &state,
        user.id,
        invest_req(project.id, 80_000, "inv-poor-1"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::InsufficientFunds(_)));

    // No investment row survived the rollback.
    use clubvest_primitives::schema::investments;
    let count: i64 = investments::table
        .filter(investments::user_id.eq(user.id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        60_000
    );
}

#[tokio::test]
#[serial]
async fn replay_returns_the_original_investment() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 200_000);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);
    drop(conn);

    let first = InvestmentService::invest(
        &state,
        user.id,
        invest_req(project.id, 80_000, "inv-replay-1"),
    )
    .await
    .unwrap();
    let second = InvestmentService::invest(
        &state,
        user.id,
        invest_req(project.id, 80_000, "inv-replay-1"),
    )
    .await
    .unwrap();

    assert_eq!(first.investment_id, second.investment_id);
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        120_000
    );
}

#[tokio::test]
#[serial]
async fn identical_rapid_resubmission_is_suppressed() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 300_000);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);
    drop(conn);

    InvestmentService::invest(&state, user.id, invest_req(project.id, 80_000, "inv-dup-1"))
        .await
        .unwrap();

    // Same amount, fresh key, inside the duplicate window.
    let err = InvestmentService::invest(&state, user.id, invest_req(project.id, 80_000, "inv-dup-2"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        220_000
    );
}

#[tokio::test]
#[serial]
async fn first_investment_pays_the_referrer_once() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let referrer = fixtures::create_member(&mut conn);
    let referred = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, referred.id, 300_000);
    fixtures::create_referral(&mut conn, referrer.id, referred.id);
    let project = fixtures::create_project(&mut conn, 50_000, 5.0, 12);
    drop(conn);

    InvestmentService::invest(
        &state,
        referred.id,
        invest_req(project.id, 80_000, "inv-ref-1"),
    )
    .await
    .unwrap();

    // Configured bonus is 2_500.
    assert_eq!(
        LedgerService::get_balance(&state, referrer.id).await.unwrap(),
        2_500
    );

    // A second, different investment must not pay the bonus again.
    InvestmentService::invest(
        &state,
        referred.id,
        invest_req(project.id, 60_000, "inv-ref-2"),
    )
    .await
    .unwrap();

    assert_eq!(
        LedgerService::get_balance(&state, referrer.id).await.unwrap(),
        2_500
    );
}
