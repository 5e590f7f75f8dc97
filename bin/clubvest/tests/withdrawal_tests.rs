mod common;

use clubvest_core::services::ledger_service::LedgerService;
use clubvest_core::services::withdrawal_service::WithdrawalService;
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::dtos::withdrawal_dto::RequestWithdrawalRequest;
use clubvest_primitives::models::entities::enum_types::WithdrawalState;
use clubvest_primitives::schema::withdrawal_requests;
use common::fixtures;
use diesel::prelude::*;
use serial_test::serial;

fn withdrawal_req(amount: i64, key: &str) -> RequestWithdrawalRequest {
    RequestWithdrawalRequest {
        amount,
        bank_name: "Test Bank".into(),
        iban: "DE89370400440532013000".into(),
        account_holder: "Test User".into(),
        idempotency_key: key.into(),
    }
}

#[tokio::test]
#[serial]
async fn request_debits_immediately() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 100_000);
    drop(conn);

    let res = WithdrawalService::request(&state, user.id, withdrawal_req(40_000, "wd-debit-1"))
        .await
        .unwrap();

    assert_eq!(res.new_balance, 60_000);
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        60_000
    );
}

#[tokio::test]
#[serial]
async fn request_below_minimum_is_rejected() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 100_000);
    drop(conn);

    // Config minimum is 10_000.
    let err = WithdrawalService::request(&state, user.id, withdrawal_req(5_000, "wd-min-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
#[serial]
async fn overdrawn_request_leaves_no_trace() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 50_000);
    drop(conn);

    let err = WithdrawalService::request(&state, user.id, withdrawal_req(60_000, "wd-over-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InsufficientFunds(_)));

    // Nothing moved and no request row was written.
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        50_000
    );
    let mut conn = state.db.get().unwrap();
    let requests: i64 = withdrawal_requests::table
        .filter(withdrawal_requests::user_id.eq(user.id))
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(requests, 0);
}

#[tokio::test]
#[serial]
async fn request_replay_returns_the_original() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 100_000);
    drop(conn);

    let first = WithdrawalService::request(&state, user.id, withdrawal_req(30_000, "wd-replay-1"))
        .await
        .unwrap();
    let second = WithdrawalService::request(&state, user.id, withdrawal_req(30_000, "wd-replay-1"))
        .await
        .unwrap();

    assert_eq!(first.withdrawal_id, second.withdrawal_id);
    assert_eq!(first.transaction_id, second.transaction_id);
    // Only one debit took place.
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        70_000
    );
}

#[tokio::test]
#[serial]
async fn rejection_refunds_the_debit() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    let admin = fixtures::create_admin(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 100_000);
    drop(conn);

    let res = WithdrawalService::request(&state, user.id, withdrawal_req(40_000, "wd-refund-1"))
        .await
        .unwrap();
    assert_eq!(res.new_balance, 60_000);

    let updated = WithdrawalService::update_status(
        &state,
        admin.id,
        res.withdrawal_id,
        WithdrawalState::Rejected,
    )
    .await
    .unwrap();

    assert_eq!(updated.request_state, WithdrawalState::Rejected);
    assert_eq!(updated.refunded_amount, Some(40_000));
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        100_000
    );
}

#[tokio::test]
#[serial]
async fn rejecting_twice_is_a_conflict_and_refunds_once() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    let admin = fixtures::create_admin(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 100_000);
    drop(conn);

    let res = WithdrawalService::request(&state, user.id, withdrawal_req(40_000, "wd-double-1"))
        .await
        .unwrap();

    WithdrawalService::update_status(&state, admin.id, res.withdrawal_id, WithdrawalState::Rejected)
        .await
        .unwrap();
    let err = WithdrawalService::update_status(
        &state,
        admin.id,
        res.withdrawal_id,
        WithdrawalState::Rejected,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        100_000
    );
}

#[tokio::test]
#[serial]
async fn cancelling_a_scheduled_payout_refunds() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    let admin = fixtures::create_admin(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 100_000);
    drop(conn);

    let res = WithdrawalService::request(&state, user.id, withdrawal_req(40_000, "wd-sched-1"))
        .await
        .unwrap();

    for next in [WithdrawalState::Approved, WithdrawalState::Scheduled] {
        WithdrawalService::update_status(&state, admin.id, res.withdrawal_id, next)
            .await
            .unwrap();
    }

    let cancelled = WithdrawalService::update_status(
        &state,
        admin.id,
        res.withdrawal_id,
        WithdrawalState::Cancelled,
    )
    .await
    .unwrap();

    assert_eq!(cancelled.request_state, WithdrawalState::Cancelled);
    assert_eq!(cancelled.refunded_amount, Some(40_000));
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        100_000
    );
}

#[tokio::test]
#[serial]
async fn forward_transitions_keep_the_debit() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    let admin = fixtures::create_admin(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 100_000);
    drop(conn);

    let res = WithdrawalService::request(&state, user.id, withdrawal_req(40_000, "wd-forward-1"))
        .await
        .unwrap();

    for next in [WithdrawalState::Approved, WithdrawalState::Completed] {
        let updated = WithdrawalService::update_status(&state, admin.id, res.withdrawal_id, next)
            .await
            .unwrap();
        assert_eq!(updated.request_state, next);
        assert_eq!(updated.refunded_amount, None);
    }

    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        60_000
    );
}
