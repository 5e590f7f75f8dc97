mod common;

use clubvest_core::services::ledger_service::{LedgerService, TxnMeta};
use clubvest_primitives::error::ApiError;
use clubvest_primitives::models::entities::enum_types::TransactionKind;
use clubvest_primitives::schema::wallets;
use common::fixtures;
use diesel::prelude::*;
use serial_test::serial;
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn credits_and_debits_move_the_balance() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    assert_eq!(fixtures::fund_wallet(&mut conn, user.id, 100_000), 100_000);

    let (balance, tx) = LedgerService::apply_delta(
        &mut conn,
        user.id,
        -40_000,
        TxnMeta {
            kind: TransactionKind::Withdrawal,
            description: None,
            reference: Uuid::new_v4(),
            idempotency_key: "ledger-debit-1",
        },
    )
    .unwrap();

    assert_eq!(balance, 60_000);
    assert_eq!(tx.amount, -40_000);
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        60_000
    );
}

#[tokio::test]
#[serial]
async fn duplicate_idempotency_key_is_a_conflict() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 50_000);

    let meta = || TxnMeta {
        kind: TransactionKind::Deposit,
        description: None,
        reference: user.id,
        idempotency_key: "ledger-dup-key",
    };

    LedgerService::apply_delta(&mut conn, user.id, 10_000, meta()).unwrap();
    let err = LedgerService::apply_delta(&mut conn, user.id, 10_000, meta()).unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    // The second call must not have moved money.
    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        60_000
    );
}

#[tokio::test]
#[serial]
async fn overdraw_is_refused_and_writes_nothing() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 5_000);

    let result = conn.transaction::<_, ApiError, _>(|conn| {
        LedgerService::apply_delta(
            conn,
            user.id,
            -10_000,
            TxnMeta {
                kind: TransactionKind::Withdrawal,
                description: None,
                reference: Uuid::new_v4(),
                idempotency_key: "ledger-overdraw",
            },
        )
    });
    assert!(matches!(result, Err(ApiError::InsufficientFunds(_))));

    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        5_000
    );
}

#[tokio::test]
#[serial]
async fn reconcile_repairs_a_drifted_balance() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 75_000);

    // Corrupt the cached balance behind the ledger's back.
    diesel::update(wallets::table.filter(wallets::user_id.eq(user.id)))
        .set(wallets::balance.eq(1_000_000))
        .execute(&mut conn)
        .unwrap();

    let res = LedgerService::reconcile_balance(&state, user.id).await.unwrap();
    assert_eq!(res.previous_balance, 1_000_000);
    assert_eq!(res.recomputed_balance, 75_000);

    assert_eq!(
        LedgerService::get_balance(&state, user.id).await.unwrap(),
        75_000
    );
}

#[tokio::test]
#[serial]
async fn reconcile_of_clean_wallet_changes_nothing() {
    let Some(state) = common::test_state() else {
        eprintln!("TEST_DATABASE_URL not set; skipping database test");
        return;
    };
    let mut conn = state.db.get().unwrap();

    let user = fixtures::create_member(&mut conn);
    fixtures::fund_wallet(&mut conn, user.id, 30_000);

    let res = LedgerService::reconcile_balance(&state, user.id).await.unwrap();
    assert_eq!(res.previous_balance, 30_000);
    assert_eq!(res.recomputed_balance, 30_000);
}
