mod common;

use clubvest_primitives::models::dtos::deposit_dto::AnnounceDepositRequest;
use clubvest_primitives::models::dtos::investment_dto::InvestRequest;
use clubvest_primitives::models::dtos::withdrawal_dto::RequestWithdrawalRequest;
use serde_json::json;
use validator::Validate;

#[test]
fn withdrawal_request_accepts_well_formed_input() {
    let req = serde_json::from_value::<RequestWithdrawalRequest>(json!({
        "amount": 25_000,
        "bank_name": "Test Bank",
        "iban": "DE89370400440532013000",
        "account_holder": "Alice Demo",
        "idempotency_key": "wd-test-0001"
    }))
    .unwrap();
    assert!(req.validate().is_ok());
}

#[test]
fn withdrawal_request_rejects_bad_iban() {
    let req = serde_json::from_value::<RequestWithdrawalRequest>(json!({
        "amount": 25_000,
        "bank_name": "Test Bank",
        "iban": "not-an-iban",
        "account_holder": "Alice Demo",
        "idempotency_key": "wd-test-0002"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn withdrawal_request_rejects_nonpositive_amount() {
    let req = serde_json::from_value::<RequestWithdrawalRequest>(json!({
        "amount": 0,
        "bank_name": "Test Bank",
        "iban": "DE89370400440532013000",
        "account_holder": "Alice Demo",
        "idempotency_key": "wd-test-0003"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn withdrawal_request_rejects_short_idempotency_key() {
    let req = serde_json::from_value::<RequestWithdrawalRequest>(json!({
        "amount": 25_000,
        "bank_name": "Test Bank",
        "iban": "DE89370400440532013000",
        "account_holder": "Alice Demo",
        "idempotency_key": "short"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn announce_deposit_validates_reference_code_length() {
    let req = serde_json::from_value::<AnnounceDepositRequest>(json!({
        "amount": 100_000,
        "reference_code": "CLUB-2026-0042",
        "idempotency_key": "dep-test-0001"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    let req = serde_json::from_value::<AnnounceDepositRequest>(json!({
        "amount": 100_000,
        "reference_code": "ab",
        "idempotency_key": "dep-test-0002"
    }))
    .unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn invest_request_bounds_duration_override() {
    let req = serde_json::from_value::<InvestRequest>(json!({
        "project_id": uuid::Uuid::new_v4(),
        "amount": 50_000,
        "duration_months": 12,
        "idempotency_key": "inv-test-0001"
    }))
    .unwrap();
    assert!(req.validate().is_ok());

    let req = serde_json::from_value::<InvestRequest>(json!({
        "project_id": uuid::Uuid::new_v4(),
        "amount": 50_000,
        "duration_months": 0,
        "idempotency_key": "inv-test-0002"
    }))
    .unwrap();
    assert!(req.validate().is_err());

    // Omitted duration falls back to the project default.
    let req = serde_json::from_value::<InvestRequest>(json!({
        "project_id": uuid::Uuid::new_v4(),
        "amount": 50_000,
        "idempotency_key": "inv-test-0003"
    }))
    .unwrap();
    assert!(req.validate().is_ok());
}
