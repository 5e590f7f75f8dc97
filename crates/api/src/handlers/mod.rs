pub mod announce_deposit;
pub mod confirm_deposit;
pub mod distribute_payment;
pub mod health;
pub mod invest;
pub mod list_withdrawals;
pub mod notifications;
pub mod process_referral;
pub mod projects;
pub mod reconcile;
pub mod reject_deposit;
pub mod request_withdrawal;
pub mod transactions;
pub mod update_withdrawal;
pub mod wallet;
