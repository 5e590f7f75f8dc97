pub mod investment_repository;
pub mod notification_repository;
pub mod project_repository;
pub mod referral_repository;
pub mod scheduled_payment_repository;
pub mod transaction_repository;
pub mod user_repository;
pub mod wallet_repository;
pub mod withdrawal_repository;
