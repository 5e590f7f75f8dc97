pub mod deposit_service;
pub mod distribution_service;
pub mod investment_service;
pub mod ledger_service;
pub mod notification_service;
pub mod project_service;
pub mod referral_service;
pub mod withdrawal_service;
