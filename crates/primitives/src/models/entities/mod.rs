pub mod enum_types;
pub mod investment;
pub mod notification;
pub mod project;
pub mod referral;
pub mod scheduled_payment;
pub mod transaction;
pub mod user;
pub mod wallet;
pub mod withdrawal_request;

pub use enum_types::*;
pub use investment::{Investment, NewInvestment};
pub use notification::{NewNotification, Notification};
pub use project::{NewProject, Project};
pub use referral::{NewReferral, Referral};
pub use scheduled_payment::{NewScheduledPayment, ScheduledPayment};
pub use transaction::{NewTransaction, Transaction};
pub use user::{NewUser, User};
pub use wallet::{NewWallet, Wallet};
pub use withdrawal_request::{NewWithdrawalRequest, WithdrawalRequest};
