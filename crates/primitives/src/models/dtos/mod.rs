pub mod deposit_dto;
pub mod distribution_dto;
pub mod investment_dto;
pub mod notification_dto;
pub mod project_dto;
pub mod transaction_dto;
pub mod wallet_dto;
pub mod withdrawal_dto;

pub use deposit_dto::*;
pub use distribution_dto::*;
pub use investment_dto::*;
pub use notification_dto::*;
pub use project_dto::*;
pub use transaction_dto::*;
pub use wallet_dto::*;
pub use withdrawal_dto::*;
