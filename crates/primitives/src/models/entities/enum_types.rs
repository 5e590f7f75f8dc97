use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionKind"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Investment,
    Yield,
    ReferralReward,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionState"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionState {
    Pending,
    Completed,
    Rejected,
    Cancelled,
}

impl TransactionState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, TransactionState::Pending)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::WithdrawalState"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WithdrawalState {
    Pending,
    Approved,
    Scheduled,
    Completed,
    Paid,
    Rejected,
    Cancelled,
}

impl WithdrawalState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            WithdrawalState::Completed
                | WithdrawalState::Paid
                | WithdrawalState::Rejected
                | WithdrawalState::Cancelled
        )
    }

    /// Admin-driven transitions. The request row was debited at creation, so
    /// every forward state keeps the debit and the two reverting states give
    /// it back. Rejection and cancellation stay open from every non-terminal
    /// state; a payout can be called off right up until it is paid.
    pub fn can_transition_to(self, next: WithdrawalState) -> bool {
        use WithdrawalState::*;
        match (self, next) {
            (Pending, Approved) => true,
            (Approved, Scheduled | Completed | Paid) => true,
            (Scheduled, Completed | Paid) => true,
            (Pending | Approved | Scheduled, Rejected | Cancelled) => true,
            _ => false,
        }
    }

    /// States that undo the debit applied when the request was created.
    pub fn reverts_debit(self) -> bool {
        matches!(self, WithdrawalState::Rejected | WithdrawalState::Cancelled)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::InvestmentState"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InvestmentState {
    Active,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::PaymentRunState"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentRunState {
    Scheduled,
    Pending,
    Paid,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::ReferralState"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReferralState {
    Pending,
    Completed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::UserRole"]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    Member,
    Admin,
}
