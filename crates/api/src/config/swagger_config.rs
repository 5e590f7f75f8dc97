use crate::handlers::{
    announce_deposit::__path_announce_deposit, confirm_deposit::__path_confirm_deposit,
    distribute_payment::__path_distribute_payment, health::__path_health_check,
    invest::__path_invest, list_withdrawals::__path_list_withdrawals,
    notifications::__path_list_notifications, process_referral::__path_process_referral,
    projects::__path_list_projects, reconcile::__path_reconcile_wallet,
    reject_deposit::__path_reject_deposit, request_withdrawal::__path_request_withdrawal,
    transactions::__path_get_transactions, update_withdrawal::__path_update_withdrawal_status,
    wallet::__path_get_wallet,
};
use clubvest_primitives::error::ApiErrorResponse;
use clubvest_primitives::models::dtos::*;
use clubvest_primitives::models::entities::enum_types::{
    TransactionKind, TransactionState, WithdrawalState,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check, get_wallet, get_transactions,
        announce_deposit, confirm_deposit, reject_deposit,
        request_withdrawal, list_withdrawals, update_withdrawal_status,
        invest, list_projects, list_notifications,
        distribute_payment, process_referral, reconcile_wallet
    ),
    components(schemas(
        ApiErrorResponse,
        WalletDto, ReconcileResponse,
        AnnounceDepositRequest, AnnounceDepositResponse,
        ConfirmDepositRequest, DepositActionResponse,
        RequestWithdrawalRequest, RequestWithdrawalResponse,
        UpdateWithdrawalStatusRequest, UpdateWithdrawalStatusResponse, WithdrawalDto,
        InvestRequest, InvestResponse, ProjectDto,
        DistributeResponse, ReferralRewardResponse,
        TransactionSummaryDto, NotificationDto,
        TransactionKind, TransactionState, WithdrawalState
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Wallet", description = "Balance and ledger history"),
        (name = "Deposits", description = "Bank transfer deposit flow"),
        (name = "Withdrawals", description = "Withdrawal requests and their lifecycle"),
        (name = "Investments", description = "Projects and member investments"),
        (name = "Notifications", description = "In-app notifications"),
        (name = "Admin", description = "Back-office operations"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
