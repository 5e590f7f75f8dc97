use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    announce_deposit::announce_deposit, confirm_deposit::confirm_deposit,
    distribute_payment::distribute_payment, health::health_check, invest::invest,
    list_withdrawals::list_withdrawals, notifications::list_notifications,
    process_referral::process_referral, projects::list_projects, reconcile::reconcile_wallet,
    reject_deposit::reject_deposit, request_withdrawal::request_withdrawal,
    transactions::get_transactions, update_withdrawal::update_withdrawal_status,
    wallet::get_wallet,
};
use axum::routing::{get, post};
use axum::{middleware, Router};
use axum_prometheus::{metrics_exporter_prometheus::PrometheusHandle, PrometheusMetricLayer};
use clubvest_core::{AppState, SecurityConfig};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    let public_router = create_public_routers(metric_handle);
    let protected_router = create_secured_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(metric_layer)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        );

    // The governor needs a peer address to key on, which test clients don't have.
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}

fn create_secured_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/wallet", get(get_wallet))
        .route("/api/transactions", get(get_transactions))
        .route("/api/deposits/announce", post(announce_deposit))
        .route("/api/withdrawals", get(list_withdrawals))
        .route("/api/withdrawals", post(request_withdrawal))
        .route("/api/investments", post(invest))
        .route("/api/projects", get(list_projects))
        .route("/api/notifications", get(list_notifications))
        .route(
            "/api/admin/deposits/{transfer_id}/confirm",
            post(confirm_deposit),
        )
        .route(
            "/api/admin/deposits/{transfer_id}/reject",
            post(reject_deposit),
        )
        .route(
            "/api/admin/withdrawals/{withdrawal_id}/status",
            post(update_withdrawal_status),
        )
        .route(
            "/api/admin/payments/{payment_id}/distribute",
            post(distribute_payment),
        )
        .route(
            "/api/admin/referrals/{user_id}/reward",
            post(process_referral),
        )
        .route(
            "/api/admin/wallets/{user_id}/reconcile",
            post(reconcile_wallet),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_public_routers(metric_handle: PrometheusHandle) -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(health_check))
        .route("/metrics", get(move || async move { metric_handle.render() }))
}
