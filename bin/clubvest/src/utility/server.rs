use crate::utility::shutdown::shutdown_signal;
use axum::Router;
use eyre::{Report, WrapErr};
use std::net::SocketAddr;

pub async fn serve(router: Router) -> Result<(), Report> {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8090".into());

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .wrap_err("HOST/PORT do not form a valid bind address")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("could not bind {addr}"))?;

    tracing::info!(%addr, "clubvest accepting connections (docs at /swagger-ui/)");

    // ConnectInfo feeds the rate limiter its peer addresses.
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
