use axum::Router;
use axum::extract::FromRef;
use snafu::ResultExt;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::Result;
use crate::config::Config;
use crate::error::{BindSnafu, ServeSnafu};
use crate::web::all_routes;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
}

pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server.ip, config.server.port);
    info!(
        "Redirecting logins to https://{}, continue escaping: {:?}",
        config.login.server, config.login.escape_mode
    );

    let state = AppState {
        config: Arc::new(config),
    };

    let routes_all = Router::new().merge(all_routes(state));

    // Setup the server
    let listener = TcpListener::bind(&addr)
        .await
        .context(BindSnafu { addr: addr.clone() })?;
    info!("HTTP Server running on {}", addr);

    axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context(ServeSnafu)?;

    info!("HTTP Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
