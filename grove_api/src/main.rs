mod config;
mod defaults;
mod error;
mod nearest;
mod routes;
mod state;

use std::sync::Arc;

use axum::serve;
use clap::Parser;
use grove_nearest::resolver::NearestWaypointResolver;
use grove_valhalla::client::ValhallaMatrixClient;
use tokio::signal;
use tracing::{error, info};

use crate::config::ServerArgs;
use crate::routes::app;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    let args = ServerArgs::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let valhalla_client = ValhallaMatrixClient::new(args.valhalla_params())?;

    let state = Arc::new(AppState {
        resolver: NearestWaypointResolver::new(valhalla_client),
        matrix_strategy: args.matrix_strategy(),
    });

    let app = app(state, &args.ui_dir);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(
        "Listening on {} (valhalla: {}, costing: {}, metric: {})",
        args.bind, args.valhalla_url, args.costing, args.metric
    );

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to listen for ctrl-c: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
