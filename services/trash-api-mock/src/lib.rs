//! Trash API mock - Local stand-in for the trash detection service
//!
//! Serves the `/status` and `/trash-count` wire contract consumed by the
//! dashboard, with configurable values, injected faults and response delays.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{load_config, Config, FaultConfig};
pub use error::{MockError, Result};
pub use state::{new_state_handle, StateHandle};

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// Serve the mock on an already bound listener until `cancel` fires
pub async fn serve(
    listener: TcpListener,
    state: StateHandle,
    allowed_origins: &[String],
    cancel: CancellationToken,
) -> Result<()> {
    let router = routes::build_router(state, allowed_origins);
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Trash API mock listening on http://{}", addr);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::debug!("Trash API mock stopped");
    Ok(())
}

/// Run the mock with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();
    let state = new_state_handle(&config);

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        MockError::Config(format!("Failed to bind port {}: {}", config.port, e))
    })?;

    serve(listener, state, &config.allowed_origins, cancel).await
}
