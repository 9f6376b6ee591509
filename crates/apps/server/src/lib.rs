//! Rubik server crate.
//!
//! A small JSON API over the `rubik` engine: random scrambles and solving of
//! submitted cube states through an external two-phase solver.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{ServerConfig, SolverConfig};
pub use error::ApiError;
pub use router::create_router;
pub use state::{AppState, SharedAlgorithm};

/// Bind and serve until the process is stopped
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(config.clone());
    if let Err(e) = state.solver().self_test() {
        tracing::warn!(error = %e, "solver self-test failed; /api/solve will answer 503");
    }

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Rubik server listening on http://{}", config.bind_address);

    axum::serve(listener, router).await?;
    Ok(())
}
