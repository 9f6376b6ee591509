use crate::config::ServerConfig;
use rubik::{SolveAlgorithm, Solver};
use std::sync::Arc;

/// Solve algorithm shared between request handlers
pub type SharedAlgorithm = Arc<dyn SolveAlgorithm + Send + Sync>;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    solver: Solver<SharedAlgorithm>,
}

impl AppState {
    /// State backed by the external solver program named in the config
    pub fn new(config: ServerConfig) -> Self {
        let algorithm: SharedAlgorithm = Arc::new(config.solver.command());
        Self::with_algorithm(config, algorithm)
    }

    /// State backed by any solve algorithm
    pub fn with_algorithm(config: ServerConfig, algorithm: SharedAlgorithm) -> Self {
        let solver = Solver::new(algorithm).with_labels(config.solver.labels);
        Self {
            inner: Arc::new(AppStateInner { config, solver }),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    pub fn solver(&self) -> &Solver<SharedAlgorithm> {
        &self.inner.solver
    }
}
