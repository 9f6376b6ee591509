use rubik_server::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        solver = %config.solver.program.display(),
        labels = %config.solver.labels,
        "starting"
    );

    rubik_server::run(config).await
}
