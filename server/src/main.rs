use anyhow::Context;
use clap::Parser;
use fargate_app::{ServerConfig, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();

    telemetry::init_tracing();

    info!(host = %config.host, port = config.port, "Starting fargate-app");

    let app = fargate_app::app();

    fargate_app::serve(&config, app)
        .await
        .context("fargate-app HTTP server failed")?;

    Ok(())
}
