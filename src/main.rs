use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_mcp_server::{Config, DiagnosticLog, Weather};

/// Builds the service and serves it on stdio until the host disconnects
async fn serve(config: &Config, log: &DiagnosticLog) -> Result<()> {
    log.record("Initializing MCP server");
    let weather = Weather::new(config, log.clone())?;

    log.record("Creating stdio transport");
    let transport = rmcp::transport::stdio();

    log.record("Connecting server to transport");
    let server = weather.serve(transport).await?;

    log.record("Weather MCP Server running on stdio");
    tracing::info!("Weather MCP Server running on stdio");

    server.waiting().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_mcp_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    let log = DiagnosticLog::new(config.log_path());

    tracing::info!("Starting MCP weather server against {}", config.api_base());

    match serve(&config, &log).await {
        Ok(()) => {
            tracing::info!("Server shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log.record(format!("Fatal error initializing server: {:#}", e));
            tracing::error!("Fatal error initializing server: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
