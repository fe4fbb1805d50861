//! MCP Server entry point for Google Ads
//!
//! Starts the MCP server with stdio transport. The Google Ads client is
//! constructed lazily on the first tool call, so the server comes up even
//! before credentials are readable; a broken configuration surfaces as a
//! tool-call error instead of a startup failure.

mod schemas;
mod server;

use std::process::ExitCode;

use google_ads_client::{ClientCache, GoogleAdsConfig};
use rmcp::ServiceExt;
use server::GoogleAdsMcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting Google Ads MCP Server");

    let config_path = GoogleAdsConfig::resolve_path();
    tracing::info!("Using configuration file: {}", config_path.display());

    let mcp_server = GoogleAdsMcp::new(ClientCache::new(config_path));

    tracing::info!("MCP server initialized with 2 tools");

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Wait for the server to complete
    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
