//! Server Initialization
//!
//! Startup sequence: load configuration, install logging, build the OctoPerf
//! client, assemble the server and serve it over stdio. Any failure before
//! serving starts is fatal.

use std::path::Path;
use std::sync::Arc;

use opm_infrastructure::config::{AppConfig, ConfigLoader};
use opm_infrastructure::logging::init_logging;
use opm_providers::OctoPerfClient;
use tracing::{error, info};

use crate::McpServerBuilder;
use crate::OctoPerfMcpServer;
use crate::transport::stdio::StdioServerExt;

/// Run the OctoPerf MCP server
///
/// Returns once stdin is closed, or with an error if startup fails.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        base_url = %config.octoperf.base_url,
        default_project = ?config.octoperf.default_project_id,
        "Starting OctoPerf MCP server"
    );

    let server = match create_mcp_server(&config) {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "Failed to initialize OctoPerf MCP server");
            return Err(e);
        }
    };
    info!("MCP server initialized successfully");

    server.serve_stdio().await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Create the MCP server from loaded configuration
///
/// # Errors
/// Fails when the API key is missing or the base URL is unusable.
pub fn create_mcp_server(
    config: &AppConfig,
) -> Result<OctoPerfMcpServer, Box<dyn std::error::Error>> {
    let client = OctoPerfClient::new(
        config.octoperf.api_key.as_deref(),
        &config.octoperf.base_url,
    )?;

    McpServerBuilder::new()
        .with_api(Arc::new(client))
        .with_default_project_id(config.octoperf.default_project_id.clone())
        .build()
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })
}
