//! OctoPerf MCP Server binary
//!
//! Serves the OctoPerf tool catalog over stdin/stdout. Requires
//! `OCTOPERF_API_KEY` (or `octoperf.api_key` in the config file).

use clap::Parser;
use opm_server::run;

/// Command line interface for the OctoPerf MCP server
#[derive(Parser, Debug)]
#[command(name = "octoperf-mcp")]
#[command(about = "OctoPerf MCP Server - drive OctoPerf load tests from MCP clients")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
