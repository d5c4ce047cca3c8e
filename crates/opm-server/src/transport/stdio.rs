//! Stdio Transport for MCP
//!
//! Implements MCP protocol over standard input/output streams. Stdout is
//! reserved for JSON-RPC frames; logs go to stderr.

use crate::OctoPerfMcpServer;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

/// Extension trait for OctoPerfMcpServer to add stdio serving capability
pub trait StdioServerExt {
    /// Serve the MCP server over stdio until stdin closes
    fn serve_stdio(
        self,
    ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>>;
}

impl StdioServerExt for OctoPerfMcpServer {
    async fn serve_stdio(self) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting MCP protocol server on stdio transport");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| format!("Failed to start MCP service: {:?}", e))?;

        info!("MCP server started, waiting for requests");
        let reason = service
            .waiting()
            .await
            .map_err(|e| format!("MCP service error: {:?}", e))?;

        info!(reason = ?reason, "MCP server shutdown complete");
        Ok(())
    }
}
