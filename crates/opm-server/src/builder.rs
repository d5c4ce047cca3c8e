//! MCP Server Builder
//!
//! Builder pattern for constructing MCP servers with dependency injection.
//! Ensures the API adapter is provided before server construction.

use crate::OctoPerfMcpServer;
use opm_domain::ports::OctoPerfApi;
use std::sync::Arc;

/// Builder for MCP Server with dependency injection
#[derive(Default)]
pub struct McpServerBuilder {
    api: Option<Arc<dyn OctoPerfApi>>,
    default_project_id: Option<String>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the OctoPerf API adapter
    ///
    /// # Arguments
    /// * `api` - Implementation of the OctoPerf API port
    pub fn with_api(mut self, api: Arc<dyn OctoPerfApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Set the project used when `get_runtime_id` is called without `projectId`
    pub fn with_default_project_id(mut self, project_id: Option<String>) -> Self {
        self.default_project_id = project_id;
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the API adapter is not provided
    pub fn build(self) -> Result<OctoPerfMcpServer, BuilderError> {
        let api = self
            .api
            .ok_or(BuilderError::MissingDependency("OctoPerf API client"))?;

        Ok(OctoPerfMcpServer::new(api, self.default_project_id))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
