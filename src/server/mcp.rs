//! Main MCP server orchestration.
//!
//! This module provides the entry point for running the tutor server:
//! component construction from configuration, then serving over stdio.

use std::sync::Arc;

use rmcp::service::serve_server;
use rmcp::transport::io::stdio;

use crate::catalog::{CatalogClient, ClientConfig};
use crate::config::Config;
use crate::error::AppError;
use crate::exercise::Materializer;
use crate::store::StateStore;

use super::tools::TutorServer;
use super::types::AppState;

/// Main MCP server that wires the components together.
#[derive(Debug)]
pub struct McpServer {
    /// Server configuration.
    config: Config,
}

impl McpServer {
    /// Creates a new MCP server with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the server using stdio transport.
    ///
    /// Blocks until the client disconnects or an error occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// transport fails.
    pub async fn run_stdio(&self) -> Result<(), AppError> {
        let store = StateStore::new(&self.config.data_dir);

        let client_config = ClientConfig::default()
            .with_base_url(&self.config.base_url)
            .with_timeout_ms(self.config.request_timeout_ms);
        let catalog = CatalogClient::new(client_config)?;

        let materializer = Materializer::new(&self.config.exercises_dir);

        let state = AppState::new(store, catalog, materializer, self.config.clone());
        let server = TutorServer::new(Arc::new(state));

        let (stdin, stdout) = stdio();
        let running = serve_server(server, (stdin, stdout)).await.map_err(|e| {
            AppError::Mcp(crate::error::McpError::Internal {
                message: e.to_string(),
            })
        })?;

        let _ = running.waiting().await;

        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
