//! Tool definitions with rmcp macros.
//!
//! The three tools all follow the same contract: whatever happens, the host
//! receives a successful `CallToolResult` carrying one human-readable text
//! block. Domain failures are rendered messages, never MCP protocol errors,
//! so nothing ever escapes to the host runtime as an exception.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, ErrorData, Implementation, ServerCapabilities, ServerInfo,
    ToolsCapability,
};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;

use super::flows;
use super::types::AppState;

/// Request for the progress sync tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateProgressRequest {
    /// Codewars username. Defaults to the configured user.
    pub username: Option<String>,
}

/// Request for the kata import tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImportKataRequest {
    /// Kata URL (e.g. `https://www.codewars.com/kata/<id>`) or bare id.
    pub url_or_id: String,
}

/// Tutor server exposing the practice tools.
#[derive(Clone)]
pub struct TutorServer {
    state: Arc<AppState>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TutorServer {
    /// Creates a new tutor server over the shared state.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    /// Wrap a flow outcome as a text result.
    fn render(outcome: Result<String, ToolError>) -> CallToolResult {
        let message = match outcome {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(error = %err, "Tool flow failed");
                flows::render_tool_error(&err)
            }
        };
        CallToolResult::success(vec![Content::text(message)])
    }

    #[tool(
        name = "update_progress",
        description = "Refresh the local snapshot of the user's completed Codewars exercises. Use when the user reports completing an exercise on the website."
    )]
    async fn update_progress(
        &self,
        Parameters(req): Parameters<UpdateProgressRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let outcome = flows::update_progress(&self.state, req.username.as_deref()).await;
        Ok(Self::render(outcome))
    }

    #[tool(
        name = "import_kata",
        description = "Set up a practice folder for a specific Codewars kata, given its URL or id. Works for kata outside the local index."
    )]
    async fn import_kata(
        &self,
        Parameters(req): Parameters<ImportKataRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let outcome = flows::import_kata(&self.state, &req.url_or_id).await;
        Ok(Self::render(outcome))
    }

    #[tool(
        name = "practice_python",
        description = "Pick a random uncompleted kata from the local index and set up a practice folder (README plus Python stub) for it."
    )]
    async fn practice_python(&self) -> Result<CallToolResult, ErrorData> {
        let mut rng = StdRng::from_entropy();
        let outcome = flows::practice_python(&self.state, &mut rng).await;
        Ok(Self::render(outcome))
    }
}

#[tool_handler]
impl ServerHandler for TutorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "codewars-tutor".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Manages Codewars practice for the user: sync completed-kata history, \
                 import a specific kata, or pick a random uncompleted one and set up a \
                 local practice folder."
                    .into(),
            ),
            ..Default::default()
        }
    }
}
