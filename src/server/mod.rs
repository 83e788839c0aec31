//! MCP server implementation.
//!
//! This module provides:
//! - Tool definitions with rmcp macros
//! - Tool flows (the logic behind each tool, testable without a transport)
//! - Shared application state
//! - Stdio server orchestration
//!
//! # Architecture
//!
//! The server exposes three tools:
//!
//! - `update_progress` — sync the completed-kata snapshot
//! - `import_kata` — set up one kata by URL or id
//! - `practice_python` — random uncompleted kata, set up and ready
//!
//! Every tool returns a single text content block; domain failures are
//! rendered into the text, never raised as protocol errors.

pub mod flows;
mod mcp;
mod tools;
mod types;

pub use flows::{ORIGIN_AUTOMATIC, ORIGIN_MANUAL};
pub use mcp::McpServer;
pub use tools::{ImportKataRequest, TutorServer, UpdateProgressRequest};
pub use types::AppState;
