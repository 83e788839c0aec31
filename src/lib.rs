//! Codewars Tutor MCP Server
//!
//! A Rust-based MCP server that manages a personal queue of Codewars kata
//! for Python practice: it syncs the user's completed-kata history, picks an
//! uncompleted kata from a local index, and materializes a practice folder
//! (README + solution stub) for it.
//!
//! # Tools
//!
//! - `update_progress` — refresh the local completed-kata snapshot
//! - `import_kata` — set up a specific kata by URL or id
//! - `practice_python` — pick a random uncompleted kata and set it up
//!
//! # Quick Start
//!
//! ```bash
//! ./codewars-tutor
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     stdin      ┌─────────────────┐
//! │ Claude Code │───────────────▶│   MCP Server    │──────▶ Codewars API
//! │ or Desktop  │◀───────────────│     (Rust)      │
//! └─────────────┘     stdout     └────────┬────────┘
//!                                         │
//!                                         ▼
//!                               data/*.json, exercises/
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod exercise;
pub mod selection;
pub mod server;
pub mod store;
