//! Codewars API client.
//!
//! This module provides:
//! - HTTP client for the read-only Codewars API v1 endpoints
//! - Uniform error mapping (timeout, connection failure, 404, other HTTP)
//! - Typed response documents
//! - Kata id extraction from URLs and raw ids
//!
//! API documentation: <https://dev.codewars.com>

mod client;
mod ident;
mod types;

pub use client::{CatalogClient, ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use ident::extract_challenge_id;
pub use types::{CompletedPage, CompletedRecord, ExerciseDetails, ProfileData, RankInfo};
