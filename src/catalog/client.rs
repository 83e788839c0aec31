//! HTTP client for the Codewars API.
//!
//! This module provides:
//! - Client construction with a bounded per-request timeout
//! - The three read-only endpoints (profile, completed page, kata details)
//! - Status-code mapping into [`CatalogError`]
//!
//! No retries are performed here; a retry, if any, is a caller decision.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{CompletedPage, ExerciseDetails, ProfileData};
use crate::error::CatalogError;

/// Default base URL for the Codewars API.
pub const DEFAULT_BASE_URL: &str = "https://www.codewars.com/api/v1";
/// Default timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration for the Codewars API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Codewars API client.
#[derive(Debug)]
pub struct CatalogClient {
    client: Client,
    config: ClientConfig,
}

impl CatalogClient {
    /// Create a new Codewars client.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unreachable`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, CatalogError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client =
            Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| CatalogError::Unreachable {
                    message: format!("Failed to create HTTP client: {e}"),
                })?;

        Ok(Self { client, config })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a user profile.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown username, or the
    /// mapped network/HTTP error otherwise.
    pub async fn fetch_profile(&self, username: &str) -> Result<ProfileData, CatalogError> {
        self.get_json(&format!("users/{username}"), username).await
    }

    /// Fetch one page of the user's completed-kata history.
    ///
    /// The API returns a fixed page size (200 entries). This call never
    /// pages internally; the returned page carries the totals so the caller
    /// can decide whether to page further.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown username, or the
    /// mapped network/HTTP error otherwise.
    pub async fn fetch_completed(
        &self,
        username: &str,
        page: u32,
    ) -> Result<CompletedPage, CatalogError> {
        self.get_json(
            &format!("users/{username}/code-challenges/completed?page={page}"),
            username,
        )
        .await
    }

    /// Fetch full details for one kata by id or slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown kata, or the
    /// mapped network/HTTP error otherwise.
    pub async fn fetch_details(
        &self,
        id_or_slug: &str,
    ) -> Result<ExerciseDetails, CatalogError> {
        self.get_json(&format!("code-challenges/{id_or_slug}"), id_or_slug)
            .await
    }

    /// Issue one GET request and decode the JSON body.
    ///
    /// `resource` names the entity being fetched so a 404 can report what
    /// was missing.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}/{}", self.config.base_url, path);
        let start = std::time::Instant::now();

        tracing::debug!(url = %url, timeout_ms = self.config.timeout_ms, "Codewars API request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if e.is_timeout() {
                tracing::warn!(url = %url, elapsed_ms, "Codewars API request timed out");
                CatalogError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                }
            } else {
                tracing::warn!(url = %url, elapsed_ms, error = %e, "Codewars API request failed");
                CatalogError::Unreachable {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "Codewars API response received");

        if status.as_u16() == 404 {
            return Err(CatalogError::NotFound {
                resource: resource.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::UnexpectedResponse {
                message: format!("Failed to parse response: {e}"),
            })
    }
}
