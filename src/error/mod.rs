//! Error types for the Codewars Tutor server.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`CatalogError`]: Codewars API specific errors
//! - [`StoreError`]: Local JSON document errors
//! - [`ExerciseError`]: Exercise materialization errors
//! - [`ToolError`]: Flow-level errors rendered by the tool surface
//! - [`McpError`]: MCP protocol errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// Codewars API error.
    #[error("Codewars API error: {0}")]
    Catalog(#[from] CatalogError),

    /// Local state store error.
    #[error("State store error: {0}")]
    Store(#[from] StoreError),

    /// Exercise materialization error.
    #[error("Exercise error: {0}")]
    Exercise(#[from] ExerciseError),

    /// MCP protocol error.
    #[error("MCP protocol error: {0}")]
    Mcp(#[from] McpError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Codewars API errors.
///
/// These errors represent failures when communicating with the Codewars API.
/// A 404 is an expected outcome (unknown user or kata), kept distinct from
/// the generic HTTP error so callers can phrase it differently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Request exceeded the configured timeout.
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Connection could not be established.
    #[error("Connection failed: {message}")]
    Unreachable {
        /// Description of the connection failure.
        message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {resource}")]
    NotFound {
        /// The username or kata id that was not found.
        resource: String,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The response body (may be truncated).
        body: String,
    },

    /// The response body could not be decoded.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

impl CatalogError {
    /// Returns true if this error is the expected not-found outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Local state store errors.
///
/// Absence of a document is not an error; the store returns `None` for that.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A document exists but failed to parse.
    #[error("Corrupt data in {file}: {message}")]
    CorruptData {
        /// The document file name.
        file: String,
        /// Description of the parse failure.
        message: String,
    },

    /// A document could not be read or written.
    #[error("I/O failure on {file}: {message}")]
    Io {
        /// The document file name.
        file: String,
        /// Description of the I/O failure.
        message: String,
    },
}

/// Exercise materialization errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    /// A field the materializer needs is absent from the fetched details.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// The exercise folder or its files could not be created.
    #[error("Filesystem failure: {message}")]
    Io {
        /// Description of the filesystem failure.
        message: String,
    },
}

/// Flow-level errors.
///
/// These are the failures the tool surface renders into user-facing
/// messages. Component errors convert in via `From`; the three `Missing*`
/// variants describe required local state that was absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// No configuration file exists.
    #[error("No user configuration found")]
    MissingConfig,

    /// Configuration exists but carries no username.
    #[error("No username configured")]
    MissingUsername,

    /// The exercise index file does not exist.
    #[error("Exercise index not found")]
    MissingIndex,

    /// Codewars API error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Local state store error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Exercise materialization error.
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}

/// MCP protocol errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum McpError {
    /// Internal server error.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    // Type assertions - verify all errors implement required traits
    assert_impl_all!(AppError: Send, Sync, std::error::Error);
    assert_impl_all!(CatalogError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(StoreError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ExerciseError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ToolError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(McpError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error, Clone);

    // AppError tests
    #[test]
    fn test_app_error_display_catalog() {
        let err = AppError::Catalog(CatalogError::Timeout { timeout_ms: 10_000 });
        assert_eq!(
            err.to_string(),
            "Codewars API error: Request timed out after 10000ms"
        );
    }

    #[test]
    fn test_app_error_display_store() {
        let err = AppError::Store(StoreError::CorruptData {
            file: "config.json".to_string(),
            message: "trailing comma".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "State store error: Corrupt data in config.json: trailing comma"
        );
    }

    #[test]
    fn test_app_error_display_mcp() {
        let err = AppError::Mcp(McpError::Internal {
            message: "transport closed".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "MCP protocol error: Internal error: transport closed"
        );
    }

    #[test]
    fn test_app_error_display_config() {
        let err = AppError::Config(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".to_string(),
            reason: "must be a positive integer".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for REQUEST_TIMEOUT_MS: must be a positive integer"
        );
    }

    // From impl tests
    #[test]
    fn test_app_error_from_catalog_error() {
        let catalog_err = CatalogError::NotFound {
            resource: "someuser".to_string(),
        };
        let app_err: AppError = catalog_err.into();
        assert!(matches!(app_err, AppError::Catalog(_)));
    }

    #[test]
    fn test_app_error_from_store_error() {
        let store_err = StoreError::Io {
            file: "user_history.json".to_string(),
            message: "permission denied".to_string(),
        };
        let app_err: AppError = store_err.into();
        assert!(matches!(app_err, AppError::Store(_)));
    }

    #[test]
    fn test_app_error_from_exercise_error() {
        let exercise_err = ExerciseError::MissingField {
            field: "url".to_string(),
        };
        let app_err: AppError = exercise_err.into();
        assert!(matches!(app_err, AppError::Exercise(_)));
    }

    #[test]
    fn test_tool_error_from_catalog_error() {
        let err: ToolError = CatalogError::Unreachable {
            message: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(err, ToolError::Catalog(_)));
    }

    #[test]
    fn test_tool_error_from_store_error() {
        let err: ToolError = StoreError::CorruptData {
            file: "katas_index.json".to_string(),
            message: "expected array".to_string(),
        }
        .into();
        assert!(matches!(err, ToolError::Store(_)));
    }

    // CatalogError tests
    #[test]
    fn test_catalog_error_display_timeout() {
        let err = CatalogError::Timeout { timeout_ms: 10_000 };
        assert_eq!(err.to_string(), "Request timed out after 10000ms");
    }

    #[test]
    fn test_catalog_error_display_unreachable() {
        let err = CatalogError::Unreachable {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Connection failed: connection refused");
    }

    #[test]
    fn test_catalog_error_display_not_found() {
        let err = CatalogError::NotFound {
            resource: "5277c8a221e209d3f6000b56".to_string(),
        };
        assert_eq!(err.to_string(), "Not found: 5277c8a221e209d3f6000b56");
    }

    #[test]
    fn test_catalog_error_display_http() {
        let err = CatalogError::Http {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn test_catalog_error_is_not_found() {
        let not_found = CatalogError::NotFound {
            resource: "x".to_string(),
        };
        let http = CatalogError::Http {
            status: 500,
            body: String::new(),
        };
        assert!(not_found.is_not_found());
        assert!(!http.is_not_found());
    }

    // ToolError tests
    #[test]
    fn test_tool_error_display_missing_config() {
        assert_eq!(
            ToolError::MissingConfig.to_string(),
            "No user configuration found"
        );
    }

    #[test]
    fn test_tool_error_display_missing_username() {
        assert_eq!(
            ToolError::MissingUsername.to_string(),
            "No username configured"
        );
    }

    #[test]
    fn test_tool_error_display_missing_index() {
        assert_eq!(
            ToolError::MissingIndex.to_string(),
            "Exercise index not found"
        );
    }

    #[test]
    fn test_tool_error_transparent_catalog_display() {
        let err = ToolError::Catalog(CatalogError::Timeout { timeout_ms: 5000 });
        assert_eq!(err.to_string(), "Request timed out after 5000ms");
    }

    // ExerciseError tests
    #[test]
    fn test_exercise_error_display_missing_field() {
        let err = ExerciseError::MissingField {
            field: "description".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required field: description");
    }

    #[test]
    fn test_exercise_error_display_io() {
        let err = ExerciseError::Io {
            message: "read-only filesystem".to_string(),
        };
        assert_eq!(err.to_string(), "Filesystem failure: read-only filesystem");
    }

    // Clone / PartialEq tests
    #[test]
    fn test_catalog_error_clone_eq() {
        let err = CatalogError::Http {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err, err.clone());
    }

    #[test]
    fn test_store_error_eq() {
        let err1 = StoreError::CorruptData {
            file: "a".to_string(),
            message: "m".to_string(),
        };
        let err2 = StoreError::CorruptData {
            file: "a".to_string(),
            message: "m".to_string(),
        };
        let err3 = StoreError::CorruptData {
            file: "b".to_string(),
            message: "m".to_string(),
        };
        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }

    #[test]
    fn test_tool_error_clone() {
        let err = ToolError::MissingIndex;
        assert_eq!(err, err.clone());
    }
}
