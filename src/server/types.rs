//! Server types and shared state.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::exercise::Materializer;
use crate::store::StateStore;

/// Shared application state for all tool handlers.
///
/// This struct holds the configured components the tools compose: the local
/// document store, the Codewars client, and the exercise materializer.
#[derive(Clone)]
pub struct AppState {
    /// Store for the index, config, and history documents.
    pub store: Arc<StateStore>,
    /// Codewars API client.
    pub catalog: Arc<CatalogClient>,
    /// Exercise folder materializer.
    pub materializer: Arc<Materializer>,
    /// Server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        store: StateStore,
        catalog: CatalogClient,
        materializer: Materializer,
        config: Config,
    ) -> Self {
        Self {
            store: Arc::new(store),
            catalog: Arc::new(catalog),
            materializer: Arc::new(materializer),
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::catalog::ClientConfig;

    fn make_state() -> AppState {
        AppState::new(
            StateStore::new("./data"),
            CatalogClient::new(ClientConfig::default()).unwrap(),
            Materializer::new("./exercises"),
            Config::default(),
        )
    }

    #[test]
    fn test_app_state_debug_shows_config() {
        let state = make_state();
        let debug = format!("{state:?}");
        assert!(debug.contains("AppState"));
        assert!(debug.contains("config"));
    }

    #[test]
    fn test_app_state_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<AppState>();
        assert_send_sync::<AppState>();
    }
}
