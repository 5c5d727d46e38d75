//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::{PostRepository, TokenService};
use postboard_core::{PostService, RepoError};
use postboard_infra::{InMemoryPostRepository, StaticTokenService};

#[cfg(feature = "mongo")]
use postboard_infra::{ConnectionMode, MongoConfig, MongoConnector, MongoPostRepository};

use crate::config::StoreConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state.
    ///
    /// The in-memory store is used only when no document store is configured.
    /// A configured store that cannot be set up is an error.
    pub async fn new(store: Option<&StoreConfig>) -> Result<Self, RepoError> {
        let repo = match store {
            Some(config) => Self::store_repository(config).await?,
            None => {
                tracing::warn!("MONGODB_URI not set. Running with the in-memory store.");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!(store = repo.backend(), "Application state initialized");
        Ok(Self::with_repository(repo))
    }

    /// State over a fresh in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    pub(crate) fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
            tokens: Arc::new(StaticTokenService::default()),
        }
    }

    #[cfg(feature = "mongo")]
    async fn store_repository(config: &StoreConfig) -> Result<Arc<dyn PostRepository>, RepoError> {
        let mode = ConnectionMode::parse(&config.connection_mode).unwrap_or_else(|| {
            tracing::warn!(
                value = %config.connection_mode,
                "Unknown MONGODB_CONNECTION_MODE, using per-request"
            );
            ConnectionMode::PerRequest
        });

        let mut mongo = MongoConfig::new(&config.uri, &config.database);
        mongo.mode = mode;
        mongo.server_selection_timeout = config.server_selection_timeout;

        let connector = MongoConnector::init(mongo).await.map_err(|e| {
            tracing::error!("Failed to set up document store: {}", e);
            e
        })?;
        Ok(Arc::new(MongoPostRepository::new(connector)))
    }

    #[cfg(not(feature = "mongo"))]
    async fn store_repository(
        _config: &StoreConfig,
    ) -> Result<Arc<dyn PostRepository>, RepoError> {
        tracing::info!("Running without mongo feature - using in-memory repository");
        Ok(Arc::new(InMemoryPostRepository::new()))
    }
}
