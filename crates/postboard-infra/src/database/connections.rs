use std::future::Future;
use std::time::Duration;

use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use postboard_core::RepoError;

/// How store clients are managed across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionMode {
    /// Open a client for each operation and shut it down afterwards.
    #[default]
    PerRequest,
    /// Keep one pooled client for the lifetime of the process.
    Shared,
}

impl ConnectionMode {
    /// Parse `per-request` or `shared` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "per-request" | "per_request" => Some(Self::PerRequest),
            "shared" | "pooled" => Some(Self::Shared),
            _ => None,
        }
    }
}

/// Configuration for the document store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub mode: ConnectionMode,
    pub max_pool_size: u32,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            mode: ConnectionMode::default(),
            max_pool_size: 10,
            server_selection_timeout: Duration::from_secs(5),
        }
    }
}

/// Hands out database handles scoped to a single operation.
///
/// In [`ConnectionMode::PerRequest`] every call to [`MongoConnector::scoped`]
/// opens its own client and shuts it down once the operation finishes,
/// whether it succeeded or not.
pub struct MongoConnector {
    config: MongoConfig,
    shared: Option<Client>,
}

impl MongoConnector {
    /// Build the connector. In shared mode the pooled client is created here.
    pub async fn init(config: MongoConfig) -> Result<Self, RepoError> {
        let shared = match config.mode {
            ConnectionMode::Shared => Some(open_client(&config).await?),
            ConnectionMode::PerRequest => None,
        };

        tracing::info!(
            database = %config.database,
            mode = ?config.mode,
            "Document store configured"
        );

        Ok(Self { config, shared })
    }

    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    /// Run `op` against the configured database and release the handle afterwards.
    pub async fn scoped<T, F, Fut>(&self, op: F) -> Result<T, RepoError>
    where
        F: FnOnce(Database) -> Fut + Send,
        Fut: Future<Output = Result<T, RepoError>> + Send,
        T: Send,
    {
        if let Some(client) = &self.shared {
            return op(client.database(&self.config.database)).await;
        }

        let client = open_client(&self.config).await?;
        let result = op(client.database(&self.config.database)).await;
        client.shutdown().await;
        tracing::trace!("Store client released");
        result
    }
}

async fn open_client(config: &MongoConfig) -> Result<Client, RepoError> {
    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(|e| RepoError::Connection(e.to_string()))?;
    options.app_name = Some("postboard".to_string());
    options.max_pool_size = Some(config.max_pool_size);
    options.server_selection_timeout = Some(config.server_selection_timeout);

    Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))
}

/// Classify a driver error.
pub(crate) fn map_mongo_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        ErrorKind::BsonDeserialization(_) => RepoError::Mapping(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}
