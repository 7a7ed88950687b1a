use crate::domain::error::MtError;
use crate::domain::traits::SecretStore;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use crate::infrastructure::storage::cache::MemoryCache;
use crate::infrastructure::storage::credentials::CredentialManager;
use reqwest::Client;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<MemoryCache>,
    pub config: Arc<RwLock<Config>>,
    pub credentials: Arc<CredentialManager>,
    pub http_client: Client,
    /// Next MTUOC request id, shared by every connector built from this state
    pub mtuoc_request_ids: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: Config, durable: Arc<dyn SecretStore>) -> Result<Self, MtError> {
        let http_client = create_client(&config.http)?;

        Ok(Self {
            cache: Arc::new(MemoryCache::new()),
            config: Arc::new(RwLock::new(config)),
            credentials: Arc::new(CredentialManager::new(durable)),
            http_client,
            mtuoc_request_ids: Arc::new(AtomicU64::new(1)),
        })
    }
}
