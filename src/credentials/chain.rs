//! Default credentials chain with caching.

use super::{
    AwsCredentials, CredentialsProvider, EnvCredentialsProvider, ProfileCredentialsProvider,
};
use crate::error::{AwsError, CredentialsError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, trace};

/// Default refresh window before expiry, in seconds.
const DEFAULT_REFRESH_BUFFER_SECS: i64 = 300;

/// Tries each provider in order and caches the first success.
///
/// The default chain is environment variables, then the shared profile
/// file. Cached credentials are reloaded once they fall inside the
/// refresh window.
pub struct ChainCredentialsProvider {
    providers: Vec<Arc<dyn CredentialsProvider>>,
    cached: RwLock<Option<(AwsCredentials, &'static str)>>,
    refresh_buffer: chrono::Duration,
}

impl ChainCredentialsProvider {
    /// Create the default chain.
    pub fn new() -> Self {
        Self::with_providers(vec![
            Arc::new(EnvCredentialsProvider::new()),
            Arc::new(ProfileCredentialsProvider::new()),
        ])
    }

    /// Create a chain over custom providers.
    pub fn with_providers(providers: Vec<Arc<dyn CredentialsProvider>>) -> Self {
        Self {
            providers,
            cached: RwLock::new(None),
            refresh_buffer: chrono::Duration::seconds(DEFAULT_REFRESH_BUFFER_SECS),
        }
    }

    /// Set how long before expiry cached credentials are reloaded.
    pub fn with_refresh_buffer(mut self, seconds: i64) -> Self {
        self.refresh_buffer = chrono::Duration::seconds(seconds);
        self
    }

    fn cached(&self) -> Option<AwsCredentials> {
        let cache = self.cached.read();
        match cache.as_ref() {
            Some((creds, source)) if !creds.will_expire_within(self.refresh_buffer) => {
                trace!(provider = source, "Using cached credentials");
                Some(creds.clone())
            }
            _ => None,
        }
    }

    async fn load(&self) -> Result<AwsCredentials, AwsError> {
        let mut last_error = None;

        for provider in &self.providers {
            let name = provider.name();
            trace!(provider = name, "Trying credentials provider");

            match provider.get_credentials().await {
                Ok(creds) => {
                    debug!(provider = name, "Credentials loaded");
                    *self.cached.write() = Some((creds.clone(), name));
                    return Ok(creds);
                }
                Err(e) => {
                    trace!(provider = name, error = %e, "Credentials provider failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(AwsError::Credentials(CredentialsError::NotFound)))
    }
}

impl Default for ChainCredentialsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialsProvider for ChainCredentialsProvider {
    async fn get_credentials(&self) -> Result<AwsCredentials, AwsError> {
        match self.cached() {
            Some(creds) => Ok(creds),
            None => self.load().await,
        }
    }

    async fn refresh_credentials(&self) -> Result<AwsCredentials, AwsError> {
        self.cached.write().take();
        self.load().await
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

impl std::fmt::Debug for ChainCredentialsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainCredentialsProvider")
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("refresh_buffer", &self.refresh_buffer)
            .finish()
    }
}
