use super::{ClientRuntime, ServiceClient};
use crate::config::{ClientConfig, ServiceClientConfig};
use crate::credentials::{AwsCredentials, CredentialsProvider, StaticCredentialsProvider};
use crate::endpoint::{DefaultEndpointProvider, EndpointProvider};
use crate::error::AwsError;
use crate::executor::{Executor, TokioExecutor};
use crate::signing::{AwsSigner, AwsSignerV4};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::marker::PhantomData;
use std::sync::Arc;

/// Builder for any service client.
///
/// Unset collaborators get defaults: the credentials chain, the service's
/// standard endpoint rules, a pooled reqwest transport, a SigV4 signer and
/// a tokio executor.
pub struct ClientBuilder<C> {
    config: Option<ClientConfig>,
    from_env: bool,
    credentials_provider: Option<Arc<dyn CredentialsProvider>>,
    endpoint_provider: Option<Arc<dyn EndpointProvider>>,
    transport: Option<Arc<dyn HttpTransport>>,
    signer: Option<Arc<dyn AwsSigner>>,
    executor: Option<Arc<dyn Executor>>,
    _client: PhantomData<fn() -> C>,
}

impl<C: ServiceClient> ClientBuilder<C> {
    /// Create a builder with every collaborator defaulted.
    pub fn new() -> Self {
        Self {
            config: None,
            from_env: false,
            credentials_provider: None,
            endpoint_provider: None,
            transport: None,
            signer: None,
            executor: None,
            _client: PhantomData,
        }
    }

    /// Use a shared client configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a service-specific configuration, including its endpoint provider.
    pub fn service_config(mut self, config: ServiceClientConfig) -> Self {
        self.config = Some(config.client);
        if let Some(provider) = config.endpoint_provider {
            self.endpoint_provider = Some(provider);
        }
        self
    }

    /// Load the configuration from environment variables when none is given.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    /// Sign with fixed credentials.
    pub fn credentials(self, credentials: AwsCredentials) -> Self {
        self.credentials_provider(Arc::new(StaticCredentialsProvider::new(credentials)))
    }

    /// Sign with credentials from `provider`.
    pub fn credentials_provider(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials_provider = Some(provider);
        self
    }

    /// Replace the endpoint provider.
    pub fn endpoint_provider(mut self, provider: Arc<dyn EndpointProvider>) -> Self {
        self.endpoint_provider = Some(provider);
        self
    }

    /// Replace the HTTP transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the request signer.
    pub fn signer(mut self, signer: Arc<dyn AwsSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Replace the executor used by the callable and async conventions.
    pub fn executor(mut self, executor: Arc<dyn Executor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<C, AwsError> {
        let metadata = C::METADATA;

        let mut config = match self.config {
            Some(config) => config,
            None if self.from_env => ClientConfig::builder()
                .from_env_for_service(metadata)
                .build()?,
            None => ClientConfig::default(),
        };
        if let Some(provider) = self.credentials_provider {
            config.credentials_provider = provider;
        }
        config.validate()?;

        let endpoint_provider: Arc<dyn EndpointProvider> = self.endpoint_provider.unwrap_or_else(|| {
            Arc::new(DefaultEndpointProvider::new(metadata.endpoint_prefix))
        });

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&config)?),
        };

        let signer: Arc<dyn AwsSigner> = self.signer.unwrap_or_else(|| {
            Arc::new(AwsSignerV4::new(
                config.credentials_provider.clone(),
                config.region.clone(),
                metadata.signing_name,
            ))
        });

        let executor: Arc<dyn Executor> = self
            .executor
            .unwrap_or_else(|| Arc::new(TokioExecutor::new()));

        let runtime = ClientRuntime::new(
            metadata,
            config,
            endpoint_provider,
            transport,
            signer,
            executor,
        );
        Ok(C::from_runtime(Arc::new(runtime)))
    }
}

impl<C: ServiceClient> Default for ClientBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
