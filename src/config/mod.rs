//! Client configuration.
//!
//! [`ClientConfig`] is the generic (legacy) configuration shared by every
//! service. [`ServiceClientConfig`] is the service-specific style: the same
//! settings plus an injectable endpoint provider.

use crate::client::ServiceMetadata;
use crate::credentials::{
    AwsCredentials, ChainCredentialsProvider, CredentialsProvider, StaticCredentialsProvider,
};
use crate::endpoint::EndpointProvider;
use crate::error::{AwsError, ConfigurationError};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Configuration shared by every service client.
#[derive(Clone)]
pub struct ClientConfig {
    /// AWS region (e.g. "us-east-1"). Also the SigV4 signing region.
    pub region: String,

    /// Credentials provider.
    pub credentials_provider: Arc<dyn CredentialsProvider>,

    /// Endpoint override applied to every request.
    pub endpoint: Option<Url>,

    /// Use dual-stack (IPv4/IPv6) endpoints.
    pub use_dual_stack: bool,

    /// Use FIPS endpoints.
    pub use_fips: bool,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Read timeout for a single request.
    pub read_timeout: Duration,

    /// Maximum idle connections kept per host.
    pub max_connections: usize,

    /// Idle connection timeout.
    pub idle_timeout: Option<Duration>,

    /// Verify TLS certificates.
    pub verify_ssl: bool,

    /// Application identifier appended to the user agent.
    pub app_id: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("region", &self.region)
            .field("credentials_provider", &self.credentials_provider.name())
            .field("endpoint", &self.endpoint)
            .field("use_dual_stack", &self.use_dual_stack)
            .field("use_fips", &self.use_fips)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("max_connections", &self.max_connections)
            .field("verify_ssl", &self.verify_ssl)
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            credentials_provider: Arc::new(ChainCredentialsProvider::default()),
            endpoint: None,
            use_dual_stack: false,
            use_fips: false,
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(30),
            max_connections: 50,
            idle_timeout: Some(Duration::from_secs(90)),
            verify_ssl: true,
            app_id: None,
        }
    }
}

impl ClientConfig {
    /// Create a configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), AwsError> {
        if let Some(endpoint) = &self.endpoint {
            if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
                return Err(ConfigurationError::InvalidEndpoint {
                    url: endpoint.to_string(),
                    details: "scheme must be http or https".to_string(),
                }
                .into());
            }
        }

        if self.connect_timeout.is_zero() {
            return Err(invalid("connect_timeout", "must be greater than zero"));
        }
        if self.read_timeout.is_zero() {
            return Err(invalid("read_timeout", "must be greater than zero"));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> AwsError {
    ConfigurationError::InvalidConfiguration {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Builder for [`ClientConfig`].
#[derive(Default)]
pub struct ClientConfigBuilder {
    region: Option<String>,
    credentials_provider: Option<Arc<dyn CredentialsProvider>>,
    endpoint: Option<String>,
    use_dual_stack: Option<bool>,
    use_fips: Option<bool>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    max_connections: Option<usize>,
    idle_timeout: Option<Option<Duration>>,
    verify_ssl: Option<bool>,
    app_id: Option<String>,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use static credentials.
    pub fn credentials(mut self, credentials: AwsCredentials) -> Self {
        self.credentials_provider = Some(Arc::new(StaticCredentialsProvider::new(credentials)));
        self
    }

    /// Use a custom credentials provider.
    pub fn credentials_provider(mut self, provider: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials_provider = Some(provider);
        self
    }

    /// Override the endpoint for every request.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Enable or disable dual-stack endpoints.
    pub fn use_dual_stack(mut self, enabled: bool) -> Self {
        self.use_dual_stack = Some(enabled);
        self
    }

    /// Enable or disable FIPS endpoints.
    pub fn use_fips(mut self, enabled: bool) -> Self {
        self.use_fips = Some(enabled);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Set the maximum idle connections per host.
    pub fn max_connections(mut self, max: usize) -> Self {
        self.max_connections = Some(max);
        self
    }

    /// Set the idle connection timeout (`None` keeps connections forever).
    pub fn idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Set the application identifier.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Load settings from the process environment.
    ///
    /// Reads `AWS_REGION` / `AWS_DEFAULT_REGION`, `AWS_ENDPOINT_URL`,
    /// `AWS_USE_FIPS_ENDPOINT`, `AWS_USE_DUALSTACK_ENDPOINT`, `AWS_SDK_UA_APP_ID`,
    /// `AWS_CLIENTS_CONNECT_TIMEOUT_MS` and `AWS_CLIENTS_READ_TIMEOUT_MS`.
    pub fn from_env(self) -> Self {
        self.from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), but honours
    /// `AWS_ENDPOINT_URL_<SERVICE>` for the given service first.
    pub fn from_env_for_service(self, metadata: &ServiceMetadata) -> Self {
        let service_var = metadata.endpoint_env_var();
        let lookup = |name: &str| std::env::var(name).ok();
        let builder = self.from_lookup(lookup);
        match lookup(&service_var) {
            Some(endpoint) if !endpoint.is_empty() => builder.endpoint(endpoint),
            _ => builder,
        }
    }

    pub(crate) fn from_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(region) = lookup("AWS_REGION").or_else(|| lookup("AWS_DEFAULT_REGION")) {
            self.region = Some(region);
        }
        if let Some(endpoint) = lookup("AWS_ENDPOINT_URL").filter(|e| !e.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(val) = lookup("AWS_USE_FIPS_ENDPOINT") {
            self.use_fips = Some(parse_flag(&val));
        }
        if let Some(val) = lookup("AWS_USE_DUALSTACK_ENDPOINT") {
            self.use_dual_stack = Some(parse_flag(&val));
        }
        if let Some(app_id) = lookup("AWS_SDK_UA_APP_ID") {
            self.app_id = Some(app_id);
        }
        if let Some(ms) = lookup("AWS_CLIENTS_CONNECT_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.connect_timeout = Some(Duration::from_millis(ms));
        }
        if let Some(ms) = lookup("AWS_CLIENTS_READ_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.read_timeout = Some(Duration::from_millis(ms));
        }
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ClientConfig, AwsError> {
        let defaults = ClientConfig::default();

        let endpoint = match self.endpoint {
            Some(raw) => Some(Url::parse(&raw).map_err(|e| ConfigurationError::InvalidEndpoint {
                url: raw.clone(),
                details: e.to_string(),
            })?),
            None => None,
        };

        let config = ClientConfig {
            region: self.region.unwrap_or(defaults.region),
            credentials_provider: self
                .credentials_provider
                .unwrap_or(defaults.credentials_provider),
            endpoint,
            use_dual_stack: self.use_dual_stack.unwrap_or(defaults.use_dual_stack),
            use_fips: self.use_fips.unwrap_or(defaults.use_fips),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            read_timeout: self.read_timeout.unwrap_or(defaults.read_timeout),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
            idle_timeout: self.idle_timeout.unwrap_or(defaults.idle_timeout),
            verify_ssl: self.verify_ssl.unwrap_or(defaults.verify_ssl),
            app_id: self.app_id.or(defaults.app_id),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Service-specific configuration: a [`ClientConfig`] plus an optional
/// endpoint provider replacing the service default.
#[derive(Clone, Default)]
pub struct ServiceClientConfig {
    /// Shared client settings.
    pub client: ClientConfig,
    /// Endpoint provider; `None` selects the service default.
    pub endpoint_provider: Option<Arc<dyn EndpointProvider>>,
}

impl ServiceClientConfig {
    /// Wrap a client configuration.
    pub fn new(client: ClientConfig) -> Self {
        Self {
            client,
            endpoint_provider: None,
        }
    }

    /// Inject an endpoint provider.
    pub fn with_endpoint_provider(mut self, provider: Arc<dyn EndpointProvider>) -> Self {
        self.endpoint_provider = Some(provider);
        self
    }

    /// Load the client settings from the environment for one service.
    pub fn from_env(metadata: &ServiceMetadata) -> Result<Self, AwsError> {
        Ok(Self::new(
            ClientConfig::builder()
                .from_env_for_service(metadata)
                .build()?,
        ))
    }
}

impl std::fmt::Debug for ServiceClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClientConfig")
            .field("client", &self.client)
            .field("custom_endpoint_provider", &self.endpoint_provider.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert!(config.endpoint.is_none());
        assert!(!config.use_fips);
        assert!(!config.use_dual_stack);
        assert!(config.verify_ssl);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::builder()
            .region("eu-central-1")
            .credentials(AwsCredentials::new("AKID", "SECRET"))
            .endpoint("http://localhost:4566")
            .use_fips(true)
            .read_timeout(Duration::from_secs(5))
            .app_id("billing")
            .build()
            .unwrap();

        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.credentials_provider.name(), "static");
        assert_eq!(
            config.endpoint.as_ref().map(Url::as_str),
            Some("http://localhost:4566/")
        );
        assert!(config.use_fips);
        assert_eq!(config.read_timeout, Duration::from_secs(5));
        assert_eq!(config.app_id.as_deref(), Some("billing"));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let err = ClientConfig::builder().endpoint("not a url").build().unwrap_err();
        assert!(matches!(
            err,
            AwsError::Configuration(ConfigurationError::InvalidEndpoint { .. })
        ));

        let err = ClientConfig::builder()
            .endpoint("ftp://example.com")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            AwsError::Configuration(ConfigurationError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = ClientConfig::builder()
            .connect_timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("connect_timeout"));
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::builder()
            .from_lookup(lookup(&[
                ("AWS_DEFAULT_REGION", "ap-southeast-2"),
                ("AWS_USE_DUALSTACK_ENDPOINT", "true"),
                ("AWS_USE_FIPS_ENDPOINT", "false"),
                ("AWS_CLIENTS_READ_TIMEOUT_MS", "2500"),
            ]))
            .build()
            .unwrap();

        assert_eq!(config.region, "ap-southeast-2");
        assert!(config.use_dual_stack);
        assert!(!config.use_fips);
        assert_eq!(config.read_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_aws_region_takes_precedence() {
        let config = ClientConfig::builder()
            .from_lookup(lookup(&[
                ("AWS_REGION", "us-west-2"),
                ("AWS_DEFAULT_REGION", "eu-west-1"),
            ]))
            .build()
            .unwrap();
        assert_eq!(config.region, "us-west-2");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let config = ClientConfig::builder()
            .credentials(AwsCredentials::new("AKID", "TOPSECRET"))
            .build()
            .unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("TOPSECRET"));
        assert!(debug.contains("static"));
    }
}
