//! Service client plumbing shared by every service.
//!
//! Each service client is a thin, cloneable handle over a [`ClientRuntime`],
//! which owns the configuration, endpoint provider, signer, transport and
//! executor, and runs the request pipeline for every operation.

mod builder;
mod runtime;

pub use builder::ClientBuilder;
pub use runtime::ClientRuntime;

use crate::config::ClientConfig;
use crate::endpoint::EndpointProvider;
use crate::error::AwsError;
use crate::protocol::Protocol;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Base user agent sent by every client.
pub static SDK_USER_AGENT: Lazy<String> =
    Lazy::new(|| format!("aws-service-clients/{}", env!("CARGO_PKG_VERSION")));

/// Static facts about a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Display name (e.g. `"Route53Resolver"`).
    pub service_id: &'static str,
    /// SigV4 signing name.
    pub signing_name: &'static str,
    /// Endpoint host prefix.
    pub endpoint_prefix: &'static str,
    /// API version.
    pub api_version: &'static str,
    /// Wire protocol.
    pub protocol: Protocol,
    /// `X-Amz-Target` prefix for JSON 1.1 services.
    pub target_prefix: Option<&'static str>,
    /// Headers added to every request.
    pub default_headers: &'static [(&'static str, &'static str)],
}

impl ServiceMetadata {
    /// Name of the per-service endpoint override variable,
    /// e.g. `AWS_ENDPOINT_URL_ELASTIC_BEANSTALK`.
    pub fn endpoint_env_var(&self) -> String {
        let suffix: String = self
            .service_id
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        format!("AWS_ENDPOINT_URL_{}", suffix)
    }
}

/// Behaviour common to all service clients.
pub trait ServiceClient: Clone + Send + Sync + Sized + 'static {
    /// Service metadata.
    const METADATA: &'static ServiceMetadata;

    /// Wrap a fully built runtime.
    fn from_runtime(runtime: Arc<ClientRuntime>) -> Self;

    /// The runtime backing this client.
    fn runtime(&self) -> &ClientRuntime;

    /// Client configuration.
    fn config(&self) -> &ClientConfig {
        self.runtime().config()
    }

    /// The endpoint provider in use.
    fn endpoint_provider(&self) -> &Arc<dyn EndpointProvider> {
        self.runtime().endpoint_provider()
    }

    /// Send all subsequent requests to `endpoint`.
    fn override_endpoint(&self, endpoint: &str) -> Result<(), AwsError> {
        self.runtime().override_endpoint(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: ServiceMetadata = ServiceMetadata {
        service_id: "Elastic Beanstalk",
        signing_name: "elasticbeanstalk",
        endpoint_prefix: "elasticbeanstalk",
        api_version: "2010-12-01",
        protocol: Protocol::AwsQuery,
        target_prefix: None,
        default_headers: &[],
    };

    #[test]
    fn test_endpoint_env_var() {
        assert_eq!(
            SAMPLE.endpoint_env_var(),
            "AWS_ENDPOINT_URL_ELASTIC_BEANSTALK"
        );
    }

    #[test]
    fn test_sdk_user_agent() {
        assert!(SDK_USER_AGENT.starts_with("aws-service-clients/"));
    }
}
