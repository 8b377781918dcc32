//! Endpoint resolution.
//!
//! A client hands its [`EndpointProvider`] the configuration once at
//! construction (the built-in parameters) and asks it for an [`Endpoint`]
//! before every request.

use crate::config::ClientConfig;
use crate::error::EndpointError;
use parking_lot::RwLock;
use std::fmt;
use tracing::trace;
use url::Url;

/// Parameters an endpoint is resolved from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointParams {
    /// Region, if configured.
    pub region: Option<String>,
    /// Use FIPS endpoints.
    pub use_fips: bool,
    /// Use dual-stack endpoints.
    pub use_dual_stack: bool,
    /// Explicit endpoint override.
    pub endpoint: Option<String>,
}

impl EndpointParams {
    /// Copy of these parameters with the region replaced.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// A resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Base URL requests are built on.
    pub url: Url,
}

impl Endpoint {
    /// Parse an endpoint from a URL string.
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let url = Url::parse(raw).map_err(|e| EndpointError::InvalidEndpoint {
            url: raw.to_string(),
            details: e.to_string(),
        })?;
        Ok(Self { url })
    }
}

/// Computes request endpoints from configuration and per-request context.
pub trait EndpointProvider: Send + Sync {
    /// Absorb region, FIPS, dual-stack and endpoint override from a configuration.
    fn init_built_in_parameters(&self, config: &ClientConfig);

    /// Replace the endpoint for all subsequent resolutions.
    fn override_endpoint(&self, endpoint: &str);

    /// Snapshot of the current built-in parameters.
    fn parameters(&self) -> EndpointParams;

    /// Resolve an endpoint.
    fn resolve(&self, params: &EndpointParams) -> Result<Endpoint, EndpointError>;
}

struct Partition {
    dns_suffix: &'static str,
    dual_stack_suffix: Option<&'static str>,
}

fn partition_for(region: &str) -> Partition {
    if region.starts_with("cn-") {
        Partition {
            dns_suffix: "amazonaws.com.cn",
            dual_stack_suffix: Some("api.amazonwebservices.com.cn"),
        }
    } else if region.starts_with("us-isob-") {
        Partition {
            dns_suffix: "sc2s.sgov.gov",
            dual_stack_suffix: None,
        }
    } else if region.starts_with("us-iso-") {
        Partition {
            dns_suffix: "c2s.ic.gov",
            dual_stack_suffix: None,
        }
    } else {
        Partition {
            dns_suffix: "amazonaws.com",
            dual_stack_suffix: Some("api.aws"),
        }
    }
}

fn is_valid_host_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Standard AWS endpoint rules for one endpoint prefix.
///
/// Produces `https://{prefix}[-fips].{region}.{dns-suffix}`, where the
/// suffix depends on the region's partition and the dual-stack flag.
pub struct DefaultEndpointProvider {
    endpoint_prefix: &'static str,
    params: RwLock<EndpointParams>,
}

impl DefaultEndpointProvider {
    /// Create a provider for a service endpoint prefix (e.g. `"glacier"`).
    pub fn new(endpoint_prefix: &'static str) -> Self {
        Self {
            endpoint_prefix,
            params: RwLock::new(EndpointParams::default()),
        }
    }
}

impl EndpointProvider for DefaultEndpointProvider {
    fn init_built_in_parameters(&self, config: &ClientConfig) {
        let mut params = self.params.write();
        params.region = Some(config.region.clone());
        params.use_fips = config.use_fips;
        params.use_dual_stack = config.use_dual_stack;
        params.endpoint = config.endpoint.as_ref().map(|u| u.to_string());
    }

    fn override_endpoint(&self, endpoint: &str) {
        self.params.write().endpoint = Some(endpoint.to_string());
    }

    fn parameters(&self) -> EndpointParams {
        self.params.read().clone()
    }

    fn resolve(&self, params: &EndpointParams) -> Result<Endpoint, EndpointError> {
        if let Some(endpoint) = &params.endpoint {
            if params.use_fips {
                return Err(EndpointError::resolution(
                    "Invalid Configuration: FIPS and custom endpoint are not supported",
                ));
            }
            if params.use_dual_stack {
                return Err(EndpointError::resolution(
                    "Invalid Configuration: Dualstack and custom endpoint are not supported",
                ));
            }
            return Endpoint::parse(endpoint);
        }

        let region = params
            .region
            .as_deref()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| EndpointError::resolution("Invalid Configuration: Missing Region"))?;

        if !is_valid_host_label(region) {
            return Err(EndpointError::resolution(format!(
                "Invalid Configuration: '{}' is not a valid region",
                region
            )));
        }

        let partition = partition_for(region);
        let suffix = if params.use_dual_stack {
            partition.dual_stack_suffix.ok_or_else(|| {
                EndpointError::resolution(format!(
                    "DualStack is enabled but region '{}' does not support DualStack",
                    region
                ))
            })?
        } else {
            partition.dns_suffix
        };
        let fips = if params.use_fips { "-fips" } else { "" };

        let url = format!(
            "https://{}{}.{}.{}",
            self.endpoint_prefix, fips, region, suffix
        );
        trace!(endpoint = %url, "Resolved endpoint");
        Endpoint::parse(&url)
    }
}

impl fmt::Debug for DefaultEndpointProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultEndpointProvider")
            .field("endpoint_prefix", &self.endpoint_prefix)
            .field("params", &*self.params.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn params(region: &str, fips: bool, dual_stack: bool) -> EndpointParams {
        EndpointParams {
            region: Some(region.to_string()),
            use_fips: fips,
            use_dual_stack: dual_stack,
            endpoint: None,
        }
    }

    #[test_case("us-east-1", false, false, "https://glacier.us-east-1.amazonaws.com/" ; "standard")]
    #[test_case("us-east-1", true, false, "https://glacier-fips.us-east-1.amazonaws.com/" ; "fips")]
    #[test_case("eu-west-1", false, true, "https://glacier.eu-west-1.api.aws/" ; "dual stack")]
    #[test_case("us-gov-west-1", true, true, "https://glacier-fips.us-gov-west-1.api.aws/" ; "fips dual stack")]
    #[test_case("cn-north-1", false, false, "https://glacier.cn-north-1.amazonaws.com.cn/" ; "china")]
    #[test_case("us-iso-east-1", false, false, "https://glacier.us-iso-east-1.c2s.ic.gov/" ; "iso")]
    fn test_resolve(region: &str, fips: bool, dual_stack: bool, expected: &str) {
        let provider = DefaultEndpointProvider::new("glacier");
        let endpoint = provider.resolve(&params(region, fips, dual_stack)).unwrap();
        assert_eq!(endpoint.url.as_str(), expected);
    }

    #[test]
    fn test_missing_region_fails() {
        let provider = DefaultEndpointProvider::new("appconfig");
        assert!(provider.resolve(&EndpointParams::default()).is_err());
        assert!(provider.resolve(&params("", false, false)).is_err());
    }

    #[test]
    fn test_invalid_region_fails() {
        let provider = DefaultEndpointProvider::new("appconfig");
        let err = provider
            .resolve(&params("us-east-1/evil", false, false))
            .unwrap_err();
        assert!(err.to_string().contains("not a valid region"));
    }

    #[test]
    fn test_iso_rejects_dual_stack() {
        let provider = DefaultEndpointProvider::new("es");
        assert!(provider
            .resolve(&params("us-isob-east-1", false, true))
            .is_err());
    }

    #[test]
    fn test_override_endpoint() {
        let provider = DefaultEndpointProvider::new("es");
        provider.override_endpoint("http://localhost:9200");

        let endpoint = provider.resolve(&provider.parameters()).unwrap();
        assert_eq!(endpoint.url.as_str(), "http://localhost:9200/");

        let mut with_fips = provider.parameters();
        with_fips.use_fips = true;
        assert!(provider.resolve(&with_fips).is_err());
    }

    #[test]
    fn test_init_built_in_parameters() {
        let config = ClientConfig::builder()
            .region("ap-northeast-1")
            .use_dual_stack(true)
            .build()
            .unwrap();
        let provider = DefaultEndpointProvider::new("route53resolver");
        provider.init_built_in_parameters(&config);

        let params = provider.parameters();
        assert_eq!(params.region.as_deref(), Some("ap-northeast-1"));
        assert!(params.use_dual_stack);
        assert!(!params.use_fips);
        assert_eq!(
            provider.resolve(&params).unwrap().url.as_str(),
            "https://route53resolver.ap-northeast-1.api.aws/"
        );
    }
}
