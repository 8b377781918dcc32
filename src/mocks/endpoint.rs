//! Mock endpoint provider for testing.

use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, EndpointParams, EndpointProvider};
use crate::error::EndpointError;
use parking_lot::Mutex;

/// Endpoint provider returning a fixed endpoint, or always failing.
#[derive(Debug)]
pub struct MockEndpointProvider {
    endpoint: Option<String>,
    params: Mutex<EndpointParams>,
    resolved: Mutex<Vec<EndpointParams>>,
    init_calls: Mutex<usize>,
}

impl MockEndpointProvider {
    /// Provider resolving every request to `endpoint`.
    pub fn fixed(endpoint: impl Into<String>) -> Self {
        Self::build(Some(endpoint.into()))
    }

    /// Provider whose resolution always fails.
    pub fn failing() -> Self {
        Self::build(None)
    }

    fn build(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            params: Mutex::new(EndpointParams::default()),
            resolved: Mutex::new(Vec::new()),
            init_calls: Mutex::new(0),
        }
    }

    /// Parameters of every resolution, in order.
    pub fn resolved(&self) -> Vec<EndpointParams> {
        self.resolved.lock().clone()
    }

    /// Number of `init_built_in_parameters` calls.
    pub fn init_calls(&self) -> usize {
        *self.init_calls.lock()
    }
}

impl EndpointProvider for MockEndpointProvider {
    fn init_built_in_parameters(&self, config: &ClientConfig) {
        *self.init_calls.lock() += 1;
        let mut params = self.params.lock();
        params.region = Some(config.region.clone());
        params.use_fips = config.use_fips;
        params.use_dual_stack = config.use_dual_stack;
    }

    fn override_endpoint(&self, endpoint: &str) {
        self.params.lock().endpoint = Some(endpoint.to_string());
    }

    fn parameters(&self) -> EndpointParams {
        self.params.lock().clone()
    }

    fn resolve(&self, params: &EndpointParams) -> Result<Endpoint, EndpointError> {
        self.resolved.lock().push(params.clone());
        if let Some(endpoint) = &params.endpoint {
            return Endpoint::parse(endpoint);
        }
        match &self.endpoint {
            Some(endpoint) => Endpoint::parse(endpoint),
            None => Err(EndpointError::resolution("mock endpoint resolution failure")),
        }
    }
}
