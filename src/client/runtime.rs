use super::{ServiceMetadata, SDK_USER_AGENT};
use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, EndpointProvider};
use crate::error::{unmarshall_error, AwsError, Outcome};
use crate::executor::Executor;
use crate::operation::{expand, OperationInput, RequestBuilder, SigningMode};
use crate::protocol::query::encode_pairs;
use crate::protocol::Protocol;
use crate::signing::{AwsSigner, PresignedUrl};
use crate::transport::{HttpRequest, HttpTransport};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, debug_span, Instrument};
use url::Url;

/// Lifetime of presigned Query URLs.
pub const PRESIGN_EXPIRY: Duration = Duration::from_secs(3600);

/// Collaborators of one service client and the request pipeline over them.
pub struct ClientRuntime {
    metadata: &'static ServiceMetadata,
    config: ClientConfig,
    endpoint_provider: Arc<dyn EndpointProvider>,
    transport: Arc<dyn HttpTransport>,
    signer: Arc<dyn AwsSigner>,
    executor: Arc<dyn Executor>,
    user_agent: String,
}

impl ClientRuntime {
    /// Assemble a runtime. The endpoint provider absorbs the configuration's
    /// region, FIPS, dual-stack and endpoint settings here.
    pub fn new(
        metadata: &'static ServiceMetadata,
        config: ClientConfig,
        endpoint_provider: Arc<dyn EndpointProvider>,
        transport: Arc<dyn HttpTransport>,
        signer: Arc<dyn AwsSigner>,
        executor: Arc<dyn Executor>,
    ) -> Self {
        endpoint_provider.init_built_in_parameters(&config);

        let mut user_agent = format!(
            "{} api/{}#{}",
            *SDK_USER_AGENT,
            metadata.service_id.replace(' ', "_").to_ascii_lowercase(),
            metadata.api_version
        );
        if let Some(app_id) = &config.app_id {
            user_agent.push_str(" app/");
            user_agent.push_str(app_id);
        }

        debug!(
            service = metadata.service_id,
            region = %config.region,
            endpoint = ?config.endpoint.as_ref().map(Url::as_str),
            "Initialized service client"
        );

        Self {
            metadata,
            config,
            endpoint_provider,
            transport,
            signer,
            executor,
            user_agent,
        }
    }

    /// Service metadata.
    pub fn metadata(&self) -> &'static ServiceMetadata {
        self.metadata
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The endpoint provider.
    pub fn endpoint_provider(&self) -> &Arc<dyn EndpointProvider> {
        &self.endpoint_provider
    }

    /// The executor used by the callable and async conventions.
    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    /// User agent sent as `x-amz-user-agent`.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Send all subsequent requests to `endpoint`.
    pub fn override_endpoint(&self, endpoint: &str) -> Result<(), AwsError> {
        Endpoint::parse(endpoint)?;
        debug!(service = self.metadata.service_id, endpoint, "Overriding endpoint");
        self.endpoint_provider.override_endpoint(endpoint);
        Ok(())
    }

    /// Validate, resolve, serialize, sign, send and decode one operation.
    ///
    /// Nothing is sent when validation or endpoint resolution fails.
    pub async fn execute<I: OperationInput>(&self, input: &I) -> Outcome<I::Output> {
        let span = debug_span!(
            "aws_operation",
            service = self.metadata.service_id,
            operation = I::DESCRIPTOR.name
        );
        self.dispatch(input).instrument(span).await
    }

    async fn dispatch<I: OperationInput>(&self, input: &I) -> Outcome<I::Output> {
        if let Err(e) = input.validate() {
            debug!(error = %e, "Request rejected before sending");
            return Err(e.into());
        }

        let endpoint = self.resolve_endpoint(None)?;
        let request = self.build_request(input, &endpoint)?;

        let request = match I::DESCRIPTOR.signing {
            SigningMode::SigV4 => self.signer.sign(request).await?,
            SigningMode::Unsigned => request,
        };

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let error = unmarshall_error(self.metadata.protocol, &response);
            debug!(
                status = response.status,
                code = error.error_code(),
                request_id = ?response.request_id(),
                "Service returned an error"
            );
            return Err(error);
        }

        debug!(status = response.status, "Operation succeeded");
        I::deserialize(&response)
    }

    /// Build a presigned `GET` URL for a Query protocol operation, signed for
    /// `region` and valid for one hour.
    pub async fn presign<I: OperationInput>(&self, input: &I, region: &str) -> Outcome<PresignedUrl> {
        if self.metadata.protocol != Protocol::AwsQuery {
            return Err(AwsError::execution(format!(
                "{} does not support presigned requests",
                self.metadata.service_id
            )));
        }
        input.validate()?;

        let endpoint = self.resolve_endpoint(Some(region))?;
        let mut builder = RequestBuilder::new();
        input.serialize(&mut builder)?;

        let mut params = self.query_preamble::<I>();
        params.extend(builder.form.into_pairs());
        let raw = format!("{}/?{}", base_url(&endpoint), encode_pairs(&params));
        let url = Url::parse(&raw).map_err(|e| crate::error::EndpointError::InvalidEndpoint {
            url: raw.clone(),
            details: e.to_string(),
        })?;

        debug!(
            service = self.metadata.service_id,
            operation = I::DESCRIPTOR.name,
            region,
            "Presigning request"
        );
        self.signer.presign("GET", &url, region, PRESIGN_EXPIRY).await
    }

    fn resolve_endpoint(&self, region: Option<&str>) -> Result<Endpoint, AwsError> {
        let mut params = self.endpoint_provider.parameters();
        if let Some(region) = region {
            params = params.with_region(region);
        }
        self.endpoint_provider.resolve(&params).map_err(|e| {
            debug!(error = %e, "Endpoint resolution failed");
            AwsError::from(e)
        })
    }

    fn query_preamble<I: OperationInput>(&self) -> Vec<(String, String)> {
        vec![
            ("Action".to_string(), I::DESCRIPTOR.name.to_string()),
            ("Version".to_string(), self.metadata.api_version.to_string()),
        ]
    }

    fn build_request<I: OperationInput>(
        &self,
        input: &I,
        endpoint: &Endpoint,
    ) -> Result<HttpRequest, AwsError> {
        let descriptor = I::DESCRIPTOR;
        let mut builder = RequestBuilder::new();
        input.serialize(&mut builder)?;

        let uri = expand(descriptor.uri, &builder.labels, descriptor.name)?;
        let mut query = uri.query;
        query.append(&mut builder.query);

        let mut url = format!("{}{}", base_url(endpoint), uri.path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&encode_pairs(&query));
        }

        let mut request = HttpRequest::new(descriptor.method.as_str(), url);
        let protocol = self.metadata.protocol;
        match protocol {
            Protocol::AwsJson1_1 => {
                if let Some(prefix) = self.metadata.target_prefix {
                    request = request
                        .with_header("x-amz-target", format!("{}.{}", prefix, descriptor.name));
                }
                request = request
                    .with_header("content-type", protocol.content_type())
                    .with_body(builder.body.take().unwrap_or_else(|| "{}".into()));
            }
            Protocol::AwsQuery => {
                let mut params = self.query_preamble::<I>();
                params.extend(std::mem::take(&mut builder.form).into_pairs());
                request = request
                    .with_header("content-type", protocol.content_type())
                    .with_body(encode_pairs(&params));
            }
            Protocol::RestJson => {
                if let Some(body) = builder.body.take() {
                    let content_type = builder
                        .content_type
                        .take()
                        .unwrap_or_else(|| protocol.content_type().to_string());
                    request = request
                        .with_header("content-type", content_type)
                        .with_body(body);
                }
            }
        }

        for (name, value) in self.metadata.default_headers {
            request = request.with_header(*name, *value);
        }
        for (name, value) in builder.headers {
            request = request.with_header(name, value);
        }

        Ok(request
            .with_header("x-amz-user-agent", self.user_agent.clone())
            .with_header("amz-sdk-invocation-id", uuid::Uuid::new_v4().to_string()))
    }
}

fn base_url(endpoint: &Endpoint) -> &str {
    endpoint.url.as_str().trim_end_matches('/')
}

impl fmt::Debug for ClientRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRuntime")
            .field("service", &self.metadata.service_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
