//! AWS service clients
//!
//! Typed clients for AppConfig, AppStream 2.0, CodeStar, Elastic Beanstalk,
//! Glacier, OpenSearch Service and Route 53 Resolver.
//!
//! Every operation runs the same pipeline: client-side validation, endpoint
//! resolution, request serialization, SigV4 signing, sending, and decoding
//! of the result or error. Nothing is sent when validation or endpoint
//! resolution fails.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aws_clients::config::ClientConfig;
//! use aws_clients::services::appconfig::{AppConfigClient, ListApplicationsRequest};
//!
//! #[tokio::main]
//! async fn main() -> aws_clients::Result<()> {
//!     let config = ClientConfig::builder().region("eu-west-1").build()?;
//!     let client = AppConfigClient::new(config)?;
//!
//!     let page = client.list_applications(ListApplicationsRequest::default()).await?;
//!     for app in page.items.unwrap_or_default() {
//!         println!("{:?}", app.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Each operation also has a `_callable` form returning an
//! [`OperationHandle`](executor::OperationHandle) and an `_async` form that
//! hands the outcome to a callback.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod client;
pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod executor;
pub mod mocks;
pub mod operation;
pub mod protocol;
pub mod services;
pub mod signing;
pub mod transport;

pub use client::{ClientBuilder, ClientRuntime, ServiceClient, ServiceMetadata};
pub use config::{ClientConfig, ServiceClientConfig};
pub use credentials::{
    AwsCredentials, ChainCredentialsProvider, CredentialsProvider, EnvCredentialsProvider,
    ProfileCredentialsProvider, StaticCredentialsProvider,
};
pub use endpoint::{DefaultEndpointProvider, Endpoint, EndpointParams, EndpointProvider};
pub use error::{
    AwsError, ConfigurationError, CredentialsError, EndpointError, ErrorKind, NetworkError,
    Outcome, RequestError, ResponseError, ServiceError, SigningError,
};
pub use executor::{AsyncCallerContext, Executor, OperationHandle, TokioExecutor};
pub use operation::{OperationInput, SigningMode};
pub use services::{
    AppConfigClient, AppStreamClient, CodeStarClient, ElasticBeanstalkClient, GlacierClient,
    OpenSearchClient, Route53ResolverClient,
};
pub use signing::{AwsSigner, AwsSignerV4, PresignedUrl};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Result type for client construction and configuration.
pub type Result<T> = std::result::Result<T, AwsError>;
