//! Error types shared by every service client.
//!
//! Client-side failures (validation, endpoint resolution, signing) and
//! server-side failures (decoded from non-2xx responses) share one
//! hierarchy so an operation can always return them as a value.

mod mapping;

pub use mapping::{classify_error_code, unmarshall_error, ErrorEnvelope};

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Outcome of a service operation.
pub type Outcome<T> = std::result::Result<T, AwsError>;

/// Coarse classification of an [`AwsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required request field was not set.
    MissingParameter,
    /// A request field violated a format constraint.
    InvalidParameterValue,
    /// The endpoint provider could not produce an endpoint.
    EndpointResolutionFailure,
    /// Client configuration is invalid.
    Configuration,
    /// Credentials could not be loaded.
    Credentials,
    /// The request could not be signed.
    Signing,
    /// Transport-level failure.
    Network,
    /// Request rate exceeded.
    Throttling,
    /// Caller is not authorized.
    AccessDenied,
    /// The addressed resource does not exist.
    ResourceNotFound,
    /// The service rejected the input.
    Validation,
    /// The service is temporarily unavailable.
    ServiceUnavailable,
    /// The service failed internally.
    InternalFailure,
    /// Any other service error; inspect [`AwsError::error_code`].
    Service,
    /// Request or response body could not be (de)serialized.
    Serialization,
    /// The executor dropped the operation before it completed.
    Execution,
}

impl ErrorKind {
    /// Canonical upper-case name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingParameter => "MISSING_PARAMETER",
            ErrorKind::InvalidParameterValue => "INVALID_PARAMETER_VALUE",
            ErrorKind::EndpointResolutionFailure => "ENDPOINT_RESOLUTION_FAILURE",
            ErrorKind::Configuration => "CONFIGURATION",
            ErrorKind::Credentials => "CREDENTIALS",
            ErrorKind::Signing => "SIGNING",
            ErrorKind::Network => "NETWORK_CONNECTION",
            ErrorKind::Throttling => "THROTTLING",
            ErrorKind::AccessDenied => "ACCESS_DENIED",
            ErrorKind::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorKind::InternalFailure => "INTERNAL_FAILURE",
            ErrorKind::Service => "SERVICE",
            ErrorKind::Serialization => "SERIALIZATION",
            ErrorKind::Execution => "EXECUTION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for every client operation.
#[derive(Debug, Error)]
pub enum AwsError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Credential-related errors.
    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    /// AWS signing errors.
    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    /// Client-side request validation errors.
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Endpoint resolution errors.
    #[error("Endpoint error: {0}")]
    Endpoint(#[from] EndpointError),

    /// Network and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Errors returned by the service.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Response parsing errors.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// The operation never completed on its executor.
    #[error("Execution error: {message}")]
    Execution {
        /// Details about the failure.
        message: String,
    },
}

impl AwsError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AwsError::Configuration(_) => ErrorKind::Configuration,
            AwsError::Credentials(_) => ErrorKind::Credentials,
            AwsError::Signing(_) => ErrorKind::Signing,
            AwsError::Request(e) => e.kind(),
            AwsError::Endpoint(_) => ErrorKind::EndpointResolutionFailure,
            AwsError::Network(_) => ErrorKind::Network,
            AwsError::Service(e) => e.kind,
            AwsError::Response(_) => ErrorKind::Serialization,
            AwsError::Execution { .. } => ErrorKind::Execution,
        }
    }

    /// Returns true if the error is retryable.
    ///
    /// Client-side validation and endpoint failures are never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            AwsError::Network(e) => e.is_retryable(),
            AwsError::Service(e) => e.retryable,
            _ => false,
        }
    }

    /// Returns the HTTP status code if the error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AwsError::Service(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns the error code.
    ///
    /// Service errors carry the code sent by the service; client-side errors
    /// report the canonical kind name.
    pub fn error_code(&self) -> &str {
        match self {
            AwsError::Service(e) => &e.code,
            other => other.kind().as_str(),
        }
    }

    /// Returns the AWS request ID if available.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            AwsError::Service(e) => e.request_id.as_deref(),
            _ => None,
        }
    }

    /// Build an execution error.
    pub fn execution(message: impl Into<String>) -> Self {
        AwsError::Execution {
            message: message.into(),
        }
    }
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Invalid endpoint URL.
    #[error("Invalid endpoint URL: {url} ({details})")]
    InvalidEndpoint {
        /// The invalid URL.
        url: String,
        /// Details about the validation error.
        details: String,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {field} - {message}")]
    InvalidConfiguration {
        /// The configuration field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// A collaborator could not be constructed.
    #[error("Failed to initialize {component}: {message}")]
    Initialization {
        /// The component that failed.
        component: &'static str,
        /// Error message.
        message: String,
    },
}

/// Credential-related errors.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// No credentials could be found.
    #[error("Credentials not found: no credentials could be loaded from any source")]
    NotFound,

    /// Credentials have expired.
    #[error("Credentials expired: session credentials expired at {expiration}")]
    Expired {
        /// When the credentials expired.
        expiration: String,
    },

    /// Credentials are invalid.
    #[error("Invalid credentials: {message}")]
    Invalid {
        /// Details about why credentials are invalid.
        message: String,
    },

    /// Profile configuration error.
    #[error("Profile error: {message}")]
    ProfileError {
        /// Details about the profile error.
        message: String,
    },
}

/// AWS Signature V4 signing errors.
#[derive(Debug, Error)]
pub enum SigningError {
    /// Signature calculation failed.
    #[error("Signature calculation failed: {message}")]
    CalculationFailed {
        /// Details about the calculation error.
        message: String,
    },

    /// Presigned URL expiry out of range.
    #[error("Invalid expiration: {message}")]
    InvalidExpiration {
        /// Details about the expiry error.
        message: String,
    },
}

/// Client-side request errors, raised before anything is sent.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A required field was not set.
    #[error("Missing required parameter '{field}' for {operation}")]
    MissingParameter {
        /// Operation name.
        operation: &'static str,
        /// Field name as it appears in the service model.
        field: &'static str,
    },

    /// A field value violated a format constraint.
    #[error("Invalid value for '{field}' in {operation}: {reason}")]
    InvalidParameterValue {
        /// Operation name.
        operation: &'static str,
        /// Field name as it appears in the service model.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize request: {message}")]
    Serialization {
        /// Serializer message.
        message: String,
    },
}

impl RequestError {
    /// Classify the request error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::MissingParameter { .. } => ErrorKind::MissingParameter,
            RequestError::InvalidParameterValue { .. } => ErrorKind::InvalidParameterValue,
            RequestError::Serialization { .. } => ErrorKind::Serialization,
        }
    }
}

/// Endpoint resolution errors.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The provider rejected the endpoint parameters.
    #[error("Endpoint resolution failed: {message}")]
    ResolutionFailure {
        /// Reason reported by the provider.
        message: String,
    },

    /// The resolved or overridden endpoint is not a usable URL.
    #[error("Invalid endpoint '{url}': {details}")]
    InvalidEndpoint {
        /// The offending URL.
        url: String,
        /// Parser details.
        details: String,
    },
}

impl EndpointError {
    /// Build a resolution failure.
    pub fn resolution(message: impl Into<String>) -> Self {
        EndpointError::ResolutionFailure {
            message: message.into(),
        }
    }
}

/// Network and transport errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection failed.
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message.
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {duration:?}")]
    Timeout {
        /// The timeout duration.
        duration: Duration,
    },

    /// TLS/SSL error.
    #[error("TLS error: {message}")]
    TlsError {
        /// Error message.
        message: String,
    },

    /// The request could not be built by the transport.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },
}

impl NetworkError {
    /// Returns true if the error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. }
        )
    }
}

/// An error decoded from a non-2xx service response.
#[derive(Debug, Clone, Error)]
#[error("{code} (HTTP {status}): {message}")]
pub struct ServiceError {
    /// Error code sent by the service (e.g. `ResourceNotFoundException`).
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// AWS request ID.
    pub request_id: Option<String>,
    /// Classification derived from the code and status.
    pub kind: ErrorKind,
    /// Whether an outer retry strategy may retry the call.
    pub retryable: bool,
}

/// Response parsing errors.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// JSON parse error.
    #[error("JSON parse error: {message}")]
    JsonParseError {
        /// Error message.
        message: String,
    },

    /// XML parse error.
    #[error("XML parse error: {message}")]
    XmlParseError {
        /// Error message.
        message: String,
    },

    /// Missing required field.
    #[error("Missing required field '{field}' in response")]
    MissingField {
        /// The missing field name.
        field: String,
    },
}
