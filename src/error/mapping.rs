//! Decoding of non-2xx responses into typed service errors.

use super::*;
use crate::protocol::Protocol;
use crate::transport::HttpResponse;
use serde::Deserialize;

/// Error fields extracted from a response body or headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    /// Error code with any namespace prefix or URI suffix stripped.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
    /// AWS request ID.
    pub request_id: Option<String>,
}

impl ErrorEnvelope {
    /// Extract error fields from a JSON (`awsJson1_1` / `restJson1`) response.
    pub fn from_json(response: &HttpResponse) -> Self {
        let body: serde_json::Value =
            serde_json::from_slice(&response.body).unwrap_or(serde_json::Value::Null);

        let header_code = response.get_header("x-amzn-errortype").map(str::to_string);
        let body_code = ["__type", "code", "Code"]
            .iter()
            .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string);
        let message = ["message", "Message", "errorMessage"]
            .iter()
            .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string);

        Self {
            code: header_code.or(body_code).map(|c| sanitize_code(&c)),
            message,
            request_id: response.request_id().map(str::to_string),
        }
    }

    /// Extract error fields from an `awsQuery` XML response.
    pub fn from_query_xml(response: &HttpResponse) -> Self {
        let text = String::from_utf8_lossy(&response.body);
        match quick_xml::de::from_str::<QueryErrorResponse>(&text) {
            Ok(parsed) => Self {
                code: Some(sanitize_code(&parsed.error.code)),
                message: parsed.error.message,
                request_id: parsed
                    .request_id
                    .or_else(|| response.request_id().map(str::to_string)),
            },
            Err(_) => Self {
                code: None,
                message: None,
                request_id: response.request_id().map(str::to_string),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct QueryErrorResponse {
    #[serde(rename = "Error")]
    error: QueryErrorBody,
    #[serde(rename = "RequestId", default)]
    request_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryErrorBody {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Message", default)]
    message: Option<String>,
}

/// Strip `namespace#` prefixes and `:uri` suffixes from an error code.
fn sanitize_code(raw: &str) -> String {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    let without_prefix = without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix);
    without_prefix.trim().to_string()
}

/// Classify an error code and status into a kind and a retryable flag.
pub fn classify_error_code(code: &str, status: u16) -> (ErrorKind, bool) {
    match code {
        "Throttling"
        | "ThrottlingException"
        | "ThrottledException"
        | "RequestThrottledException"
        | "TooManyRequestsException"
        | "ProvisionedThroughputExceededException"
        | "TransactionInProgressException"
        | "RequestLimitExceeded"
        | "BandwidthLimitExceeded"
        | "RequestThrottled"
        | "SlowDown"
        | "PriorRequestNotComplete"
        | "EC2ThrottledException" => (ErrorKind::Throttling, true),

        "RequestTimeout" | "RequestTimeoutException" => (ErrorKind::Network, true),

        "InternalFailure" | "InternalError" | "InternalServerError"
        | "InternalServiceError" | "InternalServiceException" | "InternalException"
        | "BaseException" => (ErrorKind::InternalFailure, true),

        "ServiceUnavailable" | "ServiceUnavailableException" | "ServiceUnavailableError" => {
            (ErrorKind::ServiceUnavailable, true)
        }

        "RequestTimeTooSkewed" | "RequestExpired" | "InvalidSignatureException"
        | "SignatureDoesNotMatch" | "AuthFailure" | "RequestInTheFuture" => {
            (ErrorKind::AccessDenied, true)
        }

        "AccessDenied" | "AccessDeniedException" | "UnrecognizedClientException"
        | "InvalidClientTokenId" | "ExpiredToken" | "ExpiredTokenException"
        | "MissingAuthenticationToken" | "IncompleteSignature" | "NotAuthorized"
        | "InsufficientPrivilegesException" | "OptInRequired" => (ErrorKind::AccessDenied, false),

        "ResourceNotFoundException" | "ResourceNotFound" | "NotFoundException"
        | "ResourceNotFoundFault" => (ErrorKind::ResourceNotFound, false),

        "ValidationException" | "ValidationError" | "InvalidParameterValue"
        | "InvalidParameterValueException" | "InvalidParameterException"
        | "InvalidParameterCombination" | "MissingParameter" | "MissingParameterValueException"
        | "InvalidQueryParameter" | "MalformedQueryString" | "BadRequestException"
        | "InvalidRequestException" | "SerializationException" | "InvalidInputException" => {
            (ErrorKind::Validation, false)
        }

        _ => classify_status(status),
    }
}

fn classify_status(status: u16) -> (ErrorKind, bool) {
    match status {
        403 => (ErrorKind::AccessDenied, false),
        404 => (ErrorKind::ResourceNotFound, false),
        429 => (ErrorKind::Throttling, true),
        502 | 504 => (ErrorKind::ServiceUnavailable, true),
        503 => (ErrorKind::ServiceUnavailable, true),
        500..=599 => (ErrorKind::InternalFailure, true),
        _ => (ErrorKind::Service, false),
    }
}

fn fallback_code(status: u16) -> &'static str {
    match status {
        400 => "BadRequest",
        403 => "AccessDenied",
        404 => "NotFound",
        429 => "TooManyRequests",
        503 => "ServiceUnavailable",
        500..=599 => "InternalFailure",
        _ => "Unknown",
    }
}

/// Decode a non-2xx response into an [`AwsError::Service`].
pub fn unmarshall_error(protocol: Protocol, response: &HttpResponse) -> AwsError {
    let envelope = match protocol {
        Protocol::AwsQuery => ErrorEnvelope::from_query_xml(response),
        Protocol::RestJson | Protocol::AwsJson1_1 => ErrorEnvelope::from_json(response),
    };

    let code = envelope
        .code
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| fallback_code(response.status).to_string());
    let (kind, retryable) = classify_error_code(&code, response.status);

    AwsError::Service(ServiceError {
        message: envelope.message.unwrap_or_default(),
        status: response.status,
        request_id: envelope.request_id,
        kind,
        retryable,
        code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use std::collections::HashMap;

    fn response(status: u16, headers: &[(&str, &str)], body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_json_type_with_namespace() {
        let resp = response(
            400,
            &[("x-amzn-RequestId", "req-42")],
            r#"{"__type":"com.amazonaws.appstream#ResourceNotFoundException","message":"Fleet not found"}"#,
        );

        let error = unmarshall_error(Protocol::AwsJson1_1, &resp);
        assert_eq!(error.error_code(), "ResourceNotFoundException");
        assert_eq!(error.kind(), ErrorKind::ResourceNotFound);
        assert_eq!(error.request_id(), Some("req-42"));
        assert!(!error.is_retryable());
        assert!(error.to_string().contains("Fleet not found"));
    }

    #[test]
    fn test_json_error_type_header_wins() {
        let resp = response(
            429,
            &[(
                "X-Amzn-ErrorType",
                "ThrottlingException:http://internal.amazon.com/coral/com.amazon.coral.availability/",
            )],
            r#"{"Message":"Rate exceeded"}"#,
        );

        let error = unmarshall_error(Protocol::RestJson, &resp);
        assert_eq!(error.error_code(), "ThrottlingException");
        assert_eq!(error.kind(), ErrorKind::Throttling);
        assert!(error.is_retryable());
    }

    #[test]
    fn test_glacier_style_body() {
        let resp = response(
            404,
            &[],
            r#"{"code":"ResourceNotFoundException","message":"Vault not found for ARN","type":"Client"}"#,
        );

        let error = unmarshall_error(Protocol::RestJson, &resp);
        assert_eq!(error.error_code(), "ResourceNotFoundException");
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_query_error_response() {
        let body = r#"<ErrorResponse xmlns="http://elasticbeanstalk.amazonaws.com/docs/2010-12-01/">
  <Error>
    <Type>Sender</Type>
    <Code>InvalidParameterValue</Code>
    <Message>No Application named 'missing' found.</Message>
  </Error>
  <RequestId>abc-123</RequestId>
</ErrorResponse>"#;
        let error = unmarshall_error(Protocol::AwsQuery, &response(400, &[], body));

        assert_eq!(error.error_code(), "InvalidParameterValue");
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let error = unmarshall_error(Protocol::RestJson, &response(503, &[], ""));
        assert_eq!(error.error_code(), "ServiceUnavailable");
        assert_eq!(error.kind(), ErrorKind::ServiceUnavailable);
        assert!(error.is_retryable());

        let error = unmarshall_error(Protocol::AwsQuery, &response(403, &[], "not xml"));
        assert_eq!(error.kind(), ErrorKind::AccessDenied);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let (kind, retryable) = classify_error_code("TooManyApplicationsException", 400);
        assert_eq!(kind, ErrorKind::Service);
        assert!(!retryable);

        let (kind, retryable) = classify_error_code("SomethingOdd", 500);
        assert_eq!(kind, ErrorKind::InternalFailure);
        assert!(retryable);
    }

    #[test]
    fn test_sanitize_code() {
        assert_eq!(sanitize_code("aws.protocoltests#FooError"), "FooError");
        assert_eq!(sanitize_code("FooError:http://internal.amazon.com/"), "FooError");
        assert_eq!(sanitize_code("FooError"), "FooError");
    }
}
