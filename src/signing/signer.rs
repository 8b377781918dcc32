//! SigV4 signer bound to one service and region.

use super::*;
use crate::credentials::CredentialsProvider;
use crate::error::AwsError;
use crate::transport::HttpRequest;
use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

/// Longest expiry SigV4 accepts for a presigned URL.
const MAX_PRESIGN_EXPIRY_SECS: u64 = 7 * 24 * 60 * 60;

/// Headers the signer owns and overwrites.
const SIGNER_HEADERS: [&str; 5] = [
    "host",
    "x-amz-date",
    "x-amz-content-sha256",
    "x-amz-security-token",
    "authorization",
];

/// A request after signing.
pub type SignedRequest = HttpRequest;

/// A presigned, time-limited URL.
#[derive(Debug, Clone)]
pub struct PresignedUrl {
    /// The presigned URL.
    pub url: String,
    /// HTTP method the URL is valid for.
    pub method: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
    /// Headers that must accompany the request.
    pub signed_headers: HashMap<String, String>,
}

impl PresignedUrl {
    /// Check if the URL has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Remaining validity, if any.
    pub fn time_remaining(&self) -> Option<Duration> {
        let remaining = self.expires_at - Utc::now();
        (remaining.num_seconds() > 0).then_some(remaining)
    }
}

/// Request signer.
#[async_trait]
pub trait AwsSigner: Send + Sync {
    /// Sign a request in place, adding the `Authorization` header.
    async fn sign(&self, request: HttpRequest) -> Result<SignedRequest, AwsError>;

    /// Query-sign a URL for `region`, valid for `expires_in`.
    async fn presign(
        &self,
        method: &str,
        url: &Url,
        region: &str,
        expires_in: std::time::Duration,
    ) -> Result<PresignedUrl, AwsError>;
}

/// AWS Signature V4 signer.
pub struct AwsSignerV4 {
    credentials_provider: Arc<dyn CredentialsProvider>,
    region: String,
    service: String,
}

impl AwsSignerV4 {
    /// Create a signer for `service` in `region`.
    pub fn new(
        credentials_provider: Arc<dyn CredentialsProvider>,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            credentials_provider,
            region: region.into(),
            service: service.into(),
        }
    }

    /// The signing region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The signing name of the service.
    pub fn service(&self) -> &str {
        &self.service
    }
}

fn parse_url(raw: &str) -> Result<Url, AwsError> {
    Url::parse(raw).map_err(|e| {
        AwsError::Signing(SigningError::CalculationFailed {
            message: format!("Cannot sign unparsable URL '{}': {}", raw, e),
        })
    })
}

fn host_header(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

fn decoded_query(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[async_trait]
impl AwsSigner for AwsSignerV4 {
    async fn sign(&self, mut request: HttpRequest) -> Result<SignedRequest, AwsError> {
        let credentials = self.credentials_provider.get_credentials().await?;
        let url = parse_url(&request.url)?;
        let timestamp = Utc::now();
        let payload_hash = request
            .body
            .as_deref()
            .map(sha256_hex)
            .unwrap_or_else(|| EMPTY_PAYLOAD_SHA256.to_string());

        request
            .headers
            .retain(|name, _| !SIGNER_HEADERS.contains(&name.to_ascii_lowercase().as_str()));
        request.headers.insert("host".into(), host_header(&url));
        request
            .headers
            .insert("x-amz-date".into(), format_datetime(&timestamp));
        request
            .headers
            .insert("x-amz-content-sha256".into(), payload_hash.clone());
        if let Some(token) = credentials.session_token() {
            request
                .headers
                .insert("x-amz-security-token".into(), token.to_string());
        }

        let headers: Vec<(String, String)> = request
            .headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let query = decoded_query(&url);

        let signature = compute_signature(
            &SignatureInput {
                method: &request.method,
                path: url.path(),
                query: &query,
                headers: &headers,
                payload_hash: &payload_hash,
                region: &self.region,
                service: &self.service,
                timestamp: &timestamp,
            },
            &credentials,
        )?;

        let scope = build_credential_scope(
            &format_date_stamp(&timestamp),
            &self.region,
            &self.service,
        );
        let authorization = format!(
            "{} Credential={}/{}, SignedHeaders={}, Signature={}",
            AWS_ALGORITHM,
            credentials.access_key_id(),
            scope,
            canonical::build_signed_headers(&headers),
            signature
        );
        request.headers.insert("authorization".into(), authorization);

        Ok(request)
    }

    async fn presign(
        &self,
        method: &str,
        url: &Url,
        region: &str,
        expires_in: std::time::Duration,
    ) -> Result<PresignedUrl, AwsError> {
        let expires_secs = expires_in.as_secs();
        if expires_secs == 0 || expires_secs > MAX_PRESIGN_EXPIRY_SECS {
            return Err(AwsError::Signing(SigningError::InvalidExpiration {
                message: format!(
                    "expiry must be between 1 and {} seconds, got {}",
                    MAX_PRESIGN_EXPIRY_SECS, expires_secs
                ),
            }));
        }

        let credentials = self.credentials_provider.get_credentials().await?;
        let timestamp = Utc::now();
        let scope = build_credential_scope(&format_date_stamp(&timestamp), region, &self.service);
        let host = host_header(url);
        let headers = vec![("host".to_string(), host.clone())];

        let mut query = decoded_query(url);
        query.push(("X-Amz-Algorithm".into(), AWS_ALGORITHM.into()));
        query.push((
            "X-Amz-Credential".into(),
            format!("{}/{}", credentials.access_key_id(), scope),
        ));
        query.push(("X-Amz-Date".into(), format_datetime(&timestamp)));
        query.push(("X-Amz-Expires".into(), expires_secs.to_string()));
        query.push(("X-Amz-SignedHeaders".into(), "host".into()));
        if let Some(token) = credentials.session_token() {
            query.push(("X-Amz-Security-Token".into(), token.to_string()));
        }

        let signature = compute_signature(
            &SignatureInput {
                method,
                path: url.path(),
                query: &query,
                headers: &headers,
                payload_hash: EMPTY_PAYLOAD_SHA256,
                region,
                service: &self.service,
                timestamp: &timestamp,
            },
            &credentials,
        )?;
        query.push(("X-Amz-Signature".into(), signature));

        let mut presigned = url.clone();
        presigned.set_query(Some(&canonical::build_canonical_query_string(&query)));

        Ok(PresignedUrl {
            url: presigned.to_string(),
            method: method.to_string(),
            expires_at: timestamp + Duration::seconds(expires_secs as i64),
            signed_headers: HashMap::from([("host".to_string(), host)]),
        })
    }
}

impl std::fmt::Debug for AwsSignerV4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSignerV4")
            .field("region", &self.region)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}
