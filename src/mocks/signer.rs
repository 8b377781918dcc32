//! Mock signer for testing.

use crate::error::{AwsError, SigningError};
use crate::signing::{AwsSigner, PresignedUrl, SignedRequest};
use crate::transport::HttpRequest;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

/// Signer that stamps a fixed `authorization` header and counts calls.
#[derive(Debug, Default)]
pub struct MockSigner {
    fail: AtomicBool,
    sign_count: AtomicUsize,
    presign_count: AtomicUsize,
}

impl MockSigner {
    /// Signer that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signer that always fails.
    pub fn failing() -> Self {
        let signer = Self::default();
        signer.fail.store(true, Ordering::Relaxed);
        signer
    }

    /// Number of `sign` calls.
    pub fn sign_count(&self) -> usize {
        self.sign_count.load(Ordering::Relaxed)
    }

    /// Number of `presign` calls.
    pub fn presign_count(&self) -> usize {
        self.presign_count.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<(), AwsError> {
        if self.fail.load(Ordering::Relaxed) {
            return Err(AwsError::Signing(SigningError::CalculationFailed {
                message: "mock signer failure".to_string(),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl AwsSigner for MockSigner {
    async fn sign(&self, request: HttpRequest) -> Result<SignedRequest, AwsError> {
        self.sign_count.fetch_add(1, Ordering::Relaxed);
        self.check()?;
        Ok(request
            .with_header(
                "authorization",
                "AWS4-HMAC-SHA256 Credential=mock/20240115/us-east-1/mock/aws4_request",
            )
            .with_header("x-amz-date", "20240115T100000Z"))
    }

    async fn presign(
        &self,
        method: &str,
        url: &Url,
        region: &str,
        expires_in: Duration,
    ) -> Result<PresignedUrl, AwsError> {
        self.presign_count.fetch_add(1, Ordering::Relaxed);
        self.check()?;

        let mut signed = url.clone();
        signed
            .query_pairs_mut()
            .append_pair("X-Amz-Region", region)
            .append_pair("X-Amz-Expires", &expires_in.as_secs().to_string())
            .append_pair("X-Amz-Signature", "mock");

        let expires_at = Utc::now()
            + chrono::Duration::from_std(expires_in).unwrap_or_else(|_| chrono::Duration::zero());

        Ok(PresignedUrl {
            url: signed.to_string(),
            method: method.to_string(),
            expires_at,
            signed_headers: HashMap::new(),
        })
    }
}
