//! AWS Signature V4.
//!
//! Header signing for regular requests and query signing for presigned
//! URLs. Every service signs with its own signing name; the region comes
//! from the client configuration.

mod canonical;
mod signer;

pub use canonical::{uri_encode_path, uri_encode_query};
pub use signer::{AwsSigner, AwsSignerV4, PresignedUrl, SignedRequest};

use crate::credentials::AwsCredentials;
use crate::error::SigningError;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;

/// AWS Signature V4 algorithm identifier.
pub const AWS_ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// SHA-256 of an empty payload.
pub const EMPTY_PAYLOAD_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Calculate the hex SHA-256 of data.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Calculate the raw SHA-256 of data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Calculate HMAC-SHA256.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, SigningError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| SigningError::CalculationFailed {
            message: e.to_string(),
        })?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Derive the SigV4 signing key.
///
/// kSigning = HMAC(HMAC(HMAC(HMAC("AWS4" + secret, date), region), service), "aws4_request")
pub fn derive_signing_key(
    secret_key: &str,
    date_stamp: &str,
    region: &str,
    service: &str,
) -> Result<Zeroizing<Vec<u8>>, SigningError> {
    let k_secret = Zeroizing::new(format!("AWS4{}", secret_key));
    let k_date = Zeroizing::new(hmac_sha256(k_secret.as_bytes(), date_stamp.as_bytes())?);
    let k_region = Zeroizing::new(hmac_sha256(&k_date, region.as_bytes())?);
    let k_service = Zeroizing::new(hmac_sha256(&k_region, service.as_bytes())?);
    Ok(Zeroizing::new(hmac_sha256(&k_service, b"aws4_request")?))
}

/// Credential scope: `{date}/{region}/{service}/aws4_request`.
pub fn build_credential_scope(date_stamp: &str, region: &str, service: &str) -> String {
    format!("{}/{}/{}/aws4_request", date_stamp, region, service)
}

/// Format a timestamp as `YYYYMMDD'T'HHMMSS'Z'`.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format a date stamp as `YYYYMMDD`.
pub fn format_date_stamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%d").to_string()
}

/// Check if a header takes part in the signature.
pub fn should_sign_header(header_name: &str) -> bool {
    let name = header_name.to_ascii_lowercase();
    name == "host" || name == "content-type" || name == "content-md5" || name.starts_with("x-amz-")
}

/// Inputs to a single signature computation.
pub(crate) struct SignatureInput<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub query: &'a [(String, String)],
    pub headers: &'a [(String, String)],
    pub payload_hash: &'a str,
    pub region: &'a str,
    pub service: &'a str,
    pub timestamp: &'a DateTime<Utc>,
}

/// Compute the hex signature for a canonical request.
pub(crate) fn compute_signature(
    input: &SignatureInput<'_>,
    credentials: &AwsCredentials,
) -> Result<String, SigningError> {
    let date_stamp = format_date_stamp(input.timestamp);
    let canonical_request = canonical::build_canonical_request(
        input.method,
        input.path,
        input.query,
        input.headers,
        input.payload_hash,
    );

    let string_to_sign = format!(
        "{}\n{}\n{}\n{}",
        AWS_ALGORITHM,
        format_datetime(input.timestamp),
        build_credential_scope(&date_stamp, input.region, input.service),
        sha256_hex(canonical_request.as_bytes())
    );

    let signing_key = derive_signing_key(
        credentials.secret_access_key(),
        &date_stamp,
        input.region,
        input.service,
    )?;
    Ok(hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sha256_hex() {
        assert_eq!(sha256_hex(b""), EMPTY_PAYLOAD_SHA256);
        assert_eq!(
            sha256_hex(b"test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_derive_signing_key_reference_vector() {
        // Published SigV4 example key derivation.
        let key = derive_signing_key(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            "20120215",
            "us-east-1",
            "iam",
        )
        .unwrap();
        assert_eq!(
            hex::encode(key.as_slice()),
            "f4780e2d9f65fa895f9c67b32ce1baf0b0d8a43505a000a1a9e090d414db404d"
        );
    }

    #[test]
    fn test_build_credential_scope() {
        assert_eq!(
            build_credential_scope("20231215", "eu-west-1", "glacier"),
            "20231215/eu-west-1/glacier/aws4_request"
        );
    }

    #[test]
    fn test_format_timestamps() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 15, 10, 30, 45).unwrap();
        assert_eq!(format_datetime(&dt), "20231215T103045Z");
        assert_eq!(format_date_stamp(&dt), "20231215");
    }

    #[test]
    fn test_should_sign_header() {
        assert!(should_sign_header("Host"));
        assert!(should_sign_header("x-amz-date"));
        assert!(should_sign_header("X-Amz-Target"));
        assert!(should_sign_header("Content-Type"));
        assert!(!should_sign_header("User-Agent"));
        assert!(!should_sign_header("amz-sdk-invocation-id"));
    }
}
