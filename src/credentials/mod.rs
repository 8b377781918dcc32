//! AWS credentials and the providers that load them.
//!
//! A client is built from one of three strategies: the default chain
//! (environment, then shared profile file), static credentials, or a
//! caller-supplied [`CredentialsProvider`].

mod chain;
mod env;
mod profile;

pub use chain::ChainCredentialsProvider;
pub use env::EnvCredentialsProvider;
pub use profile::{ProfileCredentialsProvider, ProfileSet};

use crate::error::{AwsError, CredentialsError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// AWS credentials.
#[derive(Clone)]
pub struct AwsCredentials {
    access_key_id: String,
    secret_access_key: SecretString,
    session_token: Option<SecretString>,
    expiration: Option<DateTime<Utc>>,
}

impl AwsCredentials {
    /// Create long-term credentials.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::new(secret_access_key.into()),
            session_token: None,
            expiration: None,
        }
    }

    /// Attach a session token.
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(SecretString::new(session_token.into()));
        self
    }

    /// Attach an expiration time.
    pub fn with_expiration(mut self, expiration: DateTime<Utc>) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Get the access key ID.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Get the secret access key.
    ///
    /// This exposes the secret; never log the returned value.
    pub fn secret_access_key(&self) -> &str {
        self.secret_access_key.expose_secret()
    }

    /// Get the session token, if any.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_ref().map(|s| s.expose_secret().as_str())
    }

    /// Get the expiration time, if any.
    pub fn expiration(&self) -> Option<&DateTime<Utc>> {
        self.expiration.as_ref()
    }

    /// Check if credentials have expired.
    pub fn is_expired(&self) -> bool {
        self.expiration.map_or(false, |exp| Utc::now() >= exp)
    }

    /// Check if credentials will expire within the given duration.
    pub fn will_expire_within(&self, duration: chrono::Duration) -> bool {
        self.expiration
            .map_or(false, |exp| Utc::now() + duration >= exp)
    }
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Source of credentials for request signing.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Get credentials from this provider.
    async fn get_credentials(&self) -> Result<AwsCredentials, AwsError>;

    /// Drop any cached credentials and load them again.
    async fn refresh_credentials(&self) -> Result<AwsCredentials, AwsError> {
        self.get_credentials().await
    }

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}

/// Provider returning a fixed set of credentials.
pub struct StaticCredentialsProvider {
    credentials: AwsCredentials,
}

impl StaticCredentialsProvider {
    /// Create a new static credentials provider.
    pub fn new(credentials: AwsCredentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl CredentialsProvider for StaticCredentialsProvider {
    async fn get_credentials(&self) -> Result<AwsCredentials, AwsError> {
        if self.credentials.is_expired() {
            return Err(AwsError::Credentials(CredentialsError::Expired {
                expiration: self
                    .credentials
                    .expiration()
                    .map(|e| e.to_rfc3339())
                    .unwrap_or_default(),
            }));
        }
        Ok(self.credentials.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

impl fmt::Debug for StaticCredentialsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCredentialsProvider")
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_credentials_accessors() {
        let creds = AwsCredentials::new("AKID", "SECRET").with_session_token("TOKEN");
        assert_eq!(creds.access_key_id(), "AKID");
        assert_eq!(creds.secret_access_key(), "SECRET");
        assert_eq!(creds.session_token(), Some("TOKEN"));
        assert!(creds.expiration().is_none());
    }

    #[test]
    fn test_credentials_expiration() {
        let creds = AwsCredentials::new("AKID", "SECRET");
        assert!(!creds.is_expired());
        assert!(!creds.will_expire_within(Duration::hours(1)));

        let expired = AwsCredentials::new("AKID", "SECRET")
            .with_expiration(Utc::now() - Duration::hours(1));
        assert!(expired.is_expired());

        let expiring = AwsCredentials::new("AKID", "SECRET")
            .with_expiration(Utc::now() + Duration::minutes(5));
        assert!(!expiring.is_expired());
        assert!(expiring.will_expire_within(Duration::minutes(10)));
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let creds = AwsCredentials::new("AKID", "SECRET").with_session_token("TOKEN");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("AKID"));
        assert!(!debug.contains("SECRET"));
        assert!(!debug.contains("TOKEN"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_static_provider() {
        let provider = StaticCredentialsProvider::new(AwsCredentials::new("AKID", "SECRET"));
        let creds = provider.get_credentials().await.unwrap();
        assert_eq!(creds.access_key_id(), "AKID");
        assert_eq!(provider.name(), "static");
    }

    #[tokio::test]
    async fn test_static_provider_expired() {
        let expired = AwsCredentials::new("AKID", "SECRET")
            .with_expiration(Utc::now() - Duration::hours(1));
        let provider = StaticCredentialsProvider::new(expired);

        let err = provider.get_credentials().await.unwrap_err();
        assert!(matches!(
            err,
            AwsError::Credentials(CredentialsError::Expired { .. })
        ));
    }
}
