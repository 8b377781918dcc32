//! Credentials from environment variables.

use super::{AwsCredentials, CredentialsProvider};
use crate::error::{AwsError, CredentialsError};
use async_trait::async_trait;

/// Access key ID variable.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Secret access key variable.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
/// Session token variable.
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Credentials provider that reads `AWS_ACCESS_KEY_ID`,
/// `AWS_SECRET_ACCESS_KEY` and the optional `AWS_SESSION_TOKEN`.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentialsProvider {
    _private: (),
}

impl EnvCredentialsProvider {
    /// Create a new environment credentials provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve credentials through an arbitrary variable lookup.
    pub(crate) fn load<F>(lookup: F) -> Result<AwsCredentials, AwsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key_id =
            lookup(AWS_ACCESS_KEY_ID).ok_or(AwsError::Credentials(CredentialsError::NotFound))?;
        if access_key_id.is_empty() {
            return Err(AwsError::Credentials(CredentialsError::Invalid {
                message: format!("{} is empty", AWS_ACCESS_KEY_ID),
            }));
        }

        let secret_access_key = lookup(AWS_SECRET_ACCESS_KEY)
            .ok_or(AwsError::Credentials(CredentialsError::NotFound))?;
        if secret_access_key.is_empty() {
            return Err(AwsError::Credentials(CredentialsError::Invalid {
                message: format!("{} is empty", AWS_SECRET_ACCESS_KEY),
            }));
        }

        let credentials = AwsCredentials::new(access_key_id, secret_access_key);
        Ok(match lookup(AWS_SESSION_TOKEN).filter(|t| !t.is_empty()) {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        })
    }
}

#[async_trait]
impl CredentialsProvider for EnvCredentialsProvider {
    async fn get_credentials(&self) -> Result<AwsCredentials, AwsError> {
        Self::load(|name| std::env::var(name).ok())
    }

    fn name(&self) -> &'static str {
        "environment"
    }
}
