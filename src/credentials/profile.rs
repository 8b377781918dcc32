//! Credentials from the shared AWS profile file.

use super::{AwsCredentials, CredentialsProvider};
use crate::error::{AwsError, CredentialsError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tracing::trace;

/// Default profile name.
pub const DEFAULT_PROFILE: &str = "default";

/// Profile selection variable.
pub const AWS_PROFILE: &str = "AWS_PROFILE";

/// Credentials file location variable.
pub const AWS_SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Parsed sections of an INI-style AWS profile file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    profiles: HashMap<String, HashMap<String, String>>,
}

impl ProfileSet {
    /// Parse profile file content.
    ///
    /// Accepts both `[name]` and `[profile name]` headers; `#` and `;` start comments.
    pub fn parse(content: &str) -> Self {
        let mut profiles: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let header = header.trim();
                let name = header.strip_prefix("profile ").unwrap_or(header).trim();
                profiles.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                continue;
            }

            if let (Some(profile), Some((key, value))) = (&current, line.split_once('=')) {
                profiles
                    .entry(profile.clone())
                    .or_default()
                    .insert(key.trim().to_lowercase(), value.trim().to_string());
            }
        }

        Self { profiles }
    }

    /// Look up a property of a profile.
    pub fn get(&self, profile: &str, key: &str) -> Option<&str> {
        self.profiles
            .get(profile)
            .and_then(|p| p.get(key))
            .map(String::as_str)
    }

    /// Check whether a profile exists.
    pub fn contains(&self, profile: &str) -> bool {
        self.profiles.contains_key(profile)
    }

    /// Build credentials from a profile.
    pub fn credentials(&self, profile: &str) -> Result<AwsCredentials, AwsError> {
        if !self.contains(profile) {
            return Err(profile_error(format!(
                "Profile '{}' not found in credentials file",
                profile
            )));
        }

        let access_key_id = self.get(profile, "aws_access_key_id").ok_or_else(|| {
            profile_error(format!("aws_access_key_id not found in profile '{}'", profile))
        })?;
        let secret_access_key = self.get(profile, "aws_secret_access_key").ok_or_else(|| {
            profile_error(format!(
                "aws_secret_access_key not found in profile '{}'",
                profile
            ))
        })?;

        let credentials = AwsCredentials::new(access_key_id, secret_access_key);
        Ok(match self.get(profile, "aws_session_token") {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        })
    }
}

fn profile_error(message: String) -> AwsError {
    AwsError::Credentials(CredentialsError::ProfileError { message })
}

/// Credentials provider reading `~/.aws/credentials`
/// (or `AWS_SHARED_CREDENTIALS_FILE`) for the selected profile.
///
/// The profile comes from the constructor, then `AWS_PROFILE`, then `default`.
#[derive(Debug, Clone)]
pub struct ProfileCredentialsProvider {
    profile_name: String,
    credentials_file: Option<PathBuf>,
}

impl ProfileCredentialsProvider {
    /// Create a new provider using `AWS_PROFILE` or the default profile.
    pub fn new() -> Self {
        Self {
            profile_name: env::var(AWS_PROFILE).unwrap_or_else(|_| DEFAULT_PROFILE.to_string()),
            credentials_file: None,
        }
    }

    /// Create a provider for a specific profile.
    pub fn with_profile(profile_name: impl Into<String>) -> Self {
        Self {
            profile_name: profile_name.into(),
            credentials_file: None,
        }
    }

    /// Read from a custom credentials file.
    pub fn with_credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    fn credentials_file_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.credentials_file {
            return Some(path.clone());
        }
        if let Ok(path) = env::var(AWS_SHARED_CREDENTIALS_FILE) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".aws").join("credentials"))
    }
}

impl Default for ProfileCredentialsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialsProvider for ProfileCredentialsProvider {
    async fn get_credentials(&self) -> Result<AwsCredentials, AwsError> {
        let path = self
            .credentials_file_path()
            .ok_or_else(|| profile_error("Unable to locate home directory".to_string()))?;

        trace!(path = %path.display(), profile = %self.profile_name, "Reading profile file");

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            profile_error(format!(
                "Failed to read credentials file at {}: {}",
                path.display(),
                e
            ))
        })?;

        ProfileSet::parse(&content).credentials(&self.profile_name)
    }

    fn name(&self) -> &'static str {
        "profile"
    }
}
