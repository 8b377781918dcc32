//! Elastic Beanstalk shapes.
//!
//! Results decode from Query XML; structures sent as input implement
//! [`QueryStruct`].

use crate::protocol::query::{self, QueryStruct, QueryWriter};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    /// Build a tag from a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

impl QueryStruct for Tag {
    fn write(&self, writer: &mut QueryWriter, prefix: &str) {
        writer
            .opt(&format!("{}.Key", prefix), &self.key)
            .opt(&format!("{}.Value", prefix), &self.value);
    }
}

/// S3 location of a source bundle.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Location {
    pub s3_bucket: Option<String>,
    pub s3_key: Option<String>,
}

impl QueryStruct for S3Location {
    fn write(&self, writer: &mut QueryWriter, prefix: &str) {
        writer
            .opt(&format!("{}.S3Bucket", prefix), &self.s3_bucket)
            .opt(&format!("{}.S3Key", prefix), &self.s3_key);
    }
}

/// One configuration option value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationOptionSetting {
    pub resource_name: Option<String>,
    pub namespace: Option<String>,
    pub option_name: Option<String>,
    pub value: Option<String>,
}

impl ConfigurationOptionSetting {
    /// Setting `option_name` in `namespace` to `value`.
    pub fn new(
        namespace: impl Into<String>,
        option_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            resource_name: None,
            namespace: Some(namespace.into()),
            option_name: Some(option_name.into()),
            value: Some(value.into()),
        }
    }
}

impl QueryStruct for ConfigurationOptionSetting {
    fn write(&self, writer: &mut QueryWriter, prefix: &str) {
        writer
            .opt(&format!("{}.ResourceName", prefix), &self.resource_name)
            .opt(&format!("{}.Namespace", prefix), &self.namespace)
            .opt(&format!("{}.OptionName", prefix), &self.option_name)
            .opt(&format!("{}.Value", prefix), &self.value);
    }
}

/// Web server or worker tier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentTier {
    pub name: Option<String>,
    #[serde(rename = "Type")]
    pub tier_type: Option<String>,
    pub version: Option<String>,
}

impl QueryStruct for EnvironmentTier {
    fn write(&self, writer: &mut QueryWriter, prefix: &str) {
        writer
            .opt(&format!("{}.Name", prefix), &self.name)
            .opt(&format!("{}.Type", prefix), &self.tier_type)
            .opt(&format!("{}.Version", prefix), &self.version);
    }
}

/// An application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationDescription {
    pub application_arn: Option<String>,
    pub application_name: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "query::members")]
    pub versions: Option<Vec<String>>,
    #[serde(default, deserialize_with = "query::members")]
    pub configuration_templates: Option<Vec<String>>,
}

/// Result carrying one application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationDescriptionMessage {
    pub application: Option<ApplicationDescription>,
}

/// Result of `DescribeApplications`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationDescriptionsMessage {
    #[serde(default, deserialize_with = "query::members")]
    pub applications: Option<Vec<ApplicationDescription>>,
}

/// An application version.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationVersionDescription {
    pub application_version_arn: Option<String>,
    pub application_name: Option<String>,
    pub description: Option<String>,
    pub version_label: Option<String>,
    pub source_bundle: Option<S3Location>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    /// `PROCESSED`, `UNPROCESSED`, `FAILED`, `PROCESSING` or `BUILDING`.
    pub status: Option<String>,
}

/// Result carrying one application version.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationVersionDescriptionMessage {
    pub application_version: Option<ApplicationVersionDescription>,
}

/// Result of `DescribeApplicationVersions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationVersionDescriptionsMessage {
    #[serde(default, deserialize_with = "query::members")]
    pub application_versions: Option<Vec<ApplicationVersionDescription>>,
    pub next_token: Option<String>,
}

/// An environment, returned by the create and terminate calls and listed by
/// `DescribeEnvironments`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentDescription {
    pub environment_name: Option<String>,
    pub environment_id: Option<String>,
    pub environment_arn: Option<String>,
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub solution_stack_name: Option<String>,
    pub platform_arn: Option<String>,
    pub template_name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "EndpointURL")]
    pub endpoint_url: Option<String>,
    #[serde(rename = "CNAME")]
    pub cname: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_updated: Option<DateTime<Utc>>,
    /// `Launching`, `Updating`, `Ready`, `Terminating` or `Terminated`.
    pub status: Option<String>,
    pub abortable_operation_in_progress: Option<bool>,
    /// `Green`, `Yellow`, `Red` or `Grey`.
    pub health: Option<String>,
    pub health_status: Option<String>,
    pub tier: Option<EnvironmentTier>,
}

/// Result of `DescribeEnvironments`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentDescriptionsMessage {
    #[serde(default, deserialize_with = "query::members")]
    pub environments: Option<Vec<EnvironmentDescription>>,
    pub next_token: Option<String>,
}

/// Result of `CheckDNSAvailability`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheckDnsAvailabilityOutput {
    pub available: Option<bool>,
    #[serde(rename = "FullyQualifiedCNAME")]
    pub fully_qualified_cname: Option<String>,
}

/// A solution stack and the file types it accepts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SolutionStackDescription {
    pub solution_stack_name: Option<String>,
    #[serde(default, deserialize_with = "query::members")]
    pub permitted_file_types: Option<Vec<String>>,
}

/// Result of `ListAvailableSolutionStacks`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAvailableSolutionStacksOutput {
    #[serde(default, deserialize_with = "query::members")]
    pub solution_stacks: Option<Vec<String>>,
    #[serde(default, deserialize_with = "query::members")]
    pub solution_stack_details: Option<Vec<SolutionStackDescription>>,
}

/// An environment event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventDescription {
    pub event_date: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub template_name: Option<String>,
    pub environment_name: Option<String>,
    pub platform_arn: Option<String>,
    pub request_id: Option<String>,
    /// `TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR` or `FATAL`.
    pub severity: Option<String>,
}

/// Result of `DescribeEvents`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventDescriptionsMessage {
    #[serde(default, deserialize_with = "query::members")]
    pub events: Option<Vec<EventDescription>>,
    pub next_token: Option<String>,
}

/// Result of `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTagsDescriptionMessage {
    pub resource_arn: Option<String>,
    #[serde(default, deserialize_with = "query::members")]
    pub resource_tags: Option<Vec<Tag>>,
}
