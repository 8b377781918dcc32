//! OpenSearch Service shapes.

use crate::protocol::json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Data and master node layout of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClusterConfig {
    pub instance_type: Option<String>,
    pub instance_count: Option<i32>,
    pub dedicated_master_enabled: Option<bool>,
    pub dedicated_master_type: Option<String>,
    pub dedicated_master_count: Option<i32>,
    pub zone_awareness_enabled: Option<bool>,
    pub warm_enabled: Option<bool>,
}

/// EBS volumes attached to data nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EbsOptions {
    #[serde(rename = "EBSEnabled")]
    pub ebs_enabled: Option<bool>,
    /// `standard`, `gp2`, `gp3` or `io1`.
    pub volume_type: Option<String>,
    pub volume_size: Option<i32>,
    pub iops: Option<i32>,
}

/// Service software version state of a domain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSoftwareOptions {
    pub current_version: Option<String>,
    pub new_version: Option<String>,
    pub update_available: Option<bool>,
    pub cancellable: Option<bool>,
    /// `PENDING_UPDATE`, `IN_PROGRESS`, `COMPLETED`, `NOT_ELIGIBLE` or `ELIGIBLE`.
    pub update_status: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub automated_update_date: Option<DateTime<Utc>>,
    pub optional_deployment: Option<bool>,
}

/// State of a domain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainStatus {
    pub domain_id: Option<String>,
    pub domain_name: Option<String>,
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
    pub created: Option<bool>,
    pub deleted: Option<bool>,
    pub endpoint: Option<String>,
    pub endpoints: Option<HashMap<String, String>>,
    pub processing: Option<bool>,
    pub upgrade_processing: Option<bool>,
    pub engine_version: Option<String>,
    pub cluster_config: Option<ClusterConfig>,
    #[serde(rename = "EBSOptions")]
    pub ebs_options: Option<EbsOptions>,
    pub access_policies: Option<String>,
    pub service_software_options: Option<ServiceSoftwareOptions>,
}

/// Output carrying one domain status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainStatusOutput {
    pub domain_status: Option<DomainStatus>,
}

/// Result of `DescribeDomains`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainsOutput {
    pub domain_status_list: Option<Vec<DomainStatus>>,
}

/// Name and engine of a domain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainInfo {
    pub domain_name: Option<String>,
    /// `OpenSearch` or `Elasticsearch`.
    pub engine_type: Option<String>,
}

/// Result of `ListDomainNames`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDomainNamesOutput {
    pub domain_names: Option<Vec<DomainInfo>>,
}

/// Processing state of one configuration option.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionStatus {
    #[serde(default, deserialize_with = "json::timestamp")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub update_date: Option<DateTime<Utc>>,
    pub update_version: Option<i32>,
    /// `RequiresIndexDocuments`, `Processing` or `Active`.
    pub state: Option<String>,
    pub pending_deletion: Option<bool>,
}

/// A configuration option and its status.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigOption<T> {
    pub options: Option<T>,
    pub status: Option<OptionStatus>,
}

/// Configuration of a domain, option by option.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainConfig {
    pub engine_version: Option<ConfigOption<String>>,
    pub cluster_config: Option<ConfigOption<ClusterConfig>>,
    #[serde(rename = "EBSOptions")]
    pub ebs_options: Option<ConfigOption<EbsOptions>>,
    pub access_policies: Option<ConfigOption<String>>,
    pub advanced_options: Option<ConfigOption<HashMap<String, String>>>,
}

/// Output carrying a domain configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainConfigOutput {
    pub domain_config: Option<DomainConfig>,
}

/// Result of `ListVersions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVersionsOutput {
    pub versions: Option<Vec<String>>,
    pub next_token: Option<String>,
}

/// Upgrade targets reachable from one engine version.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompatibleVersionsMap {
    pub source_version: Option<String>,
    pub target_versions: Option<Vec<String>>,
}

/// Result of `GetCompatibleVersions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCompatibleVersionsOutput {
    pub compatible_versions: Option<Vec<CompatibleVersionsMap>>,
}

/// Result of `UpgradeDomain`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeDomainOutput {
    pub upgrade_id: Option<String>,
    pub domain_name: Option<String>,
    pub target_version: Option<String>,
    pub perform_check_only: Option<bool>,
}

/// Key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
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

/// Result of `ListTags`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsOutput {
    pub tag_list: Option<Vec<Tag>>,
}

/// S3 object holding a package.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageSource {
    pub s3_bucket_name: Option<String>,
    pub s3_key: Option<String>,
}

/// A custom package such as a dictionary.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDetails {
    #[serde(rename = "PackageID")]
    pub package_id: Option<String>,
    pub package_name: Option<String>,
    /// `TXT-DICTIONARY`.
    pub package_type: Option<String>,
    pub package_description: Option<String>,
    pub package_status: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub last_updated_at: Option<DateTime<Utc>>,
    pub available_package_version: Option<String>,
}

/// Output carrying one package.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageDetailsOutput {
    pub package_details: Option<PackageDetails>,
}

/// A package as associated with a domain.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainPackageDetails {
    #[serde(rename = "PackageID")]
    pub package_id: Option<String>,
    pub package_name: Option<String>,
    pub package_type: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub last_updated: Option<DateTime<Utc>>,
    pub domain_name: Option<String>,
    /// `ASSOCIATING`, `ACTIVE`, `DISSOCIATING` and their failure states.
    pub domain_package_status: Option<String>,
    pub package_version: Option<String>,
    pub reference_path: Option<String>,
}

/// Output carrying one domain package association.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainPackageDetailsOutput {
    pub domain_package_details: Option<DomainPackageDetails>,
}

/// Output carrying service software options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSoftwareOutput {
    pub service_software_options: Option<ServiceSoftwareOptions>,
}
