//! Glacier shapes.

use crate::protocol::json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A vault.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeVaultOutput {
    #[serde(rename = "VaultARN")]
    pub vault_arn: Option<String>,
    pub vault_name: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub last_inventory_date: Option<DateTime<Utc>>,
    pub number_of_archives: Option<i64>,
    pub size_in_bytes: Option<i64>,
}

/// Result of `ListVaults`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVaultsOutput {
    pub vault_list: Option<Vec<DescribeVaultOutput>>,
    pub marker: Option<String>,
}

/// Result of `CreateVault`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateVaultOutput {
    /// `Location` header: relative URI of the vault.
    pub location: Option<String>,
}

/// Result of `UploadArchive`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveCreationOutput {
    pub location: Option<String>,
    pub checksum: Option<String>,
    pub archive_id: Option<String>,
}

/// Inventory retrieval window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryRetrievalJobInput {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<String>,
    pub marker: Option<String>,
}

/// Description of a retrieval job to start.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobParameters {
    /// `CSV` or `JSON` for inventory jobs.
    pub format: Option<String>,
    /// `archive-retrieval`, `inventory-retrieval` or `select`.
    #[serde(rename = "Type")]
    pub job_type: Option<String>,
    pub archive_id: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "SNSTopic")]
    pub sns_topic: Option<String>,
    pub retrieval_byte_range: Option<String>,
    /// `Expedited`, `Standard` or `Bulk`.
    pub tier: Option<String>,
    pub inventory_retrieval_parameters: Option<InventoryRetrievalJobInput>,
}

/// Result of `InitiateJob`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitiateJobOutput {
    pub location: Option<String>,
    pub job_id: Option<String>,
    pub job_output_path: Option<String>,
}

/// A retrieval job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlacierJobDescription {
    pub job_id: Option<String>,
    pub job_description: Option<String>,
    /// `ArchiveRetrieval`, `InventoryRetrieval` or `Select`.
    pub action: Option<String>,
    pub archive_id: Option<String>,
    #[serde(rename = "VaultARN")]
    pub vault_arn: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub creation_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
    /// `InProgress`, `Succeeded` or `Failed`.
    pub status_code: Option<String>,
    pub status_message: Option<String>,
    pub archive_size_in_bytes: Option<i64>,
    pub inventory_size_in_bytes: Option<i64>,
    #[serde(rename = "SNSTopic")]
    pub sns_topic: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub completion_date: Option<DateTime<Utc>>,
    #[serde(rename = "SHA256TreeHash")]
    pub sha256_tree_hash: Option<String>,
    #[serde(rename = "ArchiveSHA256TreeHash")]
    pub archive_sha256_tree_hash: Option<String>,
    pub retrieval_byte_range: Option<String>,
    pub tier: Option<String>,
}

/// Result of `ListJobs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListJobsOutput {
    pub job_list: Option<Vec<GlacierJobDescription>>,
    pub marker: Option<String>,
}

/// Result of `GetJobOutput`: the raw job output and its headers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobOutput {
    pub body: Bytes,
    /// Tree hash of the returned range, when Glacier can compute one.
    pub checksum: Option<String>,
    /// 200 for a full download, 206 for a range.
    pub status: u16,
    pub content_range: Option<String>,
    pub accept_ranges: Option<String>,
    pub content_type: Option<String>,
    pub archive_description: Option<String>,
}

/// Result of `ListTagsForVault`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForVaultOutput {
    pub tags: Option<HashMap<String, String>>,
}

/// SNS notification settings of a vault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VaultNotificationConfig {
    #[serde(rename = "SNSTopic")]
    pub sns_topic: Option<String>,
    /// `ArchiveRetrievalCompleted` and/or `InventoryRetrievalCompleted`.
    pub events: Option<Vec<String>>,
}

/// Result of `InitiateMultipartUpload`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitiateMultipartUploadOutput {
    pub location: Option<String>,
    pub upload_id: Option<String>,
}

/// An in-progress multipart upload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UploadListElement {
    pub multipart_upload_id: Option<String>,
    #[serde(rename = "VaultARN")]
    pub vault_arn: Option<String>,
    pub archive_description: Option<String>,
    pub part_size_in_bytes: Option<i64>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub creation_date: Option<DateTime<Utc>>,
}

/// Result of `ListMultipartUploads`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMultipartUploadsOutput {
    pub uploads_list: Option<Vec<UploadListElement>>,
    pub marker: Option<String>,
}
