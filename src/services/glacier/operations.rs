//! Glacier requests.
//!
//! Every operation is scoped to an account: `accountId` is either `-` for
//! the signing account or a 12-digit account ID.

use super::model::*;
use super::treehash::tree_hash;
use crate::error::{AwsError, Outcome, RequestError};
use crate::operation::{validate, HttpMethod, OperationDescriptor, OperationInput, RequestBuilder};
use crate::protocol::json;
use crate::transport::HttpResponse;
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;

fn check_vault(
    operation: &'static str,
    account_id: &Option<String>,
    vault_name: &Option<String>,
) -> Result<(), RequestError> {
    validate::account_id(operation, "accountId", account_id)?;
    validate::non_empty(operation, "vaultName", vault_name)
}

fn bind_vault<'a>(
    request: &'a mut RequestBuilder,
    account_id: &Option<String>,
    vault_name: &Option<String>,
) -> &'a mut RequestBuilder {
    request
        .label_opt("accountId", account_id)
        .label_opt("vaultName", vault_name)
}

fn header(response: &HttpResponse, name: &str) -> Option<String> {
    response.get_header(name).map(str::to_string)
}

// Vaults

/// Create a vault. Creating an existing vault succeeds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateVaultRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
}
setters!(CreateVaultRequest { account_id: String, vault_name: String });

impl OperationInput for CreateVaultRequest {
    type Output = CreateVaultOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("CreateVault", HttpMethod::Put, "/{accountId}/vaults/{vaultName}");

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<CreateVaultOutput> {
        Ok(CreateVaultOutput {
            location: header(response, "location"),
        })
    }
}

/// Describe a vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeVaultRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
}
setters!(DescribeVaultRequest { account_id: String, vault_name: String });

impl OperationInput for DescribeVaultRequest {
    type Output = DescribeVaultOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("DescribeVault", HttpMethod::Get, "/{accountId}/vaults/{vaultName}");

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DescribeVaultOutput> {
        json::parse(response)
    }
}

/// Delete an empty vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteVaultRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
}
setters!(DeleteVaultRequest { account_id: String, vault_name: String });

impl OperationInput for DeleteVaultRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("DeleteVault", HttpMethod::Delete, "/{accountId}/vaults/{vaultName}");

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// List the vaults of an account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVaultsRequest {
    pub account_id: Option<String>,
    pub marker: Option<String>,
    pub limit: Option<i32>,
}
setters!(ListVaultsRequest { account_id: String, marker: String, limit: i32 });

impl OperationInput for ListVaultsRequest {
    type Output = ListVaultsOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("ListVaults", HttpMethod::Get, "/{accountId}/vaults");

    fn validate(&self) -> Result<(), RequestError> {
        validate::account_id(Self::DESCRIPTOR.name, "accountId", &self.account_id)?;
        validate::range(Self::DESCRIPTOR.name, "limit", &self.limit, 1, 1000)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("accountId", &self.account_id)
            .query_opt("marker", &self.marker)
            .query_opt("limit", &self.limit);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ListVaultsOutput> {
        json::parse(response)
    }
}

// Archives

/// Upload an archive in a single request.
///
/// When `checksum` is unset the SHA-256 tree hash of `body` is computed and
/// sent as `x-amz-sha256-tree-hash`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadArchiveRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub archive_description: Option<String>,
    pub checksum: Option<String>,
    pub body: Option<Bytes>,
}
setters!(UploadArchiveRequest {
    account_id: String,
    vault_name: String,
    archive_description: String,
    checksum: String,
    body: Bytes,
});

impl OperationInput for UploadArchiveRequest {
    type Output = ArchiveCreationOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "UploadArchive",
        HttpMethod::Post,
        "/{accountId}/vaults/{vaultName}/archives",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        let body = self.body.clone().unwrap_or_default();
        let checksum = self.checksum.clone().unwrap_or_else(|| tree_hash(&body));
        bind_vault(request, &self.account_id, &self.vault_name)
            .header_opt("x-amz-archive-description", &self.archive_description)
            .header("x-amz-sha256-tree-hash", checksum)
            .payload(body, "application/octet-stream");
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ArchiveCreationOutput> {
        Ok(ArchiveCreationOutput {
            location: header(response, "location"),
            checksum: header(response, "x-amz-sha256-tree-hash"),
            archive_id: header(response, "x-amz-archive-id"),
        })
    }
}

/// Delete an archive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteArchiveRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub archive_id: Option<String>,
}
setters!(DeleteArchiveRequest { account_id: String, vault_name: String, archive_id: String });

impl OperationInput for DeleteArchiveRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DeleteArchive",
        HttpMethod::Delete,
        "/{accountId}/vaults/{vaultName}/archives/{archiveId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)?;
        validate::non_empty(Self::DESCRIPTOR.name, "archiveId", &self.archive_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name)
            .label_opt("archiveId", &self.archive_id);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

// Jobs

/// Start an archive retrieval, inventory retrieval or select job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitiateJobRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub job_parameters: Option<JobParameters>,
}
setters!(InitiateJobRequest { account_id: String, vault_name: String, job_parameters: JobParameters });

impl OperationInput for InitiateJobRequest {
    type Output = InitiateJobOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "InitiateJob",
        HttpMethod::Post,
        "/{accountId}/vaults/{vaultName}/jobs",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        if let Some(parameters) = &self.job_parameters {
            request.json_body(parameters)?;
        }
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<InitiateJobOutput> {
        Ok(InitiateJobOutput {
            location: header(response, "location"),
            job_id: header(response, "x-amz-job-id"),
            job_output_path: header(response, "x-amz-job-output-path"),
        })
    }
}

/// Describe a job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeJobRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub job_id: Option<String>,
}
setters!(DescribeJobRequest { account_id: String, vault_name: String, job_id: String });

impl OperationInput for DescribeJobRequest {
    type Output = GlacierJobDescription;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DescribeJob",
        HttpMethod::Get,
        "/{accountId}/vaults/{vaultName}/jobs/{jobId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)?;
        validate::non_empty(Self::DESCRIPTOR.name, "jobId", &self.job_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name).label_opt("jobId", &self.job_id);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<GlacierJobDescription> {
        json::parse(response)
    }
}

/// List the jobs of a vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListJobsRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub limit: Option<i32>,
    pub marker: Option<String>,
    /// `InProgress`, `Succeeded` or `Failed`.
    pub statuscode: Option<String>,
    pub completed: Option<bool>,
}
setters!(ListJobsRequest {
    account_id: String,
    vault_name: String,
    limit: i32,
    marker: String,
    statuscode: String,
    completed: bool,
});

impl OperationInput for ListJobsRequest {
    type Output = ListJobsOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "ListJobs",
        HttpMethod::Get,
        "/{accountId}/vaults/{vaultName}/jobs",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)?;
        validate::range(Self::DESCRIPTOR.name, "limit", &self.limit, 1, 50)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name)
            .query_opt("limit", &self.limit)
            .query_opt("marker", &self.marker)
            .query_opt("statuscode", &self.statuscode)
            .query_opt("completed", &self.completed);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ListJobsOutput> {
        json::parse(response)
    }
}

/// Download the output of a completed job, optionally a byte range of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetJobOutputRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub job_id: Option<String>,
    /// e.g. `bytes=0-1048575`.
    pub range: Option<String>,
}
setters!(GetJobOutputRequest { account_id: String, vault_name: String, job_id: String, range: String });

impl OperationInput for GetJobOutputRequest {
    type Output = JobOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetJobOutput",
        HttpMethod::Get,
        "/{accountId}/vaults/{vaultName}/jobs/{jobId}/output",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)?;
        validate::non_empty(Self::DESCRIPTOR.name, "jobId", &self.job_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name)
            .label_opt("jobId", &self.job_id)
            .header_opt("range", &self.range);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<JobOutput> {
        Ok(JobOutput {
            body: response.body.clone(),
            checksum: header(response, "x-amz-sha256-tree-hash"),
            status: response.status,
            content_range: header(response, "content-range"),
            accept_ranges: header(response, "accept-ranges"),
            content_type: header(response, "content-type"),
            archive_description: header(response, "x-amz-archive-description"),
        })
    }
}

// Tags

/// Add or overwrite vault tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsToVaultRequest {
    #[serde(skip)]
    pub account_id: Option<String>,
    #[serde(skip)]
    pub vault_name: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(AddTagsToVaultRequest { account_id: String, vault_name: String, tags: HashMap<String, String> });

impl OperationInput for AddTagsToVaultRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "AddTagsToVault",
        HttpMethod::Post,
        "/{accountId}/vaults/{vaultName}/tags?operation=add",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name).json_body(self)?;
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// Remove vault tags by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveTagsFromVaultRequest {
    #[serde(skip)]
    pub account_id: Option<String>,
    #[serde(skip)]
    pub vault_name: Option<String>,
    pub tag_keys: Option<Vec<String>>,
}
setters!(RemoveTagsFromVaultRequest { account_id: String, vault_name: String, tag_keys: Vec<String> });

impl OperationInput for RemoveTagsFromVaultRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "RemoveTagsFromVault",
        HttpMethod::Post,
        "/{accountId}/vaults/{vaultName}/tags?operation=remove",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name).json_body(self)?;
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// List the tags of a vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTagsForVaultRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
}
setters!(ListTagsForVaultRequest { account_id: String, vault_name: String });

impl OperationInput for ListTagsForVaultRequest {
    type Output = ListTagsForVaultOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "ListTagsForVault",
        HttpMethod::Get,
        "/{accountId}/vaults/{vaultName}/tags",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ListTagsForVaultOutput> {
        json::parse(response)
    }
}

// Notifications

/// Configure SNS notifications for a vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetVaultNotificationsRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub vault_notification_config: Option<VaultNotificationConfig>,
}
setters!(SetVaultNotificationsRequest {
    account_id: String,
    vault_name: String,
    vault_notification_config: VaultNotificationConfig,
});

impl OperationInput for SetVaultNotificationsRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "SetVaultNotifications",
        HttpMethod::Put,
        "/{accountId}/vaults/{vaultName}/notification-configuration",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        if let Some(config) = &self.vault_notification_config {
            request.json_body(config)?;
        }
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// Retrieve the notification configuration of a vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetVaultNotificationsRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
}
setters!(GetVaultNotificationsRequest { account_id: String, vault_name: String });

impl OperationInput for GetVaultNotificationsRequest {
    type Output = VaultNotificationConfig;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetVaultNotifications",
        HttpMethod::Get,
        "/{accountId}/vaults/{vaultName}/notification-configuration",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<VaultNotificationConfig> {
        json::parse(response)
    }
}

/// Remove the notification configuration of a vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteVaultNotificationsRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
}
setters!(DeleteVaultNotificationsRequest { account_id: String, vault_name: String });

impl OperationInput for DeleteVaultNotificationsRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DeleteVaultNotifications",
        HttpMethod::Delete,
        "/{accountId}/vaults/{vaultName}/notification-configuration",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

// Multipart uploads

/// Start a multipart upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitiateMultipartUploadRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub archive_description: Option<String>,
    /// Power of two between 1 MiB and 4 GiB.
    pub part_size: Option<u64>,
}
setters!(InitiateMultipartUploadRequest {
    account_id: String,
    vault_name: String,
    archive_description: String,
    part_size: u64,
});

impl OperationInput for InitiateMultipartUploadRequest {
    type Output = InitiateMultipartUploadOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "InitiateMultipartUpload",
        HttpMethod::Post,
        "/{accountId}/vaults/{vaultName}/multipart-uploads",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name)
            .header_opt("x-amz-archive-description", &self.archive_description)
            .header_opt("x-amz-part-size", &self.part_size);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<InitiateMultipartUploadOutput> {
        Ok(InitiateMultipartUploadOutput {
            location: header(response, "location"),
            upload_id: header(response, "x-amz-multipart-upload-id"),
        })
    }
}

/// Abort a multipart upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbortMultipartUploadRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub upload_id: Option<String>,
}
setters!(AbortMultipartUploadRequest { account_id: String, vault_name: String, upload_id: String });

impl OperationInput for AbortMultipartUploadRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "AbortMultipartUpload",
        HttpMethod::Delete,
        "/{accountId}/vaults/{vaultName}/multipart-uploads/{uploadId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)?;
        validate::non_empty(Self::DESCRIPTOR.name, "uploadId", &self.upload_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name)
            .label_opt("uploadId", &self.upload_id);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// List the in-progress multipart uploads of a vault.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMultipartUploadsRequest {
    pub account_id: Option<String>,
    pub vault_name: Option<String>,
    pub marker: Option<String>,
    pub limit: Option<i32>,
}
setters!(ListMultipartUploadsRequest { account_id: String, vault_name: String, marker: String, limit: i32 });

impl OperationInput for ListMultipartUploadsRequest {
    type Output = ListMultipartUploadsOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "ListMultipartUploads",
        HttpMethod::Get,
        "/{accountId}/vaults/{vaultName}/multipart-uploads",
    );

    fn validate(&self) -> Result<(), RequestError> {
        check_vault(Self::DESCRIPTOR.name, &self.account_id, &self.vault_name)?;
        validate::range(Self::DESCRIPTOR.name, "limit", &self.limit, 1, 50)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        bind_vault(request, &self.account_id, &self.vault_name)
            .query_opt("marker", &self.marker)
            .query_opt("limit", &self.limit);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ListMultipartUploadsOutput> {
        json::parse(response)
    }
}
