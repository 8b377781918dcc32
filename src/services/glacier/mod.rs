//! Amazon S3 Glacier.
//!
//! REST-JSON API. Every request carries `x-amz-glacier-version`, and several
//! results are bound to response headers rather than the body.

#[allow(missing_docs)]
mod model;
#[allow(missing_docs)]
mod operations;
pub mod treehash;

pub use model::*;
pub use operations::*;

use crate::client::ServiceMetadata;
use crate::protocol::Protocol;

/// Glacier service metadata.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "Glacier",
    signing_name: "glacier",
    endpoint_prefix: "glacier",
    api_version: "2012-06-01",
    protocol: Protocol::RestJson,
    target_prefix: None,
    default_headers: &[("x-amz-glacier-version", "2012-06-01")],
};

service_client!(
    /// Client for Amazon S3 Glacier.
    GlacierClient,
    METADATA
);

service_operations!(GlacierClient {
    /// Create a vault.
    CreateVaultRequest => create_vault, create_vault_callable, create_vault_async;
    /// Describe a vault.
    DescribeVaultRequest => describe_vault, describe_vault_callable, describe_vault_async;
    /// Delete a vault.
    DeleteVaultRequest => delete_vault, delete_vault_callable, delete_vault_async;
    /// List vaults.
    ListVaultsRequest => list_vaults, list_vaults_callable, list_vaults_async;
    /// Upload an archive.
    UploadArchiveRequest => upload_archive, upload_archive_callable, upload_archive_async;
    /// Delete an archive.
    DeleteArchiveRequest => delete_archive, delete_archive_callable, delete_archive_async;
    /// Start a job.
    InitiateJobRequest => initiate_job, initiate_job_callable, initiate_job_async;
    /// Describe a job.
    DescribeJobRequest => describe_job, describe_job_callable, describe_job_async;
    /// List jobs.
    ListJobsRequest => list_jobs, list_jobs_callable, list_jobs_async;
    /// Download job output.
    GetJobOutputRequest => get_job_output, get_job_output_callable, get_job_output_async;
    /// Tag a vault.
    AddTagsToVaultRequest => add_tags_to_vault, add_tags_to_vault_callable, add_tags_to_vault_async;
    /// Untag a vault.
    RemoveTagsFromVaultRequest => remove_tags_from_vault, remove_tags_from_vault_callable, remove_tags_from_vault_async;
    /// List vault tags.
    ListTagsForVaultRequest => list_tags_for_vault, list_tags_for_vault_callable, list_tags_for_vault_async;
    /// Configure vault notifications.
    SetVaultNotificationsRequest => set_vault_notifications, set_vault_notifications_callable, set_vault_notifications_async;
    /// Retrieve vault notifications.
    GetVaultNotificationsRequest => get_vault_notifications, get_vault_notifications_callable, get_vault_notifications_async;
    /// Remove vault notifications.
    DeleteVaultNotificationsRequest => delete_vault_notifications, delete_vault_notifications_callable, delete_vault_notifications_async;
    /// Start a multipart upload.
    InitiateMultipartUploadRequest => initiate_multipart_upload, initiate_multipart_upload_callable, initiate_multipart_upload_async;
    /// Abort a multipart upload.
    AbortMultipartUploadRequest => abort_multipart_upload, abort_multipart_upload_callable, abort_multipart_upload_async;
    /// List multipart uploads.
    ListMultipartUploadsRequest => list_multipart_uploads, list_multipart_uploads_callable, list_multipart_uploads_async;
});
