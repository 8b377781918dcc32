//! AWS Elastic Beanstalk.
//!
//! Query protocol: requests are form-encoded `POST /` bodies, results are XML.
//! `CheckDNSAvailability` and `ListAvailableSolutionStacks` are sent unsigned,
//! and any operation can be turned into a presigned `GET` URL with
//! [`ElasticBeanstalkClient::presign`].

#[allow(missing_docs)]
mod model;
#[allow(missing_docs)]
mod operations;

pub use model::*;
pub use operations::*;

use crate::client::ServiceMetadata;
use crate::error::Outcome;
use crate::operation::OperationInput;
use crate::protocol::Protocol;
use crate::signing::PresignedUrl;

/// Elastic Beanstalk service metadata.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "Elastic Beanstalk",
    signing_name: "elasticbeanstalk",
    endpoint_prefix: "elasticbeanstalk",
    api_version: "2010-12-01",
    protocol: Protocol::AwsQuery,
    target_prefix: None,
    default_headers: &[],
};

service_client!(
    /// Client for AWS Elastic Beanstalk.
    ElasticBeanstalkClient,
    METADATA
);

impl ElasticBeanstalkClient {
    /// Build a presigned `GET` URL for `request`, signed for `region` and
    /// valid for one hour. Nothing is sent.
    pub async fn presign<I: OperationInput>(&self, request: &I, region: &str) -> Outcome<PresignedUrl> {
        self.runtime.presign(request, region).await
    }
}

service_operations!(ElasticBeanstalkClient {
    /// Create an application.
    CreateApplicationRequest => create_application, create_application_callable, create_application_async;
    /// Describe applications.
    DescribeApplicationsRequest => describe_applications, describe_applications_callable, describe_applications_async;
    /// Update an application.
    UpdateApplicationRequest => update_application, update_application_callable, update_application_async;
    /// Delete an application.
    DeleteApplicationRequest => delete_application, delete_application_callable, delete_application_async;
    /// Create an application version.
    CreateApplicationVersionRequest => create_application_version, create_application_version_callable, create_application_version_async;
    /// Describe application versions.
    DescribeApplicationVersionsRequest => describe_application_versions, describe_application_versions_callable, describe_application_versions_async;
    /// Delete an application version.
    DeleteApplicationVersionRequest => delete_application_version, delete_application_version_callable, delete_application_version_async;
    /// Launch an environment.
    CreateEnvironmentRequest => create_environment, create_environment_callable, create_environment_async;
    /// Describe environments.
    DescribeEnvironmentsRequest => describe_environments, describe_environments_callable, describe_environments_async;
    /// Terminate an environment.
    TerminateEnvironmentRequest => terminate_environment, terminate_environment_callable, terminate_environment_async;
    /// Restart the application servers of an environment.
    RestartAppServerRequest => restart_app_server, restart_app_server_callable, restart_app_server_async;
    /// Rebuild an environment.
    RebuildEnvironmentRequest => rebuild_environment, rebuild_environment_callable, rebuild_environment_async;
    /// Swap environment CNAMEs.
    SwapEnvironmentCnamesRequest => swap_environment_cnames, swap_environment_cnames_callable, swap_environment_cnames_async;
    /// Abort an environment update.
    AbortEnvironmentUpdateRequest => abort_environment_update, abort_environment_update_callable, abort_environment_update_async;
    /// Check CNAME availability.
    CheckDnsAvailabilityRequest => check_dns_availability, check_dns_availability_callable, check_dns_availability_async;
    /// List available solution stacks.
    ListAvailableSolutionStacksRequest => list_available_solution_stacks, list_available_solution_stacks_callable, list_available_solution_stacks_async;
    /// Describe events.
    DescribeEventsRequest => describe_events, describe_events_callable, describe_events_async;
    /// List the tags of a resource.
    ListTagsForResourceRequest => list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async;
    /// Update the tags of a resource.
    UpdateTagsForResourceRequest => update_tags_for_resource, update_tags_for_resource_callable, update_tags_for_resource_async;
});
