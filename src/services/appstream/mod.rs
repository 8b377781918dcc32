//! Amazon AppStream 2.0.

#[allow(missing_docs)]
mod model;
#[allow(missing_docs)]
mod operations;

pub use model::*;
pub use operations::*;

use crate::client::ServiceMetadata;
use crate::protocol::Protocol;

/// AppStream service metadata.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "AppStream",
    signing_name: "appstream",
    endpoint_prefix: "appstream2",
    api_version: "2016-12-01",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("PhotonAdminProxyService"),
    default_headers: &[],
};

service_client!(
    /// Client for Amazon AppStream 2.0.
    AppStreamClient,
    METADATA
);

service_operations!(AppStreamClient {
    /// Create a fleet.
    CreateFleetRequest => create_fleet, create_fleet_callable, create_fleet_async;
    /// Describe fleets.
    DescribeFleetsRequest => describe_fleets, describe_fleets_callable, describe_fleets_async;
    /// Delete a fleet.
    DeleteFleetRequest => delete_fleet, delete_fleet_callable, delete_fleet_async;
    /// Start a fleet.
    StartFleetRequest => start_fleet, start_fleet_callable, start_fleet_async;
    /// Stop a fleet.
    StopFleetRequest => stop_fleet, stop_fleet_callable, stop_fleet_async;
    /// Create a stack.
    CreateStackRequest => create_stack, create_stack_callable, create_stack_async;
    /// Describe stacks.
    DescribeStacksRequest => describe_stacks, describe_stacks_callable, describe_stacks_async;
    /// Delete a stack.
    DeleteStackRequest => delete_stack, delete_stack_callable, delete_stack_async;
    /// Associate a fleet with a stack.
    AssociateFleetRequest => associate_fleet, associate_fleet_callable, associate_fleet_async;
    /// Disassociate a fleet from a stack.
    DisassociateFleetRequest => disassociate_fleet, disassociate_fleet_callable, disassociate_fleet_async;
    /// List the stacks associated with a fleet.
    ListAssociatedStacksRequest => list_associated_stacks, list_associated_stacks_callable, list_associated_stacks_async;
    /// Create a streaming URL.
    CreateStreamingUrlRequest => create_streaming_url, create_streaming_url_callable, create_streaming_url_async;
    /// Describe streaming sessions.
    DescribeSessionsRequest => describe_sessions, describe_sessions_callable, describe_sessions_async;
    /// Expire a streaming session.
    ExpireSessionRequest => expire_session, expire_session_callable, expire_session_async;
    /// Tag a resource.
    TagResourceRequest => tag_resource, tag_resource_callable, tag_resource_async;
    /// Untag a resource.
    UntagResourceRequest => untag_resource, untag_resource_callable, untag_resource_async;
    /// List the tags of a resource.
    ListTagsForResourceRequest => list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async;
});
