//! AWS CodeStar.

#[allow(missing_docs)]
mod model;
#[allow(missing_docs)]
mod operations;

pub use model::*;
pub use operations::*;

use crate::client::ServiceMetadata;
use crate::protocol::Protocol;

/// CodeStar service metadata.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "CodeStar",
    signing_name: "codestar",
    endpoint_prefix: "codestar",
    api_version: "2017-04-19",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("CodeStar_20170419"),
    default_headers: &[],
};

service_client!(
    /// Client for AWS CodeStar.
    CodeStarClient,
    METADATA
);

service_operations!(CodeStarClient {
    /// Create a project.
    CreateProjectRequest => create_project, create_project_callable, create_project_async;
    /// Describe a project.
    DescribeProjectRequest => describe_project, describe_project_callable, describe_project_async;
    /// Delete a project.
    DeleteProjectRequest => delete_project, delete_project_callable, delete_project_async;
    /// List projects.
    ListProjectsRequest => list_projects, list_projects_callable, list_projects_async;
    /// Update a project.
    UpdateProjectRequest => update_project, update_project_callable, update_project_async;
    /// Add a team member.
    AssociateTeamMemberRequest => associate_team_member, associate_team_member_callable, associate_team_member_async;
    /// Remove a team member.
    DisassociateTeamMemberRequest => disassociate_team_member, disassociate_team_member_callable, disassociate_team_member_async;
    /// List team members.
    ListTeamMembersRequest => list_team_members, list_team_members_callable, list_team_members_async;
    /// Update a team member.
    UpdateTeamMemberRequest => update_team_member, update_team_member_callable, update_team_member_async;
    /// Create a user profile.
    CreateUserProfileRequest => create_user_profile, create_user_profile_callable, create_user_profile_async;
    /// Describe a user profile.
    DescribeUserProfileRequest => describe_user_profile, describe_user_profile_callable, describe_user_profile_async;
    /// Delete a user profile.
    DeleteUserProfileRequest => delete_user_profile, delete_user_profile_callable, delete_user_profile_async;
    /// List user profiles.
    ListUserProfilesRequest => list_user_profiles, list_user_profiles_callable, list_user_profiles_async;
    /// List the resources of a project.
    ListResourcesRequest => list_resources, list_resources_callable, list_resources_async;
    /// Tag a project.
    TagProjectRequest => tag_project, tag_project_callable, tag_project_async;
    /// Untag a project.
    UntagProjectRequest => untag_project, untag_project_callable, untag_project_async;
    /// List the tags of a project.
    ListTagsForProjectRequest => list_tags_for_project, list_tags_for_project_callable, list_tags_for_project_async;
});
