//! CodeStar requests.

use super::model::*;
use serde::Serialize;
use std::collections::HashMap;

/// Create a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub id: Option<String>,
    pub description: Option<String>,
    pub client_request_token: Option<String>,
    pub toolchain: Option<Toolchain>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(CreateProjectRequest {
    name: String,
    id: String,
    description: String,
    client_request_token: String,
    toolchain: Toolchain,
    tags: HashMap<String, String>,
});
json_operation!(CreateProjectRequest => CreateProjectOutput, "CreateProject",
    required: [name = "name", id = "id"]);

/// Describe a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeProjectRequest {
    pub id: Option<String>,
}
setters!(DescribeProjectRequest { id: String });
json_operation!(DescribeProjectRequest => DescribeProjectOutput, "DescribeProject", required: [id = "id"]);

/// Delete a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectRequest {
    pub id: Option<String>,
    pub client_request_token: Option<String>,
    pub delete_stack: Option<bool>,
}
setters!(DeleteProjectRequest { id: String, client_request_token: String, delete_stack: bool });
json_operation!(DeleteProjectRequest => DeleteProjectOutput, "DeleteProject", required: [id = "id"]);

/// List projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsRequest {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
}
setters!(ListProjectsRequest { next_token: String, max_results: i32 });
json_operation!(ListProjectsRequest => ListProjectsOutput, "ListProjects");

/// Update the name or description of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}
setters!(UpdateProjectRequest { id: String, name: String, description: String });
json_operation!(UpdateProjectRequest => (), "UpdateProject", required: [id = "id"]);

/// Add a user to a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateTeamMemberRequest {
    pub project_id: Option<String>,
    pub client_request_token: Option<String>,
    pub user_arn: Option<String>,
    pub project_role: Option<String>,
    pub remote_access_allowed: Option<bool>,
}
setters!(AssociateTeamMemberRequest {
    project_id: String,
    client_request_token: String,
    user_arn: String,
    project_role: String,
    remote_access_allowed: bool,
});
json_operation!(AssociateTeamMemberRequest => AssociateTeamMemberOutput, "AssociateTeamMember",
    required: [project_id = "projectId", user_arn = "userArn", project_role = "projectRole"]);

/// Remove a user from a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateTeamMemberRequest {
    pub project_id: Option<String>,
    pub user_arn: Option<String>,
}
setters!(DisassociateTeamMemberRequest { project_id: String, user_arn: String });
json_operation!(DisassociateTeamMemberRequest => (), "DisassociateTeamMember",
    required: [project_id = "projectId", user_arn = "userArn"]);

/// List the members of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamMembersRequest {
    pub project_id: Option<String>,
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
}
setters!(ListTeamMembersRequest { project_id: String, next_token: String, max_results: i32 });
json_operation!(ListTeamMembersRequest => ListTeamMembersOutput, "ListTeamMembers",
    required: [project_id = "projectId"]);

/// Change the role or remote access of a member.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    pub project_id: Option<String>,
    pub user_arn: Option<String>,
    pub project_role: Option<String>,
    pub remote_access_allowed: Option<bool>,
}
setters!(UpdateTeamMemberRequest {
    project_id: String,
    user_arn: String,
    project_role: String,
    remote_access_allowed: bool,
});
json_operation!(UpdateTeamMemberRequest => UpdateTeamMemberOutput, "UpdateTeamMember",
    required: [project_id = "projectId", user_arn = "userArn"]);

/// Create a user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserProfileRequest {
    pub user_arn: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub ssh_public_key: Option<String>,
}
setters!(CreateUserProfileRequest {
    user_arn: String,
    display_name: String,
    email_address: String,
    ssh_public_key: String,
});
json_operation!(CreateUserProfileRequest => UserProfile, "CreateUserProfile",
    required: [user_arn = "userArn", display_name = "displayName", email_address = "emailAddress"]);

/// Describe a user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeUserProfileRequest {
    pub user_arn: Option<String>,
}
setters!(DescribeUserProfileRequest { user_arn: String });
json_operation!(DescribeUserProfileRequest => UserProfile, "DescribeUserProfile",
    required: [user_arn = "userArn"]);

/// Delete a user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserProfileRequest {
    pub user_arn: Option<String>,
}
setters!(DeleteUserProfileRequest { user_arn: String });
json_operation!(DeleteUserProfileRequest => DeleteUserProfileOutput, "DeleteUserProfile",
    required: [user_arn = "userArn"]);

/// List user profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUserProfilesRequest {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
}
setters!(ListUserProfilesRequest { next_token: String, max_results: i32 });
json_operation!(ListUserProfilesRequest => ListUserProfilesOutput, "ListUserProfiles");

/// List the resources of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesRequest {
    pub project_id: Option<String>,
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
}
setters!(ListResourcesRequest { project_id: String, next_token: String, max_results: i32 });
json_operation!(ListResourcesRequest => ListResourcesOutput, "ListResources",
    required: [project_id = "projectId"]);

/// Tag a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagProjectRequest {
    pub id: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(TagProjectRequest { id: String, tags: HashMap<String, String> });
json_operation!(TagProjectRequest => ProjectTags, "TagProject", required: [id = "id", tags = "tags"]);

/// Remove tags from a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagProjectRequest {
    pub id: Option<String>,
    pub tags: Option<Vec<String>>,
}
setters!(UntagProjectRequest { id: String, tags: Vec<String> });
json_operation!(UntagProjectRequest => (), "UntagProject", required: [id = "id", tags = "tags"]);

/// List the tags of a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForProjectRequest {
    pub id: Option<String>,
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
}
setters!(ListTagsForProjectRequest { id: String, next_token: String, max_results: i32 });
json_operation!(ListTagsForProjectRequest => ProjectTags, "ListTagsForProject", required: [id = "id"]);
