//! CodeStar shapes.

use crate::protocol::json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary entry of `ListProjects`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: Option<String>,
    pub project_arn: Option<String>,
}

/// Stack status of a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatus {
    pub state: Option<String>,
    pub reason: Option<String>,
}

/// A project member.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_arn: Option<String>,
    /// `Owner`, `Contributor` or `Viewer`.
    pub project_role: Option<String>,
    pub remote_access_allowed: Option<bool>,
}

/// A resource belonging to a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resource {
    pub id: Option<String>,
}

/// Summary entry of `ListUserProfiles`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileSummary {
    pub user_arn: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub ssh_public_key: Option<String>,
}

/// Result of `CreateProject`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectOutput {
    pub id: Option<String>,
    pub arn: Option<String>,
    pub client_request_token: Option<String>,
    pub project_template_id: Option<String>,
}

/// Result of `DescribeProject`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeProjectOutput {
    pub name: Option<String>,
    pub id: Option<String>,
    pub arn: Option<String>,
    pub description: Option<String>,
    pub client_request_token: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub created_time_stamp: Option<DateTime<Utc>>,
    pub stack_id: Option<String>,
    pub project_template_id: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// Result of `DeleteProject`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectOutput {
    pub stack_id: Option<String>,
    pub project_arn: Option<String>,
}

/// Result of `ListProjects`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsOutput {
    pub projects: Option<Vec<ProjectSummary>>,
    pub next_token: Option<String>,
}

/// Result of `AssociateTeamMember`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateTeamMemberOutput {
    pub client_request_token: Option<String>,
}

/// Result of `ListTeamMembers`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamMembersOutput {
    pub team_members: Option<Vec<TeamMember>>,
    pub next_token: Option<String>,
}

/// Result of `UpdateTeamMember`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberOutput {
    pub user_arn: Option<String>,
    pub project_role: Option<String>,
    pub remote_access_allowed: Option<bool>,
}

/// A user profile, returned by the create, describe and update calls.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_arn: Option<String>,
    pub display_name: Option<String>,
    pub email_address: Option<String>,
    pub ssh_public_key: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub created_timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub last_modified_timestamp: Option<DateTime<Utc>>,
}

/// Result of `DeleteUserProfile`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserProfileOutput {
    pub user_arn: Option<String>,
}

/// Result of `ListUserProfiles`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUserProfilesOutput {
    pub user_profiles: Option<Vec<UserProfileSummary>>,
    pub next_token: Option<String>,
}

/// Result of `ListResources`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesOutput {
    pub resources: Option<Vec<Resource>>,
    pub next_token: Option<String>,
}

/// Tags of a project, returned by `TagProject` and `ListTagsForProject`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTags {
    pub tags: Option<HashMap<String, String>>,
    pub next_token: Option<String>,
}

/// Toolchain template source used when creating a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolchain {
    pub source: Option<ToolchainSource>,
    pub role_arn: Option<String>,
    pub stack_parameters: Option<HashMap<String, String>>,
}

/// S3 location of a toolchain template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolchainSource {
    pub s3: Option<S3Location>,
}

/// An S3 object location.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Location {
    pub bucket_name: Option<String>,
    pub bucket_key: Option<String>,
}
