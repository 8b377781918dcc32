//! AppStream 2.0 shapes.

use crate::protocol::json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Desired number of streaming instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputeCapacity {
    pub desired_instances: Option<i32>,
}

/// Capacity status of a fleet.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComputeCapacityStatus {
    pub desired: Option<i32>,
    pub running: Option<i32>,
    pub in_use: Option<i32>,
    pub available: Option<i32>,
}

/// VPC placement of a fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcConfig {
    pub subnet_ids: Option<Vec<String>>,
    pub security_group_ids: Option<Vec<String>>,
}

/// Error reported for a fleet or stack.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceError {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

/// A fleet of streaming instances.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fleet {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub image_name: Option<String>,
    pub image_arn: Option<String>,
    pub instance_type: Option<String>,
    /// `ALWAYS_ON`, `ON_DEMAND` or `ELASTIC`.
    pub fleet_type: Option<String>,
    pub compute_capacity_status: Option<ComputeCapacityStatus>,
    pub max_user_duration_in_seconds: Option<i32>,
    pub disconnect_timeout_in_seconds: Option<i32>,
    pub idle_disconnect_timeout_in_seconds: Option<i32>,
    /// `STARTING`, `RUNNING`, `STOPPING` or `STOPPED`.
    pub state: Option<String>,
    pub vpc_config: Option<VpcConfig>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub created_time: Option<DateTime<Utc>>,
    pub fleet_errors: Option<Vec<ResourceError>>,
    pub enable_default_internet_access: Option<bool>,
    pub iam_role_arn: Option<String>,
    pub stream_view: Option<String>,
}

/// Permission for one user action on a stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserSetting {
    /// e.g. `CLIPBOARD_COPY_FROM_LOCAL_DEVICE`.
    pub action: Option<String>,
    /// `ENABLED` or `DISABLED`.
    pub permission: Option<String>,
}

/// Persistence of application settings across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationSettings {
    pub enabled: Option<bool>,
    pub settings_group: Option<String>,
}

/// A stack: the applications and settings users stream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stack {
    pub arn: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(rename = "RedirectURL")]
    pub redirect_url: Option<String>,
    #[serde(rename = "FeedbackURL")]
    pub feedback_url: Option<String>,
    pub stack_errors: Option<Vec<ResourceError>>,
    pub user_settings: Option<Vec<UserSetting>>,
    pub application_settings: Option<ApplicationSettings>,
}

/// A streaming session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Session {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub stack_name: Option<String>,
    pub fleet_name: Option<String>,
    /// `ACTIVE`, `PENDING` or `EXPIRED`.
    pub state: Option<String>,
    pub connection_state: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub max_expiration_time: Option<DateTime<Utc>>,
    pub authentication_type: Option<String>,
}

/// Result of `CreateFleet`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFleetOutput {
    pub fleet: Option<Fleet>,
}

/// Result of `DescribeFleets`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFleetsOutput {
    pub fleets: Option<Vec<Fleet>>,
    pub next_token: Option<String>,
}

/// Result of `CreateStack`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStackOutput {
    pub stack: Option<Stack>,
}

/// Result of `DescribeStacks`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStacksOutput {
    pub stacks: Option<Vec<Stack>>,
    pub next_token: Option<String>,
}

/// Result of `ListAssociatedStacks`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAssociatedStacksOutput {
    pub names: Option<Vec<String>>,
    pub next_token: Option<String>,
}

/// Result of `CreateStreamingURL`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStreamingUrlOutput {
    #[serde(rename = "StreamingURL")]
    pub streaming_url: Option<String>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub expires: Option<DateTime<Utc>>,
}

/// Result of `DescribeSessions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSessionsOutput {
    pub sessions: Option<Vec<Session>>,
    pub next_token: Option<String>,
}

/// Result of `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    pub tags: Option<HashMap<String, String>>,
}
