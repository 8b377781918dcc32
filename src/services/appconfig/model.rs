//! AppConfig shapes.

use crate::protocol::json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Application {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A page of applications.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Applications {
    pub items: Option<Vec<Application>>,
    pub next_token: Option<String>,
}

/// CloudWatch alarm watched during deployments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Monitor {
    pub alarm_arn: Option<String>,
    pub alarm_role_arn: Option<String>,
}

/// A deployment target such as a fleet or a stage.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Environment {
    pub application_id: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// `READY_FOR_DEPLOYMENT`, `DEPLOYING`, `ROLLING_BACK` or `ROLLED_BACK`.
    pub state: Option<String>,
    pub monitors: Option<Vec<Monitor>>,
}

/// A page of environments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Environments {
    pub items: Option<Vec<Environment>>,
    pub next_token: Option<String>,
}

/// Configuration validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Validator {
    /// `JSON_SCHEMA` or `LAMBDA`.
    #[serde(rename = "Type")]
    pub validator_type: Option<String>,
    pub content: Option<String>,
}

/// A configuration profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationProfile {
    pub application_id: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location_uri: Option<String>,
    pub retrieval_role_arn: Option<String>,
    pub validators: Option<Vec<Validator>>,
    #[serde(rename = "Type")]
    pub profile_type: Option<String>,
}

/// Summary of a configuration profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationProfileSummary {
    pub application_id: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub location_uri: Option<String>,
    pub validator_types: Option<Vec<String>>,
    #[serde(rename = "Type")]
    pub profile_type: Option<String>,
}

/// A page of configuration profiles.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationProfiles {
    pub items: Option<Vec<ConfigurationProfileSummary>>,
    pub next_token: Option<String>,
}

/// A deployment strategy.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentStrategy {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub deployment_duration_in_minutes: Option<i32>,
    /// `LINEAR` or `EXPONENTIAL`.
    pub growth_type: Option<String>,
    pub growth_factor: Option<f32>,
    pub final_bake_time_in_minutes: Option<i32>,
    pub replicate_to: Option<String>,
}

/// A page of deployment strategies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentStrategies {
    pub items: Option<Vec<DeploymentStrategy>>,
    pub next_token: Option<String>,
}

/// A deployment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deployment {
    pub application_id: Option<String>,
    pub environment_id: Option<String>,
    pub deployment_strategy_id: Option<String>,
    pub configuration_profile_id: Option<String>,
    pub deployment_number: Option<i32>,
    pub configuration_name: Option<String>,
    pub configuration_location_uri: Option<String>,
    pub configuration_version: Option<String>,
    pub description: Option<String>,
    pub deployment_duration_in_minutes: Option<i32>,
    pub growth_type: Option<String>,
    pub growth_factor: Option<f32>,
    pub final_bake_time_in_minutes: Option<i32>,
    /// `BAKING`, `VALIDATING`, `DEPLOYING`, `COMPLETE`, `ROLLING_BACK` or `ROLLED_BACK`.
    pub state: Option<String>,
    pub percentage_complete: Option<f32>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "json::timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Tags attached to a resource.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceTags {
    pub tags: Option<HashMap<String, String>>,
}
