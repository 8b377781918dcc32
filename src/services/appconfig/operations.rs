//! AppConfig requests.

use super::model::*;
use crate::error::{AwsError, Outcome, RequestError};
use crate::operation::{validate, HttpMethod, OperationDescriptor, OperationInput, RequestBuilder};
use crate::protocol::json;
use crate::transport::HttpResponse;
use serde::Serialize;
use std::collections::HashMap;

// Applications

/// Create an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateApplicationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(CreateApplicationRequest { name: String, description: String, tags: HashMap<String, String> });

impl OperationInput for CreateApplicationRequest {
    type Output = Application;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("CreateApplication", HttpMethod::Post, "/applications");

    fn validate(&self) -> Result<(), RequestError> {
        validate::required(Self::DESCRIPTOR.name, "Name", &self.name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Application> {
        json::parse(response)
    }
}

/// Retrieve an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetApplicationRequest {
    pub application_id: Option<String>,
}
setters!(GetApplicationRequest { application_id: String });

impl OperationInput for GetApplicationRequest {
    type Output = Application;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetApplication",
        HttpMethod::Get,
        "/applications/{ApplicationId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "ApplicationId", &self.application_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("ApplicationId", &self.application_id);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Application> {
        json::parse(response)
    }
}

/// List applications.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListApplicationsRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}
setters!(ListApplicationsRequest { max_results: i32, next_token: String });

impl OperationInput for ListApplicationsRequest {
    type Output = Applications;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("ListApplications", HttpMethod::Get, "/applications");

    fn validate(&self) -> Result<(), RequestError> {
        validate::range(Self::DESCRIPTOR.name, "MaxResults", &self.max_results, 1, 50)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .query_opt("max_results", &self.max_results)
            .query_opt("next_token", &self.next_token);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Applications> {
        json::parse(response)
    }
}

/// Update an application's name or description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateApplicationRequest {
    #[serde(skip)]
    pub application_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}
setters!(UpdateApplicationRequest { application_id: String, name: String, description: String });

impl OperationInput for UpdateApplicationRequest {
    type Output = Application;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "UpdateApplication",
        HttpMethod::Patch,
        "/applications/{ApplicationId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "ApplicationId", &self.application_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Application> {
        json::parse(response)
    }
}

/// Delete an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteApplicationRequest {
    pub application_id: Option<String>,
}
setters!(DeleteApplicationRequest { application_id: String });

impl OperationInput for DeleteApplicationRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DeleteApplication",
        HttpMethod::Delete,
        "/applications/{ApplicationId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "ApplicationId", &self.application_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("ApplicationId", &self.application_id);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

// Environments

/// Create an environment within an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateEnvironmentRequest {
    #[serde(skip)]
    pub application_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub monitors: Option<Vec<Monitor>>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(CreateEnvironmentRequest {
    application_id: String,
    name: String,
    description: String,
    monitors: Vec<Monitor>,
    tags: HashMap<String, String>,
});

impl OperationInput for CreateEnvironmentRequest {
    type Output = Environment;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "CreateEnvironment",
        HttpMethod::Post,
        "/applications/{ApplicationId}/environments",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::required(op, "Name", &self.name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Environment> {
        json::parse(response)
    }
}

/// Retrieve an environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetEnvironmentRequest {
    pub application_id: Option<String>,
    pub environment_id: Option<String>,
}
setters!(GetEnvironmentRequest { application_id: String, environment_id: String });

impl OperationInput for GetEnvironmentRequest {
    type Output = Environment;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetEnvironment",
        HttpMethod::Get,
        "/applications/{ApplicationId}/environments/{EnvironmentId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::non_empty(op, "EnvironmentId", &self.environment_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .label_opt("EnvironmentId", &self.environment_id);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Environment> {
        json::parse(response)
    }
}

/// List the environments of an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEnvironmentsRequest {
    pub application_id: Option<String>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}
setters!(ListEnvironmentsRequest { application_id: String, max_results: i32, next_token: String });

impl OperationInput for ListEnvironmentsRequest {
    type Output = Environments;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "ListEnvironments",
        HttpMethod::Get,
        "/applications/{ApplicationId}/environments",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::range(op, "MaxResults", &self.max_results, 1, 50)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .query_opt("max_results", &self.max_results)
            .query_opt("next_token", &self.next_token);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Environments> {
        json::parse(response)
    }
}

/// Delete an environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteEnvironmentRequest {
    pub application_id: Option<String>,
    pub environment_id: Option<String>,
}
setters!(DeleteEnvironmentRequest { application_id: String, environment_id: String });

impl OperationInput for DeleteEnvironmentRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DeleteEnvironment",
        HttpMethod::Delete,
        "/applications/{ApplicationId}/environments/{EnvironmentId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::non_empty(op, "EnvironmentId", &self.environment_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .label_opt("EnvironmentId", &self.environment_id);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

// Configuration profiles

/// Create a configuration profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConfigurationProfileRequest {
    #[serde(skip)]
    pub application_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location_uri: Option<String>,
    pub retrieval_role_arn: Option<String>,
    pub validators: Option<Vec<Validator>>,
    pub tags: Option<HashMap<String, String>>,
    #[serde(rename = "Type")]
    pub profile_type: Option<String>,
}
setters!(CreateConfigurationProfileRequest {
    application_id: String,
    name: String,
    description: String,
    location_uri: String,
    retrieval_role_arn: String,
    validators: Vec<Validator>,
    tags: HashMap<String, String>,
    profile_type: String,
});

impl OperationInput for CreateConfigurationProfileRequest {
    type Output = ConfigurationProfile;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "CreateConfigurationProfile",
        HttpMethod::Post,
        "/applications/{ApplicationId}/configurationprofiles",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::required(op, "Name", &self.name)?;
        validate::required(op, "LocationUri", &self.location_uri)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ConfigurationProfile> {
        json::parse(response)
    }
}

/// Retrieve a configuration profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetConfigurationProfileRequest {
    pub application_id: Option<String>,
    pub configuration_profile_id: Option<String>,
}
setters!(GetConfigurationProfileRequest { application_id: String, configuration_profile_id: String });

impl OperationInput for GetConfigurationProfileRequest {
    type Output = ConfigurationProfile;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetConfigurationProfile",
        HttpMethod::Get,
        "/applications/{ApplicationId}/configurationprofiles/{ConfigurationProfileId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::non_empty(op, "ConfigurationProfileId", &self.configuration_profile_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .label_opt("ConfigurationProfileId", &self.configuration_profile_id);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ConfigurationProfile> {
        json::parse(response)
    }
}

/// List the configuration profiles of an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListConfigurationProfilesRequest {
    pub application_id: Option<String>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    /// Filter by profile type, e.g. `AWS.Freeform`.
    pub profile_type: Option<String>,
}
setters!(ListConfigurationProfilesRequest {
    application_id: String,
    max_results: i32,
    next_token: String,
    profile_type: String,
});

impl OperationInput for ListConfigurationProfilesRequest {
    type Output = ConfigurationProfiles;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "ListConfigurationProfiles",
        HttpMethod::Get,
        "/applications/{ApplicationId}/configurationprofiles",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::range(op, "MaxResults", &self.max_results, 1, 50)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .query_opt("max_results", &self.max_results)
            .query_opt("next_token", &self.next_token)
            .query_opt("type", &self.profile_type);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ConfigurationProfiles> {
        json::parse(response)
    }
}

/// Delete a configuration profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteConfigurationProfileRequest {
    pub application_id: Option<String>,
    pub configuration_profile_id: Option<String>,
}
setters!(DeleteConfigurationProfileRequest { application_id: String, configuration_profile_id: String });

impl OperationInput for DeleteConfigurationProfileRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DeleteConfigurationProfile",
        HttpMethod::Delete,
        "/applications/{ApplicationId}/configurationprofiles/{ConfigurationProfileId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::non_empty(op, "ConfigurationProfileId", &self.configuration_profile_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .label_opt("ConfigurationProfileId", &self.configuration_profile_id);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

// Deployment strategies

/// Create a deployment strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDeploymentStrategyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deployment_duration_in_minutes: Option<i32>,
    pub final_bake_time_in_minutes: Option<i32>,
    pub growth_factor: Option<f32>,
    pub growth_type: Option<String>,
    pub replicate_to: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(CreateDeploymentStrategyRequest {
    name: String,
    description: String,
    deployment_duration_in_minutes: i32,
    final_bake_time_in_minutes: i32,
    growth_factor: f32,
    growth_type: String,
    replicate_to: String,
    tags: HashMap<String, String>,
});

impl OperationInput for CreateDeploymentStrategyRequest {
    type Output = DeploymentStrategy;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "CreateDeploymentStrategy",
        HttpMethod::Post,
        "/deploymentstrategies",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::required(op, "Name", &self.name)?;
        validate::required(op, "DeploymentDurationInMinutes", &self.deployment_duration_in_minutes)?;
        validate::range(op, "DeploymentDurationInMinutes", &self.deployment_duration_in_minutes, 0, 1440)?;
        validate::required(op, "GrowthFactor", &self.growth_factor)?;
        validate::range(op, "GrowthFactor", &self.growth_factor, 1.0, 100.0)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DeploymentStrategy> {
        json::parse(response)
    }
}

/// Retrieve a deployment strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDeploymentStrategyRequest {
    pub deployment_strategy_id: Option<String>,
}
setters!(GetDeploymentStrategyRequest { deployment_strategy_id: String });

impl OperationInput for GetDeploymentStrategyRequest {
    type Output = DeploymentStrategy;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetDeploymentStrategy",
        HttpMethod::Get,
        "/deploymentstrategies/{DeploymentStrategyId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DeploymentStrategyId", &self.deployment_strategy_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("DeploymentStrategyId", &self.deployment_strategy_id);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DeploymentStrategy> {
        json::parse(response)
    }
}

/// List deployment strategies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDeploymentStrategiesRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}
setters!(ListDeploymentStrategiesRequest { max_results: i32, next_token: String });

impl OperationInput for ListDeploymentStrategiesRequest {
    type Output = DeploymentStrategies;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "ListDeploymentStrategies",
        HttpMethod::Get,
        "/deploymentstrategies",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::range(Self::DESCRIPTOR.name, "MaxResults", &self.max_results, 1, 50)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .query_opt("max_results", &self.max_results)
            .query_opt("next_token", &self.next_token);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DeploymentStrategies> {
        json::parse(response)
    }
}

/// Delete a deployment strategy.
///
/// The service routes this operation under `/deployementstrategies`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDeploymentStrategyRequest {
    pub deployment_strategy_id: Option<String>,
}
setters!(DeleteDeploymentStrategyRequest { deployment_strategy_id: String });

impl OperationInput for DeleteDeploymentStrategyRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DeleteDeploymentStrategy",
        HttpMethod::Delete,
        "/deployementstrategies/{DeploymentStrategyId}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DeploymentStrategyId", &self.deployment_strategy_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("DeploymentStrategyId", &self.deployment_strategy_id);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

// Deployments

/// Start deploying a configuration version to an environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartDeploymentRequest {
    #[serde(skip)]
    pub application_id: Option<String>,
    #[serde(skip)]
    pub environment_id: Option<String>,
    pub deployment_strategy_id: Option<String>,
    pub configuration_profile_id: Option<String>,
    pub configuration_version: Option<String>,
    pub description: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(StartDeploymentRequest {
    application_id: String,
    environment_id: String,
    deployment_strategy_id: String,
    configuration_profile_id: String,
    configuration_version: String,
    description: String,
    tags: HashMap<String, String>,
});

impl OperationInput for StartDeploymentRequest {
    type Output = Deployment;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "StartDeployment",
        HttpMethod::Post,
        "/applications/{ApplicationId}/environments/{EnvironmentId}/deployments",
    );

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ApplicationId", &self.application_id)?;
        validate::non_empty(op, "EnvironmentId", &self.environment_id)?;
        validate::required(op, "DeploymentStrategyId", &self.deployment_strategy_id)?;
        validate::required(op, "ConfigurationProfileId", &self.configuration_profile_id)?;
        validate::required(op, "ConfigurationVersion", &self.configuration_version)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .label_opt("EnvironmentId", &self.environment_id)
            .json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Deployment> {
        json::parse(response)
    }
}

/// Retrieve a deployment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetDeploymentRequest {
    pub application_id: Option<String>,
    pub environment_id: Option<String>,
    pub deployment_number: Option<i32>,
}
setters!(GetDeploymentRequest { application_id: String, environment_id: String, deployment_number: i32 });

impl OperationInput for GetDeploymentRequest {
    type Output = Deployment;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetDeployment",
        HttpMethod::Get,
        "/applications/{ApplicationId}/environments/{EnvironmentId}/deployments/{DeploymentNumber}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        deployment_labels(Self::DESCRIPTOR.name, &self.application_id, &self.environment_id, &self.deployment_number)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .label_opt("EnvironmentId", &self.environment_id)
            .label_opt("DeploymentNumber", &self.deployment_number);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Deployment> {
        json::parse(response)
    }
}

/// Stop a deployment in progress and roll back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopDeploymentRequest {
    pub application_id: Option<String>,
    pub environment_id: Option<String>,
    pub deployment_number: Option<i32>,
}
setters!(StopDeploymentRequest { application_id: String, environment_id: String, deployment_number: i32 });

impl OperationInput for StopDeploymentRequest {
    type Output = Deployment;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "StopDeployment",
        HttpMethod::Delete,
        "/applications/{ApplicationId}/environments/{EnvironmentId}/deployments/{DeploymentNumber}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        deployment_labels(Self::DESCRIPTOR.name, &self.application_id, &self.environment_id, &self.deployment_number)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ApplicationId", &self.application_id)
            .label_opt("EnvironmentId", &self.environment_id)
            .label_opt("DeploymentNumber", &self.deployment_number);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Deployment> {
        json::parse(response)
    }
}

fn deployment_labels(
    op: &'static str,
    application_id: &Option<String>,
    environment_id: &Option<String>,
    deployment_number: &Option<i32>,
) -> Result<(), RequestError> {
    validate::non_empty(op, "ApplicationId", application_id)?;
    validate::non_empty(op, "EnvironmentId", environment_id)?;
    validate::required(op, "DeploymentNumber", deployment_number)
}

// Tagging

/// Attach tags to a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    #[serde(skip)]
    pub resource_arn: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(TagResourceRequest { resource_arn: String, tags: HashMap<String, String> });

impl OperationInput for TagResourceRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("TagResource", HttpMethod::Post, "/tags/{ResourceArn}");

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ResourceArn", &self.resource_arn)?;
        validate::required(op, "Tags", &self.tags)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ResourceArn", &self.resource_arn)
            .json_body(self)?;
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// Remove tags from a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UntagResourceRequest {
    pub resource_arn: Option<String>,
    pub tag_keys: Option<Vec<String>>,
}
setters!(UntagResourceRequest { resource_arn: String, tag_keys: Vec<String> });

impl OperationInput for UntagResourceRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("UntagResource", HttpMethod::Delete, "/tags/{ResourceArn}");

    fn validate(&self) -> Result<(), RequestError> {
        let op = Self::DESCRIPTOR.name;
        validate::non_empty(op, "ResourceArn", &self.resource_arn)?;
        validate::required(op, "TagKeys", &self.tag_keys)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("ResourceArn", &self.resource_arn)
            .query_list("tagKeys", &self.tag_keys);
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// List the tags of a resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTagsForResourceRequest {
    pub resource_arn: Option<String>,
}
setters!(ListTagsForResourceRequest { resource_arn: String });

impl OperationInput for ListTagsForResourceRequest {
    type Output = ResourceTags;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("ListTagsForResource", HttpMethod::Get, "/tags/{ResourceArn}");

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "ResourceArn", &self.resource_arn)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("ResourceArn", &self.resource_arn);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ResourceTags> {
        json::parse(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::testing::{bind, missing, request_line};
    use test_case::test_case;

    const ENV: &str = "/applications/a1/environments/e1";

    fn tags() -> HashMap<String, String> {
        HashMap::from([("team".to_string(), "core".to_string())])
    }

    #[test_case(request_line(&CreateApplicationRequest::default().name("app")), "POST /applications".to_string() ; "create application")]
    #[test_case(request_line(&GetApplicationRequest::default().application_id("a1")), "GET /applications/a1".to_string() ; "get application")]
    #[test_case(request_line(&ListApplicationsRequest::default().max_results(5).next_token("t")), "GET /applications?max_results=5&next_token=t".to_string() ; "list applications")]
    #[test_case(request_line(&UpdateApplicationRequest::default().application_id("a1")), "PATCH /applications/a1".to_string() ; "update application")]
    #[test_case(request_line(&DeleteApplicationRequest::default().application_id("a1")), "DELETE /applications/a1".to_string() ; "delete application")]
    #[test_case(request_line(&CreateEnvironmentRequest::default().application_id("a1").name("prod")), "POST /applications/a1/environments".to_string() ; "create environment")]
    #[test_case(request_line(&GetEnvironmentRequest::default().application_id("a1").environment_id("e1")), format!("GET {}", ENV) ; "get environment")]
    #[test_case(request_line(&ListEnvironmentsRequest::default().application_id("a1").max_results(10)), "GET /applications/a1/environments?max_results=10".to_string() ; "list environments")]
    #[test_case(request_line(&DeleteEnvironmentRequest::default().application_id("a1").environment_id("e1")), format!("DELETE {}", ENV) ; "delete environment")]
    #[test_case(request_line(&CreateConfigurationProfileRequest::default().application_id("a1").name("cfg").location_uri("hosted")), "POST /applications/a1/configurationprofiles".to_string() ; "create configuration profile")]
    #[test_case(request_line(&GetConfigurationProfileRequest::default().application_id("a1").configuration_profile_id("p1")), "GET /applications/a1/configurationprofiles/p1".to_string() ; "get configuration profile")]
    #[test_case(request_line(&ListConfigurationProfilesRequest::default().application_id("a1").profile_type("AWS.Freeform")), "GET /applications/a1/configurationprofiles?type=AWS.Freeform".to_string() ; "list configuration profiles")]
    #[test_case(request_line(&DeleteConfigurationProfileRequest::default().application_id("a1").configuration_profile_id("p1")), "DELETE /applications/a1/configurationprofiles/p1".to_string() ; "delete configuration profile")]
    #[test_case(request_line(&CreateDeploymentStrategyRequest::default().name("s").deployment_duration_in_minutes(10).growth_factor(25.0f32)), "POST /deploymentstrategies".to_string() ; "create deployment strategy")]
    #[test_case(request_line(&GetDeploymentStrategyRequest::default().deployment_strategy_id("d1")), "GET /deploymentstrategies/d1".to_string() ; "get deployment strategy")]
    #[test_case(request_line(&ListDeploymentStrategiesRequest::default().max_results(20)), "GET /deploymentstrategies?max_results=20".to_string() ; "list deployment strategies")]
    #[test_case(request_line(&DeleteDeploymentStrategyRequest::default().deployment_strategy_id("d1")), "DELETE /deployementstrategies/d1".to_string() ; "delete deployment strategy")]
    #[test_case(request_line(&StartDeploymentRequest::default().application_id("a1").environment_id("e1").deployment_strategy_id("d1").configuration_profile_id("p1").configuration_version("1")), format!("POST {}/deployments", ENV) ; "start deployment")]
    #[test_case(request_line(&GetDeploymentRequest::default().application_id("a1").environment_id("e1").deployment_number(3)), format!("GET {}/deployments/3", ENV) ; "get deployment")]
    #[test_case(request_line(&StopDeploymentRequest::default().application_id("a1").environment_id("e1").deployment_number(3)), format!("DELETE {}/deployments/3", ENV) ; "stop deployment")]
    #[test_case(request_line(&TagResourceRequest::default().resource_arn("arn:app").tags(tags())), "POST /tags/arn%3Aapp".to_string() ; "tag resource")]
    #[test_case(request_line(&UntagResourceRequest::default().resource_arn("arn:app").tag_keys(vec!["a".to_string(), "b".to_string()])), "DELETE /tags/arn%3Aapp?tagKeys=a&tagKeys=b".to_string() ; "untag resource")]
    #[test_case(request_line(&ListTagsForResourceRequest::default().resource_arn("arn:app")), "GET /tags/arn%3Aapp".to_string() ; "list tags for resource")]
    fn test_request_lines(actual: String, expected: String) {
        assert_eq!(actual, expected);
    }

    #[test_case(missing(&CreateApplicationRequest::default()), "Name" ; "create application")]
    #[test_case(missing(&GetApplicationRequest::default()), "ApplicationId" ; "get application")]
    #[test_case(missing(&UpdateApplicationRequest::default()), "ApplicationId" ; "update application")]
    #[test_case(missing(&DeleteApplicationRequest::default()), "ApplicationId" ; "delete application")]
    #[test_case(missing(&CreateEnvironmentRequest::default().name("prod")), "ApplicationId" ; "create environment without application")]
    #[test_case(missing(&CreateEnvironmentRequest::default().application_id("a1")), "Name" ; "create environment without name")]
    #[test_case(missing(&GetEnvironmentRequest::default().application_id("a1")), "EnvironmentId" ; "get environment")]
    #[test_case(missing(&ListEnvironmentsRequest::default()), "ApplicationId" ; "list environments")]
    #[test_case(missing(&DeleteEnvironmentRequest::default().application_id("a1")), "EnvironmentId" ; "delete environment")]
    #[test_case(missing(&CreateConfigurationProfileRequest::default().application_id("a1").location_uri("hosted")), "Name" ; "create profile without name")]
    #[test_case(missing(&CreateConfigurationProfileRequest::default().application_id("a1").name("cfg")), "LocationUri" ; "create profile without location")]
    #[test_case(missing(&GetConfigurationProfileRequest::default().application_id("a1")), "ConfigurationProfileId" ; "get configuration profile")]
    #[test_case(missing(&ListConfigurationProfilesRequest::default()), "ApplicationId" ; "list configuration profiles")]
    #[test_case(missing(&DeleteConfigurationProfileRequest::default().application_id("a1")), "ConfigurationProfileId" ; "delete configuration profile")]
    #[test_case(missing(&CreateDeploymentStrategyRequest::default().deployment_duration_in_minutes(10).growth_factor(25.0f32)), "Name" ; "create strategy without name")]
    #[test_case(missing(&CreateDeploymentStrategyRequest::default().name("s").growth_factor(25.0f32)), "DeploymentDurationInMinutes" ; "create strategy without duration")]
    #[test_case(missing(&CreateDeploymentStrategyRequest::default().name("s").deployment_duration_in_minutes(10)), "GrowthFactor" ; "create strategy without growth factor")]
    #[test_case(missing(&GetDeploymentStrategyRequest::default()), "DeploymentStrategyId" ; "get deployment strategy")]
    #[test_case(missing(&DeleteDeploymentStrategyRequest::default()), "DeploymentStrategyId" ; "delete deployment strategy")]
    #[test_case(missing(&StartDeploymentRequest::default().application_id("a1").deployment_strategy_id("d1")), "EnvironmentId" ; "start deployment without environment")]
    #[test_case(missing(&StartDeploymentRequest::default().application_id("a1").environment_id("e1")), "DeploymentStrategyId" ; "start deployment without strategy")]
    #[test_case(missing(&StartDeploymentRequest::default().application_id("a1").environment_id("e1").deployment_strategy_id("d1")), "ConfigurationProfileId" ; "start deployment without profile")]
    #[test_case(missing(&GetDeploymentRequest::default().application_id("a1").environment_id("e1")), "DeploymentNumber" ; "get deployment")]
    #[test_case(missing(&StopDeploymentRequest::default().environment_id("e1").deployment_number(3)), "ApplicationId" ; "stop deployment")]
    #[test_case(missing(&TagResourceRequest::default().resource_arn("arn:app")), "Tags" ; "tag resource")]
    #[test_case(missing(&UntagResourceRequest::default().resource_arn("arn:app")), "TagKeys" ; "untag resource")]
    #[test_case(missing(&ListTagsForResourceRequest::default()), "ResourceArn" ; "list tags for resource")]
    fn test_missing_required_member(actual: &'static str, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_create_application_body_omits_unset() {
        let builder = bind(&CreateApplicationRequest::default().name("app"));
        assert_eq!(builder.body.as_deref(), Some(&br#"{"Name":"app"}"#[..]));
    }

    #[test]
    fn test_update_application_keeps_id_out_of_body() {
        let builder = bind(
            &UpdateApplicationRequest::default()
                .application_id("abc1234")
                .description("new"),
        );
        assert_eq!(
            builder.body.as_deref(),
            Some(&br#"{"Description":"new"}"#[..])
        );
        assert_eq!(
            builder.labels.get("ApplicationId").map(String::as_str),
            Some("abc1234")
        );
    }

    #[test]
    fn test_start_deployment_requires_version() {
        let request = StartDeploymentRequest::default()
            .application_id("a")
            .environment_id("e")
            .deployment_strategy_id("s")
            .configuration_profile_id("p");
        assert!(matches!(
            request.validate(),
            Err(RequestError::MissingParameter {
                field: "ConfigurationVersion",
                ..
            })
        ));
    }

    #[test]
    fn test_growth_factor_range() {
        let request = CreateDeploymentStrategyRequest::default()
            .name("s")
            .deployment_duration_in_minutes(10)
            .growth_factor(0.5f32);
        assert!(matches!(
            request.validate(),
            Err(RequestError::InvalidParameterValue {
                field: "GrowthFactor",
                ..
            })
        ));
    }

    #[test]
    fn test_delete_deployment_strategy_route() {
        assert_eq!(
            DeleteDeploymentStrategyRequest::DESCRIPTOR.uri,
            "/deployementstrategies/{DeploymentStrategyId}"
        );
    }
}
