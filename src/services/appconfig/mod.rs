//! AWS AppConfig.
//!
//! REST-JSON API for managing applications, environments, configuration
//! profiles, deployment strategies and deployments.

#[allow(missing_docs)]
mod model;
#[allow(missing_docs)]
mod operations;

pub use model::*;
pub use operations::*;

use crate::client::ServiceMetadata;
use crate::protocol::Protocol;

/// AppConfig service metadata.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "AppConfig",
    signing_name: "appconfig",
    endpoint_prefix: "appconfig",
    api_version: "2019-10-09",
    protocol: Protocol::RestJson,
    target_prefix: None,
    default_headers: &[],
};

service_client!(
    /// Client for AWS AppConfig.
    AppConfigClient,
    METADATA
);

service_operations!(AppConfigClient {
    /// Create an application.
    CreateApplicationRequest => create_application, create_application_callable, create_application_async;
    /// Retrieve an application.
    GetApplicationRequest => get_application, get_application_callable, get_application_async;
    /// List applications.
    ListApplicationsRequest => list_applications, list_applications_callable, list_applications_async;
    /// Update an application.
    UpdateApplicationRequest => update_application, update_application_callable, update_application_async;
    /// Delete an application.
    DeleteApplicationRequest => delete_application, delete_application_callable, delete_application_async;
    /// Create an environment.
    CreateEnvironmentRequest => create_environment, create_environment_callable, create_environment_async;
    /// Retrieve an environment.
    GetEnvironmentRequest => get_environment, get_environment_callable, get_environment_async;
    /// List the environments of an application.
    ListEnvironmentsRequest => list_environments, list_environments_callable, list_environments_async;
    /// Delete an environment.
    DeleteEnvironmentRequest => delete_environment, delete_environment_callable, delete_environment_async;
    /// Create a configuration profile.
    CreateConfigurationProfileRequest => create_configuration_profile, create_configuration_profile_callable, create_configuration_profile_async;
    /// Retrieve a configuration profile.
    GetConfigurationProfileRequest => get_configuration_profile, get_configuration_profile_callable, get_configuration_profile_async;
    /// List configuration profiles.
    ListConfigurationProfilesRequest => list_configuration_profiles, list_configuration_profiles_callable, list_configuration_profiles_async;
    /// Delete a configuration profile.
    DeleteConfigurationProfileRequest => delete_configuration_profile, delete_configuration_profile_callable, delete_configuration_profile_async;
    /// Create a deployment strategy.
    CreateDeploymentStrategyRequest => create_deployment_strategy, create_deployment_strategy_callable, create_deployment_strategy_async;
    /// Retrieve a deployment strategy.
    GetDeploymentStrategyRequest => get_deployment_strategy, get_deployment_strategy_callable, get_deployment_strategy_async;
    /// List deployment strategies.
    ListDeploymentStrategiesRequest => list_deployment_strategies, list_deployment_strategies_callable, list_deployment_strategies_async;
    /// Delete a deployment strategy.
    DeleteDeploymentStrategyRequest => delete_deployment_strategy, delete_deployment_strategy_callable, delete_deployment_strategy_async;
    /// Start a deployment.
    StartDeploymentRequest => start_deployment, start_deployment_callable, start_deployment_async;
    /// Retrieve a deployment.
    GetDeploymentRequest => get_deployment, get_deployment_callable, get_deployment_async;
    /// Stop a deployment.
    StopDeploymentRequest => stop_deployment, stop_deployment_callable, stop_deployment_async;
    /// Tag a resource.
    TagResourceRequest => tag_resource, tag_resource_callable, tag_resource_async;
    /// Untag a resource.
    UntagResourceRequest => untag_resource, untag_resource_callable, untag_resource_async;
    /// List the tags of a resource.
    ListTagsForResourceRequest => list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async;
});
