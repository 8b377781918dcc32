//! Elastic Beanstalk requests.

use super::model::*;
use crate::error::{AwsError, Outcome, RequestError};
use crate::operation::{validate, HttpMethod, OperationDescriptor, OperationInput, RequestBuilder};
use crate::protocol::query;
use crate::transport::HttpResponse;
use chrono::{DateTime, SecondsFormat, Utc};

fn iso8601(value: &Option<DateTime<Utc>>) -> Option<String> {
    value.map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Create an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateApplicationRequest {
    pub application_name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<Tag>>,
}
setters!(CreateApplicationRequest { application_name: String, description: String, tags: Vec<Tag> });
query_operation!(CreateApplicationRequest => ApplicationDescriptionMessage, "CreateApplication",
    required: [application_name = "ApplicationName"],
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("Description", &req.description)
            .struct_list("Tags", &req.tags);
    });

/// Describe applications, all or by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeApplicationsRequest {
    pub application_names: Option<Vec<String>>,
}
setters!(DescribeApplicationsRequest { application_names: Vec<String> });
query_operation!(DescribeApplicationsRequest => ApplicationDescriptionsMessage, "DescribeApplications",
    |req, form| {
        form.list("ApplicationNames", &req.application_names);
    });

/// Change the description of an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateApplicationRequest {
    pub application_name: Option<String>,
    pub description: Option<String>,
}
setters!(UpdateApplicationRequest { application_name: String, description: String });
query_operation!(UpdateApplicationRequest => ApplicationDescriptionMessage, "UpdateApplication",
    required: [application_name = "ApplicationName"],
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("Description", &req.description);
    });

/// Delete an application and its versions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteApplicationRequest {
    pub application_name: Option<String>,
    pub terminate_env_by_force: Option<bool>,
}
setters!(DeleteApplicationRequest { application_name: String, terminate_env_by_force: bool });
query_operation!(DeleteApplicationRequest => (), "DeleteApplication",
    required: [application_name = "ApplicationName"],
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("TerminateEnvByForce", &req.terminate_env_by_force);
    });

/// Register a deployable version of an application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateApplicationVersionRequest {
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub description: Option<String>,
    pub source_bundle: Option<S3Location>,
    pub auto_create_application: Option<bool>,
    pub process: Option<bool>,
    pub tags: Option<Vec<Tag>>,
}
setters!(CreateApplicationVersionRequest {
    application_name: String,
    version_label: String,
    description: String,
    source_bundle: S3Location,
    auto_create_application: bool,
    process: bool,
    tags: Vec<Tag>,
});
query_operation!(CreateApplicationVersionRequest => ApplicationVersionDescriptionMessage, "CreateApplicationVersion",
    required: [application_name = "ApplicationName", version_label = "VersionLabel"],
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("VersionLabel", &req.version_label)
            .opt("Description", &req.description)
            .structure("SourceBundle", &req.source_bundle)
            .opt("AutoCreateApplication", &req.auto_create_application)
            .opt("Process", &req.process)
            .struct_list("Tags", &req.tags);
    });

/// Describe application versions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeApplicationVersionsRequest {
    pub application_name: Option<String>,
    pub version_labels: Option<Vec<String>>,
    pub max_records: Option<i32>,
    pub next_token: Option<String>,
}
setters!(DescribeApplicationVersionsRequest {
    application_name: String,
    version_labels: Vec<String>,
    max_records: i32,
    next_token: String,
});
query_operation!(DescribeApplicationVersionsRequest => ApplicationVersionDescriptionsMessage, "DescribeApplicationVersions",
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .list("VersionLabels", &req.version_labels)
            .opt("MaxRecords", &req.max_records)
            .opt("NextToken", &req.next_token);
    });

/// Delete an application version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteApplicationVersionRequest {
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub delete_source_bundle: Option<bool>,
}
setters!(DeleteApplicationVersionRequest {
    application_name: String,
    version_label: String,
    delete_source_bundle: bool,
});
query_operation!(DeleteApplicationVersionRequest => (), "DeleteApplicationVersion",
    required: [application_name = "ApplicationName", version_label = "VersionLabel"],
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("VersionLabel", &req.version_label)
            .opt("DeleteSourceBundle", &req.delete_source_bundle);
    });

/// Launch an environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateEnvironmentRequest {
    pub application_name: Option<String>,
    pub environment_name: Option<String>,
    pub group_name: Option<String>,
    pub description: Option<String>,
    pub cname_prefix: Option<String>,
    pub tier: Option<EnvironmentTier>,
    pub tags: Option<Vec<Tag>>,
    pub version_label: Option<String>,
    pub template_name: Option<String>,
    pub solution_stack_name: Option<String>,
    pub platform_arn: Option<String>,
    pub option_settings: Option<Vec<ConfigurationOptionSetting>>,
}
setters!(CreateEnvironmentRequest {
    application_name: String,
    environment_name: String,
    group_name: String,
    description: String,
    cname_prefix: String,
    tier: EnvironmentTier,
    tags: Vec<Tag>,
    version_label: String,
    template_name: String,
    solution_stack_name: String,
    platform_arn: String,
    option_settings: Vec<ConfigurationOptionSetting>,
});
query_operation!(CreateEnvironmentRequest => EnvironmentDescription, "CreateEnvironment",
    required: [application_name = "ApplicationName"],
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("EnvironmentName", &req.environment_name)
            .opt("GroupName", &req.group_name)
            .opt("Description", &req.description)
            .opt("CNAMEPrefix", &req.cname_prefix)
            .structure("Tier", &req.tier)
            .struct_list("Tags", &req.tags)
            .opt("VersionLabel", &req.version_label)
            .opt("TemplateName", &req.template_name)
            .opt("SolutionStackName", &req.solution_stack_name)
            .opt("PlatformArn", &req.platform_arn)
            .struct_list("OptionSettings", &req.option_settings);
    });

/// Describe environments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeEnvironmentsRequest {
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub environment_ids: Option<Vec<String>>,
    pub environment_names: Option<Vec<String>>,
    pub include_deleted: Option<bool>,
    pub included_deleted_back_to: Option<DateTime<Utc>>,
    pub max_records: Option<i32>,
    pub next_token: Option<String>,
}
setters!(DescribeEnvironmentsRequest {
    application_name: String,
    version_label: String,
    environment_ids: Vec<String>,
    environment_names: Vec<String>,
    include_deleted: bool,
    included_deleted_back_to: DateTime<Utc>,
    max_records: i32,
    next_token: String,
});
query_operation!(DescribeEnvironmentsRequest => EnvironmentDescriptionsMessage, "DescribeEnvironments",
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("VersionLabel", &req.version_label)
            .list("EnvironmentIds", &req.environment_ids)
            .list("EnvironmentNames", &req.environment_names)
            .opt("IncludeDeleted", &req.include_deleted)
            .opt("IncludedDeletedBackTo", &iso8601(&req.included_deleted_back_to))
            .opt("MaxRecords", &req.max_records)
            .opt("NextToken", &req.next_token);
    });

/// Terminate an environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminateEnvironmentRequest {
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
    pub terminate_resources: Option<bool>,
    pub force_terminate: Option<bool>,
}
setters!(TerminateEnvironmentRequest {
    environment_id: String,
    environment_name: String,
    terminate_resources: bool,
    force_terminate: bool,
});
query_operation!(TerminateEnvironmentRequest => EnvironmentDescription, "TerminateEnvironment",
    |req, form| {
        form.opt("EnvironmentId", &req.environment_id)
            .opt("EnvironmentName", &req.environment_name)
            .opt("TerminateResources", &req.terminate_resources)
            .opt("ForceTerminate", &req.force_terminate);
    });

/// Restart the application container server on every instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestartAppServerRequest {
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
}
setters!(RestartAppServerRequest { environment_id: String, environment_name: String });
query_operation!(RestartAppServerRequest => (), "RestartAppServer",
    |req, form| {
        form.opt("EnvironmentId", &req.environment_id)
            .opt("EnvironmentName", &req.environment_name);
    });

/// Delete and recreate the resources of an environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RebuildEnvironmentRequest {
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
}
setters!(RebuildEnvironmentRequest { environment_id: String, environment_name: String });
query_operation!(RebuildEnvironmentRequest => (), "RebuildEnvironment",
    |req, form| {
        form.opt("EnvironmentId", &req.environment_id)
            .opt("EnvironmentName", &req.environment_name);
    });

/// Swap the CNAMEs of two environments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapEnvironmentCnamesRequest {
    pub source_environment_id: Option<String>,
    pub source_environment_name: Option<String>,
    pub destination_environment_id: Option<String>,
    pub destination_environment_name: Option<String>,
}
setters!(SwapEnvironmentCnamesRequest {
    source_environment_id: String,
    source_environment_name: String,
    destination_environment_id: String,
    destination_environment_name: String,
});
query_operation!(SwapEnvironmentCnamesRequest => (), "SwapEnvironmentCNAMEs",
    |req, form| {
        form.opt("SourceEnvironmentId", &req.source_environment_id)
            .opt("SourceEnvironmentName", &req.source_environment_name)
            .opt("DestinationEnvironmentId", &req.destination_environment_id)
            .opt("DestinationEnvironmentName", &req.destination_environment_name);
    });

/// Cancel an in-progress environment update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbortEnvironmentUpdateRequest {
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
}
setters!(AbortEnvironmentUpdateRequest { environment_id: String, environment_name: String });
query_operation!(AbortEnvironmentUpdateRequest => (), "AbortEnvironmentUpdate",
    |req, form| {
        form.opt("EnvironmentId", &req.environment_id)
            .opt("EnvironmentName", &req.environment_name);
    });

/// Check whether a CNAME prefix is free. Sent unsigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckDnsAvailabilityRequest {
    pub cname_prefix: Option<String>,
}
setters!(CheckDnsAvailabilityRequest { cname_prefix: String });

impl OperationInput for CheckDnsAvailabilityRequest {
    type Output = CheckDnsAvailabilityOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("CheckDNSAvailability", HttpMethod::Post, "/").unsigned();

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "CNAMEPrefix", &self.cname_prefix)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.form().opt("CNAMEPrefix", &self.cname_prefix);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Self::Output> {
        query::parse_result(response, Self::DESCRIPTOR.name)
    }
}

/// List the solution stacks available to new environments. Sent unsigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAvailableSolutionStacksRequest;

impl OperationInput for ListAvailableSolutionStacksRequest {
    type Output = ListAvailableSolutionStacksOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("ListAvailableSolutionStacks", HttpMethod::Post, "/").unsigned();

    fn serialize(&self, _request: &mut RequestBuilder) -> Result<(), AwsError> {
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<Self::Output> {
        query::parse_result(response, Self::DESCRIPTOR.name)
    }
}

/// Describe environment events, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeEventsRequest {
    pub application_name: Option<String>,
    pub version_label: Option<String>,
    pub template_name: Option<String>,
    pub environment_id: Option<String>,
    pub environment_name: Option<String>,
    pub platform_arn: Option<String>,
    pub request_id: Option<String>,
    pub severity: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub max_records: Option<i32>,
    pub next_token: Option<String>,
}
setters!(DescribeEventsRequest {
    application_name: String,
    version_label: String,
    template_name: String,
    environment_id: String,
    environment_name: String,
    platform_arn: String,
    request_id: String,
    severity: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    max_records: i32,
    next_token: String,
});
query_operation!(DescribeEventsRequest => EventDescriptionsMessage, "DescribeEvents",
    |req, form| {
        form.opt("ApplicationName", &req.application_name)
            .opt("VersionLabel", &req.version_label)
            .opt("TemplateName", &req.template_name)
            .opt("EnvironmentId", &req.environment_id)
            .opt("EnvironmentName", &req.environment_name)
            .opt("PlatformArn", &req.platform_arn)
            .opt("RequestId", &req.request_id)
            .opt("Severity", &req.severity)
            .opt("StartTime", &iso8601(&req.start_time))
            .opt("EndTime", &iso8601(&req.end_time))
            .opt("MaxRecords", &req.max_records)
            .opt("NextToken", &req.next_token);
    });

/// List the tags of an Elastic Beanstalk resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTagsForResourceRequest {
    pub resource_arn: Option<String>,
}
setters!(ListTagsForResourceRequest { resource_arn: String });
query_operation!(ListTagsForResourceRequest => ResourceTagsDescriptionMessage, "ListTagsForResource",
    required: [resource_arn = "ResourceArn"],
    |req, form| {
        form.opt("ResourceArn", &req.resource_arn);
    });

/// Add, update and remove tags of a resource in one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTagsForResourceRequest {
    pub resource_arn: Option<String>,
    pub tags_to_add: Option<Vec<Tag>>,
    pub tags_to_remove: Option<Vec<String>>,
}
setters!(UpdateTagsForResourceRequest {
    resource_arn: String,
    tags_to_add: Vec<Tag>,
    tags_to_remove: Vec<String>,
});
query_operation!(UpdateTagsForResourceRequest => (), "UpdateTagsForResource",
    required: [resource_arn = "ResourceArn"],
    |req, form| {
        form.opt("ResourceArn", &req.resource_arn)
            .struct_list("TagsToAdd", &req.tags_to_add)
            .list("TagsToRemove", &req.tags_to_remove);
    });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::testing::{missing, rpc_line};
    use crate::operation::SigningMode;
    use bytes::Bytes;
    use std::collections::HashMap;
    use test_case::test_case;

    #[test_case(rpc_line(&CreateApplicationRequest::default().application_name("shop")), "POST / CreateApplication" ; "create application")]
    #[test_case(rpc_line(&DescribeApplicationsRequest::default()), "POST / DescribeApplications" ; "describe applications")]
    #[test_case(rpc_line(&UpdateApplicationRequest::default().application_name("shop")), "POST / UpdateApplication" ; "update application")]
    #[test_case(rpc_line(&DeleteApplicationRequest::default().application_name("shop")), "POST / DeleteApplication" ; "delete application")]
    #[test_case(rpc_line(&CreateApplicationVersionRequest::default().application_name("shop").version_label("v1")), "POST / CreateApplicationVersion" ; "create application version")]
    #[test_case(rpc_line(&DescribeApplicationVersionsRequest::default()), "POST / DescribeApplicationVersions" ; "describe application versions")]
    #[test_case(rpc_line(&DeleteApplicationVersionRequest::default().application_name("shop").version_label("v1")), "POST / DeleteApplicationVersion" ; "delete application version")]
    #[test_case(rpc_line(&CreateEnvironmentRequest::default().application_name("shop")), "POST / CreateEnvironment" ; "create environment")]
    #[test_case(rpc_line(&DescribeEnvironmentsRequest::default()), "POST / DescribeEnvironments" ; "describe environments")]
    #[test_case(rpc_line(&TerminateEnvironmentRequest::default().environment_id("e-1")), "POST / TerminateEnvironment" ; "terminate environment")]
    #[test_case(rpc_line(&RestartAppServerRequest::default().environment_id("e-1")), "POST / RestartAppServer" ; "restart app server")]
    #[test_case(rpc_line(&RebuildEnvironmentRequest::default().environment_id("e-1")), "POST / RebuildEnvironment" ; "rebuild environment")]
    #[test_case(rpc_line(&SwapEnvironmentCnamesRequest::default().source_environment_id("e-1").destination_environment_id("e-2")), "POST / SwapEnvironmentCNAMEs" ; "swap cnames")]
    #[test_case(rpc_line(&AbortEnvironmentUpdateRequest::default().environment_id("e-1")), "POST / AbortEnvironmentUpdate" ; "abort environment update")]
    #[test_case(rpc_line(&CheckDnsAvailabilityRequest::default().cname_prefix("shop")), "POST / CheckDNSAvailability" ; "check dns availability")]
    #[test_case(rpc_line(&ListAvailableSolutionStacksRequest), "POST / ListAvailableSolutionStacks" ; "list solution stacks")]
    #[test_case(rpc_line(&DescribeEventsRequest::default()), "POST / DescribeEvents" ; "describe events")]
    #[test_case(rpc_line(&ListTagsForResourceRequest::default().resource_arn("arn:eb")), "POST / ListTagsForResource" ; "list tags for resource")]
    #[test_case(rpc_line(&UpdateTagsForResourceRequest::default().resource_arn("arn:eb")), "POST / UpdateTagsForResource" ; "update tags for resource")]
    fn test_rpc_lines(actual: String, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test_case(missing(&CreateApplicationRequest::default()), "ApplicationName" ; "create application")]
    #[test_case(missing(&UpdateApplicationRequest::default()), "ApplicationName" ; "update application")]
    #[test_case(missing(&DeleteApplicationRequest::default()), "ApplicationName" ; "delete application")]
    #[test_case(missing(&CreateApplicationVersionRequest::default().version_label("v1")), "ApplicationName" ; "create version without application")]
    #[test_case(missing(&CreateApplicationVersionRequest::default().application_name("shop")), "VersionLabel" ; "create version without label")]
    #[test_case(missing(&DeleteApplicationVersionRequest::default().version_label("v1")), "ApplicationName" ; "delete version without application")]
    #[test_case(missing(&DeleteApplicationVersionRequest::default().application_name("shop")), "VersionLabel" ; "delete version without label")]
    #[test_case(missing(&CreateEnvironmentRequest::default().environment_name("shop-prod")), "ApplicationName" ; "create environment")]
    #[test_case(missing(&CheckDnsAvailabilityRequest::default()), "CNAMEPrefix" ; "check dns availability")]
    #[test_case(missing(&ListTagsForResourceRequest::default()), "ResourceArn" ; "list tags for resource")]
    #[test_case(missing(&UpdateTagsForResourceRequest::default().tags_to_remove(vec!["team".to_string()])), "ResourceArn" ; "update tags for resource")]
    fn test_missing_required_member(actual: &'static str, expected: &str) {
        assert_eq!(actual, expected);
    }

    fn form<I: OperationInput>(input: &I) -> Vec<(String, String)> {
        let mut builder = RequestBuilder::new();
        input.serialize(&mut builder).unwrap();
        builder.form.into_pairs()
    }

    fn xml(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_create_environment_flattens_settings() {
        let request = CreateEnvironmentRequest::default()
            .application_name("app")
            .cname_prefix("my-app")
            .tier(EnvironmentTier {
                name: Some("WebServer".into()),
                tier_type: Some("Standard".into()),
                version: None,
            })
            .option_settings(vec![ConfigurationOptionSetting::new(
                "aws:autoscaling:asg",
                "MinSize",
                "2",
            )]);

        let pairs = form(&request);
        let get = |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("CNAMEPrefix"), Some("my-app"));
        assert_eq!(get("Tier.Type"), Some("Standard"));
        assert_eq!(
            get("OptionSettings.member.1.Namespace"),
            Some("aws:autoscaling:asg")
        );
        assert_eq!(get("OptionSettings.member.1.Value"), Some("2"));
        assert_eq!(get("OptionSettings.member.1.ResourceName"), None);
    }

    #[test]
    fn test_describe_events_formats_times() {
        let start = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let pairs = form(&DescribeEventsRequest::default().start_time(start));
        assert_eq!(
            pairs,
            vec![("StartTime".to_string(), "2024-03-01T10:00:00.000Z".to_string())]
        );
    }

    #[test]
    fn test_unsigned_operations() {
        assert_eq!(CheckDnsAvailabilityRequest::DESCRIPTOR.signing, SigningMode::Unsigned);
        assert_eq!(
            ListAvailableSolutionStacksRequest::DESCRIPTOR.signing,
            SigningMode::Unsigned
        );
        assert_eq!(CreateApplicationRequest::DESCRIPTOR.signing, SigningMode::SigV4);
    }

    #[test]
    fn test_check_dns_rejects_empty_prefix() {
        let err = CheckDnsAvailabilityRequest::default()
            .cname_prefix("")
            .validate()
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidParameterValue { .. }));
    }

    #[test]
    fn test_decode_environment() {
        let body = r#"<CreateEnvironmentResponse xmlns="https://elasticbeanstalk.amazonaws.com/docs/2010-12-01/">
  <CreateEnvironmentResult>
    <EnvironmentName>prod</EnvironmentName>
    <EnvironmentId>e-abc123</EnvironmentId>
    <CNAME>prod.us-east-1.elasticbeanstalk.com</CNAME>
    <EndpointURL>awseb-e-a.us-east-1.elb.amazonaws.com</EndpointURL>
    <DateCreated>2024-03-01T10:00:00.000Z</DateCreated>
    <Status>Launching</Status>
    <AbortableOperationInProgress>false</AbortableOperationInProgress>
    <Tier><Name>WebServer</Name><Type>Standard</Type></Tier>
  </CreateEnvironmentResult>
  <ResponseMetadata><RequestId>r-1</RequestId></ResponseMetadata>
</CreateEnvironmentResponse>"#;

        let env = CreateEnvironmentRequest::deserialize(&xml(body)).unwrap();
        assert_eq!(env.environment_id.as_deref(), Some("e-abc123"));
        assert_eq!(env.cname.as_deref(), Some("prod.us-east-1.elasticbeanstalk.com"));
        assert_eq!(env.abortable_operation_in_progress, Some(false));
        assert_eq!(
            env.tier.and_then(|t| t.tier_type).as_deref(),
            Some("Standard")
        );
        assert!(env.date_created.is_some());
    }

    #[test]
    fn test_decode_tags() {
        let body = r#"<ListTagsForResourceResponse>
  <ListTagsForResourceResult>
    <ResourceArn>arn:aws:elasticbeanstalk:us-east-1:123456789012:environment/app/prod</ResourceArn>
    <ResourceTags>
      <member><Key>team</Key><Value>infra</Value></member>
    </ResourceTags>
  </ListTagsForResourceResult>
</ListTagsForResourceResponse>"#;

        let tags = ListTagsForResourceRequest::deserialize(&xml(body)).unwrap();
        assert_eq!(tags.resource_tags, Some(vec![Tag::new("team", "infra")]));
    }

    #[test]
    fn test_unit_result_ignores_body() {
        let body = "<DeleteApplicationResponse><ResponseMetadata><RequestId>r</RequestId></ResponseMetadata></DeleteApplicationResponse>";
        assert!(DeleteApplicationRequest::deserialize(&xml(body)).is_ok());
    }
}
