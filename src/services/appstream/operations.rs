//! AppStream 2.0 requests.

use super::model::*;
use serde::Serialize;
use std::collections::HashMap;

/// Create a fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFleetRequest {
    pub name: Option<String>,
    pub image_name: Option<String>,
    pub image_arn: Option<String>,
    pub instance_type: Option<String>,
    pub fleet_type: Option<String>,
    pub compute_capacity: Option<ComputeCapacity>,
    pub vpc_config: Option<VpcConfig>,
    pub max_user_duration_in_seconds: Option<i32>,
    pub disconnect_timeout_in_seconds: Option<i32>,
    pub idle_disconnect_timeout_in_seconds: Option<i32>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub enable_default_internet_access: Option<bool>,
    pub iam_role_arn: Option<String>,
    pub stream_view: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(CreateFleetRequest {
    name: String,
    image_name: String,
    image_arn: String,
    instance_type: String,
    fleet_type: String,
    compute_capacity: ComputeCapacity,
    vpc_config: VpcConfig,
    max_user_duration_in_seconds: i32,
    disconnect_timeout_in_seconds: i32,
    idle_disconnect_timeout_in_seconds: i32,
    description: String,
    display_name: String,
    enable_default_internet_access: bool,
    iam_role_arn: String,
    stream_view: String,
    tags: HashMap<String, String>,
});
json_operation!(CreateFleetRequest => CreateFleetOutput, "CreateFleet",
    required: [name = "Name", instance_type = "InstanceType"]);

/// Describe fleets, all or by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeFleetsRequest {
    pub names: Option<Vec<String>>,
    pub next_token: Option<String>,
}
setters!(DescribeFleetsRequest { names: Vec<String>, next_token: String });
json_operation!(DescribeFleetsRequest => DescribeFleetsOutput, "DescribeFleets");

/// Delete a stopped fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteFleetRequest {
    pub name: Option<String>,
}
setters!(DeleteFleetRequest { name: String });
json_operation!(DeleteFleetRequest => (), "DeleteFleet", required: [name = "Name"]);

/// Start a fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartFleetRequest {
    pub name: Option<String>,
}
setters!(StartFleetRequest { name: String });
json_operation!(StartFleetRequest => (), "StartFleet", required: [name = "Name"]);

/// Stop a fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopFleetRequest {
    pub name: Option<String>,
}
setters!(StopFleetRequest { name: String });
json_operation!(StopFleetRequest => (), "StopFleet", required: [name = "Name"]);

/// Create a stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStackRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "RedirectURL")]
    pub redirect_url: Option<String>,
    #[serde(rename = "FeedbackURL")]
    pub feedback_url: Option<String>,
    pub user_settings: Option<Vec<UserSetting>>,
    pub application_settings: Option<ApplicationSettings>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(CreateStackRequest {
    name: String,
    description: String,
    display_name: String,
    redirect_url: String,
    feedback_url: String,
    user_settings: Vec<UserSetting>,
    application_settings: ApplicationSettings,
    tags: HashMap<String, String>,
});
json_operation!(CreateStackRequest => CreateStackOutput, "CreateStack", required: [name = "Name"]);

/// Describe stacks, all or by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStacksRequest {
    pub names: Option<Vec<String>>,
    pub next_token: Option<String>,
}
setters!(DescribeStacksRequest { names: Vec<String>, next_token: String });
json_operation!(DescribeStacksRequest => DescribeStacksOutput, "DescribeStacks");

/// Delete a stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteStackRequest {
    pub name: Option<String>,
}
setters!(DeleteStackRequest { name: String });
json_operation!(DeleteStackRequest => (), "DeleteStack", required: [name = "Name"]);

/// Associate a fleet with a stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateFleetRequest {
    pub fleet_name: Option<String>,
    pub stack_name: Option<String>,
}
setters!(AssociateFleetRequest { fleet_name: String, stack_name: String });
json_operation!(AssociateFleetRequest => (), "AssociateFleet",
    required: [fleet_name = "FleetName", stack_name = "StackName"]);

/// Disassociate a fleet from a stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateFleetRequest {
    pub fleet_name: Option<String>,
    pub stack_name: Option<String>,
}
setters!(DisassociateFleetRequest { fleet_name: String, stack_name: String });
json_operation!(DisassociateFleetRequest => (), "DisassociateFleet",
    required: [fleet_name = "FleetName", stack_name = "StackName"]);

/// List the stacks a fleet is associated with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAssociatedStacksRequest {
    pub fleet_name: Option<String>,
    pub next_token: Option<String>,
}
setters!(ListAssociatedStacksRequest { fleet_name: String, next_token: String });
json_operation!(ListAssociatedStacksRequest => ListAssociatedStacksOutput, "ListAssociatedStacks",
    required: [fleet_name = "FleetName"]);

/// Create a temporary streaming URL for a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStreamingUrlRequest {
    pub stack_name: Option<String>,
    pub fleet_name: Option<String>,
    pub user_id: Option<String>,
    pub application_id: Option<String>,
    /// Seconds the URL stays valid, 1 to 604800.
    pub validity: Option<i64>,
    pub session_context: Option<String>,
}
setters!(CreateStreamingUrlRequest {
    stack_name: String,
    fleet_name: String,
    user_id: String,
    application_id: String,
    validity: i64,
    session_context: String,
});
json_operation!(CreateStreamingUrlRequest => CreateStreamingUrlOutput, "CreateStreamingURL",
    required: [stack_name = "StackName", fleet_name = "FleetName", user_id = "UserId"]);

/// Describe the streaming sessions of a stack and fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSessionsRequest {
    pub stack_name: Option<String>,
    pub fleet_name: Option<String>,
    pub user_id: Option<String>,
    pub next_token: Option<String>,
    pub limit: Option<i32>,
    pub authentication_type: Option<String>,
}
setters!(DescribeSessionsRequest {
    stack_name: String,
    fleet_name: String,
    user_id: String,
    next_token: String,
    limit: i32,
    authentication_type: String,
});
json_operation!(DescribeSessionsRequest => DescribeSessionsOutput, "DescribeSessions",
    required: [stack_name = "StackName", fleet_name = "FleetName"]);

/// End a streaming session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpireSessionRequest {
    pub session_id: Option<String>,
}
setters!(ExpireSessionRequest { session_id: String });
json_operation!(ExpireSessionRequest => (), "ExpireSession", required: [session_id = "SessionId"]);

/// Tag a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    pub resource_arn: Option<String>,
    pub tags: Option<HashMap<String, String>>,
}
setters!(TagResourceRequest { resource_arn: String, tags: HashMap<String, String> });
json_operation!(TagResourceRequest => (), "TagResource",
    required: [resource_arn = "ResourceArn", tags = "Tags"]);

/// Remove tags from a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    pub resource_arn: Option<String>,
    pub tag_keys: Option<Vec<String>>,
}
setters!(UntagResourceRequest { resource_arn: String, tag_keys: Vec<String> });
json_operation!(UntagResourceRequest => (), "UntagResource",
    required: [resource_arn = "ResourceArn", tag_keys = "TagKeys"]);

/// List the tags of a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceRequest {
    pub resource_arn: Option<String>,
}
setters!(ListTagsForResourceRequest { resource_arn: String });
json_operation!(ListTagsForResourceRequest => ListTagsForResourceOutput, "ListTagsForResource",
    required: [resource_arn = "ResourceArn"]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use crate::operation::testing::{missing, rpc_line};
    use crate::operation::{OperationInput, RequestBuilder};
    use test_case::test_case;

    fn tags() -> HashMap<String, String> {
        HashMap::from([("team".to_string(), "core".to_string())])
    }

    #[test_case(rpc_line(&CreateFleetRequest::default().name("f").instance_type("stream.standard.medium")), "POST / CreateFleet" ; "create fleet")]
    #[test_case(rpc_line(&DescribeFleetsRequest::default()), "POST / DescribeFleets" ; "describe fleets")]
    #[test_case(rpc_line(&DeleteFleetRequest::default().name("f")), "POST / DeleteFleet" ; "delete fleet")]
    #[test_case(rpc_line(&StartFleetRequest::default().name("f")), "POST / StartFleet" ; "start fleet")]
    #[test_case(rpc_line(&StopFleetRequest::default().name("f")), "POST / StopFleet" ; "stop fleet")]
    #[test_case(rpc_line(&CreateStackRequest::default().name("s")), "POST / CreateStack" ; "create stack")]
    #[test_case(rpc_line(&DescribeStacksRequest::default()), "POST / DescribeStacks" ; "describe stacks")]
    #[test_case(rpc_line(&DeleteStackRequest::default().name("s")), "POST / DeleteStack" ; "delete stack")]
    #[test_case(rpc_line(&AssociateFleetRequest::default().fleet_name("f").stack_name("s")), "POST / AssociateFleet" ; "associate fleet")]
    #[test_case(rpc_line(&DisassociateFleetRequest::default().fleet_name("f").stack_name("s")), "POST / DisassociateFleet" ; "disassociate fleet")]
    #[test_case(rpc_line(&ListAssociatedStacksRequest::default().fleet_name("f")), "POST / ListAssociatedStacks" ; "list associated stacks")]
    #[test_case(rpc_line(&CreateStreamingUrlRequest::default().stack_name("s").fleet_name("f").user_id("u")), "POST / CreateStreamingURL" ; "create streaming url")]
    #[test_case(rpc_line(&DescribeSessionsRequest::default().stack_name("s").fleet_name("f")), "POST / DescribeSessions" ; "describe sessions")]
    #[test_case(rpc_line(&ExpireSessionRequest::default().session_id("x")), "POST / ExpireSession" ; "expire session")]
    #[test_case(rpc_line(&TagResourceRequest::default().resource_arn("arn:f").tags(tags())), "POST / TagResource" ; "tag resource")]
    #[test_case(rpc_line(&UntagResourceRequest::default().resource_arn("arn:f").tag_keys(vec!["team".to_string()])), "POST / UntagResource" ; "untag resource")]
    #[test_case(rpc_line(&ListTagsForResourceRequest::default().resource_arn("arn:f")), "POST / ListTagsForResource" ; "list tags for resource")]
    fn test_rpc_lines(actual: String, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test_case(missing(&CreateFleetRequest::default().instance_type("stream.standard.medium")), "Name" ; "create fleet without name")]
    #[test_case(missing(&CreateFleetRequest::default().name("f")), "InstanceType" ; "create fleet without instance type")]
    #[test_case(missing(&DeleteFleetRequest::default()), "Name" ; "delete fleet")]
    #[test_case(missing(&StartFleetRequest::default()), "Name" ; "start fleet")]
    #[test_case(missing(&StopFleetRequest::default()), "Name" ; "stop fleet")]
    #[test_case(missing(&CreateStackRequest::default()), "Name" ; "create stack")]
    #[test_case(missing(&DeleteStackRequest::default()), "Name" ; "delete stack")]
    #[test_case(missing(&AssociateFleetRequest::default().stack_name("s")), "FleetName" ; "associate without fleet")]
    #[test_case(missing(&AssociateFleetRequest::default().fleet_name("f")), "StackName" ; "associate without stack")]
    #[test_case(missing(&DisassociateFleetRequest::default().stack_name("s")), "FleetName" ; "disassociate without fleet")]
    #[test_case(missing(&DisassociateFleetRequest::default().fleet_name("f")), "StackName" ; "disassociate without stack")]
    #[test_case(missing(&ListAssociatedStacksRequest::default()), "FleetName" ; "list associated stacks")]
    #[test_case(missing(&CreateStreamingUrlRequest::default().fleet_name("f").user_id("u")), "StackName" ; "streaming url without stack")]
    #[test_case(missing(&CreateStreamingUrlRequest::default().stack_name("s").user_id("u")), "FleetName" ; "streaming url without fleet")]
    #[test_case(missing(&CreateStreamingUrlRequest::default().stack_name("s").fleet_name("f")), "UserId" ; "streaming url without user")]
    #[test_case(missing(&DescribeSessionsRequest::default().fleet_name("f")), "StackName" ; "sessions without stack")]
    #[test_case(missing(&DescribeSessionsRequest::default().stack_name("s")), "FleetName" ; "sessions without fleet")]
    #[test_case(missing(&ExpireSessionRequest::default()), "SessionId" ; "expire session")]
    #[test_case(missing(&TagResourceRequest::default().tags(tags())), "ResourceArn" ; "tag without arn")]
    #[test_case(missing(&TagResourceRequest::default().resource_arn("arn:f")), "Tags" ; "tag without tags")]
    #[test_case(missing(&UntagResourceRequest::default().resource_arn("arn:f")), "TagKeys" ; "untag without keys")]
    #[test_case(missing(&ListTagsForResourceRequest::default()), "ResourceArn" ; "list tags for resource")]
    fn test_missing_required_member(actual: &'static str, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_streaming_url_wire_names() {
        let mut builder = RequestBuilder::new();
        let request = CreateStreamingUrlRequest::default()
            .stack_name("s")
            .fleet_name("f")
            .user_id("u")
            .validity(60i64);
        OperationInput::serialize(&request, &mut builder).unwrap();

        let body: serde_json::Value = serde_json::from_slice(builder.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["StackName"], "s");
        assert_eq!(body["Validity"], 60);
        assert!(body.get("ApplicationId").is_none());
        assert_eq!(CreateStreamingUrlRequest::DESCRIPTOR.name, "CreateStreamingURL");
    }

    #[test]
    fn test_associate_fleet_requires_both_names() {
        let request = AssociateFleetRequest::default().fleet_name("f");
        assert!(matches!(
            request.validate(),
            Err(RequestError::MissingParameter {
                field: "StackName",
                ..
            })
        ));
    }

    #[test]
    fn test_stack_url_members() {
        let mut builder = RequestBuilder::new();
        let request = CreateStackRequest::default()
            .name("s")
            .redirect_url("https://example.com");
        OperationInput::serialize(&request, &mut builder).unwrap();
        assert_eq!(
            builder.body.as_deref(),
            Some(&br#"{"Name":"s","RedirectURL":"https://example.com"}"#[..])
        );
    }
}
