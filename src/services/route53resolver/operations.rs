//! Route 53 Resolver requests.

use super::model::*;
use serde::Serialize;

/// Create an inbound or outbound resolver endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateResolverEndpointRequest {
    pub creator_request_id: Option<String>,
    pub name: Option<String>,
    pub security_group_ids: Option<Vec<String>>,
    pub direction: Option<String>,
    pub ip_addresses: Option<Vec<IpAddressRequest>>,
    pub tags: Option<Vec<Tag>>,
}
setters!(CreateResolverEndpointRequest {
    creator_request_id: String,
    name: String,
    security_group_ids: Vec<String>,
    direction: String,
    ip_addresses: Vec<IpAddressRequest>,
    tags: Vec<Tag>,
});
json_operation!(CreateResolverEndpointRequest => ResolverEndpointOutput, "CreateResolverEndpoint",
    required: [
        creator_request_id = "CreatorRequestId",
        security_group_ids = "SecurityGroupIds",
        direction = "Direction",
        ip_addresses = "IpAddresses",
    ]);

/// Retrieve a resolver endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResolverEndpointRequest {
    pub resolver_endpoint_id: Option<String>,
}
setters!(GetResolverEndpointRequest { resolver_endpoint_id: String });
json_operation!(GetResolverEndpointRequest => ResolverEndpointOutput, "GetResolverEndpoint",
    required: [resolver_endpoint_id = "ResolverEndpointId"]);

/// Rename a resolver endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateResolverEndpointRequest {
    pub resolver_endpoint_id: Option<String>,
    pub name: Option<String>,
}
setters!(UpdateResolverEndpointRequest { resolver_endpoint_id: String, name: String });
json_operation!(UpdateResolverEndpointRequest => ResolverEndpointOutput, "UpdateResolverEndpoint",
    required: [resolver_endpoint_id = "ResolverEndpointId"]);

/// Delete a resolver endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteResolverEndpointRequest {
    pub resolver_endpoint_id: Option<String>,
}
setters!(DeleteResolverEndpointRequest { resolver_endpoint_id: String });
json_operation!(DeleteResolverEndpointRequest => ResolverEndpointOutput, "DeleteResolverEndpoint",
    required: [resolver_endpoint_id = "ResolverEndpointId"]);

/// List resolver endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResolverEndpointsRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub filters: Option<Vec<Filter>>,
}
setters!(ListResolverEndpointsRequest { max_results: i32, next_token: String, filters: Vec<Filter> });
json_operation!(ListResolverEndpointsRequest => ListResolverEndpointsOutput, "ListResolverEndpoints");

/// Create a resolver rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateResolverRuleRequest {
    pub creator_request_id: Option<String>,
    pub name: Option<String>,
    pub rule_type: Option<String>,
    pub domain_name: Option<String>,
    pub target_ips: Option<Vec<TargetAddress>>,
    pub resolver_endpoint_id: Option<String>,
    pub tags: Option<Vec<Tag>>,
}
setters!(CreateResolverRuleRequest {
    creator_request_id: String,
    name: String,
    rule_type: String,
    domain_name: String,
    target_ips: Vec<TargetAddress>,
    resolver_endpoint_id: String,
    tags: Vec<Tag>,
});
json_operation!(CreateResolverRuleRequest => ResolverRuleOutput, "CreateResolverRule",
    required: [
        creator_request_id = "CreatorRequestId",
        rule_type = "RuleType",
        domain_name = "DomainName",
    ]);

/// Retrieve a resolver rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResolverRuleRequest {
    pub resolver_rule_id: Option<String>,
}
setters!(GetResolverRuleRequest { resolver_rule_id: String });
json_operation!(GetResolverRuleRequest => ResolverRuleOutput, "GetResolverRule",
    required: [resolver_rule_id = "ResolverRuleId"]);

/// Delete a resolver rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteResolverRuleRequest {
    pub resolver_rule_id: Option<String>,
}
setters!(DeleteResolverRuleRequest { resolver_rule_id: String });
json_operation!(DeleteResolverRuleRequest => ResolverRuleOutput, "DeleteResolverRule",
    required: [resolver_rule_id = "ResolverRuleId"]);

/// List resolver rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResolverRulesRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub filters: Option<Vec<Filter>>,
}
setters!(ListResolverRulesRequest { max_results: i32, next_token: String, filters: Vec<Filter> });
json_operation!(ListResolverRulesRequest => ListResolverRulesOutput, "ListResolverRules");

/// Associate a rule with a VPC.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateResolverRuleRequest {
    pub resolver_rule_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "VPCId")]
    pub vpc_id: Option<String>,
}
setters!(AssociateResolverRuleRequest { resolver_rule_id: String, name: String, vpc_id: String });
json_operation!(AssociateResolverRuleRequest => ResolverRuleAssociationOutput, "AssociateResolverRule",
    required: [resolver_rule_id = "ResolverRuleId", vpc_id = "VPCId"]);

/// Remove a rule from a VPC.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateResolverRuleRequest {
    #[serde(rename = "VPCId")]
    pub vpc_id: Option<String>,
    pub resolver_rule_id: Option<String>,
}
setters!(DisassociateResolverRuleRequest { vpc_id: String, resolver_rule_id: String });
json_operation!(DisassociateResolverRuleRequest => ResolverRuleAssociationOutput, "DisassociateResolverRule",
    required: [vpc_id = "VPCId", resolver_rule_id = "ResolverRuleId"]);

/// Retrieve a rule association.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetResolverRuleAssociationRequest {
    pub resolver_rule_association_id: Option<String>,
}
setters!(GetResolverRuleAssociationRequest { resolver_rule_association_id: String });
json_operation!(GetResolverRuleAssociationRequest => ResolverRuleAssociationOutput, "GetResolverRuleAssociation",
    required: [resolver_rule_association_id = "ResolverRuleAssociationId"]);

/// List rule associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResolverRuleAssociationsRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub filters: Option<Vec<Filter>>,
}
setters!(ListResolverRuleAssociationsRequest { max_results: i32, next_token: String, filters: Vec<Filter> });
json_operation!(ListResolverRuleAssociationsRequest => ListResolverRuleAssociationsOutput, "ListResolverRuleAssociations");

/// Tag a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    pub resource_arn: Option<String>,
    pub tags: Option<Vec<Tag>>,
}
setters!(TagResourceRequest { resource_arn: String, tags: Vec<Tag> });
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
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}
setters!(ListTagsForResourceRequest { resource_arn: String, max_results: i32, next_token: String });
json_operation!(ListTagsForResourceRequest => ListTagsForResourceOutput, "ListTagsForResource",
    required: [resource_arn = "ResourceArn"]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use crate::operation::testing::{missing, rpc_line};
    use crate::operation::{OperationInput, RequestBuilder};
    use test_case::test_case;

    fn endpoint() -> CreateResolverEndpointRequest {
        CreateResolverEndpointRequest::default()
            .creator_request_id("req-1")
            .security_group_ids(vec!["sg-1".to_string()])
            .direction("INBOUND")
            .ip_addresses(vec![IpAddressRequest::default()])
    }

    fn rule() -> CreateResolverRuleRequest {
        CreateResolverRuleRequest::default()
            .creator_request_id("req-2")
            .rule_type("FORWARD")
            .domain_name("corp.example.com")
    }

    #[test_case(rpc_line(&endpoint()), "POST / CreateResolverEndpoint" ; "create endpoint")]
    #[test_case(rpc_line(&GetResolverEndpointRequest::default().resolver_endpoint_id("rslvr-in-1")), "POST / GetResolverEndpoint" ; "get endpoint")]
    #[test_case(rpc_line(&UpdateResolverEndpointRequest::default().resolver_endpoint_id("rslvr-in-1")), "POST / UpdateResolverEndpoint" ; "update endpoint")]
    #[test_case(rpc_line(&DeleteResolverEndpointRequest::default().resolver_endpoint_id("rslvr-in-1")), "POST / DeleteResolverEndpoint" ; "delete endpoint")]
    #[test_case(rpc_line(&ListResolverEndpointsRequest::default()), "POST / ListResolverEndpoints" ; "list endpoints")]
    #[test_case(rpc_line(&rule()), "POST / CreateResolverRule" ; "create rule")]
    #[test_case(rpc_line(&GetResolverRuleRequest::default().resolver_rule_id("rslvr-rr-1")), "POST / GetResolverRule" ; "get rule")]
    #[test_case(rpc_line(&DeleteResolverRuleRequest::default().resolver_rule_id("rslvr-rr-1")), "POST / DeleteResolverRule" ; "delete rule")]
    #[test_case(rpc_line(&ListResolverRulesRequest::default()), "POST / ListResolverRules" ; "list rules")]
    #[test_case(rpc_line(&AssociateResolverRuleRequest::default().resolver_rule_id("rslvr-rr-1").vpc_id("vpc-1")), "POST / AssociateResolverRule" ; "associate rule")]
    #[test_case(rpc_line(&DisassociateResolverRuleRequest::default().vpc_id("vpc-1").resolver_rule_id("rslvr-rr-1")), "POST / DisassociateResolverRule" ; "disassociate rule")]
    #[test_case(rpc_line(&GetResolverRuleAssociationRequest::default().resolver_rule_association_id("rslvr-rrassoc-1")), "POST / GetResolverRuleAssociation" ; "get rule association")]
    #[test_case(rpc_line(&ListResolverRuleAssociationsRequest::default()), "POST / ListResolverRuleAssociations" ; "list rule associations")]
    #[test_case(rpc_line(&TagResourceRequest::default().resource_arn("arn:r").tags(vec![Tag::default()])), "POST / TagResource" ; "tag resource")]
    #[test_case(rpc_line(&UntagResourceRequest::default().resource_arn("arn:r").tag_keys(vec!["team".to_string()])), "POST / UntagResource" ; "untag resource")]
    #[test_case(rpc_line(&ListTagsForResourceRequest::default().resource_arn("arn:r")), "POST / ListTagsForResource" ; "list tags for resource")]
    fn test_rpc_lines(actual: String, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test_case(missing(&CreateResolverEndpointRequest { creator_request_id: None, ..endpoint() }), "CreatorRequestId" ; "endpoint without request id")]
    #[test_case(missing(&CreateResolverEndpointRequest { security_group_ids: None, ..endpoint() }), "SecurityGroupIds" ; "endpoint without security groups")]
    #[test_case(missing(&CreateResolverEndpointRequest { direction: None, ..endpoint() }), "Direction" ; "endpoint without direction")]
    #[test_case(missing(&CreateResolverEndpointRequest { ip_addresses: None, ..endpoint() }), "IpAddresses" ; "endpoint without addresses")]
    #[test_case(missing(&GetResolverEndpointRequest::default()), "ResolverEndpointId" ; "get endpoint")]
    #[test_case(missing(&UpdateResolverEndpointRequest::default().name("n")), "ResolverEndpointId" ; "update endpoint")]
    #[test_case(missing(&DeleteResolverEndpointRequest::default()), "ResolverEndpointId" ; "delete endpoint")]
    #[test_case(missing(&CreateResolverRuleRequest { creator_request_id: None, ..rule() }), "CreatorRequestId" ; "rule without request id")]
    #[test_case(missing(&CreateResolverRuleRequest { rule_type: None, ..rule() }), "RuleType" ; "rule without type")]
    #[test_case(missing(&CreateResolverRuleRequest { domain_name: None, ..rule() }), "DomainName" ; "rule without domain")]
    #[test_case(missing(&GetResolverRuleRequest::default()), "ResolverRuleId" ; "get rule")]
    #[test_case(missing(&DeleteResolverRuleRequest::default()), "ResolverRuleId" ; "delete rule")]
    #[test_case(missing(&AssociateResolverRuleRequest::default().vpc_id("vpc-1")), "ResolverRuleId" ; "associate without rule")]
    #[test_case(missing(&AssociateResolverRuleRequest::default().resolver_rule_id("rslvr-rr-1")), "VPCId" ; "associate without vpc")]
    #[test_case(missing(&DisassociateResolverRuleRequest::default().resolver_rule_id("rslvr-rr-1")), "VPCId" ; "disassociate without vpc")]
    #[test_case(missing(&DisassociateResolverRuleRequest::default().vpc_id("vpc-1")), "ResolverRuleId" ; "disassociate without rule")]
    #[test_case(missing(&GetResolverRuleAssociationRequest::default()), "ResolverRuleAssociationId" ; "get rule association")]
    #[test_case(missing(&TagResourceRequest::default().tags(vec![Tag::default()])), "ResourceArn" ; "tag without arn")]
    #[test_case(missing(&TagResourceRequest::default().resource_arn("arn:r")), "Tags" ; "tag without tags")]
    #[test_case(missing(&UntagResourceRequest::default().resource_arn("arn:r")), "TagKeys" ; "untag without keys")]
    #[test_case(missing(&ListTagsForResourceRequest::default()), "ResourceArn" ; "list tags for resource")]
    fn test_missing_required_member(actual: &'static str, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_vpc_id_wire_name() {
        let mut builder = RequestBuilder::new();
        let request = AssociateResolverRuleRequest::default()
            .resolver_rule_id("rslvr-rr-1")
            .vpc_id("vpc-1");
        OperationInput::serialize(&request, &mut builder).unwrap();
        assert_eq!(
            builder.body.as_deref(),
            Some(&br#"{"ResolverRuleId":"rslvr-rr-1","VPCId":"vpc-1"}"#[..])
        );
    }

    #[test]
    fn test_disassociate_checks_vpc_first() {
        let request = DisassociateResolverRuleRequest::default();
        assert!(matches!(
            request.validate(),
            Err(RequestError::MissingParameter { field: "VPCId", .. })
        ));
    }

    #[test]
    fn test_create_endpoint_required_members() {
        let request = CreateResolverEndpointRequest::default()
            .creator_request_id("req-1")
            .security_group_ids(vec!["sg-1".to_string()])
            .direction("INBOUND");
        assert!(matches!(
            request.validate(),
            Err(RequestError::MissingParameter {
                field: "IpAddresses",
                ..
            })
        ));

        let request = request.ip_addresses(vec![IpAddressRequest {
            subnet_id: Some("subnet-1".into()),
            ip: None,
        }]);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_endpoint_output_decodes_host_vpc() {
        let output: ResolverEndpointOutput = serde_json::from_str(
            r#"{"ResolverEndpoint":{"Id":"rslvr-in-1","HostVPCId":"vpc-9","Direction":"INBOUND"}}"#,
        )
        .unwrap();
        let endpoint = output.resolver_endpoint.unwrap();
        assert_eq!(endpoint.host_vpc_id.as_deref(), Some("vpc-9"));
        assert_eq!(endpoint.direction.as_deref(), Some("INBOUND"));
    }
}
