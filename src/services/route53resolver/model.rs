//! Route 53 Resolver shapes.

use serde::{Deserialize, Serialize};

/// Key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl Tag {
    /// Build a tag from a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// Subnet and optional fixed IP for an endpoint network interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpAddressRequest {
    pub subnet_id: Option<String>,
    pub ip: Option<String>,
}

/// DNS resolver to forward queries to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetAddress {
    pub ip: Option<String>,
    pub port: Option<i32>,
}

/// A resolver endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverEndpoint {
    pub id: Option<String>,
    pub creator_request_id: Option<String>,
    pub arn: Option<String>,
    pub name: Option<String>,
    pub security_group_ids: Option<Vec<String>>,
    /// `INBOUND` or `OUTBOUND`.
    pub direction: Option<String>,
    pub ip_address_count: Option<i32>,
    #[serde(rename = "HostVPCId")]
    pub host_vpc_id: Option<String>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    pub creation_time: Option<String>,
    pub modification_time: Option<String>,
}

/// A forwarding or system rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverRule {
    pub id: Option<String>,
    pub creator_request_id: Option<String>,
    pub arn: Option<String>,
    pub domain_name: Option<String>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    /// `FORWARD`, `SYSTEM` or `RECURSIVE`.
    pub rule_type: Option<String>,
    pub name: Option<String>,
    pub target_ips: Option<Vec<TargetAddress>>,
    pub resolver_endpoint_id: Option<String>,
    pub owner_id: Option<String>,
    pub share_status: Option<String>,
}

/// Association of a rule with a VPC.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverRuleAssociation {
    pub id: Option<String>,
    pub resolver_rule_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "VPCId")]
    pub vpc_id: Option<String>,
    pub status: Option<String>,
    pub status_message: Option<String>,
}

/// Filter for the list calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    pub name: Option<String>,
    pub values: Option<Vec<String>>,
}

/// Output carrying one resolver endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverEndpointOutput {
    pub resolver_endpoint: Option<ResolverEndpoint>,
}

/// Result of `ListResolverEndpoints`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResolverEndpointsOutput {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
    pub resolver_endpoints: Option<Vec<ResolverEndpoint>>,
}

/// Output carrying one resolver rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverRuleOutput {
    pub resolver_rule: Option<ResolverRule>,
}

/// Result of `ListResolverRules`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResolverRulesOutput {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
    pub resolver_rules: Option<Vec<ResolverRule>>,
}

/// Output carrying one rule association.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolverRuleAssociationOutput {
    pub resolver_rule_association: Option<ResolverRuleAssociation>,
}

/// Result of `ListResolverRuleAssociations`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResolverRuleAssociationsOutput {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
    pub resolver_rule_associations: Option<Vec<ResolverRuleAssociation>>,
}

/// Result of `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    pub tags: Option<Vec<Tag>>,
    pub next_token: Option<String>,
}
