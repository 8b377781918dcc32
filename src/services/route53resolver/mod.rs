//! Amazon Route 53 Resolver.

#[allow(missing_docs)]
mod model;
#[allow(missing_docs)]
mod operations;

pub use model::*;
pub use operations::*;

use crate::client::ServiceMetadata;
use crate::protocol::Protocol;

/// Route 53 Resolver service metadata.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "Route53Resolver",
    signing_name: "route53resolver",
    endpoint_prefix: "route53resolver",
    api_version: "2018-04-01",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("Route53Resolver"),
    default_headers: &[],
};

service_client!(
    /// Client for Amazon Route 53 Resolver.
    Route53ResolverClient,
    METADATA
);

service_operations!(Route53ResolverClient {
    /// Create a resolver endpoint.
    CreateResolverEndpointRequest => create_resolver_endpoint, create_resolver_endpoint_callable, create_resolver_endpoint_async;
    /// Retrieve a resolver endpoint.
    GetResolverEndpointRequest => get_resolver_endpoint, get_resolver_endpoint_callable, get_resolver_endpoint_async;
    /// Update a resolver endpoint.
    UpdateResolverEndpointRequest => update_resolver_endpoint, update_resolver_endpoint_callable, update_resolver_endpoint_async;
    /// Delete a resolver endpoint.
    DeleteResolverEndpointRequest => delete_resolver_endpoint, delete_resolver_endpoint_callable, delete_resolver_endpoint_async;
    /// List resolver endpoints.
    ListResolverEndpointsRequest => list_resolver_endpoints, list_resolver_endpoints_callable, list_resolver_endpoints_async;
    /// Create a resolver rule.
    CreateResolverRuleRequest => create_resolver_rule, create_resolver_rule_callable, create_resolver_rule_async;
    /// Retrieve a resolver rule.
    GetResolverRuleRequest => get_resolver_rule, get_resolver_rule_callable, get_resolver_rule_async;
    /// Delete a resolver rule.
    DeleteResolverRuleRequest => delete_resolver_rule, delete_resolver_rule_callable, delete_resolver_rule_async;
    /// List resolver rules.
    ListResolverRulesRequest => list_resolver_rules, list_resolver_rules_callable, list_resolver_rules_async;
    /// Associate a rule with a VPC.
    AssociateResolverRuleRequest => associate_resolver_rule, associate_resolver_rule_callable, associate_resolver_rule_async;
    /// Disassociate a rule from a VPC.
    DisassociateResolverRuleRequest => disassociate_resolver_rule, disassociate_resolver_rule_callable, disassociate_resolver_rule_async;
    /// Retrieve a rule association.
    GetResolverRuleAssociationRequest => get_resolver_rule_association, get_resolver_rule_association_callable, get_resolver_rule_association_async;
    /// List rule associations.
    ListResolverRuleAssociationsRequest => list_resolver_rule_associations, list_resolver_rule_associations_callable, list_resolver_rule_associations_async;
    /// Tag a resource.
    TagResourceRequest => tag_resource, tag_resource_callable, tag_resource_async;
    /// Untag a resource.
    UntagResourceRequest => untag_resource, untag_resource_callable, untag_resource_async;
    /// List the tags of a resource.
    ListTagsForResourceRequest => list_tags_for_resource, list_tags_for_resource_callable, list_tags_for_resource_async;
});
