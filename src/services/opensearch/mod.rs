//! Amazon OpenSearch Service.

#[allow(missing_docs)]
mod model;
#[allow(missing_docs)]
mod operations;

pub use model::*;
pub use operations::*;

use crate::client::ServiceMetadata;
use crate::protocol::Protocol;

/// OpenSearch Service metadata.
pub const METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "OpenSearch",
    signing_name: "es",
    endpoint_prefix: "es",
    api_version: "2021-01-01",
    protocol: Protocol::RestJson,
    target_prefix: None,
    default_headers: &[],
};

service_client!(
    /// Client for Amazon OpenSearch Service.
    OpenSearchClient,
    METADATA
);

service_operations!(OpenSearchClient {
    /// Create a domain.
    CreateDomainRequest => create_domain, create_domain_callable, create_domain_async;
    /// Describe a domain.
    DescribeDomainRequest => describe_domain, describe_domain_callable, describe_domain_async;
    /// Delete a domain.
    DeleteDomainRequest => delete_domain, delete_domain_callable, delete_domain_async;
    /// Describe several domains.
    DescribeDomainsRequest => describe_domains, describe_domains_callable, describe_domains_async;
    /// List domain names.
    ListDomainNamesRequest => list_domain_names, list_domain_names_callable, list_domain_names_async;
    /// Describe a domain configuration.
    DescribeDomainConfigRequest => describe_domain_config, describe_domain_config_callable, describe_domain_config_async;
    /// Update a domain configuration.
    UpdateDomainConfigRequest => update_domain_config, update_domain_config_callable, update_domain_config_async;
    /// List engine versions.
    ListVersionsRequest => list_versions, list_versions_callable, list_versions_async;
    /// List compatible upgrade versions.
    GetCompatibleVersionsRequest => get_compatible_versions, get_compatible_versions_callable, get_compatible_versions_async;
    /// Upgrade a domain.
    UpgradeDomainRequest => upgrade_domain, upgrade_domain_callable, upgrade_domain_async;
    /// Tag a domain.
    AddTagsRequest => add_tags, add_tags_callable, add_tags_async;
    /// List the tags of a domain.
    ListTagsRequest => list_tags, list_tags_callable, list_tags_async;
    /// Untag a domain.
    RemoveTagsRequest => remove_tags, remove_tags_callable, remove_tags_async;
    /// Create a package.
    CreatePackageRequest => create_package, create_package_callable, create_package_async;
    /// Delete a package.
    DeletePackageRequest => delete_package, delete_package_callable, delete_package_async;
    /// Associate a package with a domain.
    AssociatePackageRequest => associate_package, associate_package_callable, associate_package_async;
    /// Dissociate a package from a domain.
    DissociatePackageRequest => dissociate_package, dissociate_package_callable, dissociate_package_async;
    /// Start a service software update.
    StartServiceSoftwareUpdateRequest => start_service_software_update, start_service_software_update_callable, start_service_software_update_async;
    /// Cancel a service software update.
    CancelServiceSoftwareUpdateRequest => cancel_service_software_update, cancel_service_software_update_callable, cancel_service_software_update_async;
});
