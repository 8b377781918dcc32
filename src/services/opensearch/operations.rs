//! OpenSearch Service requests.

use super::model::*;
use crate::error::{AwsError, Outcome, RequestError};
use crate::operation::{validate, HttpMethod, OperationDescriptor, OperationInput, RequestBuilder};
use crate::protocol::json;
use crate::transport::HttpResponse;
use serde::Serialize;
use std::collections::HashMap;

// Domains

/// Create a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDomainRequest {
    pub domain_name: Option<String>,
    /// e.g. `OpenSearch_2.11` or `Elasticsearch_7.10`.
    pub engine_version: Option<String>,
    pub cluster_config: Option<ClusterConfig>,
    #[serde(rename = "EBSOptions")]
    pub ebs_options: Option<EbsOptions>,
    pub access_policies: Option<String>,
    pub advanced_options: Option<HashMap<String, String>>,
    pub tag_list: Option<Vec<Tag>>,
}
setters!(CreateDomainRequest {
    domain_name: String,
    engine_version: String,
    cluster_config: ClusterConfig,
    ebs_options: EbsOptions,
    access_policies: String,
    advanced_options: HashMap<String, String>,
    tag_list: Vec<Tag>,
});

impl OperationInput for CreateDomainRequest {
    type Output = DomainStatusOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("CreateDomain", HttpMethod::Post, "/2021-01-01/opensearch/domain");

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DomainStatusOutput> {
        json::parse(response)
    }
}

/// Describe a domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeDomainRequest {
    pub domain_name: Option<String>,
}
setters!(DescribeDomainRequest { domain_name: String });

impl OperationInput for DescribeDomainRequest {
    type Output = DomainStatusOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DescribeDomain",
        HttpMethod::Get,
        "/2021-01-01/opensearch/domain/{DomainName}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("DomainName", &self.domain_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DomainStatusOutput> {
        json::parse(response)
    }
}

/// Delete a domain and its data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteDomainRequest {
    pub domain_name: Option<String>,
}
setters!(DeleteDomainRequest { domain_name: String });

impl OperationInput for DeleteDomainRequest {
    type Output = DomainStatusOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DeleteDomain",
        HttpMethod::Delete,
        "/2021-01-01/opensearch/domain/{DomainName}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("DomainName", &self.domain_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DomainStatusOutput> {
        json::parse(response)
    }
}

/// Describe up to five domains.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDomainsRequest {
    pub domain_names: Option<Vec<String>>,
}
setters!(DescribeDomainsRequest { domain_names: Vec<String> });

impl OperationInput for DescribeDomainsRequest {
    type Output = DescribeDomainsOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DescribeDomains",
        HttpMethod::Post,
        "/2021-01-01/opensearch/domain-info",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::required(Self::DESCRIPTOR.name, "DomainNames", &self.domain_names)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DescribeDomainsOutput> {
        json::parse(response)
    }
}

/// List the domain names of the account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDomainNamesRequest {
    /// `OpenSearch` or `Elasticsearch`.
    pub engine_type: Option<String>,
}
setters!(ListDomainNamesRequest { engine_type: String });

impl OperationInput for ListDomainNamesRequest {
    type Output = ListDomainNamesOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("ListDomainNames", HttpMethod::Get, "/2021-01-01/domain");

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.query_opt("engineType", &self.engine_type);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ListDomainNamesOutput> {
        json::parse(response)
    }
}

/// Describe the configuration of a domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeDomainConfigRequest {
    pub domain_name: Option<String>,
}
setters!(DescribeDomainConfigRequest { domain_name: String });

impl OperationInput for DescribeDomainConfigRequest {
    type Output = DomainConfigOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DescribeDomainConfig",
        HttpMethod::Get,
        "/2021-01-01/opensearch/domain/{DomainName}/config",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("DomainName", &self.domain_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DomainConfigOutput> {
        json::parse(response)
    }
}

/// Change the configuration of a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDomainConfigRequest {
    #[serde(skip)]
    pub domain_name: Option<String>,
    pub cluster_config: Option<ClusterConfig>,
    #[serde(rename = "EBSOptions")]
    pub ebs_options: Option<EbsOptions>,
    pub access_policies: Option<String>,
    pub advanced_options: Option<HashMap<String, String>>,
    pub dry_run: Option<bool>,
}
setters!(UpdateDomainConfigRequest {
    domain_name: String,
    cluster_config: ClusterConfig,
    ebs_options: EbsOptions,
    access_policies: String,
    advanced_options: HashMap<String, String>,
    dry_run: bool,
});

impl OperationInput for UpdateDomainConfigRequest {
    type Output = DomainConfigOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "UpdateDomainConfig",
        HttpMethod::Post,
        "/2021-01-01/opensearch/domain/{DomainName}/config",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("DomainName", &self.domain_name)
            .json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DomainConfigOutput> {
        json::parse(response)
    }
}

// Versions

/// List supported engine versions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListVersionsRequest {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}
setters!(ListVersionsRequest { max_results: i32, next_token: String });

impl OperationInput for ListVersionsRequest {
    type Output = ListVersionsOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("ListVersions", HttpMethod::Get, "/2021-01-01/opensearch/versions");

    fn validate(&self) -> Result<(), RequestError> {
        validate::range(Self::DESCRIPTOR.name, "maxResults", &self.max_results, 1, 100)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .query_opt("maxResults", &self.max_results)
            .query_opt("nextToken", &self.next_token);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ListVersionsOutput> {
        json::parse(response)
    }
}

/// List the versions a domain, or any domain, can upgrade to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetCompatibleVersionsRequest {
    pub domain_name: Option<String>,
}
setters!(GetCompatibleVersionsRequest { domain_name: String });

impl OperationInput for GetCompatibleVersionsRequest {
    type Output = GetCompatibleVersionsOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "GetCompatibleVersions",
        HttpMethod::Get,
        "/2021-01-01/opensearch/compatibleVersions",
    );

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.query_opt("domainName", &self.domain_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<GetCompatibleVersionsOutput> {
        json::parse(response)
    }
}

/// Upgrade a domain to a newer engine version.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpgradeDomainRequest {
    pub domain_name: Option<String>,
    pub target_version: Option<String>,
    pub perform_check_only: Option<bool>,
}
setters!(UpgradeDomainRequest { domain_name: String, target_version: String, perform_check_only: bool });

impl OperationInput for UpgradeDomainRequest {
    type Output = UpgradeDomainOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "UpgradeDomain",
        HttpMethod::Post,
        "/2021-01-01/opensearch/upgradeDomain",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)?;
        validate::non_empty(Self::DESCRIPTOR.name, "TargetVersion", &self.target_version)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<UpgradeDomainOutput> {
        json::parse(response)
    }
}

// Tags

/// Attach tags to a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddTagsRequest {
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
    pub tag_list: Option<Vec<Tag>>,
}
setters!(AddTagsRequest { arn: String, tag_list: Vec<Tag> });

impl OperationInput for AddTagsRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("AddTags", HttpMethod::Post, "/2021-01-01/tags");

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "ARN", &self.arn)?;
        validate::required(Self::DESCRIPTOR.name, "TagList", &self.tag_list)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

/// List the tags of a domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTagsRequest {
    pub arn: Option<String>,
}
setters!(ListTagsRequest { arn: String });

impl OperationInput for ListTagsRequest {
    type Output = ListTagsOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("ListTags", HttpMethod::Get, "/2021-01-01/tags/");

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "ARN", &self.arn)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.query_opt("arn", &self.arn);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ListTagsOutput> {
        json::parse(response)
    }
}

/// Remove tags from a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveTagsRequest {
    #[serde(rename = "ARN")]
    pub arn: Option<String>,
    pub tag_keys: Option<Vec<String>>,
}
setters!(RemoveTagsRequest { arn: String, tag_keys: Vec<String> });

impl OperationInput for RemoveTagsRequest {
    type Output = ();
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("RemoveTags", HttpMethod::Post, "/2021-01-01/tags-removal");

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "ARN", &self.arn)?;
        validate::required(Self::DESCRIPTOR.name, "TagKeys", &self.tag_keys)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(_response: &HttpResponse) -> Outcome<()> {
        Ok(())
    }
}

// Packages

/// Register a package stored in S3.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePackageRequest {
    pub package_name: Option<String>,
    pub package_type: Option<String>,
    pub package_description: Option<String>,
    pub package_source: Option<PackageSource>,
}
setters!(CreatePackageRequest {
    package_name: String,
    package_type: String,
    package_description: String,
    package_source: PackageSource,
});

impl OperationInput for CreatePackageRequest {
    type Output = PackageDetailsOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("CreatePackage", HttpMethod::Post, "/2021-01-01/packages");

    fn validate(&self) -> Result<(), RequestError> {
        let name = Self::DESCRIPTOR.name;
        validate::non_empty(name, "PackageName", &self.package_name)?;
        validate::non_empty(name, "PackageType", &self.package_type)?;
        validate::required(name, "PackageSource", &self.package_source)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<PackageDetailsOutput> {
        json::parse(response)
    }
}

/// Delete a package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletePackageRequest {
    pub package_id: Option<String>,
}
setters!(DeletePackageRequest { package_id: String });

impl OperationInput for DeletePackageRequest {
    type Output = PackageDetailsOutput;
    const DESCRIPTOR: OperationDescriptor =
        OperationDescriptor::new("DeletePackage", HttpMethod::Delete, "/2021-01-01/packages/{PackageID}");

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "PackageID", &self.package_id)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.label_opt("PackageID", &self.package_id);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<PackageDetailsOutput> {
        json::parse(response)
    }
}

/// Associate a package with a domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssociatePackageRequest {
    pub package_id: Option<String>,
    pub domain_name: Option<String>,
}
setters!(AssociatePackageRequest { package_id: String, domain_name: String });

impl OperationInput for AssociatePackageRequest {
    type Output = DomainPackageDetailsOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "AssociatePackage",
        HttpMethod::Post,
        "/2021-01-01/packages/associate/{PackageID}/{DomainName}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "PackageID", &self.package_id)?;
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("PackageID", &self.package_id)
            .label_opt("DomainName", &self.domain_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DomainPackageDetailsOutput> {
        json::parse(response)
    }
}

/// Remove a package from a domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DissociatePackageRequest {
    pub package_id: Option<String>,
    pub domain_name: Option<String>,
}
setters!(DissociatePackageRequest { package_id: String, domain_name: String });

impl OperationInput for DissociatePackageRequest {
    type Output = DomainPackageDetailsOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "DissociatePackage",
        HttpMethod::Post,
        "/2021-01-01/packages/dissociate/{PackageID}/{DomainName}",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "PackageID", &self.package_id)?;
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request
            .label_opt("PackageID", &self.package_id)
            .label_opt("DomainName", &self.domain_name);
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<DomainPackageDetailsOutput> {
        json::parse(response)
    }
}

// Service software

/// Schedule a service software update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartServiceSoftwareUpdateRequest {
    pub domain_name: Option<String>,
}
setters!(StartServiceSoftwareUpdateRequest { domain_name: String });

impl OperationInput for StartServiceSoftwareUpdateRequest {
    type Output = ServiceSoftwareOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "StartServiceSoftwareUpdate",
        HttpMethod::Post,
        "/2021-01-01/opensearch/serviceSoftwareUpdate/start",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ServiceSoftwareOutput> {
        json::parse(response)
    }
}

/// Cancel a scheduled service software update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelServiceSoftwareUpdateRequest {
    pub domain_name: Option<String>,
}
setters!(CancelServiceSoftwareUpdateRequest { domain_name: String });

impl OperationInput for CancelServiceSoftwareUpdateRequest {
    type Output = ServiceSoftwareOutput;
    const DESCRIPTOR: OperationDescriptor = OperationDescriptor::new(
        "CancelServiceSoftwareUpdate",
        HttpMethod::Post,
        "/2021-01-01/opensearch/serviceSoftwareUpdate/cancel",
    );

    fn validate(&self) -> Result<(), RequestError> {
        validate::non_empty(Self::DESCRIPTOR.name, "DomainName", &self.domain_name)
    }

    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError> {
        request.json_body(self)?;
        Ok(())
    }

    fn deserialize(response: &HttpResponse) -> Outcome<ServiceSoftwareOutput> {
        json::parse(response)
    }
}
