//! Service clients.
//!
//! Each module holds one service: its metadata, request and result shapes,
//! and a client exposing every operation in three calling conventions.

pub mod appconfig;
pub mod appstream;
pub mod codestar;
pub mod elasticbeanstalk;
pub mod glacier;
pub mod opensearch;
pub mod route53resolver;

pub use appconfig::AppConfigClient;
pub use appstream::AppStreamClient;
pub use codestar::CodeStarClient;
pub use elasticbeanstalk::ElasticBeanstalkClient;
pub use glacier::GlacierClient;
pub use opensearch::OpenSearchClient;
pub use route53resolver::Route53ResolverClient;
