//! Wire protocols.
//!
//! Three protocols cover all services here: REST-JSON (AppConfig, Glacier,
//! OpenSearch), AWS JSON 1.1 (AppStream, CodeStar, Route 53 Resolver) and
//! AWS Query with XML responses (Elastic Beanstalk).

pub mod json;
pub mod query;

/// Wire protocol of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// HTTP binding with labels, query and headers; JSON payloads.
    RestJson,
    /// `POST /` with `X-Amz-Target`; JSON payloads.
    AwsJson1_1,
    /// `POST /` with form-encoded parameters; XML responses.
    AwsQuery,
}

impl Protocol {
    /// Content type of request payloads.
    pub fn content_type(&self) -> &'static str {
        match self {
            Protocol::RestJson => "application/json",
            Protocol::AwsJson1_1 => "application/x-amz-json-1.1",
            Protocol::AwsQuery => "application/x-www-form-urlencoded; charset=utf-8",
        }
    }
}
