//! Operation model shared by all service clients.
//!
//! Every request type implements [`OperationInput`]: a static descriptor
//! (name, verb, URI template, signing mode), validation, serialization
//! into a [`RequestBuilder`] and decoding of a successful response.

mod request;
#[cfg(test)]
pub(crate) mod testing;
mod uri;
pub mod validate;

pub use request::RequestBuilder;
pub(crate) use uri::{expand, ExpandedUri};

use crate::error::{AwsError, Outcome, RequestError};
use crate::transport::HttpResponse;
use std::fmt;

/// HTTP verb of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Upper-case verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a request is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningMode {
    /// Signature Version 4 with the client's credentials.
    SigV4,
    /// Sent without credentials or signature.
    Unsigned,
}

/// Static description of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation name as used by the service (e.g. `DeleteArchive`).
    pub name: &'static str,
    /// HTTP verb.
    pub method: HttpMethod,
    /// URI template: `{Label}`, greedy `{Label+}` and literal `?k=v` query.
    pub uri: &'static str,
    /// Signing mode.
    pub signing: SigningMode,
}

impl OperationDescriptor {
    /// A signed operation.
    pub const fn new(name: &'static str, method: HttpMethod, uri: &'static str) -> Self {
        Self {
            name,
            method,
            uri,
            signing: SigningMode::SigV4,
        }
    }

    /// The same operation, sent unsigned.
    pub const fn unsigned(mut self) -> Self {
        self.signing = SigningMode::Unsigned;
        self
    }
}

/// A request that can be executed by a service client.
pub trait OperationInput: Clone + Send + Sync + 'static {
    /// Decoded result of a successful call.
    type Output: Send + 'static;

    /// Static operation description.
    const DESCRIPTOR: OperationDescriptor;

    /// Check required members and format constraints.
    fn validate(&self) -> Result<(), RequestError> {
        Ok(())
    }

    /// Bind members to labels, query, headers and payload.
    fn serialize(&self, request: &mut RequestBuilder) -> Result<(), AwsError>;

    /// Decode a successful response.
    fn deserialize(response: &HttpResponse) -> Outcome<Self::Output>;
}
