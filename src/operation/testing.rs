//! Helpers for operation unit tests.

use super::{expand, OperationInput, RequestBuilder};
use crate::error::RequestError;

/// Serialize `input` into a fresh builder.
pub(crate) fn bind<I: OperationInput>(input: &I) -> RequestBuilder {
    let mut builder = RequestBuilder::new();
    OperationInput::serialize(input, &mut builder).unwrap();
    builder
}

/// Expanded path of `input`.
pub(crate) fn path<I: OperationInput>(input: &I) -> String {
    let builder = bind(input);
    expand(I::DESCRIPTOR.uri, &builder.labels, I::DESCRIPTOR.name)
        .unwrap()
        .path
}

/// Request line of `input`: verb, path and any query, e.g.
/// `GET /applications?max_results=5`.
pub(crate) fn request_line<I: OperationInput>(input: &I) -> String {
    input.validate().unwrap();
    let builder = bind(input);
    let uri = expand(I::DESCRIPTOR.uri, &builder.labels, I::DESCRIPTOR.name).unwrap();
    let query = uri
        .query
        .iter()
        .chain(builder.query.iter())
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        format!("{} {}", I::DESCRIPTOR.method, uri.path)
    } else {
        format!("{} {}?{}", I::DESCRIPTOR.method, uri.path, query)
    }
}

/// Verb, URI and name of an RPC-style operation, e.g. `POST / CreateFleet`.
pub(crate) fn rpc_line<I: OperationInput>(input: &I) -> String {
    input.validate().unwrap();
    bind(input);
    format!(
        "{} {} {}",
        I::DESCRIPTOR.method,
        I::DESCRIPTOR.uri,
        I::DESCRIPTOR.name
    )
}

/// Wire name of the member `input` is missing.
pub(crate) fn missing<I: OperationInput>(input: &I) -> &'static str {
    match input.validate() {
        Err(RequestError::MissingParameter { field, .. }) => field,
        other => panic!("expected a missing parameter, got {:?}", other),
    }
}
