//! Canonical request construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Unreserved characters plus `/`.
const URI_PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Unreserved characters only.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a value, keeping `/`.
pub fn uri_encode_path(path: &str) -> String {
    utf8_percent_encode(path, URI_PATH_SET).to_string()
}

/// Percent-encode a value, including `/`.
pub fn uri_encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_SET).to_string()
}

/// Canonical URI for a (wire-encoded) path.
///
/// Each segment is encoded once more, which is the double encoding every
/// service except S3 expects.
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }

    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    normalized
        .split('/')
        .map(uri_encode_query)
        .collect::<Vec<_>>()
        .join("/")
}

/// Canonical query string from decoded pairs, sorted by key then value.
pub fn build_canonical_query_string(params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (uri_encode_query(k), uri_encode_query(v)))
        .collect();
    encoded.sort();

    encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

fn signable_headers(headers: &[(String, String)]) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        let name = name.to_ascii_lowercase();
        if !super::should_sign_header(&name) {
            continue;
        }
        let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
        map.entry(name).or_default().push(value);
    }
    map
}

/// Canonical headers block: `name:value\n` for each signed header, sorted.
pub fn build_canonical_headers(headers: &[(String, String)]) -> String {
    signable_headers(headers)
        .iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect()
}

/// Semicolon-separated list of signed header names.
pub fn build_signed_headers(headers: &[(String, String)]) -> String {
    signable_headers(headers)
        .into_keys()
        .collect::<Vec<_>>()
        .join(";")
}

/// Full canonical request.
pub fn build_canonical_request(
    method: &str,
    path: &str,
    query: &[(String, String)],
    headers: &[(String, String)],
    payload_hash: &str,
) -> String {
    format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        method.to_ascii_uppercase(),
        build_canonical_uri(path),
        build_canonical_query_string(query),
        build_canonical_headers(headers),
        build_signed_headers(headers),
        payload_hash
    )
}
