use crate::error::RequestError;
use crate::signing::{uri_encode_path, uri_encode_query};
use std::collections::HashMap;

/// A URI template with every label substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExpandedUri {
    /// Percent-encoded path.
    pub path: String,
    /// Literal query pairs from the template.
    pub query: Vec<(String, String)>,
}

/// Expand `{Label}` and greedy `{Label+}` placeholders.
///
/// Plain labels are encoded as a single segment, greedy labels keep `/`.
/// A literal query suffix (`?operation=add`) is split off into pairs.
pub(crate) fn expand(
    template: &'static str,
    labels: &HashMap<&'static str, String>,
    operation: &'static str,
) -> Result<ExpandedUri, RequestError> {
    let (path_template, literal_query) = match template.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (template, None),
    };

    let mut path = String::with_capacity(path_template.len() + 32);
    let mut rest = path_template;
    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| RequestError::InvalidParameterValue {
            operation,
            field: "uri",
            reason: format!("unterminated label in '{}'", template),
        })?;
        let raw = &after[..close];
        let (name, greedy) = match raw.strip_suffix('+') {
            Some(name) => (name, true),
            None => (raw, false),
        };

        let value = labels.get(name).ok_or(RequestError::MissingParameter {
            operation,
            field: name,
        })?;
        if value.is_empty() {
            return Err(RequestError::InvalidParameterValue {
                operation,
                field: name,
                reason: "URI label must not be empty".to_string(),
            });
        }
        // URL parsers collapse `.` and `..` segments, `%2E` included.
        let dot_segment = |segment: &str| segment == "." || segment == "..";
        let has_dot_segment = if greedy {
            value.split('/').any(dot_segment)
        } else {
            dot_segment(value)
        };
        if has_dot_segment {
            return Err(RequestError::InvalidParameterValue {
                operation,
                field: name,
                reason: format!("'{}' would be read as a relative path segment", value),
            });
        }

        if greedy {
            path.push_str(&uri_encode_path(value));
        } else {
            path.push_str(&uri_encode_query(value));
        }
        rest = &after[close + 1..];
    }
    path.push_str(rest);

    let query = literal_query
        .map(|q| {
            q.split('&')
                .filter(|p| !p.is_empty())
                .map(|pair| match pair.split_once('=') {
                    Some((k, v)) => (k.to_string(), v.to_string()),
                    None => (pair.to_string(), String::new()),
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(ExpandedUri { path, query })
}
