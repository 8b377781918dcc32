use crate::error::AwsError;
use crate::protocol::json;
use crate::protocol::query::QueryWriter;
use bytes::Bytes;
use serde::Serialize;
use std::collections::HashMap;

/// Collects the HTTP bindings of one request before the URL is built.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    pub(crate) labels: HashMap<&'static str, String>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Bytes>,
    pub(crate) content_type: Option<String>,
    pub(crate) form: QueryWriter,
}

impl RequestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a URI label.
    pub fn label(&mut self, name: &'static str, value: impl ToString) -> &mut Self {
        self.labels.insert(name, value.to_string());
        self
    }

    /// Bind a URI label if set. Unbound labels fail URI expansion.
    pub fn label_opt<T: ToString>(&mut self, name: &'static str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.label(name, value.to_string());
        }
        self
    }

    /// Add a query parameter.
    pub fn query(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Add a query parameter if set.
    pub fn query_opt<T: ToString>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.query(name, value.to_string());
        }
        self
    }

    /// Add a repeated query parameter, once per element.
    pub fn query_list<T: ToString>(&mut self, name: &str, values: &Option<Vec<T>>) -> &mut Self {
        for value in values.iter().flatten() {
            self.query(name, value.to_string());
        }
        self
    }

    /// Add a header.
    pub fn header(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.headers.push((name.into(), value.to_string()));
        self
    }

    /// Add a header if set.
    pub fn header_opt<T: ToString>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.header(name, value.to_string());
        }
        self
    }

    /// Use a JSON document as payload. Unset members are omitted.
    pub fn json_body<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self, AwsError> {
        self.body = Some(json::to_body(value)?);
        Ok(self)
    }

    /// Use raw bytes as payload.
    pub fn payload(&mut self, body: impl Into<Bytes>, content_type: impl Into<String>) -> &mut Self {
        self.body = Some(body.into());
        self.content_type = Some(content_type.into());
        self
    }

    /// Query protocol parameters (`Action` and `Version` are added later).
    pub fn form(&mut self) -> &mut QueryWriter {
        &mut self.form
    }
}
