//! AWS Query parameter encoding and XML result decoding.

use crate::error::{Outcome, ResponseError};
use crate::signing::uri_encode_query;
use crate::transport::HttpResponse;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Structures that flatten into prefixed Query parameters.
pub trait QueryStruct {
    /// Write members as `{prefix}.{Member}` parameters.
    fn write(&self, writer: &mut QueryWriter, prefix: &str);
}

/// Ordered collection of flattened Query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryWriter {
    params: Vec<(String, String)>,
}

impl QueryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn param(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Add a parameter if set.
    pub fn opt<T: ToString>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.param(name, value.to_string());
        }
        self
    }

    /// Add a list as `{name}.member.{n}`; an empty list is sent as `{name}=`.
    pub fn list<T: ToString>(&mut self, name: &str, values: &Option<Vec<T>>) -> &mut Self {
        match values {
            Some(values) if values.is_empty() => {
                self.param(name, "");
            }
            Some(values) => {
                for (idx, value) in values.iter().enumerate() {
                    self.param(format!("{}.member.{}", name, idx + 1), value.to_string());
                }
            }
            None => {}
        }
        self
    }

    /// Add a structure as `{name}.{Member}`.
    pub fn structure<T: QueryStruct>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            value.write(self, name);
        }
        self
    }

    /// Add a list of structures as `{name}.member.{n}.{Member}`.
    pub fn struct_list<T: QueryStruct>(&mut self, name: &str, values: &Option<Vec<T>>) -> &mut Self {
        match values {
            Some(values) if values.is_empty() => {
                self.param(name, "");
            }
            Some(values) => {
                for (idx, value) in values.iter().enumerate() {
                    value.write(self, &format!("{}.member.{}", name, idx + 1));
                }
            }
            None => {}
        }
        self
    }

    /// The parameters in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    /// Consume the writer.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.params
    }
}

/// Form-encode parameters.
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", uri_encode_query(k), uri_encode_query(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode the `<{operation}Result>` element of a Query response.
pub fn parse_result<T: DeserializeOwned>(response: &HttpResponse, operation: &str) -> Outcome<T> {
    let text = std::str::from_utf8(&response.body).map_err(|e| ResponseError::XmlParseError {
        message: e.to_string(),
    })?;
    let xml_error = |e: quick_xml::Error| ResponseError::XmlParseError {
        message: e.to_string(),
    };

    let element = format!("{}Result", operation);
    let mut reader = Reader::from_str(text);
    let inner = loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) if e.local_name().as_ref() == element.as_bytes() => {
                let end = e.to_end().into_owned();
                let span = reader.read_to_end(end.name()).map_err(xml_error)?;
                break &text[span];
            }
            Event::Empty(e) if e.local_name().as_ref() == element.as_bytes() => break "",
            Event::Eof => {
                return Err(ResponseError::MissingField { field: element }.into());
            }
            _ => {}
        }
    };

    quick_xml::de::from_str(&format!("<Result>{}</Result>", inner)).map_err(|e| {
        ResponseError::XmlParseError {
            message: e.to_string(),
        }
        .into()
    })
}

#[derive(Deserialize)]
struct MemberList<T> {
    #[serde(rename = "member", default = "Vec::new")]
    member: Vec<T>,
}

/// Deserialize a `<Name><member>..</member></Name>` list into a `Vec`.
pub fn members<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<MemberList<T>>::deserialize(deserializer)?.map(|list| list.member))
}

#[derive(Deserialize)]
struct MapEntry {
    #[serde(rename = "key")]
    key: String,
    #[serde(rename = "value", default)]
    value: String,
}

/// Deserialize an `<entry><key/><value/></entry>` map.
pub fn entries<'de, D>(deserializer: D) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Entries {
        #[serde(rename = "entry", default)]
        entry: Vec<MapEntry>,
    }

    Ok(Option::<Entries>::deserialize(deserializer)?
        .map(|e| e.entry.into_iter().map(|m| (m.key, m.value)).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    struct Setting {
        namespace: &'static str,
        value: Option<&'static str>,
    }

    impl QueryStruct for Setting {
        fn write(&self, writer: &mut QueryWriter, prefix: &str) {
            writer.param(format!("{}.Namespace", prefix), self.namespace);
            writer.opt(&format!("{}.Value", prefix), &self.value);
        }
    }

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Described {
        #[serde(default, deserialize_with = "members")]
        names: Option<Vec<String>>,
        next_token: Option<String>,
    }

    fn response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_writer_flattens_lists_and_structs() {
        let mut writer = QueryWriter::new();
        writer
            .opt("ApplicationName", &Some("app"))
            .opt::<String>("Description", &None)
            .list("EnvironmentIds", &Some(vec!["e-1", "e-2"]))
            .struct_list(
                "OptionSettings",
                &Some(vec![Setting {
                    namespace: "aws:autoscaling:asg",
                    value: Some("2"),
                }]),
            );

        let pairs: Vec<(&str, &str)> = writer
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ApplicationName", "app"),
                ("EnvironmentIds.member.1", "e-1"),
                ("EnvironmentIds.member.2", "e-2"),
                ("OptionSettings.member.1.Namespace", "aws:autoscaling:asg"),
                ("OptionSettings.member.1.Value", "2"),
            ]
        );
    }

    #[test]
    fn test_empty_list_is_sent() {
        let mut writer = QueryWriter::new();
        writer.list::<String>("TagsToRemove", &Some(vec![]));
        assert_eq!(encode_pairs(writer.pairs()), "TagsToRemove=");
    }

    #[test]
    fn test_encode_pairs() {
        let pairs = vec![
            ("Action".to_string(), "CreateApplication".to_string()),
            ("Description".to_string(), "a b/c".to_string()),
        ];
        assert_eq!(
            encode_pairs(&pairs),
            "Action=CreateApplication&Description=a%20b%2Fc"
        );
    }

    #[test]
    fn test_parse_result() {
        let body = r#"<DescribeThingsResponse xmlns="http://example.com/">
  <DescribeThingsResult>
    <Names>
      <member>one</member>
      <member>two</member>
    </Names>
    <NextToken>abc</NextToken>
  </DescribeThingsResult>
  <ResponseMetadata><RequestId>r-1</RequestId></ResponseMetadata>
</DescribeThingsResponse>"#;

        let parsed: Described = parse_result(&response(body), "DescribeThings").unwrap();
        assert_eq!(parsed.names, Some(vec!["one".to_string(), "two".to_string()]));
        assert_eq!(parsed.next_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_result_missing_element() {
        let err = parse_result::<Described>(&response("<Other/>"), "DescribeThings").unwrap_err();
        assert!(err.to_string().contains("DescribeThingsResult"));
    }

    #[test]
    fn test_parse_result_tolerates_attributes_and_whitespace() {
        let body = r#"<?xml version="1.0"?>
<DescribeThingsResponse xmlns="http://example.com/">
  <DescribeThingsResult xmlns="http://example.com/" >
    <NextToken>xyz</NextToken>
  </DescribeThingsResult>
</DescribeThingsResponse>"#;

        let parsed: Described = parse_result(&response(body), "DescribeThings").unwrap();
        assert_eq!(parsed.next_token.as_deref(), Some("xyz"));
        assert_eq!(parsed.names, None);
    }

    #[test]
    fn test_parse_result_empty_element() {
        let body = r#"<DescribeThingsResponse><DescribeThingsResult xmlns="x"/></DescribeThingsResponse>"#;
        let parsed: Described = parse_result(&response(body), "DescribeThings").unwrap();
        assert!(parsed.next_token.is_none());
    }
}
