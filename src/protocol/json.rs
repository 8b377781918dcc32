//! JSON payload encoding and decoding.

use crate::error::{AwsError, Outcome, RequestError, ResponseError};
use crate::transport::HttpResponse;
use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Serialize a payload, dropping unset (`null`) members at every level.
pub fn to_body<T: Serialize + ?Sized>(value: &T) -> Result<Bytes, AwsError> {
    let mut tree = serde_json::to_value(value).map_err(|e| RequestError::Serialization {
        message: e.to_string(),
    })?;
    strip_nulls(&mut tree);
    if tree.is_null() {
        tree = Value::Object(Default::default());
    }
    serde_json::to_vec(&tree)
        .map(Bytes::from)
        .map_err(|e| {
            RequestError::Serialization {
                message: e.to_string(),
            }
            .into()
        })
}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

/// Parse a JSON response body; an empty body parses as `{}`.
pub fn parse<T: DeserializeOwned>(response: &HttpResponse) -> Outcome<T> {
    let body: &[u8] = if response.body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &response.body
    };
    serde_json::from_slice(body).map_err(|e| {
        ResponseError::JsonParseError {
            message: e.to_string(),
        }
        .into()
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(f64),
    Text(String),
}

/// Deserialize a timestamp sent either as epoch seconds or as ISO-8601 text.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    raw.map(|raw| match raw {
        RawTimestamp::Seconds(secs) => {
            let mut whole = secs.floor() as i64;
            let mut nanos = ((secs - secs.floor()) * 1e9).round() as u32;
            if nanos >= 1_000_000_000 {
                whole += 1;
                nanos = 0;
            }
            Utc.timestamp_opt(whole, nanos)
                .single()
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", secs)))
        }
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom),
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Sample {
        name: Option<String>,
        description: Option<String>,
        nested: Option<Inner>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Inner {
        value: Option<i32>,
        other: Option<i32>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Stamped {
        #[serde(default, deserialize_with = "timestamp")]
        created: Option<DateTime<Utc>>,
    }

    fn response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_to_body_drops_unset_members() {
        let body = to_body(&Sample {
            name: Some("app".into()),
            description: None,
            nested: Some(Inner {
                value: Some(3),
                other: None,
            }),
        })
        .unwrap();

        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            r#"{"Name":"app","Nested":{"Value":3}}"#
        );
    }

    #[test]
    fn test_to_body_unit_is_empty_object() {
        assert_eq!(&to_body(&()).unwrap()[..], b"{}");
    }

    #[test]
    fn test_parse_empty_body() {
        let parsed: HashMap<String, String> = parse(&response("")).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_parse_invalid_body() {
        let err = parse::<HashMap<String, String>>(&response("{not json")).unwrap_err();
        assert!(matches!(
            err,
            AwsError::Response(ResponseError::JsonParseError { .. })
        ));
    }

    #[test]
    fn test_timestamp_formats() {
        let epoch: Stamped = serde_json::from_str(r#"{"Created": 1700000000.5}"#).unwrap();
        let created = epoch.created.unwrap();
        assert_eq!(created.timestamp(), 1_700_000_000);
        assert_eq!(created.timestamp_subsec_millis(), 500);

        let text: Stamped =
            serde_json::from_str(r#"{"Created": "2023-11-14T22:13:20Z"}"#).unwrap();
        assert_eq!(text.created.unwrap().timestamp(), 1_700_000_000);

        let missing: Stamped = serde_json::from_str("{}").unwrap();
        assert!(missing.created.is_none());
    }

    #[test]
    fn test_timestamp_before_epoch() {
        let early: Stamped = serde_json::from_str(r#"{"Created": -1.5}"#).unwrap();
        let created = early.created.unwrap();
        assert_eq!(created.timestamp(), -2);
        assert_eq!(created.timestamp_subsec_nanos(), 500_000_000);

        let whole: Stamped = serde_json::from_str(r#"{"Created": -3}"#).unwrap();
        assert_eq!(whole.created.unwrap().timestamp(), -3);
    }
}
