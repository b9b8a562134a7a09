use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload posted to the extraction endpoint.
/// The wire format uses camelCase keys and exactly these four fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub caption: String,
    pub location_hint: Option<String>,
    pub post_id: String,
    pub posted_at: String,
}

/// Top-level response body. The endpoint is expected to return an
/// `extraction` object, but its absence is tolerated and treated as an
/// empty mapping downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractResponse {
    #[serde(default)]
    pub extraction: Option<Extraction>,
}

/// The extraction object: an open mapping of field name to JSON value.
/// No field is guaranteed present; lookup of an absent field is `None`,
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extraction(Map<String, Value>);

impl Extraction {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.get("confidence").and_then(Value::as_f64)
    }

    pub fn reasoning(&self) -> Option<&str> {
        self.get("reasoning").and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ExtractResponse {
    /// The extraction object, or an empty mapping when the key was absent.
    pub fn into_extraction(self) -> Extraction {
        self.extraction.unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let req = ExtractRequest {
            caption: "TOMORROW NIGHT! DJ set starting 9PM.".to_owned(),
            location_hint: Some("The Grid".to_owned()),
            post_id: "test-relative-01".to_owned(),
            posted_at: "2025-12-17T10:00:00+00:00".to_owned(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({
                "caption": "TOMORROW NIGHT! DJ set starting 9PM.",
                "locationHint": "The Grid",
                "postId": "test-relative-01",
                "postedAt": "2025-12-17T10:00:00+00:00",
            })
        );
    }

    #[test]
    fn request_serializes_absent_hint_as_null() {
        let req = ExtractRequest {
            caption: "x".to_owned(),
            location_hint: None,
            post_id: "p".to_owned(),
            posted_at: "t".to_owned(),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["locationHint"], Value::Null);
    }

    #[test]
    fn response_without_extraction_key_is_empty_mapping() {
        let res: ExtractResponse = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        let extraction = res.into_extraction();
        assert!(extraction.is_empty());
        assert_eq!(extraction.get("isEvent"), None);
        assert_eq!(extraction.confidence(), None);
        assert_eq!(extraction.reasoning(), None);
    }

    #[test]
    fn extraction_field_lookup() {
        let res: ExtractResponse = serde_json::from_value(json!({
            "extraction": {
                "isEvent": true,
                "eventTime": "22:00:00",
                "confidence": 0.82,
                "reasoning": "Recurring weekly party with explicit start time",
            }
        }))
        .unwrap();
        let e = res.into_extraction();
        assert_eq!(e.get("isEvent"), Some(&json!(true)));
        assert_eq!(e.get("eventDate"), None);
        assert_eq!(e.confidence(), Some(0.82));
        assert_eq!(
            e.reasoning(),
            Some("Recurring weekly party with explicit start time")
        );
    }
}
