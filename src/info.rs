//! Parsed result records for rrdgraph info output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphInfoError, Result};
use crate::numeric::parse_localized_float;

/// Fully parsed `rrdtool graphv` output.
///
/// Field names follow the JSON wire shape consumed by graph frontends:
/// `type` is the MIME content type and `raw` the inline data-URI for
/// the image blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInfo {
    pub legend: Vec<String>,
    pub print: BTreeMap<usize, PrintValue>,
    /// Byte offset one past the final header newline, i.e. where the
    /// binary blob starts.
    pub header_length: usize,
    /// Blob length as declared by the `image = BLOB_SIZE:<n>` marker.
    pub image_size: usize,
    pub graph: Option<GraphDimensions>,
    pub image: Option<ImageDimensions>,
    pub value: Option<ValueRange>,
    /// Key/value pairs from namespaces this crate does not model.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
    pub time_spent: f64,
    /// Lower-cased format name as supplied by the caller, e.g. `svg`.
    pub format: String,
    /// MIME content type, e.g. `image/svg+xml`.
    #[serde(rename = "type")]
    pub content_type: String,
    /// Inline data-URI, e.g. `data:image/svg+xml;utf8,%3C?xml...`.
    pub raw: String,
}

/// Pixel geometry of the plot area within the image, plus the graphed
/// time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDimensions {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
    /// Unix timestamp of the left edge.
    pub start: i64,
    /// Unix timestamp of the right edge.
    pub end: i64,
}

/// Overall pixel size of the rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Y-axis bounds of the rendered data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// A `print[N]` payload: rrdtool quotes these, and the content may be
/// an integer, a locale-formatted float, or arbitrary text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrintValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl PrintValue {
    /// Classify a raw `print[N]` payload.
    ///
    /// Strips one pair of surrounding double quotes, then converts the
    /// payload to a number when it reads as `-?digits` optionally
    /// followed by a decimal separator (`,` or `.`) and more digits.
    pub(crate) fn classify(raw: &str) -> PrintValue {
        let payload = raw
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(raw);
        numeric_payload(payload).unwrap_or_else(|| PrintValue::Text(payload.to_string()))
    }
}

fn numeric_payload(payload: &str) -> Option<PrintValue> {
    let unsigned = payload.strip_prefix('-').unwrap_or(payload);
    if unsigned.is_empty() {
        return None;
    }
    match unsigned.find([',', '.']) {
        None => {
            if unsigned.bytes().all(|b| b.is_ascii_digit()) {
                payload.parse().ok().map(PrintValue::Int)
            } else {
                None
            }
        }
        Some(pos) => {
            let int_part = &unsigned[..pos];
            let frac = &unsigned[pos + 1..];
            if !int_part.is_empty()
                && !frac.is_empty()
                && int_part.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
            {
                parse_localized_float(payload).map(PrintValue::Float)
            } else {
                None
            }
        }
    }
}

fn require<T: Copy>(
    props: &BTreeMap<String, T>,
    record: &'static str,
    field: &'static str,
) -> Result<T> {
    props.get(field).copied().ok_or_else(|| {
        GraphInfoError::MalformedInput(format!("{record} info is missing the '{field}' field"))
    })
}

impl GraphDimensions {
    pub(crate) fn from_properties(props: &BTreeMap<String, i64>) -> Result<Self> {
        Ok(GraphDimensions {
            left: require(props, "graph", "left")?,
            top: require(props, "graph", "top")?,
            width: require(props, "graph", "width")?,
            height: require(props, "graph", "height")?,
            start: require(props, "graph", "start")?,
            end: require(props, "graph", "end")?,
        })
    }
}

impl ImageDimensions {
    pub(crate) fn from_properties(props: &BTreeMap<String, u32>) -> Result<Self> {
        Ok(ImageDimensions {
            width: require(props, "image", "width")?,
            height: require(props, "image", "height")?,
        })
    }
}

impl ValueRange {
    pub(crate) fn from_properties(props: &BTreeMap<String, f64>) -> Result<Self> {
        Ok(ValueRange {
            min: require(props, "value", "min")?,
            max: require(props, "value", "max")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_quoted_integer() {
        assert_eq!(PrintValue::classify("\"42\""), PrintValue::Int(42));
        assert_eq!(PrintValue::classify("\"-7\""), PrintValue::Int(-7));
    }

    #[test]
    fn test_classify_quoted_locale_float() {
        assert_eq!(PrintValue::classify("\"3,14\""), PrintValue::Float(3.14));
        assert_eq!(PrintValue::classify("\"3.14\""), PrintValue::Float(3.14));
    }

    #[test]
    fn test_classify_text_keeps_stripped_payload() {
        assert_eq!(
            PrintValue::classify("\"N/A\""),
            PrintValue::Text("N/A".to_string())
        );
    }

    #[test]
    fn test_classify_rejects_partial_numbers() {
        assert_eq!(
            PrintValue::classify("\"42 reqs\""),
            PrintValue::Text("42 reqs".to_string())
        );
        assert_eq!(
            PrintValue::classify("\",5\""),
            PrintValue::Text(",5".to_string())
        );
        assert_eq!(
            PrintValue::classify("\"1,\""),
            PrintValue::Text("1,".to_string())
        );
    }

    #[test]
    fn test_classify_unquoted_payload() {
        assert_eq!(PrintValue::classify("42"), PrintValue::Int(42));
        assert_eq!(
            PrintValue::classify("no quotes"),
            PrintValue::Text("no quotes".to_string())
        );
    }

    #[test]
    fn test_graph_dimensions_require_all_fields() {
        let mut props = BTreeMap::new();
        props.insert("left".to_string(), 83);
        props.insert("top".to_string(), 15);
        let err = GraphDimensions::from_properties(&props).unwrap_err();
        match err {
            GraphInfoError::MalformedInput(msg) => assert!(msg.contains("width")),
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_value_range_from_properties() {
        let mut props = BTreeMap::new();
        props.insert("min".to_string(), 0.0);
        props.insert("max".to_string(), 1.4626943333);
        let range = ValueRange::from_properties(&props).unwrap();
        assert_eq!(range, ValueRange { min: 0.0, max: 1.4626943333 });
    }

    #[test]
    fn test_print_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&PrintValue::Int(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&PrintValue::Float(3.14)).unwrap(),
            "3.14"
        );
        assert_eq!(
            serde_json::to_string(&PrintValue::Text("N/A".to_string())).unwrap(),
            "\"N/A\""
        );
    }

    #[test]
    fn test_print_value_deserializes_untagged() {
        assert_eq!(
            serde_json::from_str::<PrintValue>("42").unwrap(),
            PrintValue::Int(42)
        );
        assert_eq!(
            serde_json::from_str::<PrintValue>("3.14").unwrap(),
            PrintValue::Float(3.14)
        );
        assert_eq!(
            serde_json::from_str::<PrintValue>("\"N/A\"").unwrap(),
            PrintValue::Text("N/A".to_string())
        );
    }
}
