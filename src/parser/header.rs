//! Walks `rrdtool graphv` output and splits the header from the blob.
//!
//! The input this consumes looks like:
//!
//! ```text
//! graph_left = 83
//! graph_top = 15
//! graph_width = 742
//! graph_height = 288
//! image_width = 840
//! image_height = 320
//! graph_start = 1493928095
//! graph_end = 1493942495
//! value_min = 0,0000000000e+00
//! value_max = 1,4626943333e+00
//! image = BLOB_SIZE:103461
//! ```
//!
//! followed immediately by `BLOB_SIZE` bytes of binary image data.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use super::line::{classify_line, InfoLine};
use crate::error::{GraphInfoError, Result};
use crate::format::ImageFormat;
use crate::info::{GraphDimensions, GraphInfo, ImageDimensions, PrintValue, ValueRange};
use crate::inline::inline_image;
use crate::numeric::parse_localized_float;

/// Parse raw `rrdtool graphv` output into a [`GraphInfo`].
///
/// `format` is the format name the graph was rendered with
/// (case-insensitive); `time_spent` is the caller-measured elapsed
/// time of the tool invocation and is passed through verbatim.
pub fn parse_graph_info(buffer: &[u8], format: &str, time_spent: f64) -> Result<GraphInfo> {
    let mut pos = 0;
    let mut legend: Vec<String> = Vec::new();
    let mut print = BTreeMap::new();
    let mut graph_props: BTreeMap<String, i64> = BTreeMap::new();
    let mut image_props: BTreeMap<String, u32> = BTreeMap::new();
    let mut value_props: BTreeMap<String, f64> = BTreeMap::new();
    let mut extra: BTreeMap<String, String> = BTreeMap::new();

    let image_size = loop {
        let newline = buffer[pos..]
            .iter()
            .position(|&b| b == b'\n')
            .ok_or_else(|| {
                GraphInfoError::MalformedInput(format!("there is no more newline after byte #{pos}"))
            })?;
        let line_bytes = &buffer[pos..pos + newline];
        pos += newline + 1;
        let line = std::str::from_utf8(line_bytes).map_err(|_| {
            GraphInfoError::MalformedLine(String::from_utf8_lossy(line_bytes).into_owned())
        })?;
        match classify_line(line)? {
            InfoLine::BlobSize(size) => break size,
            InfoLine::Scalar {
                namespace,
                key,
                value,
            } => match namespace {
                "graph" => {
                    let parsed = value
                        .parse()
                        .map_err(|_| GraphInfoError::MalformedLine(line.to_string()))?;
                    graph_props.insert(key.to_string(), parsed);
                }
                "image" => {
                    let parsed = value
                        .parse()
                        .map_err(|_| GraphInfoError::MalformedLine(line.to_string()))?;
                    image_props.insert(key.to_string(), parsed);
                }
                "value" => {
                    let parsed = parse_localized_float(value)
                        .ok_or_else(|| GraphInfoError::MalformedLine(line.to_string()))?;
                    value_props.insert(key.to_string(), parsed);
                }
                _ => {
                    extra.insert(format!("{namespace}_{key}"), value.to_string());
                }
            },
            InfoLine::Print { index, value } => {
                print.insert(index, PrintValue::classify(value));
            }
            InfoLine::Legend { index, value } => store_legend(&mut legend, index, value),
            InfoLine::Coords { index, values } => {
                trace!(index, ?values, "dropping diagnostic coords line");
            }
        }
    };

    let header_length = pos;
    let graph = if graph_props.is_empty() {
        None
    } else {
        Some(GraphDimensions::from_properties(&graph_props)?)
    };
    let image = if image_props.is_empty() {
        None
    } else {
        Some(ImageDimensions::from_properties(&image_props)?)
    };
    let value = if value_props.is_empty() {
        None
    } else {
        Some(ValueRange::from_properties(&value_props)?)
    };

    let content_type = format.parse::<ImageFormat>()?.content_type();

    // The declared blob size is trusted, not verified: a truncated
    // buffer yields a shorter inline image than declared.
    let blob = &buffer[header_length..];
    if blob.len() != image_size {
        warn!(
            declared = image_size,
            actual = blob.len(),
            "blob size marker does not match the trailing byte count"
        );
    }
    let raw = inline_image(blob, content_type);
    debug!(
        header_length,
        image_size,
        legend_entries = legend.len(),
        print_entries = print.len(),
        "parsed rrdgraph info header"
    );

    Ok(GraphInfo {
        legend,
        print,
        header_length,
        image_size,
        graph,
        image,
        value,
        extra,
        time_spent,
        format: format.to_ascii_lowercase(),
        content_type: content_type.to_string(),
        raw,
    })
}

/// Index gaps are not expected, but a gap fills with empty strings so
/// the `legend[N]` suffix keeps addressing slot N.
fn store_legend(legend: &mut Vec<String>, index: usize, value: &str) {
    if index < legend.len() {
        legend[index] = value.to_string();
    } else {
        legend.resize(index, String::new());
        legend.push(value.to_string());
    }
}
