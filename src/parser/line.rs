// Line grammar for rrdgraph info headers

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, rest, verify},
    error::{Error, ErrorKind},
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::error::{GraphInfoError, Result};

/// A single classified header line.
#[derive(Debug, Clone, PartialEq)]
pub enum InfoLine<'a> {
    /// `image = BLOB_SIZE:<n>` — the last header line; the binary blob
    /// starts right after its newline.
    BlobSize(usize),
    /// `<namespace>_<key> = <value>`, e.g. `graph_left = 83`.
    Scalar {
        namespace: &'a str,
        key: &'a str,
        value: &'a str,
    },
    /// `print[N] = <value>`.
    Print { index: usize, value: &'a str },
    /// `legend[N] = <value>`.
    Legend { index: usize, value: &'a str },
    /// `coords[N] = <int>,<int>,...` — diagnostic output.
    Coords { index: usize, values: Vec<i64> },
}

/// Classify one header line (without its trailing newline).
///
/// Precedence: namespaced scalar, then `print[N]`, `legend[N]`,
/// `coords[N]`. Anything else is a `MalformedLine` carrying the line
/// content.
pub fn classify_line(line: &str) -> Result<InfoLine<'_>> {
    match all_consuming(alt((scalar_line, print_line, legend_line, coords_line)))(line) {
        Ok((_, info)) => Ok(info),
        Err(_) => Err(GraphInfoError::MalformedLine(line.to_string())),
    }
}

/// `<key> = <value>` with a lowercase key, value non-empty
fn key_value(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(
        take_while1(|c: char| c.is_ascii_lowercase() || c == '_'),
        tag(" = "),
        verify(rest, |v: &str| !v.is_empty()),
    )(input)
}

fn scalar_line(input: &str) -> IResult<&str, InfoLine<'_>> {
    let (remaining, (key, value)) = key_value(input)?;
    if key == "image" {
        // The blob marker shares the `image` prefix with the
        // `image_*` namespace but carries no underscore.
        if let Some(size) = value.strip_prefix("BLOB_SIZE:") {
            if let Ok(size) = size.parse() {
                return Ok((remaining, InfoLine::BlobSize(size)));
            }
        }
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    match key.split_once('_') {
        Some((namespace, key)) if !namespace.is_empty() => Ok((
            remaining,
            InfoLine::Scalar {
                namespace,
                key,
                value,
            },
        )),
        _ => Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
    }
}

/// `<keyword>[N] = <value>`, value non-empty
fn indexed_value<'a>(keyword: &'static str, input: &'a str) -> IResult<&'a str, (usize, &'a str)> {
    let (input, _) = tag(keyword)(input)?;
    let (input, index) = delimited(char('['), map_res(digit1, str::parse), char(']'))(input)?;
    let (input, _) = tag(" = ")(input)?;
    let (input, value) = verify(rest, |v: &str| !v.is_empty())(input)?;
    Ok((input, (index, value)))
}

fn print_line(input: &str) -> IResult<&str, InfoLine<'_>> {
    let (remaining, (index, value)) = indexed_value("print", input)?;
    Ok((remaining, InfoLine::Print { index, value }))
}

fn legend_line(input: &str) -> IResult<&str, InfoLine<'_>> {
    let (remaining, (index, value)) = indexed_value("legend", input)?;
    Ok((remaining, InfoLine::Legend { index, value }))
}

fn coords_line(input: &str) -> IResult<&str, InfoLine<'_>> {
    let (remaining, (index, value)) = indexed_value("coords", input)?;
    let mut values = Vec::new();
    for part in value.split(',') {
        match part.parse() {
            Ok(v) => values.push(v),
            Err(_) => return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify))),
        }
    }
    Ok((remaining, InfoLine::Coords { index, values }))
}
