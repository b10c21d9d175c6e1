use std::fmt;
use std::str::FromStr;

use crate::error::GraphInfoError;

/// Output formats rrdtool can render, with their MIME content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Svg,
    Png,
    Json,
    JsonTime,
    Csv,
    Ssv,
    Tsv,
    Xml,
    XmlEnum,
    Pdf,
    Eps,
}

impl ImageFormat {
    /// MIME content type for this format.
    pub fn content_type(self) -> &'static str {
        match self {
            ImageFormat::Svg => "image/svg+xml",
            ImageFormat::Png => "image/png",
            ImageFormat::Json | ImageFormat::JsonTime => "application/json",
            ImageFormat::Csv | ImageFormat::Ssv | ImageFormat::Tsv => "text/csv",
            ImageFormat::Xml | ImageFormat::XmlEnum => "application/xml",
            ImageFormat::Pdf => "application/pdf",
            ImageFormat::Eps => "application/postscript",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = GraphInfoError;

    /// Case-insensitive; fails with `UnsupportedFormat` naming the input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SVG" => Ok(ImageFormat::Svg),
            "PNG" => Ok(ImageFormat::Png),
            "JSON" => Ok(ImageFormat::Json),
            "JSONTIME" => Ok(ImageFormat::JsonTime),
            "CSV" => Ok(ImageFormat::Csv),
            "SSV" => Ok(ImageFormat::Ssv),
            "TSV" => Ok(ImageFormat::Tsv),
            "XML" => Ok(ImageFormat::Xml),
            "XMLENUM" => Ok(ImageFormat::XmlEnum),
            "PDF" => Ok(ImageFormat::Pdf),
            "EPS" => Ok(ImageFormat::Eps),
            _ => Err(GraphInfoError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Json => "json",
            ImageFormat::JsonTime => "jsontime",
            ImageFormat::Csv => "csv",
            ImageFormat::Ssv => "ssv",
            ImageFormat::Tsv => "tsv",
            ImageFormat::Xml => "xml",
            ImageFormat::XmlEnum => "xmlenum",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Eps => "eps",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_table() {
        assert_eq!(ImageFormat::Svg.content_type(), "image/svg+xml");
        assert_eq!(ImageFormat::Png.content_type(), "image/png");
        assert_eq!(ImageFormat::Json.content_type(), "application/json");
        assert_eq!(ImageFormat::JsonTime.content_type(), "application/json");
        assert_eq!(ImageFormat::Csv.content_type(), "text/csv");
        assert_eq!(ImageFormat::Ssv.content_type(), "text/csv");
        assert_eq!(ImageFormat::Tsv.content_type(), "text/csv");
        assert_eq!(ImageFormat::Xml.content_type(), "application/xml");
        assert_eq!(ImageFormat::XmlEnum.content_type(), "application/xml");
        assert_eq!(ImageFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(ImageFormat::Eps.content_type(), "application/postscript");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("svg".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
        assert_eq!("SVG".parse::<ImageFormat>().unwrap(), ImageFormat::Svg);
        assert_eq!("Png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!(
            "jsontime".parse::<ImageFormat>().unwrap(),
            ImageFormat::JsonTime
        );
    }

    #[test]
    fn test_unknown_format_names_the_input() {
        let err = "foo".parse::<ImageFormat>().unwrap_err();
        match err {
            GraphInfoError::UnsupportedFormat(name) => assert_eq!(name, "foo"),
            other => panic!("Expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(ImageFormat::JsonTime.to_string(), "jsontime");
        assert_eq!(ImageFormat::Eps.to_string(), "eps");
    }
}
