//! Inline `data:` URI rendering for image blobs.

use base64::Engine as _;

/// Render raw image bytes as a self-contained `data:` URI.
///
/// SVG documents are valid UTF-8 and consume less space without
/// base64, so they are embedded as escaped text; every other content
/// type is base64-encoded.
pub fn inline_image(raw: &[u8], content_type: &str) -> String {
    if content_type == "image/svg+xml" {
        let svg = String::from_utf8_lossy(raw);
        format!("data:{};utf8,{}", content_type, svg_data_string(&svg))
    } else {
        format!(
            "data:{};base64,{}",
            content_type,
            base64::engine::general_purpose::STANDARD.encode(raw)
        )
    }
}

/// Prepare an SVG document for embedding in a `data:` URI.
///
/// Removes newlines, percent-escapes single quotes, then replaces
/// double quotes with single quotes and finally escapes only the few
/// essential characters (`<`, `>`, `#`). The passes run in that order:
/// by the time double quotes are rewritten, every literal single quote
/// is already `%27`, so the two quote kinds never collide.
pub fn svg_data_string(svg: &str) -> String {
    svg.replace('\r', "")
        .replace('\n', "")
        .replace('\'', "%27")
        .replace('"', "'")
        .replace('<', "%3C")
        .replace('>', "%3E")
        .replace('#', "%23")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_escaping_order() {
        // The literal single quote is already `%27` by the time double
        // quotes are rewritten to single quotes.
        let svg = "<svg>\"it's\"</svg>\r\n";
        assert_eq!(
            inline_image(svg.as_bytes(), "image/svg+xml"),
            "data:image/svg+xml;utf8,%3Csvg%3E'it%27s'%3C/svg%3E"
        );
    }

    #[test]
    fn test_svg_hash_escaped() {
        assert_eq!(svg_data_string("fill=\"#fff\""), "fill='%23fff'");
    }

    #[test]
    fn test_svg_escaping_does_not_double_escape() {
        // `%` is not itself escaped, so re-running the substitution on
        // already-escaped text must not mutate the `%27`/`%3C`/`%3E`/
        // `%23` sequences it produced.
        let escaped = svg_data_string("<svg>it's #1</svg>\n");
        assert_eq!(escaped, "%3Csvg%3Eit%27s %231%3C/svg%3E");
        assert_eq!(svg_data_string(&escaped), escaped);
    }

    #[test]
    fn test_base64_for_binary_formats() {
        let uri = inline_image(&[0xDE, 0xAD, 0xBE, 0xEF], "image/png");
        assert_eq!(uri, "data:image/png;base64,3q2+7w==");
    }

    #[test]
    fn test_base64_empty_blob() {
        assert_eq!(inline_image(&[], "application/pdf"), "data:application/pdf;base64,");
    }
}
