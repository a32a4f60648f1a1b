//! Response parsing into the owned element tree.
//!
//! [`ResponseParser`] turns a raw [`Response`] into a logical root
//! [`ElementRef`], or nothing: non-2xx responses are never parsed, and
//! malformed bodies are logged (with a best-effort diagnostic snippet) and
//! surfaced as `None`. Schema dispatch happens elsewhere; this module only
//! produces the tree.

use roxmltree::TextPos;
use scraper::{ElementRef as HtmlElement, Html};

use crate::error::{ClientError, Result};
use crate::http::Response;
use crate::node::{Element, ElementRef, ParserMode};

/// Parses response bodies in one of two modes.
///
/// Strict mode parses the body directly as XML and uses the document root
/// as the logical root. Tolerant mode parses as HTML, where the remote API
/// contract guarantees the payload arrives as the single element inside
/// `<html><body>...</body></html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseParser {
    mode: ParserMode,
}

impl ResponseParser {
    /// Create a parser for the given mode.
    #[must_use]
    pub fn new(mode: ParserMode) -> Self {
        Self { mode }
    }

    /// The active parser mode.
    #[must_use]
    pub fn mode(&self) -> ParserMode {
        self.mode
    }

    /// Parse a response into its logical root.
    ///
    /// Returns `None` without touching the body when the status code is
    /// outside [200, 300). Parse failures are logged together with a
    /// diagnostic snippet of the offending line (when the error carries a
    /// position) and also yield `None`.
    ///
    /// # Panics
    /// In tolerant mode, panics when the parsed body does not contain
    /// exactly one top-level element; see [`Self::parse_content`].
    #[must_use]
    pub fn parse(&self, response: &Response) -> Option<ElementRef> {
        if !response.is_success() {
            return None;
        }

        match self.parse_content(&response.content) {
            Ok(root) => Some(root),
            Err(err) => {
                let snippet = match &err {
                    ClientError::XmlParse(parse_err) => {
                        error_snippet(&response.text, parse_err.pos())
                    }
                    _ => None,
                };
                tracing::error!(
                    error = %err,
                    snippet = ?snippet,
                    url = %response.url,
                    "Unable to parse response"
                );
                None
            }
        }
    }

    /// Parse raw body bytes into the logical root element.
    ///
    /// # Errors
    /// Returns an error for non-UTF-8 bodies and, in strict mode, for
    /// malformed XML. The tolerant HTML parser accepts any input.
    ///
    /// # Panics
    /// In tolerant mode, panics when the body does not reduce to
    /// `<html><body><single-child/></body></html>`. The remote API always
    /// wraps real payloads in exactly one top-level element, so any other
    /// shape is a broken API contract rather than routine bad input.
    pub fn parse_content(&self, content: &[u8]) -> Result<ElementRef> {
        let text = std::str::from_utf8(content)?;

        match self.mode {
            ParserMode::Strict => {
                let doc = roxmltree::Document::parse(text)?;
                Ok(convert_xml(doc.root_element()).into_ref())
            }
            ParserMode::Tolerant => Ok(parse_tolerant(text)),
        }
    }
}

/// Convert a strict-XML node into an owned element, recursively.
///
/// Namespace prefixes are stripped from tag and attribute names.
fn convert_xml(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name(), ParserMode::Strict);

    for attr in node.attributes() {
        element = element.with_attribute(attr.name(), attr.value());
    }
    for child in node.children().filter(|child| child.is_element()) {
        element = element.with_child(convert_xml(child));
    }

    element
}

/// Parse a body as HTML and extract the single payload element.
fn parse_tolerant(text: &str) -> ElementRef {
    let html = Html::parse_document(text);
    let root = html.root_element();
    assert_eq!(
        root.value().name(),
        "html",
        "tolerant parse must produce an <html> root"
    );

    #[allow(clippy::expect_used)] // the HTML parser always synthesizes a <body>
    let body = root
        .children()
        .filter_map(HtmlElement::wrap)
        .find(|el| el.value().name() == "body")
        .expect("tolerant parse must produce a <body>");

    let payload: Vec<_> = body.children().filter_map(HtmlElement::wrap).collect();
    assert_eq!(
        payload.len(),
        1,
        "response body must wrap exactly one top-level element, found {}",
        payload.len()
    );

    #[allow(clippy::expect_used)] // length asserted above
    let logical_root = payload.into_iter().next().expect("payload element");
    convert_html(logical_root).into_ref()
}

/// Convert a tolerant-HTML element into an owned element, recursively.
fn convert_html(el: HtmlElement<'_>) -> Element {
    let mut element = Element::new(el.value().name(), ParserMode::Tolerant);

    for (name, value) in el.value().attrs() {
        element = element.with_attribute(name, value);
    }
    for child in el.children().filter_map(HtmlElement::wrap) {
        element = element.with_child(convert_html(child));
    }

    element
}

/// Extract a diagnostic snippet for a parse error position.
///
/// Finds the offending line in the response text and trims it to the
/// attribute value nearest after the failing column (bounded by quote
/// characters), falling back to the whole line. Extraction itself never
/// fails; anything it cannot locate yields `None`.
fn error_snippet(text: &str, pos: TextPos) -> Option<String> {
    let row = (pos.row as usize).checked_sub(1)?;
    let line = text.lines().nth(row)?;

    // Clamp the column into the line, backing up to a char boundary.
    let mut col = (pos.col as usize).saturating_sub(1);
    if col > line.len() {
        col = line.len();
    }
    while col > 0 && !line.is_char_boundary(col) {
        col -= 1;
    }

    // Prefer the attribute value containing the failure.
    if let Some(offset) = line[col..].find('"') {
        let start = col + offset;
        if let Some(len) = line[start + 1..].find('"') {
            let end = start + 1 + len;
            return Some(line[start..=end].to_string());
        }
    }

    Some(line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER_LIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaContainer size="1">
  <Server name="shield" host="10.0.0.5" port="32400" machineIdentifier="abc123" version="1.40.0"/>
</MediaContainer>"#;

    #[test]
    fn test_strict_parse_content() {
        let parser = ResponseParser::new(ParserMode::Strict);
        let root = parser.parse_content(SERVER_LIST.as_bytes()).unwrap();

        assert_eq!(root.tag(), "MediaContainer");
        assert_eq!(root.attribute("size"), Some("1"));
        assert_eq!(root.children().len(), 1);

        let server = &root.children()[0];
        assert_eq!(server.tag(), "Server");
        assert_eq!(server.attribute("machineIdentifier"), Some("abc123"));
        assert_eq!(server.attribute("machineidentifier"), None);
    }

    #[test]
    fn test_strict_parse_strips_namespaces() {
        let parser = ResponseParser::new(ParserMode::Strict);
        let root = parser
            .parse_content(br#"<m:Container xmlns:m="http://example.com"><m:Item/></m:Container>"#)
            .unwrap();

        assert_eq!(root.tag(), "Container");
        assert_eq!(root.children()[0].tag(), "Item");
    }

    #[test]
    fn test_strict_parse_malformed_is_error() {
        let parser = ResponseParser::new(ParserMode::Strict);
        assert!(parser.parse_content(b"<a><b></a>").is_err());
        assert!(parser.parse_content(b"not xml at all").is_err());
    }

    #[test]
    fn test_parse_skips_non_success_status() {
        let parser = ResponseParser::new(ParserMode::Strict);

        // Body is perfectly valid; the status gate must win.
        let response = Response::new(404, SERVER_LIST.as_bytes().to_vec(), "http://x/servers");
        assert!(parser.parse(&response).is_none());

        let response = Response::new(500, SERVER_LIST.as_bytes().to_vec(), "http://x/servers");
        assert!(parser.parse(&response).is_none());
    }

    #[test]
    fn test_parse_recovers_from_malformed_body() {
        let parser = ResponseParser::new(ParserMode::Strict);
        let response = Response::new(200, b"<a attr=oops></a>".to_vec(), "http://x/broken");

        assert!(parser.parse(&response).is_none());
    }

    #[test]
    fn test_parse_success() {
        let parser = ResponseParser::new(ParserMode::Strict);
        let response = Response::new(200, SERVER_LIST.as_bytes().to_vec(), "http://x/servers");

        let root = parser.parse(&response).unwrap();
        assert_eq!(root.tag(), "MediaContainer");
    }

    #[test]
    fn test_tolerant_parse_extracts_single_body_child() {
        let parser = ResponseParser::new(ParserMode::Tolerant);
        let root = parser
            .parse_content(br#"<html><body><item id="1"/></body></html>"#)
            .unwrap();

        assert_eq!(root.tag(), "item");
        assert_eq!(root.attribute("id"), Some("1"));
    }

    #[test]
    fn test_tolerant_parse_lowercases_names() {
        let parser = ResponseParser::new(ParserMode::Tolerant);
        let root = parser
            .parse_content(br#"<html><body><ITEM RatingKey="7"/></body></html>"#)
            .unwrap();

        assert_eq!(root.tag(), "item");
        assert_eq!(root.attribute("ratingkey"), Some("7"));
        assert_eq!(root.attribute("RatingKey"), Some("7"));
    }

    #[test]
    fn test_tolerant_parse_unwrapped_payload() {
        // The HTML parser synthesizes the html/body wrapper itself.
        let parser = ResponseParser::new(ParserMode::Tolerant);
        let root = parser
            .parse_content(br#"<MediaContainer size="0"></MediaContainer>"#)
            .unwrap();

        assert_eq!(root.tag(), "mediacontainer");
        assert_eq!(root.attribute("size"), Some("0"));
    }

    #[test]
    #[should_panic(expected = "exactly one top-level element")]
    fn test_tolerant_parse_empty_body_violates_contract() {
        let parser = ResponseParser::new(ParserMode::Tolerant);
        let _ = parser.parse_content(b"<html><body></body></html>");
    }

    #[test]
    #[should_panic(expected = "exactly one top-level element")]
    fn test_tolerant_parse_two_children_violates_contract() {
        let parser = ResponseParser::new(ParserMode::Tolerant);
        let _ = parser.parse_content(b"<html><body><a></a><b></b></body></html>");
    }

    #[test]
    fn test_error_snippet_trims_to_attribute_value() {
        let text = "<root>\n<item name=\"bro\u{fffd}ken value\" id=\"3\"/>\n</root>";
        // Position pointing at the attribute on line 2.
        let snippet = error_snippet(text, TextPos::new(2, 12));
        assert_eq!(snippet.as_deref(), Some("\"bro\u{fffd}ken value\""));
    }

    #[test]
    fn test_error_snippet_falls_back_to_line() {
        let text = "<root>\n<unquoted line here>\n</root>";
        let snippet = error_snippet(text, TextPos::new(2, 3));
        assert_eq!(snippet.as_deref(), Some("<unquoted line here>"));
    }

    #[test]
    fn test_error_snippet_missing_line_is_none() {
        let snippet = error_snippet("only one line", TextPos::new(9, 1));
        assert!(snippet.is_none());
    }

    #[test]
    fn test_error_snippet_column_past_line_end() {
        let text = "<a b=\"c\"/>";
        // Column far beyond the line still yields the whole line.
        let snippet = error_snippet(text, TextPos::new(1, 400));
        assert_eq!(snippet.as_deref(), Some("<a b=\"c\"/>"));
    }
}
