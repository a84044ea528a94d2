//! Convert styled text spans to HTML leaf nodes.
//!
//! This module maps each [`TextSpan`] kind to its HTML rendering unit. The
//! match is exhaustive over [`SpanKind`], so adding a kind is a single-arm
//! addition the compiler enforces.

use upmark_core::LeafNode;

use crate::span::{SpanKind, TextSpan};
use crate::{Result, UpmarkError};

/// Convert a text span to an HTML leaf node.
///
/// | kind   | tag    | value     | attributes                      |
/// |--------|--------|-----------|---------------------------------|
/// | Normal | none   | span text | none                            |
/// | Bold   | `b`    | span text | none                            |
/// | Italic | `i`    | span text | none                            |
/// | Code   | `code` | span text | none                            |
/// | Link   | `a`    | span text | `href` = span url               |
/// | Image  | `img`  | empty     | `src` = span url, `alt` = text  |
///
/// Link and image spans require a url; converting one without a url fails
/// with [`UpmarkError::MissingUrl`].
pub fn span_to_leaf(span: &TextSpan) -> Result<LeafNode> {
    let leaf = match span.kind() {
        SpanKind::Normal => LeafNode::new(None, span.text())?,
        SpanKind::Bold => LeafNode::new(Some("b"), span.text())?,
        SpanKind::Italic => LeafNode::new(Some("i"), span.text())?,
        SpanKind::Code => LeafNode::new(Some("code"), span.text())?,
        SpanKind::Link => {
            let url = require_url(span)?;
            LeafNode::with_attrs(Some("a"), span.text(), vec![("href", url)])?
        }
        SpanKind::Image => {
            let url = require_url(span)?;
            LeafNode::void("img", vec![("src", url), ("alt", span.text())])?
        }
    };

    Ok(leaf)
}

fn require_url(span: &TextSpan) -> Result<&str> {
    span.url()
        .ok_or(UpmarkError::MissingUrl { kind: span.kind() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use upmark_core::NodeError;

    #[test]
    fn test_normal_span_has_no_tag() {
        let leaf = span_to_leaf(&TextSpan::new("plain", SpanKind::Normal)).unwrap();
        assert_eq!(leaf.tag(), None);
        assert_eq!(leaf.render(), "plain");
    }

    #[test]
    fn test_styled_spans_pick_their_tag() {
        let bold = span_to_leaf(&TextSpan::new("loud", SpanKind::Bold)).unwrap();
        assert_eq!(bold.render(), "<b>loud</b>");

        let italic = span_to_leaf(&TextSpan::new("slanted", SpanKind::Italic)).unwrap();
        assert_eq!(italic.render(), "<i>slanted</i>");

        let code = span_to_leaf(&TextSpan::new("x = 1", SpanKind::Code)).unwrap();
        assert_eq!(code.render(), "<code>x = 1</code>");
    }

    #[test]
    fn test_link_span() {
        let span = TextSpan::with_url("t", SpanKind::Link, "http://x");
        let leaf = span_to_leaf(&span).unwrap();
        assert_eq!(leaf.tag(), Some("a"));
        assert_eq!(leaf.value(), "t");
        assert_eq!(leaf.attr("href"), Some("http://x"));
        assert_eq!(leaf.render(), "<a href=\"http://x\">t</a>");
    }

    #[test]
    fn test_image_span_has_empty_value() {
        let span = TextSpan::with_url("alt text", SpanKind::Image, "http://img");
        let leaf = span_to_leaf(&span).unwrap();
        assert_eq!(leaf.tag(), Some("img"));
        assert_eq!(leaf.value(), "");
        assert_eq!(leaf.attr("src"), Some("http://img"));
        assert_eq!(leaf.attr("alt"), Some("alt text"));
        // src renders before alt
        assert_eq!(
            leaf.render(),
            "<img src=\"http://img\" alt=\"alt text\"></img>"
        );
    }

    #[test]
    fn test_link_without_url_fails() {
        let err = span_to_leaf(&TextSpan::new("t", SpanKind::Link)).unwrap_err();
        assert!(matches!(
            err,
            UpmarkError::MissingUrl {
                kind: SpanKind::Link
            }
        ));
    }

    #[test]
    fn test_image_without_url_fails() {
        let err = span_to_leaf(&TextSpan::new("alt", SpanKind::Image)).unwrap_err();
        assert!(matches!(
            err,
            UpmarkError::MissingUrl {
                kind: SpanKind::Image
            }
        ));
    }

    #[test]
    fn test_empty_text_fails_for_non_image_kinds() {
        let err = span_to_leaf(&TextSpan::new("", SpanKind::Bold)).unwrap_err();
        assert!(matches!(err, UpmarkError::Node(NodeError::MissingValue)));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let span = TextSpan::with_url("t", SpanKind::Link, "http://x");
        assert_eq!(span_to_leaf(&span).unwrap(), span_to_leaf(&span).unwrap());
    }
}
