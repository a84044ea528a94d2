//! Styled text spans.
//!
//! A [`TextSpan`] is a typed, immutable unit of styled text: the
//! intermediate representation this library converts to HTML. Spans carry no
//! behavior of their own; the converter in [`crate::convert`] maps each one
//! to a leaf node.

/// The styling applied to a text span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text with no wrapping element
    Normal,
    /// Bold text (`<b>`)
    Bold,
    /// Italic text (`<i>`)
    Italic,
    /// Inline code (`<code>`)
    Code,
    /// A hyperlink (`<a href>`); the span's url is the link target
    Link,
    /// An image (`<img>`); the span's text is the alt text
    Image,
}

/// A typed, immutable unit of styled text.
///
/// Equality is structural: two spans are equal when text, kind, and url all
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    text: String,
    kind: SpanKind,
    url: Option<String>,
}

impl TextSpan {
    /// Create a text span without a url
    pub fn new(text: &str, kind: SpanKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    /// Create a text span with a url, for [`SpanKind::Link`] and
    /// [`SpanKind::Image`]
    pub fn with_url(text: &str, kind: SpanKind, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: Some(url.to_string()),
        }
    }

    /// Get the span's text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the span's kind
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// Get the span's url, if any
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
