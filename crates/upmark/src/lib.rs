//! # upmark
//!
//! Convert styled text spans to HTML.
//!
//! A [`TextSpan`] is a small intermediate representation of inline styled
//! text: bold, italic, code, links, images, or plain text. This library
//! converts spans into leaf nodes of an HTML element tree and renders that
//! tree to an HTML string.
//!
//! ## Design
//!
//! The tree is deliberately minimal: two node kinds, built once and rendered
//! once. There is no parser here and no DOM; callers assemble the tree
//! themselves, typically from the output of some upstream inline tokenizer.
//!
//! - **Spans are data**: a span carries text, a kind, and an optional url.
//! - **Nodes are validated at construction**: a malformed node cannot be
//!   built, so rendering never fails.
//! - **Attribute order is preserved**: attributes render in the order they
//!   were supplied.
//!
//! ## Example
//!
//! ```rust
//! use upmark::{span_to_leaf, ParentNode, SpanKind, TextSpan};
//!
//! let spans = vec![
//!     TextSpan::new("Read the ", SpanKind::Normal),
//!     TextSpan::new("manual", SpanKind::Bold),
//!     TextSpan::with_url(" here", SpanKind::Link, "https://example.com/docs"),
//! ];
//!
//! let children = spans
//!     .iter()
//!     .map(|span| span_to_leaf(span).map(Into::into))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let paragraph = ParentNode::new("p", children).unwrap();
//! assert_eq!(
//!     paragraph.render(),
//!     "<p>Read the <b>manual</b><a href=\"https://example.com/docs\"> here</a></p>"
//! );
//! ```

mod convert;
mod span;

pub use convert::span_to_leaf;
pub use span::{SpanKind, TextSpan};
pub use upmark_core::{HtmlNode, LeafNode, NodeError, ParentNode};

/// Error type for span conversion
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UpmarkError {
    /// A link or image span was converted without a url
    #[error("{kind:?} span requires a url")]
    MissingUrl { kind: SpanKind },

    /// A node invariant was violated while building the leaf
    #[error(transparent)]
    Node(#[from] NodeError),
}

pub type Result<T> = std::result::Result<T, UpmarkError>;
