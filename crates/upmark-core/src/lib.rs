//! upmark-core - HTML element tree and rendering
//!
//! This crate provides the core data structures for building a tree of HTML
//! element nodes and rendering it to an HTML string. It is used by `upmark`,
//! which converts styled text spans into leaf nodes of this tree.
//!
//! # Architecture
//!
//! ```text
//! Styled spans ──convert──▶ ┌───────────┐
//!                           │           │
//!                           │ HTML tree │ ──render──▶ HTML String
//! Manual assembly ─────────▶│           │
//!                           └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use upmark_core::{LeafNode, ParentNode};
//!
//! let tree = ParentNode::new(
//!     "div",
//!     vec![
//!         LeafNode::new(Some("span"), "child").unwrap().into(),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(tree.render(), "<div><span>child</span></div>");
//! ```

mod node;
mod render;

pub use node::{HtmlNode, LeafNode, ParentNode};

/// Error type for node construction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NodeError {
    /// A leaf node was constructed with an empty value
    #[error("leaf node must have a value")]
    MissingValue,

    /// A parent or void leaf node was constructed without a tag
    #[error("node must have a tag")]
    MissingTag,
}

pub type Result<T> = std::result::Result<T, NodeError>;
