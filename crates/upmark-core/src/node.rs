//! HTML element tree nodes.
//!
//! Two node kinds make up the tree: [`LeafNode`] carries literal content and
//! [`ParentNode`] wraps an ordered sequence of child nodes. [`HtmlNode`] is
//! the sum of the two, so a parent's children can mix both kinds.
//!
//! Ownership flows strictly downward. A parent owns its children outright
//! and no node holds a reference back up the tree, so cycles cannot be
//! constructed.

use indexmap::IndexMap;

use crate::{NodeError, Result};

/// A node in the HTML tree, either a leaf or a parent.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    /// Literal content, optionally wrapped in a tag
    Leaf(LeafNode),
    /// A tag wrapping child nodes
    Parent(ParentNode),
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// A leaf node: literal content with no children.
///
/// A leaf without a tag renders as raw text. This is how plain text is
/// represented in the tree, so a leaf's value is required to be non-empty.
/// The one exception is [`LeafNode::void`], which builds empty-bodied
/// elements such as `img`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    tag: Option<String>,
    value: String,
    attrs: IndexMap<String, String>,
}

impl LeafNode {
    /// Create a leaf node with an optional tag and a non-empty value.
    ///
    /// Returns [`NodeError::MissingValue`] when `value` is empty.
    pub fn new(tag: Option<&str>, value: &str) -> Result<Self> {
        Self::with_attrs(tag, value, vec![])
    }

    /// Create a leaf node with attributes.
    ///
    /// Attributes keep the order they are given in; that order is preserved
    /// in the rendered output.
    pub fn with_attrs(tag: Option<&str>, value: &str, attrs: Vec<(&str, &str)>) -> Result<Self> {
        if value.is_empty() {
            return Err(NodeError::MissingValue);
        }

        Ok(Self {
            tag: tag.map(str::to_string),
            value: value.to_string(),
            attrs: collect_attrs(attrs),
        })
    }

    /// Create a leaf node with an empty value, for void-style elements.
    ///
    /// Elements like `img` carry all their content in attributes, so this is
    /// the one way to build a leaf with an empty body. The tag is mandatory
    /// here; an empty-valued, untagged leaf would render as nothing at all.
    pub fn void(tag: &str, attrs: Vec<(&str, &str)>) -> Result<Self> {
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }

        Ok(Self {
            tag: Some(tag.to_string()),
            value: String::new(),
            attrs: collect_attrs(attrs),
        })
    }

    /// Get the tag name, if any
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Get the literal content
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub(crate) fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }
}

/// A parent node: a tag wrapping an ordered sequence of children.
///
/// The tag is mandatory, unlike on [`LeafNode`]. The children sequence may
/// be empty, which renders as an empty body (`<div></div>`).
#[derive(Debug, Clone, PartialEq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attrs: IndexMap<String, String>,
}

impl ParentNode {
    /// Create a parent node with a tag and children.
    ///
    /// Returns [`NodeError::MissingTag`] when `tag` is empty.
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        Self::with_attrs(tag, children, vec![])
    }

    /// Create a parent node with attributes.
    pub fn with_attrs(tag: &str, children: Vec<HtmlNode>, attrs: Vec<(&str, &str)>) -> Result<Self> {
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }

        Ok(Self {
            tag: tag.to_string(),
            children,
            attrs: collect_attrs(attrs),
        })
    }

    /// Get the tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Get the child nodes in order
    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub(crate) fn attrs(&self) -> &IndexMap<String, String> {
        &self.attrs
    }
}

/// Build the attribute map, keeping insertion order. A later duplicate name
/// overwrites the value but keeps the original position.
fn collect_attrs(attrs: Vec<(&str, &str)>) -> IndexMap<String, String> {
    attrs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
