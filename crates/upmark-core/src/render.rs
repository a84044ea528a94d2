//! HTML tree rendering.
//!
//! Converts a node tree into an HTML string. Rendering is a pure read over
//! the tree: rendering the same node twice yields identical output.

use std::fmt;

use indexmap::IndexMap;

use crate::node::{HtmlNode, LeafNode, ParentNode};

impl HtmlNode {
    /// Render this node and everything below it to an HTML string.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(64);
        render_node(self, &mut output);
        output
    }
}

impl LeafNode {
    /// Render this leaf to an HTML string.
    ///
    /// A leaf without a tag renders as its raw value, with no wrapping
    /// element.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(64);
        render_leaf(self, &mut output);
        output
    }
}

impl ParentNode {
    /// Render this node and everything below it to an HTML string.
    ///
    /// Children are rendered depth-first, left to right, and concatenated
    /// with no separator.
    pub fn render(&self) -> String {
        let mut output = String::with_capacity(256);
        render_parent(self, &mut output);
        output
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn render_node(node: &HtmlNode, out: &mut String) {
    match node {
        HtmlNode::Leaf(leaf) => render_leaf(leaf, out),
        HtmlNode::Parent(parent) => render_parent(parent, out),
    }
}

fn render_leaf(leaf: &LeafNode, out: &mut String) {
    let Some(tag) = leaf.tag() else {
        out.push_str(leaf.value());
        return;
    };

    out.push('<');
    out.push_str(tag);
    render_attrs(leaf.attrs(), out);
    out.push('>');
    out.push_str(leaf.value());
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn render_parent(parent: &ParentNode, out: &mut String) {
    out.push('<');
    out.push_str(parent.tag());
    render_attrs(parent.attrs(), out);
    out.push('>');

    for child in parent.children() {
        render_node(child, out);
    }

    out.push_str("</");
    out.push_str(parent.tag());
    out.push('>');
}

/// Render attributes as ` name="value"` pairs in insertion order.
///
/// An empty map renders as an empty string. Values are emitted verbatim;
/// callers are responsible for supplying attribute-safe strings.
fn render_attrs(attrs: &IndexMap<String, String>, out: &mut String) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}
