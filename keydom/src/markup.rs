//! HTML-like serialization of a node tree.
//!
//! Keys and fragments are structural only and leave no trace in the output.
//! Attributes whose names cannot be written as markup are skipped.

use crate::attrs::is_valid_name;
use crate::element::{Content, Node};

/// Render a tree on a single line.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out, None);
    out
}

/// Render a tree with one element per line, indented two spaces per level.
pub fn render_pretty(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out, Some(0));
    out
}

fn write_node(node: &Node, out: &mut String, depth: Option<usize>) {
    match &node.content {
        Content::Empty => {}
        Content::Text(text) => {
            indent(out, depth);
            out.push_str(&escape(text));
            newline(out, depth);
        }
        Content::Fragment(children) => {
            for child in children {
                write_node(child, out, depth);
            }
        }
        Content::Element {
            tag,
            attrs,
            children,
        } => {
            indent(out, depth);
            out.push('<');
            out.push_str(tag.name());
            for (name, value) in attrs.iter() {
                if !is_valid_name(name) {
                    log::warn!("skipping attribute {name:?} on <{tag}>: not a valid name");
                    continue;
                }
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape(value));
                out.push('"');
            }
            out.push('>');
            newline(out, depth);

            for child in children {
                write_node(child, out, depth.map(|d| d + 1));
            }

            indent(out, depth);
            out.push_str("</");
            out.push_str(tag.name());
            out.push('>');
            newline(out, depth);
        }
    }
}

fn indent(out: &mut String, depth: Option<usize>) {
    if let Some(depth) = depth {
        out.extend(std::iter::repeat_n("  ", depth));
    }
}

fn newline(out: &mut String, depth: Option<usize>) {
    if depth.is_some() {
        out.push('\n');
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
