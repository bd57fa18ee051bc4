//! HTML parsing (via `tl`) and rendering.
//!
//! Parsing keeps every node, including whitespace-only text and comments, and
//! reads attributes in source order, so rendering a parsed document changes
//! nothing but the attributes the pipeline touched (plus quoting, entity
//! spelling and the doctype).

use super::{AttrValue, Attrs, Element, Node, Token};
use crate::utils::html::{
    decode_entities, escape_attr, escape_text, is_raw_text_element, is_void_element,
    opening_tag_attrs, parse_attributes,
};

// =============================================================================
// Parsing
// =============================================================================

/// Parse an HTML document or fragment into a root node.
pub fn parse(input: &str) -> Result<Node, String> {
    let dom = tl::parse(input, tl::ParserOptions::default()).map_err(|e| format!("{e:?}"))?;
    let parser = dom.parser();

    let mut children = Vec::new();
    if has_doctype(input) {
        // tl consumes the doctype without producing a node
        children.push(Node::doctype());
    }

    children.extend(
        dom.children()
            .iter()
            .filter_map(|handle| convert(*handle, parser, false)),
    );

    Ok(Node::root(children))
}

fn has_doctype(input: &str) -> bool {
    input
        .trim_start()
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"))
}

/// Convert a tl node handle to a tree node.
fn convert(handle: tl::NodeHandle, parser: &tl::Parser, raw_text: bool) -> Option<Node> {
    match handle.get(parser)? {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();

            // tl keeps attributes in a hash map, so re-read them from the source
            let source = tag.raw().as_utf8_str();
            let attrs = read_attrs(opening_tag_attrs(&source));

            let raw = is_raw_text_element(&name);
            let children = tag
                .children()
                .top()
                .iter()
                .filter_map(|child| convert(*child, parser, raw))
                .collect();

            Some(Node::element(Element {
                tag: name,
                attrs: Some(attrs),
                children,
                ..Default::default()
            }))
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            let value = if raw_text {
                text.into_owned()
            } else {
                decode_entities(&text).into_owned()
            };
            Some(Node::text(value))
        }
        tl::Node::Comment(bytes) => {
            let raw = bytes.as_utf8_str();
            let body = raw.strip_prefix("<!--").unwrap_or(&*raw);
            let body = body.strip_suffix("-->").unwrap_or(body);
            Some(Node::comment(body))
        }
    }
}

/// Build the attribute set. Names are lowercased and the first duplicate wins.
fn read_attrs(span: &str) -> Attrs {
    let mut attrs = Attrs::new();
    for (name, value) in parse_attributes(span) {
        let name = name.to_ascii_lowercase();
        if attrs.contains(&name) {
            continue;
        }
        let value = match value {
            Some(v) => AttrValue::Str(decode_entities(&v).into_owned()),
            None => AttrValue::Bool(true),
        };
        attrs.set(&name, value);
    }
    attrs
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a tree back to HTML.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_node(node, &mut out, false);
    out
}

fn render_node(node: &Node, out: &mut String, raw_text: bool) {
    match node {
        Node::Element(elem) => render_element(elem, out),
        Node::Text(text) => {
            let value = text.value.as_deref().unwrap_or_default();
            if raw_text {
                out.push_str(value);
            } else {
                out.push_str(&escape_text(value));
            }
        }
        Node::Other(other) => match other.kind.as_str() {
            "doctype" => out.push_str("<!doctype html>"),
            "comment" => {
                out.push_str("<!--");
                out.push_str(other.value.as_deref().unwrap_or_default());
                out.push_str("-->");
            }
            _ => {
                if let Some(value) = &other.value {
                    out.push_str(&escape_text(value));
                }
                for child in &other.children {
                    render_node(child, out, raw_text);
                }
            }
        },
    }
}

fn render_element(elem: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&elem.tag);
    if let Some(attrs) = &elem.attrs {
        for (name, value) in attrs.iter() {
            render_attr(name, value, out);
        }
    }
    out.push('>');

    if is_void_element(&elem.tag) {
        return;
    }

    let raw = is_raw_text_element(&elem.tag);
    for child in &elem.children {
        render_node(child, out, raw);
    }

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

fn render_attr(name: &str, value: &AttrValue, out: &mut String) {
    // hast property name for the class attribute
    let name = if name == "className" { "class" } else { name };

    let text = match value {
        AttrValue::Null | AttrValue::Bool(false) => return,
        AttrValue::Bool(true) => {
            out.push(' ');
            out.push_str(name);
            return;
        }
        AttrValue::Str(s) => s.clone(),
        AttrValue::Number(n) => n.to_string(),
        AttrValue::List(tokens) => tokens
            .iter()
            .map(|token| match token {
                Token::Str(s) => s.clone(),
                Token::Number(n) => n.to_string(),
                Token::Bool(b) => b.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" "),
    };

    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(&text));
    out.push('"');
}
