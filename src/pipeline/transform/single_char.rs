//! Single-character link marker.
//!
//! Anchors whose trimmed visible text is exactly one character (`×`, `→`,
//! `1`, ...) get the `single-char-link` class so stylesheets can give them a
//! larger hit area.
//!
//! The marker is appended, never deduplicated: running the transform twice
//! over the same tree yields the marker twice.

use super::text::{extract_text, is_single_char, trim_text};
use crate::pipeline::Transform;
use crate::vdom::{AttrValue, Document, Element, Format, Node, Token, modify_by_tag};

/// Class token added to matching anchors.
pub const MARKER: &str = "single-char-link";

/// Create the transform. Takes no configuration.
///
/// ```ignore
/// let doc = Pipeline::new(doc).pipe(single_char_link()).into_inner();
/// ```
pub fn single_char_link() -> SingleCharLink {
    SingleCharLink
}

/// Marks anchors whose visible text is a single character.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleCharLink;

impl SingleCharLink {
    /// Annotate every anchor reachable from `root`, in place.
    ///
    /// A fresh class attribute is named after `format`; an existing `class`
    /// or `className` attribute is reused whatever the format.
    pub fn apply(&self, root: &mut Node, format: Format) {
        modify_by_tag(root, "a", |anchor| annotate(anchor, format));
    }
}

impl Transform for SingleCharLink {
    fn transform(self, mut doc: Document) -> Document {
        self.apply(&mut doc.root, doc.format);
        doc
    }
}

/// Whether `elem` is an anchor whose trimmed visible text is one character.
pub fn is_single_char_anchor(elem: &Element) -> bool {
    if !elem.is_tag("a") {
        return false;
    }
    let text: String = elem.children.iter().map(extract_text).collect();
    is_single_char(trim_text(&text))
}

/// Append the marker to `anchor` if its trimmed text is one character.
fn annotate(anchor: &mut Element, format: Format) {
    if !is_single_char_anchor(anchor) {
        return;
    }

    let attrs = anchor.attrs_mut();
    let name = ["class", "className"]
        .into_iter()
        .find(|name| attrs.contains(name))
        .unwrap_or(format.class_attr());

    let mut classes = normalize_class(attrs.get(name));
    classes.push(MARKER.to_string());
    attrs.set(name, classes);
}

/// Normalize a class value to an ordered list of string tokens.
///
/// A single string stays one token even when it contains spaces.
pub fn normalize_class(value: Option<&AttrValue>) -> Vec<String> {
    match value {
        Some(AttrValue::Str(s)) => vec![s.clone()],
        Some(AttrValue::List(tokens)) => tokens
            .iter()
            .filter_map(Token::as_str)
            .map(str::to_string)
            .collect(),
        Some(AttrValue::Null | AttrValue::Bool(_) | AttrValue::Number(_)) | None => Vec::new(),
    }
}

/// Anchors currently carrying the marker, in document order.
pub fn marked_anchors(root: &Node) -> Vec<&Element> {
    let mut found = Vec::new();
    crate::vdom::walk(root, &mut |node| {
        if let Node::Element(elem) = node
            && elem.is_tag("a")
            && marker_count(elem) > 0
        {
            found.push(&**elem);
        }
    });
    found
}

/// Number of marker tokens on an element's class attribute.
pub fn marker_count(elem: &Element) -> usize {
    ["class", "className"]
        .into_iter()
        .map(|name| {
            normalize_class(elem.get_attr(name))
                .iter()
                .filter(|token| *token == MARKER)
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::Attrs;

    fn anchor(attrs: Option<Attrs>, children: Vec<Node>) -> Node {
        let mut elem = Element::new("a").with_children(children);
        elem.attrs = attrs;
        Node::element(elem)
    }

    fn run(node: Node) -> Node {
        let doc = Document::new(Node::root(vec![node]), Format::Json);
        let mut doc = single_char_link().transform(doc);
        doc.root.children_mut().unwrap().remove(0)
    }

    fn class_of(node: &Node) -> Option<&AttrValue> {
        node.as_element().unwrap().get_attr("className")
    }

    #[test]
    fn test_single_text_child() {
        let out = run(anchor(None, vec![Node::text("1")]));
        assert_eq!(class_of(&out), Some(&AttrValue::from(vec![MARKER])));
    }

    #[test]
    fn test_string_class_with_padding() {
        let out = run(anchor(
            Some(Attrs::from([("className", "foo")])),
            vec![Node::text(" A ")],
        ));
        assert_eq!(class_of(&out), Some(&AttrValue::from(vec!["foo", MARKER])));
    }

    #[test]
    fn test_two_chars_unchanged() {
        let attrs = Attrs::from([("className", vec!["foo", "bar"])]);
        let out = run(anchor(Some(attrs.clone()), vec![Node::text("ab")]));
        assert_eq!(out.as_element().unwrap().attrs, Some(attrs));
    }

    #[test]
    fn test_nested_single_char() {
        let em = Element::new("em").with_children(vec![Node::text("×")]);
        let out = run(anchor(None, vec![Node::element(em)]));
        assert_eq!(class_of(&out), Some(&AttrValue::from(vec![MARKER])));
    }

    #[test]
    fn test_no_text_unchanged() {
        let img = Element::new("img").with_attrs(Attrs::from([("src", "/x.png")]));
        let out = run(anchor(None, vec![Node::element(img)]));
        assert!(out.as_element().unwrap().attrs.is_none());
    }

    #[test]
    fn test_whitespace_only_unchanged() {
        let out = run(anchor(None, vec![Node::text("   ")]));
        assert!(out.as_element().unwrap().attrs.is_none());
    }

    #[test]
    fn test_non_anchor_ignored() {
        let span = Element::new("span").with_children(vec![Node::text("x")]);
        let out = run(Node::element(span.clone()));
        assert_eq!(out, Node::element(span));
    }

    #[test]
    fn test_not_idempotent() {
        let doc = Document::new(
            Node::root(vec![anchor(None, vec![Node::text("1")])]),
            Format::Json,
        );
        let doc = single_char_link().transform(doc);
        let doc = single_char_link().transform(doc);

        let a = doc.root.children()[0].as_element().unwrap();
        assert_eq!(a.get_attr("className"), Some(&AttrValue::from(vec![MARKER, MARKER])));
        assert_eq!(marker_count(a), 2);
    }

    #[test]
    fn test_creates_attribute_set() {
        let out = run(anchor(None, vec![Node::text("1")]));
        let attrs = out.as_element().unwrap().attrs.as_ref().unwrap();
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_list_class_drops_non_strings() {
        let attrs = Attrs::from([(
            "className",
            AttrValue::List(vec![
                Token::Str("a".into()),
                Token::Number(3u64.into()),
                Token::Bool(true),
                Token::Str("b".into()),
            ]),
        )]);
        let out = run(anchor(Some(attrs), vec![Node::text("?")]));
        assert_eq!(class_of(&out), Some(&AttrValue::from(vec!["a", "b", MARKER])));
    }

    #[test]
    fn test_normalize_class_shapes() {
        assert!(normalize_class(None).is_empty());
        assert!(normalize_class(Some(&AttrValue::Null)).is_empty());
        assert!(normalize_class(Some(&AttrValue::Bool(true))).is_empty());
        assert!(normalize_class(Some(&AttrValue::Number(4u64.into()))).is_empty());
        assert_eq!(normalize_class(Some(&AttrValue::from("x y"))), ["x y"]);
    }

    #[test]
    fn test_scalar_class_replaced() {
        let attrs = Attrs::from([("className", AttrValue::Bool(true))]);
        let out = run(anchor(Some(attrs), vec![Node::text("1")]));
        assert_eq!(class_of(&out), Some(&AttrValue::from(vec![MARKER])));
    }

    #[test]
    fn test_html_class_attribute_reused() {
        let attrs = Attrs::from([("href", "/"), ("class", "nav")]);
        let mut root = Node::root(vec![anchor(Some(attrs), vec![Node::text("←")])]);
        single_char_link().apply(&mut root, Format::Html);

        let a = root.children()[0].as_element().unwrap();
        assert_eq!(a.get_attr("class"), Some(&AttrValue::from(vec!["nav", MARKER])));
        assert!(a.get_attr("className").is_none());
    }

    #[test]
    fn test_fresh_attribute_follows_format() {
        let mut root = Node::root(vec![anchor(None, vec![Node::text("1")])]);
        single_char_link().apply(&mut root, Format::Html);
        let a = root.children()[0].as_element().unwrap();
        assert!(a.get_attr("class").is_some());
    }

    #[test]
    fn test_nested_anchors_and_other_nodes() {
        let inner = anchor(None, vec![Node::text("2")]);
        let outer = anchor(None, vec![Node::text("1"), inner]);
        let mut root = Node::root(vec![
            Node::doctype(),
            Node::comment("a"),
            outer,
        ]);
        single_char_link().apply(&mut root, Format::Json);

        // outer reads "12", inner reads "2"
        let marked = marked_anchors(&root);
        assert_eq!(marked.len(), 1);
        assert_eq!(extract_text(&Node::element(marked[0].clone())), "2");
    }

    #[test]
    fn test_root_anchor_matched() {
        let mut root = anchor(None, vec![Node::text("x")]);
        single_char_link().apply(&mut root, Format::Json);
        assert_eq!(marked_anchors(&root).len(), 1);
    }

    #[test]
    fn test_is_single_char_anchor() {
        let a = Element::new("a").with_children(vec![Node::text("\t→\n")]);
        assert!(is_single_char_anchor(&a));
        let span = Element::new("span").with_children(vec![Node::text("→")]);
        assert!(!is_single_char_anchor(&span));
    }

    #[test]
    fn test_next_line_is_not_trimmed() {
        let out = run(anchor(None, vec![Node::text(" \u{85} ")]));
        assert_eq!(class_of(&out), Some(&AttrValue::from(vec![MARKER])));

        let out = run(anchor(None, vec![Node::text("\u{85}x")]));
        assert!(out.as_element().unwrap().attrs.is_none());
    }

    #[test]
    fn test_no_anchors_is_noop() {
        let mut root = Node::root(vec![Node::text("1"), Node::comment("x")]);
        let before = root.clone();
        single_char_link().apply(&mut root, Format::Html);
        assert_eq!(root, before);
    }
}
