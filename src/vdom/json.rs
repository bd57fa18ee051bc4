//! hast JSON reading and writing.
//!
//! Nodes are (de)serialized through a flat wire struct mirroring the unist
//! shape: `type`, `tagName`, `properties`, `children`, `value`. Any other
//! field (`position`, `data`, ...) is carried through untouched.

use serde::{Deserialize, Serialize};

use super::{Attrs, Element, Extra, Node, Other, Text};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tag_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<Attrs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<WireNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(flatten)]
    extra: Extra,
}

impl From<WireNode> for Node {
    fn from(wire: WireNode) -> Self {
        let children = || {
            wire.children
                .unwrap_or_default()
                .into_iter()
                .map(Node::from)
                .collect()
        };

        match wire.kind.as_str() {
            "element" => Node::element(Element {
                tag: wire.tag_name.unwrap_or_default(),
                attrs: wire.properties,
                children: children(),
                extra: wire.extra,
            }),
            "text" => Node::Text(Text {
                value: wire.value,
                extra: wire.extra,
            }),
            _ => Node::Other(Other {
                kind: wire.kind.clone(),
                value: wire.value,
                children: children(),
                extra: wire.extra,
            }),
        }
    }
}

impl From<&Node> for WireNode {
    fn from(node: &Node) -> Self {
        let children = |nodes: &[Node]| Some(nodes.iter().map(WireNode::from).collect());

        match node {
            Node::Element(elem) => Self {
                kind: "element".to_string(),
                tag_name: Some(elem.tag.clone()),
                properties: elem.attrs.clone(),
                children: children(&elem.children),
                value: None,
                extra: elem.extra.clone(),
            },
            Node::Text(text) => Self {
                kind: "text".to_string(),
                tag_name: None,
                properties: None,
                children: None,
                value: text.value.clone(),
                extra: text.extra.clone(),
            },
            Node::Other(other) => Self {
                kind: other.kind.clone(),
                tag_name: None,
                properties: None,
                // Literals (comment, raw) and doctype carry no children array
                children: if other.children.is_empty()
                    && (other.value.is_some() || other.kind == "doctype")
                {
                    None
                } else {
                    children(&other.children)
                },
                value: other.value.clone(),
                extra: other.extra.clone(),
            },
        }
    }
}

/// Parse a hast JSON tree.
pub fn parse(input: &str) -> serde_json::Result<Node> {
    let wire: WireNode = serde_json::from_str(input)?;
    Ok(Node::from(wire))
}

/// Serialize a tree to hast JSON.
pub fn render(node: &Node, pretty: bool) -> serde_json::Result<String> {
    let wire = WireNode::from(node);
    if pretty {
        serde_json::to_string_pretty(&wire)
    } else {
        serde_json::to_string(&wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::AttrValue;

    const SAMPLE: &str = r#"{
        "type": "root",
        "children": [
            {"type": "doctype"},
            {"type": "element", "tagName": "a",
             "properties": {"href": "/x", "className": ["foo"]},
             "children": [{"type": "text", "value": "1"}]},
            {"type": "comment", "value": "note"}
        ]
    }"#;

    #[test]
    fn test_parse_node_kinds() {
        let root = parse(SAMPLE).unwrap();
        assert_eq!(root.kind(), "root");

        let kinds: Vec<_> = root.children().iter().map(Node::kind).collect();
        assert_eq!(kinds, ["doctype", "element", "comment"]);

        let anchor = root.children()[1].as_element().unwrap();
        assert_eq!(anchor.tag, "a");
        assert_eq!(anchor.get_attr("href"), Some(&AttrValue::from("/x")));
    }

    #[test]
    fn test_parse_missing_properties() {
        let root = parse(r#"{"type":"element","tagName":"a","children":[]}"#).unwrap();
        assert!(root.as_element().unwrap().attrs.is_none());
    }

    #[test]
    fn test_parse_text_without_value() {
        let node = parse(r#"{"type":"text"}"#).unwrap();
        assert_eq!(node, Node::Text(Text::default()));
    }

    #[test]
    fn test_render_shape() {
        let root = parse(SAMPLE).unwrap();
        let out = render(&root, false).unwrap();

        assert!(out.starts_with(r#"{"type":"root","children":[{"type":"doctype"},"#));
        assert!(out.contains(r#""tagName":"a","properties":{"href":"/x","className":["foo"]}"#));
        assert!(out.contains(r#"{"type":"comment","value":"note"}"#));
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let input = r#"{"type":"root","children":[{"type":"doctype"},{"type":"element","tagName":"a","properties":{"tabIndex":2,"className":["x"]},"children":[{"type":"text","value":"1","position":{"start":{"line":1,"column":4}}}],"data":{"id":7}}],"position":{"start":{"line":1,"column":1,"offset":0}}}"#;
        let root = parse(input).unwrap();
        assert_eq!(render(&root, false).unwrap(), input);
    }

    #[test]
    fn test_empty_root_keeps_children_array() {
        let root = parse(r#"{"type":"root"}"#).unwrap();
        assert_eq!(render(&root, false).unwrap(), r#"{"type":"root","children":[]}"#);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("not json").is_err());
        assert!(parse(r#"{"children":[]}"#).is_err());
    }
}
