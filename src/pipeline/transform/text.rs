//! Visible text extraction.

use crate::vdom::Node;

/// Concatenate the text of a node and all its descendants.
///
/// Text nodes contribute their value; every other node contributes only
/// what its children do. No separator is inserted between siblings.
pub fn extract_text(node: &Node) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text.value.as_deref().unwrap_or_default()),
        _ => {
            for child in node.children() {
                push_text(child, out);
            }
        }
    }
}

/// Trim whitespace the way browsers' `String.prototype.trim` does:
/// Unicode `White_Space` plus the byte order mark, minus NEL (U+0085), which
/// is `White_Space` but not an ECMAScript line terminator.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(is_trimmed)
}

fn is_trimmed(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// True when `s` holds exactly one `char` (Unicode scalar value).
pub fn is_single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{Element, Other, Text};

    #[test]
    fn test_extract_text_leaf() {
        assert_eq!(extract_text(&Node::text("abc")), "abc");
        assert_eq!(extract_text(&Node::Text(Text::default())), "");
    }

    #[test]
    fn test_extract_text_flattens_nesting() {
        let anchor = Node::element(Element::new("a").with_children(vec![
            Node::text(" "),
            Node::element(Element::new("em").with_children(vec![Node::element(
                Element::new("strong").with_children(vec![Node::text("×")]),
            )])),
            Node::text("\n"),
        ]));
        assert_eq!(extract_text(&anchor), " ×\n");
    }

    #[test]
    fn test_extract_text_concatenates_children() {
        let children = vec![
            Node::text("a"),
            Node::element(Element::new("b").with_children(vec![Node::text("c")])),
            Node::comment("ignored"),
            Node::text("d"),
        ];
        let parent = Node::element(Element::new("span").with_children(children.clone()));

        let joined: String = children.iter().map(extract_text).collect();
        assert_eq!(extract_text(&parent), joined);
        assert_eq!(joined, "acd");
    }

    #[test]
    fn test_extract_text_other_kinds() {
        let leaf = Node::Other(Other {
            kind: "raw".to_string(),
            value: Some("<b>x</b>".to_string()),
            ..Default::default()
        });
        assert_eq!(extract_text(&leaf), "");
        assert_eq!(extract_text(&Node::root(vec![Node::text("r")])), "r");
        assert_eq!(extract_text(&Node::element(Element::new("a"))), "");
    }

    #[test]
    fn test_trim_keeps_next_line() {
        assert_eq!(trim_text("\u{85}x"), "\u{85}x");
        assert_eq!(trim_text(" \u{85} "), "\u{85}");
    }

    #[test]
    fn test_trim_text() {
        assert_eq!(trim_text("  A \t\n"), "A");
        assert_eq!(trim_text("\u{FEFF}\u{00A0}x\u{3000}"), "x");
        assert_eq!(trim_text("a b"), "a b");
        assert_eq!(trim_text("   "), "");
        assert_eq!(trim_text("\u{2028}x\u{2029}"), "x");
    }

    #[test]
    fn test_is_single_char() {
        assert!(is_single_char("1"));
        assert!(is_single_char("×"));
        assert!(is_single_char("→"));
        assert!(!is_single_char(""));
        assert!(!is_single_char("ab"));
        // combining sequence: two scalars, one grapheme
        assert!(!is_single_char("e\u{0301}"));
    }
}
