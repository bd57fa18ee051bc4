//! Document tree.
//!
//! A small owned tree modelled after hast: element, text, and everything else
//! (root, comment, doctype, ...) folded into [`Other`].
//!
//! # Modules
//!
//! - `attrs`: ordered attribute map and value shapes
//! - `json`: hast JSON reading/writing
//! - `html`: HTML parsing (via `tl`) and rendering

mod attrs;
pub mod html;
pub mod json;

pub use attrs::{AttrValue, Attrs, Token};

/// Node fields with no dedicated slot (`position`, `data`, ...), kept verbatim.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Source format of a document, decides how it is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Json,
}

impl Format {
    /// Name of the class attribute in this format.
    pub const fn class_attr(self) -> &'static str {
        match self {
            Self::Html => "class",
            Self::Json => "className",
        }
    }
}

/// A parsed document: the tree plus the format it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Node,
    pub format: Format,
}

impl Document {
    pub fn new(root: Node, format: Format) -> Self {
        Self { root, format }
    }
}

// =============================================================================
// Nodes
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
    Other(Other),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    /// `None` when the node carries no attribute set at all.
    pub attrs: Option<Attrs>,
    pub children: Vec<Node>,
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    pub value: Option<String>,
    pub extra: Extra,
}

/// Any node that is neither an element nor text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Other {
    /// unist `type` (`root`, `comment`, `doctype`, ...)
    pub kind: String,
    pub value: Option<String>,
    pub children: Vec<Node>,
    pub extra: Extra,
}

impl Node {
    pub fn element(elem: Element) -> Self {
        Self::Element(Box::new(elem))
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text {
            value: Some(value.into()),
            ..Default::default()
        })
    }

    pub fn root(children: Vec<Node>) -> Self {
        Self::Other(Other {
            kind: "root".to_string(),
            children,
            ..Default::default()
        })
    }

    pub fn comment(value: impl Into<String>) -> Self {
        Self::Other(Other {
            kind: "comment".to_string(),
            value: Some(value.into()),
            ..Default::default()
        })
    }

    pub fn doctype() -> Self {
        Self::Other(Other {
            kind: "doctype".to_string(),
            ..Default::default()
        })
    }

    /// unist type name.
    pub fn kind(&self) -> &str {
        match self {
            Self::Element(_) => "element",
            Self::Text(_) => "text",
            Self::Other(other) => &other.kind,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(elem) => &elem.children,
            Self::Other(other) => &other.children,
            Self::Text(_) => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Element(elem) => Some(&mut elem.children),
            Self::Other(other) => Some(&mut other.children),
            Self::Text(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(elem) => Some(elem),
            _ => None,
        }
    }
}

impl Element {
    /// Element without an attribute set.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = Some(attrs);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.as_ref()?.get(name)
    }

    /// Attribute set, created empty if missing.
    pub fn attrs_mut(&mut self) -> &mut Attrs {
        self.attrs.get_or_insert_with(Attrs::new)
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Visit every node in depth-first pre-order, root included.
///
/// The callback runs on a node before its children are entered, so children
/// it leaves in place are still visited.
pub fn walk_mut<F>(node: &mut Node, f: &mut F)
where
    F: FnMut(&mut Node),
{
    f(node);
    if let Some(children) = node.children_mut() {
        for child in children.iter_mut() {
            walk_mut(child, f);
        }
    }
}

/// Read-only depth-first pre-order walk.
pub fn walk<'a, F>(node: &'a Node, f: &mut F)
where
    F: FnMut(&'a Node),
{
    f(node);
    for child in node.children() {
        walk(child, f);
    }
}

/// Run `f` on every element with the given tag.
pub fn modify_by_tag<F>(root: &mut Node, tag: &str, mut f: F)
where
    F: FnMut(&mut Element),
{
    walk_mut(root, &mut |node| {
        if let Node::Element(elem) = node
            && elem.is_tag(tag)
        {
            f(elem);
        }
    });
}
