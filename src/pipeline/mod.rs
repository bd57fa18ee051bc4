//! Document processing pipeline.
//!
//! Transforms are composed with [`Pipeline`]:
//!
//! ```text
//! Document ──pipe(t1)──> Document ──pipe(t2)──> ... ──into_inner()──> Document
//! ```
//!
//! Anything implementing [`Transform`] can be piped, including plain closures
//! over the root node.
//!
//! - `process()`: the pipeline the CLI runs on every document

pub mod transform;

use crate::vdom::{Document, Node};
use crate::{debug, debug_do};

pub use transform::{SingleCharLink, marked_anchors, single_char_link};

// =============================================================================
// Transform
// =============================================================================

/// A document-to-document step.
pub trait Transform {
    fn transform(self, doc: Document) -> Document;
}

impl<F> Transform for F
where
    F: FnOnce(&mut Node),
{
    fn transform(self, mut doc: Document) -> Document {
        self(&mut doc.root);
        doc
    }
}

/// Chains transforms over one document.
pub struct Pipeline {
    doc: Document,
}

impl Pipeline {
    pub fn new(doc: Document) -> Self {
        Self { doc }
    }

    pub fn pipe<T: Transform>(self, transform: T) -> Self {
        Self {
            doc: transform.transform(self.doc),
        }
    }

    /// Look at the intermediate document when `cond` holds.
    pub fn inspect_if<F>(self, cond: bool, f: F) -> Self
    where
        F: FnOnce(&Document),
    {
        if cond {
            f(&self.doc);
        }
        self
    }

    pub fn into_inner(self) -> Document {
        self.doc
    }
}

// =============================================================================
// Processing
// =============================================================================

/// Result of running the pipeline on one document.
#[derive(Debug)]
pub struct ProcessOutput {
    pub doc: Document,
    /// Marker tokens added by this run.
    pub marked: usize,
}

/// Run the marker pipeline over `doc`.
pub fn process(doc: Document) -> ProcessOutput {
    let before = count_markers(&doc.root);

    let doc = Pipeline::new(doc)
        .pipe(single_char_link())
        .inspect_if(crate::logger::is_verbose(), |doc| {
            debug!("process"; "{} marked anchors in document", marked_anchors(&doc.root).len());
        })
        .into_inner();

    let marked = count_markers(&doc.root).saturating_sub(before);
    debug_do! {
        if before > 0 {
            debug!("process"; "document already carried {} markers", before);
        }
    }

    ProcessOutput { doc, marked }
}

fn count_markers(root: &Node) -> usize {
    marked_anchors(root)
        .into_iter()
        .map(transform::marker_count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::{Element, Format, json};

    fn doc_with(children: Vec<Node>) -> Document {
        Document::new(Node::root(children), Format::Json)
    }

    fn link(text: &str) -> Node {
        Node::element(Element::new("a").with_children(vec![Node::text(text)]))
    }

    #[test]
    fn test_pipe_closure() {
        let doc = Pipeline::new(doc_with(vec![]))
            .pipe(|root: &mut Node| root.children_mut().unwrap().push(Node::text("x")))
            .into_inner();
        assert_eq!(doc.root.children(), [Node::text("x")]);
    }

    #[test]
    fn test_pipe_order() {
        let doc = Pipeline::new(doc_with(vec![]))
            .pipe(|root: &mut Node| root.children_mut().unwrap().push(link("1")))
            .pipe(single_char_link())
            .into_inner();
        assert_eq!(marked_anchors(&doc.root).len(), 1);
    }

    #[test]
    fn test_inspect_if() {
        let mut seen = false;
        Pipeline::new(doc_with(vec![])).inspect_if(false, |_| seen = true);
        assert!(!seen);
        Pipeline::new(doc_with(vec![])).inspect_if(true, |_| seen = true);
        assert!(seen);
    }

    #[test]
    fn test_process_counts_new_markers() {
        let out = process(doc_with(vec![link("1"), link("22"), link(" ×")]));
        assert_eq!(out.marked, 2);

        let again = process(out.doc);
        assert_eq!(again.marked, 2);
        assert_eq!(count_markers(&again.doc.root), 4);
    }

    #[test]
    fn test_process_hast_json() {
        let root = json::parse(
            r#"{"type":"root","children":[
                {"type":"element","tagName":"a","properties":{"className":"foo"},
                 "children":[{"type":"text","value":" A "}]}]}"#,
        )
        .unwrap();
        let out = process(Document::new(root, Format::Json));

        let rendered = json::render(&out.doc.root, false).unwrap();
        assert!(rendered.contains(r#""className":["foo","single-char-link"]"#));
    }
}
