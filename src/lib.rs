//! charlink - mark single-character links for styling.
//!
//! Anchors whose visible text is a single character (`×`, `→`, `1`) are hard
//! to hit. This crate walks an HTML/hast document tree and appends the
//! [`MARKER`] class (`single-char-link`) to such anchors, so a stylesheet can
//! enlarge their clickable area.
//!
//! ```ignore
//! use charlink::{Pipeline, single_char_link};
//!
//! let doc = Pipeline::new(doc).pipe(single_char_link()).into_inner();
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod logger;
pub mod pipeline;
pub mod utils;
pub mod vdom;

pub use pipeline::transform::{MARKER, extract_text};
pub use pipeline::{Pipeline, SingleCharLink, Transform, single_char_link};
pub use vdom::{Document, Element, Format, Node};
