//! Document transforms.
//!
//! Each transform takes a whole [`Document`](crate::vdom::Document), enabling
//! composition via [`Pipeline`](super::Pipeline).
//!
//! # Modules
//!
//! - `single_char`: marks anchors whose visible text is one character
//! - `text`: visible text extraction shared by transforms

mod single_char;
mod text;

pub use single_char::{
    MARKER, SingleCharLink, is_single_char_anchor, marked_anchors, marker_count, normalize_class,
    single_char_link,
};
pub use text::{extract_text, is_single_char, trim_text};
