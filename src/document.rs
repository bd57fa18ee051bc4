//! Reading and writing documents.
//!
//! A document is either HTML or a hast JSON tree. The format is picked from
//! the configured choice, the file extension, or (for stdin) the first
//! non-whitespace character.

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::config::FormatChoice;
use crate::vdom::{Document, Format, html, json};

/// Errors while loading or writing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid hast JSON")]
    Json(#[from] serde_json::Error),

    #[error("HTML parsing failed: {0}")]
    Html(String),

    #[error("cannot tell the format of `{0}`, pass --format")]
    UnknownFormat(PathBuf),
}

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin.
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String, DocumentError> {
        match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| DocumentError::Io(PathBuf::from("-"), e))?;
                Ok(buf)
            }
            Self::File(path) => {
                fs::read_to_string(path).map_err(|e| DocumentError::Io(path.clone(), e))
            }
        }
    }
}

// =============================================================================
// Format detection
// =============================================================================

/// Decide the format of a document.
pub fn detect_format(
    choice: FormatChoice,
    source: &Source,
    content: &str,
) -> Result<Format, DocumentError> {
    match choice {
        FormatChoice::Html => return Ok(Format::Html),
        FormatChoice::Json => return Ok(Format::Json),
        FormatChoice::Auto => {}
    }

    if let Source::File(path) = source {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("html" | "htm" | "xhtml") => return Ok(Format::Html),
            Some("json") => return Ok(Format::Json),
            _ => {}
        }
    }

    match content.trim_start().chars().next() {
        Some('{') => Ok(Format::Json),
        Some('<') => Ok(Format::Html),
        _ => Err(DocumentError::UnknownFormat(match source {
            Source::Stdin => PathBuf::from("-"),
            Source::File(path) => path.clone(),
        })),
    }
}

/// Parse `content` in the given format.
pub fn parse_document(content: &str, format: Format) -> Result<Document, DocumentError> {
    let root = match format {
        Format::Html => html::parse(content).map_err(DocumentError::Html)?,
        Format::Json => json::parse(content)?,
    };
    Ok(Document::new(root, format))
}

/// Read and parse a document.
pub fn load(source: &Source, choice: FormatChoice) -> Result<Document, DocumentError> {
    let content = source.read()?;
    let format = detect_format(choice, source, &content)?;
    parse_document(&content, format)
}

/// Serialize a document in its own format.
pub fn render(doc: &Document, pretty: bool) -> Result<String, DocumentError> {
    match doc.format {
        Format::Html => Ok(html::render(&doc.root)),
        Format::Json => {
            let mut out = json::render(&doc.root, pretty)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Write a rendered document to `path`, creating parent directories.
pub fn write(path: &Path, content: &str) -> Result<(), DocumentError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| DocumentError::Io(parent.to_path_buf(), e))?;
    }
    fs::write(path, content).map_err(|e| DocumentError::Io(path.to_path_buf(), e))
}
