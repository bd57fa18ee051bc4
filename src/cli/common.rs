//! Helpers shared by CLI commands.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::document::Source;
use crate::vdom::Format;

/// Turn positional paths into sources. No paths means stdin.
pub fn collect_sources(paths: &[PathBuf]) -> Vec<Source> {
    if paths.is_empty() {
        return vec![Source::Stdin];
    }
    paths.iter().map(|p| Source::from_arg(p)).collect()
}

/// Output file for `source` inside `dir`.
///
/// Files keep their name; stdin becomes `stdin.html` / `stdin.json`.
pub fn output_path(dir: &Path, source: &Source, format: Format) -> PathBuf {
    match source {
        Source::File(path) => match path.file_name() {
            Some(name) => dir.join(name),
            None => dir.join(stdin_name(format)),
        },
        Source::Stdin => dir.join(stdin_name(format)),
    }
}

/// Output file for every document, in input order.
///
/// Fails when two documents would land on the same file, so nothing is
/// silently overwritten.
pub fn output_paths(dir: &Path, docs: &[(&Source, Format)]) -> Result<Vec<PathBuf>> {
    let mut seen: HashMap<PathBuf, &Source> = HashMap::with_capacity(docs.len());
    let mut paths = Vec::with_capacity(docs.len());

    for &(source, format) in docs {
        let path = output_path(dir, source, format);
        if let Some(previous) = seen.insert(path.clone(), source) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display_name(),
                source.display_name(),
                path.display()
            );
        }
        paths.push(path);
    }
    Ok(paths)
}

fn stdin_name(format: Format) -> &'static str {
    match format {
        Format::Html => "stdin.html",
        Format::Json => "stdin.json",
    }
}
