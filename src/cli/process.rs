//! `process` command: mark single-character links and write documents out.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use super::common::{collect_sources, output_paths};
use crate::config::CharlinkConfig;
use crate::document::{self, Source};
use crate::pipeline;
use crate::utils::plural_count;
use crate::vdom::Format;
use crate::{debug, log};

/// One processed document, ready to be written.
struct Rendered {
    source: Source,
    format: Format,
    content: String,
    marked: usize,
}

/// Process every input document.
///
/// Documents are processed in parallel; stdout output keeps input order.
/// With an output dir, nothing is written if two inputs map to the same file.
pub fn run_process(args: &super::ProcessArgs, config: &CharlinkConfig) -> Result<()> {
    let sources = collect_sources(&args.input.paths);

    let results: Vec<Result<Rendered>> = sources
        .par_iter()
        .map(|source| process_one(source, config))
        .collect();

    let total = results.len();
    let mut failed = 0;
    let mut docs = Vec::with_capacity(total);
    for result in results {
        match result {
            Ok(rendered) => docs.push(rendered),
            Err(e) => {
                failed += 1;
                log!("error"; "{:#}", e);
            }
        }
    }

    match &config.output.dir {
        Some(dir) => failed += write_all(dir, &docs)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            for doc in &docs {
                stdout
                    .write_all(doc.content.as_bytes())
                    .context("failed to write to stdout")?;
            }
            stdout.flush().ok();
        }
    }

    if failed > 0 {
        bail!("{failed} of {} failed", plural_count(total, "document"));
    }

    let marked: usize = docs.iter().map(|doc| doc.marked).sum();
    debug!("process"; "marked {} in {}", plural_count(marked, "anchor"),
        plural_count(total, "document"));
    Ok(())
}

/// Load, transform and render one document.
fn process_one(source: &Source, config: &CharlinkConfig) -> Result<Rendered> {
    let name = source.display_name();

    let doc = document::load(source, config.input.format)
        .with_context(|| format!("failed to load {name}"))?;
    let output = pipeline::process(doc);
    let content = document::render(&output.doc, config.output.pretty)
        .with_context(|| format!("failed to render {name}"))?;

    Ok(Rendered {
        source: source.clone(),
        format: output.doc.format,
        content,
        marked: output.marked,
    })
}

/// Write documents into `dir`, returning how many writes failed.
fn write_all(dir: &Path, docs: &[Rendered]) -> Result<usize> {
    let targets: Vec<_> = docs.iter().map(|doc| (&doc.source, doc.format)).collect();
    let paths = output_paths(dir, &targets)?;

    let failed = docs
        .par_iter()
        .zip(paths)
        .filter(|(doc, path)| {
            let written = document::write(path, &doc.content)
                .with_context(|| format!("failed to write {}", path.display()));
            match written {
                Ok(()) => {
                    debug!("process"; "{}: {}", doc.source.display_name(),
                        plural_count(doc.marked, "anchor"));
                    false
                }
                Err(e) => {
                    log!("error"; "{:#}", e);
                    true
                }
            }
        })
        .count();
    Ok(failed)
}
