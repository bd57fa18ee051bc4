//! `check` command: list single-character links without writing anything.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::{Result, bail};
use owo_colors::{OwoColorize, Stream};
use rayon::prelude::*;

use super::CheckArgs;
use super::common::collect_sources;
use crate::config::CharlinkConfig;
use crate::document;
use crate::pipeline::transform::{extract_text, is_single_char_anchor, trim_text};
use crate::utils::{plural_count, plural_s};
use crate::vdom::{AttrValue, Node, walk};
use crate::log;

/// A single-character anchor found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub href: Option<String>,
    pub text: String,
}

/// Findings grouped by document.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub documents: BTreeMap<String, Vec<Finding>>,
    pub scanned: usize,
}

impl CheckReport {
    pub fn link_count(&self) -> usize {
        self.documents.values().map(Vec::len).sum()
    }

    /// Print every finding to stderr, grouped by document.
    pub fn print(&self) {
        for (name, findings) in &self.documents {
            eprintln!("[{}]", name.if_supports_color(Stream::Stderr, |n| n.cyan()));
            for finding in findings {
                let href = finding.href.as_deref().unwrap_or("(no href)");
                eprintln!(
                    "{} {:?} {}",
                    "→".if_supports_color(Stream::Stderr, |a| a.green()),
                    finding.text,
                    href.if_supports_color(Stream::Stderr, |h| h.dimmed())
                );
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let links = self.link_count();
        let docs = self.documents.len();
        write!(
            f,
            "{} single-character link{} in {} of {}",
            links.if_supports_color(Stream::Stderr, |n| n.bold()),
            plural_s(links),
            docs,
            plural_count(self.scanned, "document")
        )
    }
}

/// Collect the anchors that `process` would mark.
pub fn find_single_char_links(root: &Node) -> Vec<Finding> {
    let mut findings = Vec::new();
    walk(root, &mut |node| {
        if let Node::Element(elem) = node
            && is_single_char_anchor(elem)
        {
            let href = match elem.get_attr("href") {
                Some(AttrValue::Str(s)) => Some(s.clone()),
                _ => None,
            };
            let text: String = elem.children.iter().map(extract_text).collect();
            findings.push(Finding {
                href,
                text: trim_text(&text).to_string(),
            });
        }
    });
    findings
}

/// Scan every input document and print a report.
pub fn run_check(args: &CheckArgs, config: &CharlinkConfig) -> Result<()> {
    let sources = collect_sources(&args.input.paths);

    let results: Vec<_> = sources
        .par_iter()
        .map(|source| {
            let found = document::load(source, config.input.format)
                .map(|doc| find_single_char_links(&doc.root));
            (source.display_name(), found)
        })
        .collect();

    let mut report = CheckReport {
        scanned: results.len(),
        ..CheckReport::default()
    };
    let mut failed = 0;

    for (name, found) in results {
        match found {
            Ok(findings) if findings.is_empty() => {}
            Ok(findings) => {
                report.documents.insert(name, findings);
            }
            Err(e) => {
                failed += 1;
                log!("error"; "{}: {}", name, e);
            }
        }
    }

    if !args.quiet {
        report.print();
    }
    log!("check"; "{}", report);

    if failed > 0 {
        bail!("{} could not be read", plural_count(failed, "document"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdom::html;

    #[test]
    fn test_find_single_char_links() {
        let root = html::parse(
            r#"<p><a href="/a">x</a> <a href="/b">xy</a> <span>z</span> <a> <b>&rarr;</b> </a></p>"#,
        )
        .unwrap();

        let found = find_single_char_links(&root);
        assert_eq!(
            found,
            vec![
                Finding {
                    href: Some("/a".to_string()),
                    text: "x".to_string(),
                },
                Finding {
                    href: None,
                    text: "→".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_find_does_not_mutate() {
        let root = html::parse(r#"<a href="/">1</a>"#).unwrap();
        let before = root.clone();
        find_single_char_links(&root);
        assert_eq!(root, before);
    }

    #[test]
    fn test_report_summary() {
        owo_colors::set_override(false);
        let mut report = CheckReport {
            scanned: 3,
            ..CheckReport::default()
        };
        report.documents.insert(
            "a.html".to_string(),
            vec![Finding {
                href: None,
                text: "1".to_string(),
            }],
        );
        assert_eq!(
            report.to_string(),
            "1 single-character link in 1 of 3 documents"
        );
    }
}
