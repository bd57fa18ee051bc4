//! Configuration sections.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Document format selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    /// Guess from extension, then from content (default).
    #[default]
    Auto,
    /// HTML document or fragment.
    Html,
    /// hast JSON tree.
    Json,
}

/// `[input]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Input document format.
    pub format: FormatChoice,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Write processed documents here instead of stdout.
    pub dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            dir: None,
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Print debug messages.
    pub verbose: bool,
}
