//! Configuration management for `charlink.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                    |
//! |------------|--------------------------------------------|
//! | `[input]`  | Input format (auto, html, json)            |
//! | `[output]` | JSON pretty-printing, output directory     |
//! | `[log]`    | Verbose logging                            |
//!
//! The file is optional: without one every section takes its defaults.
//! CLI flags override values read from the file.

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{FormatChoice, InputConfig, LogConfig, OutputConfig};

use util::find_config_file;

use crate::{
    cli::{Cli, Commands, InputArgs},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing charlink.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharlinkConfig {
    /// Absolute path to the config file, empty when none was found
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl CharlinkConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; a missing file is not an
    /// error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => Self {
                root: cwd,
                ..Self::default()
            },
        };

        config.finalize(cli);
        config.validate()?;

        if config.config_path.as_os_str().is_empty() {
            debug!("config"; "no {} found, using defaults", cli.config.display());
        } else {
            debug!("config"; "loaded {}", config.config_path.display());
        }

        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {} ignored: {}", path.display(), ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply CLI options on top of file values.
    fn finalize(&mut self, cli: &Cli) {
        if cli.verbose {
            self.log.verbose = true;
        }
        crate::logger::set_verbose(self.log.verbose);

        self.apply_input_args(cli.command.input());
        if let Commands::Process { args } = &cli.command {
            Self::update_option(&mut self.output.pretty, args.pretty.as_ref());
            if let Some(dir) = &args.output {
                self.output.dir = Some(dir.clone());
            }
        }

        if let Some(dir) = &self.output.dir
            && dir.is_relative()
        {
            self.output.dir = Some(self.root.join(dir));
        }
    }

    fn apply_input_args(&mut self, args: &InputArgs) {
        Self::update_option(&mut self.input.format, args.format.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Check values that can only be judged against the filesystem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.output.dir
            && dir.is_file()
        {
            return Err(ConfigError::Validation(format!(
                "output.dir `{}` is an existing file",
                dir.display()
            )));
        }
        Ok(())
    }
}

/// Parse a config snippet, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> CharlinkConfig {
    let (parsed, ignored) = CharlinkConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}
