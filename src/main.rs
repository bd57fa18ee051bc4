//! charlink - mark single-character links in HTML and hast documents.

use anyhow::Result;
use charlink::cli::{Cli, Commands, check::run_check, process::run_process};
use charlink::config::CharlinkConfig;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = CharlinkConfig::load(&cli)?;

    match &cli.command {
        Commands::Process { args } => run_process(args, &config),
        Commands::Check { args } => run_check(args, &config),
    }
}
