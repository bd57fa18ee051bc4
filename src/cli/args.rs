//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::FormatChoice;

/// Mark single-character links in HTML and hast documents
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: charlink.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "charlink.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Mark single-character links and write the documents back out
    #[command(visible_alias = "p")]
    Process {
        #[command(flatten)]
        args: ProcessArgs,
    },

    /// List single-character links without writing anything
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Input selection shared by all commands.
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Documents to read. If omitted or `-`, reads stdin.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum)]
    pub format: Option<FormatChoice>,
}

/// Process command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ProcessArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory (default: print to stdout)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pretty: Option<bool>,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Commands {
    pub fn input(&self) -> &InputArgs {
        match self {
            Self::Process { args } => &args.input,
            Self::Check { args } => &args.input,
        }
    }
}
