//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod process;

pub use args::{CheckArgs, Cli, Commands, InputArgs, ProcessArgs};
