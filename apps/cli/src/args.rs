//! # CLI Argument Definitions
//!
//! Command-line structure of the `csc` tool, declared with the `clap` derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "csc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and normalize Content Sources API payloads")]
pub struct Cli {
    /// Configuration file (defaults to `csc.toml` in the working directory, if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the known wire shapes and their keys
    Models {},
    /// Decode a JSON payload through a wire shape and print it re-encoded
    Decode {
        /// Shape name, e.g. `ApiFeature` or `api-upload`
        model: String,
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Indent the output (overrides `output.pretty`)
        #[arg(long)]
        pretty: bool,
    },
}
