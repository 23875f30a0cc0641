//! Command-line interface definitions for `envcfg-keys`.

use clap::{Parser, Subcommand, ValueEnum};

/// Output formats supported by `envcfg-keys`.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per operand.
    #[default]
    Text,
    /// A JSON array with one object per operand.
    Json,
}

/// Parsed CLI arguments for `envcfg-keys`.
#[derive(Debug, Parser)]
#[command(name = "envcfg-keys")]
#[command(about = "Show how envcfg splits identifiers and derives environment keys")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Subcommands of `envcfg-keys`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split identifiers into words.
    Split {
        /// Identifiers to split, such as `HostIP` or `bad_PATH`.
        #[arg(required = true, value_name = "IDENT")]
        identifiers: Vec<String>,
    },
    /// Derive environment keys for dotted field paths.
    Key {
        /// Prefix prepended verbatim to every key.
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,
        /// Field paths such as `HostIP` or `inner.foo`.
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<String>,
    },
}
