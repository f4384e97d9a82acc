use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::SavageLevel;

#[derive(Debug, Parser)]
#[command(
    name = "roastlint",
    about = "roastlint — rewrite compiler/linter diagnostics as roasts",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct RoastCli {
    /// Global: roast intensity (overrides config; config default: savage)
    #[arg(long = "level", value_enum, global = true)]
    pub level: Option<SavageLevel>,

    /// Global: drop emoji markers and decorated gutters
    #[arg(long = "no-decorations", action = ArgAction::SetTrue, global = true)]
    pub no_decorations: bool,

    /// Global: path to config (TOML); default: ~/.roastlint/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    // Back-compat positional: `roastlint "<message>"` acts like `roast`.
    #[arg(value_name = "message_pos")]
    pub message_pos: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Roast one diagnostic message, or filter stdin line by line
    Roast {
        /// Diagnostic text; omit to read lines from stdin
        #[arg(value_name = "MESSAGE")]
        message: Option<String>,
    },
    /// List catalog rules in evaluation order
    Rules,
}
