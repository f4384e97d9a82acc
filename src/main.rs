mod cli;
mod commands;
mod config; // resolve_config_path, RoastConfig
mod core;

use clap::Parser; // trait import enables RoastCli::parse()

use crate::cli::{Command, RoastCli};
use crate::config::{resolve_config_path, RoastConfig};

fn main() -> anyhow::Result<()> {
    let args = RoastCli::parse();

    let cfg_path = resolve_config_path(&args.config);
    let cfg = RoastConfig::load_or_default(cfg_path.as_deref());

    // CLI flags win over the config file.
    let level = args.level.unwrap_or(cfg.level);
    let decorations = cfg.decorations && !args.no_decorations;

    // Backward compatibility: `roastlint "<message>"` behaves like roast.
    if args.cmd.is_none() {
        if let Some(msg) = args.message_pos {
            return commands::roast::main_with_opts(Some(msg), level, decorations, cfg.enabled);
        }
    }

    match args.cmd {
        Some(Command::Roast { message }) => {
            commands::roast::main_with_opts(message, level, decorations, cfg.enabled)
        }
        Some(Command::Rules) => commands::rules::main(),
        // No subcommand, no message: filter stdin.
        None => commands::roast::main_with_opts(None, level, decorations, cfg.enabled),
    }
}
