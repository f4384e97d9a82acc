use std::io::{self, BufRead};

use crate::core::catalog::RoastCatalog;
use crate::core::engine::RoastEngine;
use crate::core::render::{render_fallback, render_match};
use crate::core::types::SavageLevel;

pub fn main_with_opts(
    message: Option<String>,
    level: SavageLevel,
    decorations: bool,
    enabled: bool,
) -> anyhow::Result<()> {
    let engine = RoastEngine::new(RoastCatalog::from_user_default_or_builtin());
    match message {
        Some(msg) => roast_one(&engine, &msg, level, decorations, enabled),
        None => roast_stdin(&engine, level, decorations, enabled),
    }
}

/// Single-message mode always answers with a roast: classified when a
/// rule matches, generic fallback otherwise.
fn roast_one(
    engine: &RoastEngine,
    message: &str,
    level: SavageLevel,
    decorations: bool,
    enabled: bool,
) -> anyhow::Result<()> {
    if !enabled {
        println!("{}", message);
        return Ok(());
    }
    match engine.translate(message, level) {
        Some(m) => println!("{}", render_match(&m, decorations)),
        None => {
            let roast = engine.fallback_roast(level);
            println!("{}", render_fallback(&roast, message, decorations));
        }
    }
    Ok(())
}

/// Filter mode for piped tool output (`cargo build 2>&1 | roastlint roast`):
/// lines the catalog classifies get roasted, everything else passes
/// through untouched so the surrounding build log stays readable.
fn roast_stdin(
    engine: &RoastEngine,
    level: SavageLevel,
    decorations: bool,
    enabled: bool,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !enabled {
            println!("{}", line);
            continue;
        }
        match engine.translate(&line, level) {
            Some(m) => println!("{}", render_match(&m, decorations)),
            None => println!("{}", line),
        }
    }
    Ok(())
}
