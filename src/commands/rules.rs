use colored::Colorize;

use crate::core::catalog::RoastCatalog;
use crate::core::types::SavageLevel;

/// Dump the active catalog: rules in evaluation order, then the marker
/// pools. Useful when curating a ~/.roastlint/catalog.toml override.
pub fn main() -> anyhow::Result<()> {
    let catalog = RoastCatalog::from_user_default_or_builtin();
    for (i, rule) in catalog.rules().iter().enumerate() {
        println!("{:>2}. {}", i + 1, rule.pattern().bright_white());
        if let Some(fix) = rule.fix_suggestion() {
            println!("    {} {}", "fix:".yellow(), fix);
        }
    }
    println!();
    for level in SavageLevel::ALL {
        println!(
            "{} {}",
            format!("{}:", level).bold(),
            catalog.markers(level).join(" ")
        );
    }
    Ok(())
}
