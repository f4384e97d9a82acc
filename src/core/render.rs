// src/core/render.rs
//! Terminal presentation of roast results. The engine never formats;
//! everything user-facing is assembled here so the CLI and any future
//! host surface share one layout.

use colored::Colorize;

use crate::core::types::RoastMatch;

const DEFAULT_FIX_DECORATED: &str = "Check the docs bestie";
const DEFAULT_FIX_PLAIN: &str = "Check the docs";

/// Multi-line block for a classified diagnostic: roast, fix hint,
/// untouched original.
pub fn render_match(m: &RoastMatch, decorations: bool) -> String {
    if decorations {
        format!(
            "{} {}\n💡 {} {}\n🤓 {} {}",
            m.roast.bold(),
            m.marker,
            "Fix:".yellow(),
            m.fix_suggestion.as_deref().unwrap_or(DEFAULT_FIX_DECORATED),
            "Original:".dimmed(),
            m.original,
        )
    } else {
        format!(
            "{}\n{} {}\n{} {}",
            m.roast.bold(),
            "Fix:".yellow(),
            m.fix_suggestion.as_deref().unwrap_or(DEFAULT_FIX_PLAIN),
            "Original:".dimmed(),
            m.original,
        )
    }
}

/// Block for the no-match path: generic roast plus the original text, so
/// the user never loses information to the bit.
pub fn render_fallback(roast: &str, original: &str, decorations: bool) -> String {
    if decorations {
        format!("{}\n🤓 {} {}", roast.bold(), "Original:".dimmed(), original)
    } else {
        format!("{}\n{} {}", roast.bold(), "Original:".dimmed(), original)
    }
}
