// src/core/types.rs
//! Shared data types for the roast translation core.

use std::fmt;

use clap::ValueEnum;
use regex::RegexBuilder;
use serde::Deserialize;

use crate::core::error::CatalogError;

/// How hard the roast hits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum SavageLevel {
    Mild,
    #[default]
    Savage,
    Nuclear,
}

impl SavageLevel {
    pub const ALL: [SavageLevel; 3] = [SavageLevel::Mild, SavageLevel::Savage, SavageLevel::Nuclear];

    pub fn as_str(self) -> &'static str {
        match self {
            SavageLevel::Mild => "mild",
            SavageLevel::Savage => "savage",
            SavageLevel::Nuclear => "nuclear",
        }
    }
}

impl fmt::Display for SavageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per savage level. Used for variant pools, marker pools, and
/// fallback pools alike.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByLevel<T> {
    pub mild: T,
    pub savage: T,
    pub nuclear: T,
}

impl<T> ByLevel<T> {
    pub fn get(&self, level: SavageLevel) -> &T {
        match level {
            SavageLevel::Mild => &self.mild,
            SavageLevel::Savage => &self.savage,
            SavageLevel::Nuclear => &self.nuclear,
        }
    }
}

impl ByLevel<Vec<String>> {
    pub(crate) fn from_slices(mild: &[&str], savage: &[&str], nuclear: &[&str]) -> Self {
        let own = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        Self { mild: own(mild), savage: own(savage), nuclear: own(nuclear) }
    }
}

/// One classification rule: a case-insensitive pattern plus the roast
/// variants it unlocks at each level, and an optional fix hint shared
/// across levels.
#[derive(Clone, Debug)]
pub struct RoastRule {
    matcher: regex::Regex,
    variants: ByLevel<Vec<String>>,
    fix_suggestion: Option<String>,
}

impl RoastRule {
    /// Compiles `pattern` case-insensitively and checks the per-level
    /// variant invariant. Rules that fail here never enter a catalog.
    pub fn new(
        pattern: &str,
        variants: ByLevel<Vec<String>>,
        fix_suggestion: Option<String>,
    ) -> Result<Self, CatalogError> {
        let matcher = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| CatalogError::bad_pattern(pattern, &e.to_string()))?;
        for level in SavageLevel::ALL {
            if variants.get(level).is_empty() {
                return Err(CatalogError::empty_variants(pattern, level));
            }
        }
        Ok(Self { matcher, variants, fix_suggestion })
    }

    /// Substring-style match anywhere in the message (never anchored).
    pub fn is_match(&self, message: &str) -> bool {
        self.matcher.is_match(message)
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    pub fn variants(&self, level: SavageLevel) -> &[String] {
        self.variants.get(level)
    }

    pub fn fix_suggestion(&self) -> Option<&str> {
        self.fix_suggestion.as_deref()
    }
}

/// What the engine hands back for a classified message. Owns all of its
/// strings; carries no reference into the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoastMatch {
    /// The input message, byte-for-byte.
    pub original: String,
    pub roast: String,
    pub fix_suggestion: Option<String>,
    pub marker: String,
}
