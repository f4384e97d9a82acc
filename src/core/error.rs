use std::fmt;

use crate::core::types::SavageLevel;

/// Catalog-construction faults. These surface once, when a catalog is
/// built, never per translate call.
#[derive(Debug)]
pub enum CatalogError {
    BadPattern(String, String),
    EmptyVariants(String, SavageLevel),
    EmptyPool(&'static str, SavageLevel),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::BadPattern(pattern, reason) => {
                write!(f, "Bad Pattern `{}`: {}", pattern, reason)
            }
            CatalogError::EmptyVariants(pattern, level) => {
                write!(f, "Rule `{}` has no {} variants", pattern, level)
            }
            CatalogError::EmptyPool(pool, level) => {
                write!(f, "Empty {} pool for level {}", pool, level)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    pub fn bad_pattern(pattern: &str, reason: &str) -> Self {
        CatalogError::BadPattern(pattern.to_string(), reason.to_string())
    }
    pub fn empty_variants(pattern: &str, level: SavageLevel) -> Self {
        CatalogError::EmptyVariants(pattern.to_string(), level)
    }
    pub fn empty_pool(pool: &'static str, level: SavageLevel) -> Self {
        CatalogError::EmptyPool(pool, level)
    }
}
