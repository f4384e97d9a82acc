// src/core/engine.rs
//! First-match-wins translation over the roast catalog.

use rand::Rng;

use crate::core::catalog::RoastCatalog;
use crate::core::types::{RoastMatch, SavageLevel};

/// "Pick one of n": returns an index for a pool of `n` candidates.
/// The engine reduces the result modulo the pool size, so any total
/// function works; tests inject constants to pin output.
pub type Picker = Box<dyn Fn(usize) -> usize + Send + Sync>;

pub struct RoastEngine {
    catalog: RoastCatalog,
    picker: Picker,
}

impl RoastEngine {
    /// Engine with a uniform thread-local RNG picker.
    pub fn new(catalog: RoastCatalog) -> Self {
        Self::with_picker(catalog, Box::new(|n| rand::thread_rng().gen_range(0..n)))
    }

    pub fn with_picker(catalog: RoastCatalog, picker: Picker) -> Self {
        Self { catalog, picker }
    }

    pub fn catalog(&self) -> &RoastCatalog {
        &self.catalog
    }

    /// Classify `message` against the catalog, in order. `None` means no
    /// rule matched; callers follow up with [`RoastEngine::fallback_roast`].
    /// Any message goes, including empty; the level is a closed enum so
    /// there is nothing to validate on that side.
    pub fn translate(&self, message: &str, level: SavageLevel) -> Option<RoastMatch> {
        let rule = self.catalog.rules().iter().find(|r| r.is_match(message))?;
        Some(RoastMatch {
            original: message.to_string(),
            roast: self.pick(rule.variants(level)).to_string(),
            fix_suggestion: rule.fix_suggestion().map(str::to_string),
            marker: self.pick(self.catalog.markers(level)).to_string(),
        })
    }

    /// Generic roast for messages nothing classified. Never fails.
    pub fn fallback_roast(&self, level: SavageLevel) -> String {
        self.pick(self.catalog.fallbacks(level)).to_string()
    }

    fn pick<'a>(&self, pool: &'a [String]) -> &'a str {
        // Pools are non-empty by catalog construction (see RoastCatalog::new).
        let idx = (self.picker)(pool.len()) % pool.len();
        &pool[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinned_engine(pick: usize) -> RoastEngine {
        RoastEngine::with_picker(RoastCatalog::builtin(), Box::new(move |_| pick))
    }

    #[test]
    fn translate_pins_first_variant_with_zero_picker() {
        let engine = pinned_engine(0);
        let m = engine
            .translate("Cannot read property 'foo' of undefined", SavageLevel::Mild)
            .expect("null rule matches");
        assert_eq!(m.roast, "Yo, that property doesn't exist bestie 😅");
        assert_eq!(m.marker, "😅");
        assert_eq!(m.fix_suggestion.as_deref(), Some("Add optional chaining: obj?.property"));
    }

    #[test]
    fn picker_result_wraps_around_pool_size() {
        // Mild pool for the undefined-variable rule has 2 entries; an
        // oversized pick lands back on index 1.
        let engine = pinned_engine(5);
        let m = engine
            .translate("x is not defined", SavageLevel::Mild)
            .expect("undefined-variable rule matches");
        assert_eq!(m.roast, "Did you forget to declare that? Happens to everyone 😊");
    }

    #[test]
    fn empty_message_never_classifies() {
        let engine = RoastEngine::new(RoastCatalog::builtin());
        assert!(engine.translate("", SavageLevel::Savage).is_none());
    }

    #[test]
    fn fallback_roast_comes_from_the_level_pool() {
        let engine = RoastEngine::new(RoastCatalog::builtin());
        for level in SavageLevel::ALL {
            let roast = engine.fallback_roast(level);
            assert!(
                engine.catalog().fallbacks(level).contains(&roast),
                "`{}` not in {} fallback pool",
                roast,
                level
            );
        }
    }
}
