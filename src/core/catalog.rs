// src/core/catalog.rs
//! The roast catalog: an ordered rule table plus per-level marker and
//! fallback pools. Rules are scanned top to bottom and the first match
//! wins, so narrower patterns sit above the broad ones they overlap
//! (e.g. the null-property rule above the generic array/index rule).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::default_catalog_path;
use crate::core::error::CatalogError;
use crate::core::types::{ByLevel, RoastRule, SavageLevel};

#[derive(Clone, Debug)]
pub struct RoastCatalog {
    rules: Vec<RoastRule>,
    markers: ByLevel<Vec<String>>,
    fallbacks: ByLevel<Vec<String>>,
}

impl RoastCatalog {
    /// Validates pool invariants once, up front. A catalog that
    /// constructs successfully can never fail a lookup at translate time.
    pub fn new(
        rules: Vec<RoastRule>,
        markers: ByLevel<Vec<String>>,
        fallbacks: ByLevel<Vec<String>>,
    ) -> Result<Self, CatalogError> {
        for level in SavageLevel::ALL {
            if markers.get(level).is_empty() {
                return Err(CatalogError::empty_pool("marker", level));
            }
            if fallbacks.get(level).is_empty() {
                return Err(CatalogError::empty_pool("fallback", level));
            }
        }
        Ok(Self { rules, markers, fallbacks })
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[RoastRule] {
        &self.rules
    }

    pub fn markers(&self, level: SavageLevel) -> &[String] {
        self.markers.get(level)
    }

    pub fn fallbacks(&self, level: SavageLevel) -> &[String] {
        self.fallbacks.get(level)
    }

    /// The hand-authored table. All data is literal, so construction
    /// cannot fail at runtime; the expect guards against editing
    /// mistakes in this file and fires at startup, not per call.
    pub fn builtin() -> Self {
        Self::new(builtin_rules(), builtin_markers(), builtin_fallbacks())
            .expect("builtin catalog data upholds the pool invariants")
    }

    /// Load from TOML file. Absent `[markers]`/`[fallbacks]` sections
    /// inherit the builtin pools.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let file: CatalogFile = toml::from_str(&txt)
            .with_context(|| format!("parsing {}", path.display()))?;

        // If user file defines no rules, fall back to builtin so the
        // roasts keep flowing.
        if file.rules.is_empty() {
            return Ok(Self::builtin());
        }

        let mut rules = Vec::with_capacity(file.rules.len());
        for entry in file.rules {
            let variants = ByLevel {
                mild: entry.mild,
                savage: entry.savage,
                nuclear: entry.nuclear,
            };
            rules.push(RoastRule::new(&entry.pattern, variants, entry.fix)?);
        }

        let markers = file.markers.map(PoolsEntry::into_by_level).unwrap_or_else(builtin_markers);
        let fallbacks = file.fallbacks.map(PoolsEntry::into_by_level).unwrap_or_else(builtin_fallbacks);
        Ok(Self::new(rules, markers, fallbacks)?)
    }

    /// Use ~/.roastlint/catalog.toml if present; otherwise built-in.
    pub fn from_user_default_or_builtin() -> Self {
        if let Some(p) = default_catalog_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(c) => return c,
                    Err(e) => {
                        eprintln!("(warn) failed loading {}: {}; using builtin catalog", p.display(), e);
                    }
                }
            }
        }
        Self::builtin()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "rule")]
    rules: Vec<RuleEntry>,
    markers: Option<PoolsEntry>,
    fallbacks: Option<PoolsEntry>,
}

#[derive(Deserialize)]
struct RuleEntry {
    pattern: String,
    #[serde(default)]
    mild: Vec<String>,
    #[serde(default)]
    savage: Vec<String>,
    #[serde(default)]
    nuclear: Vec<String>,
    fix: Option<String>,
}

#[derive(Deserialize)]
struct PoolsEntry {
    mild: Vec<String>,
    savage: Vec<String>,
    nuclear: Vec<String>,
}

impl PoolsEntry {
    fn into_by_level(self) -> ByLevel<Vec<String>> {
        ByLevel { mild: self.mild, savage: self.savage, nuclear: self.nuclear }
    }
}

fn rule(
    pattern: &str,
    mild: &[&str],
    savage: &[&str],
    nuclear: &[&str],
    fix: Option<&str>,
) -> RoastRule {
    // Builtin patterns are literals; a compile failure here is an
    // authoring defect in this file and should abort startup.
    RoastRule::new(
        pattern,
        ByLevel::from_slices(mild, savage, nuclear),
        fix.map(str::to_string),
    )
    .expect("builtin rule data is valid")
}

fn builtin_rules() -> Vec<RoastRule> {
    vec![
        // Null/undefined property reads
        rule(
            r#"cannot read propert(y|ies) ['"](\w+)['"] of (null|undefined)"#,
            &[
                "Yo, that property doesn't exist bestie 😅",
                "Umm... checking null maybe? Just saying 👀",
                "That variable ghosted you fr 👻",
            ],
            &[
                "Bro really tried to read from nothing 💀",
                "Your code said 'nah' to that property lmaooo 😂",
                "Null called, it wants its dignity back 🔥",
                "That's cap—nothing exists there homie 🧢",
            ],
            &[
                "DELETE THIS RIGHT NOW I'M BEGGING 💀💀💀",
                "Who hurt you? Add a null check you psychopath 😭",
                "This code belongs in the dumpster fire 🗑️🔥",
                "My grandma writes better code and she's dead 💀",
            ],
            Some("Add optional chaining: obj?.property"),
        ),
        // Undefined variable
        rule(
            r"(\w+) is not defined",
            &[
                "That variable doesn't exist yet friend 🤔",
                "Did you forget to declare that? Happens to everyone 😊",
            ],
            &[
                "Bro where's the declaration??? Not giving main character 💀",
                "This variable is MIA—did you even define it? 😂",
                "Undefined behavior? More like undefined brain cell activity 🧠❌",
            ],
            &[
                "WHAT VARIABLE?! THERE IS NO VARIABLE!! 😱",
                "The audacity to use something that doesn't exist 🤡",
                "Your IDE been screaming but you don't listen 📢💀",
            ],
            Some("Declare the variable first: let varName = value;"),
        ),
        // Runaway loops / recursion
        rule(
            r"(infinite loop|maximum call stack|too much recursion)",
            &[
                "Your loop's running forever... might wanna check that 🔄",
                "That's an infinite situation right there 😬",
            ],
            &[
                "Your loop ghosted the exit condition 💀",
                "Bro's computer is STRUGGLING—fix that loop fr 🔥",
                "That loop said 'ima run forever' and meant it 😂",
                "This code running longer than a CVS receipt 🧾💀",
            ],
            &[
                "YOU'RE KILLING MY CPU STOP IT 🚨🚨🚨",
                "This loop more infinite than my disappointment 💀",
                "Task Manager bout to end YOU not the process 😭",
            ],
            Some("Add a proper exit condition or break statement"),
        ),
        // Type errors
        rule(
            r"(type|TypeError|is not a function)",
            &[
                "Wrong type there buddy 🎯",
                "Type mismatch vibes... check your data 📊",
            ],
            &[
                "TypeScript literally TOLD you this would happen 💀",
                "That's not even the right type fam 😂",
                "You're giving string energy to a number function 🔥",
                "Type error hit different when you ignore the warnings 🧢",
            ],
            &[
                "USE TYPESCRIPT YOU ABSOLUTE MENACE 😤",
                "The types are fighting and your code lost 💀💀",
                "This isn't even the right type planet 🌍❌",
            ],
            Some("Check types: typeof variable === 'expected'"),
        ),
        // Syntax errors
        rule(
            r"(unexpected token|unexpected identifier|syntax error)",
            &[
                "Syntax looking sus right there 👀",
                "Check your brackets friend 🔍",
            ],
            &[
                "Your syntax is BUSSIN... in a bad way 💀",
                "Bro forgot how to write code apparently 😂",
                "That syntax more broken than my sleep schedule 🔥",
                "This ain't it chief—missing a bracket somewhere 🧢",
            ],
            &[
                "DID YOU CLOSE YOUR BRACKETS?!?! 😱😱",
                "This looks like you coded with your eyes closed 💀",
                "Copy-paste broke you fr 📋❌",
            ],
            Some("Check for missing brackets, commas, or semicolons"),
        ),
        // Array/index trouble
        rule(
            r"(cannot read property|undefined index|out of bounds)",
            &[
                "That index doesn't exist in the array 📝",
                "Array bounds exceeded homie 🚫",
            ],
            &[
                "You're reaching for air—that index ain't there 💀",
                "Array said 'nothing to see here' 😂",
                "Out of bounds? More like out of your mind 🔥",
            ],
            &[
                "ARRAYS START AT ZERO NOT ONE 🗣️🗣️🗣️",
                "You really thought element 100 existed in a 5-item array 🤡",
            ],
            Some("Check array length before accessing: if (i < arr.length)"),
        ),
        // Promise / async trouble
        rule(
            r"(unhandled promise|promise rejection|await)",
            &[
                "Promise rejected... might wanna catch that 🎣",
                "Async issues detected 🔄",
            ],
            &[
                "Your promise got rejected harder than a bad pickup line 💀",
                "Catch that promise or catch these hands 😂",
                "Unhandled rejection giving 'I give up' energy 🔥",
            ],
            &[
                "TRY-CATCH EXISTS FOR A REASON USE IT 😤",
                "This promise rejection hitting different 💀💀",
            ],
            Some("Use try-catch or .catch() to handle promise rejections"),
        ),
        // Missing modules / imports
        rule(
            r"(cannot find module|module not found|import)",
            &[
                "That module isn't installed yet 📦",
                "Import path looking wrong bestie 🛤️",
            ],
            &[
                "Did you npm install or just hope it worked? 💀",
                "Module said 'I don't exist' and dipped 😂",
                "That import path more lost than me in math class 🔥",
            ],
            &[
                "RUN NPM INSTALL YOU DONUT 🍩💀",
                "The module is in node_modules not your imagination 😭",
            ],
            Some("Run: npm install <package-name>"),
        ),
        // Division by zero
        rule(
            r"(division by zero|divide by zero|infinity)",
            &[
                "Can't divide by zero friend 🧮",
                "Math says no to that division 🚫",
            ],
            &[
                "You really tried to divide by zero??? 💀",
                "Math teachers everywhere just felt a disturbance 😂",
                "That's mathematically mid behavior 🔥",
            ],
            &[
                "ELEMENTARY MATH FAILED YOU 🤡🤡🤡",
                "Zero called, it doesn't want your division 📞💀",
            ],
            Some("Add check: if (divisor !== 0)"),
        ),
    ]
}

fn builtin_markers() -> ByLevel<Vec<String>> {
    ByLevel::from_slices(
        &["😅", "😊", "🤔", "👀", "😬", "🔍"],
        &["💀", "😂", "🔥", "🧢", "👻", "🗣️"],
        &["💀💀💀", "😭", "🚨", "🤡", "😱", "🗑️"],
    )
}

fn builtin_fallbacks() -> ByLevel<Vec<String>> {
    ByLevel::from_slices(
        &[
            "Something went wrong... you got this though! 💪",
            "Error detected, but you'll fix it 😊",
        ],
        &[
            "Not sure what you did but it's broken 💀",
            "Your code said 'nah I'm out' 😂",
            "This error different—still broken tho 🔥",
        ],
        &[
            "WHAT DID YOU DO?!?! 😱😱😱",
            "This error so rare even Stack Overflow gave up 💀",
            "Congratulations, you broke it in a new way 🏆💀",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_upholds_pool_invariants() {
        let catalog = RoastCatalog::builtin();
        assert_eq!(catalog.rules().len(), 9);
        for rule in catalog.rules() {
            for level in SavageLevel::ALL {
                assert!(
                    !rule.variants(level).is_empty(),
                    "rule `{}` missing {} variants",
                    rule.pattern(),
                    level
                );
            }
        }
        for level in SavageLevel::ALL {
            assert!(!catalog.markers(level).is_empty());
            assert!(!catalog.fallbacks(level).is_empty());
        }
    }

    #[test]
    fn null_property_rule_precedes_array_rule() {
        // Both patterns match "cannot read property ..."; evaluation
        // order decides which roast the user sees.
        let catalog = RoastCatalog::builtin();
        let null_idx = catalog
            .rules()
            .iter()
            .position(|r| r.pattern().contains("null|undefined"))
            .expect("null rule present");
        let array_idx = catalog
            .rules()
            .iter()
            .position(|r| r.pattern().contains("out of bounds"))
            .expect("array rule present");
        assert!(null_idx < array_idx);
    }

    #[test]
    fn empty_marker_pool_is_a_construction_fault() {
        let mut markers = builtin_markers();
        markers.savage.clear();
        let err = RoastCatalog::new(builtin_rules(), markers, builtin_fallbacks())
            .expect_err("empty savage marker pool");
        assert_eq!(err.to_string(), "Empty marker pool for level savage");
    }
}
