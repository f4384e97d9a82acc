//! Core module tree for the roastlint translation engine.
//! Only declare modules that exist in the src/core/ directory.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod render;
pub mod types;

pub use catalog::RoastCatalog;
pub use engine::RoastEngine;
pub use types::{RoastMatch, RoastRule, SavageLevel};
